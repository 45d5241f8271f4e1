pub mod helpers;

use helpers::create_int_counter;
pub use prometheus_exporter::prometheus::IntCounter;

lazy_static::lazy_static! {
    pub static ref CHECKPOINT_INFO_CACHE_HIT: IntCounter = create_int_counter(
        "check_point_info_cache_hit",
        "The number of check point info requests that are present in the cache."
    );

    pub static ref CHECKPOINT_INFO_CACHE_MISS: IntCounter = create_int_counter(
        "check_point_info_cache_miss",
        "The number of check point info requests that aren't present in the cache."
    );
}
