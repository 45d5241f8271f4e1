use prometheus_exporter::prometheus::{
    IntCounter, Opts, default_registry, register_int_counter_with_registry,
};

pub fn create_int_counter(name: &str, help: &str) -> IntCounter {
    let registry = default_registry();
    register_int_counter_with_registry!(Opts::new(name, help), registry)
        .expect("failed to create int counter")
}

/// Counter that is not attached to any registry, so its value is private to its owner.
pub fn create_unregistered_int_counter(name: &str, help: &str) -> IntCounter {
    IntCounter::new(name, help).expect("failed to create int counter")
}

pub fn inc_int_counter(counter: &IntCounter) {
    counter.inc()
}
