pub mod checkpoint;
pub mod constants;
pub mod fork;
pub mod misc;
