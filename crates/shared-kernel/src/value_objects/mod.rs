// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod granularity;
pub mod reading;

pub use counts::ReadingCount;
pub use granularity::Granularity;
pub use reading::Reading;
