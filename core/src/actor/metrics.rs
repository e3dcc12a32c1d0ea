mod shared_counters;

pub use self::shared_counters::*;
