//! Converters: temperature, measurement units and Unix timestamps.

pub mod temperature;
pub mod timestamp;
pub mod units;
