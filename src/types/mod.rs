pub mod period;
pub mod records;
pub mod station;
