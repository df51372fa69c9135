//! Lazy frame wrappers for the observation data and its aggregations.

pub mod daily;
pub(crate) mod extract;
pub mod monthly;
pub mod observations;
pub mod windrose;
