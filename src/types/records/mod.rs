pub mod daily;
pub mod monthly;
pub mod observation;
pub mod summary;
pub mod windrose;
