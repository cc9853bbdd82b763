pub mod analyze;
pub mod datasets;
pub mod serve;
