pub mod analysis;
pub mod catalog;

pub use analysis::AnalysisController;
