//! # integral-agent
//!
//! The analysis pipeline of the Integral Logistics Dashboard.
//!
//! - [`QuadrantAgent`] - Analyzes one quadrant's dataset with its own prompt
//! - [`OrchestratorAgent`] - Synthesizes the four analyses into one narrative
//! - [`Pipeline`] - Loads datasets, runs the agents and reports progress
//! - [`derive_dashboard`] - Chart presets chosen from the analysis texts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integral_agent::{Pipeline, PipelineConfig};
//! use integral_core::{CompleteSelection, DatasetVariant, NoopProgress};
//! use integral_dataset::EmbeddedDatasets;
//! use integral_model::{ModelHandle, ModelSettings};
//! use std::sync::Arc;
//!
//! # async fn run() -> integral_core::Result<()> {
//! let settings = ModelSettings::default().with_api_key(std::env::var("OPENAI_API_KEY").unwrap_or_default());
//! let pipeline = Pipeline::new(
//!     ModelHandle::from_settings(&settings)?,
//!     Arc::new(EmbeddedDatasets::new()),
//!     PipelineConfig::default(),
//! );
//! let result = pipeline
//!     .analyze(&CompleteSelection::uniform(DatasetVariant::Mixed), &NoopProgress)
//!     .await?;
//! println!("{}", result.integrated_analysis);
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod orchestrator;
pub mod pipeline;
pub mod preflight;
pub mod prompts;
mod quadrant_agent;

pub use dashboard::derive_dashboard;
pub use orchestrator::{
    ACTION_PLAN_FAILED, ACTION_PLAN_LABEL, OrchestratorAgent, SYNTHESIS_UNAVAILABLE, Synthesis,
};
pub use pipeline::{DEFAULT_TEMPERATURE, Pipeline, PipelineConfig};
pub use quadrant_agent::{QuadrantAgent, unavailable_placeholder};
