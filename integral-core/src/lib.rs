//! # integral-core
//!
//! Core types for the Integral Logistics Dashboard.
//!
//! ## Overview
//!
//! - [`Quadrant`] / [`DatasetVariant`] / [`Selection`] - What the user picks
//! - [`Stage`] / [`ProgressSink`] / [`ProgressBoard`] - Per-stage progress of a run
//! - [`Llm`] / [`LlmRequest`] / [`LlmResponse`] - The chat-completion seam
//! - [`AnalysisResult`] / [`DashboardData`] - What a finished run produces
//! - [`IntegralError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use integral_core::{DatasetVariant, Quadrant, Selection};
//!
//! let selection = Selection::new()
//!     .with(Quadrant::Ul, DatasetVariant::Negative)
//!     .with(Quadrant::Ur, DatasetVariant::Positive)
//!     .with(Quadrant::Ll, DatasetVariant::Mixed)
//!     .with(Quadrant::Lr, DatasetVariant::Negative);
//!
//! assert!(selection.complete().is_ok());
//! ```

pub mod error;
pub mod model;
pub mod progress;
pub mod quadrant;
pub mod result;

pub use error::{IntegralError, Result};
pub use model::{
    FinishReason, GenerateContentConfig, Llm, LlmRequest, LlmResponse, Message, Role,
    UsageMetadata,
};
pub use progress::{
    NoopProgress, PENDING_MESSAGE, ProgressBoard, ProgressEvent, ProgressRecord, ProgressSink,
    Stage, StageStatus,
};
pub use quadrant::{CompleteSelection, DatasetVariant, Quadrant, Selection};
pub use result::{AgentSummaries, AnalysisResult, ChartSlice, DashboardData, WeeklyPoint};
