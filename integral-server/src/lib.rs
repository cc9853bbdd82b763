//! # integral-server
//!
//! HTTP surface of the Integral Logistics Dashboard.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /ui/` | Embedded single-page dashboard |
//! | `GET /api/health` | Liveness probe |
//! | `GET /api/quadrants` | Quadrant and dataset catalog |
//! | `GET /api/status` | Whether a model is configured |
//! | `POST /api/analyze` | Run an analysis, reply with the full result |
//! | `GET /api/analyze/stream` | Run an analysis, stream progress as SSE |

pub mod config;
pub mod error;
pub mod rest;
pub mod web_ui;

pub use config::{SecurityConfig, ServerConfig};
pub use error::ApiError;
pub use rest::{AnalysisController, create_app};
