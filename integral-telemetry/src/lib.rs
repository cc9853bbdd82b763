//! # Integral Telemetry
//!
//! Observability for the dashboard pipeline using structured logging and
//! distributed tracing.
//!
//! ## Features
//! - Structured logging with `tracing` (pretty or JSON console output)
//! - OpenTelemetry span export over OTLP
//! - Span helpers for runs, stages, model calls and dataset loads
//!
//! ## Usage
//!
//! ```rust
//! use integral_telemetry::{init_telemetry, info, instrument};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("integral-dashboard")?;
//!
//!     #[instrument]
//!     async fn my_function() {
//!         info!("Function called");
//!     }
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Instrument, Span, debug, error, info, instrument, trace, warn};

pub use spans::*;

pub use init::{
    LogFormat, init_telemetry, init_telemetry_with_format, init_with_otlp, shutdown_telemetry,
};
