//! # integral-model
//!
//! Chat-completion backends for the Integral Logistics Dashboard.
//!
//! - [`OpenAIClient`] - OpenAI and OpenAI-compatible APIs
//! - [`MockLlm`] - In-process model for tests
//! - [`ModelHandle`] - The configured model, or why there is none
//!
//! ## Quick Start
//!
//! ```rust
//! use integral_model::{ModelHandle, openai::ModelSettings};
//!
//! let settings = ModelSettings::default();
//! let handle = ModelHandle::from_settings(&settings).unwrap();
//! // No key configured, so nothing will ever be sent.
//! assert!(!handle.is_ready());
//! ```

pub mod handle;
pub mod mock;
pub mod openai;
pub mod retry;

pub use handle::ModelHandle;
pub use mock::MockLlm;
pub use openai::{ModelSettings, OpenAIClient, OpenAIConfig};
pub use retry::{RetryConfig, execute_with_retry, is_retryable_error};
