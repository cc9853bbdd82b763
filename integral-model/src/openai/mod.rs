//! OpenAI provider.
//!
//! Talks to `/chat/completions` directly over `reqwest`. Any API that speaks
//! the same wire format can be targeted through [`OpenAIConfig::with_base_url`].

mod client;
mod config;
pub mod convert;

pub use client::OpenAIClient;
pub use config::{
    DEFAULT_MODEL, ModelSettings, OPENAI_API_BASE, OpenAIConfig, PLACEHOLDER_API_KEY,
    is_placeholder_key,
};
