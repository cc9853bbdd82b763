//! OpenAI chat-completions client.

use super::config::OpenAIConfig;
use super::convert::{self, ChatCompletionResponse};
use crate::retry::{RetryConfig, execute_with_retry, is_retryable_error};
use integral_core::{IntegralError, Llm, LlmRequest, LlmResponse, Result};
use integral_telemetry::{Instrument, debug, model_call_span};
use async_trait::async_trait;
use reqwest::Client;

/// Client for OpenAI and OpenAI-compatible chat-completion APIs.
///
/// # Example
///
/// ```rust,ignore
/// use integral_model::openai::{OpenAIClient, OpenAIConfig};
///
/// let client = OpenAIClient::new(OpenAIConfig::new(
///     std::env::var("OPENAI_API_KEY")?,
///     "gpt-5-nano",
/// ))?;
/// ```
pub struct OpenAIClient {
    client: Client,
    config: OpenAIConfig,
    retry_config: RetryConfig,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| IntegralError::Model(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config, retry_config: RetryConfig::default() })
    }

    #[must_use]
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url().trim_end_matches('/'))
    }

    async fn send_once(&self, body: &convert::ChatCompletionRequest) -> Result<LlmResponse> {
        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| IntegralError::Model(format!("OpenAI API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IntegralError::Api { status: status.as_u16(), message });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| IntegralError::InvalidResponse(format!("Malformed response body: {}", e)))?;

        convert::into_llm_response(parsed)
    }
}

#[async_trait]
impl Llm for OpenAIClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(&self, request: LlmRequest) -> Result<LlmResponse> {
        let body = convert::build_request(&self.config.model, &request);

        async {
            let response =
                execute_with_retry(&self.retry_config, is_retryable_error, || self.send_once(&body))
                    .await?;
            if let Some(usage) = &response.usage_metadata {
                debug!(
                    prompt_tokens = usage.prompt_token_count,
                    completion_tokens = usage.candidates_token_count,
                    "Model call finished"
                );
            }
            Ok(response)
        }
        .instrument(model_call_span(&self.config.model))
        .await
    }
}
