use crate::openai::{ModelSettings, OpenAIClient};
use crate::retry::RetryConfig;
use integral_core::{IntegralError, Llm, Result};
use std::fmt;
use std::sync::Arc;

/// The model a pipeline talks to, or the reason there is none.
///
/// Built once at startup. An unconfigured handle never reaches the network;
/// asking it for a model yields a configuration error.
#[derive(Clone)]
pub enum ModelHandle {
    Ready(Arc<dyn Llm>),
    Unconfigured { reason: String },
}

impl ModelHandle {
    pub fn from_llm(llm: Arc<dyn Llm>) -> Self {
        Self::Ready(llm)
    }

    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self::Unconfigured { reason: reason.into() }
    }

    /// Builds an OpenAI client from settings. A missing or placeholder key
    /// yields [`ModelHandle::Unconfigured`]; failing to build the HTTP client
    /// is an error.
    pub fn from_settings(settings: &ModelSettings) -> Result<Self> {
        let config = match settings.to_openai_config() {
            Ok(config) => config,
            Err(IntegralError::Config(reason)) => return Ok(Self::unconfigured(reason)),
            Err(e) => return Err(e),
        };

        let client = OpenAIClient::new(config)?
            .with_retry_config(RetryConfig::default().with_max_retries(settings.max_retries));
        Ok(Self::Ready(Arc::new(client)))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn get(&self) -> Result<Arc<dyn Llm>> {
        match self {
            Self::Ready(llm) => Ok(Arc::clone(llm)),
            Self::Unconfigured { reason } => Err(IntegralError::Config(reason.clone())),
        }
    }

    pub fn model_name(&self) -> Option<&str> {
        match self {
            Self::Ready(llm) => Some(llm.name()),
            Self::Unconfigured { .. } => None,
        }
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(llm) => f.debug_tuple("Ready").field(&llm.name()).finish(),
            Self::Unconfigured { reason } => {
                f.debug_struct("Unconfigured").field("reason", reason).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockLlm;
    use crate::openai::PLACEHOLDER_API_KEY;

    #[test]
    fn test_missing_key_is_unconfigured() {
        let handle = ModelHandle::from_settings(&ModelSettings::default()).unwrap();
        assert!(!handle.is_ready());
        assert!(matches!(handle.get(), Err(IntegralError::Config(_))));
        assert_eq!(handle.model_name(), None);
    }

    #[test]
    fn test_placeholder_key_is_unconfigured() {
        let settings = ModelSettings::default().with_api_key(PLACEHOLDER_API_KEY);
        let handle = ModelHandle::from_settings(&settings).unwrap();
        let err = handle.get().err().unwrap();
        assert!(err.to_string().contains("placeholder"));
    }

    #[test]
    fn test_real_key_is_ready() {
        let settings = ModelSettings::default().with_api_key("sk-test").with_model("gpt-4o-mini");
        let handle = ModelHandle::from_settings(&settings).unwrap();
        assert!(handle.is_ready());
        assert_eq!(handle.model_name(), Some("gpt-4o-mini"));
    }

    #[test]
    fn test_from_llm() {
        let handle = ModelHandle::from_llm(Arc::new(MockLlm::new("mock")));
        assert_eq!(handle.get().unwrap().name(), "mock");
        assert!(format!("{handle:?}").contains("mock"));
    }
}
