use crate::prompts::PROBE_MESSAGE;
use integral_core::{IntegralError, Llm, LlmRequest, Message, Result};
use integral_telemetry::{debug, error};

/// Sends one minimal request to confirm the API accepts the credential.
///
/// Any failure becomes [`IntegralError::Connectivity`]; the message for
/// rejected keys and exhausted quotas tells the user what to fix.
pub async fn probe(llm: &dyn Llm) -> Result<()> {
    let request = LlmRequest::new(vec![Message::user(PROBE_MESSAGE)]);
    match llm.generate_content(request).await {
        Ok(_) => {
            debug!(model = llm.name(), "Model API connection successful");
            Ok(())
        }
        Err(e) => {
            error!(model = llm.name(), error = %e, "Model API connection test failed");
            Err(connectivity_error(&e))
        }
    }
}

fn connectivity_error(error: &IntegralError) -> IntegralError {
    let message = match error.api_status() {
        Some(401) => "Invalid OpenAI API key. Please check your API key in the .env file.".to_string(),
        Some(429) => {
            "OpenAI API quota exceeded. Please check your billing and usage limits.".to_string()
        }
        _ => format!("OpenAI API error: {}", error),
    };
    IntegralError::Connectivity(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_core::LlmResponse;
    use integral_model::MockLlm;

    fn failing(status: u16) -> MockLlm {
        MockLlm::new("mock").with_handler(move |_| {
            Err::<LlmResponse, _>(IntegralError::Api { status, message: "nope".into() })
        })
    }

    #[tokio::test]
    async fn test_probe_sends_hello_without_temperature() {
        let llm = MockLlm::new("mock");
        probe(&llm).await.unwrap();
        let sent = &llm.requests()[0];
        assert_eq!(sent.messages, vec![Message::user("Hello")]);
        assert_eq!(sent.temperature(), None);
    }

    #[tokio::test]
    async fn test_probe_maps_statuses() {
        let err = probe(&failing(401)).await.unwrap_err();
        assert!(matches!(&err, IntegralError::Connectivity(m) if m.starts_with("Invalid OpenAI API key")));

        let err = probe(&failing(429)).await.unwrap_err();
        assert!(matches!(&err, IntegralError::Connectivity(m) if m.contains("quota exceeded")));

        let err = probe(&failing(500)).await.unwrap_err();
        assert!(matches!(&err, IntegralError::Connectivity(m) if m.starts_with("OpenAI API error:")));
    }
}
