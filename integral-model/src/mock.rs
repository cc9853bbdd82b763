use integral_core::{Llm, LlmRequest, LlmResponse, Result};
use async_trait::async_trait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

type Handler = dyn Fn(&LlmRequest) -> Result<LlmResponse> + Send + Sync;

/// In-process [`Llm`] for tests and offline demos.
///
/// Without a handler every call echoes a fixed reply. Requests are recorded
/// so tests can inspect what was sent.
pub struct MockLlm {
    name: String,
    handler: Option<Arc<Handler>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handler: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `text`.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.with_handler(move |_| Ok(LlmResponse::new(text.clone())))
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&LlmRequest) -> Result<LlmResponse> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = match &self.handler {
            Some(handler) => handler(&req),
            None => Ok(LlmResponse::new(format!("Mock response from {}", self.name))),
        };
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_core::IntegralError;

    #[tokio::test]
    async fn test_mock_llm_default_reply() {
        let mock = MockLlm::new("test-llm");
        let resp = mock.generate_content(LlmRequest::prompt("s", "u")).await.unwrap();
        assert_eq!(resp.text, "Mock response from test-llm");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.requests()[0].messages.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_llm_handler() {
        let mock = MockLlm::new("test").with_handler(|req| {
            if req.messages.iter().any(|m| m.content.contains("fail")) {
                Err(IntegralError::Api { status: 500, message: "boom".into() })
            } else {
                Ok(LlmResponse::new("fine"))
            }
        });

        assert!(mock.generate_content(LlmRequest::prompt("s", "please fail")).await.is_err());
        assert_eq!(mock.generate_content(LlmRequest::prompt("s", "ok")).await.unwrap().text, "fine");
        assert_eq!(mock.call_count(), 2);
    }
}
