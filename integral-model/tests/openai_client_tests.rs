//! HTTP-level tests for the OpenAI client against a local mock server.

use integral_core::{IntegralError, Llm, LlmRequest};
use integral_model::{
    ModelHandle, ModelSettings, OpenAIClient, OpenAIConfig, RetryConfig,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
    })
}

fn client_for(server: &MockServer) -> OpenAIClient {
    OpenAIClient::new(OpenAIConfig::new("sk-test", "gpt-5-nano").with_base_url(server.uri()))
        .unwrap()
}

#[tokio::test]
async fn sends_prompt_and_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-5-nano",
            "temperature": 1.0,
            "messages": [
                {"role": "system", "content": "You analyze data."},
                {"role": "user", "content": "Summarize."}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Drivers sleep well.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = LlmRequest::prompt("You analyze data.", "Summarize.").with_temperature(1.0);
    let response = client.generate_content(request).await.unwrap();

    assert_eq!(response.text, "Drivers sleep well.");
    assert_eq!(response.usage_metadata.unwrap().total_token_count, 15);
}

#[tokio::test]
async fn unauthorized_maps_to_api_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "Incorrect API key"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).generate_content(LlmRequest::prompt("s", "u")).await.unwrap_err();

    assert_eq!(err.api_status(), Some(401));
    assert!(err.to_string().contains("Incorrect API key"));
}

#[tokio::test]
async fn empty_choices_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).generate_content(LlmRequest::prompt("s", "u")).await.unwrap_err();
    assert!(matches!(err, IntegralError::InvalidResponse(_)));
}

#[tokio::test]
async fn blank_content_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("")))
        .mount(&server)
        .await;

    let err = client_for(&server).generate_content(LlmRequest::prompt("s", "u")).await.unwrap_err();
    assert!(matches!(err, IntegralError::InvalidResponse(_)));
}

#[tokio::test]
async fn retries_service_unavailable_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("recovered")))
        .mount(&server)
        .await;

    let client = client_for(&server).with_retry_config(
        RetryConfig::default()
            .with_max_retries(2)
            .with_initial_delay(Duration::ZERO)
            .with_max_delay(Duration::ZERO),
    );
    let response = client.generate_content(LlmRequest::prompt("s", "u")).await.unwrap();

    assert_eq!(response.text, "recovered");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn no_retry_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).generate_content(LlmRequest::prompt("s", "u")).await.unwrap_err();

    assert_eq!(err.api_status(), Some(503));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn handle_from_settings_targets_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let settings = ModelSettings::default()
        .with_api_key("sk-test")
        .with_base_url(format!("{}/v1/", server.uri()));
    let llm = ModelHandle::from_settings(&settings).unwrap().get().unwrap();

    assert_eq!(llm.generate_content(LlmRequest::prompt("s", "u")).await.unwrap().text, "ok");
}
