//! Wire types for the chat-completions endpoint and conversion to core types.

use integral_core::{
    FinishReason, IntegralError, LlmRequest, LlmResponse, Message, Result, Role, UsageMetadata,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
    }
}

pub fn message_to_wire(message: &Message) -> ChatMessage {
    ChatMessage { role: role_name(message.role), content: message.content.clone() }
}

pub fn build_request(model: &str, request: &LlmRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: request.messages.iter().map(message_to_wire).collect(),
        temperature: request.temperature(),
    }
}

fn finish_reason(raw: &str) -> FinishReason {
    match raw {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::MaxTokens,
        "content_filter" => FinishReason::Safety,
        _ => FinishReason::Other,
    }
}

/// Takes the first choice's text. A missing choice or blank text is an error.
pub fn into_llm_response(response: ChatCompletionResponse) -> Result<LlmResponse> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        IntegralError::InvalidResponse("API returned no completion choices".to_string())
    })?;

    let text = choice
        .message
        .and_then(|m| m.content)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| IntegralError::InvalidResponse("API returned empty content".to_string()))?;

    Ok(LlmResponse {
        text,
        finish_reason: choice.finish_reason.as_deref().map(finish_reason),
        usage_metadata: response.usage.map(|u| UsageMetadata {
            prompt_token_count: u.prompt_tokens,
            candidates_token_count: u.completion_tokens,
            total_token_count: u.total_tokens,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_request_omits_unset_temperature() {
        let req = LlmRequest::new(vec![Message::user("Hello")]);
        let wire = serde_json::to_value(build_request("gpt-5-nano", &req)).unwrap();
        assert_eq!(wire["model"], "gpt-5-nano");
        assert_eq!(wire["messages"][0]["role"], "user");
        assert!(wire.get("temperature").is_none());
    }

    #[test]
    fn test_build_request_with_temperature() {
        let req = LlmRequest::prompt("sys", "usr").with_temperature(1.0);
        let wire = serde_json::to_value(build_request("m", &req)).unwrap();
        assert_eq!(wire["temperature"], 1.0);
        assert_eq!(wire["messages"][0]["role"], "system");
        assert_eq!(wire["messages"][1]["content"], "usr");
    }

    #[test]
    fn test_into_llm_response() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Insight"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }))
        .unwrap();

        let resp = into_llm_response(response).unwrap();
        assert_eq!(resp.text, "Insight");
        assert_eq!(resp.finish_reason, Some(FinishReason::Stop));
        assert_eq!(resp.usage_metadata.unwrap().total_token_count, 12);
    }

    #[test]
    fn test_missing_choices_is_invalid() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(into_llm_response(response), Err(IntegralError::InvalidResponse(_))));
    }

    #[test]
    fn test_blank_or_null_content_is_invalid() {
        for content in [json!("   "), json!(null)] {
            let response: ChatCompletionResponse = serde_json::from_value(json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            }))
            .unwrap();
            assert!(matches!(
                into_llm_response(response),
                Err(IntegralError::InvalidResponse(_))
            ));
        }
    }
}
