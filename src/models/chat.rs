//! Chat Completions API data models
//!
//! This module defines the request and response structures for the legacy
//! Chat Completions endpoint, including tool calling, response formats for
//! structured output, and the reasoning-model tuning knobs.

use crate::core::constants::{role, tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reasoning effort levels accepted by reasoning models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Minimal,
    Low,
    Medium,
    High,
}

/// Output verbosity levels accepted by reasoning models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Low,
    Medium,
    High,
}

/// Chat message
///
/// Content is kept as a raw JSON value because the API accepts either a
/// plain string or an array of typed content parts (multimodal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Build a system message with plain text content
    pub fn system(text: impl Into<String>) -> Self {
        Self::plain(role::SYSTEM, text)
    }

    /// Build a user message with plain text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::plain(role::USER, text)
    }

    /// Build a user message with multimodal content parts
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        let content = serde_json::to_value(parts).unwrap_or_else(|_| Value::Array(Vec::new()));
        Self {
            role: role::USER.to_string(),
            content: Some(content),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Build a tool result message linked to the originating call
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role::TOOL.to_string(),
            content: Some(Value::String(content.into())),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    fn plain(msg_role: &str, text: impl Into<String>) -> Self {
        Self {
            role: msg_role.to_string(),
            content: Some(Value::String(text.into())),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Plain text content, when the message carries a string body
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }
}

/// Typed content part for multimodal user messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    /// Text part
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Image part from a data URL or remote URL
    pub fn image_url(url: impl Into<String>, detail: Option<&str>) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: detail.map(|d| d.to_string()),
            },
        }
    }
}

/// Image reference for image content parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Tool call returned by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: FunctionCall,
}

/// Function invocation inside a tool call
///
/// Arguments arrive as a raw JSON string, not an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Tool definition sent with a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDef,
}

impl Tool {
    /// Build a function tool from a name, description, and JSON schema
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: tool::FUNCTION.to_string(),
            function: FunctionDef {
                name: name.into(),
                description: Some(description.into()),
                parameters,
            },
        }
    }
}

/// Function definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Value,
}

/// Structured output format for chat completions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Valid JSON constrained only by the prompt
    JsonObject,
    /// Output validated against a declared schema
    JsonSchema { json_schema: JsonSchemaSpec },
}

impl ResponseFormat {
    /// Strict JSON schema format
    pub fn json_schema(name: impl Into<String>, schema: Value, strict: bool) -> Self {
        ResponseFormat::JsonSchema {
            json_schema: JsonSchemaSpec {
                name: name.into(),
                schema,
                strict,
            },
        }
    }
}

/// Named JSON schema with strict-mode flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchemaSpec {
    pub name: String,
    pub schema: Value,
    pub strict: bool,
}

/// Chat completion request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<Verbosity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl ChatCompletionRequest {
    /// Request with only the required fields set
    pub fn new(model: &str, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.to_string(),
            messages,
            ..Default::default()
        }
    }
}

/// Chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Message of the first choice
    pub fn first_message(&self) -> Option<&ChatMessage> {
        self.choices.first().map(|choice| &choice.message)
    }
}

/// Response choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_request_skips_optional_fields() {
        let request = ChatCompletionRequest::new("gpt-4o", vec![ChatMessage::user("hi")]);
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["model"], "gpt-4o");
        assert!(!obj.contains_key("temperature"));
        assert!(!obj.contains_key("tools"));
        assert!(!obj.contains_key("response_format"));
        assert!(!obj.contains_key("verbosity"));
    }

    #[test]
    fn test_reasoning_knobs_serialize_lowercase() {
        let request = ChatCompletionRequest {
            verbosity: Some(Verbosity::Low),
            reasoning_effort: Some(ReasoningEffort::Minimal),
            ..ChatCompletionRequest::new("gpt-5-mini", vec![ChatMessage::user("hi")])
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["verbosity"], "low");
        assert_eq!(value["reasoning_effort"], "minimal");
    }

    #[test]
    fn test_response_format_json_object_tag() {
        let value = serde_json::to_value(ResponseFormat::JsonObject).unwrap();
        assert_eq!(value, json!({"type": "json_object"}));
    }

    #[test]
    fn test_response_format_json_schema_shape() {
        let format = ResponseFormat::json_schema(
            "calendar_event",
            json!({"type": "object", "properties": {"name": {"type": "string"}}}),
            true,
        );
        let value = serde_json::to_value(&format).unwrap();
        assert_eq!(value["type"], "json_schema");
        assert_eq!(value["json_schema"]["name"], "calendar_event");
        assert_eq!(value["json_schema"]["strict"], true);
    }

    #[test]
    fn test_user_parts_content_array() {
        let message = ChatMessage::user_parts(vec![
            ContentPart::text("what is this?"),
            ContentPart::image_url("data:image/png;base64,AAAA", Some("high")),
        ]);
        let content = message.content.unwrap();
        let parts = content.as_array().unwrap();
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["detail"], "high");
    }

    #[test]
    fn test_deserialize_response_with_tool_calls() {
        let body = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "get_weather",
                            "arguments": "{\"city\":\"San Francisco\",\"country\":\"USA\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        let message = response.first_message().unwrap();
        let calls = message.tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].function.name, "get_weather");
        assert!(message.text().is_none());

        let usage = response.usage.as_ref().unwrap();
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.completion_tokens, 5);
        assert_eq!(usage.total_tokens, 15);
    }

    #[test]
    fn test_deserialize_response_without_usage() {
        let body = json!({
            "id": "chatcmpl-456",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hello"},
                "finish_reason": "stop"
            }]
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert!(response.usage.is_none());
        assert_eq!(response.first_message().unwrap().text(), Some("hello"));
    }
}
