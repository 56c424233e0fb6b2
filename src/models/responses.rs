//! Responses API data models
//!
//! This module defines the request and response structures for the Responses
//! endpoint, the newer counterpart of Chat Completions. Input can be a plain
//! string or a message list; output arrives as a list of typed items which
//! may include reasoning summaries alongside the message content.

use crate::models::chat::ReasoningEffort;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Responses API request
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: ResponseInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningConfig>,
}

impl ResponsesRequest {
    /// Request with a plain string input
    pub fn from_text(model: &str, input: impl Into<String>) -> Self {
        Self {
            model: model.to_string(),
            input: ResponseInput::Text(input.into()),
            text: None,
            reasoning: None,
        }
    }

    /// Request with a message list input
    pub fn from_messages(model: &str, messages: Vec<InputMessage>) -> Self {
        Self {
            model: model.to_string(),
            input: ResponseInput::Messages(messages),
            text: None,
            reasoning: None,
        }
    }
}

/// Input accepted by the Responses endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponseInput {
    Text(String),
    Messages(Vec<InputMessage>),
}

/// Role + text input message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

impl InputMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: crate::core::constants::role::SYSTEM.to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: crate::core::constants::role::USER.to_string(),
            content: content.into(),
        }
    }
}

/// Text output configuration
#[derive(Debug, Clone, Serialize)]
pub struct TextConfig {
    pub format: TextFormat,
}

impl TextConfig {
    /// Strict JSON schema output format
    pub fn json_schema(name: impl Into<String>, schema: Value, strict: bool) -> Self {
        Self {
            format: TextFormat::JsonSchema {
                name: name.into(),
                schema,
                strict,
            },
        }
    }
}

/// Output format declaration
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextFormat {
    JsonSchema {
        name: String,
        schema: Value,
        strict: bool,
    },
}

/// Reasoning configuration
#[derive(Debug, Clone, Serialize)]
pub struct ReasoningConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<ReasoningEffort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ReasoningConfig {
    /// Effort only, no summary
    pub fn effort(effort: ReasoningEffort) -> Self {
        Self {
            effort: Some(effort),
            summary: None,
        }
    }

    /// Effort with automatic summary generation
    pub fn with_summary(effort: ReasoningEffort) -> Self {
        Self {
            effort: Some(effort),
            summary: Some("auto".to_string()),
        }
    }
}

/// Responses API response
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsesResponse {
    pub id: String,
    pub model: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub usage: Option<ResponsesUsage>,
}

impl ResponsesResponse {
    /// Concatenated text of all message output items
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for item in &self.output {
            if let OutputItem::Message { content } = item {
                for part in content {
                    if let OutputContent::OutputText { text: part_text } = part {
                        text.push_str(part_text);
                    }
                }
            }
        }
        text
    }

    /// Concatenated text of all reasoning summaries
    pub fn reasoning_summary(&self) -> String {
        let parts: Vec<&str> = self
            .output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Reasoning { summary } => Some(summary),
                _ => None,
            })
            .flatten()
            .map(|summary| summary.text.as_str())
            .collect();
        parts.join(" ")
    }
}

/// Output item in a response
///
/// The endpoint emits more item types than the demos consume; unknown types
/// deserialize to Other rather than failing the whole response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<OutputContent>,
    },
    Reasoning {
        #[serde(default)]
        summary: Vec<SummaryText>,
    },
    #[serde(other)]
    Other,
}

/// Content part inside a message output item
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputContent {
    OutputText { text: String },
    #[serde(other)]
    Other,
}

/// Reasoning summary fragment
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryText {
    pub text: String,
}

/// Token usage reported by the Responses endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsesUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_input_serializes_as_string() {
        let request = ResponsesRequest::from_text("gpt-5", "Write a bedtime story.");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["input"], "Write a bedtime story.");
        assert!(!value.as_object().unwrap().contains_key("reasoning"));
    }

    #[test]
    fn test_message_input_and_reasoning_serialize() {
        let mut request = ResponsesRequest::from_messages(
            "gpt-5",
            vec![
                InputMessage::system("Extract the event information."),
                InputMessage::user("Meeting with Alice on July 24th."),
            ],
        );
        request.reasoning = Some(ReasoningConfig::with_summary(ReasoningEffort::Medium));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["input"][0]["role"], "system");
        assert_eq!(value["reasoning"]["effort"], "medium");
        assert_eq!(value["reasoning"]["summary"], "auto");
    }

    #[test]
    fn test_text_format_shape() {
        let config = TextConfig::json_schema(
            "calendar_event",
            json!({"type": "object"}),
            true,
        );
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["format"]["type"], "json_schema");
        assert_eq!(value["format"]["name"], "calendar_event");
        assert_eq!(value["format"]["strict"], true);
    }

    fn sample_response() -> ResponsesResponse {
        serde_json::from_value(json!({
            "id": "resp_123",
            "model": "gpt-5",
            "status": "completed",
            "output": [
                {
                    "type": "reasoning",
                    "summary": [
                        {"type": "summary_text", "text": "Isolated x"},
                        {"type": "summary_text", "text": "then divided."}
                    ]
                },
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        {"type": "output_text", "text": "x = -3.75"}
                    ]
                },
                {
                    "type": "web_search_call",
                    "status": "completed"
                }
            ],
            "usage": {"input_tokens": 20, "output_tokens": 40, "total_tokens": 60}
        }))
        .unwrap()
    }

    #[test]
    fn test_output_text_extraction() {
        assert_eq!(sample_response().output_text(), "x = -3.75");
    }

    #[test]
    fn test_reasoning_summary_extraction() {
        assert_eq!(sample_response().reasoning_summary(), "Isolated x then divided.");
    }

    #[test]
    fn test_unknown_output_items_tolerated() {
        let response = sample_response();
        assert_eq!(response.output.len(), 3);
        assert!(matches!(response.output[2], OutputItem::Other));
    }

    #[test]
    fn test_status_and_usage_decoded() {
        let response = sample_response();
        assert_eq!(response.status.as_deref(), Some("completed"));

        let usage = response.usage.as_ref().unwrap();
        assert_eq!(usage.input_tokens, 20);
        assert_eq!(usage.output_tokens, 40);
        assert_eq!(usage.total_tokens, 60);
    }
}
