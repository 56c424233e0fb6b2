//! Responses API walkthrough
//!
//! Counterpart to the chat suite on the newer Responses endpoint: plain
//! input, schema-constrained parsing with minimal reasoning effort, a
//! JSON-mode comparison against the legacy endpoint, inline strict schema
//! via text.format, and reasoning with automatic summaries. This suite runs
//! with wire logging on so the exact payload shapes are visible.

use super::{CalendarEvent, calendar_event_schema, math_response_schema};
use crate::core::client::ApiClient;
use crate::core::config::Config;
use crate::models::chat::{
    ChatCompletionRequest, ChatMessage, ReasoningEffort, ResponseFormat,
};
use crate::models::responses::{
    InputMessage, ReasoningConfig, ResponsesRequest, TextConfig,
};
use anyhow::{Context, Result};
use std::io::Write;

/// Run the responses suite
pub async fn run(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== Basic Text Chat ===")?;
    if let Err(e) = basic_text(client, config, out).await {
        writeln!(out, "❌ Error in basic_text: {:#}", e)?;
    }

    writeln!(out, "\n=== Structured Response Model ===")?;
    if let Err(e) = structured_event_parse(client, config, out).await {
        writeln!(out, "❌ Error in structured_event_parse: {:#}", e)?;
    }

    writeln!(out, "\n=== Structured Response JSON Mode ===")?;
    if let Err(e) = structured_event_json_mode(client, config, out).await {
        writeln!(out, "❌ Error in structured_event_json_mode: {:#}", e)?;
    }

    writeln!(out, "\n=== Structured Response Text ===")?;
    if let Err(e) = structured_math_text_format(client, config, out).await {
        writeln!(out, "❌ Error in structured_math_text_format: {:#}", e)?;
    }

    writeln!(out, "\n=== Response with Reasoning ===")?;
    if let Err(e) = reasoning_summary(client, config, out).await {
        writeln!(out, "❌ Error in reasoning_summary: {:#}", e)?;
    }

    Ok(())
}

/// Plain string input, plain text output
async fn basic_text(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let request = ResponsesRequest::from_text(
        &config.reasoning_model,
        "Write a one-sentence bedtime story about a unicorn.",
    );

    let response = client.response(&request).await?;
    writeln!(out, "{}", response.output_text())?;
    Ok(())
}

/// Schema-constrained extraction parsed into a typed struct
///
/// Minimal reasoning effort keeps the extraction fast; the declared schema
/// makes the output text deserialize directly.
async fn structured_event_parse(
    client: &ApiClient,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let mut request = ResponsesRequest::from_messages(
        &config.reasoning_model,
        vec![
            InputMessage::system("Extract the event information."),
            InputMessage::user(
                "Create a calendar event for a meeting with Alice and Bob on July 24th.",
            ),
        ],
    );
    request.text = Some(TextConfig::json_schema(
        "calendar_event",
        calendar_event_schema(),
        true,
    ));
    request.reasoning = Some(ReasoningConfig::effort(ReasoningEffort::Minimal));

    let response = client.response(&request).await?;
    let output_text = response.output_text();

    let event: CalendarEvent = serde_json::from_str(&output_text)
        .context("Schema-constrained output failed to parse")?;
    writeln!(out, "{:?}", event)?;
    writeln!(out, "{}", output_text)?;
    Ok(())
}

/// JSON mode on the legacy endpoint, for comparison with the strict formats
async fn structured_event_json_mode(
    client: &ApiClient,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let request = ChatCompletionRequest {
        response_format: Some(ResponseFormat::JsonObject),
        ..ChatCompletionRequest::new(
            &config.small_model,
            vec![
                ChatMessage::system(
                    "Extract the event information as json with keys name, date, participants.",
                ),
                ChatMessage::user("Alice and Bob are meeting on July 24th, 2025."),
            ],
        )
    };

    let response = client.chat_completion(&request).await?;
    let message = response.first_message().context("Response had no choices")?;
    writeln!(out, "{}", message.text().unwrap_or_default())?;
    Ok(())
}

/// Strict schema declared inline through text.format
async fn structured_math_text_format(
    client: &ApiClient,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let mut request = ResponsesRequest::from_messages(
        &config.chat_model,
        vec![
            InputMessage::system(
                "You are a helpful math tutor. Guide the user through the solution step by step.",
            ),
            InputMessage::user("how can I solve 8x + 7 = -23"),
        ],
    );
    request.text = Some(TextConfig::json_schema(
        "math_response",
        math_response_schema(),
        true,
    ));

    let response = client.response(&request).await?;
    writeln!(out, "{}", response.output_text())?;
    Ok(())
}

/// Reasoning with medium effort and automatic summary extraction
async fn reasoning_summary(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let mut request = ResponsesRequest::from_messages(
        &config.reasoning_model,
        vec![
            InputMessage::system(
                "You are a helpful math tutor. Guide the user through the solution step by step.",
            ),
            InputMessage::user("how can I solve 8x + 7 = -23"),
        ],
    );
    request.reasoning = Some(ReasoningConfig::with_summary(ReasoningEffort::Medium));

    let response = client.response(&request).await?;
    writeln!(out, "{}", response.output_text())?;
    writeln!(out, "Summary:")?;
    writeln!(out, "{}", response.reasoning_summary())?;
    Ok(())
}
