//! Legacy Chat Completions walkthrough
//!
//! Demonstrates the chat completions endpoint end to end: plain text
//! generation, the three structured-output modes (strict schema with typed
//! parsing, JSON mode, strict schema inline), and two-phase tool calling.

use super::{CalendarEvent, calendar_event_schema, math_response_schema};
use crate::core::client::ApiClient;
use crate::core::config::Config;
use crate::models::chat::{
    ChatCompletionRequest, ChatMessage, ResponseFormat, Tool, ToolCall,
};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Value, json};
use std::io::Write;

/// Run the chat suite
pub async fn run(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== Basic Text Chat ===")?;
    if let Err(e) = basic_text_chat(client, config, out).await {
        writeln!(out, "❌ Error in basic_text_chat: {:#}", e)?;
    }

    writeln!(out, "\n=== Structured Response Model ===")?;
    if let Err(e) = structured_event(client, config, out).await {
        writeln!(out, "❌ Error in structured_event: {:#}", e)?;
    }

    writeln!(out, "\n=== Structured Response JSON Mode ===")?;
    if let Err(e) = structured_event_json_mode(client, config, out).await {
        writeln!(out, "❌ Error in structured_event_json_mode: {:#}", e)?;
    }

    writeln!(out, "\n=== Structured Response Text ===")?;
    if let Err(e) = structured_math_steps(client, config, out).await {
        writeln!(out, "❌ Error in structured_math_steps: {:#}", e)?;
    }

    writeln!(out, "\n=== Tools Call Example ===")?;
    if let Err(e) = weather_tools(client, config, out).await {
        writeln!(out, "❌ Error in weather_tools: {:#}", e)?;
    }

    Ok(())
}

/// Plain text generation with a single user message
async fn basic_text_chat(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let request = ChatCompletionRequest::new(
        &config.chat_model,
        vec![ChatMessage::user(
            "Write a one-sentence bedtime story about a unicorn.",
        )],
    );

    let response = client.chat_completion(&request).await?;
    let message = response.first_message().context("Response had no choices")?;
    writeln!(out, "{}", message.text().unwrap_or_default())?;
    Ok(())
}

/// Strict schema extraction parsed into a typed struct
///
/// The model is constrained to the CalendarEvent schema, so the content is
/// guaranteed to deserialize when the call succeeds.
async fn structured_event(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let request = ChatCompletionRequest {
        response_format: Some(ResponseFormat::json_schema(
            "calendar_event",
            calendar_event_schema(),
            true,
        )),
        ..ChatCompletionRequest::new(
            &config.chat_model,
            vec![
                ChatMessage::system("Extract the event information."),
                ChatMessage::user(
                    "Create a calendar event for a meeting with Alice and Bob on July 24th.",
                ),
            ],
        )
    };

    let response = client.chat_completion(&request).await?;
    let message = response.first_message().context("Response had no choices")?;
    let content = message.text().context("Response had no text content")?;

    let event: CalendarEvent =
        serde_json::from_str(content).context("Schema-constrained output failed to parse")?;
    writeln!(out, "{:?}", event)?;
    writeln!(out, "{}", content)?;
    Ok(())
}

/// JSON mode: valid JSON whose structure lives only in the system prompt
async fn structured_event_json_mode(
    client: &ApiClient,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let request = ChatCompletionRequest {
        response_format: Some(ResponseFormat::JsonObject),
        ..ChatCompletionRequest::new(
            &config.chat_model,
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

/// Strict schema enforcement with an inline schema declaration
async fn structured_math_steps(
    client: &ApiClient,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let request = ChatCompletionRequest {
        response_format: Some(ResponseFormat::json_schema(
            "math_response",
            math_response_schema(),
            true,
        )),
        ..ChatCompletionRequest::new(
            &config.chat_model,
            vec![
                ChatMessage::system(
                    "You are a helpful math tutor. Guide the user through the solution step by step.",
                ),
                ChatMessage::user("how can I solve 8x + 7 = -23"),
            ],
        )
    };

    let response = client.chat_completion(&request).await?;
    let message = response.first_message().context("Response had no choices")?;
    writeln!(out, "{}", message.text().unwrap_or_default())?;
    Ok(())
}

/// Arguments the model supplies for the weather tool
#[derive(Debug, Deserialize)]
struct WeatherArgs {
    city: String,
    country: String,
}

/// Simulated weather tool that takes discrete parameters
fn get_weather(city: &str, country: &str) -> Value {
    json!({
        "location": format!("{}, {}", city, country),
        "temperature": "72°F",
        "conditions": "Partly cloudy",
        "humidity": "65%",
    })
}

/// Execute one tool call against the local tools
fn dispatch_tool_call(call: &ToolCall) -> Result<Value> {
    match call.function.name.as_str() {
        "get_weather" => {
            let args: WeatherArgs = serde_json::from_str(&call.function.arguments)
                .context("Failed to decode tool arguments")?;
            Ok(get_weather(&args.city, &args.country))
        }
        other => bail!("Model requested unknown tool: {}", other),
    }
}

/// Two-phase tool calling
///
/// Phase 1 sends the question plus tool definitions; if the model answers
/// with tool calls, each is executed locally and its result appended as a
/// `tool` message keyed by the originating call id. Phase 2 resends the
/// full conversation so the model can phrase a final answer from the tool
/// data. Without tool calls the first response is already the answer.
async fn weather_tools(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let tools = vec![Tool::function(
        "get_weather",
        "Get the current weather for a location",
        json!({
            "type": "object",
            "properties": {
                "city": {"type": "string", "description": "The city name"},
                "country": {"type": "string", "description": "The country name"}
            },
            "required": ["city", "country"],
            "additionalProperties": false
        }),
    )];

    let mut messages = vec![ChatMessage::user(
        "What's the weather like in San Francisco, USA?",
    )];

    let request = ChatCompletionRequest {
        tools: Some(tools),
        tool_choice: Some(Value::String("auto".to_string())),
        ..ChatCompletionRequest::new(&config.chat_model, messages.clone())
    };

    let response = client.chat_completion(&request).await?;
    let message = response.first_message().context("Response had no choices")?;

    let Some(tool_calls) = message.tool_calls.clone() else {
        writeln!(out, "{}", message.text().unwrap_or_default())?;
        return Ok(());
    };

    messages.push(message.clone());

    for call in &tool_calls {
        writeln!(out, "Calling {}...", call.function.name)?;
        let result = dispatch_tool_call(call)?;
        messages.push(ChatMessage::tool_result(
            call.id.clone(),
            serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string()),
        ));
    }

    let second_request = ChatCompletionRequest::new(&config.chat_model, messages);
    let second_response = client.chat_completion(&second_request).await?;
    let final_message = second_response
        .first_message()
        .context("Second response had no choices")?;
    writeln!(out, "{}", final_message.text().unwrap_or_default())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::FunctionCall;

    fn weather_call(arguments: &str) -> ToolCall {
        ToolCall {
            id: "call_abc".to_string(),
            call_type: "function".to_string(),
            function: FunctionCall {
                name: "get_weather".to_string(),
                arguments: arguments.to_string(),
            },
        }
    }

    #[test]
    fn test_dispatch_weather_tool() {
        let call = weather_call(r#"{"city":"San Francisco","country":"USA"}"#);
        let result = dispatch_tool_call(&call).unwrap();
        assert_eq!(result["location"], "San Francisco, USA");
        assert_eq!(result["temperature"], "72°F");
    }

    #[test]
    fn test_dispatch_bad_arguments() {
        let call = weather_call(r#"{"city":"San Francisco"}"#);
        assert!(dispatch_tool_call(&call).is_err());
    }

    #[test]
    fn test_dispatch_unknown_tool() {
        let mut call = weather_call("{}");
        call.function.name = "get_tides".to_string();
        assert!(dispatch_tool_call(&call).is_err());
    }
}
