//! Demo suites
//!
//! Each suite mirrors one of the demonstration programs: the legacy Chat
//! Completions walkthrough, the Responses API walkthrough, the model
//! comparison (including multimodal input), and the timed comparison.
//! Demos inside a suite are fault-isolated: a failed call is reported and
//! the suite moves on.

pub mod chat;
pub mod compare;
pub mod responses;
pub mod timed;

use crate::core::client::ApiClient;
use crate::core::config::Config;
use anyhow::Result;
use serde::Deserialize;
use serde_json::{Value, json};
use std::io::Write;

/// Demo suite selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    Chat,
    Responses,
    Compare,
    Timed,
    All,
}

impl Suite {
    /// Parse a suite name from the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "chat" => Some(Suite::Chat),
            "responses" => Some(Suite::Responses),
            "compare" => Some(Suite::Compare),
            "timed" => Some(Suite::Timed),
            "all" => Some(Suite::All),
            _ => None,
        }
    }
}

/// Run the selected suite
///
/// The responses suite always runs with wire logging, matching its role as
/// the HTTP debugging walkthrough; the others honor the `--http-log` flag.
pub async fn run_suite(
    suite: Suite,
    config: &Config,
    http_log: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match suite {
        Suite::Chat => chat::run(&ApiClient::new(config, http_log), config, out).await,
        Suite::Responses => responses::run(&ApiClient::new(config, true), config, out).await,
        Suite::Compare => compare::run(&ApiClient::new(config, http_log), config, out).await,
        Suite::Timed => timed::run(&ApiClient::new(config, http_log), config, out).await,
        Suite::All => {
            chat::run(&ApiClient::new(config, http_log), config, out).await?;
            responses::run(&ApiClient::new(config, true), config, out).await?;
            compare::run(&ApiClient::new(config, http_log), config, out).await?;
            timed::run(&ApiClient::new(config, http_log), config, out).await
        }
    }
}

/// Calendar event extracted by the structured-output demos
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarEvent {
    pub name: String,
    pub date: String,
    pub participants: Vec<String>,
}

/// JSON schema matching [`CalendarEvent`]
pub fn calendar_event_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "date": {"type": "string"},
            "participants": {
                "type": "array",
                "items": {"type": "string"}
            }
        },
        "required": ["name", "date", "participants"],
        "additionalProperties": false
    })
}

/// Step-by-step math solution returned by the tutor demos
#[derive(Debug, Clone, Deserialize)]
pub struct MathResponse {
    pub steps: Vec<MathStep>,
    pub final_answer: String,
}

/// Single solution step
#[derive(Debug, Clone, Deserialize)]
pub struct MathStep {
    pub explanation: String,
    pub output: String,
}

/// JSON schema matching [`MathResponse`]
pub fn math_response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "steps": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "explanation": {"type": "string"},
                        "output": {"type": "string"}
                    },
                    "required": ["explanation", "output"],
                    "additionalProperties": false
                }
            },
            "final_answer": {"type": "string"}
        },
        "required": ["steps", "final_answer"],
        "additionalProperties": false
    })
}
