//! Model comparison walkthrough
//!
//! One-shot prompts against a non-reasoning baseline and a reasoning model
//! configured for speed (low verbosity, minimal effort), plus the two
//! multimodal flows: inlining a local document for analysis and attaching
//! an image as a base64 data URL for visual analysis.

use crate::content::document::load_document;
use crate::content::media::encode_image_data_url;
use crate::core::client::{ApiClient, ApiError};
use crate::core::config::Config;
use crate::models::chat::{
    ChatCompletionRequest, ChatMessage, ContentPart, ReasoningEffort, Verbosity,
};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Canned conversation shared by the comparison and timing demos
pub(super) fn test_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a helpful assistant."),
        ChatMessage::user("say hello and comment on the weather."),
    ]
}

/// One-shot completion against the non-reasoning baseline
///
/// temperature=0 keeps the baseline deterministic.
pub(super) async fn baseline_completion(
    client: &ApiClient,
    config: &Config,
    messages: Vec<ChatMessage>,
) -> Result<ChatMessage, ApiError> {
    let request = ChatCompletionRequest {
        temperature: Some(0.0),
        ..ChatCompletionRequest::new(&config.baseline_model, messages)
    };

    let response = client.chat_completion(&request).await?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| ApiError::Unexpected("Response had no choices".to_string()))
}

/// One-shot completion against the reasoning model tuned for speed
pub(super) async fn reasoning_oneshot_completion(
    client: &ApiClient,
    config: &Config,
    messages: Vec<ChatMessage>,
) -> Result<ChatMessage, ApiError> {
    let request = ChatCompletionRequest {
        verbosity: Some(Verbosity::Low),
        reasoning_effort: Some(ReasoningEffort::Minimal),
        ..ChatCompletionRequest::new(&config.fast_reasoning_model, messages)
    };

    let response = client.chat_completion(&request).await?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| ApiError::Unexpected("Response had no choices".to_string()))
}

/// Run the compare suite
pub async fn run(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== Baseline Completion ===")?;
    if let Err(e) = baseline_demo(client, config, out).await {
        writeln!(out, "❌ Error in baseline_demo: {:#}", e)?;
    }

    writeln!(out, "\n=== Reasoning One-shot Completion ===")?;
    if let Err(e) = reasoning_oneshot_demo(client, config, out).await {
        writeln!(out, "❌ Error in reasoning_oneshot_demo: {:#}", e)?;
    }

    writeln!(out, "\n=== Document Text Analysis ===")?;
    if let Err(e) = document_summary(client, config, out).await {
        writeln!(out, "❌ Error in document_summary: {:#}", e)?;
    }

    writeln!(out, "\n=== Image Analysis ===")?;
    if let Err(e) = image_analysis(client, config, out).await {
        writeln!(out, "❌ Error in image_analysis: {:#}", e)?;
    }

    Ok(())
}

async fn baseline_demo(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let message = baseline_completion(client, config, test_messages()).await?;
    writeln!(out, "{}", message.text().unwrap_or_default())?;
    Ok(())
}

async fn reasoning_oneshot_demo(
    client: &ApiClient,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let message = reasoning_oneshot_completion(client, config, test_messages()).await?;
    writeln!(out, "{}", message.text().unwrap_or_default())?;
    Ok(())
}

/// Analyze a local document by inlining its text into the prompt
async fn document_summary(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let path = Path::new(&config.document_path);
    writeln!(out, "Loading document: {}", path.display())?;

    let document = load_document(path, config.max_document_chars)?;

    let prompt = format!(
        "Please analyze the following document content and provide a brief summary.\n\
         Focus on the main topics, key concepts, and overall purpose of the document.\n\
         \n\
         Document: {}\n\
         \n\
         Content:\n\
         {}\n\
         \n\
         Please provide:\n\
         1. A brief overview of the document's purpose\n\
         2. Main topics and sections covered\n\
         3. Key concepts or important points\n\
         4. Target audience (if apparent)",
        path.display(),
        document
    );

    let request = ChatCompletionRequest {
        temperature: Some(0.0),
        ..ChatCompletionRequest::new(
            &config.baseline_model,
            vec![
                ChatMessage::system(
                    "You are a helpful assistant that analyzes document content and provides clear, concise summaries.",
                ),
                ChatMessage::user(prompt),
            ],
        )
    };

    writeln!(out, "📄 Analyzing document content...")?;
    let response = client.chat_completion(&request).await?;
    let message = response.first_message().context("Response had no choices")?;
    writeln!(out, "{}", message.text().unwrap_or_default())?;
    Ok(())
}

/// Analyze a local image attached as a base64 data URL
async fn image_analysis(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let path = Path::new(&config.image_path);
    writeln!(out, "Analyzing image: {}", path.display())?;

    let data_url = encode_image_data_url(path)?;

    let request = ChatCompletionRequest {
        temperature: Some(0.0),
        ..ChatCompletionRequest::new(
            &config.baseline_model,
            vec![
                ChatMessage::system(
                    "You are a helpful assistant with vision capabilities that can analyze images and provide detailed descriptions.",
                ),
                ChatMessage::user_parts(vec![
                    ContentPart::text(
                        "Please analyze this image and provide a detailed description. Include:\n\
                         \n\
                         1. What you see in the image (objects, people, text, etc.)\n\
                         2. The overall composition and visual elements\n\
                         3. Any text or writing visible in the image\n\
                         4. The apparent purpose or context of the image\n\
                         5. Notable colors, style, or artistic elements\n\
                         6. Any technical or specific details that stand out\n\
                         \n\
                         Please be thorough and descriptive in your analysis.",
                    ),
                    ContentPart::image_url(data_url, Some("high")),
                ]),
            ],
        )
    };

    writeln!(out, "🖼️ Analyzing image content...")?;
    let response = client.chat_completion(&request).await?;
    let message = response.first_message().context("Response had no choices")?;
    writeln!(out, "{}", message.text().unwrap_or_default())?;
    Ok(())
}
