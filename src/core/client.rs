//! Async HTTP client for the completions API
//!
//! This module provides the client used by every demo to talk to an
//! OpenAI-compatible endpoint. It covers the two surfaces the demos
//! exercise: the legacy Chat Completions endpoint and the Responses
//! endpoint. Requests and responses can be dumped to the console through
//! the wire logger.

use crate::core::config::Config;
use crate::core::wire;
use crate::models::chat::{ChatCompletionRequest, ChatCompletionResponse};
use crate::models::responses::{ResponsesRequest, ResponsesResponse};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Error types that can occur during API interactions
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Async API client
pub struct ApiClient {
    http: Client,
    api_key: String,
    base_url: String,
    wire_log: bool,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Resolved application configuration
    /// * `wire_log` - Dump full request/response details to the console
    pub fn new(config: &Config, wire_log: bool) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            wire_log,
        }
    }

    /// Send a chat completion request
    ///
    /// # Errors
    ///
    /// Returns ApiError for API errors, authentication failures, etc.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiError> {
        debug!("POST /chat/completions model={}", request.model);
        self.post("/chat/completions", request).await
    }

    /// Send a request to the Responses endpoint
    ///
    /// # Errors
    ///
    /// Returns ApiError for API errors, authentication failures, etc.
    pub async fn response(
        &self,
        request: &ResponsesRequest,
    ) -> Result<ResponsesResponse, ApiError> {
        debug!("POST /responses model={}", request.model);
        self.post("/responses", request).await
    }

    /// Classify API errors and provide helpful messages
    fn classify_error(error_detail: &str) -> String {
        let error_lower = error_detail.to_lowercase();

        if error_lower.contains("unsupported_country_region_territory")
            || error_lower.contains("country, region, or territory not supported")
        {
            return "API is not available in your region. Consider a different base URL."
                .to_string();
        }

        if error_lower.contains("invalid_api_key") || error_lower.contains("unauthorized") {
            return "Invalid API key. Please check your OPENAI_API_KEY configuration.".to_string();
        }

        if error_lower.contains("rate_limit") || error_lower.contains("quota") {
            return "Rate limit exceeded. Please wait and try again, or upgrade your API plan."
                .to_string();
        }

        if error_lower.contains("model")
            && (error_lower.contains("not found") || error_lower.contains("does not exist"))
        {
            return "Model not found. Please check your model configuration.".to_string();
        }

        if error_lower.contains("billing") || error_lower.contains("payment") {
            return "Billing issue. Please check your account billing status.".to_string();
        }

        error_detail.to_string()
    }

    /// Internal method to POST a JSON payload and decode the JSON response
    async fn post<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(payload)
            .build()
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        if self.wire_log {
            wire::log_request(&request);
        }

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        if self.wire_log {
            wire::log_response(status, &headers, &body);
        }

        if !status.is_success() {
            let classified_error = Self::classify_error(&body);

            return Err(match status.as_u16() {
                401 => ApiError::Authentication(classified_error),
                429 => ApiError::RateLimit(classified_error),
                400 => ApiError::BadRequest(classified_error),
                _ => ApiError::Api {
                    status: status.as_u16(),
                    message: classified_error,
                },
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Unexpected(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_region_error() {
        let error = "unsupported_country_region_territory";
        let result = ApiClient::classify_error(error);
        assert!(result.contains("region"));
    }

    #[test]
    fn test_classify_auth_error() {
        let error = "invalid_api_key: The API key is invalid";
        let result = ApiClient::classify_error(error);
        assert!(result.contains("API key"));
    }

    #[test]
    fn test_classify_rate_limit_error() {
        let error = "You have exceeded your current quota";
        let result = ApiClient::classify_error(error);
        assert!(result.contains("Rate limit"));
    }

    #[test]
    fn test_classify_unknown_error_passthrough() {
        let error = "something else entirely";
        assert_eq!(ApiClient::classify_error(error), error);
    }
}
