//! Wire-level HTTP logging
//!
//! Prints full request and response details for every API call when enabled,
//! showing exactly what goes over the wire: method, URL, headers (with the
//! authorization token masked), and pretty-printed JSON bodies. Useful for
//! debugging payload shapes against gateway implementations.

use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};

/// Separator width for wire log blocks
const RULE_WIDTH: usize = 80;

/// Log an outgoing request before it is sent
pub fn log_request(request: &Request) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("🔍 REQUEST DETAILS:");
    println!("Method: {}", request.method());
    println!("URL: {}", request.url());
    println!("Headers:");
    for (name, value) in request.headers() {
        println!("  {}: {}", name, mask_header_value(name.as_str(), value.to_str().unwrap_or("<binary>")));
    }

    if let Some(bytes) = request.body().and_then(|body| body.as_bytes()) {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                println!("Request Body:");
                println!("{}", pretty_json(text));
            }
            Err(_) => println!("Request Body (raw): {} bytes", bytes.len()),
        }
    }

    println!("{}", "-".repeat(RULE_WIDTH / 2));
}

/// Log a received response
pub fn log_response(status: StatusCode, headers: &HeaderMap, body: &str) {
    println!("📥 RESPONSE DETAILS:");
    println!("Status Code: {}", status.as_u16());
    println!("Response Headers:");
    for (name, value) in headers {
        println!("  {}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    println!("Response Body:");
    println!("{}", pretty_json(body));
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

/// Mask sensitive header values
///
/// Authorization carries the bearer token; everything else is printed as-is.
fn mask_header_value<'a>(name: &str, value: &'a str) -> &'a str {
    if name.eq_ignore_ascii_case("authorization") {
        "Bearer ***masked***"
    } else {
        value
    }
}

/// Pretty-print a JSON body, falling back to the raw text when not JSON
fn pretty_json(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_authorization_header() {
        assert_eq!(
            mask_header_value("authorization", "Bearer sk-secret"),
            "Bearer ***masked***"
        );
        assert_eq!(
            mask_header_value("Authorization", "Bearer sk-secret"),
            "Bearer ***masked***"
        );
    }

    #[test]
    fn test_other_headers_unmasked() {
        assert_eq!(
            mask_header_value("content-type", "application/json"),
            "application/json"
        );
    }

    #[test]
    fn test_pretty_json_roundtrip() {
        let pretty = pretty_json(r#"{"model":"gpt-4o"}"#);
        assert!(pretty.contains("\"model\": \"gpt-4o\""));
    }

    #[test]
    fn test_pretty_json_falls_back_on_raw() {
        assert_eq!(pretty_json("not json"), "not json");
    }
}
