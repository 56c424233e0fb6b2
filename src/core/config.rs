//! Application configuration management
//!
//! Settings come from two places: an optional TOML file for model names,
//! request tuning, and demo asset paths, and the environment (plus `.env`)
//! for credentials. All configuration is validated at startup so a
//! misconfigured run fails before the first API call.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 90;

/// Default character budget for inlined documents
const DEFAULT_MAX_DOCUMENT_CHARS: usize = 400_000;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// General-purpose chat model
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Cheap model for JSON-mode extraction
    #[serde(default = "default_small_model")]
    pub small_model: String,
    /// Non-reasoning baseline for comparisons
    #[serde(default = "default_baseline_model")]
    pub baseline_model: String,
    /// Full reasoning model
    #[serde(default = "default_reasoning_model")]
    pub reasoning_model: String,
    /// Reasoning model tuned for one-shot speed
    #[serde(default = "default_fast_reasoning_model")]
    pub fast_reasoning_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_max_document_chars")]
    pub max_document_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    /// Document analyzed by the compare suite
    #[serde(default = "default_document_path")]
    pub document: String,
    /// Image analyzed by the compare suite
    #[serde(default = "default_image_path")]
    pub image: String,
}

fn default_chat_model() -> String {
    "gpt-4o".to_string()
}

fn default_small_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_baseline_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_reasoning_model() -> String {
    "gpt-5".to_string()
}

fn default_fast_reasoning_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_max_document_chars() -> usize {
    DEFAULT_MAX_DOCUMENT_CHARS
}

fn default_document_path() -> String {
    "data/pytorch-cheatsheet.md".to_string()
}

fn default_image_path() -> String {
    "data/sample-figure.png".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            chat_model: default_chat_model(),
            small_model: default_small_model(),
            baseline_model: default_baseline_model(),
            reasoning_model: default_reasoning_model(),
            fast_reasoning_model: default_fast_reasoning_model(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            max_document_chars: default_max_document_chars(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            document: default_document_path(),
            image: default_image_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub models: ModelConfig,
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            models: ModelConfig::default(),
            request: RequestConfig::default(),
            paths: PathConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Resolved application configuration
///
/// Credentials come from the environment only; the TOML file never holds the
/// API key. The file itself is optional and missing sections fall back to
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key (`OPENAI_API_KEY`)
    pub api_key: String,

    /// API base URL (`OPENAI_BASE_URL`), no trailing slash
    pub base_url: String,

    /// General-purpose chat model
    pub chat_model: String,

    /// Cheap model for JSON-mode extraction
    pub small_model: String,

    /// Non-reasoning baseline for comparisons
    pub baseline_model: String,

    /// Full reasoning model
    pub reasoning_model: String,

    /// Reasoning model tuned for one-shot speed
    pub fast_reasoning_model: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Character budget before document truncation
    pub max_document_chars: usize,

    /// Document analyzed by the compare suite
    pub document_path: String,

    /// Image analyzed by the compare suite
    pub image_path: String,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment and the optional settings file
    ///
    /// Looks for `completions-lab.toml` in the current directory unless
    /// `CONFIG_PATH` points elsewhere. A missing file is not an error; a
    /// present but malformed file is.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "completions-lab.toml".to_string());

        let file = if Path::new(&config_path).exists() {
            Self::load_file(&config_path)?
        } else {
            TomlConfig::default()
        };

        Self::from_sources(
            file,
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OPENAI_BASE_URL").ok(),
        )
    }

    /// Parse the TOML settings file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    fn load_file(path: &str) -> Result<TomlConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        toml::from_str(&content).context("Failed to parse TOML configuration")
    }

    /// Merge file settings with environment credentials
    fn from_sources(
        file: TomlConfig,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .context("OPENAI_API_KEY is not set")?;

        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Config {
            api_key,
            base_url,
            chat_model: file.models.chat_model,
            small_model: file.models.small_model,
            baseline_model: file.models.baseline_model,
            reasoning_model: file.models.reasoning_model,
            fast_reasoning_model: file.models.fast_reasoning_model,
            request_timeout: file.request.request_timeout,
            max_document_chars: file.request.max_document_chars,
            document_path: file.paths.document,
            image_path: file.paths.image,
            log_level: file.log_level,
        })
    }

    /// Validate API key format for the configured base URL
    ///
    /// The hosted OpenAI endpoint uses 'sk-' keys; alternate base URLs
    /// accept any non-empty token (gateways commonly issue JWTs).
    pub fn validate_api_key(&self) -> bool {
        if self.base_url.contains("api.openai.com") {
            self.api_key.starts_with("sk-")
        } else {
            !self.api_key.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            log_level = "debug"

            [models]
            chat_model = "gpt-4o"
            small_model = "gpt-4o-mini"
            baseline_model = "gpt-4.1-mini"
            reasoning_model = "gpt-5"
            fast_reasoning_model = "gpt-5-mini"

            [request]
            request_timeout = 30
            max_document_chars = 1000

            [paths]
            document = "data/notes.md"
            image = "data/diagram.png"
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config_file() {
        let file = create_test_config();
        let toml_config = Config::load_file(file.path().to_str().unwrap()).unwrap();
        let config =
            Config::from_sources(toml_config, Some("sk-test123".to_string()), None).unwrap();
        assert_eq!(config.api_key, "sk-test123");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.max_document_chars, 1000);
        assert_eq!(config.document_path, "data/notes.md");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_defaults_without_file() {
        let config =
            Config::from_sources(TomlConfig::default(), Some("sk-test123".to_string()), None)
                .unwrap();
        assert_eq!(config.chat_model, "gpt-4o");
        assert_eq!(config.baseline_model, "gpt-4.1-mini");
        assert_eq!(config.fast_reasoning_model, "gpt-5-mini");
        assert_eq!(config.request_timeout, 90);
        assert_eq!(config.max_document_chars, 400_000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_api_key() {
        let result = Config::from_sources(TomlConfig::default(), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_override_and_trailing_slash() {
        let config = Config::from_sources(
            TomlConfig::default(),
            Some("jwt-token".to_string()),
            Some("https://gateway.example.com/v1/".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url, "https://gateway.example.com/v1");
    }

    #[test]
    fn test_validate_api_key() {
        let openai =
            Config::from_sources(TomlConfig::default(), Some("sk-test123".to_string()), None)
                .unwrap();
        assert!(openai.validate_api_key());

        let bad_prefix =
            Config::from_sources(TomlConfig::default(), Some("jwt".to_string()), None).unwrap();
        assert!(!bad_prefix.validate_api_key());

        let gateway = Config::from_sources(
            TomlConfig::default(),
            Some("jwt".to_string()),
            Some("https://gateway.example.com/v1".to_string()),
        )
        .unwrap();
        assert!(gateway.validate_api_key());
    }
}
