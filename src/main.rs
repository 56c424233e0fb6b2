//! Completions API demo runner
//!
//! This application walks through the usage patterns of an OpenAI-compatible
//! completions API: plain chat, structured output, reasoning effort levels,
//! tool calling, multimodal input, and timing comparisons. Each suite maps
//! to a subcommand; `all` runs everything in sequence.

mod content;
mod core;
mod demos;
mod models;

use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::demos::Suite;
use std::io::Write;
use tracing::error;

#[tokio::main]
async fn main() {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!();
            print_help();
            std::process::exit(2);
        }
    };

    if args.help {
        print_help();
        return;
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Print startup banner
    print_startup_banner(&config);

    // Validate API key
    if !config.validate_api_key() {
        error!("Invalid API key configuration for base URL: {}", config.base_url);
        std::process::exit(1);
    }

    // Route demo output to the console or the requested log file
    let mut out: Box<dyn Write> = match &args.log_file {
        Some(path) => match std::fs::File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Error writing to log file '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => Box::new(std::io::stdout()),
    };

    if let Err(e) = demos::run_suite(args.suite, &config, args.http_log, &mut *out).await {
        error!("Demo suite failed: {:#}", e);
        std::process::exit(1);
    }

    if let Some(path) = &args.log_file {
        println!("Output written to: {}", path);
    }
}

/// Parsed command line
#[derive(Debug, PartialEq)]
struct CliArgs {
    suite: Suite,
    log_file: Option<String>,
    http_log: bool,
    help: bool,
}

impl CliArgs {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut suite = None;
        let mut log_file = None;
        let mut http_log = false;
        let mut help = false;

        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => help = true,
                "--http-log" => http_log = true,
                "--log-file" | "-l" => {
                    log_file = Some(
                        args.next()
                            .ok_or_else(|| "Missing value for --log-file".to_string())?,
                    );
                }
                name => match Suite::parse(name) {
                    Some(parsed) if suite.is_none() => suite = Some(parsed),
                    Some(_) => return Err("More than one suite specified".to_string()),
                    None => return Err(format!("Unknown argument: {}", name)),
                },
            }
        }

        Ok(Self {
            suite: suite.unwrap_or(Suite::All),
            log_file,
            http_log,
            help,
        })
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🚀 Completions Lab v0.1.0");
    println!("✅ Configuration loaded successfully at {}", chrono::Utc::now().to_rfc3339());
    println!("   Base URL: {}", config.base_url);
    println!("   Chat Model: {}", config.chat_model);
    println!("   Small Model: {}", config.small_model);
    println!("   Baseline Model: {}", config.baseline_model);
    println!("   Reasoning Model: {}", config.reasoning_model);
    println!("   Fast Reasoning Model: {}", config.fast_reasoning_model);
    println!("   Request Timeout: {}s", config.request_timeout);
    println!(
        "   API Key Configured: {}",
        if config.api_key.is_empty() { "No" } else { "Yes" }
    );
    println!();
}

/// Print help message
fn print_help() {
    println!("Completions Lab v0.1.0");
    println!();
    println!("Usage: completions-lab [SUITE] [OPTIONS]");
    println!();
    println!("Suites:");
    println!("  chat       Legacy Chat Completions walkthrough (default endpoint surface)");
    println!("  responses  Responses API walkthrough with wire logging");
    println!("  compare    Baseline vs reasoning models, document and image analysis");
    println!("  timed      Timed baseline vs reasoning comparison");
    println!("  all        Run every suite in order (default)");
    println!();
    println!("Options:");
    println!("  --log-file, -l <path>  Write demo output to a file instead of the console");
    println!("  --http-log             Dump HTTP requests/responses for every suite");
    println!("  --help, -h             Display this help message");
    println!();
    println!("Environment variables:");
    println!("  OPENAI_API_KEY  - Your API key (required, .env supported)");
    println!("  OPENAI_BASE_URL - API base URL (default: https://api.openai.com/v1)");
    println!("  CONFIG_PATH     - Settings file (default: completions-lab.toml)");
    println!();
    println!("Settings file sections: [models], [request], [paths], log_level.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults_to_all() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.suite, Suite::All);
        assert!(args.log_file.is_none());
        assert!(!args.http_log);
    }

    #[test]
    fn test_parse_suite_and_flags() {
        let args = parse(&["responses", "--log-file", "run.log", "--http-log"]).unwrap();
        assert_eq!(args.suite, Suite::Responses);
        assert_eq!(args.log_file.as_deref(), Some("run.log"));
        assert!(args.http_log);
    }

    #[test]
    fn test_parse_rejects_unknown_argument() {
        assert!(parse(&["stream"]).is_err());
    }

    #[test]
    fn test_parse_rejects_multiple_suites() {
        assert!(parse(&["chat", "timed"]).is_err());
    }

    #[test]
    fn test_parse_requires_log_file_value() {
        assert!(parse(&["chat", "--log-file"]).is_err());
    }
}
