//! Timed model comparison
//!
//! Quantifies the wall-clock overhead of reasoning capabilities by running
//! the same prompt several times against the baseline and the speed-tuned
//! reasoning model, then reporting totals and a speed ratio. Reasoning
//! models usually lose this race even at minimal effort; the numbers say
//! by how much.

use super::compare::{baseline_completion, reasoning_oneshot_completion, test_messages};
use crate::core::client::ApiClient;
use crate::core::config::Config;
use anyhow::Result;
use std::io::Write;
use std::time::Instant;

/// Completions per model
const RUNS: usize = 4;

/// Run the timed suite
pub async fn run(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== Timed Completion Comparison ===")?;
    if let Err(e) = timed_comparison(client, config, out).await {
        writeln!(out, "❌ Error in timed_comparison: {:#}", e)?;
    }
    Ok(())
}

async fn timed_comparison(client: &ApiClient, config: &Config, out: &mut dyn Write) -> Result<()> {
    let messages = test_messages();

    let start = Instant::now();
    let mut baseline_message = None;
    for _ in 0..RUNS {
        baseline_message = Some(baseline_completion(client, config, messages.clone()).await?);
    }
    let baseline_ms = start.elapsed().as_millis();

    let start = Instant::now();
    let mut reasoning_message = None;
    for _ in 0..RUNS {
        reasoning_message =
            Some(reasoning_oneshot_completion(client, config, messages.clone()).await?);
    }
    let reasoning_ms = start.elapsed().as_millis();

    writeln!(out, "{} Response:", config.baseline_model)?;
    if let Some(message) = baseline_message {
        writeln!(out, "{}", message.text().unwrap_or_default())?;
    }
    writeln!(
        out,
        "Total execution time for {} ({} runs): {} ms",
        config.baseline_model, RUNS, baseline_ms
    )?;
    writeln!(out)?;

    writeln!(out, "{} Response:", config.fast_reasoning_model)?;
    if let Some(message) = reasoning_message {
        writeln!(out, "{}", message.text().unwrap_or_default())?;
    }
    writeln!(
        out,
        "Total execution time for {} ({} runs): {} ms",
        config.fast_reasoning_model, RUNS, reasoning_ms
    )?;
    writeln!(out)?;

    if let Some(line) = speed_ratio_line(
        &config.baseline_model,
        baseline_ms,
        &config.fast_reasoning_model,
        reasoning_ms,
    ) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Format the winner line, or None when a total is zero
fn speed_ratio_line(
    baseline_label: &str,
    baseline_ms: u128,
    reasoning_label: &str,
    reasoning_ms: u128,
) -> Option<String> {
    if baseline_ms == 0 || reasoning_ms == 0 {
        return None;
    }

    let ratio = baseline_ms as f64 / reasoning_ms as f64;
    if ratio > 1.0 {
        Some(format!(
            "{} is {:.2}x faster than {}",
            reasoning_label, ratio, baseline_label
        ))
    } else {
        Some(format!(
            "{} is {:.2}x faster than {}",
            baseline_label,
            1.0 / ratio,
            reasoning_label
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasoning_model_faster() {
        let line = speed_ratio_line("gpt-4.1-mini", 4000, "gpt-5-mini", 2000).unwrap();
        assert_eq!(line, "gpt-5-mini is 2.00x faster than gpt-4.1-mini");
    }

    #[test]
    fn test_baseline_model_faster() {
        let line = speed_ratio_line("gpt-4.1-mini", 1500, "gpt-5-mini", 6000).unwrap();
        assert_eq!(line, "gpt-4.1-mini is 4.00x faster than gpt-5-mini");
    }

    #[test]
    fn test_zero_totals_skip_ratio() {
        assert!(speed_ratio_line("a", 0, "b", 100).is_none());
        assert!(speed_ratio_line("a", 100, "b", 0).is_none());
    }
}
