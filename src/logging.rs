//! Structured logging.
//!
//! Records are written to stderr: stdout carries the MCP protocol stream.

use std::fmt::Display;

use anyhow::{Result, anyhow};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `directives` uses `EnvFilter` syntax, e.g. `info` or `demo_mcp=debug,rmcp=warn`.
pub fn init(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| anyhow!("invalid log filter '{}': {}", directives, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

/// Run an operation and log its input and outcome.
///
/// The result is passed through untouched.
pub fn logged<K, T, E, F>(kind: K, operation: &str, input: &Value, f: F) -> Result<T, E>
where
    K: Display,
    T: Display,
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    tracing::debug!(kind = %kind, operation, input = %input, "invoking");
    match f() {
        Ok(output) => {
            tracing::info!(kind = %kind, operation, input = %input, output = %output, "completed");
            Ok(output)
        }
        Err(err) => {
            tracing::error!(kind = %kind, operation, input = %input, error = %err, "failed");
            Err(err)
        }
    }
}
