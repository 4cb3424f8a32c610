//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

use crate::domain::verb::UnsupportedVerb;

// ── Invocation errors ─────────────────────────────────────────────────────────

/// Every way an `hdiutil` call can fail. No variant carries a partial result.
#[derive(Debug, Error)]
pub enum HdiutilError {
    /// The binary wrote to its error stream, or the bridge reported a failure.
    #[error("Process error: {}", .0.as_deref().map_or("nil", str::trim_end))]
    Process(Option<String>),

    /// Success text did not have the shape the verb promises.
    #[error("invalid {verb} output: {output:?}")]
    InvalidOutput { verb: &'static str, output: String },

    /// The shell command could not be turned into a bridge script.
    #[error("Invalid bridge command: {0}")]
    InvalidBridgeCommand(String),

    /// A bridge-level or spawn failure outside the categories above.
    #[error("Unexpected: {0}")]
    Unexpected(String),

    #[error("hdiutil {0} is not implemented")]
    Unimplemented(UnsupportedVerb),
}

impl HdiutilError {
    /// Stable machine-readable code for JSON output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Process(_) => "process_error",
            Self::InvalidOutput { .. } => "invalid_output",
            Self::InvalidBridgeCommand(_) => "invalid_bridge_command",
            Self::Unexpected(_) => "unexpected",
            Self::Unimplemented(_) => "unimplemented",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
