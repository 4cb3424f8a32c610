//! Domain types and validators for hdiutil execution configuration.
//!
//! Pure functions only; no I/O, no async, no filesystem access.

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_BINARY: &str = "/usr/bin/hdiutil";
pub const DEFAULT_BRIDGE: &str = "/usr/bin/osascript";

pub const VALID_CONFIG_KEYS: &[&str] = &["log", "mode", "binary", "bridge"];
pub const VALID_MODES: &[&str] = &["direct", "bridged"];
pub const VALID_BOOLS: &[&str] = &["true", "false"];

// ── Config schema ────────────────────────────────────────────────────────────

/// How the external binary is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Spawn the binary as a child process.
    #[default]
    Direct,
    /// Submit a shell command to the scripting bridge.
    Bridged,
}

impl ExecutionMode {
    /// Map the host capability flag: bridged only when spawning is not allowed.
    #[must_use]
    pub const fn from_capability(can_spawn: bool) -> Self {
        if can_spawn { Self::Direct } else { Self::Bridged }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Bridged => "bridged",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration stored in `~/.hdi/config.yaml`.
///
/// Set once at startup and read on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HdiutilConfig {
    /// Emit diagnostic events for every invocation.
    pub log: bool,
    pub mode: ExecutionMode,
    /// Path of the disk-image utility.
    pub binary: String,
    /// Path of the scripting bridge used in bridged mode.
    pub bridge: String,
}

impl Default for HdiutilConfig {
    fn default() -> Self {
        Self {
            log: false,
            mode: ExecutionMode::Direct,
            binary: DEFAULT_BINARY.to_string(),
            bridge: DEFAULT_BRIDGE.to_string(),
        }
    }
}

impl HdiutilConfig {
    /// Validate and apply a `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value is not valid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "log" => self.log = value == "true",
            "mode" => {
                self.mode = if value == "bridged" {
                    ExecutionMode::Bridged
                } else {
                    ExecutionMode::Direct
                };
            }
            "binary" => self.binary = value.to_string(),
            "bridge" => self.bridge = value.to_string(),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let allowed = match key {
        "log" => VALID_BOOLS,
        "mode" => VALID_MODES,
        "binary" | "bridge" if value.trim().is_empty() => {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                valid: "a non-empty executable path".to_string(),
            }
            .into());
        }
        _ => return Ok(()),
    };
    if !allowed.contains(&value) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: allowed.join(", "),
        }
        .into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
