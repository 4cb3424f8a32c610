//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{HdiutilConfig, HdiutilError, Verb};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture both output streams.
    ///
    /// No shell is involved: `args` reach the program verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Scripting Bridge Port ─────────────────────────────────────────────────────

/// Executes script source through a host scripting facility.
#[allow(async_fn_in_trait)]
pub trait ScriptBridge {
    /// Run `source` and return the textual result.
    ///
    /// # Errors
    ///
    /// `Process` when the script itself failed, `Unexpected` when the bridge
    /// could not be reached at all.
    async fn run_script(&self, source: &str) -> Result<String, HdiutilError>;
}

// ── Process Executor Port ─────────────────────────────────────────────────────

/// Runs one verb against the external binary and returns its success text.
///
/// Callers never learn which strategy ran.
#[allow(async_fn_in_trait)]
pub trait ProcessExecutor {
    /// # Errors
    ///
    /// Returns `Process` when the binary reported on its error stream, or a
    /// strategy-specific error when the invocation could not be made.
    async fn execute(&self, verb: &Verb, working_dir: Option<&Path>)
    -> Result<String, HdiutilError>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the stored configuration, or defaults when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored file cannot be read or parsed.
    fn load(&self) -> Result<HdiutilConfig>;
    /// Persist `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &HdiutilConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
