//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is built once from the global flags and the stored
//! configuration. Commands take `&AppContext` and never read flags or
//! configuration themselves.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::application::services::{Hdiutil, bridge_script};
use crate::domain::{ExecutionMode, HdiutilConfig, Verb};
use crate::infra::config::YamlConfigStore;
use crate::infra::{SystemExecutor, system_hdiutil};
use crate::output::{HumanRenderer, Invocation, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Execution flags layered over the stored configuration.
pub struct ExecutionFlags {
    /// Force diagnostic logging on.
    pub log: bool,
    /// Treat the host as unable to spawn processes, forcing bridged mode.
    pub bridged: bool,
    /// Print invocations instead of running them.
    pub dry_run: bool,
}

impl ExecutionFlags {
    /// Layer the flags over `config`. Flags only ever switch features on.
    pub fn apply(&self, config: &mut HdiutilConfig) {
        if self.log {
            config.log = true;
        }
        let can_spawn = !self.bridged;
        if !can_spawn {
            config.mode = ExecutionMode::from_capability(can_spawn);
        }
    }
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub output: OutputFlags,
    pub execution: ExecutionFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration persistence.
    pub config_store: YamlConfigStore,
    /// Effective configuration: the stored file with flag overrides applied.
    pub config: HdiutilConfig,
    /// When `true`, commands report their invocation and stop.
    pub dry_run: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored configuration cannot be read.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let config_store = YamlConfigStore::new();
        let mut config = config_store.load()?;
        flags.execution.apply(&mut config);

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store,
            config,
            dry_run: flags.execution.dry_run,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json,
        }
    }

    /// Production client for the effective configuration.
    #[must_use]
    pub fn hdiutil(&self) -> Hdiutil<SystemExecutor> {
        system_hdiutil(&self.config)
    }

    /// Describe how `verb` would be executed under the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if bridged mode cannot build a script for `verb`.
    pub fn invocation(
        &self,
        verb: &Verb,
        working_dir: Option<&std::path::Path>,
    ) -> Result<Invocation> {
        let script = match self.config.mode {
            ExecutionMode::Direct => None,
            ExecutionMode::Bridged => Some(bridge_script(
                &self.config.binary,
                &verb.display(),
                working_dir,
            )?),
        };
        Ok(Invocation {
            program: self.config.binary.clone(),
            args: verb.tokens(),
            mode: self.config.mode,
            script,
        })
    }
}

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, plus this
/// crate's debug events when `log` is enabled. Installing twice is a no-op.
pub fn init_tracing(log: bool) {
    let default = if log { "warn,hdiutil=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .try_init();
}
