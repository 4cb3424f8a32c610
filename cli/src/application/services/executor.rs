//! Execution strategies behind the [`ProcessExecutor`] port.
//!
//! [`DirectExecutor`] spawns the binary with the verb's token sequence.
//! [`BridgedExecutor`] renders the verb's display form into a shell command
//! and hands it to a [`ScriptBridge`]. [`Executor`] picks one of the two from
//! the configured [`ExecutionMode`].

use std::path::Path;

use crate::application::ports::{CommandRunner, ProcessExecutor, ScriptBridge};
use crate::domain::options::display_form;
use crate::domain::{ExecutionMode, HdiutilConfig, HdiutilError, Verb};

// ── Direct ────────────────────────────────────────────────────────────────────

/// Spawns the binary directly; no shell interprets the arguments.
pub struct DirectExecutor<R> {
    runner: R,
    binary: String,
    log: bool,
}

impl<R: CommandRunner> DirectExecutor<R> {
    pub fn new(runner: R, binary: impl Into<String>, log: bool) -> Self {
        Self {
            runner,
            binary: binary.into(),
            log,
        }
    }

    pub const fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> ProcessExecutor for DirectExecutor<R> {
    async fn execute(
        &self,
        verb: &Verb,
        _working_dir: Option<&Path>,
    ) -> Result<String, HdiutilError> {
        let tokens = verb.tokens();
        let args: Vec<&str> = tokens.iter().map(String::as_str).collect();
        if self.log {
            tracing::debug!(binary = %self.binary, args = ?tokens, "running");
        }

        let output = self
            .runner
            .run(&self.binary, &args)
            .await
            .map_err(|e| HdiutilError::Unexpected(format!("{e:#}")))?;

        // Exit status is not consulted.
        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if self.log {
                tracing::debug!(verb = verb.name(), stderr = %stderr, "process error");
            }
            return Err(HdiutilError::Process(Some(stderr)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if self.log {
            tracing::debug!(verb = verb.name(), output = %stdout, "completed");
        }
        Ok(stdout)
    }
}

// ── Bridged ───────────────────────────────────────────────────────────────────

/// Routes the verb through a scripting bridge when spawning is unavailable.
pub struct BridgedExecutor<B> {
    bridge: B,
    binary: String,
    log: bool,
}

impl<B: ScriptBridge> BridgedExecutor<B> {
    pub fn new(bridge: B, binary: impl Into<String>, log: bool) -> Self {
        Self {
            bridge,
            binary: binary.into(),
            log,
        }
    }

    pub const fn bridge(&self) -> &B {
        &self.bridge
    }
}

impl<B: ScriptBridge> ProcessExecutor for BridgedExecutor<B> {
    async fn execute(&self, verb: &Verb, working_dir: Option<&Path>) -> Result<String, HdiutilError> {
        let script = bridge_script(&self.binary, &verb.display(), working_dir)?;
        if self.log {
            tracing::debug!(script = %script, "running via bridge");
        }

        let output = self.bridge.run_script(&script).await?;
        if self.log {
            tracing::debug!(verb = verb.name(), output = %output, "completed");
        }
        Ok(output)
    }
}

/// Build the `do shell script` source for one invocation.
///
/// The shell line is `[cd "<dir>" && ]"<binary>" <display>`; the binary is
/// quoted like any other path so a location with spaces stays one word. The
/// line is then embedded in an AppleScript string literal, so `\` and `"`
/// are escaped once more.
///
/// # Errors
///
/// Returns `InvalidBridgeCommand` when the script would contain a NUL.
pub fn bridge_script(
    binary: &str,
    display: &str,
    working_dir: Option<&Path>,
) -> Result<String, HdiutilError> {
    let mut commands = Vec::with_capacity(2);
    if let Some(dir) = working_dir {
        commands.push(format!("cd {}", display_form(&[dir.display().to_string()])));
    }
    commands.push(format!("{} {display}", display_form(&[binary])));

    let shell = commands.join(" && ");
    if shell.contains('\0') {
        return Err(HdiutilError::InvalidBridgeCommand(shell));
    }
    let literal = shell.replace('\\', "\\\\").replace('"', "\\\"");
    Ok(format!("do shell script \"{literal}\""))
}

// ── Strategy selection ────────────────────────────────────────────────────────

/// Closed set of execution strategies, chosen once from configuration.
pub enum Executor<R, B> {
    Direct(DirectExecutor<R>),
    Bridged(BridgedExecutor<B>),
}

impl<R: CommandRunner, B: ScriptBridge> Executor<R, B> {
    /// Select the strategy named by `config.mode`. The unused adapter is dropped.
    pub fn from_config(config: &HdiutilConfig, runner: R, bridge: B) -> Self {
        match config.mode {
            ExecutionMode::Direct => {
                Self::Direct(DirectExecutor::new(runner, config.binary.clone(), config.log))
            }
            ExecutionMode::Bridged => {
                Self::Bridged(BridgedExecutor::new(bridge, config.binary.clone(), config.log))
            }
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        match self {
            Self::Direct(_) => ExecutionMode::Direct,
            Self::Bridged(_) => ExecutionMode::Bridged,
        }
    }
}

impl<R: CommandRunner, B: ScriptBridge> ProcessExecutor for Executor<R, B> {
    async fn execute(&self, verb: &Verb, working_dir: Option<&Path>) -> Result<String, HdiutilError> {
        match self {
            Self::Direct(direct) => direct.execute(verb, working_dir).await,
            Self::Bridged(bridged) => bridged.execute(verb, working_dir).await,
        }
    }
}
