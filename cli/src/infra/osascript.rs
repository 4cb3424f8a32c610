//! `osascript`-backed implementation of the `ScriptBridge` port.

use crate::application::ports::{CommandRunner, ScriptBridge};
use crate::domain::HdiutilError;

/// Runs AppleScript source with `osascript -e`.
pub struct OsaScriptBridge<R> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> OsaScriptBridge<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl<R: CommandRunner> ScriptBridge for OsaScriptBridge<R> {
    async fn run_script(&self, source: &str) -> Result<String, HdiutilError> {
        let output = self
            .runner
            .run(&self.program, &["-e", source])
            .await
            .map_err(|e| HdiutilError::Unexpected(format!("{e:#}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let text = stderr.trim_end();
            return Err(HdiutilError::Process(
                (!text.is_empty()).then(|| text.to_string()),
            ));
        }

        let mut stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.ends_with('\n') {
            stdout.pop();
        }
        Ok(stdout)
    }
}
