//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution. It enforces no deadline of its own.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`: uses tokio for async process execution.
///
/// Stdin is inherited so `-stdinpass` can read a piped passphrase. Both
/// output pipes are drained concurrently with `wait()` so a child that fills
/// one pipe cannot deadlock. The child is killed if the returned future is
/// dropped before completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout_handle = child.stdout.take();
        let stderr_handle = child.stderr.take();

        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            drain(stdout_handle),
            drain(stderr_handle),
        );

        Ok(Output {
            status: status.with_context(|| format!("waiting for {program}"))?,
            stdout: stdout.with_context(|| format!("reading stdout of {program}"))?,
            stderr: stderr.with_context(|| format!("reading stderr of {program}"))?,
        })
    }
}

/// Read a pipe to EOF. A missing pipe reads as empty.
async fn drain<P: AsyncRead + Unpin>(pipe: Option<P>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}
