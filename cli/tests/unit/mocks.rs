//! Shared test doubles for the execution ports.
//!
//! Every double records what it was asked to run so tests can assert on the
//! exact program and argument sequence.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use anyhow::Result;
use hdiutil::HdiutilError;
use hdiutil::application::ports::{CommandRunner, ScriptBridge};

// ── Output helpers ────────────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: ExitStatus::from_raw(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(stderr: &[u8]) -> Output {
    Output {
        status: ExitStatus::from_raw(1 << 8),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Runner: canned reply, records calls ──────────────────────────────────────

pub struct RecordingRunner {
    reply: Output,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingRunner {
    pub fn new(reply: Output) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(stdout: &str) -> Self {
        Self::new(ok_output(stdout.as_bytes()))
    }

    /// Program and arguments of every call, in order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Arguments of the only call.
    pub fn single_args(&self) -> Vec<String> {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls[0].1.clone()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
        ));
        Ok(self.reply.clone())
    }
}

// ── Runner: spawn always fails ───────────────────────────────────────────────

pub struct MissingBinary;

impl CommandRunner for MissingBinary {
    async fn run(&self, program: &str, _: &[&str]) -> Result<Output> {
        anyhow::bail!("failed to spawn {program}: No such file or directory")
    }
}

// ── Bridge: canned reply, records scripts ────────────────────────────────────

pub struct RecordingBridge {
    reply: Option<String>,
    scripts: Mutex<Vec<String>>,
}

impl RecordingBridge {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            scripts: Mutex::new(Vec::new()),
        }
    }

    /// A bridge whose scripts fail without diagnostic text.
    pub fn failing() -> Self {
        Self {
            reply: None,
            scripts: Mutex::new(Vec::new()),
        }
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

impl ScriptBridge for RecordingBridge {
    async fn run_script(&self, source: &str) -> Result<String, HdiutilError> {
        self.scripts.lock().unwrap().push(source.to_string());
        self.reply.clone().ok_or(HdiutilError::Process(None))
    }
}

// ── Bridge: must never be reached ────────────────────────────────────────────

pub struct NoBridge;

impl ScriptBridge for NoBridge {
    async fn run_script(&self, _: &str) -> Result<String, HdiutilError> {
        Err(HdiutilError::Unexpected("bridge not expected in this test".into()))
    }
}
