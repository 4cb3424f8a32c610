//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! scripting bridge, and configuration persistence.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod osascript;

use crate::application::services::{Executor, Hdiutil};
use crate::domain::HdiutilConfig;

use command_runner::TokioCommandRunner;
use osascript::OsaScriptBridge;

/// Executor wired to the real process runner and `osascript`.
pub type SystemExecutor = Executor<TokioCommandRunner, OsaScriptBridge<TokioCommandRunner>>;

/// Build a production client from configuration.
#[must_use]
pub fn system_hdiutil(config: &HdiutilConfig) -> Hdiutil<SystemExecutor> {
    let bridge = OsaScriptBridge::new(TokioCommandRunner::new(), config.bridge.clone());
    Hdiutil::new(Executor::from_config(config, TokioCommandRunner::new(), bridge))
}
