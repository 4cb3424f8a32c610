//! Command implementations

pub mod attach;
pub mod config;
pub mod convert;
pub mod create;
pub mod detach;
pub mod info;
pub mod resize;
pub mod udifrez;
pub mod usage;

use std::future::Future;
use std::path::Path;

use anyhow::Result;

use crate::app::AppContext;
use crate::domain::{ExecutionMode, HdiutilError, Verb};
use crate::output::progress;

/// Parse a `key=value` pair for image-key style flags.
///
/// # Errors
///
/// Returns an error if there is no `=` or the key is empty.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

/// Report `verb` instead of running it when `--dry-run` is set.
///
/// Returns `true` when the invocation was printed and the command should stop.
///
/// # Errors
///
/// Returns an error if the invocation cannot be rendered.
pub fn preview(app: &AppContext, verb: &Verb, working_dir: Option<&Path>) -> Result<bool> {
    if !app.dry_run {
        return Ok(false);
    }
    let invocation = app.invocation(verb, working_dir)?;
    app.renderer().render_invocation(&invocation)?;
    Ok(true)
}

/// `osascript` gives the shell no stdin, so `-stdinpass` cannot work bridged.
pub fn warn_stdinpass(app: &AppContext, stdinpass: bool) {
    if stdinpass && app.config.mode == ExecutionMode::Bridged && !app.is_json() {
        app.output
            .warn("--stdinpass has no passphrase to read through the scripting bridge");
    }
}

/// Await `call`, showing a spinner on an interactive terminal.
///
/// # Errors
///
/// Returns the call's own error unchanged.
pub async fn with_spinner<T>(
    app: &AppContext,
    working: &str,
    done: &str,
    call: impl Future<Output = Result<T, HdiutilError>>,
) -> Result<T, HdiutilError> {
    if app.is_json() || !app.output.show_progress() {
        return call.await;
    }
    let pb = progress::spinner(working);
    let result = call.await;
    match &result {
        Ok(_) => progress::finish_ok(&pb, done),
        Err(_) => progress::finish_error(&pb),
    }
    result
}
