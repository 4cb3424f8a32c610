//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use serde::Serialize;

pub use human::HumanRenderer;
pub use styles::Styles;

use crate::domain::options::display_form;
use crate::domain::{AttachOutput, CreateOutput, ExecutionMode, HdiutilConfig};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

// ── Dry-run invocation ───────────────────────────────────────────────────────

/// What `--dry-run` reports instead of executing.
#[derive(Debug, Clone, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub mode: ExecutionMode,
    /// Script handed to the bridge, in bridged mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl Invocation {
    /// `program` followed by the display form of `args`.
    #[must_use]
    pub fn command_line(&self) -> String {
        match self.args.split_first() {
            Some((verb, rest)) if !rest.is_empty() => {
                format!("{} {verb} {}", self.program, display_form(rest))
            }
            Some((verb, _)) => format!("{} {verb}", self.program),
            None => self.program.clone(),
        }
    }
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Human or JSON rendering, chosen once from `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json,
}

#[derive(Serialize)]
struct TextResult<'a> {
    verb: &'a str,
    output: &'a str,
}

#[derive(Serialize)]
struct ConfigResult<'a> {
    path: &'a Path,
    config: &'a HdiutilConfig,
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_attach(&self, out: &AttachOutput) -> Result<()> {
        match self {
            Self::Human(h) => h.render_attach(out),
            Self::Json => println!("{}", json::format_value(out)?),
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_create(&self, out: &CreateOutput) -> Result<()> {
        match self {
            Self::Human(h) => h.render_create(out),
            Self::Json => println!("{}", json::format_value(out)?),
        }
        Ok(())
    }

    /// Raw success text of a verb without a structured result.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_text(&self, verb: &str, text: &str) -> Result<()> {
        match self {
            Self::Human(h) => h.render_text(text),
            Self::Json => println!(
                "{}",
                json::format_value(&TextResult { verb, output: text })?
            ),
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_invocation(&self, invocation: &Invocation) -> Result<()> {
        match self {
            Self::Human(h) => h.render_invocation(invocation),
            Self::Json => println!("{}", json::format_value(invocation)?),
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &HdiutilConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(h) => h.render_config(config, path),
            Self::Json => println!("{}", json::format_value(&ConfigResult { path, config })?),
        }
        Ok(())
    }
}
