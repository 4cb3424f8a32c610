//! Human-readable renderings of command results.

use owo_colors::OwoColorize as _;

use crate::domain::{AttachOutput, CreateOutput, HdiutilConfig};
use crate::infra::config::CONFIG_ENV;
use crate::output::{Invocation, OutputContext};

/// Renders results for a terminal.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    pub fn render_attach(&self, out: &AttachOutput) {
        self.ctx.success("Image attached");
        self.ctx.kv("device:     ", &out.device_node);
        self.ctx.kv("mount point:", &out.mount_point.display().to_string());
    }

    pub fn render_create(&self, out: &CreateOutput) {
        self.ctx
            .success(&format!("Created {}", out.image_path.display()));
    }

    /// Print the binary's success text as-is.
    pub fn render_text(&self, text: &str) {
        if self.ctx.quiet || text.is_empty() {
            return;
        }
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    }

    /// Print a dry-run invocation. Never suppressed: it is the command's output.
    pub fn render_invocation(&self, invocation: &Invocation) {
        println!("{}", invocation.command_line().style(self.ctx.styles.command));
        if let Some(script) = &invocation.script {
            println!("{}", script.style(self.ctx.styles.dim));
        }
    }

    pub fn render_config(&self, config: &HdiutilConfig, path: &std::path::Path) {
        println!();
        self.ctx.header(&format!("Configuration ({})", path.display()));
        if !path.exists() {
            self.ctx.info("No configuration file yet; showing defaults");
        }
        println!();
        println!("  {:<20} {}", "log:", config.log);
        println!("  {:<20} {}", "mode:", config.mode);
        println!("  {:<20} {}", "binary:", config.binary);
        println!("  {:<20} {}", "bridge:", config.bridge);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_ENV, "NO_COLOR", "RUST_LOG"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}
