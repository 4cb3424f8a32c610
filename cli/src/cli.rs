//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, ExecutionFlags, OutputFlags, init_tracing};
use crate::commands;

/// Typed front end for the macOS disk-image utility
#[derive(Parser)]
#[command(
    name = "hdi",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log every invocation and its captured output to stderr
    #[arg(long, global = true)]
    pub log: bool,

    /// Run through the scripting bridge instead of spawning hdiutil
    #[arg(long, global = true)]
    pub bridged: bool,

    /// Print the hdiutil invocation without running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show hdiutil's own usage summary
    Usage,

    /// Attach a disk image as a device
    Attach(commands::attach::AttachArgs),

    /// Detach an attached image
    Detach(commands::detach::DetachArgs),

    /// Create a new image
    Create(commands::create::CreateArgs),

    /// Convert an image to another format
    Convert(commands::convert::ConvertArgs),

    /// Show information about attached images
    Info(commands::info::InfoArgs),

    /// Resize an image or its partition
    Resize(commands::resize::ResizeArgs),

    /// Embed resources in a UDIF image
    Udifrez(commands::udifrez::UdifrezArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            log,
            bridged,
            dry_run,
            command,
        } = self;

        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            execution: ExecutionFlags {
                log,
                bridged,
                dry_run,
            },
        })?;
        init_tracing(app.config.log);

        match command {
            Command::Usage => commands::usage::run(&app).await,
            Command::Attach(args) => commands::attach::run(&app, args).await,
            Command::Detach(args) => commands::detach::run(&app, args).await,
            Command::Create(args) => commands::create::run(&app, args).await,
            Command::Convert(args) => commands::convert::run(&app, args).await,
            Command::Info(args) => commands::info::run(&app, args).await,
            Command::Resize(args) => commands::resize::run(&app, args).await,
            Command::Udifrez(args) => commands::udifrez::run(&app, args).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
        }
    }
}
