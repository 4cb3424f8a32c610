//! `hdi detach`: detach an attached image.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::{preview, with_spinner};
use crate::domain::Verb;

/// Arguments for the detach command.
#[derive(Args)]
pub struct DetachArgs {
    /// Device node (e.g. `disk2`) or mount point
    pub device: String,

    /// Ignore open files on mounted volumes
    #[arg(short, long)]
    pub force: bool,
}

/// Run the detach command.
///
/// # Errors
///
/// Returns an error if hdiutil reports a failure.
pub async fn run(app: &AppContext, args: DetachArgs) -> Result<ExitCode> {
    let verb = Verb::Detach {
        device: args.device.clone(),
        force: args.force,
    };
    if preview(app, &verb, None)? {
        return Ok(ExitCode::SUCCESS);
    }

    let client = app.hdiutil();
    let text = with_spinner(
        app,
        &format!("Detaching {}...", args.device),
        &format!("Detached {}", args.device),
        client.detach(&args.device, args.force),
    )
    .await?;
    app.renderer().render_text(verb.name(), &text)?;
    Ok(ExitCode::SUCCESS)
}
