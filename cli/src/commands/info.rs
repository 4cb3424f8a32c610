//! `hdi info`: information about attached images.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::preview;
use crate::domain::Verb;
use crate::domain::options::InfoOption;

/// Arguments for the info command.
#[derive(Args)]
pub struct InfoArgs {
    /// Print a shorter listing
    #[arg(short = 's', long)]
    pub simplified: bool,

    /// Print hdiutil's property-list output
    #[arg(long)]
    pub plist: bool,
}

impl InfoArgs {
    #[must_use]
    pub fn options(&self) -> Vec<InfoOption> {
        let mut options = Vec::new();
        if self.simplified {
            options.push(InfoOption::Simplified);
        }
        if self.plist {
            options.push(InfoOption::Plist);
        }
        options
    }
}

/// Run the info command.
///
/// # Errors
///
/// Returns an error if hdiutil reports a failure.
pub async fn run(app: &AppContext, args: InfoArgs) -> Result<ExitCode> {
    let options = args.options();
    let verb = Verb::Info {
        options: options.clone(),
    };
    if preview(app, &verb, None)? {
        return Ok(ExitCode::SUCCESS);
    }
    let text = app.hdiutil().info(options).await?;
    app.renderer().render_text(verb.name(), &text)?;
    Ok(ExitCode::SUCCESS)
}
