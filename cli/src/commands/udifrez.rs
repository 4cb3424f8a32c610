//! `hdi udifrez`: embed resources in a UDIF image.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::preview;
use crate::domain::Verb;
use crate::domain::options::UdifrezOption;

/// Arguments for the udifrez command.
#[derive(Args)]
pub struct UdifrezArgs {
    /// Image to modify
    pub image: PathBuf,

    /// Property-list file with the resources
    #[arg(long, value_name = "FILE", required_unless_present = "rsrcfork")]
    pub xml: Option<PathBuf>,

    /// File whose resource fork holds the resources
    #[arg(long, value_name = "FILE", conflicts_with = "xml")]
    pub rsrcfork: Option<PathBuf>,

    /// Replace all existing resources
    #[arg(long)]
    pub replaceall: bool,
}

impl UdifrezArgs {
    #[must_use]
    pub fn options(&self) -> Vec<UdifrezOption> {
        let mut options = Vec::new();
        if let Some(file) = &self.xml {
            options.push(UdifrezOption::Xml(file.clone()));
        }
        if let Some(file) = &self.rsrcfork {
            options.push(UdifrezOption::RsrcFork(file.clone()));
        }
        if self.replaceall {
            options.push(UdifrezOption::ReplaceAll);
        }
        options
    }
}

/// Run the udifrez command.
///
/// # Errors
///
/// Returns an error if hdiutil reports a failure.
pub async fn run(app: &AppContext, args: UdifrezArgs) -> Result<ExitCode> {
    let options = args.options();
    let verb = Verb::Udifrez {
        image: args.image.clone(),
        options: options.clone(),
    };
    if preview(app, &verb, None)? {
        return Ok(ExitCode::SUCCESS);
    }
    let text = app.hdiutil().udifrez(&args.image, options).await?;
    app.renderer().render_text(verb.name(), &text)?;
    Ok(ExitCode::SUCCESS)
}
