//! `hdi usage`: hdiutil's own per-verb usage summary.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::preview;
use crate::domain::Verb;

/// Run the usage command.
///
/// # Errors
///
/// Returns an error if `hdiutil help` fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    if preview(app, &Verb::Help, None)? {
        return Ok(ExitCode::SUCCESS);
    }
    let text = app.hdiutil().help().await?;
    app.renderer().render_text(Verb::Help.name(), &text)?;
    Ok(ExitCode::SUCCESS)
}
