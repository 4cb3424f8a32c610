//! `hdi convert`: convert an image to another format.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::{parse_key_value, preview, warn_stdinpass, with_spinner};
use crate::domain::Verb;
use crate::domain::options::{ConvertOption, CryptoMethod, ImageFormat, Size};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Source image
    pub image: PathBuf,

    /// Target format, e.g. UDZO
    #[arg(short, long, value_name = "FORMAT")]
    pub format: ImageFormat,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Overwrite an existing output file
    #[arg(long)]
    pub ov: bool,

    /// Split the result into segments of this size
    #[arg(long, value_name = "SIZE")]
    pub segment_size: Option<Size>,

    /// Number of compression threads
    #[arg(long, value_name = "N")]
    pub tasks: Option<u32>,

    /// Encrypt the result
    #[arg(long, value_name = "AES-128|AES-256")]
    pub encryption: Option<CryptoMethod>,

    /// Read the passphrase from stdin
    #[arg(long)]
    pub stdinpass: bool,

    /// Image key (repeatable), e.g. `zlib-level=9`
    #[arg(long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub imagekey: Vec<(String, String)>,
}

impl ConvertArgs {
    /// Options in the order they are passed to hdiutil.
    #[must_use]
    pub fn options(&self) -> Vec<ConvertOption> {
        let mut options = Vec::new();
        if self.ov {
            options.push(ConvertOption::Overwrite);
        }
        if let Some(size) = self.segment_size {
            options.push(ConvertOption::SegmentSize(size));
        }
        if let Some(tasks) = self.tasks {
            options.push(ConvertOption::Tasks(tasks));
        }
        if let Some(method) = self.encryption {
            options.push(ConvertOption::Encryption(method));
        }
        if self.stdinpass {
            options.push(ConvertOption::StdinPass);
        }
        for (key, value) in &self.imagekey {
            options.push(ConvertOption::ImageKey(key.clone(), value.clone()));
        }
        options
    }
}

/// Run the convert command.
///
/// # Errors
///
/// Returns an error if hdiutil reports a failure.
pub async fn run(app: &AppContext, args: ConvertArgs) -> Result<ExitCode> {
    let options = args.options();
    warn_stdinpass(app, args.stdinpass);
    let verb = Verb::Convert {
        image: args.image.clone(),
        format: args.format,
        output: args.output.clone(),
        options: options.clone(),
    };
    if preview(app, &verb, None)? {
        return Ok(ExitCode::SUCCESS);
    }

    let client = app.hdiutil();
    let text = with_spinner(
        app,
        &format!("Converting {} to {}...", args.image.display(), args.format),
        &format!("Wrote {}", args.output.display()),
        client.convert(&args.image, args.format, &args.output, options),
    )
    .await?;
    app.renderer().render_text(verb.name(), &text)?;
    Ok(ExitCode::SUCCESS)
}
