//! `hdi resize`: resize an image or its partition.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::{preview, with_spinner};
use crate::domain::Verb;
use crate::domain::options::{ResizeOption, SectorCount, Size};

/// Arguments for the resize command.
#[derive(Args)]
pub struct ResizeArgs {
    /// Image to resize
    pub image: PathBuf,

    /// New size, e.g. `20g`
    #[arg(long, value_name = "SIZE", conflicts_with_all = ["sectors", "min"])]
    pub size: Option<Size>,

    /// New size in 512-byte sectors
    #[arg(long, value_name = "N", conflicts_with = "min")]
    pub sectors: Option<u64>,

    /// Shrink to the smallest size the filesystem allows
    #[arg(long)]
    pub min: bool,

    /// Resize the image file only, not the partition
    #[arg(long, conflicts_with = "partitiononly")]
    pub imageonly: bool,

    /// Resize the partition only, not the image file
    #[arg(long)]
    pub partitiononly: bool,

    /// Only allow the image to grow
    #[arg(long, conflicts_with = "shrinkonly")]
    pub growonly: bool,

    /// Only allow the image to shrink
    #[arg(long)]
    pub shrinkonly: bool,

    /// Print the minimum, current and maximum sizes without resizing
    #[arg(long)]
    pub limits: bool,
}

impl ResizeArgs {
    /// Options in the order they are passed to hdiutil.
    #[must_use]
    pub fn options(&self) -> Vec<ResizeOption> {
        let mut options = Vec::new();
        if let Some(size) = self.size {
            options.push(ResizeOption::Size(size));
        }
        if let Some(count) = self.sectors {
            options.push(ResizeOption::Sectors(SectorCount::Count(count)));
        }
        if self.min {
            options.push(ResizeOption::Sectors(SectorCount::Min));
        }
        if self.imageonly {
            options.push(ResizeOption::ImageOnly);
        }
        if self.partitiononly {
            options.push(ResizeOption::PartitionOnly);
        }
        if self.growonly {
            options.push(ResizeOption::GrowOnly);
        }
        if self.shrinkonly {
            options.push(ResizeOption::ShrinkOnly);
        }
        if self.limits {
            options.push(ResizeOption::Limits);
        }
        options
    }
}

/// Run the resize command.
///
/// # Errors
///
/// Returns an error if hdiutil reports a failure.
pub async fn run(app: &AppContext, args: ResizeArgs) -> Result<ExitCode> {
    let options = args.options();
    let verb = Verb::Resize {
        image: args.image.clone(),
        options: options.clone(),
    };
    if preview(app, &verb, None)? {
        return Ok(ExitCode::SUCCESS);
    }

    let client = app.hdiutil();
    let text = with_spinner(
        app,
        &format!("Resizing {}...", args.image.display()),
        "Resized",
        client.resize(&args.image, options),
    )
    .await?;
    app.renderer().render_text(verb.name(), &text)?;
    Ok(ExitCode::SUCCESS)
}
