//! `hdi attach`: attach a disk image as a device.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::{parse_key_value, preview, warn_stdinpass, with_spinner};
use crate::domain::Verb;
use crate::domain::options::{AttachOption, CryptoMethod};

/// Arguments for the attach command.
#[derive(Args)]
pub struct AttachArgs {
    /// Image to attach
    pub image: PathBuf,

    /// Force the device to be read-only
    #[arg(long, conflicts_with = "readwrite")]
    pub readonly: bool,

    /// Attach read/write even if the image would be attached read-only
    #[arg(long)]
    pub readwrite: bool,

    /// Attach without mounting any filesystem
    #[arg(long, conflicts_with_all = ["mountpoint", "mountroot"])]
    pub nomount: bool,

    /// Mount the single volume at this path
    #[arg(long, value_name = "PATH", conflicts_with = "mountroot")]
    pub mountpoint: Option<PathBuf>,

    /// Mount volumes under this directory instead of /Volumes
    #[arg(long, value_name = "DIR")]
    pub mountroot: Option<PathBuf>,

    /// Hide the mounted volume from the Finder
    #[arg(long)]
    pub nobrowse: bool,

    /// Skip checksum verification
    #[arg(long)]
    pub noverify: bool,

    /// Do not open the mounted volume in the Finder
    #[arg(long)]
    pub noautoopen: bool,

    /// Redirect writes to a shadow file
    #[arg(long, value_name = "FILE")]
    pub shadow: Option<PathBuf>,

    /// Encryption algorithm of the image
    #[arg(long, value_name = "AES-128|AES-256")]
    pub encryption: Option<CryptoMethod>,

    /// Read the passphrase from stdin
    #[arg(long)]
    pub stdinpass: bool,

    /// Image key (repeatable), e.g. `diskimage-class=CRawDiskImage`
    #[arg(long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub imagekey: Vec<(String, String)>,
}

impl AttachArgs {
    /// Options in the order they are passed to hdiutil.
    #[must_use]
    pub fn options(&self) -> Vec<AttachOption> {
        let mut options = Vec::new();
        if self.readonly {
            options.push(AttachOption::ReadOnly);
        }
        if self.readwrite {
            options.push(AttachOption::ReadWrite);
        }
        if self.nomount {
            options.push(AttachOption::Mount(None));
        }
        if let Some(path) = &self.mountpoint {
            options.push(AttachOption::MountPoint(path.clone()));
        }
        if let Some(dir) = &self.mountroot {
            options.push(AttachOption::MountRoot(dir.clone()));
        }
        if self.nobrowse {
            options.push(AttachOption::NoBrowse);
        }
        if self.noverify {
            options.push(AttachOption::Verify(false));
        }
        if self.noautoopen {
            options.push(AttachOption::AutoOpen(false));
        }
        if let Some(path) = &self.shadow {
            options.push(AttachOption::Shadow(path.clone()));
        }
        if let Some(method) = self.encryption {
            options.push(AttachOption::Encryption(method));
        }
        if self.stdinpass {
            options.push(AttachOption::StdinPass);
        }
        for (key, value) in &self.imagekey {
            options.push(AttachOption::ImageKey(key.clone(), value.clone()));
        }
        options
    }
}

/// Run the attach command.
///
/// # Errors
///
/// Returns an error if hdiutil fails or its reply cannot be parsed.
pub async fn run(app: &AppContext, args: AttachArgs) -> Result<ExitCode> {
    let options = args.options();
    warn_stdinpass(app, args.stdinpass);
    let verb = Verb::Attach {
        image: args.image.clone(),
        options: options.clone(),
    };
    if preview(app, &verb, None)? {
        return Ok(ExitCode::SUCCESS);
    }

    let client = app.hdiutil();
    let out = with_spinner(
        app,
        &format!("Attaching {}...", args.image.display()),
        "Attached",
        client.attach(&args.image, options),
    )
    .await?;
    app.renderer().render_attach(&out)?;
    Ok(ExitCode::SUCCESS)
}
