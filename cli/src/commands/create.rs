//! `hdi create`: create a new disk image.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::{parse_key_value, preview, warn_stdinpass, with_spinner};
use crate::domain::options::{
    CreateOption, CryptoMethod, FileSystem, ImageFormat, ImageType, Layout, Size,
};
use crate::domain::{Verb, create_target, create_working_dir};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Name or path of the new image
    pub image: PathBuf,

    /// Directory to create the image in
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Image size, e.g. `512m` or `10g`
    #[arg(long, value_name = "SIZE", required_unless_present_any = ["srcfolder", "srcdevice"])]
    pub size: Option<Size>,

    /// Copy the contents of this directory into the image (repeatable)
    #[arg(long, value_name = "DIR")]
    pub srcfolder: Vec<PathBuf>,

    /// Copy the contents of this device into the image
    #[arg(long, value_name = "DEVICE", conflicts_with = "srcfolder")]
    pub srcdevice: Option<String>,

    /// Image type for an empty image (UDIF, SPARSE, SPARSEBUNDLE, UDTO)
    #[arg(long = "type", value_name = "TYPE")]
    pub image_type: Option<ImageType>,

    /// Filesystem (HFS+, HFS+J, HFSX, JHFS+X, MS-DOS, UDF, APFS)
    #[arg(long, value_name = "FS")]
    pub fs: Option<FileSystem>,

    /// Volume name
    #[arg(long, value_name = "NAME")]
    pub volname: Option<String>,

    /// Partition layout, e.g. GPTSPUD
    #[arg(long, value_name = "LAYOUT")]
    pub layout: Option<Layout>,

    /// Final image format when copying from a source
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ImageFormat>,

    /// Overwrite an existing image
    #[arg(long)]
    pub ov: bool,

    /// Attach the image after creating it
    #[arg(long)]
    pub attach: bool,

    /// Encrypt the image
    #[arg(long, value_name = "AES-128|AES-256")]
    pub encryption: Option<CryptoMethod>,

    /// Read the passphrase from stdin
    #[arg(long)]
    pub stdinpass: bool,

    /// Image key (repeatable), e.g. `zlib-level=9`
    #[arg(long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub imagekey: Vec<(String, String)>,
}

impl CreateArgs {
    /// Options in the order they are passed to hdiutil.
    #[must_use]
    pub fn options(&self) -> Vec<CreateOption> {
        let mut options = Vec::new();
        if let Some(size) = self.size {
            options.push(CreateOption::Size(size));
        }
        for dir in &self.srcfolder {
            options.push(CreateOption::SrcFolder(dir.clone()));
        }
        if let Some(device) = &self.srcdevice {
            options.push(CreateOption::SrcDevice(device.clone()));
        }
        if let Some(image_type) = self.image_type {
            options.push(CreateOption::Type(image_type));
        }
        if let Some(fs) = self.fs {
            options.push(CreateOption::Fs(fs));
        }
        if let Some(name) = &self.volname {
            options.push(CreateOption::VolName(name.clone()));
        }
        if let Some(layout) = self.layout {
            options.push(CreateOption::Layout(layout));
        }
        if let Some(format) = self.format {
            options.push(CreateOption::Format(format));
        }
        if self.ov {
            options.push(CreateOption::Overwrite);
        }
        if self.attach {
            options.push(CreateOption::Attach);
        }
        if let Some(method) = self.encryption {
            options.push(CreateOption::Encryption(method));
        }
        if self.stdinpass {
            options.push(CreateOption::StdinPass);
        }
        for (key, value) in &self.imagekey {
            options.push(CreateOption::ImageKey(key.clone(), value.clone()));
        }
        options
    }
}

/// Run the create command.
///
/// # Errors
///
/// Returns an error if hdiutil fails or does not report the new image.
pub async fn run(app: &AppContext, args: CreateArgs) -> Result<ExitCode> {
    let options = args.options();
    warn_stdinpass(app, args.stdinpass);
    let destination = args.destination.as_deref();
    let verb = Verb::Create {
        image: create_target(&args.image, destination),
        options: options.clone(),
    };
    if preview(app, &verb, create_working_dir(destination))? {
        return Ok(ExitCode::SUCCESS);
    }

    let client = app.hdiutil();
    let out = with_spinner(
        app,
        &format!("Creating {}...", args.image.display()),
        "Image created",
        client.create(&args.image, destination, options),
    )
    .await?;
    app.renderer().render_create(&out)?;
    Ok(ExitCode::SUCCESS)
}
