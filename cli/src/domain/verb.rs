//! Verb model: one variant per supported `hdiutil` operation.
//!
//! A [`Verb`] is immutable once built. [`Verb::tokens`] is the authoritative
//! argument sequence for execution; [`Verb::display`] is its human-readable
//! rendering for logs and the scripting bridge. Both are deterministic.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::options::{
    AttachOption, ConvertOption, CreateOption, ImageFormat, InfoOption, ResizeOption,
    UdifrezOption, display_form, render,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    /// `help`
    Help,
    /// `attach <image> [options...]`
    Attach {
        image: PathBuf,
        options: Vec<AttachOption>,
    },
    /// `detach <device> [-force]`
    Detach { device: String, force: bool },
    /// `create <image> [options...]`
    Create {
        image: PathBuf,
        options: Vec<CreateOption>,
    },
    /// `convert -format <FMT> -o <outfile> [options...] <image>`
    Convert {
        image: PathBuf,
        format: ImageFormat,
        output: PathBuf,
        options: Vec<ConvertOption>,
    },
    /// `info [options...]`
    Info { options: Vec<InfoOption> },
    /// `resize [options...] <image>`
    Resize {
        image: PathBuf,
        options: Vec<ResizeOption>,
    },
    /// `udifrez [options...] <image>`
    Udifrez {
        image: PathBuf,
        options: Vec<UdifrezOption>,
    },
}

impl Verb {
    /// The verb word passed as the first argument.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Attach { .. } => "attach",
            Self::Detach { .. } => "detach",
            Self::Create { .. } => "create",
            Self::Convert { .. } => "convert",
            Self::Info { .. } => "info",
            Self::Resize { .. } => "resize",
            Self::Udifrez { .. } => "udifrez",
        }
    }

    /// Full argument sequence, verb word first, in the order the binary's
    /// grammar requires for this verb.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let mut args = vec![self.name().to_string()];
        match self {
            Self::Help => {}
            Self::Attach { image, options } => {
                args.push(path_token(image));
                args.extend(render(options));
            }
            Self::Detach { device, force } => {
                args.push(device.clone());
                if *force {
                    args.push("-force".to_string());
                }
            }
            Self::Create { image, options } => {
                args.push(path_token(image));
                args.extend(render(options));
            }
            Self::Convert {
                image,
                format,
                output,
                options,
            } => {
                args.push("-format".to_string());
                args.push(format.as_str().to_string());
                args.push("-o".to_string());
                args.push(path_token(output));
                args.extend(render(options));
                args.push(path_token(image));
            }
            Self::Info { options } => args.extend(render(options)),
            Self::Resize { image, options } => {
                args.extend(render(options));
                args.push(path_token(image));
            }
            Self::Udifrez { image, options } => {
                args.extend(render(options));
                args.push(path_token(image));
            }
        }
        args
    }

    /// Single-string rendering: the verb word bare, then the display form of
    /// the remaining tokens. Never fed back into direct execution.
    #[must_use]
    pub fn display(&self) -> String {
        let tokens = self.tokens();
        let rest = display_form(&tokens[1..]);
        if rest.is_empty() {
            self.name().to_string()
        } else {
            format!("{} {rest}", self.name())
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn path_token(path: &Path) -> String {
    path.display().to_string()
}

/// Location of an image about to be created, optionally inside `destination`.
///
/// Follows [`Path::join`]: an absolute `image` replaces `destination`
/// entirely, so `-d` only applies to relative image names.
#[must_use]
pub fn create_target(image: &Path, destination: Option<&Path>) -> PathBuf {
    match destination {
        Some(dir) => dir.join(image),
        None => image.to_path_buf(),
    }
}

/// Directory a bridged `create` changes into before running.
///
/// Only an absolute `destination` qualifies. With a relative one the target
/// from [`create_target`] already carries the directory, and changing into
/// it first would resolve that directory twice.
#[must_use]
pub fn create_working_dir(destination: Option<&Path>) -> Option<&Path> {
    destination.filter(|dir| dir.is_absolute())
}

// ── Verbs this layer never executes ─────────────────────────────────────────

/// `hdiutil` verbs that are permanently unavailable through this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsupportedVerb {
    Verify,
    Burn,
    MakeHybrid,
    Compact,
    Checksum,
    Chpass,
    EraseKeys,
    Unflatten,
    Flatten,
    Fsid,
    MountVol,
    Unmount,
    ImageInfo,
    IsEncrypted,
    Plugins,
    InternetEnable,
    Segment,
    Pmap,
    Udifderez,
}

impl UnsupportedVerb {
    pub const ALL: [Self; 19] = [
        Self::Verify,
        Self::Burn,
        Self::MakeHybrid,
        Self::Compact,
        Self::Checksum,
        Self::Chpass,
        Self::EraseKeys,
        Self::Unflatten,
        Self::Flatten,
        Self::Fsid,
        Self::MountVol,
        Self::Unmount,
        Self::ImageInfo,
        Self::IsEncrypted,
        Self::Plugins,
        Self::InternetEnable,
        Self::Segment,
        Self::Pmap,
        Self::Udifderez,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Burn => "burn",
            Self::MakeHybrid => "makehybrid",
            Self::Compact => "compact",
            Self::Checksum => "checksum",
            Self::Chpass => "chpass",
            Self::EraseKeys => "erasekeys",
            Self::Unflatten => "unflatten",
            Self::Flatten => "flatten",
            Self::Fsid => "fsid",
            Self::MountVol => "mountvol",
            Self::Unmount => "unmount",
            Self::ImageInfo => "imageinfo",
            Self::IsEncrypted => "isencrypted",
            Self::Plugins => "plugins",
            Self::InternetEnable => "internet-enable",
            Self::Segment => "segment",
            Self::Pmap => "pmap",
            Self::Udifderez => "udifderez",
        }
    }

    /// Look up a verb word, e.g. `"burn"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == name)
    }
}

impl fmt::Display for UnsupportedVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
