//! Options accepted by `hdiutil attach`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{CryptoMethod, ToArgs, flag, flag_key_value, flag_path, flag_value, toggle};

/// Whether filesystems in the image must mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountMode {
    /// Attach fails if no filesystem mounts (the default).
    Required,
    Optional,
    Suppressed,
}

impl MountMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Suppressed => "suppressed",
        }
    }
}

/// A single `attach` option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachOption {
    // Device options
    /// Force the resulting device to be read-only.
    ReadOnly,
    /// Override the framework's decision to attach read-only.
    ReadWrite,
    /// Attach in-kernel (`true`) or with a helper process (`false`).
    Kernel(bool),
    /// Prevent the image from being detached. Root only.
    NotRemovable,

    // Mount options
    /// `Some(mode)` renders `-mount <mode>`; `None` renders `-nomount`.
    Mount(Option<MountMode>),
    /// Mount volumes under this directory instead of `/Volumes`.
    MountRoot(PathBuf),
    /// Like `MountRoot`, with randomized mount point names.
    MountRandom(PathBuf),
    /// Mount the single volume at this path.
    MountPoint(PathBuf),
    /// Hide volumes from the Finder.
    NoBrowse,
    /// Honor (`true`) or ignore filesystem owners.
    Owners(bool),

    // Processing options
    IgnoreBadChecksums(bool),
    Idme(bool),
    IdmeReveal(bool),
    IdmeTrash(bool),
    Verify(bool),
    AutoOpen(bool),
    AutoOpenReadOnly(bool),
    AutoOpenReadWrite(bool),
    AutoFsck(bool),

    // Common options
    Encryption(CryptoMethod),
    StdinPass,
    AgentPass,
    /// Keychain holding the secret for the creation-time certificate.
    Recover(PathBuf),
    ImageKey(String, String),
    /// Key/value attached to the device in the IOKit registry.
    DriveKey(String, String),
    /// Redirect writes to a shadow file.
    Shadow(PathBuf),
    InsecureHttp,
    CaCert(PathBuf),
    PuppetStrings,
    Plist,
    Verbose,
    Quiet,
    Debug,
}

impl ToArgs for AttachOption {
    fn write_args(&self, args: &mut Vec<String>) {
        match self {
            Self::ReadOnly => flag(args, "readonly"),
            Self::ReadWrite => flag(args, "readwrite"),
            Self::Kernel(enabled) => toggle(args, "kernel", *enabled),
            Self::NotRemovable => flag(args, "notremovable"),
            Self::Mount(Some(mode)) => flag_value(args, "mount", mode.as_str()),
            Self::Mount(None) => flag(args, "nomount"),
            Self::MountRoot(path) => flag_path(args, "mountroot", path),
            Self::MountRandom(path) => flag_path(args, "mountrandom", path),
            Self::MountPoint(path) => flag_path(args, "mountpoint", path),
            Self::NoBrowse => flag(args, "nobrowse"),
            Self::Owners(on) => flag_value(args, "owners", if *on { "on" } else { "off" }),
            Self::IgnoreBadChecksums(enabled) => toggle(args, "ignorebadchecksums", *enabled),
            Self::Idme(enabled) => toggle(args, "idme", *enabled),
            Self::IdmeReveal(enabled) => toggle(args, "idmereveal", *enabled),
            Self::IdmeTrash(enabled) => toggle(args, "idmetrash", *enabled),
            Self::Verify(enabled) => toggle(args, "verify", *enabled),
            Self::AutoOpen(enabled) => toggle(args, "autoopen", *enabled),
            Self::AutoOpenReadOnly(enabled) => toggle(args, "autoopenro", *enabled),
            Self::AutoOpenReadWrite(enabled) => toggle(args, "autoopenrw", *enabled),
            Self::AutoFsck(enabled) => toggle(args, "autofsck", *enabled),
            Self::Encryption(method) => flag_value(args, "encryption", method),
            Self::StdinPass => flag(args, "stdinpass"),
            Self::AgentPass => flag(args, "agentpass"),
            Self::Recover(keychain) => flag_path(args, "recover", keychain),
            Self::ImageKey(key, value) => flag_key_value(args, "imagekey", key, value),
            Self::DriveKey(key, value) => flag_key_value(args, "drivekey", key, value),
            Self::Shadow(file) => flag_path(args, "shadow", file),
            Self::InsecureHttp => flag(args, "insecurehttp"),
            Self::CaCert(path) => flag_path(args, "cacert", path),
            Self::PuppetStrings => flag(args, "puppetstrings"),
            Self::Plist => flag(args, "plist"),
            Self::Verbose => flag(args, "verbose"),
            Self::Quiet => flag(args, "quiet"),
            Self::Debug => flag(args, "debug"),
        }
    }
}
