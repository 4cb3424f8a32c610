//! Options accepted by `hdiutil create`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    CryptoMethod, ImageFormat, Size, ToArgs, flag, flag_key_value, flag_path, flag_value, toggle,
};

/// Format of an empty read/write image (`-type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageType {
    /// Read/write UDIF (the default).
    #[serde(rename = "UDIF")]
    Udif,
    /// Single-file image that grows on demand.
    #[serde(rename = "SPARSE")]
    Sparse,
    /// Directory-bundle-backed image that grows on demand.
    #[serde(rename = "SPARSEBUNDLE")]
    SparseBundle,
    /// DVD/CD master.
    #[serde(rename = "UDTO")]
    Udto,
}

impl ImageType {
    pub const ALL: [Self; 4] = [Self::Udif, Self::Sparse, Self::SparseBundle, Self::Udto];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Udif => "UDIF",
            Self::Sparse => "SPARSE",
            Self::SparseBundle => "SPARSEBUNDLE",
            Self::Udto => "UDTO",
        }
    }
}

/// Filesystem written by `-fs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileSystem {
    #[serde(rename = "HFS+")]
    Hfs,
    #[serde(rename = "HFS+J")]
    JournaledHfs,
    #[serde(rename = "HFSX")]
    Hfsx,
    #[serde(rename = "JHFS+X")]
    JournaledHfsx,
    #[serde(rename = "MS-DOS")]
    MsDos,
    #[serde(rename = "UDF")]
    Udf,
    #[serde(rename = "APFS")]
    Apfs,
}

impl FileSystem {
    pub const ALL: [Self; 7] = [
        Self::Hfs,
        Self::JournaledHfs,
        Self::Hfsx,
        Self::JournaledHfsx,
        Self::MsDos,
        Self::Udf,
        Self::Apfs,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hfs => "HFS+",
            Self::JournaledHfs => "HFS+J",
            Self::Hfsx => "HFSX",
            Self::JournaledHfsx => "JHFS+X",
            Self::MsDos => "MS-DOS",
            Self::Udf => "UDF",
            Self::Apfs => "APFS",
        }
    }
}

/// Partition layout (`-layout`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Single partition, Master Boot Record map.
    #[serde(rename = "MBRSPUD")]
    MbrSpud,
    /// Single partition, Apple Partition Map.
    #[serde(rename = "SPUD")]
    Spud,
    #[serde(rename = "UNIVERSAL CD")]
    UniversalCd,
    /// No partition map.
    #[serde(rename = "NONE")]
    None,
    /// Single partition, GUID Partition Map (the default).
    #[serde(rename = "GPTSPUD")]
    GptSpud,
    #[serde(rename = "SPCD")]
    SpCd,
    #[serde(rename = "UNIVERSAL HD")]
    UniversalHd,
    #[serde(rename = "ISOCD")]
    IsoCd,
}

impl Layout {
    pub const ALL: [Self; 8] = [
        Self::MbrSpud,
        Self::Spud,
        Self::UniversalCd,
        Self::None,
        Self::GptSpud,
        Self::SpCd,
        Self::UniversalHd,
        Self::IsoCd,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MbrSpud => "MBRSPUD",
            Self::Spud => "SPUD",
            Self::UniversalCd => "UNIVERSAL CD",
            Self::None => "NONE",
            Self::GptSpud => "GPTSPUD",
            Self::SpCd => "SPCD",
            Self::UniversalHd => "UNIVERSAL HD",
            Self::IsoCd => "ISOCD",
        }
    }
}

// Display and case-insensitive FromStr over the wire names.
macro_rules! wire_names {
    ($($ty:ty => $what:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::ALL
                        .into_iter()
                        .find(|v| v.as_str().eq_ignore_ascii_case(s))
                        .ok_or_else(|| {
                            let valid: Vec<_> = Self::ALL.iter().map(|v| v.as_str()).collect();
                            format!(concat!("unknown ", $what, " '{}' (valid: {})"), s, valid.join(", "))
                        })
                }
            }
        )*
    };
}

wire_names!(ImageType => "image type", FileSystem => "filesystem", Layout => "layout");

/// A single `create` option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreateOption {
    // Size specifiers
    Size(Size),
    /// Image size in 512-byte sectors.
    Sectors(u64),
    /// Image size in megabytes.
    Megabytes(u64),
    /// Copy a folder into the new image. May be repeated.
    SrcFolder(PathBuf),
    /// Image the blocks of a device.
    SrcDevice(String),
    /// Alignment of the final data partition, e.g. `4k`.
    Align(String),

    // Filesystem options
    Type(ImageType),
    Fs(FileSystem),
    VolName(String),
    Uid(u32),
    Gid(u32),
    /// Root directory mode, rendered in octal.
    Mode(u32),
    AutoStretch(bool),
    Stretch(Size),
    /// Extra arguments for the implied newfs program.
    FsArgs(String),

    // Image options
    Layout(Layout),
    Library(String),
    PartitionType(String),
    /// Overwrite an existing file (`-ov`).
    Overwrite,
    /// Attach the image after creating it.
    Attach,

    // Image-from-source options
    Format(ImageFormat),
    SegmentSize(Size),
    CrossDev(bool),
    Scrub(bool),
    AnyOwners(bool),
    SkipUnreadable,
    CopyUid(String),

    // Common options
    Encryption(CryptoMethod),
    StdinPass,
    AgentPass,
    Certificate(PathBuf),
    /// Public key hashes protecting the encrypted image.
    PubKey(Vec<String>),
    ImageKey(String, String),
    TgtImageKey(String, String),
    Plist,
    PuppetStrings,
    Verbose,
    Debug,
    Quiet,
}

impl ToArgs for CreateOption {
    fn write_args(&self, args: &mut Vec<String>) {
        match self {
            Self::Size(size) => flag_value(args, "size", size),
            Self::Sectors(count) => flag_value(args, "sectors", count),
            Self::Megabytes(count) => flag_value(args, "megabytes", count),
            Self::SrcFolder(path) => flag_path(args, "srcfolder", path),
            Self::SrcDevice(device) => flag_value(args, "srcdevice", device),
            Self::Align(alignment) => flag_value(args, "align", alignment),
            Self::Type(kind) => flag_value(args, "type", kind),
            Self::Fs(fs) => flag_value(args, "fs", fs),
            Self::VolName(name) => flag_value(args, "volname", name),
            Self::Uid(uid) => flag_value(args, "uid", uid),
            Self::Gid(gid) => flag_value(args, "gid", gid),
            Self::Mode(mode) => flag_value(args, "mode", format!("{mode:o}")),
            Self::AutoStretch(enabled) => toggle(args, "autostretch", *enabled),
            Self::Stretch(size) => flag_value(args, "stretch", size),
            Self::FsArgs(newfs_args) => flag_value(args, "fsargs", newfs_args),
            Self::Layout(layout) => flag_value(args, "layout", layout),
            Self::Library(bundle) => flag_value(args, "library", bundle),
            Self::PartitionType(kind) => flag_value(args, "partitionType", kind),
            Self::Overwrite => flag(args, "ov"),
            Self::Attach => flag(args, "attach"),
            Self::Format(format) => flag_value(args, "format", format),
            Self::SegmentSize(size) => flag_value(args, "segmentSize", size),
            Self::CrossDev(enabled) => toggle(args, "crossdev", *enabled),
            Self::Scrub(enabled) => toggle(args, "scrub", *enabled),
            Self::AnyOwners(enabled) => toggle(args, "anyowners", *enabled),
            Self::SkipUnreadable => flag(args, "skipunreadable"),
            Self::CopyUid(user) => flag_value(args, "copyuid", user),
            Self::Encryption(method) => flag_value(args, "encryption", method),
            Self::StdinPass => flag(args, "stdinpass"),
            Self::AgentPass => flag(args, "agentpass"),
            Self::Certificate(cert) => flag_path(args, "certificate", cert),
            Self::PubKey(keys) => flag_value(args, "pubkey", keys.join(",")),
            Self::ImageKey(key, value) => flag_key_value(args, "imagekey", key, value),
            Self::TgtImageKey(key, value) => flag_key_value(args, "tgtimagekey", key, value),
            Self::Plist => flag(args, "plist"),
            Self::PuppetStrings => flag(args, "puppetstrings"),
            Self::Verbose => flag(args, "verbose"),
            Self::Debug => flag(args, "debug"),
            Self::Quiet => flag(args, "quiet"),
        }
    }
}
