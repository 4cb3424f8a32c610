//! Options accepted by `hdiutil resize`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{CryptoMethod, Size, ToArgs, flag, flag_key_value, flag_path, flag_value};

/// Target size for `-sectors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorCount {
    Count(u64),
    /// Smallest size the hosted structures allow.
    Min,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeOption {
    Size(Size),
    Sectors(SectorCount),
    /// Resize only the image file, not its partitions and filesystems.
    ImageOnly,
    /// Resize only a partition and its filesystem, not the image.
    PartitionOnly,
    /// Partition to resize. Partition 0 is the partition map itself.
    PartitionNumber(u32),
    GrowOnly,
    ShrinkOnly,
    /// Allow eliminating the trailing free partition of an APM map.
    NoFinalGap,
    /// Print minimum, current and maximum sizes without resizing.
    Limits,
    /// Print resize information for the image and every partition.
    AllLimits,
    Encryption(CryptoMethod),
    StdinPass,
    AgentPass,
    SrcImageKey(String, String),
    Shadow(PathBuf),
    InsecureHttp,
    CaCert(PathBuf),
    Plist,
    Verbose,
    Debug,
    Quiet,
}

impl ToArgs for ResizeOption {
    fn write_args(&self, args: &mut Vec<String>) {
        match self {
            Self::Size(size) => flag_value(args, "size", size),
            Self::Sectors(SectorCount::Count(n)) => flag_value(args, "sectors", n),
            Self::Sectors(SectorCount::Min) => flag_value(args, "sectors", "min"),
            Self::ImageOnly => flag(args, "imageonly"),
            Self::PartitionOnly => flag(args, "partitiononly"),
            Self::PartitionNumber(n) => flag_value(args, "partitionNumber", n),
            Self::GrowOnly => flag(args, "growonly"),
            Self::ShrinkOnly => flag(args, "shrinkonly"),
            Self::NoFinalGap => flag(args, "nofinalgap"),
            Self::Limits => flag(args, "limits"),
            Self::AllLimits => flag(args, "alllimits"),
            Self::Encryption(method) => flag_value(args, "encryption", method),
            Self::StdinPass => flag(args, "stdinpass"),
            Self::AgentPass => flag(args, "agentpass"),
            Self::SrcImageKey(key, value) => flag_key_value(args, "srcimagekey", key, value),
            Self::Shadow(file) => flag_path(args, "shadow", file),
            Self::InsecureHttp => flag(args, "insecurehttp"),
            Self::CaCert(path) => flag_path(args, "cacert", path),
            Self::Plist => flag(args, "plist"),
            Self::Verbose => flag(args, "verbose"),
            Self::Debug => flag(args, "debug"),
            Self::Quiet => flag(args, "quiet"),
        }
    }
}
