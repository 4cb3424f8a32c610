//! Options accepted by `hdiutil convert`.
//!
//! The output format and destination are not options: they are positional
//! parameters of [`crate::domain::verb::Verb::Convert`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{CryptoMethod, Size, ToArgs, flag, flag_key_value, flag_path, flag_value};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvertOption {
    /// Overwrite the target file if it exists (`-ov`).
    Overwrite,
    /// Partition alignment in sectors. The default is 4 (2K).
    Align(u32),
    /// Add a partition map.
    Pmap,
    /// Segment the output into pieces of this size.
    SegmentSize(Size),
    /// Compression thread count.
    Tasks(u32),
    Encryption(CryptoMethod),
    StdinPass,
    AgentPass,
    Certificate(PathBuf),
    ImageKey(String, String),
    SrcImageKey(String, String),
    TgtImageKey(String, String),
    Shadow(PathBuf),
    InsecureHttp,
    CaCert(PathBuf),
    Plist,
    PuppetStrings,
    Verbose,
    Debug,
    Quiet,
}

impl ToArgs for ConvertOption {
    fn write_args(&self, args: &mut Vec<String>) {
        match self {
            Self::Overwrite => flag(args, "ov"),
            Self::Align(sectors) => flag_value(args, "align", sectors),
            Self::Pmap => flag(args, "pmap"),
            Self::SegmentSize(size) => flag_value(args, "segmentSize", size),
            Self::Tasks(count) => flag_value(args, "tasks", count),
            Self::Encryption(method) => flag_value(args, "encryption", method),
            Self::StdinPass => flag(args, "stdinpass"),
            Self::AgentPass => flag(args, "agentpass"),
            Self::Certificate(cert) => flag_path(args, "certificate", cert),
            Self::ImageKey(key, value) => flag_key_value(args, "imagekey", key, value),
            Self::SrcImageKey(key, value) => flag_key_value(args, "srcimagekey", key, value),
            Self::TgtImageKey(key, value) => flag_key_value(args, "tgtimagekey", key, value),
            Self::Shadow(file) => flag_path(args, "shadow", file),
            Self::InsecureHttp => flag(args, "insecurehttp"),
            Self::CaCert(path) => flag_path(args, "cacert", path),
            Self::Plist => flag(args, "plist"),
            Self::PuppetStrings => flag(args, "puppetstrings"),
            Self::Verbose => flag(args, "verbose"),
            Self::Debug => flag(args, "debug"),
            Self::Quiet => flag(args, "quiet"),
        }
    }
}
