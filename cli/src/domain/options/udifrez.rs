//! Options accepted by `hdiutil udifrez` (embed resources, e.g. a license).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ToArgs, flag, flag_path};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UdifrezOption {
    /// Copy resources from the XML in this file.
    Xml(PathBuf),
    /// Copy resources from this file's resource fork.
    RsrcFork(PathBuf),
    /// Delete all pre-existing resources in the image.
    ReplaceAll,
}

impl ToArgs for UdifrezOption {
    fn write_args(&self, args: &mut Vec<String>) {
        match self {
            Self::Xml(file) => flag_path(args, "xml", file),
            Self::RsrcFork(file) => flag_path(args, "rsrcfork", file),
            Self::ReplaceAll => flag(args, "replaceall"),
        }
    }
}
