//! Options accepted by `hdiutil info`.

use serde::{Deserialize, Serialize};

use super::{ToArgs, flag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfoOption {
    /// Framework and driver version only (`-s`).
    Simplified,
    Plist,
    Verbose,
    Quiet,
    Debug,
}

impl ToArgs for InfoOption {
    fn write_args(&self, args: &mut Vec<String>) {
        let name = match self {
            Self::Simplified => "s",
            Self::Plist => "plist",
            Self::Verbose => "verbose",
            Self::Quiet => "quiet",
            Self::Debug => "debug",
        };
        flag(args, name);
    }
}
