//! Typed results extracted from `hdiutil` success text.
//!
//! Only `attach` and `create` promise a structured result. Parsing is
//! strict: a missing field is an [`HdiutilError::InvalidOutput`], never a
//! partially filled value.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::HdiutilError;

/// Result of `hdiutil attach`.
///
/// The binary prints the `/dev` node, a tab, a content hint, another tab and
/// the mount point. The first field is the device node; the last is the
/// mount point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachOutput {
    pub device_node: String,
    pub mount_point: PathBuf,
}

impl AttachOutput {
    /// Parse raw `attach` stdout.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOutput` when there is no separator between a device
    /// field and a trailing absolute path.
    pub fn parse(raw: &str) -> Result<Self, HdiutilError> {
        let invalid = || HdiutilError::InvalidOutput {
            verb: "attach",
            output: raw.to_string(),
        };

        let trimmed = raw.trim_end_matches(['\t', '\n', '\r']).trim_start();
        let (device_node, rest) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(invalid)?;

        // Fields are tab-separated; mount points may contain spaces.
        let last = match rest.rfind('\t') {
            Some(idx) => &rest[idx + 1..],
            None => rest.rsplit(char::is_whitespace).next().unwrap_or(rest),
        };
        let mount_dir = last.trim_start();
        if !mount_dir.starts_with('/') {
            return Err(invalid());
        }

        Ok(Self {
            device_node: device_node.to_string(),
            mount_point: PathBuf::from(mount_dir),
        })
    }
}

/// Result of `hdiutil create`: the location of the new image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateOutput {
    pub image_path: PathBuf,
}

impl CreateOutput {
    /// Parse raw `create` stdout, e.g. `"created: /Users/x/test.dmg\n"`.
    ///
    /// The path is the final `": "`-delimited segment. A colon-space inside
    /// diagnostic text ahead of it does not matter; one inside the path
    /// itself would truncate it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOutput` when the text has no `": "` trailer or the
    /// trailer is empty.
    pub fn parse(raw: &str) -> Result<Self, HdiutilError> {
        let invalid = || HdiutilError::InvalidOutput {
            verb: "create",
            output: raw.to_string(),
        };

        let (_, tail) = raw.rsplit_once(": ").ok_or_else(invalid)?;
        let path = tail.trim_end_matches('\n');
        if path.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            image_path: PathBuf::from(path),
        })
    }
}
