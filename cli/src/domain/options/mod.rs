//! Option catalogs and the argument serializer.
//!
//! Every verb owns a closed option enum. Each enum implements [`ToArgs`],
//! which appends the option's tokens to an argument vector. Rendering is
//! pure and total: any well-typed option produces its tokens, in the order
//! the caller supplied, with no deduplication.

pub mod attach;
pub mod convert;
pub mod create;
pub mod info;
pub mod resize;
pub mod udifrez;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use attach::{AttachOption, MountMode};
pub use convert::ConvertOption;
pub use create::{CreateOption, FileSystem, ImageType, Layout};
pub use info::InfoOption;
pub use resize::{ResizeOption, SectorCount};
pub use udifrez::UdifrezOption;

/// Prefix character shared by every flag token.
pub const FLAG_PREFIX: char = '-';

/// Serializes an option into command-line tokens.
pub trait ToArgs {
    /// Append this option's tokens to `args`.
    fn write_args(&self, args: &mut Vec<String>);
}

/// Render an ordered option sequence into its token sequence.
#[must_use]
pub fn render<O: ToArgs>(options: &[O]) -> Vec<String> {
    let mut args = Vec::new();
    for option in options {
        option.write_args(&mut args);
    }
    args
}

/// Human-readable form of a token sequence.
///
/// Flag tokens stay bare; everything else is double-quoted. A token that
/// starts with `-` but carries whitespace or shell metacharacters (for
/// example an `-fsargs` payload such as `-c c=64,a=16`) is quoted as well.
/// The result is for diagnostics and the scripting bridge only, never for
/// direct execution.
#[must_use]
pub fn display_form<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| display_token(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_token(token: &str) -> String {
    if is_bare_flag(token) {
        token.to_string()
    } else {
        quote(token)
    }
}

fn is_bare_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
        && !token
            .chars()
            .any(|c| c.is_whitespace() || "\"'\\$`;&|<>()*?!#~".contains(c))
}

fn quote(token: &str) -> String {
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('"');
    for c in token.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

// ── Token helpers shared by the catalogs ─────────────────────────────────────

pub(crate) fn flag(args: &mut Vec<String>, name: &str) {
    args.push(format!("{FLAG_PREFIX}{name}"));
}

/// Negatable flag: `-name` when enabled, `-noname` otherwise.
pub(crate) fn toggle(args: &mut Vec<String>, name: &str, enabled: bool) {
    if enabled {
        flag(args, name);
    } else {
        args.push(format!("{FLAG_PREFIX}no{name}"));
    }
}

pub(crate) fn flag_value(args: &mut Vec<String>, name: &str, value: impl fmt::Display) {
    flag(args, name);
    args.push(value.to_string());
}

pub(crate) fn flag_path(args: &mut Vec<String>, name: &str, path: &Path) {
    flag(args, name);
    args.push(path.display().to_string());
}

/// Image-key style option: the flag, then a single `key=value` token.
pub(crate) fn flag_key_value(args: &mut Vec<String>, name: &str, key: &str, value: &str) {
    flag(args, name);
    args.push(format!("{key}={value}"));
}

// ── Shared value types ───────────────────────────────────────────────────────

/// Encryption algorithm accepted by `-encryption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CryptoMethod {
    /// 128-bit AES (the default algorithm).
    #[serde(rename = "AES-128")]
    Aes128,
    /// 256-bit AES.
    #[serde(rename = "AES-256")]
    Aes256,
}

impl CryptoMethod {
    /// Wire-level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aes128 => "AES-128",
            Self::Aes256 => "AES-256",
        }
    }
}

impl fmt::Display for CryptoMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CryptoMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AES-128" => Ok(Self::Aes128),
            "AES-256" => Ok(Self::Aes256),
            _ => Err(format!("unknown encryption '{s}' (valid: AES-128, AES-256)")),
        }
    }
}

/// A size in the style of `mkfile(8)`, extended with tera/peta/exa units.
///
/// Note that `b` counts 512-byte sectors, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Sectors(u64),
    Kilobytes(u64),
    Megabytes(u64),
    Gigabytes(u64),
    Terabytes(u64),
    Petabytes(u64),
    Exabytes(u64),
}

impl Size {
    fn parts(self) -> (u64, char) {
        match self {
            Self::Sectors(n) => (n, 'b'),
            Self::Kilobytes(n) => (n, 'k'),
            Self::Megabytes(n) => (n, 'm'),
            Self::Gigabytes(n) => (n, 'g'),
            Self::Terabytes(n) => (n, 't'),
            Self::Petabytes(n) => (n, 'p'),
            Self::Exabytes(n) => (n, 'e'),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (magnitude, unit) = self.parts();
        write!(f, "{magnitude}{unit}")
    }
}

impl std::str::FromStr for Size {
    type Err = String;

    /// Parse a compact size such as `512m` or `2g`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(unit) = s.chars().last() else {
            return Err("empty size".to_string());
        };
        let digits = &s[..s.len() - unit.len_utf8()];
        let n: u64 = digits
            .parse()
            .map_err(|_| format!("invalid size '{s}': expected <number><b|k|m|g|t|p|e>"))?;
        match unit.to_ascii_lowercase() {
            'b' => Ok(Self::Sectors(n)),
            'k' => Ok(Self::Kilobytes(n)),
            'm' => Ok(Self::Megabytes(n)),
            'g' => Ok(Self::Gigabytes(n)),
            't' => Ok(Self::Terabytes(n)),
            'p' => Ok(Self::Petabytes(n)),
            'e' => Ok(Self::Exabytes(n)),
            _ => Err(format!("invalid size unit in '{s}': expected one of b, k, m, g, t, p, e")),
        }
    }
}

/// Final image format for `convert -format` and `create -format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    /// read/write
    Udrw,
    /// read-only
    Udro,
    /// compressed (ADC)
    Udco,
    /// compressed (zlib)
    Udzo,
    /// compressed (bzip2), deprecated
    Udbz,
    /// compressed (lzfse)
    Ulfo,
    /// compressed (lzma)
    Ulmo,
    /// entire device
    Ufbi,
    /// iPod image
    Ipod,
    /// sparse bundle
    Udsb,
    /// sparse
    Udsp,
    /// DVD/CD master
    Udto,
}

impl ImageFormat {
    pub const ALL: [Self; 12] = [
        Self::Udrw,
        Self::Udro,
        Self::Udco,
        Self::Udzo,
        Self::Udbz,
        Self::Ulfo,
        Self::Ulmo,
        Self::Ufbi,
        Self::Ipod,
        Self::Udsb,
        Self::Udsp,
        Self::Udto,
    ];

    /// Wire-level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Udrw => "UDRW",
            Self::Udro => "UDRO",
            Self::Udco => "UDCO",
            Self::Udzo => "UDZO",
            Self::Udbz => "UDBZ",
            Self::Ulfo => "ULFO",
            Self::Ulmo => "ULMO",
            Self::Ufbi => "UFBI",
            Self::Ipod => "IPOD",
            Self::Udsb => "UDSB",
            Self::Udsp => "UDSP",
            Self::Udto => "UDTO",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown image format '{s}' (valid: {})", valid.join(", "))
            })
    }
}
