//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod options;
pub mod parsed;
pub mod verb;

pub use config::{ExecutionMode, HdiutilConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, HdiutilError};
pub use parsed::{AttachOutput, CreateOutput};
pub use verb::{UnsupportedVerb, Verb, create_target, create_working_dir};
