//! Typed construction and execution of macOS `hdiutil` invocations.
//!
//! Build a [`domain::Verb`] (or call a method on
//! [`application::services::Hdiutil`]), and the crate renders the argument
//! sequence, runs the binary directly or through the scripting bridge, and
//! parses structured results for `attach` and `create`.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;

pub use application::services::Hdiutil;
pub use domain::{HdiutilConfig, HdiutilError, Verb};
