//! Unit tests for the hdiutil library
//!
//! These tests use hand-written runner and bridge doubles and run fast
//! without spawning hdiutil.

mod architecture;
mod hdiutil_service;
mod mocks;
