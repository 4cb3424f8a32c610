//! Integration tests for the hdi CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior. Every
//! invocation that could reach hdiutil uses `--dry-run`, so they run on any
//! platform.

mod cli_tests;
