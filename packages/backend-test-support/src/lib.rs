//! Backend test support utilities
//!
//! Shared helpers for backend test binaries: unified logging initialization
//! and unique test-data generation.

pub mod logging;
pub mod unique_helpers;
