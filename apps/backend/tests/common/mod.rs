#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}
