#![allow(dead_code)]

pub mod app_builder;
pub mod mem_store;

// Re-export only what current tests actually import
pub use app_builder::create_test_app;
pub use mem_store::MemStore;
