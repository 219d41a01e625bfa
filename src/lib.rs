// ABOUTME: Library root for shear - exposes the retention pipeline for testing.
// ABOUTME: The main binary is in main.rs.

pub mod allowlist;
pub mod config;
pub mod error;
pub mod logging;
pub mod retention;
pub mod runtime;
pub mod types;
