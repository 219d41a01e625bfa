// ABOUTME: Capability traits for container runtimes.
// ABOUTME: Defines ImageOps, the listing and removal surface the retention engine consumes.

mod image;
mod shared_types;

pub use image::{ImageError, ImageOps};
pub use shared_types::*;
