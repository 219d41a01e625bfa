// ABOUTME: Image operations trait for container runtimes.
// ABOUTME: List the local image inventory and force-remove images.

use super::shared_types::{ImageRecord, RemovalOutcome, RemoveOptions};
use crate::types::ImageId;
use async_trait::async_trait;

/// Image operations: list inventory, remove.
///
/// Not sealed: the retention engine is exercised against in-memory
/// implementations in tests.
#[async_trait]
pub trait ImageOps: Send + Sync {
    /// List all top-level images known to the runtime as one snapshot.
    async fn list_images(&self) -> Result<Vec<ImageRecord>, ImageError>;

    /// Remove an image.
    ///
    /// Returns every deletion and untagging the runtime performed as a
    /// consequence, which may include other references and parent layers.
    async fn remove_image(
        &self,
        id: &ImageId,
        options: RemoveOptions,
    ) -> Result<Vec<RemovalOutcome>, ImageError>;
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("image in use, cannot remove: {0}")]
    InUse(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
