// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::error::ConnectionError;
use crate::runtime::traits::{ImageError, ImageOps, ImageRecord, RemovalOutcome, RemoveOptions};
use crate::runtime::types::{RuntimeInfo, RuntimeType};
use crate::types::ImageId;
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{ImageDeleteResponseItem, ImageSummary};
use bollard::query_parameters::{ListImagesOptions, RemoveImageOptions};
use std::time::Duration;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_image_list_error(e: bollard::errors::Error) -> ImageError {
    ImageError::Runtime(format!("failed to list images: {}", e))
}

fn map_image_remove_error(e: bollard::errors::Error, id: &ImageId) -> ImageError {
    match &e {
        bollard::errors::Error::DockerResponseServerError { status_code, .. }
            if *status_code == 404 =>
        {
            ImageError::NotFound(id.to_string())
        }
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 409 => ImageError::InUse(message.clone()),
        _ => ImageError::Runtime(e.to_string()),
    }
}

// =============================================================================
// Response Conversion
// =============================================================================

impl From<ImageSummary> for ImageRecord {
    fn from(summary: ImageSummary) -> Self {
        ImageRecord {
            id: ImageId::new(summary.id),
            repo_tags: summary.repo_tags,
            repo_digests: summary.repo_digests,
        }
    }
}

/// Classify one removal response entry.
///
/// A deletion takes precedence over an untagging. Entries carrying neither
/// are dropped.
fn into_outcome(item: ImageDeleteResponseItem) -> Option<RemovalOutcome> {
    match (item.deleted, item.untagged) {
        (Some(deleted), _) if !deleted.is_empty() => {
            Some(RemovalOutcome::Deleted(ImageId::new(deleted)))
        }
        (_, Some(untagged)) if !untagged.is_empty() => Some(RemovalOutcome::Untagged(untagged)),
        _ => None,
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    ///
    /// The socket is not contacted until the first request.
    pub fn connect(info: &RuntimeInfo, timeout: Duration) -> Result<Self, ConnectionError> {
        let client = Docker::connect_with_unix(
            &info.socket_path,
            timeout.as_secs(),
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| ConnectionError::ConnectionFailed(format!("{}: {}", info.socket_path, e)))?;
        Ok(Self::new(client, info.runtime_type))
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }
}

#[async_trait]
impl ImageOps for BollardRuntime {
    async fn list_images(&self) -> Result<Vec<ImageRecord>, ImageError> {
        let opts = ListImagesOptions {
            all: false,
            ..Default::default()
        };

        let summaries = self
            .client
            .list_images(Some(opts))
            .await
            .map_err(map_image_list_error)?;

        Ok(summaries.into_iter().map(ImageRecord::from).collect())
    }

    async fn remove_image(
        &self,
        id: &ImageId,
        options: RemoveOptions,
    ) -> Result<Vec<RemovalOutcome>, ImageError> {
        let opts = RemoveImageOptions {
            force: options.force,
            noprune: !options.prune_children,
            ..Default::default()
        };

        let response = self
            .client
            .remove_image(id.as_str(), Some(opts), None)
            .await
            .map_err(|e| map_image_remove_error(e, id))?;

        Ok(response.into_iter().filter_map(into_outcome).collect())
    }
}
