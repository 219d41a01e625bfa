// ABOUTME: Retention error taxonomy with SNAFU context selectors.
// ABOUTME: Separates run-aborting failures from per-image failures the engine recovers from.

use snafu::Snafu;

use crate::allowlist::AllowListError;
use crate::runtime::{ImageError, ImageRecord};
use crate::types::ImageId;

/// Errors raised while deciding and removing images.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RetentionError {
    /// The allow-list could not be read; nothing may be removed.
    #[snafu(display("allow-list unavailable: {source}"))]
    ConfigUnavailable { source: AllowListError },

    /// The runtime could not list its images.
    #[snafu(display("image inventory unavailable: {source}"))]
    InventoryUnavailable { source: ImageError },

    /// An image reported neither repo tags nor repo digests.
    #[snafu(display("cannot identify image {}: no repo tags or digests ({record:?})", record.id))]
    UnidentifiableImage { record: ImageRecord },

    /// Removing a single image failed.
    #[snafu(display("failed to remove image {id}: {source}"))]
    RemovalFailed { id: ImageId, source: ImageError },
}

/// Whether an error ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Stop the run and exit non-zero.
    Fatal,
    /// Log and continue with the next image.
    Recoverable,
}

impl RetentionError {
    pub fn severity(&self) -> Severity {
        match self {
            RetentionError::ConfigUnavailable { .. }
            | RetentionError::InventoryUnavailable { .. }
            | RetentionError::UnidentifiableImage { .. } => Severity::Fatal,
            RetentionError::RemovalFailed { .. } => Severity::Recoverable,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// The image the error concerns, if it concerns a single image.
    pub fn image_id(&self) -> Option<&ImageId> {
        match self {
            RetentionError::UnidentifiableImage { record } => Some(&record.id),
            RetentionError::RemovalFailed { id, .. } => Some(id),
            _ => None,
        }
    }
}
