// ABOUTME: Destination for retention events.
// ABOUTME: TracingSink writes structured records; tests substitute their own recorder.

use super::error::RetentionError;
use super::report::RunReport;
use crate::types::{CanonicalName, ImageId};

/// Receives every event the retention engine reports.
pub trait RemovalSink {
    /// Content was deleted while removing `image`.
    fn deleted(&mut self, image: &ImageId, deleted: &ImageId);

    /// A reference was dropped while removing `image`.
    fn untagged(&mut self, image: &ImageId, reference: &str);

    /// A recoverable error; the run continues.
    fn removal_failed(&mut self, error: &RetentionError);

    /// Dry run: `image` is eligible but was left in place.
    fn would_remove(&mut self, image: &ImageId, name: &CanonicalName);

    /// The pass over the inventory completed.
    fn finished(&mut self, report: &RunReport);
}

/// Writes retention events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RemovalSink for TracingSink {
    fn deleted(&mut self, image: &ImageId, deleted: &ImageId) {
        tracing::info!(id = %deleted, image = %image, "image deleted");
    }

    fn untagged(&mut self, image: &ImageId, reference: &str) {
        tracing::debug!(id = %reference, image = %image, "image untagged");
    }

    fn removal_failed(&mut self, error: &RetentionError) {
        match error.image_id() {
            Some(id) => tracing::error!(id = %id, "{}", error),
            None => tracing::error!("{}", error),
        }
    }

    fn would_remove(&mut self, image: &ImageId, name: &CanonicalName) {
        tracing::info!(id = %image, name = %name, "image would be removed (dry run)");
    }

    fn finished(&mut self, report: &RunReport) {
        tracing::info!(
            examined = report.examined,
            kept = report.kept,
            removal_requests = report.removal_requests,
            deleted = report.deleted,
            untagged = report.untagged,
            failed = report.failed,
            would_remove = report.would_remove,
            "retention pass complete"
        );
    }
}
