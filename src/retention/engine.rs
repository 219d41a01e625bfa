// ABOUTME: Retention engine driving one garbage-collection pass.
// ABOUTME: Lists the inventory, keeps allow-listed images and force-removes the rest.

use snafu::{IntoError, ResultExt};

use super::error::{InventoryUnavailableSnafu, RemovalFailedSnafu, RetentionError};
use super::report::RunReport;
use super::resolver::resolve;
use super::sink::RemovalSink;
use crate::allowlist::AllowSet;
use crate::runtime::{ImageOps, ImageRecord, RemovalOutcome, RemoveOptions};

/// Runs the list, resolve, decide, remove loop against a runtime.
///
/// Images are processed strictly one at a time in the order the runtime
/// listed them. Only fatal errors are returned from [`run`](Self::run);
/// failed removals are reported to the sink and counted in the report.
pub struct RetentionEngine<'a, R, S> {
    runtime: &'a R,
    allow: AllowSet,
    sink: S,
    dry_run: bool,
}

impl<'a, R, S> RetentionEngine<'a, R, S>
where
    R: ImageOps,
    S: RemovalSink,
{
    pub fn new(runtime: &'a R, allow: AllowSet, sink: S) -> Self {
        Self {
            runtime,
            allow,
            sink,
            dry_run: false,
        }
    }

    /// Report eligible images without removing them.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Perform one pass over the current image inventory.
    ///
    /// # Errors
    ///
    /// - [`RetentionError::InventoryUnavailable`] if listing fails; nothing is removed.
    /// - [`RetentionError::UnidentifiableImage`] if an image has neither tags nor
    ///   digests; images after it are not processed.
    pub async fn run(&mut self) -> Result<RunReport, RetentionError> {
        let inventory = self
            .runtime
            .list_images()
            .await
            .context(InventoryUnavailableSnafu)?;

        tracing::debug!(
            images = inventory.len(),
            allowed = self.allow.len(),
            dry_run = self.dry_run,
            "listed image inventory"
        );

        let mut report = RunReport::default();
        for record in &inventory {
            self.process(record, &mut report).await?;
        }

        self.sink.finished(&report);
        Ok(report)
    }

    async fn process(
        &mut self,
        record: &ImageRecord,
        report: &mut RunReport,
    ) -> Result<(), RetentionError> {
        let name = resolve(record)?;
        report.examined += 1;

        if self.allow.contains(&name) {
            tracing::trace!(id = %record.id, name = %name, "image is allow-listed");
            report.kept += 1;
            return Ok(());
        }

        if self.dry_run {
            report.would_remove += 1;
            self.sink.would_remove(&record.id, &name);
            return Ok(());
        }

        report.removal_requests += 1;
        match self
            .runtime
            .remove_image(&record.id, RemoveOptions::forced())
            .await
        {
            Ok(outcomes) => {
                for outcome in outcomes {
                    match outcome {
                        RemovalOutcome::Deleted(deleted) => {
                            report.deleted += 1;
                            self.sink.deleted(&record.id, &deleted);
                        }
                        RemovalOutcome::Untagged(reference) => {
                            report.untagged += 1;
                            self.sink.untagged(&record.id, &reference);
                        }
                    }
                }
            }
            Err(source) => {
                report.failed += 1;
                let error = RemovalFailedSnafu {
                    id: record.id.clone(),
                }
                .into_error(source);
                self.sink.removal_failed(&error);
            }
        }

        Ok(())
    }
}
