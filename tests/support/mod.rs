// ABOUTME: Test support utilities.
// ABOUTME: In-memory runtime and recording sink for exercising the retention engine.

// Each test binary only uses some of these helpers, so allow dead_code.
#![allow(dead_code)]

use async_trait::async_trait;
use shear::retention::{RemovalSink, RetentionError, RunReport};
use shear::runtime::{ImageError, ImageOps, ImageRecord, RemovalOutcome, RemoveOptions};
use shear::types::{CanonicalName, ImageId};
use std::collections::HashMap;
use std::sync::{Mutex, Once};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("shear=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Scripted reply for one image id.
enum Reply {
    Outcomes(Vec<RemovalOutcome>),
    Fail(String),
}

/// In-memory runtime.
///
/// By default removing an image drops it from the inventory and reports a
/// single `Deleted` outcome for its id.
#[derive(Default)]
pub struct FakeRuntime {
    inventory: Mutex<Vec<ImageRecord>>,
    replies: Mutex<HashMap<ImageId, Reply>>,
    list_error: Option<String>,
    requests: Mutex<Vec<(ImageId, RemoveOptions)>>,
}

impl FakeRuntime {
    pub fn new(inventory: Vec<ImageRecord>) -> Self {
        Self {
            inventory: Mutex::new(inventory),
            ..Default::default()
        }
    }

    pub fn failing_list(message: &str) -> Self {
        Self {
            list_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn reply_with(self, id: &str, outcomes: Vec<RemovalOutcome>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(ImageId::new(id), Reply::Outcomes(outcomes));
        self
    }

    pub fn fail_removal(self, id: &str, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(ImageId::new(id), Reply::Fail(message.to_string()));
        self
    }

    /// Ids submitted for removal, in request order.
    pub fn removed_ids(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.to_string())
            .collect()
    }

    pub fn remove_options(&self) -> Vec<RemoveOptions> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, opts)| *opts)
            .collect()
    }

    pub fn remaining_ids(&self) -> Vec<String> {
        self.inventory
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    }
}

#[async_trait]
impl ImageOps for FakeRuntime {
    async fn list_images(&self) -> Result<Vec<ImageRecord>, ImageError> {
        if let Some(ref message) = self.list_error {
            return Err(ImageError::Runtime(message.clone()));
        }
        Ok(self.inventory.lock().unwrap().clone())
    }

    async fn remove_image(
        &self,
        id: &ImageId,
        options: RemoveOptions,
    ) -> Result<Vec<RemovalOutcome>, ImageError> {
        self.requests.lock().unwrap().push((id.clone(), options));

        let outcomes = match self.replies.lock().unwrap().remove(id) {
            Some(Reply::Fail(message)) => return Err(ImageError::Runtime(message)),
            Some(Reply::Outcomes(outcomes)) => outcomes,
            None => vec![RemovalOutcome::Deleted(id.clone())],
        };

        self.inventory.lock().unwrap().retain(|r| &r.id != id);
        Ok(outcomes)
    }
}

/// Event captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Deleted { image: String, id: String },
    Untagged { image: String, reference: String },
    Failed { image: Option<String>, message: String },
    WouldRemove { image: String, name: String },
    Finished(RunReport),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    pub fn deleted(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Deleted { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn untagged(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Untagged { reference, .. } => Some(reference.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Failed { .. }))
            .collect()
    }

    pub fn finished(&self) -> Option<&RunReport> {
        self.events.iter().find_map(|e| match e {
            Event::Finished(report) => Some(report),
            _ => None,
        })
    }
}

impl RemovalSink for RecordingSink {
    fn deleted(&mut self, image: &ImageId, deleted: &ImageId) {
        self.events.push(Event::Deleted {
            image: image.to_string(),
            id: deleted.to_string(),
        });
    }

    fn untagged(&mut self, image: &ImageId, reference: &str) {
        self.events.push(Event::Untagged {
            image: image.to_string(),
            reference: reference.to_string(),
        });
    }

    fn removal_failed(&mut self, error: &RetentionError) {
        self.events.push(Event::Failed {
            image: error.image_id().map(ToString::to_string),
            message: error.to_string(),
        });
    }

    fn would_remove(&mut self, image: &ImageId, name: &CanonicalName) {
        self.events.push(Event::WouldRemove {
            image: image.to_string(),
            name: name.to_string(),
        });
    }

    fn finished(&mut self, report: &RunReport) {
        self.events.push(Event::Finished(*report));
    }
}
