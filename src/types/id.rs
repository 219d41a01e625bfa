// ABOUTME: Runtime-assigned image identifier.
// ABOUTME: Opaque to shear; handed back verbatim when requesting removal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the container runtime reports for an image or layer.
///
/// Usually a content digest such as `sha256:3f57d9401f8d...`, but shear never
/// interprets it; it is only logged and passed back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use = "IDs reference images and should not be ignored"]
pub struct ImageId(String);

impl ImageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
