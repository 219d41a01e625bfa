// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: ImageRecord, RemoveOptions, RemovalOutcome.

use crate::types::ImageId;

/// One image as reported by the runtime's image listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Runtime identifier, used for removal.
    pub id: ImageId,
    /// `name:tag` references, in the order the runtime reported them.
    pub repo_tags: Vec<String>,
    /// `name@digest` references, in the order the runtime reported them.
    pub repo_digests: Vec<String>,
}

impl ImageRecord {
    pub fn new(id: impl Into<ImageId>) -> Self {
        Self {
            id: id.into(),
            repo_tags: Vec::new(),
            repo_digests: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repo_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_digests<I, S>(mut self, digests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repo_digests = digests.into_iter().map(Into::into).collect();
        self
    }
}

/// Options for an image removal request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Remove even if the image is referenced by containers or other tags.
    pub force: bool,
    /// Also delete untagged parent layers that become unreferenced.
    pub prune_children: bool,
}

impl RemoveOptions {
    /// Forced removal that prunes now-unreferenced parents.
    pub const fn forced() -> Self {
        Self {
            force: true,
            prune_children: true,
        }
    }
}

/// One entry of a removal response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Image or layer content was physically deleted.
    Deleted(ImageId),
    /// A reference was dropped; the content is still reachable elsewhere.
    Untagged(String),
}
