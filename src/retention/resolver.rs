// ABOUTME: Canonical name resolution for runtime-reported images.
// ABOUTME: First repo tag wins, then first repo digest; an image with neither is an error.

use super::error::{RetentionError, UnidentifiableImageSnafu};
use crate::runtime::ImageRecord;
use crate::types::CanonicalName;

/// Derive the name an image is compared against the allow-list with.
///
/// Only the first reference is considered: an image with tags `app:1` and
/// `other:1` resolves to `app` even if `other` is allowed.
pub fn resolve(record: &ImageRecord) -> Result<CanonicalName, RetentionError> {
    if let Some(tag) = record.repo_tags.first() {
        return Ok(CanonicalName::from_repo_tag(tag));
    }

    if let Some(digest) = record.repo_digests.first() {
        return Ok(CanonicalName::from_repo_digest(digest));
    }

    UnidentifiableImageSnafu {
        record: record.clone(),
    }
    .fail()
}
