// ABOUTME: Bare repository name derived from a repo tag or repo digest.
// ABOUTME: The key used for allow-list membership; comparison is exact and case-sensitive.

use std::fmt;

/// Repository name with the tag or digest suffix stripped.
///
/// The split happens at the first delimiter from the left, so a registry
/// port is treated as the start of the tag: `localhost:5000/app:1` yields
/// `localhost`. A reference without the delimiter is kept whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Name portion of a `name:tag` reference.
    pub fn from_repo_tag(reference: &str) -> Self {
        Self::split_at(reference, ':')
    }

    /// Name portion of a `name@digest` reference.
    pub fn from_repo_digest(reference: &str) -> Self {
        Self::split_at(reference, '@')
    }

    fn split_at(reference: &str, delimiter: char) -> Self {
        let name = reference
            .split_once(delimiter)
            .map_or(reference, |(name, _)| name);
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
