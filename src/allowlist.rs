// ABOUTME: Allow-list loading from a line-oriented text file.
// ABOUTME: One bare image name per non-empty line, matched exactly against canonical names.

use crate::types::CanonicalName;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllowListError {
    #[error("cannot open allow-list {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read allow-list: {0}")]
    Read(#[from] std::io::Error),
}

/// Image names exempt from removal.
///
/// Built once per run and never modified afterwards. Lines are stored
/// verbatim apart from the line terminator, so `" nginx"` and `"Nginx"` are
/// distinct from `"nginx"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowSet {
    names: HashSet<String>,
}

impl AllowSet {
    /// Load the allow-list from a file.
    pub fn load(path: &Path) -> Result<Self, AllowListError> {
        let file = File::open(path).map_err(|source| AllowListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build the allow-list from any line-oriented source.
    ///
    /// Lines that are not valid UTF-8 are kept with invalid bytes replaced
    /// and a warning; only I/O failures are errors.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, AllowListError> {
        let mut names = HashSet::new();
        for (index, line) in reader.split(b'\n').enumerate() {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }
            let name = match String::from_utf8(line) {
                Ok(name) => name,
                Err(e) => {
                    let name = String::from_utf8_lossy(e.as_bytes()).into_owned();
                    tracing::warn!(
                        line = index + 1,
                        name = %name,
                        "allow-list entry is not valid UTF-8, keeping it with replacement characters"
                    );
                    name
                }
            };
            names.insert(name);
        }
        Ok(Self { names })
    }

    pub fn contains(&self, name: &CanonicalName) -> bool {
        self.names.contains(name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty())
                .collect(),
        }
    }
}
