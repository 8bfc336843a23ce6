//! Template source descriptors and registered entries.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A source of templates as supplied by the host application.
///
/// Descriptors are consumed in order; that order decides which source wins
/// during a broadcast lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceDescriptor {
    /// Fully qualified, dot-separated name (e.g. `django.contrib.admin`).
    pub name: String,

    /// Directory of the source itself; its templates live in a subdirectory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SourceDescriptor {
    /// Create a descriptor for a source living at `path`.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
        }
    }

    /// Create a descriptor for a source with no directory on disk.
    pub fn without_path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }
}

/// A registered source with an existing templates directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Name the source was registered under.
    pub canonical_name: String,
    /// Trailing dotted component, only when the name is dotted.
    pub alias: Option<String>,
    /// Absolute templates directory.
    pub root_directory: PathBuf,
}

impl SourceEntry {
    pub fn new(canonical_name: impl Into<String>, root_directory: impl Into<PathBuf>) -> Self {
        let canonical_name = canonical_name.into();
        let alias = alias_for(&canonical_name);
        Self {
            canonical_name,
            alias,
            root_directory: root_directory.into(),
        }
    }

    /// Templates directory of this source.
    pub fn root(&self) -> &Path {
        &self.root_directory
    }
}

/// Short alias of a dotted name: `django.contrib.admin` -> `admin`.
pub fn alias_for(name: &str) -> Option<String> {
    if !name.contains('.') {
        return None;
    }
    name.rsplit('.')
        .next()
        .filter(|tail| !tail.is_empty())
        .map(str::to_string)
}
