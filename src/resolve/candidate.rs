//! Candidate locations and loaded templates.

use crate::error::{NamespaceError, Result};
use std::path::PathBuf;

/// Default prefix of namespaced display names.
pub const DEFAULT_PREFIX: &str = "app_namespace";

/// One location worth trying for a template reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Namespace (or directory label) the candidate belongs to.
    pub namespace: String,
    /// Template path relative to the source's templates root.
    pub template_name: String,
    /// Absolute file path to read.
    pub path: PathBuf,
    /// Stable human-readable identifier, used in diagnostics.
    pub display_name: String,
}

impl Candidate {
    /// Candidate served by a namespaced source:
    /// display name `<prefix>:<namespace>:<template_name>`.
    pub fn namespaced(
        prefix: &str,
        namespace: impl Into<String>,
        template_name: impl Into<String>,
        path: PathBuf,
    ) -> Self {
        let namespace = namespace.into();
        let template_name = template_name.into();
        let display_name = format!("{}:{}:{}", prefix, namespace, template_name);
        Self {
            namespace,
            template_name,
            path,
            display_name,
        }
    }

    /// Candidate inside a plain directory; display name is the file path.
    pub fn in_directory(
        label: impl Into<String>,
        template_name: impl Into<String>,
        path: PathBuf,
    ) -> Self {
        Self {
            namespace: label.into(),
            template_name: template_name.into(),
            display_name: path.display().to_string(),
            path,
        }
    }
}

/// Contents of a template together with the candidate that served them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    pub contents: Vec<u8>,
    pub candidate: Candidate,
}

impl LoadedTemplate {
    pub fn new(contents: Vec<u8>, candidate: Candidate) -> Self {
        Self {
            contents,
            candidate,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.candidate.display_name
    }

    /// Contents decoded as UTF-8.
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.contents).map_err(|source| NamespaceError::Decode {
            name: self.candidate.display_name.clone(),
            source,
        })
    }

    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.contents, self.candidate.display_name)
    }
}
