//! Error types for namespaced template loading.
//!
//! This module defines [`NamespaceError`], the error type shared by every
//! loader in the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - [`NamespaceError::NotFound`] is per-candidate and recoverable: loaders
//!   absorb it and move on to the next candidate
//! - [`NamespaceError::TemplateNotFound`] is the final "no candidate matched"
//!   failure, which a [`LoaderChain`](crate::LoaderChain) falls through on
//! - Everything else aborts the lookup and reaches the caller unchanged

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for template resolution.
#[derive(Debug, Error)]
pub enum NamespaceError {
    /// Reference does not follow the `namespace:path` grammar.
    #[error("Malformed template reference '{reference}': {reason}")]
    MalformedReference { reference: String, reason: String },

    /// No registered source answers to this namespace.
    #[error("Unknown template namespace: {namespace}")]
    NamespaceNotFound { namespace: String },

    /// Relative path resolves outside the source's templates root.
    #[error("Template path '{path}' escapes root {root}")]
    PathEscape { root: PathBuf, path: String },

    /// One candidate file does not exist.
    #[error("Template file not found: {path}")]
    NotFound { path: PathBuf },

    /// Reading a candidate failed for a reason other than absence.
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every candidate for a reference was tried without success.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String, tried: Vec<Tried> },

    /// Template contents are not valid UTF-8.
    #[error("Template '{name}' is not valid UTF-8: {source}")]
    Decode {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NamespaceError {
    /// Build a final not-found error with no candidates tried.
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            name: name.into(),
            tried: Vec::new(),
        }
    }

    /// Whether this error means "not here" rather than "broken".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::TemplateNotFound { .. })
    }
}

/// One candidate a loader attempted, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tried {
    /// Display name of the candidate.
    pub name: String,
    /// Why the candidate did not produce a template.
    pub reason: String,
}

impl Tried {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for template resolution.
pub type Result<T> = std::result::Result<T, NamespaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_reference_displays_reference_and_reason() {
        let err = NamespaceError::MalformedReference {
            reference: "admin:".into(),
            reason: "empty template path".into(),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"Malformed template reference 'admin:': empty template path"
        );
    }

    #[test]
    fn path_escape_displays_root_and_path() {
        let err = NamespaceError::PathEscape {
            root: PathBuf::from("/srv/admin/templates"),
            path: "../secrets.txt".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/admin/templates"));
        assert!(msg.contains("../secrets.txt"));
    }

    #[test]
    fn template_not_found_displays_name() {
        let err = NamespaceError::template_not_found("demo:admin/base.html");
        insta::assert_snapshot!(err.to_string(), @"Template not found: demo:admin/base.html");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = NamespaceError::Io {
            path: PathBuf::from("/t/base.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn not_found_kinds_are_classified() {
        assert!(NamespaceError::NotFound {
            path: PathBuf::from("/x")
        }
        .is_not_found());
        assert!(NamespaceError::template_not_found("x").is_not_found());
        assert!(!NamespaceError::NamespaceNotFound {
            namespace: "x".into()
        }
        .is_not_found());
    }

    #[test]
    fn anyhow_converts_to_other() {
        let err: NamespaceError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, NamespaceError::Other(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(NamespaceError::NamespaceNotFound {
                namespace: "missing".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
