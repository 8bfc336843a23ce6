//! App-namespace template loading.
//!
//! Lets a template reference name the source it comes from as
//! `<namespace>:<path>`, so a project can override a template provided by
//! an application and still extend the original:
//!
//! ```text
//! {% extends "admin:admin/base.html" %}   -> admin's own copy
//! {% extends ":template.html" %}           -> next source's copy
//! ```
//!
//! # Modules
//!
//! - [`config`] - Loader configuration and `app_namespace.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`loader`] - The loader protocol and its implementations
//! - [`registry`] - Namespace to templates-root mapping
//! - [`resolve`] - Reference parsing, path confinement, candidate sequences
//!
//! # Example
//!
//! ```
//! use app_namespace::{LoaderConfig, NamespaceLoader, ResolutionSession};
//!
//! let loader = NamespaceLoader::from_config(&LoaderConfig::default());
//! let mut session = ResolutionSession::new();
//!
//! // No source is registered, so nothing can be found.
//! let err = loader.resolve_template("admin:admin/base.html", &mut session).unwrap_err();
//! assert!(err.is_not_found());
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod registry;
pub mod resolve;

pub use config::LoaderConfig;
pub use error::{NamespaceError, Result, Tried};
pub use loader::{DirectoryLoader, LoaderChain, NamespaceLoader, TemplateLoader};
pub use registry::{SourceDescriptor, SourceEntry, SourceRegistry};
pub use resolve::{Candidate, LoadedTemplate, ResolutionSession, TemplateReference};
