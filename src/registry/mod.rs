//! Template source registry.
//!
//! Maps namespaces to the templates directory of each registered source.
//! A source is registered under its fully qualified dotted name and, when
//! dotted, under its trailing component as a short alias:
//!
//! | Reference                     | Source               |
//! |-------------------------------|----------------------|
//! | `django.contrib.admin:x.html` | `django.contrib.admin` |
//! | `admin:x.html`                | `django.contrib.admin` |
//!
//! Registration order is kept and is the only tie-break during broadcast
//! lookups.
//!
//! # Example
//!
//! ```
//! use app_namespace::registry::{SourceDescriptor, SourceRegistry};
//!
//! let registry = SourceRegistry::new(vec![SourceDescriptor::without_path("virtual")]);
//! assert!(registry.get_root("virtual").is_err());
//! ```

pub mod cached;
pub mod index;
pub mod source;

// Re-exports
pub use cached::SourceRegistry;
pub use index::{RegistryIndex, DEFAULT_TEMPLATES_DIR};
pub use source::{alias_for, SourceDescriptor, SourceEntry};
