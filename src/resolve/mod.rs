//! Resolution of namespaced template references.
//!
//! A reference is parsed once into a [`ParsedReference`], which
//! [`Candidates`] turns into an ordered, lazily computed sequence of
//! [`Candidate`] locations. Broadcast lookups share a
//! [`ResolutionSession`] ledger across one episode so that nested lookups
//! of the same path advance from one source to the next.
//!
//! # Example
//!
//! ```
//! use app_namespace::resolve::{ParsedReference, TemplateReference};
//!
//! let parsed = ParsedReference::parse("admin:admin/base.html");
//! assert_eq!(
//!     parsed,
//!     ParsedReference::Qualified(TemplateReference::new("admin", "admin/base.html"))
//! );
//! ```

pub mod candidate;
pub mod candidates;
pub mod path;
pub mod reference;
pub mod session;

pub use candidate::{Candidate, LoadedTemplate, DEFAULT_PREFIX};
pub use candidates::Candidates;
pub use reference::{ParsedReference, TemplateReference, SEPARATOR};
pub use session::ResolutionSession;
