//! Template loaders.
//!
//! Every loader speaks the same two-step protocol the host template engine
//! drives: produce candidates lazily with
//! [`get_template_sources`](TemplateLoader::get_template_sources), then read
//! each one with [`get_contents`](TemplateLoader::get_contents) until one
//! exists. [`get_template`](TemplateLoader::get_template) runs that loop.
//!
//! - [`NamespaceLoader`] - `namespace:path` references over registered sources
//! - [`DirectoryLoader`] - flat search over an ordered list of directories
//! - [`LoaderChain`] - tries several loaders in order

pub mod chain;
pub mod content;
pub mod directory;
pub mod namespace;

pub use chain::LoaderChain;
pub use content::{ContentLoader, ContentReader, FsReader};
pub use directory::DirectoryLoader;
pub use namespace::NamespaceLoader;

use crate::error::{NamespaceError, Result, Tried};
use crate::resolve::{Candidate, LoadedTemplate, ResolutionSession};

/// Lazy sequence of candidates produced by a loader.
pub type CandidateIter<'a> = Box<dyn Iterator<Item = Result<Candidate>> + 'a>;

/// A pluggable source of templates.
pub trait TemplateLoader: Send + Sync {
    /// Candidates worth trying for `name`, in order.
    fn get_template_sources<'a>(
        &'a self,
        name: &'a str,
        session: &'a mut ResolutionSession,
    ) -> CandidateIter<'a>;

    /// Raw contents of one candidate; [`NamespaceError::NotFound`] if absent.
    fn get_contents(&self, candidate: &Candidate) -> Result<Vec<u8>>;

    /// Load the first existing candidate for `name`.
    ///
    /// Candidates whose path appears in `skip` are passed over; a host
    /// engine uses this to resolve `extends` of a template's own name
    /// without loading itself again. Missing candidates are absorbed; any
    /// other error ends the lookup.
    fn get_template(
        &self,
        name: &str,
        session: &mut ResolutionSession,
        skip: &[Candidate],
    ) -> Result<LoadedTemplate> {
        let mut tried = Vec::new();

        for candidate in self.get_template_sources(name, session) {
            let candidate = candidate?;

            if skip.iter().any(|s| s.path == candidate.path) {
                tried.push(Tried::new(
                    candidate.display_name,
                    "Skipped to avoid recursion",
                ));
                continue;
            }

            match self.get_contents(&candidate) {
                Ok(contents) => return Ok(LoadedTemplate::new(contents, candidate)),
                Err(NamespaceError::NotFound { .. }) => {
                    tried.push(Tried::new(candidate.display_name, "Source does not exist"));
                }
                Err(e) => return Err(e),
            }
        }

        Err(NamespaceError::TemplateNotFound {
            name: name.to_string(),
            tried,
        })
    }
}
