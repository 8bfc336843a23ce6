//! Flat loader over an ordered list of directories.

use super::content::ContentLoader;
use super::{CandidateIter, TemplateLoader};
use crate::error::{NamespaceError, Result};
use crate::registry::SourceRegistry;
use crate::resolve::{path, Candidate, ResolutionSession};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Dirs {
    Fixed(Vec<PathBuf>),
    Registry(Arc<SourceRegistry>),
}

/// Searches each directory in turn for the template name as given.
///
/// This is the plain "first match wins" lookup a [`NamespaceLoader`] is
/// usually chained with. Names that would escape a directory skip that
/// directory rather than failing.
///
/// [`NamespaceLoader`]: super::NamespaceLoader
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    label: String,
    dirs: Dirs,
    content: ContentLoader,
}

impl DirectoryLoader {
    pub fn new(label: impl Into<String>, dirs: Vec<PathBuf>) -> Self {
        Self {
            label: label.into(),
            dirs: Dirs::Fixed(dirs),
            content: ContentLoader::default(),
        }
    }

    /// Search every templates root registered in `registry`, in order.
    ///
    /// Roots are read from the registry on each lookup, so sources picked
    /// up after [`SourceRegistry::invalidate`] are searched too.
    pub fn from_registry(registry: Arc<SourceRegistry>) -> Self {
        Self {
            label: "app_directories".to_string(),
            dirs: Dirs::Registry(registry),
            content: ContentLoader::default(),
        }
    }

    /// Directories searched by the next lookup, in order.
    pub fn dirs(&self) -> Vec<PathBuf> {
        match &self.dirs {
            Dirs::Fixed(dirs) => dirs.clone(),
            Dirs::Registry(registry) => registry.index().roots(),
        }
    }
}

impl TemplateLoader for DirectoryLoader {
    fn get_template_sources<'a>(
        &'a self,
        name: &'a str,
        _session: &'a mut ResolutionSession,
    ) -> CandidateIter<'a> {
        Box::new(self.dirs().into_iter().filter_map(move |dir| {
            match path::resolve(&dir, name) {
                Ok(path) => Some(Ok(Candidate::in_directory(self.label.as_str(), name, path))),
                Err(NamespaceError::PathEscape { .. }) => {
                    tracing::trace!("'{}' escapes {}; skipping", name, dir.display());
                    None
                }
                Err(e) => Some(Err(e)),
            }
        }))
    }

    fn get_contents(&self, candidate: &Candidate) -> Result<Vec<u8>> {
        self.content.load(candidate)
    }
}
