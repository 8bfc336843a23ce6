//! Ordered chain of loaders.

use super::TemplateLoader;
use crate::error::{NamespaceError, Result};
use crate::resolve::{Candidate, LoadedTemplate, ResolutionSession};

/// Tries each loader in order until one finds the template.
///
/// A `TemplateNotFound` from one loader falls through to the next and its
/// tried candidates are collected; any other error stops the chain.
#[derive(Default)]
pub struct LoaderChain {
    loaders: Vec<Box<dyn TemplateLoader>>,
}

impl LoaderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a loader; loaders are tried in the order they were added.
    pub fn with(mut self, loader: impl TemplateLoader + 'static) -> Self {
        self.loaders.push(Box::new(loader));
        self
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Load `name` from the first loader that has it.
    pub fn get_template(
        &self,
        name: &str,
        session: &mut ResolutionSession,
        skip: &[Candidate],
    ) -> Result<LoadedTemplate> {
        let mut tried = Vec::new();

        for loader in &self.loaders {
            match loader.get_template(name, session, skip) {
                Ok(loaded) => return Ok(loaded),
                Err(NamespaceError::TemplateNotFound { tried: more, .. }) => tried.extend(more),
                Err(e) => return Err(e),
            }
        }

        Err(NamespaceError::TemplateNotFound {
            name: name.to_string(),
            tried,
        })
    }

    /// Load `name` with nothing skipped.
    pub fn resolve(&self, name: &str, session: &mut ResolutionSession) -> Result<LoadedTemplate> {
        self.get_template(name, session, &[])
    }
}

impl std::fmt::Debug for LoaderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderChain")
            .field("loaders", &self.loaders.len())
            .finish()
    }
}
