//! Loader for `namespace:path` references.

use super::content::{ContentLoader, ContentReader};
use super::{CandidateIter, TemplateLoader};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::registry::SourceRegistry;
use crate::resolve::{
    Candidate, Candidates, LoadedTemplate, ParsedReference, ResolutionSession, DEFAULT_PREFIX,
};
use std::sync::Arc;

/// Loader that can both extend and override a template provided by a
/// source.
///
/// `admin:admin/base.html` loads `admin/base.html` from the `admin` source
/// only, so a project template of the same name can extend it.
/// `:base.html` walks every source in order, and repeated lookups within
/// one [`ResolutionSession`] move on to the next source's copy.
#[derive(Debug, Clone)]
pub struct NamespaceLoader {
    registry: Arc<SourceRegistry>,
    content: ContentLoader,
    prefix: String,
}

impl NamespaceLoader {
    /// Create a loader over a (possibly shared) registry.
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self {
            registry,
            content: ContentLoader::default(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Create a loader from configuration.
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(Arc::new(config.registry())).with_prefix(config.prefix.clone())
    }

    /// Use `prefix` at the start of display names.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Read contents through `reader` instead of the filesystem.
    pub fn with_reader(mut self, reader: Arc<dyn ContentReader>) -> Self {
        self.content = ContentLoader::new(reader);
        self
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Candidates for `raw`, computed lazily.
    pub fn candidates<'a>(
        &'a self,
        raw: &str,
        session: &'a mut ResolutionSession,
    ) -> Candidates<'a> {
        Candidates::new(
            ParsedReference::parse(raw),
            &self.registry,
            session,
            &self.prefix,
        )
    }

    /// Resolve `raw` to the contents of the first existing candidate.
    ///
    /// Non-namespaced references reset `session` and fail at once with
    /// `TemplateNotFound`, leaving them to the next loader of a chain.
    pub fn resolve_template(
        &self,
        raw: &str,
        session: &mut ResolutionSession,
    ) -> Result<LoadedTemplate> {
        let loaded = self.get_template(raw, session, &[])?;
        tracing::debug!("Resolved '{}' to {}", raw, loaded.candidate.path.display());
        Ok(loaded)
    }

    /// Forget the registry snapshot; the next lookup rescans the sources.
    pub fn invalidate(&self) {
        self.registry.invalidate();
    }
}

impl TemplateLoader for NamespaceLoader {
    fn get_template_sources<'a>(
        &'a self,
        name: &'a str,
        session: &'a mut ResolutionSession,
    ) -> CandidateIter<'a> {
        Box::new(self.candidates(name, session))
    }

    fn get_contents(&self, candidate: &Candidate) -> Result<Vec<u8>> {
        self.content.load(candidate)
    }
}
