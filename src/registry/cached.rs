//! Lazily built, invalidatable source registry.

use super::index::{RegistryIndex, DEFAULT_TEMPLATES_DIR};
use super::source::{SourceDescriptor, SourceEntry};
use crate::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Mapping from namespaces to templates roots.
///
/// The index is built from the descriptors on first use and memoized.
/// Concurrent first access builds it exactly once; afterwards readers share
/// the same [`Arc<RegistryIndex>`] snapshot. [`invalidate`](Self::invalidate)
/// drops the snapshot so the next access rebuilds from the filesystem.
#[derive(Debug)]
pub struct SourceRegistry {
    descriptors: Vec<SourceDescriptor>,
    templates_dir: String,
    index: RwLock<Option<Arc<RegistryIndex>>>,
}

impl SourceRegistry {
    /// Create a registry over `descriptors` using the default `templates` subdirectory.
    pub fn new(descriptors: Vec<SourceDescriptor>) -> Self {
        Self::with_templates_dir(descriptors, DEFAULT_TEMPLATES_DIR)
    }

    /// Create a registry looking for templates in `templates_dir` under each source.
    pub fn with_templates_dir(
        descriptors: Vec<SourceDescriptor>,
        templates_dir: impl Into<String>,
    ) -> Self {
        Self {
            descriptors,
            templates_dir: templates_dir.into(),
            index: RwLock::new(None),
        }
    }

    /// Current index, building it if needed.
    pub fn index(&self) -> Arc<RegistryIndex> {
        if let Some(index) = self
            .index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(index);
        }

        let mut slot = self.index.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have built it between the two locks.
        let index = slot.get_or_insert_with(|| {
            tracing::debug!("Building template source registry");
            Arc::new(RegistryIndex::build(&self.descriptors, &self.templates_dir))
        });
        Arc::clone(index)
    }

    /// Whether the index has been built and not invalidated since.
    pub fn is_built(&self) -> bool {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drop the cached index; the next lookup rebuilds it.
    pub fn invalidate(&self) {
        tracing::debug!("Invalidating template source registry");
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Templates root registered under `name` (canonical name or alias).
    pub fn get_root(&self, name: &str) -> Result<PathBuf> {
        self.index().get_root(name).map(|p| p.to_path_buf())
    }

    /// All registered sources in registration order.
    pub fn all_entries(&self) -> Vec<SourceEntry> {
        self.index().entries().to_vec()
    }

    /// Name of the per-source templates subdirectory.
    pub fn templates_dir(&self) -> &str {
        &self.templates_dir
    }
}
