//! Ordered namespace index built from source descriptors.

use super::source::{SourceDescriptor, SourceEntry};
use crate::error::{NamespaceError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default name of the per-source templates subdirectory.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Immutable snapshot of registered sources.
///
/// Entries keep descriptor order. Canonical names always win over aliases
/// on lookup; among aliases the last registered source wins. A later alias
/// never replaces an earlier source's full name, so `get_root` of a
/// canonical name always returns that source's own root.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    entries: Vec<SourceEntry>,
    names: HashMap<String, usize>,
    aliases: HashMap<String, usize>,
}

impl RegistryIndex {
    /// Build an index from descriptors, keeping only sources whose
    /// `<path>/<templates_dir>` is an existing directory.
    pub fn build(descriptors: &[SourceDescriptor], templates_dir: &str) -> Self {
        let mut index = Self::default();

        for desc in descriptors {
            let Some(path) = &desc.path else {
                tracing::debug!("Skipping source '{}': no path", desc.name);
                continue;
            };

            let candidate = path.join(templates_dir);
            if !candidate.is_dir() {
                tracing::debug!(
                    "Skipping source '{}': {} is not a directory",
                    desc.name,
                    candidate.display()
                );
                continue;
            }

            let root = match std::path::absolute(&candidate) {
                Ok(root) => root,
                Err(e) => {
                    tracing::warn!(
                        "Skipping source '{}': cannot make {} absolute: {}",
                        desc.name,
                        candidate.display(),
                        e
                    );
                    continue;
                }
            };

            index.push(SourceEntry::new(desc.name.clone(), root));
        }

        tracing::debug!("Registered {} template sources", index.entries.len());
        index
    }

    /// Build an index directly from entries, in order.
    pub fn from_entries(entries: impl IntoIterator<Item = SourceEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            index.push(entry);
        }
        index
    }

    fn push(&mut self, entry: SourceEntry) {
        if self.names.contains_key(&entry.canonical_name) {
            tracing::warn!(
                "Source '{}' registered twice; keeping the first",
                entry.canonical_name
            );
            return;
        }

        let position = self.entries.len();
        self.names.insert(entry.canonical_name.clone(), position);
        if let Some(alias) = &entry.alias {
            self.aliases.insert(alias.clone(), position);
        }
        self.entries.push(entry);
    }

    /// Find the entry registered under `name` (canonical name or alias).
    pub fn get(&self, name: &str) -> Option<&SourceEntry> {
        self.names
            .get(name)
            .or_else(|| self.aliases.get(name))
            .map(|&i| &self.entries[i])
    }

    /// Templates root for `name`.
    pub fn get_root(&self, name: &str) -> Result<&Path> {
        self.get(name)
            .map(SourceEntry::root)
            .ok_or_else(|| NamespaceError::NamespaceNotFound {
                namespace: name.to_string(),
            })
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    /// All roots in registration order.
    pub fn roots(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .map(|e| e.root_directory.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
