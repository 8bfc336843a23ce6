//! Loader configuration schema.

use super::loader::{load_config, load_project_config, parse_config};
use crate::error::{NamespaceError, Result};
use crate::registry::{SourceDescriptor, SourceRegistry, DEFAULT_TEMPLATES_DIR};
use crate::resolve::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`NamespaceLoader`](crate::NamespaceLoader).
///
/// ```yaml
/// prefix: app_namespace
/// templates_dir: templates
/// sources:
///   - name: django.contrib.admin
///     path: /srv/admin
///   - name: demo
///     path: ./demo
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Leading component of candidate display names.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Subdirectory of each source holding its templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Template sources in lookup order.
    #[serde(default)]
    pub sources: Vec<SourceDescriptor>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_templates_dir() -> String {
    DEFAULT_TEMPLATES_DIR.to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            templates_dir: default_templates_dir(),
            sources: Vec::new(),
        }
    }
}

impl LoaderConfig {
    /// Configuration over `sources` with every other setting at its default.
    pub fn with_sources(sources: Vec<SourceDescriptor>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    /// Parse configuration from YAML text; empty text gives the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        parse_config(content).map_err(|e| NamespaceError::Other(e.into()))
    }

    /// Load a configuration file; see [`load_config`].
    pub fn load(path: &Path) -> Result<Self> {
        load_config(path)
    }

    /// Load `app_namespace.yml` (or `.yaml`) from `project_root`, or the
    /// defaults when neither exists.
    pub fn discover(project_root: &Path) -> Result<Self> {
        load_project_config(project_root)
    }

    /// A fresh, not yet built registry for these sources.
    pub fn registry(&self) -> SourceRegistry {
        SourceRegistry::with_templates_dir(self.sources.clone(), self.templates_dir.clone())
    }
}
