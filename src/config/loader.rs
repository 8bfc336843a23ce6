//! Configuration file discovery and loading.

use super::schema::LoaderConfig;
use crate::error::{NamespaceError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked up by [`find_config`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["app_namespace.yml", "app_namespace.yaml"];

/// Find the configuration file in `project_root`.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load and parse a configuration file.
///
/// Relative source paths are resolved against the directory containing
/// the file, so a config can be moved together with its sources.
pub fn load_config(path: &Path) -> Result<LoaderConfig> {
    if !path.exists() {
        return Err(NamespaceError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let mut config = parse_config(&content).map_err(|e| NamespaceError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(base) = path.parent() {
        for source in &mut config.sources {
            if let Some(source_path) = &mut source.path {
                if source_path.is_relative() {
                    *source_path = base.join(&*source_path);
                }
            }
        }
    }

    tracing::debug!(
        "Loaded {} template sources from {}",
        config.sources.len(),
        path.display()
    );
    Ok(config)
}

/// Parse configuration from YAML text.
pub fn parse_config(content: &str) -> std::result::Result<LoaderConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(LoaderConfig::default());
    }
    serde_yaml::from_str(content)
}

/// Load the project's configuration, or the defaults when there is none.
pub fn load_project_config(project_root: &Path) -> Result<LoaderConfig> {
    match find_config(project_root) {
        Some(path) => load_config(&path),
        None => {
            tracing::debug!("No loader config in {}; using defaults", project_root.display());
            Ok(LoaderConfig::default())
        }
    }
}
