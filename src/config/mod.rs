//! Loader configuration.
//!
//! The ordered source list and display settings can be supplied in code
//! ([`LoaderConfig::with_sources`]) or read from an `app_namespace.yml`
//! file next to the project.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_project_config, parse_config, CONFIG_FILE_NAMES};
pub use schema::LoaderConfig;
