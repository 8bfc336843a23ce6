//! Reading raw template bytes.

use crate::error::{NamespaceError, Result};
use crate::resolve::Candidate;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Source of raw bytes for a file path.
///
/// Implementations must report a missing file as
/// [`io::ErrorKind::NotFound`]; every other error kind is treated as a hard
/// failure.
pub trait ContentReader: fmt::Debug + Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads templates from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl ContentReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Loads candidate contents, separating "missing" from "broken".
#[derive(Debug, Clone)]
pub struct ContentLoader {
    reader: Arc<dyn ContentReader>,
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new(Arc::new(FsReader))
    }
}

impl ContentLoader {
    pub fn new(reader: Arc<dyn ContentReader>) -> Self {
        Self { reader }
    }

    /// Read the candidate's file.
    ///
    /// Fails with [`NamespaceError::NotFound`] when the file is absent and
    /// [`NamespaceError::Io`] for anything else (permissions, a directory in
    /// place of a file, ...).
    pub fn load(&self, candidate: &Candidate) -> Result<Vec<u8>> {
        match self.reader.read(&candidate.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::trace!("Template candidate missing: {}", candidate.display_name);
                Err(NamespaceError::NotFound {
                    path: candidate.path.clone(),
                })
            }
            Err(source) => Err(NamespaceError::Io {
                path: candidate.path.clone(),
                source,
            }),
        }
    }
}
