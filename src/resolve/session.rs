//! Per-episode ledger of candidate files already handed out.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// State of one resolution episode.
///
/// An episode is one top-level template lookup together with every nested
/// lookup it triggers (an `extends ":base.html"` chain, for instance). Each
/// broadcast lookup records the files it yields here, so the next nested
/// broadcast lookup for the same path moves on to the next source.
///
/// The ledger is reset when a non-namespaced reference is resolved, or
/// explicitly by the caller between unrelated renders. A session must not be
/// shared between concurrent episodes; create one per episode instead.
#[derive(Debug, Clone, Default)]
pub struct ResolutionSession {
    already_yielded: HashSet<PathBuf>,
}

impl ResolutionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as yielded. Returns `false` if it already was.
    pub fn record(&mut self, path: &Path) -> bool {
        if self.already_yielded.contains(path) {
            return false;
        }
        self.already_yielded.insert(path.to_path_buf())
    }

    /// Whether `path` was already yielded in this episode.
    pub fn contains(&self, path: &Path) -> bool {
        self.already_yielded.contains(path)
    }

    /// Forget every yielded path.
    pub fn reset(&mut self) {
        if !self.already_yielded.is_empty() {
            tracing::trace!(
                "Resetting resolution ledger ({} paths)",
                self.already_yielded.len()
            );
        }
        self.already_yielded.clear();
    }

    pub fn len(&self) -> usize {
        self.already_yielded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.already_yielded.is_empty()
    }
}
