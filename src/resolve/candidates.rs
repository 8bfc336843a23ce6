//! Lazy candidate sequence for one template reference.
//!
//! Two modes, picked by the parsed reference:
//!
//! - **Qualified** (`admin:base.html`): the named source only, at most one
//!   candidate. The ledger is neither read nor written.
//! - **Broadcast** (`:base.html`): every registered source in registration
//!   order. A path already in the session ledger is skipped; any other path
//!   is recorded before it is yielded. Nested broadcast lookups within one
//!   episode therefore walk from one source's copy to the next.
//!
//! Non-namespaced references reset the ledger and yield nothing, as do
//! malformed ones.

use super::candidate::Candidate;
use super::path;
use super::reference::{ParsedReference, TemplateReference};
use super::session::ResolutionSession;
use crate::error::Result;
use crate::registry::{RegistryIndex, SourceRegistry};
use std::sync::Arc;

#[derive(Debug)]
enum Mode {
    Done,
    Qualified(TemplateReference),
    Broadcast(TemplateReference),
}

/// Iterator over the candidates of one reference.
///
/// Candidates are computed on demand; a consumer that stops early leaves
/// the remaining sources untouched and unrecorded.
#[derive(Debug)]
pub struct Candidates<'a> {
    mode: Mode,
    registry: &'a SourceRegistry,
    index: Option<Arc<RegistryIndex>>,
    session: &'a mut ResolutionSession,
    prefix: &'a str,
    position: usize,
}

impl<'a> Candidates<'a> {
    pub fn new(
        parsed: ParsedReference,
        registry: &'a SourceRegistry,
        session: &'a mut ResolutionSession,
        prefix: &'a str,
    ) -> Self {
        let mode = match parsed {
            ParsedReference::Qualified(reference) => Mode::Qualified(reference),
            ParsedReference::Broadcast(reference) => Mode::Broadcast(reference),
            ParsedReference::NotNamespaced => {
                session.reset();
                Mode::Done
            }
            ParsedReference::Malformed { reason } => {
                tracing::debug!("Ignoring malformed template reference: {}", reason);
                Mode::Done
            }
        };

        Self {
            mode,
            registry,
            index: None,
            session,
            prefix,
            position: 0,
        }
    }

    fn index(&mut self) -> Arc<RegistryIndex> {
        Arc::clone(self.index.get_or_insert_with(|| self.registry.index()))
    }

    fn qualified(&mut self, reference: &TemplateReference) -> Option<Result<Candidate>> {
        let index = self.index();
        let Some(entry) = index.get(&reference.namespace_selector) else {
            tracing::debug!(
                "No template source registered as '{}'",
                reference.namespace_selector
            );
            return None;
        };

        Some(
            path::resolve(entry.root(), &reference.relative_path).map(|path| {
                Candidate::namespaced(
                    self.prefix,
                    reference.namespace_selector.as_str(),
                    reference.relative_path.as_str(),
                    path,
                )
            }),
        )
    }

    fn broadcast(&mut self, reference: &TemplateReference) -> Option<Result<Candidate>> {
        let index = self.index();

        while let Some(entry) = index.entries().get(self.position) {
            self.position += 1;

            let path = match path::resolve(entry.root(), &reference.relative_path) {
                Ok(path) => path,
                Err(e) => return Some(Err(e)),
            };

            if !self.session.record(&path) {
                tracing::trace!("Skipping already used template {}", path.display());
                continue;
            }

            return Some(Ok(Candidate::namespaced(
                self.prefix,
                entry.canonical_name.as_str(),
                reference.relative_path.as_str(),
                path,
            )));
        }

        None
    }
}

impl Iterator for Candidates<'_> {
    type Item = Result<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.mode, Mode::Done) {
            Mode::Done => None,
            Mode::Qualified(reference) => self.qualified(&reference),
            Mode::Broadcast(reference) => {
                let next = self.broadcast(&reference);
                if next.is_some() {
                    self.mode = Mode::Broadcast(reference);
                }
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NamespaceError;
    use crate::registry::SourceDescriptor;
    use crate::resolve::candidate::DEFAULT_PREFIX;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn registry(temp: &TempDir, names: &[&str]) -> SourceRegistry {
        let descs = names
            .iter()
            .map(|name| {
                let dir = temp.path().join(name.replace('.', "_"));
                fs::create_dir_all(dir.join("templates")).unwrap();
                SourceDescriptor::new(*name, dir)
            })
            .collect();
        SourceRegistry::new(descs)
    }

    fn names(candidates: Candidates<'_>) -> Vec<String> {
        candidates
            .map(|c| c.unwrap().display_name)
            .collect()
    }

    #[test]
    fn qualified_yields_single_candidate() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["admin", "demo"]);
        let mut session = ResolutionSession::new();

        let found = names(Candidates::new(
            ParsedReference::parse("admin:admin/base.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));

        assert_eq!(found, ["app_namespace:admin:admin/base.html"]);
        assert!(session.is_empty());
    }

    #[test]
    fn qualified_by_alias_uses_alias_in_display_name() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["django.contrib.admin"]);
        let mut session = ResolutionSession::new();

        let mut candidates = Candidates::new(
            ParsedReference::parse("admin:admin/base.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        );
        let candidate = candidates.next().unwrap().unwrap();

        assert_eq!(candidate.display_name, "app_namespace:admin:admin/base.html");
        assert!(candidate
            .path
            .ends_with(Path::new("django_contrib_admin/templates/admin/base.html")));
        assert!(candidates.next().is_none());
    }

    #[test]
    fn unknown_namespace_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["admin"]);
        let mut session = ResolutionSession::new();

        let found = names(Candidates::new(
            ParsedReference::parse("missing:base.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));
        assert!(found.is_empty());
    }

    #[test]
    fn broadcast_follows_registration_order() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["c", "a", "b"]);
        let mut session = ResolutionSession::new();

        let found = names(Candidates::new(
            ParsedReference::parse(":x.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));

        assert_eq!(
            found,
            [
                "app_namespace:c:x.html",
                "app_namespace:a:x.html",
                "app_namespace:b:x.html"
            ]
        );
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn broadcast_skips_paths_already_yielded() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["a", "b", "c"]);
        let mut session = ResolutionSession::new();

        let mut first = Candidates::new(
            ParsedReference::parse(":x.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        );
        assert_eq!(
            first.next().unwrap().unwrap().display_name,
            "app_namespace:a:x.html"
        );
        drop(first);

        let second = names(Candidates::new(
            ParsedReference::parse(":x.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));
        assert_eq!(second, ["app_namespace:b:x.html", "app_namespace:c:x.html"]);
    }

    #[test]
    fn broadcast_is_lazy() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["a", "b", "c"]);
        let mut session = ResolutionSession::new();

        let mut candidates = Candidates::new(
            ParsedReference::parse(":x.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        );
        candidates.next();
        drop(candidates);

        assert_eq!(session.len(), 1);
    }

    #[test]
    fn not_namespaced_resets_ledger_without_building_registry() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["a"]);
        let mut session = ResolutionSession::new();
        session.record(Path::new("/somewhere/x.html"));

        let found = names(Candidates::new(
            ParsedReference::parse("x.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));

        assert!(found.is_empty());
        assert!(session.is_empty());
        assert!(!registry.is_built());
    }

    #[test]
    fn malformed_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["a"]);
        let mut session = ResolutionSession::new();

        let found = names(Candidates::new(
            ParsedReference::parse("a:"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));
        assert!(found.is_empty());
    }

    #[test]
    fn escaping_path_is_an_error_for_every_source() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["a", "b"]);
        let mut session = ResolutionSession::new();

        let results: Vec<_> = Candidates::new(
            ParsedReference::parse(":../../../etc/passwd"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        )
        .collect();

        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|r| matches!(r, Err(NamespaceError::PathEscape { .. }))));
        assert!(session.is_empty());
    }

    #[test]
    fn qualified_does_not_touch_ledger() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp, &["a", "b"]);
        let mut session = ResolutionSession::new();

        let _ = names(Candidates::new(
            ParsedReference::parse(":x.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));
        let ledger = session.len();

        let found = names(Candidates::new(
            ParsedReference::parse("a:x.html"),
            &registry,
            &mut session,
            DEFAULT_PREFIX,
        ));
        assert_eq!(found, ["app_namespace:a:x.html"]);
        assert_eq!(session.len(), ledger);
    }
}
