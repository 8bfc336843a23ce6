//! Parsing of `namespace:path` template references.

use crate::error::{NamespaceError, Result};
use std::fmt;
use std::str::FromStr;

/// Separator between the namespace selector and the template path.
pub const SEPARATOR: char = ':';

/// A namespaced template reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateReference {
    /// Namespace before the separator; empty means "every source".
    pub namespace_selector: String,
    /// Template path relative to the source's templates root.
    pub relative_path: String,
}

impl TemplateReference {
    pub fn new(namespace_selector: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            namespace_selector: namespace_selector.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Whether this reference searches every registered source.
    pub fn is_broadcast(&self) -> bool {
        self.namespace_selector.is_empty()
    }
}

impl fmt::Display for TemplateReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.namespace_selector, SEPARATOR, self.relative_path
        )
    }
}

/// Classification of a raw reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReference {
    /// `ns:path`, served only by the named source.
    Qualified(TemplateReference),
    /// `:path`, searched across all sources in order.
    Broadcast(TemplateReference),
    /// No separator at all; some other loader's business.
    NotNamespaced,
    /// Has a separator but cannot name a template.
    Malformed { reason: &'static str },
}

impl ParsedReference {
    /// Classify `raw`, splitting on the first separator only.
    pub fn parse(raw: &str) -> Self {
        let Some((namespace, path)) = raw.split_once(SEPARATOR) else {
            return Self::NotNamespaced;
        };

        if path.is_empty() {
            return Self::Malformed {
                reason: "empty template path",
            };
        }

        let reference = TemplateReference::new(namespace, path);
        if reference.is_broadcast() {
            Self::Broadcast(reference)
        } else {
            Self::Qualified(reference)
        }
    }

    /// The reference, for the two variants that carry one.
    pub fn reference(&self) -> Option<&TemplateReference> {
        match self {
            Self::Qualified(r) | Self::Broadcast(r) => Some(r),
            Self::NotNamespaced | Self::Malformed { .. } => None,
        }
    }
}

impl FromStr for TemplateReference {
    type Err = NamespaceError;

    fn from_str(raw: &str) -> Result<Self> {
        let malformed = |reason: &str| NamespaceError::MalformedReference {
            reference: raw.to_string(),
            reason: reason.to_string(),
        };

        match ParsedReference::parse(raw) {
            ParsedReference::Qualified(r) | ParsedReference::Broadcast(r) => Ok(r),
            ParsedReference::NotNamespaced => Err(malformed("missing ':' separator")),
            ParsedReference::Malformed { reason } => Err(malformed(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_reference() {
        let parsed = ParsedReference::parse("admin:admin/base.html");
        assert_eq!(
            parsed,
            ParsedReference::Qualified(TemplateReference::new("admin", "admin/base.html"))
        );
    }

    #[test]
    fn empty_namespace_is_broadcast() {
        let parsed = ParsedReference::parse(":template.html");
        assert_eq!(
            parsed,
            ParsedReference::Broadcast(TemplateReference::new("", "template.html"))
        );
    }

    #[test]
    fn no_separator_is_not_namespaced() {
        assert_eq!(
            ParsedReference::parse("admin/base.html"),
            ParsedReference::NotNamespaced
        );
        assert_eq!(ParsedReference::parse(""), ParsedReference::NotNamespaced);
    }

    #[test]
    fn empty_path_is_malformed() {
        assert!(matches!(
            ParsedReference::parse("admin:"),
            ParsedReference::Malformed { .. }
        ));
        assert!(matches!(
            ParsedReference::parse(":"),
            ParsedReference::Malformed { .. }
        ));
    }

    #[test]
    fn splits_on_first_separator_only() {
        let parsed = ParsedReference::parse("admin:c:/odd.html");
        assert_eq!(
            parsed.reference(),
            Some(&TemplateReference::new("admin", "c:/odd.html"))
        );
    }

    #[test]
    fn display_reproduces_input() {
        for raw in [
            "admin:admin/base.html",
            ":template.html",
            "django.contrib.admin:x.html",
            "a:b:c",
        ] {
            let parsed = ParsedReference::parse(raw);
            assert_eq!(parsed.reference().unwrap().to_string(), raw);
        }
    }

    #[test]
    fn from_str_rejects_non_namespaced() {
        let err = "base.html".parse::<TemplateReference>().unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Malformed template reference 'base.html': missing ':' separator"
        );
    }

    #[test]
    fn from_str_accepts_broadcast() {
        let reference: TemplateReference = ":base.html".parse().unwrap();
        assert!(reference.is_broadcast());
        assert_eq!(reference.relative_path, "base.html");
    }
}
