//! Jail-confined path joining.
//!
//! Resolution is purely lexical: nothing here touches the filesystem, so
//! symlinks inside a templates root are followed later by whoever reads the
//! file.

use crate::error::{NamespaceError, Result};
use std::path::{Component, Path, PathBuf};

/// Join `relative` onto `root`, failing if the result leaves `root`.
///
/// `.` components are dropped and `..` pops the previous component. An
/// absolute `relative` replaces the root entirely, so it only succeeds when
/// it already points inside `root`.
pub fn resolve(root: &Path, relative: &str) -> Result<PathBuf> {
    let base = normalize(root);
    let joined = normalize(&base.join(relative));

    if joined.starts_with(&base) {
        Ok(joined)
    } else {
        Err(NamespaceError::PathEscape {
            root: root.to_path_buf(),
            path: relative.to_string(),
        })
    }
}

/// Lexically normalize a path, resolving `.` and `..` components.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
