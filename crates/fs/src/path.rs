//! Lexical path cleanup and caller-relative file opening.

use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors raised by filesystem helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FsError {
    /// The resolved path does not exist.
    #[error("`{}` not found", path.display())]
    NotFound {
        /// The path after joining and normalization.
        path: PathBuf,
    },

    /// The file exists but could not be opened.
    #[error("cannot open `{}`: {source}", path.display())]
    Io {
        /// The path after joining and normalization.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Result alias for filesystem helpers.
pub type FsResult<T> = std::result::Result<T, FsError>;

/// Lexically normalizes a path: collapses `.`, resolves `..` against
/// preceding components, and drops `..` at the root.
///
/// Purely textual — nothing is touched on disk, and symlinks are not
/// resolved. Leading `..` in a relative path is kept, since there is no
/// component to cancel it against.
///
/// ```rust
/// use std::path::Path;
/// use knack_fs::normalize;
///
/// assert_eq!(normalize(Path::new("a/./b/../c")), Path::new("a/c"));
/// assert_eq!(normalize(Path::new("/../x")), Path::new("/x"));
/// assert_eq!(normalize(Path::new("../x")), Path::new("../x"));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().map(|component| component.as_os_str()).collect()
    }
}

/// Opens `relative` against `base`, read-only, after normalizing the join.
///
/// The error carries the resolved path, so "which file did it actually try"
/// never needs reconstructing at the call site.
pub fn open_relative(base: &Path, relative: impl AsRef<Path>) -> FsResult<File> {
    let path = normalize(&base.join(relative));
    File::open(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FsError::NotFound { path }
        } else {
            FsError::Io { path, source }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a/./b", "a/b")]
    #[case("a/b/../c", "a/c")]
    #[case("a/b/c/../../d", "a/d")]
    #[case("./a", "a")]
    #[case("/a/../..", "/")]
    #[case("/../a", "/a")]
    #[case("../a", "../a")]
    #[case("../../a", "../../a")]
    #[case(".", ".")]
    #[case("a/..", ".")]
    fn normalize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(Path::new(input)), Path::new(expected));
    }

    #[test]
    fn missing_file_reports_the_resolved_path() {
        let err = open_relative(Path::new("/definitely"), "not/./here.txt").unwrap_err();
        match err {
            FsError::NotFound { path } => {
                assert_eq!(path, Path::new("/definitely/not/here.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
