//! Descriptor discovery.
//!
//! Lists `*.properties` files directly inside one directory. The result is
//! sorted by file name so that key collisions resolve the same way on every
//! platform: the file that sorts last wins.

use crate::error::{Error, Result};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DESCRIPTOR_GLOB: &str = "*.properties";

static DESCRIPTOR_PATTERN: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(DESCRIPTOR_GLOB).unwrap());

/// Shell semantics: `*` does not match a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Whether a bare file name looks like a descriptor.
///
/// `*` may match nothing, which would let the literal `.` claim the leading
/// dot of `.properties`; hidden names are rejected up front.
pub fn is_descriptor_name(file_name: &str) -> bool {
    !file_name.starts_with('.') && DESCRIPTOR_PATTERN.matches_with(file_name, MATCH_OPTIONS)
}

/// Find descriptor files in `dir` (non-recursive).
///
/// Every entry whose name matches is returned, whatever its type, so that a
/// directory or dangling link named `x.properties` fails when it is read
/// instead of vanishing from the catalog. An empty result is not an error.
pub fn descriptor_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let discovery_err = |source| Error::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery_err)? {
        let entry = entry.map_err(discovery_err)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if !is_descriptor_name(name) {
            continue;
        }
        files.push(entry.path());
    }

    // Sort for deterministic last-write-wins
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn pattern_matches_suffix_only() {
        assert!(is_descriptor_name("sdsai-common.properties"));
        assert!(is_descriptor_name("a.b.properties"));
        assert!(!is_descriptor_name("a.properties.bak"));
        assert!(!is_descriptor_name("a.yml"));
        assert!(!is_descriptor_name("a.PROPERTIES"));
    }

    #[test]
    fn pattern_skips_hidden_files() {
        assert!(!is_descriptor_name(".properties"));
        assert!(!is_descriptor_name(".hidden.properties"));
    }

    #[test]
    fn lists_matching_files_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.properties");
        touch(dir.path(), "a.properties");
        touch(dir.path(), "a.b.properties");
        touch(dir.path(), "README.md");

        let files = descriptor_files(dir.path()).unwrap();
        assert_eq!(
            names(&files),
            vec!["a.b.properties", "a.properties", "b.properties"]
        );
    }

    #[test]
    fn does_not_recurse() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "nested.properties");
        touch(dir.path(), "top.properties");

        let files = descriptor_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["top.properties"]);
    }

    #[test]
    fn lists_directories_with_matching_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("odd.properties")).unwrap();

        let files = descriptor_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["odd.properties"]);
    }

    #[test]
    fn hidden_descriptor_is_not_listed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".properties");
        touch(dir.path(), ".hidden.properties");
        touch(dir.path(), "shown.properties");

        let files = descriptor_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["shown.properties"]);
    }

    #[cfg(unix)]
    #[test]
    fn lists_dangling_links() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("lost.properties"))
            .unwrap();

        let files = descriptor_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["lost.properties"]);
    }

    #[test]
    fn empty_directory_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(descriptor_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_discovery_error() {
        let dir = TempDir::new().unwrap();
        let err = descriptor_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Discovery { .. }));
    }
}
