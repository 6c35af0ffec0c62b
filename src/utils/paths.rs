// Output path derivation
//
// Recursive save mode writes `xx_stringer.go` next to every `xx.go`.

use std::path::{Path, PathBuf};

/// Marker inserted between a source file's stem and its extension
pub const SIBLING_MARKER: &str = "_stringer";

/// Derive the sibling output path for a source file
///
/// # Examples
/// ```
/// use std::path::Path;
/// use stringergen::utils::paths::sibling_path;
///
/// assert_eq!(
///     sibling_path(Path::new("pkg/model/user.go")),
///     Path::new("pkg/model/user_stringer.go")
/// );
/// ```
pub fn sibling_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match source.extension() {
        Some(ext) => format!("{}{}.{}", stem, SIBLING_MARKER, ext.to_string_lossy()),
        None => format!("{}{}", stem, SIBLING_MARKER),
    };

    source.with_file_name(file_name)
}

/// Whether two paths name the same file
///
/// Canonicalizes when both exist (handles `./a.go` vs `a.go` and symlinks),
/// otherwise falls back to comparing the paths as given.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sibling_path_keeps_directory_and_extension() {
        assert_eq!(
            sibling_path(Path::new("/project/api/types.go")),
            PathBuf::from("/project/api/types_stringer.go")
        );
    }

    #[test]
    fn test_sibling_path_relative_file() {
        assert_eq!(sibling_path(Path::new("main.go")), PathBuf::from("main_stringer.go"));
    }

    #[test]
    fn test_sibling_path_only_strips_last_extension() {
        assert_eq!(
            sibling_path(Path::new("gen/model.pb.go")),
            PathBuf::from("gen/model.pb_stringer.go")
        );
    }

    #[test]
    fn test_sibling_path_without_extension() {
        assert_eq!(sibling_path(Path::new("dir/README")), PathBuf::from("dir/README_stringer"));
    }

    #[test]
    fn test_is_same_file_through_dot_segment() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.go");
        fs::write(&file, "package a\n").unwrap();

        let dotted = temp_dir.path().join(".").join("a.go");
        assert!(is_same_file(&file, &dotted));
        assert!(!is_same_file(&file, &temp_dir.path().join("b.go")));
    }
}
