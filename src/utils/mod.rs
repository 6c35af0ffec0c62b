// Common utilities shared by the locator, pipeline and sink.

pub mod ignore;
pub mod paths;

/// File utilities
pub mod file_utils {
    use crate::error::{Error, Result};
    use std::fs;
    use std::path::Path;

    /// Extension every Go source file carries
    pub const GO_EXTENSION: &str = "go";

    /// Check if a path looks like a Go source file
    pub fn is_go_source(path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(GO_EXTENSION)
    }

    /// Read file content, attaching the path to any failure
    pub fn read_source(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::path::PathBuf;
        use tempfile::TempDir;

        #[test]
        fn test_is_go_source() {
            assert!(is_go_source(&PathBuf::from("a/b/main.go")));
            assert!(!is_go_source(&PathBuf::from("a/b/main.rs")));
            assert!(!is_go_source(&PathBuf::from("Makefile")));
            assert!(
                !is_go_source(&PathBuf::from("a/go")),
                "A file named 'go' has no extension"
            );
        }

        #[test]
        fn test_read_source_missing_file_reports_path() {
            let temp_dir = TempDir::new().unwrap();
            let missing = temp_dir.path().join("missing.go");
            let err = read_source(&missing).unwrap_err();
            assert!(matches!(err, Error::Io { .. }));
            assert!(err.to_string().contains("missing.go"));
        }
    }
}
