//! Output Sink - writes formatted bytes to stdout or a file

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where one file's generated methods go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn display_name(&self) -> String {
        match self {
            Destination::Stdout => "<stdout>".to_string(),
            Destination::File(path) => path.display().to_string(),
        }
    }
}

/// Formatted bytes bound to their destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub bytes: Vec<u8>,
    pub destination: Destination,
}

impl OutputArtifact {
    pub fn new(bytes: Vec<u8>, destination: Destination) -> Self {
        Self { bytes, destination }
    }

    /// Write the bytes, truncating any existing file
    pub fn write(&self) -> Result<()> {
        match &self.destination {
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write_to(&mut lock, &self.bytes).map_err(|e| Error::io("<stdout>", e))?;
            }
            Destination::File(path) => write_file(path, &self.bytes)?,
        }
        debug!(
            "Wrote {} bytes to {}",
            self.bytes.len(),
            self.destination.display_name()
        );
        Ok(())
    }
}

fn write_to<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.flush()
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_to(&mut file, bytes).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_to(&mut buf, b"package main\n").unwrap();
        assert_eq!(buf, b"package main\n");
    }

    #[test]
    fn test_file_destination_truncates_prior_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out_stringer.go");
        fs::write(&path, "a much longer piece of stale content\n").unwrap();

        OutputArtifact::new(b"package p\n".to_vec(), Destination::File(path.clone()))
            .write()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package p\n");
    }

    #[test]
    fn test_file_destination_error_carries_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing_dir").join("out.go");

        let err = OutputArtifact::new(Vec::new(), Destination::File(path.clone()))
            .write()
            .unwrap_err();

        match err {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
