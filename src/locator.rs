//! Source Locator - enumerates the Go files a run should process
//!
//! Single-file mode yields the one path when it is a Go file. Recursive mode
//! walks the tree depth first in file-name order, never descending into a
//! directory whose base name is pruned.

use crate::error::{Error, Result};
use crate::utils::file_utils::is_go_source;
use crate::utils::ignore::PruneSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Where candidate files come from
#[derive(Debug, Clone, Copy)]
pub enum SourceRoot<'a> {
    File(&'a Path),
    Tree { root: &'a Path, prune: &'a PruneSet },
}

/// Iterator over candidate files; the first `Err` ends the run
pub struct SourceLocator {
    inner: Box<dyn Iterator<Item = Result<PathBuf>>>,
}

impl SourceLocator {
    pub fn new(root: SourceRoot<'_>) -> Self {
        let inner: Box<dyn Iterator<Item = Result<PathBuf>>> = match root {
            SourceRoot::File(path) => {
                if is_go_source(path) {
                    Box::new(std::iter::once(Ok(path.to_path_buf())))
                } else {
                    debug!("Skipping non-Go file {}", path.display());
                    Box::new(std::iter::empty())
                }
            }
            SourceRoot::Tree { root, prune } => Box::new(walk(root, prune.clone())),
        };
        Self { inner }
    }
}

impl Iterator for SourceLocator {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

fn is_pruned(entry: &DirEntry, prune: &PruneSet) -> bool {
    entry.file_type().is_dir() && prune.contains(&entry.file_name().to_string_lossy())
}

fn walk(root: &Path, prune: PruneSet) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            if is_pruned(entry, &prune) {
                debug!("SKIP DIR: {}", entry.path().display());
                return false;
            }
            true
        })
        .filter_map(|entry| match entry {
            Err(err) => Some(Err(Error::Walk(err))),
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) if is_go_source(entry.path()) => Some(Ok(entry.into_path())),
            Ok(entry) => {
                debug!("Skipping non-Go file {}", entry.path().display());
                None
            }
        })
}
