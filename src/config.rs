//! Run configuration, built once from the command line and passed by reference

use crate::locator::SourceRoot;
use crate::utils::ignore::{ExclusionRuleSet, PruneSet};
use std::path::PathBuf;

/// Default `--method`
pub const DEFAULT_METHOD: &str = "json";

#[derive(Debug, Clone)]
pub enum Mode {
    /// One file; output to stdout unless a destination is given
    Source {
        path: PathBuf,
        destination: Option<PathBuf>,
    },
    /// A directory tree; output to stdout unless `save` writes sibling files
    Recursive {
        root: PathBuf,
        save: bool,
        prune: PruneSet,
    },
}

impl Mode {
    pub fn source_root(&self) -> SourceRoot<'_> {
        match self {
            Mode::Source { path, .. } => SourceRoot::File(path),
            Mode::Recursive { root, prune, .. } => SourceRoot::Tree { root, prune },
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub exclusions: ExclusionRuleSet,
    /// Raw strategy identifier; resolved only when something is generated
    pub method: String,
    pub verbose: bool,
}

impl RunConfig {
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::Source {
                path: path.into(),
                destination: None,
            },
            exclusions: ExclusionRuleSet::default(),
            method: DEFAULT_METHOD.to_string(),
            verbose: false,
        }
    }

    pub fn recursive(root: impl Into<PathBuf>, save: bool, prune: PruneSet) -> Self {
        Self {
            mode: Mode::Recursive {
                root: root.into(),
                save,
                prune,
            },
            exclusions: ExclusionRuleSet::default(),
            method: DEFAULT_METHOD.to_string(),
            verbose: false,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionRuleSet) -> Self {
        self.exclusions = exclusions;
        self
    }
}
