use std::path::PathBuf;
use thiserror::Error;

/// Result type for stringergen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a generation run can fail. All of them are fatal for the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad flags or an exclusion pattern that does not compile
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source file that tree-sitter could not parse cleanly
    #[error("Parse error in {}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// `--method` value with no matching generation strategy
    #[error("Unsupported method: {0} (supported: json, jsoniter, fmt)")]
    UnsupportedStrategy(String),

    /// Generator was handed a job with nothing in it; callers filter empty extractions first
    #[error("Generation job for package {0} has no types")]
    EmptyJob(String),

    /// Generated text failed to re-validate; always a template bug
    #[error("Format error: {0}")]
    Format(String),

    /// Read/create/write failure on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failure in recursive mode
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Wraps an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
