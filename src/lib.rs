// stringergen - generate String() methods for Go structs
//
// Pipeline: locator -> extractors -> generator -> formatter -> sink.
// tree-sitter-go parses the input files and re-validates the output.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractors;
pub mod formatter;
pub mod generator;
pub mod language;
pub mod locator;
pub mod pipeline;
pub mod sink;
pub mod utils;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, RunSummary};
