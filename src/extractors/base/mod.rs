// Base extractor types and the parser seam
//
// - types.rs: SourceUnit, TypeDeclaration, TypeCandidate, Extraction
//
// `SourceParser` is the boundary to the syntax-tree parser: the tree-sitter Go
// extractor implements it for real runs, tests substitute fixture parsers.

pub mod types;

use crate::error::Result;
use std::path::Path;

pub use types::{Extraction, SourceUnit, TypeCandidate, TypeDeclaration, TypeShape};

/// Turns the text of one source file into its package name and type declarations
pub trait SourceParser {
    fn parse(&self, path: &Path, content: &str) -> Result<SourceUnit>;
}
