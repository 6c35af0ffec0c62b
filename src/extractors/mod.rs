//! Go struct extraction
//!
//! # Architecture
//!
//! - `base` - shared types and the `SourceParser` trait
//! - `go` - tree-sitter-go implementation of `SourceParser`
//! - `manager` - `ExtractorManager`, record-shape and exclusion filtering

pub mod base;
pub mod go;
pub mod manager;

// Re-export the public API
pub use base::{
    Extraction, SourceParser, SourceUnit, TypeCandidate, TypeDeclaration, TypeShape,
};
pub use go::GoExtractor;
pub use manager::ExtractorManager;
