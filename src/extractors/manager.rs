//! ExtractorManager - parse a file and decide which structs get a String method
//!
//! Parsing is delegated to a `SourceParser`; the manager applies the record-shape
//! rule and the exclusion patterns, keeping declaration order throughout.

use crate::error::Result;
use crate::extractors::base::{Extraction, SourceParser, SourceUnit, TypeCandidate, TypeShape};
use crate::utils::ignore::ExclusionRuleSet;
use std::path::Path;
use tracing::{debug, trace};

/// Applies extraction rules on top of a parser
pub struct ExtractorManager<'a, P: SourceParser> {
    parser: &'a P,
    exclusions: &'a ExclusionRuleSet,
}

impl<'a, P: SourceParser> ExtractorManager<'a, P> {
    pub fn new(parser: &'a P, exclusions: &'a ExclusionRuleSet) -> Self {
        Self { parser, exclusions }
    }

    /// Parse `content` and extract the ordered record candidates
    pub fn extract(&self, path: &Path, content: &str) -> Result<Extraction> {
        let unit = self.parser.parse(path, content)?;
        Ok(self.filter_unit(unit))
    }

    /// Keep record-shaped declarations, marking the ones an exclusion pattern matches
    pub fn filter_unit(&self, unit: SourceUnit) -> Extraction {
        let mut candidates = Vec::new();

        for decl in unit.declarations {
            if decl.shape != TypeShape::Record {
                trace!(
                    "Skipping non-struct type {} ({}) in {}",
                    decl.name,
                    decl.shape.as_str(),
                    unit.path.display()
                );
                continue;
            }

            let excluded_by = self.exclusions.matching_pattern(&decl.name).map(str::to_string);
            if let Some(pattern) = &excluded_by {
                debug!(
                    "EXCLUDE STRUCT: {} in file {} (pattern '{}')",
                    decl.name,
                    unit.path.display(),
                    pattern
                );
            }

            candidates.push(TypeCandidate {
                name: decl.name,
                type_params: decl.type_params,
                record_shaped: true,
                excluded_by,
            });
        }

        Extraction {
            path: unit.path,
            package: unit.package,
            candidates,
        }
    }
}
