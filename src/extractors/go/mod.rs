mod helpers;
mod types;

use crate::error::{Error, Result};
use crate::extractors::base::{SourceParser, SourceUnit};
use crate::language;
use std::path::Path;
use tracing::trace;
use tree_sitter::Tree;

/// Go extractor backed by tree-sitter-go
///
/// Handles:
/// - The `package` clause
/// - Top-level type declarations, single and grouped (`type ( ... )`)
/// - Struct, interface, function, alias and plain type definitions
/// - Type parameter lists on generic declarations
///
/// Declarations nested inside function bodies are not top-level and are never returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoExtractor;

impl GoExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Lower a parsed tree into a `SourceUnit`
    pub fn extract_unit(&self, path: &Path, content: &str, tree: &Tree) -> Result<SourceUnit> {
        let root = tree.root_node();
        let mut package = None;
        let mut declarations = Vec::new();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "package_clause" if package.is_none() => {
                    package = self.extract_package_name(child, content);
                }
                "type_declaration" => {
                    let found = self.extract_type_declaration(child, content);
                    for decl in &found {
                        trace!("Found type {} ({})", decl.name, decl.shape.as_str());
                    }
                    declarations.extend(found);
                }
                _ => {}
            }
        }

        let package = package.ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
            line: 1,
            column: 1,
            message: "missing package clause".to_string(),
        })?;

        Ok(SourceUnit {
            path: path.to_path_buf(),
            package,
            declarations,
        })
    }
}

impl SourceParser for GoExtractor {
    fn parse(&self, path: &Path, content: &str) -> Result<SourceUnit> {
        let mut parser = language::go_parser()?;
        let tree = language::parse_go(&mut parser, content)
            .map_err(|problem| language::parse_error(path, problem))?;
        self.extract_unit(path, content, &tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{TypeDeclaration, TypeShape};

    fn parse(src: &str) -> SourceUnit {
        GoExtractor::new()
            .parse(Path::new("test.go"), src)
            .expect("source should parse")
    }

    fn names(unit: &SourceUnit) -> Vec<&str> {
        unit.declarations.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_package_and_single_struct() {
        let unit = parse("package main; type A struct { X int }");
        assert_eq!(unit.package, "main");
        assert_eq!(unit.declarations, vec![TypeDeclaration::new("A", TypeShape::Record)]);
    }

    #[test]
    fn test_shapes_are_classified() {
        let unit = parse(
            r#"
package shapes

type User struct {
	Name string
}

type Reader interface {
	Read(p []byte) (int, error)
}

type Handler func(int) error

type UserID int64

type Alias = User

type Set map[string]struct{}
"#,
        );

        let shapes: Vec<(&str, TypeShape)> = unit
            .declarations
            .iter()
            .map(|d| (d.name.as_str(), d.shape))
            .collect();
        assert_eq!(
            shapes,
            vec![
                ("User", TypeShape::Record),
                ("Reader", TypeShape::Interface),
                ("Handler", TypeShape::Function),
                ("UserID", TypeShape::Definition),
                ("Alias", TypeShape::Alias),
                ("Set", TypeShape::Definition),
            ]
        );
    }

    #[test]
    fn test_grouped_declarations_keep_order() {
        let unit = parse(
            r#"
package group

type (
	First struct{ A int }
	Second struct{ B string }
	third struct{}
)

type Fourth struct{}
"#,
        );
        assert_eq!(names(&unit), vec!["First", "Second", "third", "Fourth"]);
    }

    #[test]
    fn test_generic_struct_type_params() {
        let unit = parse(
            r#"
package generic

type Pair[K comparable, V any] struct {
	Key   K
	Value V
}

type Stack[T, U any] struct {
	items []T
	other []U
}
"#,
        );
        assert_eq!(unit.declarations[0].type_params, vec!["K", "V"]);
        assert_eq!(unit.declarations[1].type_params, vec!["T", "U"]);
        assert!(unit.declarations.iter().all(|d| d.shape == TypeShape::Record));
    }

    #[test]
    fn test_nested_declarations_are_not_top_level() {
        let unit = parse(
            r#"
package nested

type Outer struct{}

func build() {
	type inner struct{ X int }
	_ = inner{}
}
"#,
        );
        assert_eq!(names(&unit), vec!["Outer"]);
    }

    #[test]
    fn test_file_without_types() {
        let unit = parse("package main\n\nvar x int\n");
        assert!(unit.declarations.is_empty());
    }

    #[test]
    fn test_malformed_source_is_parse_error() {
        let err = GoExtractor::new()
            .parse(Path::new("broken.go"), "package main\n\ntype A struct {\n\tX int\n")
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {:?}", err);
        assert!(err.to_string().contains("broken.go"));
    }

    #[test]
    fn test_missing_package_clause_is_parse_error() {
        let err = GoExtractor::new()
            .parse(Path::new("nopkg.go"), "type A struct{}\n")
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {:?}", err);
    }

    #[test]
    fn test_sample_models_file() {
        let unit = parse(include_str!("../../../test_samples/models.go"));
        assert_eq!(unit.package, "models");
        let records: Vec<&str> = unit
            .declarations
            .iter()
            .filter(|d| d.shape == TypeShape::Record)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(
            records,
            vec!["User", "Address", "Node", "Page", "auditEntry", "OrderItem", "Order"]
        );
    }
}
