//! Language Support - tree-sitter configuration for Go
//!
//! The parser (reading input files) and the formatter (re-validating generated
//! files) both build their tree-sitter parsers here so they can never disagree
//! about the grammar.

use crate::error::{Error, Result};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Get the tree-sitter Go grammar
pub fn go_language() -> tree_sitter::Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Create a parser configured for Go
pub fn go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&go_language())
        .map_err(|e| Error::config(format!("Failed to set parser language for go: {}", e)))?;
    Ok(parser)
}

/// Position and description of the first syntax problem in a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProblem {
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
    pub message: String,
}

/// Parse Go text, returning the tree or the first syntax problem
///
/// tree-sitter always produces a tree; a file only counts as parsed when the
/// tree carries no ERROR or MISSING nodes.
pub fn parse_go(parser: &mut Parser, content: &str) -> std::result::Result<Tree, SyntaxProblem> {
    let tree = parser.parse(content, None).ok_or_else(|| SyntaxProblem {
        line: 1,
        column: 1,
        message: "parser produced no tree".to_string(),
    })?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(first_syntax_problem(root, content).unwrap_or(SyntaxProblem {
            line: 1,
            column: 1,
            message: "syntax error".to_string(),
        }));
    }

    Ok(tree)
}

fn first_syntax_problem(node: Node, content: &str) -> Option<SyntaxProblem> {
    if node.is_error() || node.is_missing() {
        let point = node.start_position();
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let snippet: String = content[node.start_byte()..node.end_byte()]
                .chars()
                .take(32)
                .collect();
            format!("unexpected `{}`", snippet.trim())
        };
        return Some(SyntaxProblem {
            line: point.row + 1,
            column: point.column + 1,
            message,
        });
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(problem) = first_syntax_problem(child, content) {
                return Some(problem);
            }
        }
    }
    None
}

/// Convert a syntax problem in an input file into a parse error
pub fn parse_error(path: &Path, problem: SyntaxProblem) -> Error {
    Error::Parse {
        path: path.to_path_buf(),
        line: problem.line,
        column: problem.column,
        message: problem.message,
    }
}

/// Get node text (helper shared by the extractor and formatter)
pub fn node_text<'a>(node: &Node, content: &'a str) -> &'a str {
    &content[node.start_byte()..node.end_byte()]
}
