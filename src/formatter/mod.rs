//! Import resolution and canonical formatting for generated Go
//!
//! `SourceFormatter` is the seam between generation and output. `GoFormatter`
//! is the real implementation: it parses the generated text with tree-sitter-go,
//! rebuilds the import block and re-indents the declarations, then re-parses
//! the result. Any syntax error on either side is a `Format` error, which only
//! a broken template can cause.

pub mod imports;
pub mod layout;

pub use imports::ImportSpec;

use crate::error::{Error, Result};
use crate::language::{self, SyntaxProblem};
use tracing::debug;

/// Normalizes imports and layout of a generated Go file
pub trait SourceFormatter {
    fn format(&self, raw: &str, required: &ImportSpec) -> Result<Vec<u8>>;
}

/// tree-sitter backed goimports/gofmt substitute
#[derive(Debug, Default, Clone, Copy)]
pub struct GoFormatter;

impl GoFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn invalid(stage: &str, problem: SyntaxProblem) -> Error {
    Error::format(format!(
        "{} source is not valid Go at {}:{}: {}",
        stage, problem.line, problem.column, problem.message
    ))
}

impl SourceFormatter for GoFormatter {
    fn format(&self, raw: &str, required: &ImportSpec) -> Result<Vec<u8>> {
        let mut parser = language::go_parser()?;
        let tree = language::parse_go(&mut parser, raw).map_err(|p| invalid("generated", p))?;
        let root = tree.root_node();

        let mut preamble = "";
        let mut package = None;
        let mut specs = Vec::new();
        let mut header_comments = Vec::new();
        let mut body_start = 0;

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "package_clause" if package.is_none() => {
                    preamble = raw[..child.start_byte()].trim();
                    let mut name_cursor = child.walk();
                    package = child
                        .children(&mut name_cursor)
                        .find(|n| n.kind() == "package_identifier")
                        .map(|n| language::node_text(&n, raw).to_string());
                    body_start = child.end_byte();
                }
                "import_declaration" => {
                    specs.extend(imports::collect_import_specs(child, raw));
                    body_start = child.end_byte();
                }
                // Comments between the package clause and the imports would
                // otherwise vanish with the rebuilt import block
                "comment" if package.is_some() && child.start_byte() >= body_start => {
                    header_comments.push((child.start_byte(), child.end_byte()));
                }
                _ => {}
            }
        }

        let package =
            package.ok_or_else(|| Error::format("generated source has no package clause"))?;

        let used = imports::used_package_names(root, raw);
        let resolved = imports::resolve_imports(specs, required, &used);
        debug!(
            "Resolved {} imports for package {}: {:?}",
            resolved.len(),
            package,
            resolved.iter().map(|s| s.path.as_str()).collect::<Vec<_>>()
        );

        // Comments that ended up before the last import are re-emitted above the body
        let displaced: Vec<&str> = header_comments
            .iter()
            .filter(|(_, end)| *end <= body_start)
            .map(|(start, end)| &raw[*start..*end])
            .collect();

        let mut out = String::new();
        if !preamble.is_empty() {
            out.push_str(&layout::reindent(preamble));
            out.push('\n');
        }
        out.push_str(&format!("package {}\n", package));

        if !resolved.is_empty() {
            out.push('\n');
            out.push_str(&imports::render_import_block(&resolved));
        }

        let mut body = displaced.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&raw[body_start..]);
        let body = layout::reindent(&body);
        if !body.is_empty() {
            out.push('\n');
            out.push_str(&body);
        }

        language::parse_go(&mut parser, &out).map_err(|p| invalid("formatted", p))?;

        Ok(out.into_bytes())
    }
}
