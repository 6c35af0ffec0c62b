//! Import specs: reading them from a tree, pruning and goimports-style ordering

use crate::language::node_text;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;
use tree_sitter::Node;

/// One `import` line: optional local name plus the quoted path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportSpec {
    /// Explicit name: an identifier, `_` or `.`
    pub alias: Option<String>,
    pub path: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    /// Name the importing file refers to the package by
    ///
    /// Without an alias this is the last path element, skipping a major-version
    /// element (`.../v2`) and dropping a `.vN` suffix (`gopkg.in/yaml.v3`).
    /// Blank and dot imports have no name.
    pub fn local_name(&self) -> Option<String> {
        match self.alias.as_deref() {
            Some("_") | Some(".") => None,
            Some(alias) => Some(alias.to_string()),
            None => {
                let mut elements = self.path.rsplit('/');
                let last = elements.next().unwrap_or(self.path.as_str());
                let element = if is_major_version(last) {
                    elements.next().unwrap_or(last)
                } else {
                    last
                };
                let name = match element.rsplit_once(".v") {
                    Some((base, version)) if is_numeric(version) => base,
                    _ => element,
                };
                Some(name.to_string())
            }
        }
    }

    /// `_` and `.` imports are kept for their side effects or dot-scope
    pub fn is_side_effect(&self) -> bool {
        self.local_name().is_none()
    }

    /// Standard library paths have no dot in their first element
    pub fn is_standard_library(&self) -> bool {
        let first = self.path.split('/').next().unwrap_or("");
        !first.contains('.')
    }

    /// Render as it appears inside an import block
    pub fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} \"{}\"", alias, self.path),
            None => format!("\"{}\"", self.path),
        }
    }

    fn sort_key_cmp(&self, other: &Self) -> Ordering {
        self.path
            .cmp(&other.path)
            .then_with(|| self.alias.cmp(&other.alias))
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_major_version(element: &str) -> bool {
    element
        .strip_prefix('v')
        .is_some_and(|rest| is_numeric(rest) && rest != "0" && rest != "1")
}

/// Collect the specs of one `import_declaration`, single or grouped
pub fn collect_import_specs(node: Node, content: &str) -> Vec<ImportSpec> {
    let mut specs = Vec::new();
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        match child.kind() {
            "import_spec" => specs.extend(import_spec(child, content)),
            "import_spec_list" => {
                let mut nested_cursor = child.walk();
                for nested_child in child.children(&mut nested_cursor) {
                    if nested_child.kind() == "import_spec" {
                        specs.extend(import_spec(nested_child, content));
                    }
                }
            }
            _ => {}
        }
    }

    specs
}

fn import_spec(node: Node, content: &str) -> Option<ImportSpec> {
    let path_node = node.child_by_field_name("path")?;
    let quoted = node_text(&path_node, content);
    let path = quoted.trim_matches(|c| c == '"' || c == '`').to_string();
    let alias = node
        .child_by_field_name("name")
        .map(|name| node_text(&name, content).to_string());
    Some(ImportSpec { alias, path })
}

/// Package names referenced as `pkg.Member` or in `pkg.Type` positions
pub fn used_package_names(node: Node, content: &str) -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    collect_used_names(node, content, &mut used);
    used
}

fn collect_used_names(node: Node, content: &str, used: &mut BTreeSet<String>) {
    match node.kind() {
        "selector_expression" => {
            if let Some(operand) = node.child_by_field_name("operand") {
                if operand.kind() == "identifier" {
                    used.insert(node_text(&operand, content).to_string());
                }
            }
        }
        "qualified_type" => {
            if let Some(package) = node.child_by_field_name("package") {
                used.insert(node_text(&package, content).to_string());
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_used_names(child, content, used);
    }
}

/// Add the required import, drop unused and duplicate ones, and sort
///
/// Standard library imports sort before third-party ones; each group is
/// ordered by path.
pub fn resolve_imports(
    existing: Vec<ImportSpec>,
    required: &ImportSpec,
    used: &BTreeSet<String>,
) -> Vec<ImportSpec> {
    let mut kept: Vec<ImportSpec> = Vec::new();

    for spec in existing.into_iter().chain(std::iter::once(required.clone())) {
        if kept.contains(&spec) {
            continue;
        }
        let is_used = match spec.local_name() {
            Some(name) => used.contains(&name),
            None => true,
        };
        if is_used {
            kept.push(spec);
        } else {
            debug!("Removing unused import {}", spec.render());
        }
    }

    kept.sort_by(|a, b| {
        b.is_standard_library()
            .cmp(&a.is_standard_library())
            .then_with(|| a.sort_key_cmp(b))
    });
    kept
}

/// Render a parenthesized import block, blank line between std and third-party groups
pub fn render_import_block(specs: &[ImportSpec]) -> String {
    let mut block = String::from("import (\n");
    let mut previous_std = None;

    for spec in specs {
        let is_std = spec.is_standard_library();
        if previous_std == Some(true) && !is_std {
            block.push('\n');
        }
        block.push('\t');
        block.push_str(&spec.render());
        block.push('\n');
        previous_std = Some(is_std);
    }

    block.push_str(")\n");
    block
}
