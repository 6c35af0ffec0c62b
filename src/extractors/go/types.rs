use crate::extractors::base::{TypeDeclaration, TypeShape};
use tree_sitter::Node;

/// Type declaration extraction for Go (structs, interfaces, type aliases)
impl super::GoExtractor {
    pub(super) fn extract_package_name(&self, node: Node, content: &str) -> Option<String> {
        let mut cursor = node.walk();
        let name = node
            .children(&mut cursor)
            .find(|child| child.kind() == "package_identifier")
            .map(|child| self.get_node_text(child, content));
        name
    }

    /// A `type` keyword introduces one spec or a parenthesized group of them
    pub(super) fn extract_type_declaration(&self, node: Node, content: &str) -> Vec<TypeDeclaration> {
        let mut declarations = Vec::new();
        let mut cursor = node.walk();

        for child in node.children(&mut cursor) {
            match child.kind() {
                "type_spec" => {
                    if let Some(decl) = self.extract_type_spec(child, content) {
                        declarations.push(decl);
                    }
                }
                "type_alias" => {
                    if let Some(decl) = self.extract_type_alias(child, content) {
                        declarations.push(decl);
                    }
                }
                _ => {}
            }
        }

        declarations
    }

    pub(super) fn extract_type_spec(&self, node: Node, content: &str) -> Option<TypeDeclaration> {
        let name = node.child_by_field_name("name")?;
        let type_node = node.child_by_field_name("type")?;

        let type_params = node
            .child_by_field_name("type_parameters")
            .map(|list| self.extract_type_param_names(list, content))
            .unwrap_or_default();

        Some(
            TypeDeclaration::new(self.get_node_text(name, content), self.classify_type(type_node))
                .with_type_params(type_params),
        )
    }

    // `type A = B` never gets methods of its own, whatever B is
    pub(super) fn extract_type_alias(&self, node: Node, content: &str) -> Option<TypeDeclaration> {
        let name = node.child_by_field_name("name")?;
        Some(TypeDeclaration::new(
            self.get_node_text(name, content),
            TypeShape::Alias,
        ))
    }

    pub(super) fn classify_type(&self, type_node: Node) -> TypeShape {
        match type_node.kind() {
            "struct_type" => TypeShape::Record,
            "interface_type" => TypeShape::Interface,
            "function_type" => TypeShape::Function,
            "parenthesized_type" => self
                .first_named_child(type_node)
                .map(|inner| self.classify_type(inner))
                .unwrap_or(TypeShape::Definition),
            _ => TypeShape::Definition,
        }
    }
}
