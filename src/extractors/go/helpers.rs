use crate::language;
use tree_sitter::Node;

/// Helper methods for node text extraction and type parameter lists
impl super::GoExtractor {
    /// Get node text (helper method)
    pub(super) fn get_node_text(&self, node: Node, content: &str) -> String {
        language::node_text(&node, content).to_string()
    }

    pub(super) fn first_named_child<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let child = node.named_children(&mut cursor).next();
        child
    }

    /// Collect names from `[K comparable, V any]` or `[T, U any]`
    ///
    /// Each declaration in the list carries one or more `name` fields followed by
    /// a constraint; only the names matter for writing the receiver.
    pub(super) fn extract_type_param_names(&self, list: Node, content: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = list.walk();

        for decl in list.named_children(&mut cursor) {
            let mut name_cursor = decl.walk();
            for name in decl.children_by_field_name("name", &mut name_cursor) {
                names.push(self.get_node_text(name, content));
            }
        }

        names
    }
}
