use crate::vdom::Node;

/// Visitor pattern for traversing node trees immutably
///
/// This trait provides default implementations that walk the entire tree.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_element(&mut self, element: &Node) {
        walk_children(self, element);
    }

    fn visit_text(&mut self, _content: &str) {
        // Leaf node, no children to walk
    }

    fn visit_comment(&mut self, _content: &str) {
        // Leaf node, no children to walk
    }
}

/// Mutable visitor pattern for transforming node trees
///
/// Similar to Visitor, but provides mutable access to nodes.
/// Use this when you need to modify the tree during traversal.
pub trait VisitorMut: Sized {
    fn visit_node_mut(&mut self, node: &mut Node) {
        walk_node_mut(self, node);
    }

    fn visit_element_mut(&mut self, element: &mut Node) {
        walk_children_mut(self, element);
    }

    fn visit_text_mut(&mut self, _content: &mut String) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations for immutable visitor

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    match node {
        Node::Element { .. } => visitor.visit_element(node),
        Node::Text { content } => visitor.visit_text(content),
        Node::Comment { content } => visitor.visit_comment(content),
    }
}

pub fn walk_children<V: Visitor>(visitor: &mut V, element: &Node) {
    for child in element.children() {
        visitor.visit_node(child);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_node_mut<V: VisitorMut>(visitor: &mut V, node: &mut Node) {
    match node {
        Node::Element { .. } => visitor.visit_element_mut(node),
        Node::Text { content } => visitor.visit_text_mut(content),
        Node::Comment { .. } => {}
    }
}

pub fn walk_children_mut<V: VisitorMut>(visitor: &mut V, element: &mut Node) {
    if let Some(children) = element.children_mut() {
        for child in children.iter_mut() {
            visitor.visit_node_mut(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TagCounter {
        count: usize,
    }

    impl Visitor for TagCounter {
        fn visit_element(&mut self, element: &Node) {
            self.count += 1;
            walk_children(self, element);
        }
    }

    struct Shouter;

    impl VisitorMut for Shouter {
        fn visit_text_mut(&mut self, content: &mut String) {
            *content = content.to_uppercase();
        }
    }

    fn sample() -> Node {
        Node::element("div").with_children(vec![
            Node::element("h1").with_text("title"),
            Node::text("loose"),
            Node::comment("note"),
            Node::element("p").with_child(Node::element("span").with_text("inner")),
        ])
    }

    #[test]
    fn test_visitor_counts_elements() {
        let mut counter = TagCounter { count: 0 };
        counter.visit_node(&sample());
        assert_eq!(counter.count, 4);
    }

    #[test]
    fn test_visitor_mut_rewrites_text() {
        let mut node = sample();
        Shouter.visit_node_mut(&mut node);
        assert_eq!(node.text_content(), "TITLELOOSEINNER");
    }
}
