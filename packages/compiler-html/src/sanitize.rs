//! Removal of editor-only markup before export

use landkit_common::{walk_children_mut, Node, VisitorMut};

/// Elements removed outright, by class
const REMOVED_ELEMENTS: [&str; 2] = ["component-controls", "drag-handle"];

/// Classes only the editor uses
const EDITOR_CLASSES: [&str; 4] = ["component", "selected", "editable", "editing"];

/// Attributes only the editor uses
const EDITOR_ATTRIBUTES: [&str; 5] = [
    "contenteditable",
    "data-component",
    "data-component-id",
    "data-field",
    "data-action",
];

/// Strip editor affordances from a live markup tree
///
/// Idempotent: sanitizing sanitized markup changes nothing.
pub fn sanitize(nodes: &mut Vec<Node>) {
    nodes.retain(|node| !is_editor_element(node));
    let mut sanitizer = Sanitizer;
    for node in nodes.iter_mut() {
        sanitizer.visit_node_mut(node);
    }
}

/// Sanitized copy of a live markup tree
pub fn sanitized(nodes: &[Node]) -> Vec<Node> {
    let mut nodes = nodes.to_vec();
    sanitize(&mut nodes);
    nodes
}

fn is_editor_element(node: &Node) -> bool {
    REMOVED_ELEMENTS.iter().any(|class| node.has_class(class))
}

struct Sanitizer;

impl VisitorMut for Sanitizer {
    fn visit_element_mut(&mut self, element: &mut Node) {
        for class in EDITOR_CLASSES {
            element.remove_class(class);
        }
        for attribute in EDITOR_ATTRIBUTES {
            element.remove_attr(attribute);
        }
        if let Some(children) = element.children_mut() {
            children.retain(|child| !is_editor_element(child));
        }

        walk_children_mut(self, element);
    }
}
