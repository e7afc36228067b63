use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Markup node
///
/// Page content is built from these nodes independent of any rendering
/// surface. Attributes are kept sorted so serialization is deterministic;
/// classes keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// HTML element
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        classes: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attributes: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Node::Comment {
            content: content.into(),
        }
    }

    /// Add whitespace-separated classes
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Shorthand for an element containing a single text node
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(Node::text(content))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    pub fn classes(&self) -> &[String] {
        match self {
            Node::Element { classes, .. } => classes,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if let Node::Element { classes, .. } = self {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }

    /// Remove a class; returns whether it was present
    pub fn remove_class(&mut self, class: &str) -> bool {
        match self {
            Node::Element { classes, .. } => {
                let before = classes.len();
                classes.retain(|c| c != class);
                classes.len() != before
            }
            _ => false,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn attributes(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Node::Element { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if let Node::Element { attributes, .. } = self {
            attributes.insert(key.into(), value.into());
        }
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        match self {
            Node::Element { attributes, .. } => attributes.remove(key),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { content } => out.push_str(content),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Comment { .. } => {}
        }
    }

    /// Depth-first search for the first element matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if predicate(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(predicate))
    }

    /// All elements (self included) matching `predicate`, in document order
    pub fn find_all(&self, predicate: &dyn Fn(&Node) -> bool) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, predicate: &dyn Fn(&Node) -> bool, found: &mut Vec<&'a Node>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_matching(predicate, found);
        }
    }
}
