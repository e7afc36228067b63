//! Node tree → HTML text

use landkit_common::Node;

/// Options for markup serialization
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// One element per line, indented
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Indentation depth of the top-level nodes
    pub depth: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "    ".to_string(),
            depth: 0,
        }
    }
}

impl SerializeOptions {
    /// No added whitespace, like a DOM's inner HTML
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
            depth: 0,
        }
    }
}

pub(crate) struct Context {
    options: SerializeOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    pub(crate) fn new(options: SerializeOptions) -> Self {
        Self {
            depth: options.depth,
            options,
            buffer: String::new(),
        }
    }

    pub(crate) fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub(crate) fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize without added whitespace
pub fn serialize_nodes(nodes: &[Node]) -> String {
    serialize(nodes, SerializeOptions::compact())
}

pub fn serialize(nodes: &[Node], options: SerializeOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        compile_node(node, &mut ctx);
    }
    ctx.get_output()
}

pub(crate) fn compile_node(node: &Node, ctx: &mut Context) {
    match node {
        Node::Element { .. } => compile_element(node, ctx),
        Node::Text { content } => {
            if ctx.options.pretty {
                if !content.trim().is_empty() {
                    ctx.add_line(&escape_text(content.trim()));
                }
            } else {
                ctx.add(&escape_text(content));
            }
        }
        Node::Comment { content } => ctx.add_line(&format!("<!-- {} -->", content)),
    }
}

fn compile_element(element: &Node, ctx: &mut Context) {
    let Some(tag) = element.tag() else {
        return;
    };

    let mut open = format!("<{}", tag);
    if !element.classes().is_empty() {
        open.push_str(&format!(" class=\"{}\"", escape_html(&element.classes().join(" "))));
    }
    if let Some(attributes) = element.attributes() {
        for (name, value) in attributes {
            open.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
    }

    let children = element.children();

    // Self-closing tags
    if children.is_empty() && is_self_closing(tag) {
        open.push_str(" />");
        ctx.add_line(&open);
        return;
    }
    open.push('>');

    if !ctx.options.pretty || !has_element_children(children) {
        // Inline: <tag>text</tag>
        let mut line = open;
        for child in children {
            match child {
                Node::Text { content } => line.push_str(&escape_text(content)),
                other => line.push_str(&serialize(std::slice::from_ref(other), SerializeOptions::compact())),
            }
        }
        line.push_str(&format!("</{}>", tag));
        ctx.add_line(&line);
        return;
    }

    ctx.add_line(&open);
    ctx.indent();
    for child in children {
        compile_node(child, ctx);
    }
    ctx.dedent();
    ctx.add_line(&format!("</{}>", tag));
}

/// Escape for text content; quotes are kept as written
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape for attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[Node]) -> bool {
    children.iter().any(|child| child.is_element())
}
