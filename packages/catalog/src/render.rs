//! Instance rendering: template + field values + style overrides → live markup

use crate::definition::{ComponentDefinition, FieldKind, StyleKey};
use landkit_common::{walk_children_mut, Node, VisitorMut};
use std::collections::BTreeMap;

/// Everything needed to render one placed component
#[derive(Debug, Clone, Copy)]
pub struct InstanceView<'a> {
    pub id: &'a str,
    pub field_values: &'a BTreeMap<String, String>,
    pub style_overrides: &'a BTreeMap<StyleKey, String>,
    pub selected: bool,
    /// Field currently being edited in place
    pub editing_field: Option<&'a str>,
}

impl ComponentDefinition {
    /// Render an instance into its live-editor markup tree
    pub fn render(&self, view: &InstanceView<'_>) -> Node {
        let mut root = self.template.clone();
        root.set_attr("data-component-id", view.id);

        FieldFiller {
            definition: self,
            view,
        }
        .visit_node_mut(&mut root);

        let mut declarations = Vec::new();
        for (key, value) in view.style_overrides {
            if key.is_option() {
                root.add_class(value);
            } else {
                declarations.push(format!("{}: {};", key, value));
            }
        }
        if !declarations.is_empty() {
            root.set_attr("style", declarations.join(" "));
        }

        if view.selected {
            root.add_class("selected");
        }

        root
    }
}

struct FieldFiller<'d, 'v> {
    definition: &'d ComponentDefinition,
    view: &'v InstanceView<'v>,
}

impl VisitorMut for FieldFiller<'_, '_> {
    fn visit_element_mut(&mut self, element: &mut Node) {
        let slot = element.attr("data-field").map(str::to_string);
        let field = slot.as_deref().and_then(|key| self.definition.field(key));

        if let Some(field) = field {
            let value = self.view.field_values.get(&field.key);
            match field.kind {
                FieldKind::Text | FieldKind::Textarea => {
                    if let (Some(value), Some(children)) = (value, element.children_mut()) {
                        *children = vec![Node::text(value.clone())];
                    }
                    if self.view.editing_field == Some(field.key.as_str()) {
                        element.add_class("editing");
                        element.set_attr("contenteditable", "true");
                    }
                }
                FieldKind::Image => {
                    if let Some(uri) = value {
                        if let Some(children) = element.children_mut() {
                            *children = vec![image(uri)];
                        }
                        element.remove_class("image-placeholder");
                        element.add_class("image-container");
                    }
                }
            }
            return;
        }

        walk_children_mut(self, element);
    }
}

fn image(uri: &str) -> Node {
    Node::element("img")
        .with_attr("src", uri)
        .with_attr("alt", "Uploaded image")
        .with_attr("style", "width: 100%; height: 100%; object-fit: cover;")
}
