use crate::definition::{Category, ComponentDefinition};
use crate::error::CatalogError;
use crate::templates::builtin_definitions;
use landkit_common::{walk_children, Node, Visitor};
use std::collections::BTreeSet;

/// Read-only registry of component definitions, in declaration order
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<ComponentDefinition>,
}

impl Catalog {
    pub fn new(definitions: Vec<ComponentDefinition>) -> Self {
        Self { definitions }
    }

    /// The built-in landing page blocks
    pub fn builtin() -> Self {
        Self::new(builtin_definitions())
    }

    pub fn get(&self, component_type: &str) -> Result<&ComponentDefinition, CatalogError> {
        self.definitions
            .iter()
            .find(|d| d.component_type == component_type)
            .ok_or_else(|| CatalogError::NotFound(component_type.to_string()))
    }

    pub fn contains(&self, component_type: &str) -> bool {
        self.get(component_type).is_ok()
    }

    /// Type keys in declaration order
    pub fn list_types(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .map(|d| d.component_type.as_str())
            .collect()
    }

    /// Definitions of one category, declaration order preserved
    pub fn list_by_category(&self, category: Category) -> Vec<(&str, &ComponentDefinition)> {
        self.definitions
            .iter()
            .filter(|d| d.category == category)
            .map(|d| (d.component_type.as_str(), d))
            .collect()
    }

    pub fn definitions(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Check structural consistency of every definition
    ///
    /// - type keys are unique
    /// - the template root is tagged `data-component=<type>`
    /// - the template's `data-field` slots are exactly the declared fields
    /// - every style option list is non-empty
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.definitions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::new();
        for definition in &self.definitions {
            if !seen.insert(definition.component_type.as_str()) {
                return Err(CatalogError::DuplicateType(definition.component_type.clone()));
            }
            validate_definition(definition)?;
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_definition(definition: &ComponentDefinition) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::Invalid {
        component_type: definition.component_type.clone(),
        reason,
    };

    if definition.template.attr("data-component") != Some(definition.component_type.as_str()) {
        return Err(invalid("template root is missing data-component".to_string()));
    }

    let mut collector = SlotCollector::default();
    collector.visit_node(&definition.template);

    let mut declared = BTreeSet::new();
    for field in &definition.fields {
        if !declared.insert(field.key.as_str()) {
            return Err(invalid(format!("field '{}' declared twice", field.key)));
        }
    }

    for slot in &collector.slots {
        if !declared.contains(slot.as_str()) {
            return Err(invalid(format!("template slot '{}' is not a declared field", slot)));
        }
    }
    for key in &declared {
        if !collector.slots.iter().any(|s| s == key) {
            return Err(invalid(format!("field '{}' has no template slot", key)));
        }
    }

    for style in &definition.styles {
        if style.options.is_empty() {
            return Err(invalid(format!("style '{}' has no options", style.key)));
        }
    }

    Ok(())
}

#[derive(Default)]
struct SlotCollector {
    slots: Vec<String>,
}

impl Visitor for SlotCollector {
    fn visit_element(&mut self, element: &Node) {
        if let Some(field) = element.attr("data-field") {
            self.slots.push(field.to_string());
        }
        walk_children(self, element);
    }
}
