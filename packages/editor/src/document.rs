//! # Document Model
//!
//! The editable page: an ordered list of placed component instances.
//!
//! Every operation validates before it touches the instance list, so a
//! failed call leaves the document exactly as it was. The document never
//! records history itself; [`EditSession`](crate::EditSession) snapshots
//! after each committed mutation.

use crate::{EditorError, IdGenerator};
use landkit_catalog::{Catalog, InstanceView, StyleKey};
use landkit_common::Node;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// A placed occurrence of a catalog component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstance {
    pub id: String,

    #[serde(rename = "type")]
    pub component_type: String,

    #[serde(default)]
    pub field_values: BTreeMap<String, String>,

    #[serde(default)]
    pub style_overrides: BTreeMap<StyleKey, String>,

    #[serde(default)]
    pub order: usize,
}

/// Editor-only state reflected in the live markup
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderMarks<'a> {
    /// Currently selected instance
    pub selected: Option<&'a str>,

    /// (instance id, field key) being edited in place
    pub editing: Option<(&'a str, &'a str)>,
}

/// Ordered collection of component instances
#[derive(Debug, Clone)]
pub struct Document {
    catalog: Arc<Catalog>,
    instances: Vec<ComponentInstance>,
    ids: IdGenerator,
}

impl Document {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            instances: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Create a fresh, unplaced instance of a catalog component
    pub fn instantiate(&mut self, component_type: &str) -> Result<ComponentInstance, EditorError> {
        self.catalog.get(component_type)?;

        Ok(ComponentInstance {
            id: self.ids.new_id(),
            component_type: component_type.to_string(),
            field_values: BTreeMap::new(),
            style_overrides: BTreeMap::new(),
            order: self.instances.len(),
        })
    }

    /// Place an instance at the end of the page
    pub fn append(&mut self, instance: ComponentInstance) -> Result<(), EditorError> {
        self.check_insertable(&instance)?;
        self.instances.push(instance);
        self.renumber();
        Ok(())
    }

    /// Place an instance directly after `anchor_id`
    pub fn insert_after(
        &mut self,
        anchor_id: &str,
        instance: ComponentInstance,
    ) -> Result<(), EditorError> {
        let index = self.require_position(anchor_id)?;
        self.check_insertable(&instance)?;
        self.instances.insert(index + 1, instance);
        self.renumber();
        Ok(())
    }

    /// Remove an instance, returning it
    pub fn remove(&mut self, id: &str) -> Result<ComponentInstance, EditorError> {
        let index = self.require_position(id)?;
        let removed = self.instances.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Deep-copy an instance under a new id, placed right after the source
    ///
    /// Returns the new id.
    pub fn duplicate(&mut self, id: &str) -> Result<String, EditorError> {
        let index = self.require_position(id)?;

        let mut copy = self.instances[index].clone();
        copy.id = self.ids.new_id();
        let new_id = copy.id.clone();

        self.instances.insert(index + 1, copy);
        self.renumber();
        Ok(new_id)
    }

    /// Move an instance to `new_index` (position after removal)
    pub fn reorder(&mut self, id: &str, new_index: usize) -> Result<(), EditorError> {
        let index = self.require_position(id)?;
        let len = self.instances.len();
        if new_index >= len {
            return Err(EditorError::OutOfRange {
                index: new_index,
                len,
            });
        }

        let instance = self.instances.remove(index);
        self.instances.insert(new_index, instance);
        self.renumber();
        Ok(())
    }

    /// Set a declared field's value
    pub fn set_field(&mut self, id: &str, key: &str, value: &str) -> Result<(), EditorError> {
        let index = self.require_position(id)?;
        let instance = &self.instances[index];
        let definition = self.catalog.get(&instance.component_type)?;

        if !definition.has_field(key) {
            return Err(EditorError::UnknownField {
                component_type: instance.component_type.clone(),
                field: key.to_string(),
            });
        }

        self.instances[index]
            .field_values
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Check a style override against the instance's component definition
    ///
    /// Enumerated keys must be offered by the component with that value.
    /// CSS property keys are accepted as-is.
    pub fn check_style(&self, id: &str, key: &StyleKey, value: &str) -> Result<(), EditorError> {
        let instance = self.require(id)?;
        if !key.is_option() {
            return Ok(());
        }

        let definition = self.catalog.get(&instance.component_type)?;
        match definition.style(key) {
            Some(spec) if spec.allows(value) => Ok(()),
            _ => Err(EditorError::UnknownStyleOption {
                component_type: instance.component_type.clone(),
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Replace an instance's override map wholesale
    pub(crate) fn set_style_overrides(
        &mut self,
        id: &str,
        overrides: BTreeMap<StyleKey, String>,
    ) -> Result<(), EditorError> {
        let index = self.require_position(id)?;
        self.instances[index].style_overrides = overrides;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ComponentInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.instances.iter().position(|i| i.id == id)
    }

    /// Instances in page order
    pub fn instances(&self) -> &[ComponentInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Swap in a whole instance list (snapshot restore, saved state)
    ///
    /// Validated as a unit; on error the current instances are kept.
    /// Order is taken from list position, not from the `order` fields.
    pub fn replace_instances(
        &mut self,
        instances: Vec<ComponentInstance>,
    ) -> Result<(), EditorError> {
        let mut seen = HashSet::new();
        for instance in &instances {
            if !seen.insert(instance.id.as_str()) {
                return Err(EditorError::DuplicateId(instance.id.clone()));
            }
            self.check_definition(instance)?;
        }

        for instance in &instances {
            self.ids.observe(&instance.id);
        }
        self.instances = instances;
        self.renumber();
        Ok(())
    }

    /// Render the live markup of every instance, in page order
    pub fn render(&self, marks: &RenderMarks<'_>) -> Vec<Node> {
        self.instances
            .iter()
            .filter_map(|instance| {
                let definition = match self.catalog.get(&instance.component_type) {
                    Ok(definition) => definition,
                    Err(e) => {
                        tracing::warn!(instance_id = %instance.id, error = %e, "skipping instance");
                        return None;
                    }
                };

                let editing_field = marks
                    .editing
                    .filter(|(id, _)| *id == instance.id)
                    .map(|(_, field)| field);

                Some(definition.render(&InstanceView {
                    id: &instance.id,
                    field_values: &instance.field_values,
                    style_overrides: &instance.style_overrides,
                    selected: marks.selected == Some(instance.id.as_str()),
                    editing_field,
                }))
            })
            .collect()
    }

    fn require(&self, id: &str) -> Result<&ComponentInstance, EditorError> {
        self.get(id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))
    }

    fn require_position(&self, id: &str) -> Result<usize, EditorError> {
        self.position(id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))
    }

    fn check_insertable(&self, instance: &ComponentInstance) -> Result<(), EditorError> {
        if self.get(&instance.id).is_some() {
            return Err(EditorError::DuplicateId(instance.id.clone()));
        }
        self.check_definition(instance)
    }

    fn check_definition(&self, instance: &ComponentInstance) -> Result<(), EditorError> {
        let definition = self.catalog.get(&instance.component_type)?;

        if let Some(key) = instance
            .field_values
            .keys()
            .find(|key| !definition.has_field(key))
        {
            return Err(EditorError::UnknownField {
                component_type: instance.component_type.clone(),
                field: key.clone(),
            });
        }

        Ok(())
    }

    fn renumber(&mut self) {
        for (order, instance) in self.instances.iter_mut().enumerate() {
            instance.order = order;
        }
    }
}
