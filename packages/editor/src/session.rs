//! # Edit Session
//!
//! One user's editing state: the document, its styles, the undo history,
//! and the current selection.
//!
//! Every committed mutation bumps the version and takes a history snapshot.
//! Undo/redo restore a snapshot into the document and the style manager.

use crate::persistence::{self, AutoSave, SavedState};
use crate::{
    Document, EditorError, History, Mutation, MutationResult, Preset, RenderMarks, StyleManager,
};
use landkit_catalog::{Catalog, StyleKey};
use landkit_common::{GlobalStyleKey, Node, Storage};
use landkit_compiler_html::{
    compile_to_html, export_bundle, serialize_nodes, ExportBundle, ExportOptions, PageMeta,
};
use std::sync::Arc;

/// Components placed on a fresh page
const SAMPLE_PAGE: [&str; 2] = ["header", "hero"];

pub struct EditSession {
    document: Document,
    styles: StyleManager,
    history: History,

    /// Incremented on every committed change, undo and redo
    version: u64,

    /// Currently selected instance
    selected: Option<String>,

    /// (instance id, field) being edited in place
    editing: Option<(String, String)>,

    autosave: AutoSave,
}

impl EditSession {
    /// Start an empty session
    ///
    /// The catalog is validated first; an inconsistent catalog is an
    /// initialization failure.
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, EditorError> {
        catalog
            .validate()
            .map_err(|e| EditorError::Initialization(e.to_string()))?;

        let mut session = Self {
            document: Document::new(catalog),
            styles: StyleManager::new(),
            history: History::new(),
            version: 0,
            selected: None,
            editing: None,
            autosave: AutoSave::new(),
        };
        session.reset_history()?;

        tracing::info!("edit session started");
        Ok(session)
    }

    /// Start a session pre-populated with the sample page
    pub fn with_sample_page(catalog: Arc<Catalog>) -> Result<Self, EditorError> {
        let mut session = Self::new(catalog)?;
        for component_type in SAMPLE_PAGE {
            let instance = session.document.instantiate(component_type)?;
            session.document.append(instance)?;
        }
        session.reset_history()?;
        Ok(session)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn styles(&self) -> &StyleManager {
        &self.styles
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation as one undoable step
    ///
    /// On error nothing changes and no snapshot is taken.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let kind = mutation.kind();
        let created_id = match self.apply_inner(mutation) {
            Ok(created_id) => created_id,
            Err(e) => {
                tracing::debug!(mutation = kind, error = %e, "mutation rejected");
                return Err(e);
            }
        };

        self.version += 1;
        self.history
            .snapshot(self.document.instances(), self.styles.global())?;

        tracing::debug!(mutation = kind, version = self.version, "mutation committed");
        Ok(MutationResult {
            version: self.version,
            created_id,
        })
    }

    fn apply_inner(&mut self, mutation: Mutation) -> Result<Option<String>, EditorError> {
        match mutation {
            Mutation::AddComponent {
                component_type,
                after,
            } => {
                let instance = self.document.instantiate(&component_type)?;
                let id = instance.id.clone();
                match after {
                    Some(anchor) => self.document.insert_after(&anchor, instance)?,
                    None => self.document.append(instance)?,
                }
                Ok(Some(id))
            }

            Mutation::RemoveComponent { id } => {
                self.document.remove(&id)?;
                self.styles.remove_instance(&id);
                self.forget_marks(&id);
                Ok(None)
            }

            Mutation::DuplicateComponent { id } => {
                let new_id = self.document.duplicate(&id)?;
                let copied = self.styles.instance_styles(&id).cloned().unwrap_or_default();
                for (key, value) in copied {
                    self.styles.set_instance_style(&new_id, key, value);
                }
                Ok(Some(new_id))
            }

            Mutation::MoveComponent { id, index } => {
                self.document.reorder(&id, index)?;
                Ok(None)
            }

            Mutation::SetField { id, field, value } => {
                self.document.set_field(&id, &field, &value)?;
                Ok(None)
            }

            Mutation::SetInstanceStyle { id, key, value } => {
                self.document.check_style(&id, &key, &value)?;
                self.styles.set_instance_style(&id, key, value);
                self.mirror_styles(&id)?;
                Ok(None)
            }

            Mutation::ClearInstanceStyle { id, key } => {
                if self.document.get(&id).is_none() {
                    return Err(EditorError::NotFound(id));
                }
                self.styles.clear_instance_style(&id, &key);
                self.mirror_styles(&id)?;
                Ok(None)
            }

            Mutation::SetGlobalStyle { key, value } => {
                self.styles.set_global(key, value);
                Ok(None)
            }

            Mutation::ApplyPreset { preset } => {
                self.styles.apply_preset(preset);
                Ok(None)
            }

            Mutation::ResetStyles => {
                self.styles.reset_to_defaults();
                let ids: Vec<String> = self
                    .document
                    .instances()
                    .iter()
                    .map(|i| i.id.clone())
                    .collect();
                for id in ids {
                    self.document.set_style_overrides(&id, Default::default())?;
                }
                Ok(None)
            }

            Mutation::ClearPage => {
                self.document.clear();
                self.styles.sync_from(&[]);
                self.selected = None;
                self.editing = None;
                Ok(None)
            }
        }
    }

    /// Copy the manager's overrides for `id` onto the instance
    fn mirror_styles(&mut self, id: &str) -> Result<(), EditorError> {
        let overrides = self.styles.instance_styles(id).cloned().unwrap_or_default();
        self.document.set_style_overrides(id, overrides)
    }

    // Convenience wrappers

    pub fn add_component(
        &mut self,
        component_type: &str,
        after: Option<&str>,
    ) -> Result<String, EditorError> {
        let result = self.apply(Mutation::AddComponent {
            component_type: component_type.to_string(),
            after: after.map(str::to_string),
        })?;
        result
            .created_id
            .ok_or_else(|| EditorError::NotFound(component_type.to_string()))
    }

    pub fn remove_component(&mut self, id: &str) -> Result<(), EditorError> {
        self.apply(Mutation::RemoveComponent { id: id.to_string() })
            .map(|_| ())
    }

    pub fn duplicate_component(&mut self, id: &str) -> Result<String, EditorError> {
        let result = self.apply(Mutation::DuplicateComponent { id: id.to_string() })?;
        result
            .created_id
            .ok_or_else(|| EditorError::NotFound(id.to_string()))
    }

    pub fn move_component(&mut self, id: &str, index: usize) -> Result<(), EditorError> {
        self.apply(Mutation::MoveComponent {
            id: id.to_string(),
            index,
        })
        .map(|_| ())
    }

    pub fn set_field(&mut self, id: &str, field: &str, value: &str) -> Result<(), EditorError> {
        self.apply(Mutation::SetField {
            id: id.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        })
        .map(|_| ())
    }

    pub fn set_instance_style(
        &mut self,
        id: &str,
        key: StyleKey,
        value: &str,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::SetInstanceStyle {
            id: id.to_string(),
            key,
            value: value.to_string(),
        })
        .map(|_| ())
    }

    pub fn clear_instance_style(&mut self, id: &str, key: StyleKey) -> Result<(), EditorError> {
        self.apply(Mutation::ClearInstanceStyle {
            id: id.to_string(),
            key,
        })
        .map(|_| ())
    }

    pub fn set_global_style(&mut self, key: GlobalStyleKey, value: &str) -> Result<(), EditorError> {
        self.apply(Mutation::SetGlobalStyle {
            key,
            value: value.to_string(),
        })
        .map(|_| ())
    }

    pub fn apply_preset(&mut self, preset: Preset) -> Result<(), EditorError> {
        self.apply(Mutation::ApplyPreset { preset }).map(|_| ())
    }

    pub fn reset_styles(&mut self) -> Result<(), EditorError> {
        self.apply(Mutation::ResetStyles).map(|_| ())
    }

    pub fn clear_page(&mut self) -> Result<(), EditorError> {
        self.apply(Mutation::ClearPage).map(|_| ())
    }

    // History

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one change; returns false when there is nothing to undo
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let Some(entry) = self.history.undo() else {
            return Ok(false);
        };
        let restored = entry
            .restore()
            .and_then(|snapshot| self.restore_snapshot(snapshot));
        if let Err(e) = restored {
            self.history.redo();
            return Err(e);
        }
        Ok(true)
    }

    /// Step forward one change; returns false when there is nothing to redo
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let Some(entry) = self.history.redo() else {
            return Ok(false);
        };
        let restored = entry
            .restore()
            .and_then(|snapshot| self.restore_snapshot(snapshot));
        if let Err(e) = restored {
            self.history.undo();
            return Err(e);
        }
        Ok(true)
    }

    fn restore_snapshot(&mut self, snapshot: crate::Snapshot) -> Result<(), EditorError> {
        self.document.replace_instances(snapshot.instances)?;
        self.styles.set_globals(snapshot.global_styles);
        self.styles.sync_from(self.document.instances());

        if let Some(id) = self.selected.clone() {
            self.forget_marks_if_missing(&id);
        }
        if let Some((id, _)) = self.editing.clone() {
            self.forget_marks_if_missing(&id);
        }

        self.version += 1;
        tracing::debug!(
            version = self.version,
            cursor = self.history.cursor(),
            "restored history entry"
        );
        Ok(())
    }

    fn reset_history(&mut self) -> Result<(), EditorError> {
        self.history.clear();
        self.history
            .snapshot(self.document.instances(), self.styles.global())
    }

    // Selection and in-place editing

    pub fn select(&mut self, id: &str) -> Result<(), EditorError> {
        if self.document.get(id).is_none() {
            return Err(EditorError::NotFound(id.to_string()));
        }
        if self.selected.as_deref() != Some(id) {
            self.editing = None;
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.editing = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Mark a text field as being edited in place; selects its instance
    pub fn begin_edit(&mut self, id: &str, field: &str) -> Result<(), EditorError> {
        let instance = self
            .document
            .get(id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;
        let definition = self.document.catalog().get(&instance.component_type)?;
        if !definition.has_field(field) {
            return Err(EditorError::UnknownField {
                component_type: instance.component_type.clone(),
                field: field.to_string(),
            });
        }

        self.selected = Some(id.to_string());
        self.editing = Some((id.to_string(), field.to_string()));
        Ok(())
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    fn forget_marks(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if matches!(&self.editing, Some((editing, _)) if editing == id) {
            self.editing = None;
        }
    }

    fn forget_marks_if_missing(&mut self, id: &str) {
        if self.document.get(id).is_none() {
            self.forget_marks(id);
        }
    }

    // Rendering and export

    /// Live markup with editor affordances
    pub fn live_tree(&self) -> Vec<Node> {
        let marks = RenderMarks {
            selected: self.selected.as_deref(),
            editing: self
                .editing
                .as_ref()
                .map(|(id, field)| (id.as_str(), field.as_str())),
        };
        self.document.render(&marks)
    }

    pub fn live_html(&self) -> String {
        serialize_nodes(&self.live_tree())
    }

    /// Standalone HTML document for the current state
    pub fn export(&self, meta: &PageMeta, options: &ExportOptions) -> String {
        compile_to_html(&self.live_tree(), self.styles.global(), meta, options)
    }

    pub fn export_bundle(&self, meta: &PageMeta, options: &ExportOptions) -> ExportBundle {
        export_bundle(&self.live_tree(), self.styles.global(), meta, options)
    }

    // Persistence

    pub fn saved_state(&self, now_millis: i64) -> SavedState {
        SavedState {
            html: self.live_html(),
            instances: self.document.instances().to_vec(),
            styles: self.styles.export_state(),
            timestamp: now_millis,
        }
    }

    /// Replace the session state with a saved record
    ///
    /// History restarts from the restored state.
    pub fn restore(&mut self, state: SavedState) -> Result<(), EditorError> {
        let SavedState {
            mut instances,
            styles,
            ..
        } = state;

        // Overrides recorded only in the style state are re-applied to their instances
        for instance in &mut instances {
            if let Some(saved) = styles.instances.get(&instance.id) {
                instance
                    .style_overrides
                    .extend(saved.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }

        self.document.replace_instances(instances)?;
        self.styles.import_state(styles);
        self.styles.sync_from(self.document.instances());
        self.selected = None;
        self.editing = None;
        self.version += 1;
        self.reset_history()?;

        tracing::info!(instances = self.document.len(), "restored saved state");
        Ok(())
    }

    pub fn save_to(&mut self, storage: &mut dyn Storage, now_millis: i64) -> Result<(), EditorError> {
        persistence::save_state(storage, &self.saved_state(now_millis))?;
        self.autosave.mark_saved(now_millis);
        Ok(())
    }

    /// Periodic save hook; returns whether a save was attempted and succeeded
    ///
    /// Failures are logged and swallowed.
    pub fn autosave_tick(&mut self, storage: &mut dyn Storage, now_millis: i64) -> bool {
        if !self.autosave.is_due(now_millis) {
            return false;
        }
        match self.save_to(storage, now_millis) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "auto-save failed");
                self.autosave.mark_saved(now_millis);
                false
            }
        }
    }
}
