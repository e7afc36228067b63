//! # Page Mutations
//!
//! High-level editing operations, applied through
//! [`EditSession::apply`](crate::EditSession::apply).
//!
//! Each mutation is validated in full before anything changes. A mutation
//! that succeeds is one undo step.

use crate::Preset;
use landkit_catalog::StyleKey;
use landkit_common::GlobalStyleKey;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Instantiate a catalog component, at the end or after an anchor
    AddComponent {
        component_type: String,
        after: Option<String>,
    },

    RemoveComponent {
        id: String,
    },

    /// Deep copy placed right after the source
    DuplicateComponent {
        id: String,
    },

    MoveComponent {
        id: String,
        index: usize,
    },

    SetField {
        id: String,
        field: String,
        value: String,
    },

    SetInstanceStyle {
        id: String,
        key: StyleKey,
        value: String,
    },

    ClearInstanceStyle {
        id: String,
        key: StyleKey,
    },

    SetGlobalStyle {
        key: GlobalStyleKey,
        value: String,
    },

    ApplyPreset {
        preset: Preset,
    },

    /// Default theme, no per-instance overrides
    ResetStyles,

    /// Remove every component
    ClearPage,
}

impl Mutation {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::AddComponent { .. } => "add_component",
            Mutation::RemoveComponent { .. } => "remove_component",
            Mutation::DuplicateComponent { .. } => "duplicate_component",
            Mutation::MoveComponent { .. } => "move_component",
            Mutation::SetField { .. } => "set_field",
            Mutation::SetInstanceStyle { .. } => "set_instance_style",
            Mutation::ClearInstanceStyle { .. } => "clear_instance_style",
            Mutation::SetGlobalStyle { .. } => "set_global_style",
            Mutation::ApplyPreset { .. } => "apply_preset",
            Mutation::ResetStyles => "reset_styles",
            Mutation::ClearPage => "clear_page",
        }
    }
}

/// Outcome of a committed mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Session version after the mutation
    pub version: u64,

    /// Id of the instance the mutation created, if any
    pub created_id: Option<String>,
}
