//! Error types for the editor

use landkit_catalog::CatalogError;
use landkit_common::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("Component not found: {0}")]
    NotFound(String),

    #[error("Component '{component_type}' has no field '{field}'")]
    UnknownField { component_type: String, field: String },

    #[error("Index {index} out of range for {len} components")]
    OutOfRange { index: usize, len: usize },

    #[error("Component '{component_type}' does not offer '{value}' for style '{key}'")]
    UnknownStyleOption {
        component_type: String,
        key: String,
        value: String,
    },

    #[error("Duplicate component id: {0}")]
    DuplicateId(String),

    #[error("Unknown theme preset: {0}")]
    UnknownPreset(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("Initialization failed: {0}")]
    Initialization(String),
}

impl From<CatalogError> for EditorError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(component_type) => EditorError::UnknownComponentType(component_type),
            other => EditorError::Initialization(other.to_string()),
        }
    }
}
