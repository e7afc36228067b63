use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown component type: {0}")]
    NotFound(String),

    #[error("Catalog is empty")]
    Empty,

    #[error("Duplicate component type: {0}")]
    DuplicateType(String),

    #[error("Invalid component '{component_type}': {reason}")]
    Invalid {
        component_type: String,
        reason: String,
    },
}
