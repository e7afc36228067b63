//! # Landkit Catalog
//!
//! Static registry of insertable page blocks. Each [`ComponentDefinition`]
//! carries its live-editor template, the editable fields it declares and the
//! enumerated style options it supports.
//!
//! ```rust,ignore
//! use landkit_catalog::{Catalog, Category};
//!
//! let catalog = Catalog::builtin();
//! catalog.validate()?;
//!
//! let hero = catalog.get("hero")?;
//! for (ty, def) in catalog.list_by_category(Category::Content) {
//!     println!("{} - {}", ty, def.name);
//! }
//! ```

mod catalog;
mod definition;
mod error;
mod render;
mod templates;

pub use catalog::Catalog;
pub use definition::{
    Category, ComponentDefinition, FieldKind, FieldSpec, StyleKey, StyleSpec, PROPERTY_PREFIX,
};
pub use error::CatalogError;
pub use render::InstanceView;
pub use templates::builtin_definitions;
