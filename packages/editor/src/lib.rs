//! # Landkit Editor
//!
//! Core editing engine for Landkit landing pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: component definitions + templates  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: page state + mutations              │
//! │  - Document of placed instances             │
//! │  - Style manager (theme + overrides)        │
//! │  - Snapshot undo/redo history               │
//! │  - Best-effort persistence                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html / compiler-css: static export │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use landkit_catalog::Catalog;
//! use landkit_editor::EditSession;
//! use std::sync::Arc;
//!
//! let mut session = EditSession::new(Arc::new(Catalog::builtin()))?;
//!
//! let hero = session.add_component("hero", None)?;
//! session.set_field(&hero, "title", "Launch day")?;
//!
//! session.undo()?;
//! session.redo()?;
//!
//! let html = session.export(&PageMeta::default(), &ExportOptions::default());
//! ```

mod color;
mod document;
mod errors;
mod history;
mod id_generator;
mod mutations;
pub mod persistence;
mod session;
mod styles;

pub use color::{darken, hex_to_rgb, lighten, rgb_to_hex, Rgb};
pub use document::{ComponentInstance, Document, RenderMarks};
pub use errors::EditorError;
pub use history::{History, HistoryEntry, Snapshot, DEFAULT_CAPACITY};
pub use id_generator::IdGenerator;
pub use mutations::{Mutation, MutationResult};
pub use persistence::{AutoSave, SavedState};
pub use session::EditSession;
pub use styles::{InstanceStyles, Preset, StyleManager, StyleState};

// Re-export common types for convenience
pub use landkit_catalog::{Catalog, StyleKey};
pub use landkit_common::{GlobalStyleKey, GlobalStyles};
pub use landkit_compiler_html::{AssetMode, ExportBundle, ExportOptions, PageMeta};
