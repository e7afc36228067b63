//! Static export of landing pages
//!
//! Turns the live markup tree into a standalone HTML document: editor
//! artifacts are stripped, the stylesheet and behavior script are
//! generated, and everything is assembled into one deterministic page.

mod behavior;
mod compiler;
mod sanitize;
mod serializer;

#[cfg(test)]
mod tests;

pub use behavior::behavior_script;
pub use compiler::{
    compile_to_html, export_bundle, AssetMode, ExportBundle, ExportOptions, PageMeta, CSS_FILE,
    HTML_FILE, JS_FILE,
};
pub use sanitize::{sanitize, sanitized};
pub use serializer::{escape_html, escape_text, serialize, serialize_nodes, SerializeOptions};
