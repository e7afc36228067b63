pub mod error;
pub mod result;
pub mod storage;
pub mod theme;
pub mod vdom;
pub mod visitor;

pub use error::*;
pub use result::*;
pub use storage::*;
pub use theme::*;
pub use vdom::*;
pub use visitor::*;
