//! Tool table - the fixed list of bundled tools the launcher offers
//!
//! The list is compiled in; nothing adds or removes tools at runtime.

mod catalog;
mod definition;

pub use catalog::{BUILTIN_TOOLS, ToolCatalog};
pub use definition::ToolDescriptor;
