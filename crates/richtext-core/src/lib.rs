//! richtext-core - rich text document model and serialization
//!
//! This crate provides the typed node tree of a schema-constrained rich text
//! document, the parent/child rules of that schema, and JSON serialization.
//! It knows nothing about HTML; `richtext` builds these trees from parsed
//! HTML.
//!
//! # Architecture
//!
//! ```text
//!                     ┌──────────────┐
//! converted nodes ──▶ │ filter by    │ ──▶ typed Root ──▶ JSON String
//! (RichTextNode)      │ parent kind  │
//!                     └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{serialize, Block, Heading, Inline, JsonFormat, Root, Text};
//!
//! let root = Root::new(vec![Block::Heading(Heading::new(
//!     1,
//!     vec![Inline::Text(Text::plain("Hello World"))],
//! ))]);
//!
//! let json = serialize(&root, JsonFormat::Compact).unwrap();
//! assert!(json.starts_with(r#"{"type":"root""#));
//! ```

mod ast;
mod options;
pub mod schema;
mod serialize;

pub use ast::{
    Block, Heading, Inline, Link, List, ListItem, ListItemChild, ListType, Paragraph,
    RichTextNode, Root, Text,
};
pub use options::JsonFormat;
pub use schema::{filter_children, NodeKind};
pub use serialize::serialize;
