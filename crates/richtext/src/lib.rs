//! # richtext
//!
//! Convert HTML into a schema-constrained rich text document.
//!
//! The output is a small tree of typed nodes (root, heading, paragraph,
//! list, list-item, link, text) in which every parent only holds the child
//! types the schema allows. Bold and italic markup does not become nodes of
//! its own; it is flattened onto the text leaves underneath it.
//!
//! ## Design
//!
//! The converter accepts a parser-agnostic [`Node`] tree. This allows:
//!
//! - **Parser agnostic**: Any HTML parser can convert to the Node structure
//! - **Pure conversion**: The walk has no I/O and never fails
//! - **Editable dispatch**: Tags map to [`Rule`]s in a table that callers can extend
//!
//! Unknown tags, comments and stray text outside a block produce nothing.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use richtext::html_to_rich_text;
//! use richtext_core::Block;
//!
//! let root = html_to_rich_text("<h1>Hello <b>World</b></h1>");
//! assert!(matches!(root.children.as_slice(), [Block::Heading(_)]));
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use richtext::{Node, RichTextService};
//!
//! let mut document = Node::document();
//! document.add_child(Node::element("p").with_child(Node::text("Hello World")));
//!
//! let root = RichTextService::new().convert(&document);
//! assert_eq!(root.children.len(), 1);
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod rules;
mod service;

pub use convert::{convert, Converter, FormattingContext, DEFAULT_MAX_DEPTH};
#[cfg(feature = "html")]
pub use html::{parse_html, parse_html_with_depth};
pub use node::{Node, NodeType};
pub use rules::{standard_rules, Mark, Rule, Rules};
pub use service::{RichTextOptions, RichTextService};

pub use richtext_core::{JsonFormat, Root};

/// Error type for rich text operations
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RichTextError>;

/// Parse an HTML string and convert it with the standard rules.
///
/// Never fails: unsupported markup, and nesting deeper than
/// [`DEFAULT_MAX_DEPTH`], is dropped.
#[cfg(feature = "html")]
pub fn html_to_rich_text(html: &str) -> Root {
    convert(&parse_html(html))
}

/// Parse an HTML string and serialize the converted document as JSON
#[cfg(feature = "html")]
pub fn html_to_rich_text_json(html: &str, format: JsonFormat) -> Result<String> {
    let root = html_to_rich_text(html);
    richtext_core::serialize(&root, format).map_err(|e| RichTextError::Serialization(e.to_string()))
}
