//! Rich text document tree
//!
//! This module defines the typed nodes of a rich text document. Each parent
//! holds a child type that only admits the node types the schema allows, so
//! a `Root` built from these types is valid by construction.
//!
//! Every struct carries its own `"type"` tag when serialized; the child enums
//! are untagged so the tag is written exactly once.

use serde::Serialize;

use crate::schema::NodeKind;

/// Document root
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    pub children: Vec<Block>,
}

impl Root {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node allowed directly under the root
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
}

/// A run of inline content inside a paragraph or heading
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Inline {
    Text(Text),
    Link(Link),
}

/// A node allowed inside a list item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListItemChild {
    Text(Text),
    Heading(Heading),
    Link(Link),
}

/// Heading with level (1-6) and inline content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "heading")]
pub struct Heading {
    pub level: u8,
    pub children: Vec<Inline>,
}

impl Heading {
    /// Create a heading, clamping the level into 1..=6
    pub fn new(level: u8, children: Vec<Inline>) -> Self {
        Self {
            level: level.clamp(1, 6),
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "paragraph")]
pub struct Paragraph {
    pub children: Vec<Inline>,
}

/// Ordered or unordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "list")]
pub struct List {
    #[serde(rename = "listType")]
    pub list_type: ListType,
    pub children: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "list-item")]
pub struct ListItem {
    pub children: Vec<ListItemChild>,
}

/// Link with URL, optional title and text-only content
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "link")]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub children: Vec<Text>,
}

/// Text leaf with its inherited formatting.
///
/// `bold`/`italic` are `None` when no enclosing markup set them; they are
/// serialized as `null` rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct Text {
    pub value: String,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

impl Text {
    /// Plain text without formatting
    pub fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            bold: None,
            italic: None,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }
}

/// Any non-root node, before it has been placed under a parent.
///
/// The converter produces these; a parent then narrows them into its own
/// child type with [`crate::filter_children`].
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextNode {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
    ListItem(ListItem),
    Link(Link),
    Text(Text),
}

impl RichTextNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            RichTextNode::Heading(_) => NodeKind::Heading,
            RichTextNode::Paragraph(_) => NodeKind::Paragraph,
            RichTextNode::List(_) => NodeKind::List,
            RichTextNode::ListItem(_) => NodeKind::ListItem,
            RichTextNode::Link(_) => NodeKind::Link,
            RichTextNode::Text(_) => NodeKind::Text,
        }
    }
}

// Narrowing conversions: the rejected node is handed back unchanged.

impl TryFrom<RichTextNode> for Block {
    type Error = RichTextNode;

    fn try_from(node: RichTextNode) -> Result<Self, Self::Error> {
        match node {
            RichTextNode::Heading(h) => Ok(Block::Heading(h)),
            RichTextNode::Paragraph(p) => Ok(Block::Paragraph(p)),
            RichTextNode::List(l) => Ok(Block::List(l)),
            other => Err(other),
        }
    }
}

impl TryFrom<RichTextNode> for Inline {
    type Error = RichTextNode;

    fn try_from(node: RichTextNode) -> Result<Self, Self::Error> {
        match node {
            RichTextNode::Text(t) => Ok(Inline::Text(t)),
            RichTextNode::Link(l) => Ok(Inline::Link(l)),
            other => Err(other),
        }
    }
}

impl TryFrom<RichTextNode> for ListItemChild {
    type Error = RichTextNode;

    fn try_from(node: RichTextNode) -> Result<Self, Self::Error> {
        match node {
            RichTextNode::Text(t) => Ok(ListItemChild::Text(t)),
            RichTextNode::Heading(h) => Ok(ListItemChild::Heading(h)),
            RichTextNode::Link(l) => Ok(ListItemChild::Link(l)),
            other => Err(other),
        }
    }
}

impl TryFrom<RichTextNode> for ListItem {
    type Error = RichTextNode;

    fn try_from(node: RichTextNode) -> Result<Self, Self::Error> {
        match node {
            RichTextNode::ListItem(item) => Ok(item),
            other => Err(other),
        }
    }
}

impl TryFrom<RichTextNode> for Text {
    type Error = RichTextNode;

    fn try_from(node: RichTextNode) -> Result<Self, Self::Error> {
        match node {
            RichTextNode::Text(t) => Ok(t),
            other => Err(other),
        }
    }
}

// Widening conversions back into the candidate type.

impl From<Block> for RichTextNode {
    fn from(block: Block) -> Self {
        match block {
            Block::Heading(h) => RichTextNode::Heading(h),
            Block::Paragraph(p) => RichTextNode::Paragraph(p),
            Block::List(l) => RichTextNode::List(l),
        }
    }
}

impl From<Inline> for RichTextNode {
    fn from(inline: Inline) -> Self {
        match inline {
            Inline::Text(t) => RichTextNode::Text(t),
            Inline::Link(l) => RichTextNode::Link(l),
        }
    }
}

impl From<ListItemChild> for RichTextNode {
    fn from(child: ListItemChild) -> Self {
        match child {
            ListItemChild::Text(t) => RichTextNode::Text(t),
            ListItemChild::Heading(h) => RichTextNode::Heading(h),
            ListItemChild::Link(l) => RichTextNode::Link(l),
        }
    }
}

impl From<ListItem> for RichTextNode {
    fn from(item: ListItem) -> Self {
        RichTextNode::ListItem(item)
    }
}

impl From<Text> for RichTextNode {
    fn from(text: Text) -> Self {
        RichTextNode::Text(text)
    }
}

impl Block {
    pub fn kind(&self) -> NodeKind {
        match self {
            Block::Heading(_) => NodeKind::Heading,
            Block::Paragraph(_) => NodeKind::Paragraph,
            Block::List(_) => NodeKind::List,
        }
    }
}

impl Inline {
    pub fn kind(&self) -> NodeKind {
        match self {
            Inline::Text(_) => NodeKind::Text,
            Inline::Link(_) => NodeKind::Link,
        }
    }
}

impl ListItemChild {
    pub fn kind(&self) -> NodeKind {
        match self {
            ListItemChild::Text(_) => NodeKind::Text,
            ListItemChild::Heading(_) => NodeKind::Heading,
            ListItemChild::Link(_) => NodeKind::Link,
        }
    }
}
