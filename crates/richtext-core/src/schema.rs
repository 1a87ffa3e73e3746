//! Node kinds and the parent/child rules of the rich text schema.

use std::fmt;

use crate::ast::RichTextNode;

/// The type tag of a rich text node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Heading,
    Paragraph,
    List,
    ListItem,
    Link,
    Text,
}

/// Node kinds allowed directly under the root
pub const TOP_LEVEL: &[NodeKind] = &[NodeKind::Heading, NodeKind::Paragraph, NodeKind::List];

/// Node kinds allowed inside paragraphs and headings
pub const INLINE: &[NodeKind] = &[NodeKind::Text, NodeKind::Link];

/// Node kinds allowed inside a list item
pub const LIST_ITEM_CHILD: &[NodeKind] = &[NodeKind::Text, NodeKind::Heading, NodeKind::Link];

const LIST_CHILD: &[NodeKind] = &[NodeKind::ListItem];
const LINK_CHILD: &[NodeKind] = &[NodeKind::Text];

impl NodeKind {
    /// The `"type"` value used in serialized output
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::List => "list",
            NodeKind::ListItem => "list-item",
            NodeKind::Link => "link",
            NodeKind::Text => "text",
        }
    }

    /// Kinds this node may hold as children
    pub fn allowed_children(self) -> &'static [NodeKind] {
        match self {
            NodeKind::Root => TOP_LEVEL,
            NodeKind::Heading | NodeKind::Paragraph => INLINE,
            NodeKind::List => LIST_CHILD,
            NodeKind::ListItem => LIST_ITEM_CHILD,
            NodeKind::Link => LINK_CHILD,
            NodeKind::Text => &[],
        }
    }

    pub fn admits(self, child: NodeKind) -> bool {
        self.allowed_children().contains(&child)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow converted candidates to the children `parent` admits.
///
/// Candidates of a disallowed kind are dropped, never coerced. Order is
/// preserved. `T` is the typed child of `parent`; its `TryFrom` impl must
/// accept exactly the kinds in `parent.allowed_children()`.
pub fn filter_children<T>(parent: NodeKind, candidates: Vec<RichTextNode>) -> Vec<T>
where
    T: TryFrom<RichTextNode, Error = RichTextNode>,
{
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let kind = candidate.kind();
            if !parent.admits(kind) {
                log::trace!("dropping {} under {}", kind, parent);
                return None;
            }
            T::try_from(candidate).ok()
        })
        .collect()
}
