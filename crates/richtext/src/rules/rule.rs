//! Rule type describing how one tag converts.

use richtext_core::{ListType, NodeKind};

/// Inline formatting mark forced on by a wrapper tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
}

/// A rule defines how a matched element converts to rich text.
///
/// Rules fall into two groups: wrappers that produce no node of their own
/// and hand their children's results up (`Format`, `Unwrap`), and builders
/// that produce exactly one node whose children are filtered by the node's
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Convert children with a formatting mark turned on
    Format(Mark),
    /// Convert children with the context unchanged
    Unwrap,
    Paragraph,
    /// Heading of the given level (1-6)
    Heading(u8),
    List(ListType),
    ListItem,
    Link,
}

impl Rule {
    /// Kind of the node this rule produces, `None` for wrappers.
    ///
    /// The converter filters the produced node's children by this kind.
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            Rule::Format(_) | Rule::Unwrap => None,
            Rule::Paragraph => Some(NodeKind::Paragraph),
            Rule::Heading(_) => Some(NodeKind::Heading),
            Rule::List(_) => Some(NodeKind::List),
            Rule::ListItem => Some(NodeKind::ListItem),
            Rule::Link => Some(NodeKind::Link),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richtext_core::schema;

    #[test]
    fn test_wrappers_produce_no_node() {
        for rule in [Rule::Format(Mark::Bold), Rule::Format(Mark::Italic), Rule::Unwrap] {
            assert_eq!(rule.node_kind(), None);
        }
    }

    #[test]
    fn test_builders_filter_by_their_kind() {
        let kinds = |rule: Rule| rule.node_kind().map(NodeKind::allowed_children);
        assert_eq!(kinds(Rule::Link), Some(&[NodeKind::Text][..]));
        assert_eq!(
            kinds(Rule::List(ListType::Ordered)),
            Some(&[NodeKind::ListItem][..])
        );
        assert_eq!(kinds(Rule::ListItem), Some(schema::LIST_ITEM_CHILD));
        assert_eq!(kinds(Rule::Paragraph), Some(schema::INLINE));
        assert_eq!(kinds(Rule::Heading(2)), Some(schema::INLINE));
    }
}
