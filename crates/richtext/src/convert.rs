//! Convert a parsed HTML node tree to a rich text document
//!
//! The walk is recursive: every input node converts to zero or more
//! candidate nodes, and every node-producing rule narrows its children's
//! candidates to the kinds its node admits. Formatting from `b`/`i` style
//! wrappers travels down in a [`FormattingContext`] and lands on text leaves.

use richtext_core::{
    filter_children, Heading, Link, List, ListItem, NodeKind, Paragraph, RichTextNode, Root, Text,
};

use crate::node::{Node, NodeType};
use crate::rules::{Mark, Rule, Rules};
use crate::service::RichTextOptions;

/// Bold/italic state inherited from enclosing markup.
///
/// Passed by value; a mark once set stays set for the whole subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattingContext {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

impl FormattingContext {
    /// Copy of this context with `mark` turned on
    pub fn with_mark(self, mark: Mark) -> Self {
        match mark {
            Mark::Bold => Self {
                bold: Some(true),
                ..self
            },
            Mark::Italic => Self {
                italic: Some(true),
                ..self
            },
        }
    }
}

/// Default nesting limit for input trees
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Converter over a fixed rule table and options
pub struct Converter<'a> {
    rules: &'a Rules,
    options: &'a RichTextOptions,
}

impl<'a> Converter<'a> {
    pub fn new(rules: &'a Rules, options: &'a RichTextOptions) -> Self {
        Self { rules, options }
    }

    /// Convert the children of `document` into a root.
    ///
    /// Each direct child is converted with an empty context; only top-level
    /// kinds survive.
    pub fn convert(&self, document: &Node) -> Root {
        let candidates = self.convert_children(document, FormattingContext::default(), 1);
        let root = Root::new(filter_children(NodeKind::Root, candidates));
        log::debug!("converted document into {} top-level blocks", root.children.len());
        root
    }

    /// Convert one node into its candidate output nodes.
    ///
    /// Nodes nested more than `max_depth` levels below `node` convert to
    /// nothing.
    pub fn convert_node(&self, node: &Node, ctx: FormattingContext) -> Vec<RichTextNode> {
        self.convert_at(node, ctx, 1)
    }

    fn convert_at(&self, node: &Node, ctx: FormattingContext, depth: usize) -> Vec<RichTextNode> {
        if depth > self.options.max_depth {
            log::warn!(
                "nesting deeper than {} levels, dropping <{}> subtree",
                self.options.max_depth,
                node.name
            );
            return Vec::new();
        }

        match node.node_type {
            NodeType::Text => vec![RichTextNode::Text(Text {
                value: node.value.clone().unwrap_or_default(),
                bold: ctx.bold,
                italic: ctx.italic,
            })],
            NodeType::Element => match self.rules.for_tag(&node.name) {
                Some(rule) => self.apply(rule, node, ctx, depth),
                None => {
                    log::trace!("no rule for <{}>, skipping subtree", node.name);
                    Vec::new()
                }
            },
            NodeType::Comment | NodeType::Document => Vec::new(),
        }
    }

    fn convert_children(
        &self,
        node: &Node,
        ctx: FormattingContext,
        depth: usize,
    ) -> Vec<RichTextNode> {
        node.children()
            .flat_map(|child| self.convert_at(child, ctx, depth))
            .collect()
    }

    fn apply(
        &self,
        rule: Rule,
        node: &Node,
        ctx: FormattingContext,
        depth: usize,
    ) -> Vec<RichTextNode> {
        let ctx = match rule {
            Rule::Format(mark) => ctx.with_mark(mark),
            _ => ctx,
        };
        let children = self.convert_children(node, ctx, depth + 1);

        // wrappers hand their children's results up unfiltered
        let Some(kind) = rule.node_kind() else {
            return children;
        };

        let converted = match rule {
            Rule::Paragraph => RichTextNode::Paragraph(Paragraph {
                children: filter_children(kind, children),
            }),
            Rule::Heading(level) => {
                RichTextNode::Heading(Heading::new(level, filter_children(kind, children)))
            }
            Rule::List(list_type) => RichTextNode::List(List {
                list_type,
                children: filter_children(kind, children),
            }),
            Rule::ListItem => RichTextNode::ListItem(ListItem {
                children: filter_children(kind, children),
            }),
            Rule::Link => RichTextNode::Link(Link {
                url: node
                    .attr(&self.options.url_attribute)
                    .unwrap_or_default()
                    .to_string(),
                title: node.attr(&self.options.title_attribute).map(str::to_string),
                children: filter_children(kind, children),
            }),
            Rule::Format(_) | Rule::Unwrap => return children,
        };

        vec![converted]
    }
}

/// Convert a document node with the standard rules and default options
pub fn convert(document: &Node) -> Root {
    let rules = Rules::new();
    let options = RichTextOptions::default();
    Converter::new(&rules, &options).convert(document)
}
