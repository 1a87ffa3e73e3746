//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts the
//! result to the [`Node`] structure the converter consumes.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::convert::DEFAULT_MAX_DEPTH;
use crate::node::Node;

/// Parse an HTML fragment into a document node.
///
/// The returned node has type `Document`; its children are the top-level
/// nodes of the fragment in source order.
///
/// # Example
///
/// ```rust
/// use richtext::{parse_html, RichTextService};
///
/// let document = parse_html("<h1>Hello <em>World</em></h1>");
/// let root = RichTextService::new().convert(&document);
/// assert_eq!(root.children.len(), 1);
/// ```
pub fn parse_html(html: &str) -> Node {
    parse_html_with_depth(html, DEFAULT_MAX_DEPTH)
}

/// Parse an HTML fragment, keeping at most `max_depth` levels of nesting.
///
/// Nodes below the limit are left out of the returned tree, so deeply
/// nested markup neither grows the tree nor the call stack.
pub fn parse_html_with_depth(html: &str, max_depth: usize) -> Node {
    let fragment = Html::parse_fragment(html);
    let mut document = Node::document();
    // html5ever wraps fragments in a synthetic <html> element
    append_children(&mut document, fragment.root_element(), 1, max_depth);
    document
}

/// Append the children of `element`; they sit at `depth` below the document
fn append_children(target: &mut Node, element: ElementRef, depth: usize, max_depth: usize) {
    if depth > max_depth {
        if element.has_children() {
            log::warn!(
                "nesting deeper than {} levels, dropping children of <{}>",
                max_depth,
                element.value().name()
            );
        }
        return;
    }

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => target.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => target.add_child(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    target.add_child(scraper_to_node(child_element, depth, max_depth));
                }
            }
            _ => {}
        }
    }
}

/// Convert a scraper ElementRef at `depth` to our Node structure
fn scraper_to_node(element: ElementRef, depth: usize, max_depth: usize) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), attrs);
    append_children(&mut node, element, depth + 1, max_depth);
    node
}
