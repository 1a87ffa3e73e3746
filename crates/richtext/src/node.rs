//! Parsed HTML node structure consumed by the converter.
//!
//! Any HTML parser can convert its output to this structure; the `html`
//! feature provides an adapter for scraper/html5ever.

use indexmap::IndexMap;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
}

/// A parsed HTML node.
///
/// Elements carry a lowercase tag name, attributes and children; text and
/// comment nodes carry their literal payload in `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text`/`#comment`/`#document` otherwise
    pub name: String,

    /// Payload of text and comment nodes
    pub value: Option<String>,

    /// Attributes in source order, names lowercased
    pub attributes: IndexMap<String, String>,

    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            name: tag_name.to_lowercase(),
            value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::leaf(NodeType::Text, "#text", content)
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::leaf(NodeType::Comment, "#comment", content)
    }

    /// Create an empty document node
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            name: "#document".to_string(),
            value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    fn leaf(node_type: NodeType, name: &str, content: &str) -> Self {
        Self {
            node_type,
            name: name.to_string(),
            value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Tag name for elements, `None` for every other node type
    pub fn tag_name(&self) -> Option<&str> {
        self.is_element().then_some(self.name.as_str())
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_lowercase().as_str())
            .map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value with the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), Some("div"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.value.as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs(
            "a",
            vec![("HREF", "https://example.com"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("Title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
        assert!(node.has_attr("href"));
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut node = Node::element_with_attrs("a", vec![("href", "/old")]);
        node.set_attr("Href", "/new");
        assert_eq!(node.attr("href"), Some("/new"));
        assert_eq!(node.attributes.len(), 1);
    }

    #[test]
    fn test_children_in_order() {
        let div = Node::element("div")
            .with_child(Node::text("Hello "))
            .with_child(Node::comment("skipped"))
            .with_child(Node::element("span").with_child(Node::text("World")));

        let types: Vec<NodeType> = div.children().map(|c| c.node_type).collect();
        assert_eq!(types, vec![NodeType::Text, NodeType::Comment, NodeType::Element]);
    }
}
