//! RichTextService - the main entry point for HTML to rich text conversion.

use richtext_core::{JsonFormat, Root};

use crate::convert::{Converter, DEFAULT_MAX_DEPTH};
use crate::node::Node;
use crate::rules::{Rule, Rules};
use crate::{Result, RichTextError};

/// Options for RichTextService
#[derive(Debug, Clone)]
pub struct RichTextOptions {
    /// Attribute read for link URLs
    pub url_attribute: String,

    /// Attribute read for link titles
    pub title_attribute: String,

    /// Output format of [`RichTextService::to_json`]
    pub json_format: JsonFormat,

    /// Deepest element nesting converted; deeper subtrees produce nothing
    pub max_depth: usize,
}

impl Default for RichTextOptions {
    fn default() -> Self {
        Self {
            url_attribute: "href".to_string(),
            title_attribute: "title".to_string(),
            json_format: JsonFormat::Compact,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main service for converting HTML to rich text
#[derive(Debug, Clone, Default)]
pub struct RichTextService {
    options: RichTextOptions,
    rules: Rules,
}

impl RichTextService {
    /// Create a new RichTextService with default options
    pub fn new() -> Self {
        Self {
            options: RichTextOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a RichTextService with custom options
    pub fn with_options(options: RichTextOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert an already parsed document node.
    ///
    /// Conversion never fails, so the options are used as they are; call
    /// [`validate`](Self::validate) first to reject unusable options.
    pub fn convert(&self, document: &Node) -> Root {
        Converter::new(&self.rules, &self.options).convert(document)
    }

    /// Parse an HTML string and convert it.
    ///
    /// Like [`convert`](Self::convert), this does not validate the options.
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Root {
        self.convert(&crate::html::parse_html_with_depth(html, self.options.max_depth))
    }

    /// Convert an HTML string to rich text JSON, validating the options first
    #[cfg(feature = "html")]
    pub fn to_json(&self, html: &str) -> Result<String> {
        self.validate()?;
        let root = self.convert_html(html);
        richtext_core::serialize(&root, self.options.json_format)
            .map_err(|e| RichTextError::Serialization(e.to_string()))
    }

    /// Check the options for values the converter cannot use
    pub fn validate(&self) -> Result<()> {
        if self.options.url_attribute.trim().is_empty() {
            return Err(RichTextError::InvalidInput(
                "url_attribute must not be empty".to_string(),
            ));
        }
        if self.options.max_depth == 0 {
            return Err(RichTextError::InvalidInput(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Add or replace the rule for a tag
    pub fn add_rule(&mut self, tag: &str, rule: Rule) -> &mut Self {
        self.rules.add(tag, rule);
        self
    }

    /// Remove the rule for a tag so it converts to nothing
    pub fn remove_rule(&mut self, tag: &str) -> &mut Self {
        self.rules.remove(tag);
        self
    }

    /// Get the rule table
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get the current options
    pub fn options(&self) -> &RichTextOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RichTextOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richtext_core::{Block, Inline, Text};

    fn make_p(text: &str) -> Node {
        let mut doc = Node::document();
        doc.add_child(Node::element("p").with_child(Node::text(text)));
        doc
    }

    #[test]
    fn test_convert_node_tree() {
        let service = RichTextService::new();
        let root = service.convert(&make_p("Hello World"));
        assert_eq!(root.children.len(), 1);
        let Block::Paragraph(p) = &root.children[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.children, vec![Inline::Text(Text::plain("Hello World"))]);
    }

    #[test]
    fn test_remove_rule() {
        let mut service = RichTextService::new();
        service.remove_rule("p");
        assert!(service.convert(&make_p("gone")).is_empty());
    }

    #[test]
    fn test_add_rule() {
        let mut service = RichTextService::new();
        service.add_rule("blockquote", Rule::Paragraph);
        let mut doc = Node::document();
        doc.add_child(Node::element("blockquote").with_child(Node::text("quoted")));
        let root = service.convert(&doc);
        assert!(matches!(root.children.as_slice(), [Block::Paragraph(_)]));
    }

    #[test]
    fn test_validate_rejects_empty_url_attribute() {
        let mut service = RichTextService::new();
        assert!(service.validate().is_ok());
        service.options_mut().url_attribute = " ".to_string();
        assert!(matches!(
            service.validate(),
            Err(RichTextError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let service = RichTextService::with_options(RichTextOptions {
            max_depth: 0,
            ..Default::default()
        });
        assert!(matches!(
            service.validate(),
            Err(RichTextError::InvalidInput(_))
        ));
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_convert_html_does_not_validate() {
        let mut service = RichTextService::new();
        service.options_mut().url_attribute = String::new();
        let root = service.convert_html(r#"<p><a href="/x">x</a></p>"#);
        let Block::Paragraph(p) = &root.children[0] else {
            panic!("expected paragraph");
        };
        assert!(matches!(&p.children[0], Inline::Link(link) if link.url.is_empty()));
        assert!(service.to_json("<p>x</p>").is_err());
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_to_json() {
        let service = RichTextService::new();
        let json = service.to_json("<h1>test</h1>").unwrap();
        assert_eq!(
            json,
            r#"{"type":"root","children":[{"type":"heading","level":1,"children":[{"type":"text","value":"test","bold":null,"italic":null}]}]}"#
        );
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_to_json_pretty() {
        let service = RichTextService::with_options(RichTextOptions {
            json_format: JsonFormat::Pretty,
            ..Default::default()
        });
        let json = service.to_json("<p>x</p>").unwrap();
        assert!(json.contains('\n'));
    }
}
