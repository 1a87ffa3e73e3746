//! JSON serialization of rich text documents

use crate::ast::Root;
use crate::options::JsonFormat;

/// Serialize a document to a JSON string.
///
/// Unset optional fields (`bold`, `italic`, link `title`) are written as
/// `null`.
pub fn serialize(root: &Root, format: JsonFormat) -> Result<String, serde_json::Error> {
    match format {
        JsonFormat::Compact => serde_json::to_string(root),
        JsonFormat::Pretty => serde_json::to_string_pretty(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Heading, Inline, Link, List, ListItem, ListItemChild, ListType, Text};
    use serde_json::json;

    #[test]
    fn test_empty_root() {
        let json = serialize(&Root::default(), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"type":"root","children":[]}"#);
    }

    #[test]
    fn test_heading_shape() {
        let root = Root::new(vec![Block::Heading(Heading::new(
            1,
            vec![Inline::Text(Text::plain("test"))],
        ))]);
        let value = serde_json::to_value(&root).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "root",
                "children": [{
                    "type": "heading",
                    "level": 1,
                    "children": [{ "type": "text", "value": "test", "bold": null, "italic": null }]
                }]
            })
        );
    }

    #[test]
    fn test_list_and_link_shape() {
        let link = Link {
            url: "https://example.com".to_string(),
            title: None,
            children: vec![Text {
                value: "body".to_string(),
                bold: Some(true),
                italic: None,
            }],
        };
        let root = Root::new(vec![Block::List(List {
            list_type: ListType::Ordered,
            children: vec![ListItem {
                children: vec![ListItemChild::Link(link)],
            }],
        })]);
        let value = serde_json::to_value(&root).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "root",
                "children": [{
                    "type": "list",
                    "listType": "ordered",
                    "children": [{
                        "type": "list-item",
                        "children": [{
                            "type": "link",
                            "url": "https://example.com",
                            "title": null,
                            "children": [{ "type": "text", "value": "body", "bold": true, "italic": null }]
                        }]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_pretty_has_newlines() {
        let json = serialize(&Root::default(), JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
        let compact = serialize(&Root::default(), JsonFormat::Compact).unwrap();
        assert!(!compact.contains('\n'));
    }
}
