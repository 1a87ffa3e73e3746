//! Standard rules for the rich text tag set.

use richtext_core::ListType;

use super::{Mark, Rule};

/// Create the standard tag table
pub fn standard_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("b", Rule::Format(Mark::Bold)),
        ("strong", Rule::Format(Mark::Bold)),
        ("i", Rule::Format(Mark::Italic)),
        ("em", Rule::Format(Mark::Italic)),
        ("a", Rule::Link),
        ("li", Rule::ListItem),
        ("ul", Rule::List(ListType::Unordered)),
        ("ol", Rule::List(ListType::Ordered)),
        ("p", Rule::Paragraph),
        ("h1", Rule::Heading(1)),
        ("h2", Rule::Heading(2)),
        ("h3", Rule::Heading(3)),
        ("h4", Rule::Heading(4)),
        ("h5", Rule::Heading(5)),
        ("h6", Rule::Heading(6)),
    ]
}
