//! Rule table mapping tag names to conversions.

mod rule;
mod standard;

pub use rule::{Mark, Rule};
pub use standard::standard_rules;

use indexmap::IndexMap;

/// Collection of rules for conversion, keyed by lowercase tag name
#[derive(Debug, Clone)]
pub struct Rules {
    rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a new Rules instance with the standard tag set
    pub fn new() -> Self {
        Self {
            rules: standard_rules()
                .into_iter()
                .map(|(tag, rule)| (tag.to_string(), rule))
                .collect(),
        }
    }

    /// Create a rule table with no tags
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Add or replace the rule for a tag
    pub fn add(&mut self, tag: &str, rule: Rule) {
        self.rules.insert(tag.to_lowercase(), rule);
    }

    /// Remove the rule for a tag; the tag then converts to nothing
    pub fn remove(&mut self, tag: &str) -> Option<Rule> {
        self.rules.shift_remove(tag.to_lowercase().as_str())
    }

    /// Find the rule for a tag name
    pub fn for_tag(&self, tag: &str) -> Option<Rule> {
        if let Some(rule) = self.rules.get(tag) {
            return Some(*rule);
        }
        self.rules.get(tag.to_lowercase().as_str()).copied()
    }

    /// Tag names in insertion order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richtext_core::ListType;

    #[test]
    fn test_standard_lookup() {
        let rules = Rules::new();
        assert_eq!(rules.for_tag("b"), Some(Rule::Format(Mark::Bold)));
        assert_eq!(rules.for_tag("EM"), Some(Rule::Format(Mark::Italic)));
        assert_eq!(rules.for_tag("ol"), Some(Rule::List(ListType::Ordered)));
        assert_eq!(rules.for_tag("h4"), Some(Rule::Heading(4)));
        assert_eq!(rules.for_tag("div"), None);
    }

    #[test]
    fn test_add_and_remove() {
        let mut rules = Rules::new();
        rules.add("SPAN", Rule::Unwrap);
        assert_eq!(rules.for_tag("span"), Some(Rule::Unwrap));

        assert_eq!(rules.remove("a"), Some(Rule::Link));
        assert_eq!(rules.for_tag("a"), None);
        assert_eq!(rules.remove("a"), None);
    }

    #[test]
    fn test_empty_table() {
        let rules = Rules::empty();
        assert!(rules.is_empty());
        assert_eq!(rules.tags().count(), 0);
        assert_eq!(rules.for_tag("p"), None);
    }
}
