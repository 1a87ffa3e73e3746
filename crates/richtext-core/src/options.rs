//! Configuration options for rich text serialization

/// JSON output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Compact JSON without extra whitespace
    #[default]
    Compact,
    /// Pretty-printed JSON with indentation
    Pretty,
}
