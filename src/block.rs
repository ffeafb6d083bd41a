use serde::Serialize;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    Text(String),
    /// `**...**`; may carry italic spans but never another bold
    Bold(Vec<Span>),
    /// `*...*`; content is kept verbatim
    Italic(String),
}

/// Block-level elements parsed from an article body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading { level: u8, content: Vec<Span> },
    Paragraph { content: Vec<Span> },
    UnorderedList { items: Vec<Vec<Span>> },
    OrderedList { items: Vec<Vec<Span>> },
}

/// A parsed article body.
pub type Document = Vec<Block>;
