use serde::Serialize;

use crate::block::{Block, Span};

/// One heading in a document's table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub level: u8,
    pub text: String,
}

/// Concatenated text of a span sequence, markers removed.
pub fn plain_text(spans: &[Span]) -> String {
    let mut out = String::new();
    push_plain_text(spans, &mut out);
    out
}

fn push_plain_text(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) | Span::Italic(text) => out.push_str(text),
            Span::Bold(inner) => push_plain_text(inner, out),
        }
    }
}

/// Headings of the document in order.
pub fn outline(blocks: &[Block]) -> Vec<OutlineEntry> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { level, content } => Some(OutlineEntry {
                level: *level,
                text: plain_text(content),
            }),
            _ => None,
        })
        .collect()
}

/// Plain text of the first paragraph, cut to at most `max_chars` characters.
///
/// A cut excerpt ends with `…`, which counts towards the limit.
pub fn excerpt(blocks: &[Block], max_chars: usize) -> String {
    let Some(text) = blocks.iter().find_map(|block| match block {
        Block::Paragraph { content } => Some(plain_text(content)),
        _ => None,
    }) else {
        return String::new();
    };

    if text.chars().count() <= max_chars {
        return text;
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(max_chars - 1).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}
