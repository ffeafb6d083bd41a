use crate::block::{Block, Span};
use crate::inline::parse_inline;

/// Options controlling how the block scanner maps markup onto blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Added to the written heading depth. The article page supplies its own
    /// title, so `#` is rendered one level down by default. Values above
    /// [`MAX_HEADING_OFFSET`] are treated as the maximum.
    pub heading_offset: u8,
}

/// Largest offset that keeps `###` within heading level 6.
pub const MAX_HEADING_OFFSET: u8 = 3;

impl Default for ParseOptions {
    fn default() -> Self {
        Self { heading_offset: 1 }
    }
}

/// Heading prefixes in dispatch order, with their written depth.
const HEADING_PREFIXES: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

/// Parse an article body into a list of blocks
pub fn parse(input: &str) -> Vec<Block> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse an article body with explicit options
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Vec<Block> {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut cursor = Lines::new(&lines);
    let mut blocks = Vec::new();

    while let Some(line) = cursor.peek() {
        if let Some(block) = parse_block(line, &mut cursor, options) {
            blocks.push(block);
        }
    }

    log::trace!("parsed {} lines into {} blocks", lines.len(), blocks.len());
    blocks
}

/// Cursor over the lines of the input.
#[derive(Debug, Clone)]
struct Lines<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }
}

/// Dispatch on `line` (the current line) and consume one block.
///
/// Returns `None` when the line is blank; the cursor always moves forward.
fn parse_block(line: &str, cursor: &mut Lines, options: &ParseOptions) -> Option<Block> {
    for (prefix, depth) in HEADING_PREFIXES {
        if let Some(text) = line.strip_prefix(prefix) {
            cursor.advance();
            return Some(Block::Heading {
                level: depth + options.heading_offset.min(MAX_HEADING_OFFSET),
                content: parse_inline(text),
            });
        }
    }

    if line.starts_with('-') {
        return Some(Block::UnorderedList {
            items: parse_list_items(cursor, '-'),
        });
    }
    if line.starts_with('+') {
        return Some(Block::OrderedList {
            items: parse_list_items(cursor, '+'),
        });
    }

    if is_blank(line) {
        cursor.advance();
        return None;
    }

    Some(parse_paragraph(cursor))
}

/// Collect consecutive lines starting with `marker`, one item per line.
fn parse_list_items(cursor: &mut Lines, marker: char) -> Vec<Vec<Span>> {
    let mut items = Vec::new();
    while let Some(text) = cursor.peek().and_then(|line| line.strip_prefix(marker)) {
        items.push(parse_inline(text));
        cursor.advance();
    }
    items
}

/// Join consecutive non-blank lines into one paragraph and consume the
/// blank line that ends it.
fn parse_paragraph(cursor: &mut Lines) -> Block {
    let mut lines = Vec::new();
    while let Some(line) = cursor.peek().filter(|line| !is_blank(line)) {
        lines.push(line);
        cursor.advance();
    }
    // Blank separator, or a no-op at end of input
    cursor.advance();

    let text = lines.join(" ");
    Block::Paragraph {
        content: parse_inline(text.trim()),
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
