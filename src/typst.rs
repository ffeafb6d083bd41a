use crate::block::{Block, Span};
use crate::config::TypstConfig;

/// Convert blocks to Typst markup.
///
/// `title` is the article title supplied by the page; it is emitted as a
/// level-1 heading ahead of the body.
pub fn blocks_to_typst(blocks: &[Block], title: Option<&str>, config: &TypstConfig) -> String {
    let mut out = String::new();

    // Set up paragraph settings to prevent widows/orphans
    out.push_str("#set par(linebreaks: \"optimized\")\n\n");

    if let Some(title) = title {
        let mut text = String::new();
        escape_into(title, &mut text);
        out.push_str("= ");
        push_line_content(&text, &mut out);
        out.push_str("\n\n");
    }

    let mut i = 0;
    while i < blocks.len() {
        let block = &blocks[i];

        match block {
            Block::Heading { .. } if config.keep_with_next => {
                // Keep heading with following content using a block that prevents breaks
                out.push_str("#block(breakable: false)[\n");
                emit_block(block, config, &mut out);

                if i + 1 < blocks.len() {
                    i += 1;
                    emit_block(&blocks[i], config, &mut out);
                }
                out.push_str("]\n\n");
            }
            _ => emit_block(block, config, &mut out),
        }

        i += 1;
    }

    out
}

fn emit_block(block: &Block, config: &TypstConfig, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            for _ in 0..*level {
                out.push('=');
            }
            out.push(' ');
            content_to_typst(content, out);
            out.push_str("\n\n");
        }
        Block::Paragraph { content } => {
            content_to_typst(content, out);
            out.push_str("\n\n");
        }
        Block::UnorderedList { items } => emit_list("-", items, config, out),
        Block::OrderedList { items } => emit_list("+", items, config, out),
    }
}

fn emit_list(marker: &str, items: &[Vec<Span>], config: &TypstConfig, out: &mut String) {
    // Small lists stay together, long ones may break across pages
    let unbreakable = items.len() <= config.unbreakable_list_max;
    if unbreakable {
        out.push_str("#block(breakable: false)[\n");
    }
    for item in items {
        out.push_str(marker);
        out.push(' ');
        content_to_typst(item, out);
        out.push('\n');
    }
    if unbreakable {
        out.push_str("]\n");
    }
    out.push('\n');
}

/// Spans that open a line of markup, with any leading list/heading/enum
/// marker escaped so it stays text.
fn content_to_typst(spans: &[Span], out: &mut String) {
    let mut text = String::new();
    spans_to_typst(spans, &mut text);
    push_line_content(&text, out);
}

fn push_line_content(text: &str, out: &mut String) {
    let start = text.len() - text.trim_start().len();
    let (indent, rest) = text.split_at(start);
    out.push_str(indent);

    if rest.starts_with(['=', '-', '+']) {
        out.push('\\');
        out.push_str(rest);
        return;
    }

    // "1." opens a numbered list
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && rest[digits..].starts_with('.') {
        out.push_str(&rest[..digits]);
        out.push('\\');
        out.push_str(&rest[digits..]);
        return;
    }

    out.push_str(rest);
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => escape_into(text, out),
            Span::Bold(inner) => {
                out.push('*');
                spans_to_typst(inner, out);
                out.push('*');
            }
            Span::Italic(text) => {
                out.push('_');
                escape_into(text, out);
                out.push('_');
            }
        }
    }
}

/// Escape special Typst characters
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '/' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}
