use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::block::{Block, Span};
use crate::config::{Config, HtmlConfig};
use crate::parser::parse_with_options;

/// Convert blocks to an HTML fragment
pub fn blocks_to_html(blocks: &[Block], config: &HtmlConfig) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, config, &mut out);
    }
    out
}

/// Render a full article: the externally supplied title as `<h1>`, then the
/// parsed body. Headings in the body start at `<h2>` with the default offset.
pub fn article_to_html(title: &str, body: &str, config: &Config) -> String {
    let blocks = parse_with_options(body, &config.parse_options());
    let newline = if config.html.pretty { "\n" } else { "" };

    let mut out = String::new();
    out.push_str("<h1>");
    out.push_str(&encode_text(title));
    out.push_str("</h1>");
    out.push_str(newline);
    out.push_str("<div class=\"");
    out.push_str(&encode_double_quoted_attribute(&config.html.content_class));
    out.push_str("\">");
    out.push_str(newline);
    out.push_str(&blocks_to_html(&blocks, &config.html));
    out.push_str("</div>");
    out.push_str(newline);
    out
}

fn emit_block(block: &Block, config: &HtmlConfig, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            spans_to_html(content, out);
            out.push_str(&format!("</h{level}>"));
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            spans_to_html(content, out);
            out.push_str("</p>");
        }
        Block::UnorderedList { items } => list_to_html("ul", items, config, out),
        Block::OrderedList { items } => list_to_html("ol", items, config, out),
    }
    if config.pretty {
        out.push('\n');
    }
}

fn list_to_html(tag: &str, items: &[Vec<Span>], config: &HtmlConfig, out: &mut String) {
    out.push_str(&format!("<{tag}>"));
    if config.pretty {
        out.push('\n');
    }
    for item in items {
        if config.pretty {
            out.push_str("  ");
        }
        out.push_str("<li>");
        spans_to_html(item, out);
        out.push_str("</li>");
        if config.pretty {
            out.push('\n');
        }
    }
    out.push_str(&format!("</{tag}>"));
}

fn spans_to_html(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&encode_text(text)),
            Span::Bold(inner) => {
                out.push_str("<strong>");
                spans_to_html(inner, out);
                out.push_str("</strong>");
            }
            Span::Italic(text) => {
                out.push_str("<em>");
                out.push_str(&encode_text(text));
                out.push_str("</em>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn html(input: &str) -> String {
        blocks_to_html(&parse(input), &HtmlConfig::default())
    }

    fn pretty_html(input: &str) -> String {
        let config = HtmlConfig {
            pretty: true,
            ..HtmlConfig::default()
        };
        blocks_to_html(&parse(input), &config)
    }

    #[test]
    fn headings() {
        assert_eq!(html("# Heading 1"), "<h2>Heading 1</h2>");
        assert_eq!(html("## Heading 2"), "<h3>Heading 2</h3>");
        assert_eq!(html("### Heading 3"), "<h4>Heading 3</h4>");
    }

    #[test]
    fn paragraph() {
        assert_eq!(html("This is a paragraph\n\n"), "<p>This is a paragraph</p>");
    }

    #[test]
    fn text_decoration() {
        assert_eq!(html("**bold**"), "<p><strong>bold</strong></p>");
        assert_eq!(html("*italic*"), "<p><em>italic</em></p>");
        assert_eq!(
            html("**bold *and italic* text**"),
            "<p><strong>bold <em>and italic</em> text</strong></p>"
        );
    }

    #[test]
    fn lists() {
        assert_eq!(html("-Item 1\n-Item 2\n"), "<ul><li>Item 1</li><li>Item 2</li></ul>");
        assert_eq!(html("+Item 1\n+Item 2\n"), "<ol><li>Item 1</li><li>Item 2</li></ol>");
    }

    #[test]
    fn complex_document() {
        let input = "# Title
This is a **bold** and *italic* text.

## Subtitle
-List item 1
-List item 2

+Numbered item 1
+Numbered item 2
";
        assert_eq!(
            html(input),
            "<h2>Title</h2><p>This is a <strong>bold</strong> and <em>italic</em> text.</p><h3>Subtitle</h3><ul><li>List item 1</li><li>List item 2</li></ul><ol><li>Numbered item 1</li><li>Numbered item 2</li></ol>"
        );
    }

    #[test]
    fn pretty_output() {
        assert_eq!(
            pretty_html("# Title\n-a\n-b"),
            "<h2>Title</h2>\n<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn escapes_text() {
        assert_eq!(html("<script> & *<i>*"), "<p>&lt;script&gt; &amp; <em>&lt;i&gt;</em></p>");
    }

    #[test]
    fn article_page() {
        let config = Config::default();
        assert_eq!(
            article_to_html("Notes & <Ideas>", "# Intro\nHello", &config),
            "<h1>Notes &amp; &lt;Ideas&gt;</h1><div class=\"wiki-content\"><h2>Intro</h2><p>Hello</p></div>"
        );
    }

    #[test]
    fn article_page_without_offset() {
        let mut config = Config::default();
        config.parser.heading_offset = 0;
        assert_eq!(
            article_to_html("T", "# Intro", &config),
            "<h1>T</h1><div class=\"wiki-content\"><h1>Intro</h1></div>"
        );
    }
}
