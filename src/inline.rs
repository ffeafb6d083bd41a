use crate::block::Span;

/// Tokenize the text of a single block into inline spans.
///
/// Bold bodies are tokenized again with bold disabled and italic enabled, so
/// italic may nest inside bold but bold never nests. Italic bodies are kept
/// verbatim.
pub fn parse_inline(text: &str) -> Vec<Span> {
    tokenize(text, true)
}

/// Scan `text` left to right, splitting it into text, bold and italic spans.
///
/// `allow_bold` is false inside a bold body, which keeps nesting to a single
/// level. Unterminated markers stay in the text as literal characters.
fn tokenize(text: &str, allow_bold: bool) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if allow_bold && rest.starts_with("**") {
            match text[i + 2..].find("**") {
                Some(offset) => {
                    let end = i + 2 + offset;
                    flush(&mut buffer, &mut spans);
                    spans.push(Span::Bold(tokenize(&text[i + 2..end], false)));
                    i = end + 2;
                }
                None => {
                    buffer.push_str("**");
                    i += 2;
                }
            }
            continue;
        }

        if rest.starts_with('*') {
            match text[i + 1..].find('*') {
                Some(offset) => {
                    let end = i + 1 + offset;
                    flush(&mut buffer, &mut spans);
                    spans.push(Span::Italic(text[i + 1..end].to_string()));
                    i = end + 1;
                }
                None => {
                    buffer.push('*');
                    i += 1;
                }
            }
            continue;
        }

        // Copy whole chars so multi-byte text is never split
        let Some(ch) = rest.chars().next() else {
            break;
        };
        buffer.push(ch);
        i += ch.len_utf8();
    }

    flush(&mut buffer, &mut spans);
    spans
}

fn flush(buffer: &mut String, spans: &mut Vec<Span>) {
    if !buffer.is_empty() {
        spans.push(Span::Text(std::mem::take(buffer)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    fn italic(s: &str) -> Span {
        Span::Italic(s.to_string())
    }

    #[test]
    fn empty_input() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn plain_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn bold() {
        assert_eq!(parse_inline("**bold**"), vec![Span::Bold(vec![text("bold")])]);
    }

    #[test]
    fn italic_only() {
        assert_eq!(parse_inline("*italic*"), vec![italic("italic")]);
    }

    #[test]
    fn italic_inside_bold() {
        assert_eq!(
            parse_inline("**bold *and italic* text**"),
            vec![Span::Bold(vec![
                text("bold "),
                italic("and italic"),
                text(" text"),
            ])]
        );
    }

    #[test]
    fn text_around_markers() {
        assert_eq!(
            parse_inline("This is a **bold** and *italic* text."),
            vec![
                text("This is a "),
                Span::Bold(vec![text("bold")]),
                text(" and "),
                italic("italic"),
                text(" text."),
            ]
        );
    }

    #[test]
    fn unterminated_italic_is_literal() {
        assert_eq!(parse_inline("*unterminated"), vec![text("*unterminated")]);
    }

    #[test]
    fn unterminated_bold_is_literal() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        // Italic pairs still match after a literal "**"
        assert_eq!(parse_inline("**a *b*"), vec![text("**a "), italic("b")]);
    }

    #[test]
    fn italic_ends_at_first_star() {
        assert_eq!(parse_inline("*a **b*"), vec![italic("a "), italic("b")]);
    }

    #[test]
    fn italic_content_is_verbatim() {
        assert_eq!(parse_inline("*  a_b #c  *"), vec![italic("  a_b #c  ")]);
    }

    #[test]
    fn empty_emphasis() {
        assert_eq!(parse_inline("****"), vec![Span::Bold(vec![])]);
        assert_eq!(parse_inline("**"), vec![text("**")]);
    }

    #[test]
    fn triple_star_prefers_bold() {
        assert_eq!(parse_inline("***x***"), vec![Span::Bold(vec![text("*x")]), text("*")]);
    }

    #[test]
    fn bold_body_never_holds_bold() {
        let spans = parse_inline("**a *b* c** and **d**");
        assert_eq!(
            spans,
            vec![
                Span::Bold(vec![text("a "), italic("b"), text(" c")]),
                text(" and "),
                Span::Bold(vec![text("d")]),
            ]
        );
    }

    #[test]
    fn unterminated_italic_inside_bold() {
        assert_eq!(parse_inline("**a * b**"), vec![Span::Bold(vec![text("a * b")])]);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(
            parse_inline("日本語 *強調* テキスト"),
            vec![text("日本語 "), italic("強調"), text(" テキスト")]
        );
    }

    #[test]
    fn newlines_pass_through() {
        assert_eq!(parse_inline("a\nb"), vec![text("a\nb")]);
    }
}
