//! Parser and renderers for the wiki's lightweight markup.
//!
//! An article body is scanned into [`Block`]s (headings, paragraphs, lists),
//! each carrying inline [`Span`]s (text, bold, italic). The tree is plain
//! data; the [`html`] and [`typst`] modules turn it into output formats.

mod block;
mod config;
mod error;
pub mod html;
mod inline;
mod outline;
mod parser;
pub mod typst;

pub use block::{Block, Document, Span};
pub use config::{Config, HtmlConfig, ParserConfig, TypstConfig};
pub use error::{ConfigError, Error};
pub use inline::parse_inline;
pub use outline::{OutlineEntry, excerpt, outline, plain_text};
pub use parser::{MAX_HEADING_OFFSET, ParseOptions, parse, parse_with_options};

use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_library::layout::PagedDocument;
use typst_pdf::PdfOptions;

/// Convert an article body to an HTML fragment.
pub fn article_body_to_html(body: &str, config: &Config) -> String {
    let blocks = parse_with_options(body, &config.parse_options());
    html::blocks_to_html(&blocks, &config.html)
}

/// Convert an article to Typst markup.
pub fn article_to_typst(title: Option<&str>, body: &str, config: &Config) -> String {
    let blocks = parse_with_options(body, &config.parse_options());
    typst::blocks_to_typst(&blocks, title, &config.typst)
}

/// Convert an article to PDF bytes.
pub fn article_to_pdf(title: Option<&str>, body: &str, config: &Config) -> Result<Vec<u8>, Error> {
    let typst_content = article_to_typst(title, body, config);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Pdf(format!("Typst compilation failed: {:?}", e)))?;

    typst_pdf::pdf(&doc, &PdfOptions::default())
        .map_err(|e| Error::Pdf(format!("PDF generation failed: {:?}", e)))
}
