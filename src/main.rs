use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use wikimark::{Config, Error};

const LOCAL_CONFIG: &str = "wikimark.toml";

#[derive(Parser)]
#[command(name = "wikimark")]
#[command(about = "Render wiki markup articles")]
struct Cli {
    /// Input article body (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (defaults to stdout; PDF defaults to input name with .pdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Article title for page, typst and pdf output (defaults to the input file stem)
    #[arg(short, long)]
    title: Option<String>,

    /// Config file (defaults to ./wikimark.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment of the body
    Html,
    /// HTML article page with the title as <h1>
    Page,
    /// Typst markup
    Typst,
    /// PDF compiled through Typst
    Pdf,
    /// Document tree as JSON
    Tree,
    /// Headings, one per line
    Outline,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => {
            log::debug!("Using config from: {}", path.display());
            Config::load(path)?
        }
        None => Config::load_or_default(Path::new(LOCAL_CONFIG))?,
    };

    let input = cli.input.as_deref().filter(|path| *path != Path::new("-"));
    let body = read_input(input)?;
    let title = cli.title.clone().or_else(|| {
        input
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
    });

    let rendered = match cli.format {
        Format::Html => wikimark::article_body_to_html(&body, &config),
        Format::Page => {
            wikimark::html::article_to_html(title.as_deref().unwrap_or_default(), &body, &config)
        }
        Format::Typst => wikimark::article_to_typst(title.as_deref(), &body, &config),
        Format::Tree => {
            let blocks = wikimark::parse_with_options(&body, &config.parse_options());
            let mut json = serde_json::to_string_pretty(&blocks)?;
            json.push('\n');
            json
        }
        Format::Outline => {
            let blocks = wikimark::parse_with_options(&body, &config.parse_options());
            wikimark::outline(&blocks)
                .iter()
                .map(|entry| {
                    let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
                    format!("{indent}{}\n", entry.text)
                })
                .collect()
        }
        Format::Pdf => {
            let output = cli
                .output
                .or_else(|| input.map(|path| path.with_extension("pdf")))
                .unwrap_or_else(|| PathBuf::from("article.pdf"));
            let pdf_bytes = wikimark::article_to_pdf(title.as_deref(), &body, &config)?;
            write_output(&output, &pdf_bytes)?;
            println!("Created {}", output.display());
            return Ok(());
        }
    };

    match &cli.output {
        Some(path) => write_output(path, rendered.as_bytes()),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, Error> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(body)
        }
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    log::debug!("Writing {} bytes to {}", bytes.len(), path.display());
    fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
