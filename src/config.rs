use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::parser::{MAX_HEADING_OFFSET, ParseOptions};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub html: HtmlConfig,
    pub typst: TypstConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub heading_offset: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            heading_offset: ParseOptions::default().heading_offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub pretty: bool,
    pub content_class: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            content_class: "wiki-content".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypstConfig {
    pub keep_with_next: bool,
    pub unbreakable_list_max: usize,
}

impl Default for TypstConfig {
    fn default() -> Self {
        Self {
            keep_with_next: true,
            unbreakable_list_max: 5,
        }
    }
}

impl Config {
    /// The bundled `default_config.toml`, checked by the build script.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Keys missing from the file keep their
    /// default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the compiled default.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            log::debug!("Using config from: {}", path.display());
            Self::load(path)
        } else {
            log::debug!("Using default config");
            Ok(Self::compiled_default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.heading_offset > MAX_HEADING_OFFSET {
            return Err(ConfigError::HeadingOffset(self.parser.heading_offset));
        }
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            heading_offset: self.parser.heading_offset,
        }
    }
}
