//! TOML configuration file support.
//!
//! Settings that would otherwise need repeating on every invocation can be
//! kept in a config file:
//!
//! ```toml
//! # bbconvert.toml
//! [vocabulary]
//! tags = ["b", "i", "u", "color", "url"]
//! extra = ["spoiler"]
//!
//! [output]
//! line_ending = "crlf"
//!
//! [input]
//! directory = "documents"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use bbconvert::LineEnding;

/// Root configuration structure for bbconvert.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tag vocabulary overrides.
    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,

    /// Input lookup.
    #[serde(default)]
    pub input: InputConfig,
}

/// Which element names are rendered as BBCode tags.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyConfig {
    /// Replaces the built-in tag list when present.
    pub tags: Option<Vec<String>>,

    /// Added on top of the active tag list.
    #[serde(default)]
    pub extra: Vec<String>,
}

/// Output formatting settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// "lf" or "crlf".
    pub line_ending: Option<LineEnding>,
}

/// Input lookup settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Directory searched for input documents.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [vocabulary]
            tags = ["b", "i"]
            extra = ["spoiler"]

            [output]
            line_ending = "crlf"

            [input]
            directory = "docs"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(
            config.vocabulary.tags,
            Some(vec!["b".to_string(), "i".to_string()])
        );
        assert_eq!(config.vocabulary.extra, vec!["spoiler".to_string()]);
        assert_eq!(config.output.line_ending, Some(LineEnding::CrLf));
        assert_eq!(config.input.directory, Some(PathBuf::from("docs")));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [vocabulary]
            extra = ["spoiler", "code"]
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.vocabulary.tags, None);
        assert_eq!(config.vocabulary.extra.len(), 2);
        assert_eq!(config.output.line_ending, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(config.vocabulary.tags.is_none());
        assert!(config.vocabulary.extra.is_empty());
    }

    #[test]
    fn test_rejects_unknown_line_ending() {
        let toml = r#"
            [output]
            line_ending = "cr"
        "#;
        assert!(Config::from_str(toml).is_err());
    }

    #[test]
    fn test_vocabulary_from_config() {
        let config = Config::from_str(
            r#"
            [vocabulary]
            tags = ["b"]
            extra = ["spoiler"]
        "#,
        )
        .unwrap();

        let vocabulary = super::super::build_vocabulary(&config);
        assert!(vocabulary.contains("b"));
        assert!(vocabulary.contains("spoiler"));
        assert!(!vocabulary.contains("i"));
    }
}
