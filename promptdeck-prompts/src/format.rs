//! Structured text formats a prompt slot can be wrapped in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five wrapper styles a slot's text can be held in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `{ "prompt": ... }` pretty-printed with two-space indentation
    #[default]
    Json,
    /// `# Prompt` header followed by a blank line
    Markdown,
    /// `<prompt>` / `<content>` element pair
    Xml,
    /// `prompt: |` block literal
    Yaml,
    /// Single `"prompt"` column with one quoted row
    Csv,
}

impl Format {
    /// All formats in selector order
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Markdown,
        Format::Xml,
        Format::Yaml,
        Format::Csv,
    ];

    /// Lowercase name used in configuration, the CLI, and saved drafts
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Markdown => "markdown",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
            Format::Csv => "csv",
        }
    }

    /// Syntax highlighting class applied to the formatted preview
    pub fn highlight_class(&self) -> &'static str {
        match self {
            Format::Json => "language-json",
            Format::Markdown => "language-markdown",
            Format::Xml => "language-xml",
            Format::Yaml => "language-yaml",
            Format::Csv => "language-csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown format '{0}': expected one of json, markdown, xml, yaml, csv")]
pub struct ParseFormatError(pub String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "markdown" | "md" => Ok(Format::Markdown),
            "xml" => Ok(Format::Xml),
            "yaml" | "yml" => Ok(Format::Yaml),
            "csv" => Ok(Format::Csv),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("Markdown".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!(" yml ".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("CSV".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("xml".parse::<Format>().unwrap(), Format::Xml);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "toml".parse::<Format>().unwrap_err();
        assert_eq!(err, ParseFormatError("toml".to_string()));
        assert!(err.to_string().contains("Unknown format 'toml'"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_highlight_classes() {
        assert_eq!(Format::Json.highlight_class(), "language-json");
        assert_eq!(Format::Csv.highlight_class(), "language-csv");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Format::Yaml).unwrap(), "\"yaml\"");
        let parsed: Format = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(parsed, Format::Markdown);
    }

    #[test]
    fn test_default_is_json() {
        assert_eq!(Format::default(), Format::Json);
    }
}
