//! Recovering raw prompt text from formatted text
//!
//! Extraction is the left inverse of [`crate::format`] over strings the
//! formatter could have produced. Anything else is reported as
//! [`Extraction::Unrecognized`] and carries the original input, which
//! callers treat as text that was never wrapped in the first place.

use crate::format::Format;
use crate::formatter::{CSV_PREFIX, MARKDOWN_HEADER, YAML_LINE_BREAK, YAML_PREFIX};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// Why an extraction could not invert a wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnrecognizedReason {
    /// The text does not have the wrapper shape of its declared format
    MalformedWrapper,
    /// The text is not parseable as its declared format (JSON only)
    ParseFailure,
}

impl fmt::Display for UnrecognizedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnrecognizedReason::MalformedWrapper => write!(f, "malformed wrapper"),
            UnrecognizedReason::ParseFailure => write!(f, "parse failure"),
        }
    }
}

/// Outcome of inverting a format wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The wrapper was recognized and removed
    Recovered(String),
    /// The wrapper was not recognized; `original` is the untouched input
    Unrecognized {
        /// The input exactly as given
        original: String,
        /// What went wrong
        reason: UnrecognizedReason,
    },
}

impl Extraction {
    /// True when the wrapper was recognized
    pub fn is_recovered(&self) -> bool {
        matches!(self, Extraction::Recovered(_))
    }

    /// Borrow the resulting text
    pub fn text(&self) -> &str {
        match self {
            Extraction::Recovered(raw) => raw,
            Extraction::Unrecognized { original, .. } => original,
        }
    }

    /// Collapse into text, treating unrecognized input as already raw
    pub fn into_text(self) -> String {
        match self {
            Extraction::Recovered(raw) => raw,
            Extraction::Unrecognized { original, .. } => original,
        }
    }

    fn unrecognized(original: &str, reason: UnrecognizedReason) -> Self {
        Extraction::Unrecognized {
            original: original.to_string(),
            reason,
        }
    }
}

static XML_CONTENT_REGEX: OnceLock<Regex> = OnceLock::new();
static YAML_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
static CSV_ROW_REGEX: OnceLock<Regex> = OnceLock::new();

/// Narrowest `<content>...</content>` span, across newlines
fn xml_content_regex() -> &'static Regex {
    XML_CONTENT_REGEX.get_or_init(|| {
        Regex::new(r"(?s)<content>(.*?)</content>").expect("Invalid XML content regex")
    })
}

fn yaml_block_regex() -> &'static Regex {
    YAML_BLOCK_REGEX.get_or_init(|| {
        Regex::new(&format!("(?s){}(.*)", regex::escape(YAML_PREFIX)))
            .expect("Invalid YAML block regex")
    })
}

/// Header row followed by one quoted value running to the last quote
fn csv_row_regex() -> &'static Regex {
    CSV_ROW_REGEX.get_or_init(|| {
        Regex::new(&format!("(?s){}(.*)\"", regex::escape(CSV_PREFIX)))
            .expect("Invalid CSV row regex")
    })
}

/// Recover raw text from `formatted`, reporting whether the wrapper was found
///
/// Never fails: unrecognized input comes back inside
/// [`Extraction::Unrecognized`].
pub fn try_extract(formatted: &str, source: Format) -> Extraction {
    if formatted.is_empty() {
        return Extraction::Recovered(String::new());
    }

    let extraction = match source {
        Format::Json => extract_json(formatted),
        Format::Markdown => extract_markdown(formatted),
        Format::Xml => extract_xml(formatted),
        Format::Yaml => extract_yaml(formatted),
        Format::Csv => extract_csv(formatted),
    };

    if let Extraction::Unrecognized { reason, .. } = &extraction {
        tracing::debug!(
            format = %source,
            reason = %reason,
            "Wrapper not recognized, treating text as raw"
        );
    }

    extraction
}

/// Recover raw text from `formatted`, falling back to the input unchanged
///
/// ```
/// use promptdeck_prompts::{extract, Format};
///
/// assert_eq!(extract("# Prompt\n\nhello", Format::Markdown), "hello");
/// assert_eq!(extract("plain text", Format::Json), "plain text");
/// ```
pub fn extract(formatted: &str, source: Format) -> String {
    try_extract(formatted, source).into_text()
}

fn extract_json(formatted: &str) -> Extraction {
    let parsed: Value = match serde_json::from_str(formatted) {
        Ok(value) => value,
        Err(_) => return Extraction::unrecognized(formatted, UnrecognizedReason::ParseFailure),
    };

    match parsed.get("prompt").and_then(Value::as_str) {
        Some(prompt) => Extraction::Recovered(prompt.to_string()),
        None => Extraction::unrecognized(formatted, UnrecognizedReason::MalformedWrapper),
    }
}

fn extract_markdown(formatted: &str) -> Extraction {
    match formatted.strip_prefix(MARKDOWN_HEADER) {
        Some(raw) => Extraction::Recovered(raw.to_string()),
        None => Extraction::unrecognized(formatted, UnrecognizedReason::MalformedWrapper),
    }
}

fn extract_xml(formatted: &str) -> Extraction {
    match xml_content_regex().captures(formatted).and_then(|c| c.get(1)) {
        Some(content) => Extraction::Recovered(content.as_str().to_string()),
        None => Extraction::unrecognized(formatted, UnrecognizedReason::MalformedWrapper),
    }
}

fn extract_yaml(formatted: &str) -> Extraction {
    match yaml_block_regex().captures(formatted).and_then(|c| c.get(1)) {
        Some(block) => Extraction::Recovered(block.as_str().replace(YAML_LINE_BREAK, "\n")),
        None => Extraction::unrecognized(formatted, UnrecognizedReason::MalformedWrapper),
    }
}

fn extract_csv(formatted: &str) -> Extraction {
    match csv_row_regex().captures(formatted).and_then(|c| c.get(1)) {
        Some(body) => Extraction::Recovered(body.as_str().replace("\"\"", "\"")),
        None => Extraction::unrecognized(formatted, UnrecognizedReason::MalformedWrapper),
    }
}
