//! Wrapping raw prompt text in a structured format
//!
//! [`format`] is total: every string maps to some output and nothing here
//! can fail. The wrapper literals are shared with the extractor, which must
//! stay an exact inverse of what is produced here.
//!
//! XML content is not entity-escaped. Raw text containing `</content>` will
//! therefore not survive an XML round trip; the extractor mirrors this.

use crate::format::Format;
use serde::Serialize;

pub(crate) const MARKDOWN_HEADER: &str = "# Prompt\n\n";
pub(crate) const XML_OPEN: &str = "<prompt>\n  <content>";
pub(crate) const XML_CLOSE: &str = "</content>\n</prompt>";
pub(crate) const YAML_PREFIX: &str = "prompt: |\n  ";
pub(crate) const YAML_LINE_BREAK: &str = "\n  ";
pub(crate) const CSV_PREFIX: &str = "\"prompt\"\n\"";

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    prompt: &'a str,
}

/// Wrap `raw` in the wrapper syntax of `target`
///
/// Empty input yields empty output for every format.
///
/// ```
/// use promptdeck_prompts::{format, Format};
///
/// assert_eq!(format("line1\nline2", Format::Yaml), "prompt: |\n  line1\n  line2");
/// assert_eq!(format("", Format::Xml), "");
/// ```
pub fn format(raw: &str, target: Format) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match target {
        Format::Json => format_json(raw),
        Format::Markdown => format!("{MARKDOWN_HEADER}{raw}"),
        Format::Xml => format!("{XML_OPEN}{raw}{XML_CLOSE}"),
        Format::Yaml => format!("{YAML_PREFIX}{}", raw.replace('\n', YAML_LINE_BREAK)),
        Format::Csv => format!("{CSV_PREFIX}{}\"", raw.replace('"', "\"\"")),
    }
}

fn format_json(raw: &str) -> String {
    // serde_json's pretty printer indents with two spaces
    serde_json::to_string_pretty(&JsonEnvelope { prompt: raw }).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize prompt as JSON, keeping raw text: {}", e);
        raw.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_wrapper() {
        for target in Format::ALL {
            assert_eq!(format("", target), "", "format {target} wrapped empty text");
        }
    }

    #[test]
    fn test_json() {
        assert_eq!(format("hello", Format::Json), "{\n  \"prompt\": \"hello\"\n}");
    }

    #[test]
    fn test_json_escapes_quotes_and_newlines() {
        assert_eq!(
            format("say \"hi\"\nbye", Format::Json),
            "{\n  \"prompt\": \"say \\\"hi\\\"\\nbye\"\n}"
        );
    }

    #[test]
    fn test_markdown() {
        assert_eq!(format("hello", Format::Markdown), "# Prompt\n\nhello");
    }

    #[test]
    fn test_xml_is_not_escaped() {
        assert_eq!(
            format("a < b & c", Format::Xml),
            "<prompt>\n  <content>a < b & c</content>\n</prompt>"
        );
    }

    #[test]
    fn test_yaml_reindents_every_line() {
        assert_eq!(
            format("line1\nline2", Format::Yaml),
            "prompt: |\n  line1\n  line2"
        );
        assert_eq!(
            format("a\n\nb", Format::Yaml),
            "prompt: |\n  a\n  \n  b"
        );
    }

    #[test]
    fn test_csv_doubles_quotes() {
        assert_eq!(
            format("He said \"hi\"", Format::Csv),
            "\"prompt\"\n\"He said \"\"hi\"\"\""
        );
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(format("  padded  ", Format::Markdown), "# Prompt\n\n  padded  ");
        assert_eq!(
            format(" x ", Format::Xml),
            "<prompt>\n  <content> x </content>\n</prompt>"
        );
    }
}
