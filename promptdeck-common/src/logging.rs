//! Logging utilities for PromptDeck

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing types in logs as YAML
///
/// Use this in tracing statements to format complex values as YAML with a
/// newline before the content:
///
/// ```ignore
/// use promptdeck_common::Pretty;
/// use tracing::debug;
///
/// debug!("Saved draft: {}", Pretty(&draft));
/// ```
///
/// Debug is used as a fallback if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct Card {
        title: String,
        rating: u8,
    }

    #[test]
    fn test_pretty_renders_yaml_with_leading_newline() {
        let card = Card {
            title: "Code Review Assistant".to_string(),
            rating: 5,
        };
        let rendered = format!("{}", Pretty(&card));
        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("title: Code Review Assistant"));
        assert!(rendered.contains("rating: 5"));
    }

    #[test]
    fn test_pretty_debug_matches_display() {
        let value = vec!["chatgpt", "work"];
        assert_eq!(format!("{:?}", Pretty(&value)), format!("{}", Pretty(&value)));
    }
}
