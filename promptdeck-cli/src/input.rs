//! Reading command input from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use promptdeck_common::{ErrorContext, Result};

/// Read the whole input, from `file` when given and stdin otherwise.
///
/// One trailing line break is dropped, since shells and editors add it and
/// it is not part of the prompt.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    Ok(strip_trailing_newline(text))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_single_trailing_newline() {
        assert_eq!(strip_trailing_newline("hello\n".to_string()), "hello");
        assert_eq!(strip_trailing_newline("hello\r\n".to_string()), "hello");
        assert_eq!(strip_trailing_newline("hello\n\n".to_string()), "hello\n");
        assert_eq!(strip_trailing_newline("hello".to_string()), "hello");
        assert_eq!(strip_trailing_newline(String::new()), "");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        fs::write(&path, "line1\nline2\n").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "line1\nline2");
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_input(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
