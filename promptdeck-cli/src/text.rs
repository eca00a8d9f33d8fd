//! The format, extract and transcode commands.
//!
//! Each command has a pure `render_*` half that the tests call directly and
//! a `run_*` half that reads input and prints.

use std::path::Path;

use promptdeck_common::{PromptDeckError, Result};
use promptdeck_prompts::{extract, format, try_extract, Extraction, Format};

use crate::input::read_input;

/// Wrap raw text in `to`.
pub fn render_format(raw: &str, to: Format) -> String {
    format(raw, to)
}

/// Recover raw text wrapped in `from`.
///
/// With `strict`, input whose wrapper is not recognized is an error instead
/// of being echoed back.
pub fn render_extract(formatted: &str, from: Format, strict: bool) -> Result<String> {
    match try_extract(formatted, from) {
        Extraction::Recovered(raw) => Ok(raw),
        Extraction::Unrecognized { reason, .. } if strict => Err(PromptDeckError::other(
            format!("Input is not valid {from} prompt text ({reason})"),
        )),
        Extraction::Unrecognized { original, .. } => Ok(original),
    }
}

/// Convert text wrapped in `from` to `to`.
pub fn render_transcode(formatted: &str, from: Format, to: Format) -> String {
    if from == to {
        return formatted.to_string();
    }
    format(&extract(formatted, from), to)
}

/// Run `promptdeck format`.
pub fn run_format(to: Format, file: Option<&Path>) -> Result<()> {
    let raw = read_input(file)?;
    tracing::debug!(%to, bytes = raw.len(), "Formatting input");
    println!("{}", render_format(&raw, to));
    Ok(())
}

/// Run `promptdeck extract`.
pub fn run_extract(from: Format, file: Option<&Path>, strict: bool) -> Result<()> {
    let formatted = read_input(file)?;
    tracing::debug!(%from, strict, bytes = formatted.len(), "Extracting input");
    println!("{}", render_extract(&formatted, from, strict)?);
    Ok(())
}

/// Run `promptdeck transcode`.
pub fn run_transcode(from: Format, to: Format, file: Option<&Path>) -> Result<()> {
    let formatted = read_input(file)?;
    tracing::debug!(%from, %to, bytes = formatted.len(), "Transcoding input");
    println!("{}", render_transcode(&formatted, from, to));
    Ok(())
}
