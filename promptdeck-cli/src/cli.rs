//! CLI definition for the PromptDeck command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use promptdeck_prompts::Format;

/// PromptDeck - prompt formatting toolkit
///
/// Wraps raw prompt text in JSON, Markdown, XML, YAML or CSV, recovers raw
/// text from those wrappers, and converts between them.
#[derive(Parser, Debug)]
#[command(name = "promptdeck")]
#[command(version)]
#[command(about = "PromptDeck - format, extract and transcode prompt text")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wrap raw text in a format
    Format {
        /// Target format (json, markdown, xml, yaml, csv)
        #[arg(short, long)]
        to: Format,
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Recover raw text from formatted text
    Extract {
        /// Format the input is wrapped in
        #[arg(short, long)]
        from: Format,
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Fail instead of echoing input whose wrapper is not recognized
        #[arg(long)]
        strict: bool,
    },
    /// Convert formatted text from one format to another
    Transcode {
        /// Format the input is wrapped in
        #[arg(short, long)]
        from: Format,
        /// Target format
        #[arg(short, long)]
        to: Format,
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// List the supported formats
    Formats,
    /// List prompt cards, optionally filtered
    Library {
        /// JSON file holding an array of cards; the sample cards are used when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Case-insensitive text to find in title or description
        #[arg(short, long)]
        search: Option<String>,
        /// Only cards in this category (ALL for any)
        #[arg(short, long)]
        category: Option<String>,
        /// Only cards carrying this tag (ALL for any)
        #[arg(short, long)]
        tag: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config,
}
