//! PromptDeck command-line interface.
//!
//! Thin commands over [`promptdeck_prompts`]: wrap raw prompt text in a
//! format, recover it again, convert between formats, and list prompt cards.
//!
//! ```
//! use promptdeck::text::render_transcode;
//! use promptdeck_prompts::Format;
//!
//! let yaml = render_transcode("# Prompt\n\nline1\nline2", Format::Markdown, Format::Yaml);
//! assert_eq!(yaml, "prompt: |\n  line1\n  line2");
//! ```

pub mod cli;
pub mod config;
pub mod formats;
pub mod input;
pub mod library;
pub mod text;

pub use cli::{Cli, Commands};
