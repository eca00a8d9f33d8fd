//! # PromptDeck Prompts
//!
//! Core logic of the PromptDeck prompt editor: the five presentation
//! formats, the formatter and extractor that wrap and unwrap prompt text,
//! the transcode step run when the user switches formats, and the editor
//! session that holds the three content slots.
//!
//! ## Features
//!
//! - **Formats**: JSON, Markdown, XML, YAML and CSV wrappers around raw text
//! - **Transcoding**: extract-then-format conversion, one slot at a time
//! - **Editor**: draft metadata, tag set, rating and validated save
//! - **Library**: card collection with search, category and tag filters
//! - **Configuration**: figment-backed defaults, files and environment
//!
//! ```
//! use promptdeck_prompts::{extract, format, Format};
//!
//! let wrapped = format("Summarize this", Format::Xml);
//! assert_eq!(wrapped, "<prompt>\n  <content>Summarize this</content>\n</prompt>");
//! assert_eq!(extract(&wrapped, Format::Xml), "Summarize this");
//! ```

#![warn(missing_docs)]

mod config;
mod editor;
mod extractor;
mod format;
mod formatter;
mod library;
mod prompt_filter;
mod session;
mod slots;
mod tags;
mod transcode;
mod validation;

pub use config::{
    load_configuration, ConfigError, ConfigLoader, ConfigResult, EditorConfig, CONFIG_DIR_NAME,
    CONFIG_FILE_STEM, ENV_PREFIX,
};
pub use editor::{DraftContent, PromptDraft, PromptEditor, MISSING_REQUIRED_FIELDS};
pub use extractor::{extract, try_extract, Extraction, UnrecognizedReason};
pub use format::{Format, ParseFormatError};
pub use formatter::format;
pub use library::{PromptCard, PromptLibrary};
pub use prompt_filter::{PromptFilter, ALL_OPTION};
pub use session::{AuthSession, MemoryTokenStore, TokenStore, AUTH_TOKEN_KEY};
pub use slots::{ContentSlot, SlotStore, SlotText};
pub use tags::{
    tag_color_class, tag_color_style, TagSet, TagStyle, TAG_BACKGROUND_COLOR, TAG_COLOR_CLASS,
    TAG_TEXT_COLOR,
};
pub use transcode::{switch_format, switch_slot_format, TranscodeOutcome};
pub use validation::{Validatable, ValidationIssue, ValidationLevel, ValidationResult};

pub use promptdeck_common::{PromptDeckError, Result};
