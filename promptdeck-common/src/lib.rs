//! # PromptDeck Common
//!
//! Foundational types shared by the PromptDeck crates: the structured error
//! enum with its severity classification, an error-context extension trait,
//! and the [`Pretty`] wrapper used to render values as YAML in log lines.

pub mod error;
pub mod logging;

pub use error::{ErrorContext, ErrorSeverity, PromptDeckError, Result, Severity};
pub use logging::Pretty;
