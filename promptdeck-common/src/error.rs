//! Error types for PromptDeck
//!
//! This module provides the structured error enum shared by every PromptDeck
//! crate, together with a severity classification used to pick log levels and
//! exit codes. Domain-specific errors (configuration, format names) live in
//! their own crates and convert into [`PromptDeckError`] at the boundary.

use std::io;
use thiserror::Error as ThisError;

/// Severity levels for error classification
///
/// - **Warning**: Potential issue but the operation can proceed.
/// - **Error**: The operation failed but the application can continue.
/// - **Critical**: The application cannot continue.
///
/// # Examples
///
/// ```rust
/// use promptdeck_common::{ErrorSeverity, PromptDeckError, Severity};
///
/// let error = PromptDeckError::validation("Please fill in title and description");
/// assert_eq!(error.severity(), ErrorSeverity::Warning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,
    /// Operation failed but the application can continue
    Error,
    /// Application cannot continue
    Critical,
}

/// Trait for error types that have severity levels
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}

/// Result type alias for PromptDeck operations
pub type Result<T> = std::result::Result<T, PromptDeckError>;

/// Common error types for PromptDeck operations
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum PromptDeckError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// YAML serialization/deserialization error
    #[error("Serialization error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A draft or card failed validation before it could be saved
    #[error("Validation failed: {message}")]
    Validation {
        /// Human readable reason, suitable for showing to the user
        message: String,
    },

    /// No prompt card with the given id exists in the library
    #[error("Prompt not found: {0}")]
    PromptNotFound(u64),

    /// A rating outside of `0..=max` was supplied
    #[error("Invalid rating {rating}: must be between 0 and {max}")]
    InvalidRating {
        /// The rejected rating
        rating: u8,
        /// Highest accepted rating
        max: u8,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration failure
        message: String,
    },

    /// Generic error with context
    #[error("{message}")]
    Context {
        /// The error message providing context
        message: String,
        #[source]
        /// The underlying error that caused this error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Other error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

impl PromptDeckError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, PromptDeckError::Validation { .. })
    }
}

impl Severity for PromptDeckError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PromptDeckError::Config { .. } => ErrorSeverity::Critical,

            PromptDeckError::Io(_) => ErrorSeverity::Error,
            PromptDeckError::Yaml(_) => ErrorSeverity::Error,
            PromptDeckError::Json(_) => ErrorSeverity::Error,
            PromptDeckError::PromptNotFound(_) => ErrorSeverity::Error,
            PromptDeckError::Context { .. } => ErrorSeverity::Error,
            PromptDeckError::Other { .. } => ErrorSeverity::Error,

            // The user can fix these and retry without losing anything
            PromptDeckError::Validation { .. } => ErrorSeverity::Warning,
            PromptDeckError::InvalidRating { .. } => ErrorSeverity::Warning,
        }
    }
}

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context<S: Into<String>>(self, msg: S) -> Result<T>;

    /// Add context with a closure that's only called on error
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<S: Into<String>>(self, msg: S) -> Result<T> {
        self.map_err(|e| PromptDeckError::Context {
            message: msg.into(),
            source: Box::new(e),
        })
    }

    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| PromptDeckError::Context {
            message: f().into(),
            source: Box::new(e),
        })
    }
}
