//! Validation types and traits for prompt drafts
//!
//! This module provides the validation framework used to check a draft
//! before it is saved. Issues are keyed by the form field they concern.

use serde::{Deserialize, Serialize};

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Error - must be fixed before the draft can be saved
    Error,
    /// Warning - should be addressed but doesn't prevent saving
    Warning,
    /// Info - informational message about potential improvements
    Info,
}

impl ValidationLevel {
    /// Get the string representation of the validation level
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationLevel::Error => "error",
            ValidationLevel::Warning => "warning",
            ValidationLevel::Info => "info",
        }
    }

    /// Check if this is an error level
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationLevel::Error)
    }

    /// Check if this is a warning level
    pub fn is_warning(&self) -> bool {
        matches!(self, ValidationLevel::Warning)
    }

    /// Check if this is an info level
    pub fn is_info(&self) -> bool {
        matches!(self, ValidationLevel::Info)
    }
}

/// Represents a validation issue found in a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity level of the issue
    pub level: ValidationLevel,
    /// Form field the issue concerns
    pub field: String,
    /// Description of the validation issue
    pub message: String,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(level: ValidationLevel, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create a new error validation issue
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationLevel::Error, field, message)
    }

    /// Create a new warning validation issue
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationLevel::Warning, field, message)
    }

    /// Create a new info validation issue
    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationLevel::Info, field, message)
    }

    /// Set a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Format the validation issue as a human-readable string
    pub fn format(&self) -> String {
        let level = self.level.as_str().to_uppercase();
        let mut result = format!("{}: {} - {}", level, self.field, self.message);

        if let Some(suggestion) = &self.suggestion {
            result = format!("{}\n  Suggestion: {}", result, suggestion);
        }

        result
    }
}

/// Trait for types that can be validated
pub trait Validatable {
    /// Validate the object and return any issues found
    fn validate(&self) -> Vec<ValidationIssue>;

    /// Collect the issues into a [`ValidationResult`]
    fn validation_result(&self) -> ValidationResult {
        ValidationResult::new(self.validate())
    }

    /// Check if the object is valid (has no error-level issues)
    fn is_valid(&self) -> bool {
        self.validate().iter().all(|issue| !issue.level.is_error())
    }

    /// Get only error-level validation issues
    fn get_errors(&self) -> Vec<ValidationIssue> {
        self.validate()
            .into_iter()
            .filter(|issue| issue.level.is_error())
            .collect()
    }

    /// Get only warning-level validation issues
    fn get_warnings(&self) -> Vec<ValidationIssue> {
        self.validate()
            .into_iter()
            .filter(|issue| issue.level.is_warning())
            .collect()
    }
}

/// Validation result that can contain multiple issues
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// All validation issues found
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new validation result
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Create an empty validation result (no issues)
    pub fn ok() -> Self {
        Self::default()
    }

    /// Check if the validation was successful (no errors)
    pub fn is_ok(&self) -> bool {
        self.issues.iter().all(|issue| !issue.level.is_error())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.level.is_error())
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|issue| issue.level.is_warning())
    }

    /// Get all error issues
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|issue| issue.level.is_error()).collect()
    }

    /// Get all warning issues
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|issue| issue.level.is_warning()).collect()
    }

    /// Get total number of issues
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Add an issue to the result
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }
}
