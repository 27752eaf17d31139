//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the engine and its collaborators can report.
//!
//! # Fatal vs. non-fatal
//!
//! - [`UnsupportedLocale`](ChatstatsError::UnsupportedLocale) and
//!   [`MalformedInput`](ChatstatsError::MalformedInput) abort a run before any
//!   statistics are produced.
//! - An input with zero messages is **not** an error: it yields empty tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No locale profile is registered under the requested identifier.
    #[error("Unsupported locale '{code}'. Supported locales: {supported}")]
    UnsupportedLocale {
        /// The identifier that was requested
        code: String,
        /// Comma-separated list of registered identifiers
        supported: String,
    },

    /// The first non-blank line of the input is not a header line.
    ///
    /// There is no entry a continuation line could be attached to, which
    /// usually means the wrong locale was selected.
    #[error("Malformed input at line {line}{}: expected a message header, found {content:?}", path.as_ref().map(|p| format!(" of {}", p.display())).unwrap_or_default())]
    MalformedInput {
        /// 1-based line number of the offending line
        line: usize,
        /// The offending line
        content: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A locale profile pattern failed to compile.
    #[error("Invalid pattern in locale '{locale}': {message}")]
    Pattern {
        /// The locale the pattern belongs to
        locale: &'static str,
        /// Compiler message
        message: String,
    },

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an unsupported locale error listing the registered profiles.
    pub fn unsupported_locale(code: impl Into<String>, supported: &[&str]) -> Self {
        ChatstatsError::UnsupportedLocale {
            code: code.into(),
            supported: supported.join(", "),
        }
    }

    /// Creates a malformed input error for the given line.
    pub fn malformed_input(line: usize, content: impl Into<String>) -> Self {
        ChatstatsError::MalformedInput {
            line,
            content: content.into(),
            path: None,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Attaches a file path to a [`MalformedInput`](Self::MalformedInput) error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatstatsError::MalformedInput { line, content, .. } => {
                ChatstatsError::MalformedInput {
                    line,
                    content,
                    path: Some(file.into()),
                }
            }
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an unsupported locale error.
    pub fn is_unsupported_locale(&self) -> bool {
        matches!(self, ChatstatsError::UnsupportedLocale { .. })
    }

    /// Returns `true` if this is a malformed input error.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ChatstatsError::MalformedInput { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
