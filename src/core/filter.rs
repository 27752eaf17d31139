//! Filter messages by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections before aggregation.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Messages from one author |
//!
//! # Examples
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatstats::Result<()> {
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new("Alice", "Old", day(1)),
//!     Message::new("Bob", "New", day(15)),
//!     Message::new("Alice", "Newer", day(20)),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-10")?
//!     .with_author("alice");
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "Newer");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Dates are compared against the export's local timestamps
//! - Author matching is case-insensitive for ASCII characters and happens
//!   after alias mapping
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::ChatstatsError;

/// Configuration for filtering messages by date and author.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only messages at or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only messages at or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this author (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// The whole day is included.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        let date = parse_date(date_str)?;
        // Last representable instant of the day, leap second included.
        let end = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_999_999_999)
            .unwrap_or(NaiveTime::MIN);
        self.before = Some(date.and_time(end));
        Ok(self)
    }

    /// Sets the author filter.
    ///
    /// Matching is case-insensitive for ASCII characters.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.from = Some(author.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the author filter is active.
    pub fn has_author_filter(&self) -> bool {
        self.from.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref from) = self.from {
            if !msg.author.eq_ignore_ascii_case(from) {
                return false;
            }
        }
        if self.after.is_some_and(|after| msg.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| msg.timestamp > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatsError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatsError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns the messages that match all active filters, in their original
/// order. If no filters are active, returns the input unchanged.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    let before = messages.len();
    let kept: Vec<Message> = messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect();
    tracing::debug!(before, after = kept.len(), "applied message filters");
    kept
}
