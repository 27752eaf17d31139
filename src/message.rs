//! Conversational message type.
//!
//! A [`Message`] is what survives the event filter: an entry that has an
//! author and is not a system notice. It is the input of every statistic in
//! [`stats`](crate::stats) and the record written by the output writers.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 2)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let msg = Message::new("Alice", "Hello, world!", ts);
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.body_len(), 13);
//! assert!(!msg.is_placeholder());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::locale::Placeholder;
use crate::parsing::LineSpan;

/// A chat message attributed to one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name exactly as exported (after alias mapping).
    pub author: String,

    /// Message text. Multi-line messages keep their `\n` separators.
    pub body: String,

    /// Locale-normalized send time.
    pub timestamp: NaiveDateTime,

    /// Source lines of the entry this message was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub lines: Option<LineSpan>,

    /// Set when the body is an app-generated stand-in for omitted content.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub placeholder: Option<Placeholder>,
}

impl Message {
    /// Creates a message without source position or placeholder tag.
    pub fn new(
        author: impl Into<String>,
        body: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            timestamp,
            lines: None,
            placeholder: None,
        }
    }

    /// Builder method to set the source line span.
    #[must_use]
    pub fn with_lines(mut self, lines: LineSpan) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Builder method to tag the body as a placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Body length in characters (not bytes).
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }

    /// Returns `true` if the body is a deleted/omitted-media placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new("Alice", "Hello", ts());
        assert_eq!(msg.author(), "Alice");
        assert_eq!(msg.body(), "Hello");
        assert_eq!(msg.timestamp(), ts());
        assert!(msg.lines.is_none());
        assert!(!msg.is_placeholder());
    }

    #[test]
    fn test_message_builder() {
        let msg = Message::new("Alice", "<Media omitted>", ts())
            .with_lines(LineSpan { first: 3, last: 4 })
            .with_placeholder(Placeholder::Media);
        assert_eq!(msg.lines, Some(LineSpan { first: 3, last: 4 }));
        assert!(msg.is_placeholder());
    }

    #[test]
    fn test_body_len_counts_chars() {
        assert_eq!(Message::new("A", "Привет", ts()).body_len(), 6);
        assert_eq!(Message::new("A", "a\nb", ts()).body_len(), 3);
        assert_eq!(Message::new("A", "", ts()).body_len(), 0);
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new("Alice", "Hello", ts());
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("Alice"));
        assert!(json.contains("2024-06-15T12:00:00"));
        assert!(!json.contains("placeholder"));
        assert!(!json.contains("lines"));
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"author":"Bob","body":"Hi","timestamp":"2024-06-15T12:00:00"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.author(), "Bob");
        assert_eq!(msg.timestamp(), ts());
        assert!(msg.placeholder.is_none());
    }
}
