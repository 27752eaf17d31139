//! Entry reconstruction: folding classified lines into multi-line entries.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::line::{LineClass, RawLine, classify, split_lines};
use crate::error::ChatstatsError;
use crate::locale::LocaleProfile;

/// Preliminary kind assigned during reconstruction.
///
/// Entries with an author start out as messages, entries without one as
/// system events. The event filter refines this with phrase matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Conversational message
    Message,
    /// Membership/title/etc. notice
    SystemEvent,
}

/// Inclusive range of 1-based source line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpan {
    /// Header line number
    pub first: usize,
    /// Last continuation line number (equal to `first` for one-line entries)
    pub last: usize,
}

impl LineSpan {
    /// Number of source lines covered.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Always `false`: a span covers at least its header line.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A reconstructed entry: one header line plus its continuation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Header timestamp
    pub timestamp: NaiveDateTime,
    /// Author parsed from the header, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub author: Option<String>,
    /// Body lines joined with `\n`
    pub body: String,
    /// Preliminary kind
    pub kind: EntryKind,
    /// Source lines this entry was built from
    pub lines: LineSpan,
}

impl Entry {
    /// Text after the timestamp as it appeared in the export.
    ///
    /// For authored entries this re-joins author and body with `separator`.
    pub fn event_text(&self, separator: &str) -> Cow<'_, str> {
        match &self.author {
            Some(author) => Cow::Owned(format!("{author}{separator}{}", self.body)),
            None => Cow::Borrowed(&self.body),
        }
    }

    /// Number of source lines this entry covers.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// The single "entry under construction" slot.
struct OpenEntry {
    timestamp: NaiveDateTime,
    author: Option<String>,
    body: String,
    first: usize,
    last: usize,
}

impl OpenEntry {
    fn finish(self) -> Entry {
        let kind = if self.author.is_some() {
            EntryKind::Message
        } else {
            EntryKind::SystemEvent
        };
        Entry {
            timestamp: self.timestamp,
            author: self.author,
            body: self.body,
            kind,
            lines: LineSpan {
                first: self.first,
                last: self.last,
            },
        }
    }
}

/// Reconstructs entries from raw export text.
///
/// # Errors
///
/// Returns [`ChatstatsError::MalformedInput`] if the first non-blank line is
/// not a header. Input without any non-blank line yields no entries.
pub fn reconstruct(input: &str, profile: &LocaleProfile) -> Result<Vec<Entry>, ChatstatsError> {
    reconstruct_lines(split_lines(input), profile)
}

/// Reconstructs entries from an already split line sequence.
pub fn reconstruct_lines<'a>(
    lines: impl IntoIterator<Item = RawLine<'a>>,
    profile: &LocaleProfile,
) -> Result<Vec<Entry>, ChatstatsError> {
    let mut entries = Vec::new();
    let mut current: Option<OpenEntry> = None;

    for line in lines {
        match classify(line.text, profile) {
            LineClass::NewEntryHeader {
                timestamp,
                author,
                body_fragment,
            } => {
                if let Some(done) = current.take() {
                    entries.push(done.finish());
                }
                current = Some(OpenEntry {
                    timestamp,
                    author: author.map(str::to_string),
                    body: body_fragment.to_string(),
                    first: line.number,
                    last: line.number,
                });
            }
            LineClass::Continuation { text } => match current.as_mut() {
                Some(open) => {
                    open.body.push('\n');
                    open.body.push_str(text);
                    open.last = line.number;
                }
                None if text.trim().is_empty() => {}
                None => return Err(ChatstatsError::malformed_input(line.number, text)),
            },
        }
    }

    if let Some(done) = current {
        entries.push(done.finish());
    }

    tracing::debug!(entries = entries.len(), "reconstructed entries");
    Ok(entries)
}
