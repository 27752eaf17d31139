//! Line splitting and header/continuation classification.

use chrono::NaiveDateTime;

use crate::locale::LocaleProfile;

/// One line of input with its 1-based source line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Line text without the line terminator
    pub text: &'a str,
}

/// Splits input text into numbered lines.
///
/// `\n` and `\r\n` terminators are both accepted. A byte-order mark at the
/// very start of the input is dropped.
pub fn split_lines(input: &str) -> impl Iterator<Item = RawLine<'_>> {
    input
        .strip_prefix('\u{feff}')
        .unwrap_or(input)
        .lines()
        .enumerate()
        .map(|(idx, text)| RawLine {
            number: idx + 1,
            text,
        })
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// The line starts a new entry.
    NewEntryHeader {
        /// Parsed header timestamp
        timestamp: NaiveDateTime,
        /// Author, if the header carries one
        author: Option<&'a str>,
        /// First line of the entry body
        body_fragment: &'a str,
    },
    /// The line extends the body of the currently open entry.
    Continuation {
        /// The whole line
        text: &'a str,
    },
}

impl LineClass<'_> {
    /// Returns `true` for header lines.
    pub fn is_header(&self) -> bool {
        matches!(self, LineClass::NewEntryHeader { .. })
    }
}

/// Classifies one line.
///
/// A line is a header if and only if the profile parses it as one. There is
/// no lookback: message text that happens to look like a header line (for
/// example a pasted chat excerpt) is classified as a header.
pub fn classify<'a>(line: &'a str, profile: &LocaleProfile) -> LineClass<'a> {
    match profile.try_parse_header(line) {
        Some(header) => LineClass::NewEntryHeader {
            timestamp: header.timestamp,
            author: header.author,
            body_fragment: header.remainder,
        },
        None => LineClass::Continuation { text: line },
    }
}
