//! Locale profiles: the only locale-sensitive part of the engine.
//!
//! A [`LocaleProfile`] is compiled once per run from a declarative
//! [`LocaleSpec`] and exposes two pure operations:
//!
//! - [`try_parse_header`](LocaleProfile::try_parse_header) recognizes lines
//!   that start a new entry and extracts the timestamp and optional author
//! - [`classify_system_event`](LocaleProfile::classify_system_event) matches
//!   membership/title/etc. phrases
//!
//! Everything downstream only calls these, so the rest of the pipeline never
//! branches on language.
//!
//! # Example
//!
//! ```rust
//! use chatstats::locale::LocaleProfile;
//! use chrono::{Datelike, Timelike};
//!
//! # fn main() -> chatstats::Result<()> {
//! let profile = LocaleProfile::load("en")?;
//! let header = profile
//!     .try_parse_header("1/2/23, 10:00 AM - Alice: Hello")
//!     .unwrap();
//!
//! assert_eq!(header.author, Some("Alice"));
//! assert_eq!(header.remainder, "Hello");
//! assert_eq!(header.timestamp.month(), 1);
//! assert_eq!(header.timestamp.day(), 2);
//! assert_eq!(header.timestamp.hour(), 10);
//! # Ok(())
//! # }
//! ```

pub mod event;
pub mod tables;
pub mod template;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

pub use event::{EventMatch, EventSubtype, Placeholder};
pub use tables::{LOCALES, LocaleSpec, TimestampGrammar};

use crate::error::ChatstatsError;

/// A successfully parsed header line.
///
/// Borrowed from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedHeader<'a> {
    /// Locale-normalized timestamp
    pub timestamp: NaiveDateTime,
    /// Author, when the text after the timestamp has an author prefix
    pub author: Option<&'a str>,
    /// Text after the author separator, or everything after the timestamp
    pub remainder: &'a str,
}

/// Compiled, immutable locale profile.
#[derive(Debug, Clone)]
pub struct LocaleProfile {
    spec: &'static LocaleSpec,
    headers: Vec<Regex>,
    system_events: Vec<(EventSubtype, Regex)>,
    placeholders: Vec<(Placeholder, Regex)>,
}

impl LocaleProfile {
    /// Looks up a registered profile by identifier and compiles it.
    ///
    /// Identifiers are case-insensitive and treat `_` like `-`, so `en_GB`
    /// resolves to `en-gb`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::UnsupportedLocale`] if nothing is
    /// registered under `code`.
    pub fn load(code: &str) -> Result<Self, ChatstatsError> {
        let wanted = normalize_code(code);
        let spec = LOCALES
            .iter()
            .find(|spec| spec.code == wanted || spec.aliases.contains(&wanted.as_str()))
            .ok_or_else(|| ChatstatsError::unsupported_locale(code, &Self::supported()))?;
        Self::compile(spec)
    }

    /// Compiles a profile from a declarative definition.
    ///
    /// Use this to run the engine with a locale that is not built in.
    pub fn compile(spec: &'static LocaleSpec) -> Result<Self, ChatstatsError> {
        let pattern_error = |e: regex::Error| ChatstatsError::Pattern {
            locale: spec.code,
            message: e.to_string(),
        };

        let headers = spec
            .grammar
            .header_patterns
            .iter()
            .map(|pattern| Regex::new(pattern).map_err(pattern_error))
            .collect::<Result<Vec<_>, _>>()?;

        let system_events = spec
            .system_events
            .iter()
            .map(|&(subtype, tpl)| {
                template::compile_template(tpl)
                    .map(|re| (subtype, re))
                    .map_err(pattern_error)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let placeholders = spec
            .placeholders
            .iter()
            .map(|&(kind, tpl)| {
                template::compile_template(tpl)
                    .map(|re| (kind, re))
                    .map_err(pattern_error)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            locale = spec.code,
            headers = headers.len(),
            system_events = system_events.len(),
            "compiled locale profile"
        );

        Ok(Self {
            spec,
            headers,
            system_events,
            placeholders,
        })
    }

    /// Returns the canonical identifiers of all built-in profiles.
    pub fn supported() -> Vec<&'static str> {
        LOCALES.iter().map(|spec| spec.code).collect()
    }

    /// Canonical identifier of this profile.
    pub fn code(&self) -> &'static str {
        self.spec.code
    }

    /// Human-readable name of this profile.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Text separating author and body on message headers.
    pub fn author_separator(&self) -> &'static str {
        self.spec.author_separator
    }

    /// Parses `line` as an entry header.
    ///
    /// Returns `None` when no header pattern matches, or when one matches but
    /// its date/time does not parse under this locale's formats.
    pub fn try_parse_header<'a>(&self, line: &'a str) -> Option<ParsedHeader<'a>> {
        // iOS prefixes attachment and notice headers with a left-to-right mark.
        let line = line.trim_start_matches('\u{200e}');
        let mut candidate = false;
        for re in &self.headers {
            let Some(caps) = re.captures(line) else {
                continue;
            };
            let (Some(date), Some(time), Some(rest)) =
                (caps.name("date"), caps.name("time"), caps.name("rest"))
            else {
                continue;
            };

            let Some(timestamp) = self.parse_timestamp(date.as_str(), time.as_str()) else {
                candidate = true;
                continue;
            };

            let rest = rest.as_str();
            let (author, remainder) = match rest.split_once(self.spec.author_separator) {
                Some((author, body)) if !author.trim().is_empty() => (Some(author.trim()), body),
                _ => (None, rest),
            };

            return Some(ParsedHeader {
                timestamp,
                author,
                remainder,
            });
        }
        if candidate {
            tracing::warn!(line, "header-shaped line has an unparseable timestamp, kept as text");
        }
        None
    }

    /// Parses a date and time captured from a header line.
    pub fn parse_timestamp(&self, date: &str, time: &str) -> Option<NaiveDateTime> {
        let grammar = &self.spec.grammar;

        let date = grammar
            .date_formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())?;

        let mut time = time
            .replace(['\u{202f}', '\u{a0}'], " ")
            .to_lowercase();
        for &(marker, canonical) in grammar.meridiem_markers {
            if time.contains(marker) {
                time = time.replace(marker, canonical);
            }
        }

        let time = grammar
            .time_formats
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(&time, fmt).ok())?;

        Some(date.and_time(time))
    }

    /// Matches `text` against the system-event phrase table.
    pub fn classify_system_event(&self, text: &str) -> Option<EventMatch> {
        let text = text.trim_start_matches('\u{200e}').trim();
        self.system_events.iter().find_map(|(subtype, re)| {
            re.captures(text).map(|caps| EventMatch {
                subtype: *subtype,
                actor: caps.name("actor").map(|m| m.as_str().trim().to_string()),
                target: caps.name("target").map(|m| m.as_str().trim().to_string()),
                title: caps.name("title").map(|m| m.as_str().to_string()),
            })
        })
    }

    /// Matches a message body against the placeholder table.
    pub fn classify_placeholder(&self, body: &str) -> Option<Placeholder> {
        let body = body.trim_start_matches('\u{200e}').trim();
        self.placeholders
            .iter()
            .find(|(_, re)| re.is_match(body))
            .map(|(kind, _)| *kind)
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}
