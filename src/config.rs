//! Configuration types for analysis runs.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`AnalysisConfig`] - locale, aliases, placeholder and burst handling
//! - [`WordFilterConfig`] - tokenization rules for the word-frequency table
//!
//! Date and author windows live in [`FilterConfig`](crate::core::FilterConfig)
//! and are embedded in [`AnalysisConfig`].
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use chatstats::config::{AnalysisConfig, WordFilterConfig};
//!
//! let words = WordFilterConfig::new()
//!     .with_min_length(3)
//!     .with_stopwords(["the", "and"]);
//!
//! let config = AnalysisConfig::new("de")
//!     .with_word_filter(words)
//!     .with_alias("Alice Smith", "Alice")
//!     .with_burst_window(Duration::from_secs(180));
//!
//! assert_eq!(config.locale, "de");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::FilterConfig;

/// Characters stripped from both ends of every word token by default.
pub const DEFAULT_PUNCTUATION: &str = ".,!?;:\"'`()[]{}<>…«»„“”‘’*_~/\\|-";

/// Rules for turning message bodies into counted words.
///
/// Tokens are split on whitespace, lowercased and stripped of
/// [`punctuation`](Self::punctuation) at both ends. Tokens shorter than
/// [`min_length`](Self::min_length) characters or listed in
/// [`stopwords`](Self::stopwords) are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFilterConfig {
    /// Minimum token length in characters (default: 1)
    pub min_length: usize,

    /// Characters stripped from token edges (default: [`DEFAULT_PUNCTUATION`])
    pub punctuation: String,

    /// Lowercased words to discard (default: empty)
    pub stopwords: BTreeSet<String>,
}

impl Default for WordFilterConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            stopwords: BTreeSet::new(),
        }
    }
}

impl WordFilterConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum token length in characters.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Replaces the punctuation set.
    #[must_use]
    pub fn with_punctuation(mut self, punctuation: impl Into<String>) -> Self {
        self.punctuation = punctuation.into();
        self
    }

    /// Adds stopwords. Entries are lowercased.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self.stopwords.remove("");
        self
    }

    /// Adds stopwords from a word list: one word per line, blank lines and
    /// `#` comments ignored.
    #[must_use]
    pub fn with_stopword_list(self, text: &str) -> Self {
        self.with_stopwords(parse_stopword_list(text))
    }

    /// Returns `true` if `c` is stripped from token edges.
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(c)
    }
}

/// Parses a stopword list: one word per line, `#` starts a comment.
pub fn parse_stopword_list(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(word, _)| word).trim())
        .filter(|word| !word.is_empty())
}

/// Configuration for one analysis run.
///
/// # Example
///
/// ```rust
/// use chatstats::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default().with_skip_placeholders(true);
/// assert_eq!(config.locale, "en");
/// assert!(config.burst_window.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Locale profile code (default: `"en"`)
    pub locale: String,

    /// Word-frequency tokenization rules
    pub word_filter: WordFilterConfig,

    /// Exported display name → canonical author name
    pub aliases: BTreeMap<String, String>,

    /// Drop deleted-message and omitted-media bodies before aggregation (default: false)
    pub skip_placeholders: bool,

    /// Merge same-author messages sent within this window (default: off)
    pub burst_window: Option<Duration>,

    /// Date range and author window applied before aggregation
    pub filter: FilterConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            word_filter: WordFilterConfig::default(),
            aliases: BTreeMap::new(),
            skip_placeholders: false,
            burst_window: None,
            filter: FilterConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration for `locale` with default values otherwise.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Sets the word-frequency rules.
    #[must_use]
    pub fn with_word_filter(mut self, word_filter: WordFilterConfig) -> Self {
        self.word_filter = word_filter;
        self
    }

    /// Maps `name` to `canonical` when building messages.
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), canonical.into());
        self
    }

    /// Sets whether placeholder bodies are dropped before aggregation.
    #[must_use]
    pub fn with_skip_placeholders(mut self, skip: bool) -> Self {
        self.skip_placeholders = skip;
        self
    }

    /// Enables burst merging with the given window.
    #[must_use]
    pub fn with_burst_window(mut self, window: Duration) -> Self {
        self.burst_window = Some(window);
        self
    }

    /// Sets the date/author window.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}
