//! Aggregate statistics over a message sequence.
//!
//! Each statistic is an independent fold with its own accumulator:
//!
//! | Accumulator | Output |
//! |-------------|--------|
//! | [`AuthorTally`] | per-author count, total and average body length |
//! | [`ConversationStarts`] | per-author conversation-start count |
//! | [`ActivityHistogram`] | weekday × hour message counts |
//! | [`WordFrequency`] | word → frequency |
//!
//! [`aggregate`] drives all four in one pass, [`aggregate_by_pass`] runs
//! them one after another, and (with the `parallel` feature)
//! [`aggregate_parallel`] runs them on the rayon pool. All three produce
//! identical [`AggregateTables`].
//!
//! # Example
//!
//! ```
//! use chatstats::Message;
//! use chatstats::config::WordFilterConfig;
//! use chatstats::stats::aggregate;
//! use chrono::{NaiveDate, Weekday};
//!
//! let at = |m| NaiveDate::from_ymd_opt(2023, 1, 2).unwrap().and_hms_opt(10, m, 0).unwrap();
//! let messages = vec![
//!     Message::new("Alice", "Hello", at(0)),
//!     Message::new("Bob", "Hi there", at(5)),
//!     Message::new("Bob", "how are you", at(6)),
//! ];
//!
//! let tables = aggregate(&messages, &WordFilterConfig::default());
//! assert_eq!(tables.authors["Bob"].messages, 2);
//! assert_eq!(tables.starts["Bob"], 1);
//! assert_eq!(tables.activity.get(Weekday::Mon, 10), 3);
//! ```

mod activity;
mod authors;
mod starts;
mod words;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::config::WordFilterConfig;

pub use activity::{ActivityHistogram, ActivityMatrix};
pub use authors::{AuthorStats, AuthorTally};
pub use starts::ConversationStarts;
pub use words::{WordFrequency, tokenize};

/// A fold over messages with an explicit accumulator.
pub trait Reduction {
    /// Finished table type.
    type Output;

    /// Feeds the next message in sequence order.
    fn observe(&mut self, msg: &Message);

    /// Consumes the accumulator and returns the finished table.
    fn finish(self) -> Self::Output;

    /// Observes every message in order and finishes.
    fn fold<'a, I>(mut self, messages: I) -> Self::Output
    where
        Self: Sized,
        I: IntoIterator<Item = &'a Message>,
    {
        for msg in messages {
            self.observe(msg);
        }
        self.finish()
    }
}

/// The four aggregate datasets, plus the message total they were built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateTables {
    /// Messages aggregated
    pub message_count: u64,
    /// Per-author counts and lengths, keyed by display name
    pub authors: BTreeMap<String, AuthorStats>,
    /// Per-author conversation starts
    pub starts: BTreeMap<String, u64>,
    /// Weekday × hour message counts
    pub activity: ActivityMatrix,
    /// Word frequencies
    pub words: BTreeMap<String, u64>,
}

impl AggregateTables {
    /// Returns `true` if no message was aggregated.
    pub fn is_empty(&self) -> bool {
        self.message_count == 0
    }

    /// Authors ordered by message count (descending), ties by name.
    pub fn top_authors(&self, n: usize) -> Vec<(&str, &AuthorStats)> {
        let mut ranked: Vec<_> = self
            .authors
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
            .collect();
        ranked.sort_by(|a, b| b.1.messages.cmp(&a.1.messages).then(a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Authors ordered by conversation starts (descending), ties by name.
    pub fn top_starters(&self, n: usize) -> Vec<(&str, u64)> {
        rank(&self.starts, n)
    }

    /// Most frequent words (descending), ties alphabetically.
    pub fn top_words(&self, n: usize) -> Vec<(&str, u64)> {
        rank(&self.words, n)
    }

    /// Total conversation starts across all authors.
    pub fn total_starts(&self) -> u64 {
        self.starts.values().sum()
    }
}

fn rank(table: &BTreeMap<String, u64>, n: usize) -> Vec<(&str, u64)> {
    let mut ranked: Vec<_> = table.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}

/// Computes all four tables in a single pass.
pub fn aggregate(messages: &[Message], words: &WordFilterConfig) -> AggregateTables {
    let mut authors = AuthorTally::new();
    let mut starts = ConversationStarts::new();
    let mut activity = ActivityHistogram::new();
    let mut frequency = WordFrequency::new(words);

    for msg in messages {
        authors.observe(msg);
        starts.observe(msg);
        activity.observe(msg);
        frequency.observe(msg);
    }

    let tables = AggregateTables {
        message_count: messages.len() as u64,
        authors: authors.finish(),
        starts: starts.finish(),
        activity: activity.finish(),
        words: frequency.finish(),
    };
    tracing::debug!(
        messages = tables.message_count,
        authors = tables.authors.len(),
        words = tables.words.len(),
        "aggregated message tables"
    );
    tables
}

/// Computes the tables with one pass per statistic.
pub fn aggregate_by_pass(messages: &[Message], words: &WordFilterConfig) -> AggregateTables {
    AggregateTables {
        message_count: messages.len() as u64,
        authors: AuthorTally::new().fold(messages),
        starts: ConversationStarts::new().fold(messages),
        activity: ActivityHistogram::new().fold(messages),
        words: WordFrequency::new(words).fold(messages),
    }
}

/// Computes the four tables concurrently on the rayon pool.
///
/// Each reduction reads the shared slice and owns its accumulator; results
/// are assembled after all four have finished.
#[cfg(feature = "parallel")]
pub fn aggregate_parallel(messages: &[Message], words: &WordFilterConfig) -> AggregateTables {
    let ((authors, starts), (activity, frequency)) = rayon::join(
        || {
            rayon::join(
                || AuthorTally::new().fold(messages),
                || ConversationStarts::new().fold(messages),
            )
        },
        || {
            rayon::join(
                || ActivityHistogram::new().fold(messages),
                || WordFrequency::new(words).fold(messages),
            )
        },
    );
    AggregateTables {
        message_count: messages.len() as u64,
        authors,
        starts,
        activity,
        words: frequency,
    }
}
