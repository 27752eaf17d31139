//! End-to-end analysis: export text in, typed items and aggregate tables out.
//!
//! [`ChatAnalyzer`] wires the stages together:
//!
//! 1. [`reconstruct`](crate::parsing::reconstruct) entries from raw lines
//! 2. relabel them with the [`EventFilter`]
//! 3. prepare the message sequence (placeholders, window filters, bursts)
//! 4. [`aggregate`](crate::stats::aggregate) the four tables
//!
//! # Example
//!
//! ```rust
//! use chatstats::{AnalysisConfig, ChatAnalyzer};
//!
//! # fn main() -> chatstats::Result<()> {
//! let analyzer = ChatAnalyzer::new(AnalysisConfig::new("en"))?;
//! let analysis = analyzer.analyze_str(
//!     "1/2/23, 10:00 AM - Alice: Hello\n\
//!      1/2/23, 10:05 AM - Bob: Hi there\n\
//!      1/2/23, 10:06 AM - Bob: how are you",
//! )?;
//!
//! assert_eq!(analysis.message_count, 3);
//! assert_eq!(analysis.tables.starts["Bob"], 1);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::events::{self, ChatItem, EventFilter, SystemEvent};
use crate::core::{apply_filters, merge_with_stats};
use crate::error::ChatstatsError;
use crate::locale::LocaleProfile;
use crate::parsing::reconstruct;
use crate::stats::{AggregateTables, aggregate};

/// Entries of one export after event classification, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChat {
    /// Messages and system events in source order
    pub items: Vec<ChatItem>,
}

impl ParsedChat {
    /// Number of reconstructed entries.
    pub fn entry_count(&self) -> usize {
        self.items.len()
    }

    /// Messages, in source order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.items.iter().filter_map(ChatItem::as_message)
    }

    /// System events, in source order.
    pub fn system_events(&self) -> impl Iterator<Item = &SystemEvent> {
        self.items.iter().filter_map(ChatItem::as_system_event)
    }

    /// Title from the last group-created or subject-changed notice.
    pub fn chat_name(&self) -> Option<&str> {
        events::latest_title(&self.items)
    }

    /// Number of entries whose timestamp is earlier than the one before.
    pub fn out_of_order_count(&self) -> usize {
        self.items
            .windows(2)
            .filter(|pair| pair[1].timestamp() < pair[0].timestamp())
            .count()
    }
}

/// Summary and tables for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatAnalysis {
    /// Locale profile code used for parsing
    pub locale: &'static str,
    /// Chat title, if the export names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_name: Option<String>,
    /// Reconstructed entries
    pub entry_count: usize,
    /// System events
    pub system_event_count: usize,
    /// Messages tagged as deleted/omitted-media placeholders
    pub placeholder_count: usize,
    /// Entries whose timestamp runs backwards
    pub out_of_order_count: usize,
    /// Messages fed to the aggregator
    pub message_count: usize,
    /// Aggregate tables
    pub tables: AggregateTables,
}

/// Runs the parsing and aggregation pipeline for one locale.
#[derive(Debug, Clone)]
pub struct ChatAnalyzer {
    config: AnalysisConfig,
    profile: LocaleProfile,
}

impl ChatAnalyzer {
    /// Creates an analyzer, loading the configured locale profile.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::UnsupportedLocale`] for an unknown locale code.
    pub fn new(config: AnalysisConfig) -> Result<Self, ChatstatsError> {
        let profile = LocaleProfile::load(&config.locale)?;
        Ok(Self { config, profile })
    }

    /// Returns the loaded locale profile.
    pub fn profile(&self) -> &LocaleProfile {
        &self.profile
    }

    /// Returns the analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Reconstructs and classifies entries.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::MalformedInput`] if the first non-blank line
    /// is not a header.
    pub fn parse_str(&self, input: &str) -> Result<ParsedChat, ChatstatsError> {
        let entries = reconstruct(input, &self.profile)?;
        let items = EventFilter::new(&self.profile)
            .with_aliases(&self.config.aliases)
            .classify_all(entries);

        let parsed = ParsedChat { items };
        let out_of_order = parsed.out_of_order_count();
        if out_of_order > 0 {
            tracing::warn!(
                out_of_order,
                "timestamps run backwards; entries kept in source order"
            );
        }
        Ok(parsed)
    }

    /// Reads and parses an export file.
    ///
    /// Malformed-input errors carry `path`.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParsedChat, ChatstatsError> {
        let path = path.as_ref();
        let input = read_export(path)?;
        self.parse_str(&input).map_err(|e| e.with_path(path))
    }

    /// Applies placeholder skipping, window filters and burst merging.
    ///
    /// The result is the exact sequence the aggregator sees, and what the
    /// record writers emit.
    pub fn prepare_messages(&self, parsed: &ParsedChat) -> Vec<Message> {
        let mut messages: Vec<Message> = parsed
            .messages()
            .filter(|msg| !(self.config.skip_placeholders && msg.is_placeholder()))
            .cloned()
            .collect();

        messages = apply_filters(messages, &self.config.filter);

        if let Some(window) = self.config.burst_window {
            messages = merge_with_stats(messages, window).0;
        }
        messages
    }

    /// Aggregates a prepared message sequence and summarizes the run.
    pub fn summarize(&self, parsed: &ParsedChat, messages: &[Message]) -> ChatAnalysis {
        let tables = aggregate(messages, &self.config.word_filter);
        ChatAnalysis {
            locale: self.profile.code(),
            chat_name: parsed.chat_name().map(str::to_string),
            entry_count: parsed.entry_count(),
            system_event_count: parsed.system_events().count(),
            placeholder_count: parsed.messages().filter(|m| m.is_placeholder()).count(),
            out_of_order_count: parsed.out_of_order_count(),
            message_count: messages.len(),
            tables,
        }
    }

    /// Parses and analyzes export text.
    pub fn analyze_str(&self, input: &str) -> Result<ChatAnalysis, ChatstatsError> {
        let parsed = self.parse_str(input)?;
        let messages = self.prepare_messages(&parsed);
        Ok(self.summarize(&parsed, &messages))
    }

    /// Reads, parses and analyzes an export file.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<ChatAnalysis, ChatstatsError> {
        let parsed = self.parse_file(path)?;
        let messages = self.prepare_messages(&parsed);
        Ok(self.summarize(&parsed, &messages))
    }
}

/// Reads an export file as UTF-8.
pub fn read_export(path: &Path) -> Result<String, ChatstatsError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read export");
    String::from_utf8(bytes).map_err(|source| ChatstatsError::Utf8 {
        context: path.display().to_string(),
        source,
    })
}
