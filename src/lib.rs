//! # Chatstats
//!
//! A Rust library for turning plain-text chat exports into typed messages and
//! activity statistics.
//!
//! ## Overview
//!
//! Chat exports are line-oriented text where a message starts with a
//! locale-dependent timestamp header and may continue over any number of
//! following lines. Chatstats:
//!
//! - recognizes headers with a per-language [`LocaleProfile`](locale::LocaleProfile)
//! - reassembles multi-line messages into [`Entry`](parsing::Entry) values
//! - separates conversational [`Message`]s from system notices
//!   (joins, leaves, title changes, ...)
//! - computes per-author counts and average lengths, conversation starts,
//!   a weekday × hour histogram and word frequencies
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//! use chrono::Weekday;
//!
//! fn main() -> Result<()> {
//!     let analyzer = ChatAnalyzer::new(AnalysisConfig::new("en"))?;
//!     let analysis = analyzer.analyze_str(
//!         "1/2/23, 10:00 AM - Alice: Hello\n\
//!          1/2/23, 10:05 AM - Bob: Hi there\n\
//!          1/2/23, 10:06 AM - Bob: how are you",
//!     )?;
//!
//!     let tables = &analysis.tables;
//!     assert_eq!(tables.authors["Alice"].messages, 1);
//!     assert_eq!(tables.authors["Bob"].messages, 2);
//!     assert_eq!(tables.starts["Bob"], 1);
//!     assert_eq!(tables.activity.get(Weekday::Mon, 10), 3);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`locale`] - Locale profiles: header grammars and phrase tables
//! - [`parsing`] - Line classification and entry reconstruction
//! - [`core`] - Event filtering, message filters, burst merging, writers
//! - [`stats`] - The four aggregate reductions and [`AggregateTables`](stats::AggregateTables)
//! - [`analyzer`] - [`ChatAnalyzer`], wiring the stages together
//! - [`config`] - [`AnalysisConfig`], [`WordFilterConfig`](config::WordFilterConfig)
//! - [`format`] - Record output format selection
//! - [`cli`] - CLI argument types (requires `cli` feature)
//! - [`error`] - Unified error type ([`ChatstatsError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod analyzer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod locale;
pub mod message;
pub mod parsing;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use analyzer::{ChatAnalysis, ChatAnalyzer, ParsedChat};
pub use config::AnalysisConfig;
pub use error::{ChatstatsError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::error::{ChatstatsError, Result};

    // Pipeline
    pub use crate::analyzer::{ChatAnalysis, ChatAnalyzer, ParsedChat};
    pub use crate::config::{AnalysisConfig, WordFilterConfig};
    pub use crate::locale::{EventSubtype, LocaleProfile, Placeholder};
    pub use crate::parsing::{Entry, EntryKind, reconstruct};

    // Message-level processing
    pub use crate::core::events::{ChatItem, EventFilter, SystemEvent};
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::processor::merge_bursts;

    // Statistics
    pub use crate::stats::{AggregateTables, Reduction, aggregate};

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl, write_report};
    pub use crate::format::{OutputFormat, write_to_format};
}
