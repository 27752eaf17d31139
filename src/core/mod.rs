//! Message-level processing between parsing and aggregation.
//!
//! This module contains:
//! - [`events`] - Separating messages from system notices
//! - [`filter`] - Message filtering by date and author
//! - [`processor`] - Burst merging
//! - [`models`] - Record output configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL, JSON report)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatstats::core::{
//!     EventFilter, FilterConfig, OutputConfig,
//!     apply_filters, merge_bursts,
//!     write_csv, write_json, write_jsonl, write_report,
//! };
//! # }
//! ```

pub mod events;
pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

pub use events::{ChatItem, EventFilter, SystemEvent};
pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, to_report_json, write_json, write_jsonl, write_report};

pub use processor::{ProcessingStats, merge_bursts, merge_with_stats};
