//! Output writers.
//!
//! Per-message records:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Aggregate report:
//! - [`write_report`] / [`to_report_json`] - the full [`ChatAnalysis`](crate::ChatAnalysis)
//!   as pretty JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{write_csv, to_jsonl};
//! use chatstats::core::models::OutputConfig;
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let messages = vec![Message::new("Alice", "Hello!", ts)];
//!
//! write_csv(&messages, "messages.csv", &OutputConfig::new())?;
//! let jsonl = to_jsonl(&messages, &OutputConfig::minimal())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
#[cfg(feature = "json-output")]
mod report;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
#[cfg(feature = "json-output")]
pub use report::{to_report_json, write_report};

/// Timestamp layout used in CSV records.
pub const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout used in JSON records.
pub const JSON_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[cfg(feature = "json-output")]
mod record {
    use serde::Serialize;

    use super::JSON_TIMESTAMP_FORMAT;
    use crate::Message;
    use crate::core::models::OutputConfig;
    use crate::locale::Placeholder;

    /// A message reduced to the columns enabled in `OutputConfig`.
    #[derive(Serialize)]
    pub(super) struct MessageRecord<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
        author: &'a str,
        body: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        first_line: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_line: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<Placeholder>,
    }

    impl<'a> MessageRecord<'a> {
        pub(super) fn new(msg: &'a Message, config: &OutputConfig) -> Self {
            let lines = msg.lines.filter(|_| config.include_lines);
            Self {
                timestamp: config
                    .include_timestamps
                    .then(|| msg.timestamp.format(JSON_TIMESTAMP_FORMAT).to_string()),
                author: &msg.author,
                body: &msg.body,
                first_line: lines.map(|span| span.first),
                last_line: lines.map(|span| span.last),
                placeholder: msg.placeholder.filter(|_| config.include_placeholders),
            }
        }
    }
}
