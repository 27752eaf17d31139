//! JSON Lines (JSONL) output writer.
//!
//! One record per line, no enclosing array. Suited to line-oriented tools
//! and to appending several exports into one file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::record::MessageRecord;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::ChatstatsError;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-01-02T10:00:00","author":"Alice","body":"Hello"}
/// {"timestamp":"2023-01-02T10:05:00","author":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(
    messages: &[Message],
    path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatstatsError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String, ChatstatsError> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    messages: &[Message],
    writer: &mut W,
    config: &OutputConfig,
) -> Result<(), ChatstatsError> {
    for msg in messages {
        let line = serde_json::to_string(&MessageRecord::new(msg, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
