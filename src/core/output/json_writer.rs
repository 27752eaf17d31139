//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::record::MessageRecord;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::ChatstatsError;

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-01-02T10:00:00", "author": "Alice", "body": "Hello"},
///   {"timestamp": "2023-01-02T10:05:00", "author": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(
    messages: &[Message],
    path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatstatsError> {
    let json = to_json(messages, config)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String, ChatstatsError> {
    let records: Vec<MessageRecord<'_>> = messages
        .iter()
        .map(|m| MessageRecord::new(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
