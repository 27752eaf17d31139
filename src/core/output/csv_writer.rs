//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::CSV_TIMESTAMP_FORMAT;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::ChatstatsError;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp` (optional), `Author`, `Body`, then `FirstLine`,
///   `LastLine` and `Placeholder` when enabled in [`OutputConfig`]
/// - Multi-line bodies are quoted, newlines kept
/// - Encoding: UTF-8
pub fn write_csv(
    messages: &[Message],
    path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatstatsError> {
    let file = File::create(path)?;
    write_records(messages, file, config)
}

/// Converts messages to a CSV string.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String, ChatstatsError> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    messages: &[Message],
    sink: W,
    config: &OutputConfig,
) -> Result<(), ChatstatsError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Author");
    header.push("Body");

    if config.include_lines {
        header.push("FirstLine");
        header.push("LastLine");
    }
    if config.include_placeholders {
        header.push("Placeholder");
    }

    header
}

fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp.format(CSV_TIMESTAMP_FORMAT).to_string());
    }

    record.push(msg.author.clone());
    record.push(msg.body.clone());

    if config.include_lines {
        record.push(msg.lines.map(|s| s.first.to_string()).unwrap_or_default());
        record.push(msg.lines.map(|s| s.last.to_string()).unwrap_or_default());
    }
    if config.include_placeholders {
        record.push(
            msg.placeholder
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
        );
    }

    record
}
