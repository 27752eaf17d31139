//! JSON report of a whole analysis run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analyzer::ChatAnalysis;
use crate::error::ChatstatsError;

/// Writes the analysis summary and tables as pretty JSON.
///
/// The activity matrix is written as 7 rows (Monday first) of 24 hourly
/// counts. Author and word tables are objects keyed by name.
pub fn write_report(analysis: &ChatAnalysis, path: impl AsRef<Path>) -> Result<(), ChatstatsError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, analysis)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts the analysis to a pretty JSON string.
pub fn to_report_json(analysis: &ChatAnalysis) -> Result<String, ChatstatsError> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
