//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`RecordFormat`] - record format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! [`Args`] turns into library configuration through
//! [`analysis_config`](Args::analysis_config) and
//! [`output_config`](Args::output_config), so the binary holds no parsing
//! logic of its own.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, WordFilterConfig};
use crate::core::{FilterConfig, OutputConfig};
use crate::error::ChatstatsError;

/// Analyze a plain-text chat export: who talks, who starts conversations,
/// when the chat is active and which words come up most.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt --lang de --min-word-length 4 --stopwords de.txt
    chatstats chat.txt --after 2024-01-01 --from Alice --top 20
    chatstats chat.txt --alias 'Alice Smith=Alice' --merge-window 180
    chatstats chat.txt -o messages.jsonl --report stats.json")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: PathBuf,

    /// Export language profile (en, en-gb, de, ru, es)
    #[arg(short, long, value_name = "CODE", default_value = "en")]
    pub lang: String,

    /// Ignore words shorter than this many characters
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub min_word_length: usize,

    /// Stopword list: one word per line, '#' starts a comment
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Rows shown per table in the summary
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages from this author
    #[arg(long, value_name = "AUTHOR")]
    pub from: Option<String>,

    /// Treat NAME as CANONICAL (repeatable)
    #[arg(long = "alias", value_name = "NAME=CANONICAL", value_parser = parse_alias)]
    pub aliases: Vec<(String, String)>,

    /// Merge same-author messages sent within SECS of each other
    #[arg(long, value_name = "SECS")]
    pub merge_window: Option<u64>,

    /// Drop deleted-message and omitted-media placeholders
    #[arg(long)]
    pub skip_placeholders: bool,

    /// Write per-message records to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Record format (default: from the output extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<RecordFormat>,

    /// Include source line numbers in records
    #[arg(long)]
    pub lines: bool,

    /// Write the full statistics report as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the analysis configuration.
    ///
    /// `stopword_text` is the content of the [`stopwords`](Self::stopwords)
    /// file, read by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] for malformed `--after`/`--before`.
    pub fn analysis_config(&self, stopword_text: Option<&str>) -> Result<AnalysisConfig, ChatstatsError> {
        let mut words = WordFilterConfig::new().with_min_length(self.min_word_length);
        if let Some(text) = stopword_text {
            words = words.with_stopword_list(text);
        }

        let mut config = AnalysisConfig::new(&self.lang)
            .with_word_filter(words)
            .with_skip_placeholders(self.skip_placeholders)
            .with_filter(self.filter_config()?);
        for (name, canonical) in &self.aliases {
            config = config.with_alias(name, canonical);
        }
        if let Some(secs) = self.merge_window {
            config = config.with_burst_window(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Builds the date/author filter.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatstatsError> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_author(from.clone());
        }
        Ok(filter)
    }

    /// Builds the record column configuration.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new()
            .with_lines(self.lines)
            .with_placeholders(!self.skip_placeholders)
    }

    /// Record format: explicit `--format`, else the output extension, else CSV.
    pub fn record_format(&self) -> crate::format::OutputFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format.into(),
            (None, Some(path)) => crate::format::OutputFormat::from_path(path).unwrap_or_default(),
            (None, None) => crate::format::OutputFormat::default(),
        }
    }

    /// Default `tracing` filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parses `NAME=CANONICAL`.
fn parse_alias(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, canonical)) if !name.is_empty() && !canonical.is_empty() => {
            Ok((name.to_string(), canonical.to_string()))
        }
        _ => Err(format!("expected NAME=CANONICAL, got '{s}'")),
    }
}

/// Record format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<RecordFormat> for crate::format::OutputFormat {
    fn from(format: RecordFormat) -> crate::format::OutputFormat {
        match format {
            RecordFormat::Csv => crate::format::OutputFormat::Csv,
            RecordFormat::Json => crate::format::OutputFormat::Json,
            RecordFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
