//! Additional tests for the CLI module and format selection

#![cfg(feature = "cli")]

use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

use chatstats::cli::{Args, RecordFormat};
use chatstats::format::OutputFormat;
use clap::{CommandFactory, Parser};

#[test]
fn test_args_definition_is_valid() {
    Args::command().debug_assert();
}

#[test]
fn test_output_format_from_str_all_variants() {
    for name in OutputFormat::all_names() {
        assert!(OutputFormat::from_str(name).is_ok(), "{name}");
        assert!(OutputFormat::from_str(&name.to_uppercase()).is_ok(), "{name}");
    }
}

#[test]
fn test_output_format_from_str_errors() {
    for bad in ["", "xml", "yaml", "txt", "tsv"] {
        let err = OutputFormat::from_str(bad).unwrap_err();
        assert!(err.is_invalid_format(), "{bad}");
    }
}

#[test]
fn test_record_format_maps_to_output_format() {
    assert_eq!(OutputFormat::from(RecordFormat::Csv), OutputFormat::Csv);
    assert_eq!(OutputFormat::from(RecordFormat::Json), OutputFormat::Json);
    assert_eq!(OutputFormat::from(RecordFormat::Jsonl), OutputFormat::Jsonl);
    assert_eq!(RecordFormat::default(), RecordFormat::Csv);
}

#[test]
fn test_record_format_value_names() {
    for (flag, expected) in [
        ("csv", RecordFormat::Csv),
        ("json", RecordFormat::Json),
        ("jsonl", RecordFormat::Jsonl),
        ("ndjson", RecordFormat::Jsonl),
    ] {
        let args = Args::try_parse_from(["chatstats", "chat.txt", "--format", flag]).unwrap();
        assert_eq!(args.format, Some(expected));
    }
}

#[test]
fn test_record_format_hash() {
    let mut set = HashSet::new();
    set.insert(RecordFormat::Json);
    set.insert(RecordFormat::Jsonl);
    set.insert(RecordFormat::Json);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_default_extension_fallback() {
    let args = Args::try_parse_from(["chatstats", "chat.txt", "-o", "records"]).unwrap();
    assert_eq!(args.output, Some(PathBuf::from("records")));
    assert_eq!(args.record_format(), OutputFormat::Csv);
}

#[test]
fn test_short_flags() {
    let args = Args::try_parse_from([
        "chatstats", "chat.txt", "-l", "ru", "-o", "out.json", "-f", "jsonl", "-v",
    ])
    .unwrap();
    assert_eq!(args.lang, "ru");
    assert_eq!(args.record_format(), OutputFormat::Jsonl);
    assert_eq!(args.log_level(), "info");
}

#[test]
fn test_analysis_config_without_flags() {
    let args = Args::try_parse_from(["chatstats", "chat.txt"]).unwrap();
    let config = args.analysis_config(None).unwrap();
    assert_eq!(config.locale, "en");
    assert!(config.aliases.is_empty());
    assert!(config.word_filter.stopwords.is_empty());
    assert!(!config.skip_placeholders);
    assert_eq!(config.burst_window, None);
    assert!(!config.filter.is_active());
}

#[test]
fn test_stopword_file_comments_and_blanks() {
    let args = Args::try_parse_from(["chatstats", "chat.txt"]).unwrap();
    let config = args
        .analysis_config(Some("# header\n\n  The \nund # trailing\n"))
        .unwrap();
    let words: Vec<_> = config.word_filter.stopwords.iter().cloned().collect();
    assert_eq!(words, ["the", "und"]);
}

#[test]
fn test_date_range_filter() {
    let args = Args::try_parse_from([
        "chatstats",
        "chat.txt",
        "--after",
        "2024-01-01",
        "--before",
        "2024-01-31",
    ])
    .unwrap();
    let filter = args.filter_config().unwrap();
    assert!(filter.has_date_filter());
    assert!(!filter.has_author_filter());
    assert!(filter.after < filter.before);
}
