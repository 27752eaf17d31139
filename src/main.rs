//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::Instant;

use chrono::Weekday;
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstats::cli::Args;
use chatstats::core::write_report;
use chatstats::format::write_to_format;
use chatstats::stats::AggregateTables;
use chatstats::{ChatAnalyzer, ChatstatsError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();

    let stopwords = args
        .stopwords
        .as_ref()
        .map(std::fs::read_to_string)
        .transpose()?;
    let config = args.analysis_config(stopwords.as_deref())?;
    let analyzer = ChatAnalyzer::new(config)?;

    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("🌐 Locale:  {}", analyzer.profile().name());
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    if let Some(ref from) = args.from {
        println!("👤 From:    {}", from);
    }
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let parsed = analyzer.parse_file(&args.input)?;
    let messages = analyzer.prepare_messages(&parsed);
    let analysis = analyzer.summarize(&parsed, &messages);
    println!(
        "   {} entries, {} messages, {} system events ({:.2}s)",
        analysis.entry_count,
        analysis.message_count,
        analysis.system_event_count,
        parse_start.elapsed().as_secs_f64()
    );
    if analysis.out_of_order_count > 0 {
        println!(
            "⚠️  {} timestamps run backwards (kept in file order)",
            analysis.out_of_order_count
        );
    }

    if let Some(ref name) = analysis.chat_name {
        println!();
        println!("💬 Chat:    {}", name);
    }

    print_tables(&analysis.tables, args.top);

    if let Some(ref path) = args.output {
        let format = args.record_format();
        println!();
        println!("💾 Writing {} records to {}...", format, path.display());
        write_to_format(&messages, path, format, &args.output_config())?;
    }

    if let Some(ref path) = args.report {
        println!("💾 Writing report to {}...", path.display());
        write_report(&analysis, path)?;
    }

    println!();
    println!(
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_tables(tables: &AggregateTables, top: usize) {
    if tables.is_empty() {
        println!();
        println!("ℹ️  No messages to analyze.");
        return;
    }

    println!();
    println!("👥 Authors ({}):", tables.authors.len());
    for (name, stats) in tables.top_authors(top) {
        println!(
            "   {:<20} {:>6} messages, avg {:.1} chars",
            name, stats.messages, stats.average_length
        );
    }

    println!();
    println!("🗣️  Conversation starts ({} total):", tables.total_starts());
    for (name, count) in tables.top_starters(top) {
        println!("   {:<20} {:>6}", name, count);
    }

    println!();
    println!("🕒 Activity by weekday:");
    let mut day = Weekday::Mon;
    for count in tables.activity.by_weekday() {
        println!("   {:<4} {:>6}", day, count);
        day = day.succ();
    }
    if let Some((day, hour, count)) = tables.activity.peak() {
        println!("   Busiest: {} {:02}:00 ({} messages)", day, hour, count);
    }

    println!();
    println!("🔤 Top words:");
    for (word, count) in tables.top_words(top) {
        println!("   {:<20} {:>6}", word, count);
    }
}
