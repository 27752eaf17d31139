//! Integration tests for the full parse → classify → aggregate pipeline.

use std::fs;
use std::time::Duration;

use chatstats::core::FilterConfig;
use chatstats::locale::LocaleProfile;
use chatstats::prelude::*;
use chatstats::stats::aggregate_by_pass;
use chrono::{NaiveDate, Timelike, Weekday};
use tempfile::tempdir;

fn analyzer(locale: &str) -> ChatAnalyzer {
    ChatAnalyzer::new(AnalysisConfig::new(locale)).unwrap()
}

const EN_SAMPLE: &str = "1/2/23, 10:00 AM - Alice: Hello\n\
                         1/2/23, 10:05 AM - Bob: Hi there\n\
                         1/2/23, 10:06 AM - Bob: how are you";

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_three_message_scenario() {
    let analysis = analyzer("en").analyze_str(EN_SAMPLE).unwrap();
    let tables = &analysis.tables;

    assert_eq!(analysis.message_count, 3);
    assert_eq!(tables.authors.len(), 2);
    assert_eq!(tables.authors["Alice"].messages, 1);
    assert_eq!(tables.authors["Bob"].messages, 2);
    assert_eq!(tables.starts["Alice"], 1);
    assert_eq!(tables.starts["Bob"], 1);
    assert_eq!(tables.activity.get(Weekday::Mon, 10), 3);
    assert_eq!(tables.activity.total(), 3);
}

#[test]
fn test_average_length_in_characters() {
    let analysis = analyzer("en").analyze_str(EN_SAMPLE).unwrap();
    let bob = &analysis.tables.authors["Bob"];
    // "Hi there" (8) and "how are you" (11)
    assert_eq!(bob.total_chars, 19);
    assert!((bob.average_length - 9.5).abs() < f64::EPSILON);
}

#[test]
fn test_continuation_first_is_malformed() {
    let err = analyzer("en")
        .analyze_str("just some text\n1/2/23, 10:00 AM - Alice: Hello")
        .unwrap_err();
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_wrong_locale_is_malformed() {
    let err = analyzer("de").analyze_str(EN_SAMPLE).unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_system_event_excluded_and_transparent() {
    let input = "1/2/23, 10:00 AM - Alice: Hello\n\
                 1/2/23, 10:01 AM - Alice added Carol\n\
                 1/2/23, 10:02 AM - Alice: Welcome Carol";
    let analyzer = analyzer("en");
    let parsed = analyzer.parse_str(input).unwrap();

    let events: Vec<_> = parsed.system_events().collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].subtype, EventSubtype::MemberAdded);
    assert_eq!(events[0].actor.as_deref(), Some("Alice"));
    assert_eq!(events[0].target.as_deref(), Some("Carol"));

    let messages = analyzer.prepare_messages(&parsed);
    let analysis = analyzer.summarize(&parsed, &messages);
    let tables = &analysis.tables;

    assert_eq!(tables.message_count, 2);
    assert!(!tables.authors.contains_key("Carol"));
    // The notice sits between two Alice messages without splitting her turn.
    assert_eq!(tables.starts["Alice"], 1);
    assert_eq!(tables.activity.total(), 2);
    assert!(!tables.words.contains_key("added"));
}

#[test]
fn test_system_event_does_not_confirm_turn() {
    let input = "1/2/23, 10:00 AM - Alice: Hello\n\
                 1/2/23, 10:01 AM - Bob left\n\
                 1/2/23, 10:02 AM - Bob: I'm back";
    let analysis = analyzer("en").analyze_str(input).unwrap();
    assert_eq!(analysis.tables.starts["Alice"], 1);
    assert_eq!(analysis.tables.starts["Bob"], 1);
    assert_eq!(analysis.system_event_count, 1);
}

#[test]
fn test_empty_input_gives_empty_tables() {
    for input in ["", "\n\n", "   \n"] {
        let analysis = analyzer("en").analyze_str(input).unwrap();
        assert_eq!(analysis.entry_count, 0);
        assert!(analysis.tables.is_empty());
        assert!(analysis.tables.activity.peak().is_none());
    }
}

// ============================================================================
// Multi-line reconstruction
// ============================================================================

#[test]
fn test_multiline_message_counts_once() {
    let input = "1/2/23, 10:00 AM - Alice: Shopping list:\n\
                 - milk\n\
                 - bread\n\
                 1/2/23, 10:05 AM - Bob: ok";
    let analyzer = analyzer("en");
    let parsed = analyzer.parse_str(input).unwrap();
    let messages: Vec<_> = parsed.messages().collect();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body, "Shopping list:\n- milk\n- bread");
    let span = messages[0].lines.unwrap();
    assert_eq!((span.first, span.last), (1, 3));
}

#[test]
fn test_every_line_is_covered() {
    let input = "1/2/23, 10:00 AM - Alice: one\ntwo\n\n1/2/23, 10:01 AM - Bob left\n1/2/23, 10:02 AM - Bob: three\nfour";
    let profile = LocaleProfile::load("en").unwrap();
    let entries = reconstruct(input, &profile).unwrap();

    let covered: usize = entries.iter().map(|e| e.lines.len()).sum();
    assert_eq!(covered, input.lines().count());
    for pair in entries.windows(2) {
        assert_eq!(pair[0].lines.last + 1, pair[1].lines.first);
    }
}

#[test]
fn test_header_with_bad_date_is_continuation() {
    // 13/45/23 matches the header shape but not a real month/day.
    let input = "1/2/23, 10:00 AM - Alice: see this:\n13/45/23, 10:00 AM - Bob: quoted";
    let parsed = analyzer("en").parse_str(input).unwrap();
    assert_eq!(parsed.entry_count(), 1);
    let msg = parsed.messages().next().unwrap();
    assert!(msg.body.ends_with("13/45/23, 10:00 AM - Bob: quoted"));
}

// ============================================================================
// Locales
// ============================================================================

#[test]
fn test_en_gb_day_first() {
    let input = "02/01/2023, 22:15 - Alice: Evening\n03/01/2023, 08:00 - Bob: Morning";
    let parsed = analyzer("en-gb").parse_str(input).unwrap();
    let messages: Vec<_> = parsed.messages().collect();
    assert_eq!(
        messages[0].timestamp,
        NaiveDate::from_ymd_opt(2023, 1, 2)
            .unwrap()
            .and_hms_opt(22, 15, 0)
            .unwrap()
    );
    assert_eq!(messages[1].timestamp.hour(), 8);
}

#[test]
fn test_en_bracketed_with_seconds() {
    let input = "[1/15/24, 10:30:15 PM] Alice: Hello\n[1/15/24, 10:31:00 PM] Bob: Hi";
    let analysis = analyzer("en").analyze_str(input).unwrap();
    assert_eq!(analysis.message_count, 2);
    assert_eq!(analysis.tables.activity.get(Weekday::Mon, 22), 2);
}

#[test]
fn test_ios_attachment_line_is_its_own_entry() {
    let input = "[1/2/23, 10:00:00 AM] Alice: Hello\n\
                 \u{200e}[1/2/23, 10:01:00 AM] Bob: \u{200e}image omitted\n\
                 [1/2/23, 10:02:00 AM] Bob: ok";
    let chat = analyzer("en").parse_str(input).unwrap();
    assert_eq!(chat.entry_count(), 3);

    let messages: Vec<&Message> = chat.messages().collect();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].body, "Hello");
    assert_eq!(messages[1].author, "Bob");
    assert_eq!(messages[1].placeholder, Some(Placeholder::Media));

    let analysis = analyzer("en").analyze_str(input).unwrap();
    assert_eq!(analysis.tables.authors["Alice"].total_chars, 5);
    assert_eq!(analysis.tables.authors["Bob"].messages, 2);
}

#[test]
fn test_de_sample() {
    let input = "02.01.23, 10:00 - Anna hat die Gruppe „Familie“ erstellt.\n\
                 02.01.23, 10:01 - Anna hat Jonas hinzugefügt.\n\
                 02.01.23, 10:02 - Anna: Hallo zusammen\n\
                 02.01.23, 10:03 - Jonas: <Medien ausgeschlossen>\n\
                 02.01.23, 10:04 - Jonas hat die Gruppe verlassen.";
    let analyzer = analyzer("de");
    let parsed = analyzer.parse_str(input).unwrap();

    assert_eq!(parsed.chat_name(), Some("Familie"));
    assert_eq!(parsed.system_events().count(), 3);

    let analysis = analyzer.analyze_str(input).unwrap();
    assert_eq!(analysis.message_count, 2);
    assert_eq!(analysis.placeholder_count, 1);
    assert_eq!(analysis.tables.words["hallo"], 1);
}

#[test]
fn test_ru_sample() {
    let input = "02.01.2023, 18:30 - Иван: Привет всем!\n\
                 02.01.2023, 18:31 - Иван добавил(а) Мария\n\
                 02.01.2023, 18:32 - Мария: Привет, Иван\n\
                 02.01.2023, 18:33 - Мария: <Без медиафайлов>";
    let analysis = analyzer("ru").analyze_str(input).unwrap();
    let tables = &analysis.tables;

    assert_eq!(analysis.system_event_count, 1);
    assert_eq!(tables.authors["Мария"].messages, 2);
    assert_eq!(tables.starts["Мария"], 1);
    assert_eq!(tables.words["привет"], 2);
    assert_eq!(tables.activity.get(Weekday::Mon, 18), 3);
}

#[test]
fn test_es_sample_with_localized_meridiem() {
    let input = "2/1/23, 10:00 a. m. - Lucía: Hola\n2/1/23, 3:15 p. m. - Pablo: Buenas";
    let analysis = analyzer("es").analyze_str(input).unwrap();
    assert_eq!(analysis.message_count, 2);
    assert_eq!(analysis.tables.activity.get(Weekday::Mon, 10), 1);
    assert_eq!(analysis.tables.activity.get(Weekday::Mon, 15), 1);
}

#[test]
fn test_unknown_locale() {
    let err = ChatAnalyzer::new(AnalysisConfig::new("tlh")).unwrap_err();
    assert!(err.is_unsupported_locale());
    assert!(err.to_string().contains("en-gb"));
}

#[test]
fn test_locale_aliases() {
    for code in ["en_US", "EN-GB", "de-AT", "ru-RU"] {
        assert!(LocaleProfile::load(code).is_ok(), "{code} should resolve");
    }
}

// ============================================================================
// Configuration through the pipeline
// ============================================================================

const GROUP_CHAT: &str = "1/2/23, 9:00 AM - Alice created group \"Weekend\"\n\
                          1/2/23, 9:01 AM - Alice: Who is in for Saturday?\n\
                          1/2/23, 9:01 AM - Alice: Hiking maybe\n\
                          1/2/23, 9:30 AM - Bob: <Media omitted>\n\
                          1/3/23, 8:00 PM - Bob: I am in, the the the\n\
                          1/4/23, 7:00 AM - Carol: This message was deleted\n\
                          1/4/23, 7:05 AM - Carol: Count me in";

#[test]
fn test_placeholders_kept_by_default() {
    let analysis = analyzer("en").analyze_str(GROUP_CHAT).unwrap();
    assert_eq!(analysis.placeholder_count, 2);
    assert_eq!(analysis.message_count, 6);
    assert_eq!(analysis.chat_name.as_deref(), Some("Weekend"));
}

#[test]
fn test_skip_placeholders() {
    let analyzer =
        ChatAnalyzer::new(AnalysisConfig::new("en").with_skip_placeholders(true)).unwrap();
    let analysis = analyzer.analyze_str(GROUP_CHAT).unwrap();
    assert_eq!(analysis.message_count, 4);
    assert_eq!(analysis.placeholder_count, 2);
    assert!(!analysis.tables.words.contains_key("<media"));
    assert!(!analysis.tables.words.contains_key("deleted"));
}

#[test]
fn test_word_filter_through_pipeline() {
    let words = WordFilterConfig::new()
        .with_min_length(3)
        .with_stopwords(["the", "this"]);
    let analyzer = ChatAnalyzer::new(
        AnalysisConfig::new("en")
            .with_word_filter(words)
            .with_skip_placeholders(true),
    )
    .unwrap();
    let analysis = analyzer.analyze_str(GROUP_CHAT).unwrap();
    let words = &analysis.tables.words;

    assert!(!words.contains_key("the"));
    assert!(!words.contains_key("am"));
    assert_eq!(words["saturday"], 1);
    assert_eq!(words["hiking"], 1);
}

#[test]
fn test_aliases_merge_authors() {
    let input = "1/2/23, 10:00 AM - Alice Smith: Hello\n\
                 1/2/23, 10:01 AM - Bob: Hi\n\
                 1/2/23, 10:02 AM - Alice: again";
    let analyzer =
        ChatAnalyzer::new(AnalysisConfig::new("en").with_alias("Alice Smith", "Alice")).unwrap();
    let analysis = analyzer.analyze_str(input).unwrap();
    assert_eq!(analysis.tables.authors["Alice"].messages, 2);
    assert!(!analysis.tables.authors.contains_key("Alice Smith"));
    assert_eq!(analysis.tables.starts["Alice"], 2);
}

#[test]
fn test_burst_window_merges_turns() {
    let analyzer = ChatAnalyzer::new(
        AnalysisConfig::new("en").with_burst_window(Duration::from_secs(180)),
    )
    .unwrap();
    let analysis = analyzer.analyze_str(GROUP_CHAT).unwrap();
    // Alice 9:01 + 9:01 and Carol 7:00 + 7:05 (outside the window) stay apart.
    assert_eq!(analysis.tables.authors["Alice"].messages, 1);
    assert_eq!(analysis.tables.authors["Carol"].messages, 2);
}

#[test]
fn test_date_and_author_filters() {
    let filter = FilterConfig::new()
        .with_date_from("2023-01-03")
        .unwrap()
        .with_author("bob");
    let analyzer = ChatAnalyzer::new(AnalysisConfig::new("en").with_filter(filter)).unwrap();
    let analysis = analyzer.analyze_str(GROUP_CHAT).unwrap();
    assert_eq!(analysis.message_count, 1);
    assert_eq!(analysis.tables.authors.keys().collect::<Vec<_>>(), ["Bob"]);
    assert_eq!(analysis.tables.activity.get(Weekday::Tue, 20), 1);
}

#[test]
fn test_out_of_order_timestamps_accepted() {
    let input = "1/3/23, 10:00 AM - Alice: later\n1/2/23, 10:00 AM - Bob: earlier";
    let analysis = analyzer("en").analyze_str(input).unwrap();
    assert_eq!(analysis.out_of_order_count, 1);
    assert_eq!(analysis.message_count, 2);
    assert_eq!(analysis.tables.starts["Alice"], 1);
}

#[test]
fn test_aggregation_strategies_agree() {
    let analyzer = analyzer("en");
    let parsed = analyzer.parse_str(GROUP_CHAT).unwrap();
    let messages = analyzer.prepare_messages(&parsed);
    let words = WordFilterConfig::new().with_min_length(2);

    let single = aggregate(&messages, &words);
    let by_pass = aggregate_by_pass(&messages, &words);
    assert_eq!(single, by_pass);

    #[cfg(feature = "parallel")]
    assert_eq!(single, chatstats::stats::aggregate_parallel(&messages, &words));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_analyze_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, GROUP_CHAT).unwrap();

    let analysis = analyzer("en").analyze_file(&path).unwrap();
    assert_eq!(analysis.entry_count, 7);
    assert_eq!(analysis.locale, "en");
}

#[test]
fn test_crlf_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, EN_SAMPLE.replace('\n', "\r\n")).unwrap();

    let analysis = analyzer("en").analyze_file(&path).unwrap();
    assert_eq!(analysis.tables.authors["Bob"].total_chars, 19);
}

#[test]
fn test_malformed_file_error_names_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(&path, "not a header").unwrap();

    let err = analyzer("en").analyze_file(&path).unwrap_err();
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("broken.txt"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = analyzer("en")
        .analyze_file("/nonexistent/chat.txt")
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_invalid_utf8_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"1/2/23, 10:00 AM - Alice: caf\xe9").unwrap();

    let err = analyzer("en").analyze_file(&path).unwrap_err();
    assert!(matches!(err, ChatstatsError::Utf8 { .. }));
}
