//! Synthetic chat export generator for stress testing chatstats.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [locale]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt de

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "+1 555 0100",
    "🔥FireUser🔥",
    "Name With: Colon",
];

const EMOJIS: &[&str] = &["😀", "😂", "🤔", "🔥", "👍", "❤️", "🏳️‍🌈", "👨‍👩‍👧‍👦", "🤷‍♀️"];

/// Header and phrase shapes of one export language.
struct Dialect {
    header: fn(NaiveDateTime) -> String,
    added: &'static str,
    left: &'static str,
    media: &'static str,
    deleted: &'static str,
}

fn dialect(locale: &str) -> Option<Dialect> {
    match locale {
        "en" => Some(Dialect {
            header: |ts| ts.format("%-m/%-d/%y, %-I:%M %p").to_string(),
            added: "{a} added {b}",
            left: "{a} left",
            media: "<Media omitted>",
            deleted: "This message was deleted",
        }),
        "en-gb" => Some(Dialect {
            header: |ts| ts.format("%d/%m/%Y, %H:%M").to_string(),
            added: "{a} added {b}",
            left: "{a} left",
            media: "<Media omitted>",
            deleted: "This message was deleted",
        }),
        "de" => Some(Dialect {
            header: |ts| ts.format("%d.%m.%y, %H:%M").to_string(),
            added: "{a} hat {b} hinzugefügt.",
            left: "{a} hat die Gruppe verlassen.",
            media: "<Medien ausgeschlossen>",
            deleted: "Diese Nachricht wurde gelöscht.",
        }),
        "ru" => Some(Dialect {
            header: |ts| ts.format("%d.%m.%Y, %H:%M").to_string(),
            added: "{a} добавил(а) {b}",
            left: "{a} вышел(-ла)",
            media: "<Без медиафайлов>",
            deleted: "Данное сообщение удалено",
        }),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let locale = args.get(3).map_or("en", String::as_str);

    let Some(dialect) = dialect(locale) else {
        eprintln!("Unknown locale: {locale}. Use en, en-gb, de or ru");
        std::process::exit(1);
    };

    println!("🧪 Chat export generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Locale:   {}", locale);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut ts = NaiveDate::from_ymd_opt(2023, 1, 2)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default();

    for i in 0..count {
        ts += Duration::seconds(rng.gen_range(5..3_600));
        let author = AUTHORS.choose(&mut rng).copied().unwrap_or("Alice");
        let line = match i % 50 {
            17 => {
                let target = AUTHORS.choose(&mut rng).copied().unwrap_or("Bob");
                let text = dialect.added.replace("{a}", author).replace("{b}", target);
                format!("{} - {}\n", (dialect.header)(ts), text)
            }
            33 => format!(
                "{} - {}\n",
                (dialect.header)(ts),
                dialect.left.replace("{a}", author)
            ),
            _ => format!(
                "{} - {}: {}\n",
                (dialect.header)(ts),
                author,
                message_body(&mut rng, i, &dialect)
            ),
        };
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn message_body(rng: &mut impl Rng, index: usize, dialect: &Dialect) -> String {
    match index % 20 {
        0..=7 => format!("Normal message #{} with some text", index),
        8 => format!("Multi-line message #{}\nsecond line\n\nfourth line", index),
        9 => {
            let emojis: Vec<&str> = (0..20)
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("Emoji spam: {} #{}", emojis.concat(), index)
        }
        10 => format!("Punctuation!!! Does it... strip? (yes) #{}", index),
        11 => dialect.media.to_string(),
        12 => dialect.deleted.to_string(),
        13 => format!("Кириллица: Привет мир! #{}", index),
        14 => format!("日本語: こんにちは #{}", index),
        15 => format!("Quoted header inside a body:\n1/1/23, 9:00 AM - Carol: hi #{}", index),
        16 => {
            let padding = "word ".repeat(rng.gen_range(100..2_000));
            format!("Long message #{}: {}", index, padding.trim_end())
        }
        17 => String::new(),
        18 => format!("Question? #{}", index),
        _ => format!("Fallback message #{}", index),
    }
}
