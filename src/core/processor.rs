//! Message post-processing: burst merging and run statistics.

use std::time::Duration;

use chrono::TimeDelta;

use crate::Message;

/// Merges consecutive messages from the same author sent within `window`
/// of the previous message into a single message.
///
/// The merged message keeps the first message's timestamp, joins bodies with
/// `\n` and widens the source line span. Placeholder tags survive only if
/// every merged part carried the same tag. A gap is measured from the last
/// merged part, so a steady stream of short messages becomes one burst.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use chatstats::Message;
/// use chatstats::core::merge_bursts;
/// use chrono::NaiveDate;
///
/// let at = |m| NaiveDate::from_ymd_opt(2023, 1, 2).unwrap().and_hms_opt(10, m, 0).unwrap();
/// let messages = vec![
///     Message::new("Alice", "Hi", at(0)),
///     Message::new("Alice", "How are you?", at(1)),
///     Message::new("Bob", "Fine", at(2)),
/// ];
///
/// let merged = merge_bursts(messages, Duration::from_secs(120));
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].body, "Hi\nHow are you?");
/// ```
pub fn merge_bursts(messages: Vec<Message>, window: Duration) -> Vec<Message> {
    let window = TimeDelta::from_std(window).unwrap_or(TimeDelta::MAX);
    let mut merged: Vec<Message> = Vec::with_capacity(messages.len());
    let mut last_seen = None;

    for msg in messages {
        let ts = msg.timestamp;
        match merged.last_mut() {
            Some(last)
                if last.author == msg.author
                    && last_seen.is_some_and(|prev| ts >= prev && ts - prev <= window) =>
            {
                last.body.push('\n');
                last.body.push_str(&msg.body);
                if last.placeholder != msg.placeholder {
                    last.placeholder = None;
                }
                if let (Some(span), Some(next)) = (last.lines.as_mut(), msg.lines) {
                    span.last = next.last;
                }
            }
            _ => merged.push(msg),
        }
        last_seen = Some(ts);
    }

    merged
}

/// Statistics about a burst-merging pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Messages before merging
    pub original_count: usize,
    /// Messages after merging
    pub merged_count: usize,
}

impl ProcessingStats {
    /// Percentage of messages absorbed into a preceding burst.
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (1.0 - (self.merged_count as f64 / self.original_count as f64)) * 100.0
    }
}

/// Runs [`merge_bursts`] and reports how many messages were absorbed.
pub fn merge_with_stats(messages: Vec<Message>, window: Duration) -> (Vec<Message>, ProcessingStats) {
    let original_count = messages.len();
    let merged = merge_bursts(messages, window);
    let stats = ProcessingStats {
        original_count,
        merged_count: merged.len(),
    };
    tracing::debug!(
        original = stats.original_count,
        merged = stats.merged_count,
        "merged message bursts"
    );
    (merged, stats)
}
