use std::collections::BTreeMap;

use super::Reduction;
use crate::Message;

/// Attributes conversation starts.
///
/// A message starts a conversation when it is the first one observed or its
/// author differs from the previous message's author. Only messages are
/// observed, so system notices between them never affect the comparison.
#[derive(Debug, Default)]
pub struct ConversationStarts {
    previous: Option<String>,
    starts: BTreeMap<String, u64>,
}

impl ConversationStarts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reduction for ConversationStarts {
    type Output = BTreeMap<String, u64>;

    fn observe(&mut self, msg: &Message) {
        if self.previous.as_deref() == Some(msg.author.as_str()) {
            return;
        }
        *self.starts.entry(msg.author.clone()).or_default() += 1;
        self.previous = Some(msg.author.clone());
    }

    fn finish(self) -> Self::Output {
        self.starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn run(authors: &[&str]) -> BTreeMap<String, u64> {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let messages: Vec<_> = authors.iter().map(|a| Message::new(*a, "x", ts)).collect();
        ConversationStarts::new().fold(&messages)
    }

    #[test]
    fn test_first_message_is_start() {
        assert_eq!(run(&["Alice"])["Alice"], 1);
    }

    #[test]
    fn test_same_author_run_is_one_start() {
        let starts = run(&["Alice", "Bob", "Bob", "Bob"]);
        assert_eq!(starts["Alice"], 1);
        assert_eq!(starts["Bob"], 1);
    }

    #[test]
    fn test_alternating_authors() {
        let starts = run(&["Alice", "Bob", "Alice", "Bob", "Alice"]);
        assert_eq!(starts["Alice"], 3);
        assert_eq!(starts["Bob"], 2);
    }

    #[test]
    fn test_empty() {
        assert!(run(&[]).is_empty());
    }
}
