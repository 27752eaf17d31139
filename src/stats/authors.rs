use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Reduction;
use crate::Message;

/// Message count and body length for one author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
    /// Messages sent
    pub messages: u64,
    /// Sum of body lengths in characters
    pub total_chars: u64,
    /// `total_chars / messages`
    pub average_length: f64,
}

/// Counts messages and body characters per author.
///
/// Authors are grouped by exact display-name equality.
#[derive(Debug, Default)]
pub struct AuthorTally {
    totals: BTreeMap<String, (u64, u64)>,
}

impl AuthorTally {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reduction for AuthorTally {
    type Output = BTreeMap<String, AuthorStats>;

    fn observe(&mut self, msg: &Message) {
        let (count, chars) = self.totals.entry(msg.author.clone()).or_default();
        *count += 1;
        *chars += msg.body_len() as u64;
    }

    fn finish(self) -> Self::Output {
        self.totals
            .into_iter()
            .map(|(author, (messages, total_chars))| {
                let stats = AuthorStats {
                    messages,
                    total_chars,
                    average_length: total_chars as f64 / messages as f64,
                };
                (author, stats)
            })
            .collect()
    }
}
