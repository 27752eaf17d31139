use std::collections::BTreeMap;

use super::Reduction;
use crate::Message;
use crate::config::WordFilterConfig;

/// Splits `body` into the normalized tokens counted by [`WordFrequency`].
pub fn tokenize<'a>(
    body: &'a str,
    config: &'a WordFilterConfig,
) -> impl Iterator<Item = String> + 'a {
    body.split_whitespace().filter_map(move |raw| {
        let token = raw
            .trim_matches(|c| config.is_punctuation(c))
            .to_lowercase();
        let keep = !token.is_empty()
            && token.chars().count() >= config.min_length
            && !config.stopwords.contains(&token);
        keep.then_some(token)
    })
}

/// Counts word occurrences across message bodies.
#[derive(Debug)]
pub struct WordFrequency<'a> {
    config: &'a WordFilterConfig,
    counts: BTreeMap<String, u64>,
}

impl<'a> WordFrequency<'a> {
    pub fn new(config: &'a WordFilterConfig) -> Self {
        Self {
            config,
            counts: BTreeMap::new(),
        }
    }
}

impl Reduction for WordFrequency<'_> {
    type Output = BTreeMap<String, u64>;

    fn observe(&mut self, msg: &Message) {
        for token in tokenize(&msg.body, self.config) {
            *self.counts.entry(token).or_default() += 1;
        }
    }

    fn finish(self) -> Self::Output {
        self.counts
    }
}
