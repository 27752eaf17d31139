//! Event filter: separating conversational messages from system notices.
//!
//! Reconstructed [`Entry`] values are relabelled into [`ChatItem`]s:
//!
//! | Entry | Matches a phrase template | Result |
//! |-------|---------------------------|--------|
//! | with author | no | [`ChatItem::Message`] |
//! | with author | yes | [`ChatItem::SystemEvent`] |
//! | without author | yes | [`ChatItem::SystemEvent`] |
//! | without author | no | [`ChatItem::SystemEvent`] ([`EventSubtype::Unrecognized`]) |
//!
//! The phrase is matched against the header text as exported (author and
//! separator included), so a notice whose wording happens to contain the
//! author separator is still recognized while ordinary messages never match.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::locale::{EventMatch, EventSubtype, LocaleProfile};
use crate::parsing::{Entry, LineSpan};

/// A non-conversational entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemEvent {
    /// Header timestamp
    pub timestamp: NaiveDateTime,
    /// Which phrase family matched
    pub subtype: EventSubtype,
    /// Who performed the action, when the phrase names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Who the action targeted, when the phrase names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Chat title carried by created/renamed notices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Full notice text
    pub text: String,
    /// Source lines
    pub lines: LineSpan,
}

/// An entry after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatItem {
    /// Conversational message
    Message(Message),
    /// System notice
    SystemEvent(SystemEvent),
}

impl ChatItem {
    /// Returns the message, if this item is one.
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            ChatItem::Message(msg) => Some(msg),
            ChatItem::SystemEvent(_) => None,
        }
    }

    /// Returns the system event, if this item is one.
    pub fn as_system_event(&self) -> Option<&SystemEvent> {
        match self {
            ChatItem::Message(_) => None,
            ChatItem::SystemEvent(event) => Some(event),
        }
    }

    /// Header timestamp of the underlying entry.
    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            ChatItem::Message(msg) => msg.timestamp,
            ChatItem::SystemEvent(event) => event.timestamp,
        }
    }
}

/// Relabels entries using a locale profile's phrase tables.
#[derive(Debug, Clone)]
pub struct EventFilter<'a> {
    profile: &'a LocaleProfile,
    aliases: Option<&'a BTreeMap<String, String>>,
}

impl<'a> EventFilter<'a> {
    /// Creates a filter for `profile`.
    pub fn new(profile: &'a LocaleProfile) -> Self {
        Self {
            profile,
            aliases: None,
        }
    }

    /// Maps message authors through `aliases` (exported name → canonical name).
    #[must_use]
    pub fn with_aliases(mut self, aliases: &'a BTreeMap<String, String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Classifies one entry.
    pub fn classify(&self, entry: Entry) -> ChatItem {
        let text = entry.event_text(self.profile.author_separator()).into_owned();
        let Some(m) = self.profile.classify_system_event(&text) else {
            return self.classify_unmatched(entry);
        };
        ChatItem::SystemEvent(system_event(m, text, entry.timestamp, entry.lines))
    }

    fn classify_unmatched(&self, entry: Entry) -> ChatItem {
        match entry.author {
            Some(author) => {
                let author = self.canonical_author(author);
                let mut msg =
                    Message::new(author, entry.body, entry.timestamp).with_lines(entry.lines);
                if let Some(placeholder) = self.profile.classify_placeholder(&msg.body) {
                    msg = msg.with_placeholder(placeholder);
                }
                ChatItem::Message(msg)
            }
            None => ChatItem::SystemEvent(system_event(
                EventMatch::new(EventSubtype::Unrecognized),
                entry.body,
                entry.timestamp,
                entry.lines,
            )),
        }
    }

    /// Classifies every entry, preserving order.
    pub fn classify_all(&self, entries: Vec<Entry>) -> Vec<ChatItem> {
        entries.into_iter().map(|entry| self.classify(entry)).collect()
    }

    fn canonical_author(&self, author: String) -> String {
        self.aliases
            .and_then(|aliases| aliases.get(&author))
            .cloned()
            .unwrap_or(author)
    }
}

fn system_event(m: EventMatch, text: String, timestamp: NaiveDateTime, lines: LineSpan) -> SystemEvent {
    SystemEvent {
        timestamp,
        subtype: m.subtype,
        actor: m.actor,
        target: m.target,
        title: m.title,
        text,
        lines,
    }
}

/// Collects the messages of a classified sequence, preserving order.
pub fn messages(items: &[ChatItem]) -> Vec<Message> {
    items
        .iter()
        .filter_map(ChatItem::as_message)
        .cloned()
        .collect()
}

/// Title set by the last created/renamed notice, if any.
pub fn latest_title(items: &[ChatItem]) -> Option<&str> {
    items
        .iter()
        .filter_map(ChatItem::as_system_event)
        .filter(|event| event.subtype.sets_title())
        .filter_map(|event| event.title.as_deref())
        .next_back()
}
