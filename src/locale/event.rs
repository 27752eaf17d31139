//! System-event and placeholder vocabulary shared by every locale.

use serde::{Deserialize, Serialize};

/// Kind of non-conversational entry recognized by a locale's phrase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EventSubtype {
    /// End-to-end encryption notice at the top of an export
    Encryption,
    /// Group was created (carries the initial title)
    GroupCreated,
    /// Group subject/name was changed (carries the new title)
    SubjectChanged,
    /// Someone added one or more members
    MemberAdded,
    /// Someone removed a member
    MemberRemoved,
    /// A member left
    MemberLeft,
    /// A member joined via invite link or community
    MemberJoined,
    /// Group icon was changed or deleted
    IconChanged,
    /// Group description was changed or deleted
    DescriptionChanged,
    /// A member changed their phone number
    NumberChanged,
    /// Security code with a contact changed
    SecurityCodeChanged,
    /// Admin rights were granted
    AdminChanged,
    /// Disappearing messages were turned on or off
    DisappearingMessages,
    /// An author-less entry that matched no phrase template
    Unrecognized,
}

impl EventSubtype {
    /// Returns `true` for subtypes that carry a chat title.
    pub fn sets_title(self) -> bool {
        matches!(self, EventSubtype::GroupCreated | EventSubtype::SubjectChanged)
    }
}

impl std::fmt::Display for EventSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventSubtype::Encryption => "encryption notice",
            EventSubtype::GroupCreated => "group created",
            EventSubtype::SubjectChanged => "subject changed",
            EventSubtype::MemberAdded => "member added",
            EventSubtype::MemberRemoved => "member removed",
            EventSubtype::MemberLeft => "member left",
            EventSubtype::MemberJoined => "member joined",
            EventSubtype::IconChanged => "icon changed",
            EventSubtype::DescriptionChanged => "description changed",
            EventSubtype::NumberChanged => "number changed",
            EventSubtype::SecurityCodeChanged => "security code changed",
            EventSubtype::AdminChanged => "admin changed",
            EventSubtype::DisappearingMessages => "disappearing messages",
            EventSubtype::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// Result of matching a system-event phrase template.
///
/// Captured fields are `None` when the template has no such placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMatch {
    /// Which phrase family matched
    pub subtype: EventSubtype,
    /// Who performed the action (`{actor}`)
    pub actor: Option<String>,
    /// Who the action was performed on (`{target}`)
    pub target: Option<String>,
    /// New chat title (`{title}`)
    pub title: Option<String>,
}

impl EventMatch {
    /// Creates a match with no captured fields.
    pub fn new(subtype: EventSubtype) -> Self {
        Self {
            subtype,
            actor: None,
            target: None,
            title: None,
        }
    }
}

/// Message bodies the exporting app substitutes for content it left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// "This message was deleted"
    Deleted,
    /// "<Media omitted>" and per-type variants
    Media,
}

impl Placeholder {
    /// Lowercase tag, as used in records.
    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::Deleted => "deleted",
            Placeholder::Media => "media",
        }
    }
}
