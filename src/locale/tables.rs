//! Registered locale profiles.
//!
//! Each entry is pure data: header patterns, chrono date/time formats and
//! phrase templates (see [`template`](super::template) for the placeholder
//! syntax). Supporting a new export language means adding one [`LocaleSpec`]
//! to [`LOCALES`].
//!
//! Header patterns must define the named groups `date`, `time` and `rest`.

use super::event::{EventSubtype, Placeholder};

/// Timestamp grammar of one export language.
#[derive(Debug, Clone, Copy)]
pub struct TimestampGrammar {
    /// Anchored header regexes, tried in order
    pub header_patterns: &'static [&'static str],
    /// chrono formats for the `date` group, tried in order
    pub date_formats: &'static [&'static str],
    /// chrono formats for the `time` group, tried in order
    pub time_formats: &'static [&'static str],
    /// Localized 12h markers rewritten to `am`/`pm` before parsing
    /// (compared against the lowercased time)
    pub meridiem_markers: &'static [(&'static str, &'static str)],
}

/// Declarative definition of a locale profile.
#[derive(Debug, Clone, Copy)]
pub struct LocaleSpec {
    /// Canonical identifier, e.g. `en-gb`
    pub code: &'static str,
    /// Additional identifiers resolving to this profile
    pub aliases: &'static [&'static str],
    /// Human-readable name
    pub name: &'static str,
    /// Header timestamp grammar
    pub grammar: TimestampGrammar,
    /// Text between author and body on message headers
    pub author_separator: &'static str,
    /// System-event phrase templates, first match wins
    pub system_events: &'static [(EventSubtype, &'static str)],
    /// Placeholder body templates
    pub placeholders: &'static [(Placeholder, &'static str)],
}

// 12h clock with optional seconds and AM/PM marker.
const TIME_12H: &[&str] = &["%I:%M %p", "%I:%M:%S %p", "%H:%M", "%H:%M:%S"];
const TIME_24H: &[&str] = &["%H:%M", "%H:%M:%S"];

const EN_SYSTEM_EVENTS: &[(EventSubtype, &str)] = &[
    (EventSubtype::Encryption, "Messages and calls are end-to-end encrypted.{*}"),
    (EventSubtype::Encryption, "Messages to this group are now secured with end-to-end encryption.{*}"),
    (EventSubtype::Encryption, "Messages to this chat and calls are now secured with end-to-end encryption.{*}"),
    (EventSubtype::GroupCreated, r#"{actor} created group "{title}""#),
    (EventSubtype::GroupCreated, "{actor} created group “{title}”"),
    (EventSubtype::GroupCreated, "{actor} created this group"),
    (EventSubtype::SubjectChanged, r#"{actor} changed the subject from "{*}" to "{title}""#),
    (EventSubtype::SubjectChanged, "{actor} changed the subject from “{*}” to “{title}”"),
    (EventSubtype::SubjectChanged, r#"{actor} changed the subject to "{title}""#),
    (EventSubtype::SubjectChanged, "{actor} changed the subject to “{title}”"),
    (EventSubtype::SubjectChanged, r#"{actor} changed the group name from "{*}" to "{title}""#),
    (EventSubtype::IconChanged, "{actor} changed this group's icon"),
    (EventSubtype::IconChanged, "{actor} changed this group’s icon"),
    (EventSubtype::IconChanged, "{actor} deleted this group's icon"),
    (EventSubtype::IconChanged, "{actor} deleted this group’s icon"),
    (EventSubtype::DescriptionChanged, "{actor} changed the group description"),
    (EventSubtype::DescriptionChanged, "{actor} deleted the group description"),
    (EventSubtype::MemberJoined, "{actor} joined using this group's invite link"),
    (EventSubtype::MemberJoined, "{actor} joined using this group’s invite link"),
    (EventSubtype::MemberJoined, "{actor} joined from the community"),
    (EventSubtype::MemberAdded, "{actor} added {target}"),
    (EventSubtype::MemberRemoved, "{actor} removed {target}"),
    (EventSubtype::MemberLeft, "{actor} left"),
    (EventSubtype::NumberChanged, "{actor} changed their phone number to a new number.{*}"),
    (EventSubtype::NumberChanged, "{actor} changed to {target}"),
    (EventSubtype::SecurityCodeChanged, "Your security code with {actor} changed.{*}"),
    (EventSubtype::AdminChanged, "You're now an admin"),
    (EventSubtype::AdminChanged, "You’re now an admin"),
    (EventSubtype::AdminChanged, "{actor} is now an admin"),
    (EventSubtype::DisappearingMessages, "{actor} turned on disappearing messages.{*}"),
    (EventSubtype::DisappearingMessages, "{actor} turned off disappearing messages.{*}"),
];

const EN_PLACEHOLDERS: &[(Placeholder, &str)] = &[
    (Placeholder::Deleted, "This message was deleted"),
    (Placeholder::Deleted, "You deleted this message"),
    (Placeholder::Media, "<Media omitted>"),
    (Placeholder::Media, "{*}image omitted"),
    (Placeholder::Media, "{*}video omitted"),
    (Placeholder::Media, "{*}audio omitted"),
    (Placeholder::Media, "{*}sticker omitted"),
    (Placeholder::Media, "{*}GIF omitted"),
    (Placeholder::Media, "{*}document omitted"),
];

const DE_SYSTEM_EVENTS: &[(EventSubtype, &str)] = &[
    (EventSubtype::Encryption, "Nachrichten und Anrufe sind Ende-zu-Ende-verschlüsselt.{*}"),
    (EventSubtype::GroupCreated, "{actor} hat die Gruppe „{title}“ erstellt."),
    (EventSubtype::SubjectChanged, "{actor} hat den Betreff von „{*}“ zu „{title}“ geändert."),
    (EventSubtype::SubjectChanged, "{actor} hat den Betreff zu „{title}“ geändert."),
    (EventSubtype::IconChanged, "{actor} hat das Gruppenbild geändert."),
    (EventSubtype::IconChanged, "{actor} hat das Gruppenbild gelöscht."),
    (EventSubtype::DescriptionChanged, "{actor} hat die Gruppenbeschreibung geändert."),
    (EventSubtype::MemberLeft, "{actor} hat die Gruppe verlassen."),
    (EventSubtype::MemberJoined, "{actor} ist über den Einladungslink dieser Gruppe beigetreten."),
    (EventSubtype::MemberAdded, "{actor} hat {target} hinzugefügt."),
    (EventSubtype::MemberRemoved, "{actor} hat {target} entfernt."),
    (EventSubtype::NumberChanged, "{actor} hat die Telefonnummer gewechselt.{*}"),
    (EventSubtype::SecurityCodeChanged, "Deine Sicherheitsnummer für {actor} hat sich geändert.{*}"),
    (EventSubtype::AdminChanged, "Du bist jetzt Admin"),
    (EventSubtype::AdminChanged, "{actor} ist jetzt Admin"),
    (EventSubtype::DisappearingMessages, "{actor} hat selbstlöschende Nachrichten aktiviert.{*}"),
    (EventSubtype::DisappearingMessages, "{actor} hat selbstlöschende Nachrichten deaktiviert.{*}"),
];

const DE_PLACEHOLDERS: &[(Placeholder, &str)] = &[
    (Placeholder::Deleted, "Diese Nachricht wurde gelöscht."),
    (Placeholder::Deleted, "Diese Nachricht wurde gelöscht"),
    (Placeholder::Deleted, "Du hast diese Nachricht gelöscht."),
    (Placeholder::Media, "<Medien ausgeschlossen>"),
    (Placeholder::Media, "<Medien weggelassen>"),
];

const RU_SYSTEM_EVENTS: &[(EventSubtype, &str)] = &[
    (EventSubtype::Encryption, "Сообщения и звонки защищены сквозным шифрованием.{*}"),
    (EventSubtype::GroupCreated, "{actor} создал(а) группу «{title}»"),
    (EventSubtype::GroupCreated, r#"{actor} создал(а) группу "{title}""#),
    (EventSubtype::SubjectChanged, "{actor} изменил(а) тему с «{*}» на «{title}»"),
    (EventSubtype::SubjectChanged, "{actor} изменил(а) тему на «{title}»"),
    (EventSubtype::IconChanged, "{actor} изменил(а) иконку группы"),
    (EventSubtype::IconChanged, "{actor} удалил(а) иконку группы"),
    (EventSubtype::DescriptionChanged, "{actor} изменил(а) описание группы"),
    (EventSubtype::MemberJoined, "{actor} присоединился(-ась) по ссылке-приглашению"),
    (EventSubtype::MemberAdded, "{actor} добавил(а) {target}"),
    (EventSubtype::MemberRemoved, "{actor} удалил(а) {target}"),
    (EventSubtype::MemberLeft, "{actor} вышел(-ла)"),
    (EventSubtype::MemberLeft, "{actor} покинул(а) группу"),
    (EventSubtype::NumberChanged, "{actor} изменил(а) номер телефона.{*}"),
    (EventSubtype::SecurityCodeChanged, "Ваш код безопасности для {actor} изменён.{*}"),
    (EventSubtype::AdminChanged, "Вы теперь администратор"),
    (EventSubtype::AdminChanged, "{actor} теперь администратор"),
    (EventSubtype::DisappearingMessages, "{actor} включил(а) исчезающие сообщения.{*}"),
    (EventSubtype::DisappearingMessages, "{actor} выключил(а) исчезающие сообщения.{*}"),
];

const RU_PLACEHOLDERS: &[(Placeholder, &str)] = &[
    (Placeholder::Deleted, "Данное сообщение удалено"),
    (Placeholder::Deleted, "Вы удалили данное сообщение"),
    (Placeholder::Media, "<Без медиафайлов>"),
];

const ES_SYSTEM_EVENTS: &[(EventSubtype, &str)] = &[
    (EventSubtype::Encryption, "Los mensajes y las llamadas están cifrados de extremo a extremo.{*}"),
    (EventSubtype::GroupCreated, r#"{actor} creó el grupo "{title}""#),
    (EventSubtype::GroupCreated, "{actor} creó el grupo «{title}»"),
    (EventSubtype::SubjectChanged, r#"{actor} cambió el asunto de "{*}" a "{title}""#),
    (EventSubtype::SubjectChanged, r#"{actor} cambió el nombre del grupo de "{*}" a "{title}""#),
    (EventSubtype::IconChanged, "{actor} cambió el ícono de este grupo"),
    (EventSubtype::IconChanged, "{actor} eliminó el ícono de este grupo"),
    (EventSubtype::DescriptionChanged, "{actor} cambió la descripción del grupo"),
    (EventSubtype::MemberJoined, "{actor} se unió usando el enlace de invitación de este grupo"),
    (EventSubtype::MemberAdded, "{actor} añadió a {target}"),
    (EventSubtype::MemberRemoved, "{actor} eliminó a {target}"),
    (EventSubtype::MemberLeft, "{actor} salió del grupo"),
    (EventSubtype::MemberLeft, "{actor} salió"),
    (EventSubtype::SecurityCodeChanged, "Tu código de seguridad con {actor} cambió.{*}"),
    (EventSubtype::AdminChanged, "Ahora eres admin"),
    (EventSubtype::AdminChanged, "{actor} ahora es admin"),
];

const ES_PLACEHOLDERS: &[(Placeholder, &str)] = &[
    (Placeholder::Deleted, "Se eliminó este mensaje."),
    (Placeholder::Deleted, "Eliminaste este mensaje."),
    (Placeholder::Media, "<Multimedia omitido>"),
];

/// All built-in locale profiles.
pub static LOCALES: &[LocaleSpec] = &[
    // 1/2/23, 10:00 AM - Alice: Hello
    // [1/2/23, 10:00:00 AM] Alice: Hello
    LocaleSpec {
        code: "en",
        aliases: &["en-us"],
        name: "English (US)",
        grammar: TimestampGrammar {
            header_patterns: &[
                r"^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),?\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?\s?[Mm]\.?)?)\s-\s(?P<rest>.*)$",
                r"^\[(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),?\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?\s?[Mm]\.?)?)\]\s(?P<rest>.*)$",
            ],
            date_formats: &["%m/%d/%y", "%m/%d/%Y"],
            time_formats: TIME_12H,
            meridiem_markers: &[("a.m.", "am"), ("p.m.", "pm")],
        },
        author_separator: ": ",
        system_events: EN_SYSTEM_EVENTS,
        placeholders: EN_PLACEHOLDERS,
    },
    // 02/01/2023, 10:00 - Alice: Hello
    LocaleSpec {
        code: "en-gb",
        aliases: &["en-in", "en-au"],
        name: "English (UK)",
        grammar: TimestampGrammar {
            header_patterns: &[
                r"^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?)\s-\s(?P<rest>.*)$",
                r"^\[(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?)\]\s(?P<rest>.*)$",
            ],
            date_formats: &["%d/%m/%y", "%d/%m/%Y"],
            time_formats: TIME_24H,
            meridiem_markers: &[],
        },
        author_separator: ": ",
        system_events: EN_SYSTEM_EVENTS,
        placeholders: EN_PLACEHOLDERS,
    },
    // 02.01.23, 10:00 - Alice: Hallo
    LocaleSpec {
        code: "de",
        aliases: &["de-de", "de-at", "de-ch"],
        name: "Deutsch",
        grammar: TimestampGrammar {
            header_patterns: &[
                r"^(?P<date>\d{1,2}\.\d{1,2}\.\d{2,4}),\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?)\s-\s(?P<rest>.*)$",
                r"^\[(?P<date>\d{1,2}\.\d{1,2}\.\d{2,4}),\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?)\]\s(?P<rest>.*)$",
            ],
            date_formats: &["%d.%m.%y", "%d.%m.%Y"],
            time_formats: TIME_24H,
            meridiem_markers: &[],
        },
        author_separator: ": ",
        system_events: DE_SYSTEM_EVENTS,
        placeholders: DE_PLACEHOLDERS,
    },
    // 02.01.2023, 10:00 - Alice: Привет
    LocaleSpec {
        code: "ru",
        aliases: &["ru-ru"],
        name: "Русский",
        grammar: TimestampGrammar {
            header_patterns: &[
                r"^(?P<date>\d{1,2}\.\d{1,2}\.\d{2,4}),\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?)\s-\s(?P<rest>.*)$",
                r"^\[(?P<date>\d{1,2}\.\d{1,2}\.\d{2,4}),\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?)\]\s(?P<rest>.*)$",
            ],
            date_formats: &["%d.%m.%y", "%d.%m.%Y"],
            time_formats: TIME_24H,
            meridiem_markers: &[],
        },
        author_separator: ": ",
        system_events: RU_SYSTEM_EVENTS,
        placeholders: RU_PLACEHOLDERS,
    },
    // 2/1/23, 10:00 a. m. - Alice: Hola
    LocaleSpec {
        code: "es",
        aliases: &["es-es", "es-mx"],
        name: "Español",
        grammar: TimestampGrammar {
            header_patterns: &[
                r"^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),?\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?\s?[Mm]\.?)?)\s-\s(?P<rest>.*)$",
                r"^\[(?P<date>\d{1,2}/\d{1,2}/\d{2,4}),?\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?\s?[Mm]\.?)?)\]\s(?P<rest>.*)$",
            ],
            date_formats: &["%d/%m/%y", "%d/%m/%Y"],
            time_formats: TIME_12H,
            meridiem_markers: &[("a. m.", "am"), ("p. m.", "pm"), ("a.m.", "am"), ("p.m.", "pm")],
        },
        author_separator: ": ",
        system_events: ES_SYSTEM_EVENTS,
        placeholders: ES_PLACEHOLDERS,
    },
];
