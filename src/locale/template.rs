//! Phrase templates compiled to anchored regular expressions.
//!
//! A template is literal text with placeholders:
//!
//! | Placeholder | Matches |
//! |-------------|---------|
//! | `{actor}` | a display name (never contains `:`) |
//! | `{target}` | rest-of-phrase names, captured |
//! | `{title}` | any text, captured |
//! | `{*}` | any text, discarded |
//!
//! Matching is case-insensitive and spans the whole input line.

use regex::Regex;

const ACTOR: &str = r"(?P<actor>[^:\n]+?)";
const TARGET: &str = r"(?P<target>.+?)";
const TITLE: &str = r"(?P<title>.*)";
const WILDCARD: &str = r".*";

/// Translates a phrase template into a regex pattern string.
///
/// Unknown `{...}` sequences are kept as literal text.
pub fn template_pattern(template: &str) -> String {
    let mut pattern = String::from("(?i)^");
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open..].find('}') else {
            break;
        };
        let group = match &rest[open + 1..open + len] {
            "actor" => Some(ACTOR),
            "target" => Some(TARGET),
            "title" => Some(TITLE),
            "*" => Some(WILDCARD),
            _ => None,
        };

        match group {
            Some(group) => {
                pattern.push_str(&regex::escape(&rest[..open]));
                pattern.push_str(group);
                rest = &rest[open + len + 1..];
            }
            None => {
                pattern.push_str(&regex::escape(&rest[..=open]));
                rest = &rest[open + 1..];
            }
        }
    }

    pattern.push_str(&regex::escape(rest));
    pattern.push('$');
    pattern
}

/// Compiles a phrase template.
pub fn compile_template(template: &str) -> Result<Regex, regex::Error> {
    Regex::new(&template_pattern(template))
}
