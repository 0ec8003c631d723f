//! Splitting the raw argument tail of a command

use serenity::all::UserId;

/// Used when a moderation command is given no reason
pub const DEFAULT_REASON: &str = "Not specified";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("`{0}` is a required argument that is missing.")]
    Missing(&'static str),
    #[error("Member `{0}` not found.")]
    MemberNotFound(String),
}

/// Splits off the first whitespace-delimited token.  The remainder is trimmed.
pub fn split_first(args: &str) -> Option<(&str, &str)> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }

    match args.split_once(char::is_whitespace) {
        Some((first, rest)) => Some((first, rest.trim())),
        None => Some((args, "")),
    }
}

/// Accepts a user mention (`<@123>`, `<@!123>`) or a bare id.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    let digits = raw
        .strip_prefix("<@")
        .and_then(|s| s.strip_suffix('>'))
        .map(|s| s.strip_prefix('!').unwrap_or(s))
        .unwrap_or(raw);

    // Ids are never zero, and `UserId::new` panics on it
    digits
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
}

/// `text`, or `default` if the user left it out
pub fn or_default<'a>(text: &'a str, default: &'a str) -> &'a str {
    if text.is_empty() {
        default
    } else {
        text
    }
}
