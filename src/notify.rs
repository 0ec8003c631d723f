//! Turning outcomes into responses, and delivering them

use crate::{
    action::{Action, ActionKind, Outcome},
    args::ArgError,
    permission::{Actor, Capability, Target},
    platform::Platform,
    response::{PrivateNote, Reply, Response},
};
use serenity::all::{ChannelId, UserId};
use tracing::{debug, warn};

const ERROR_TITLE: &str = "Error!";

pub fn outcome_response(
    kind: ActionKind,
    outcome: &Outcome,
    actor: &Actor,
    target: Option<&str>,
) -> Response {
    let target = target.unwrap_or("<unknown-user>");

    match outcome {
        Outcome::Success(Action::Kicked { reason }) => Response::success()
            .title("User Kicked!")
            .description(format!("**{}** was kicked by **{}**!", target, actor.name))
            .field("Reason:", reason, false),
        Outcome::Success(Action::Banned { reason }) => Response::success()
            .title("User Banned!")
            .description(format!("**{}** was banned by **{}**!", target, actor.name))
            .field("Reason:", reason, false),
        Outcome::Success(Action::Nicknamed { nickname: Some(nickname) }) => Response::success()
            .title("Changed Nickname!")
            .description(format!("**{}'s** new nickname is **{}**!", target, nickname)),
        Outcome::Success(Action::Nicknamed { nickname: None }) => Response::success()
            .title("Changed Nickname!")
            .description(format!("**{}'s** nickname was reset!", target)),
        Outcome::Success(Action::Warned { reason }) => Response::success()
            .title("User Warned!")
            .description(format!("**{}** was warned by **{}**!", target, actor.name))
            .field("Reason:", reason, false),
        Outcome::Success(Action::Purged { deleted }) => Response::success()
            .title("Chat Cleared!")
            .description(format!("**{}** cleared **{}** messages!", actor.name, deleted)),
        Outcome::Forbidden => Response::error()
            .title(ERROR_TITLE)
            .description("User has Admin permissions."),
        Outcome::RemoteFailure => Response::error()
            .title(ERROR_TITLE)
            .description(remote_failure_hint(kind)),
        Outcome::InvalidArgument(arg) if kind == ActionKind::Purge => Response::error()
            .title(ERROR_TITLE)
            .description(format!("`{}` is not a valid number.", arg)),
        Outcome::InvalidArgument(arg) => Response::error()
            .title(ERROR_TITLE)
            .description(format!("`{}` is not a valid argument.", arg)),
    }
}

// Never includes the platform's own error text
fn remote_failure_hint(kind: ActionKind) -> String {
    let (action, verb) = match kind {
        ActionKind::Kick => ("kick the user", "kick"),
        ActionKind::Ban => ("ban the user", "ban"),
        ActionKind::Nick => ("change the nickname of the user", "change the nickname"),
        ActionKind::Warn => ("warn the user", "warn"),
        ActionKind::Purge => {
            return "An error occurred while trying to delete messages. Make sure I have the \
                    permission to manage messages in this channel."
                .to_owned()
        }
    };

    format!(
        "An error occurred while trying to {action}. Make sure my role is above the role of the \
         user you want to {verb}."
    )
}

/// Direct message to the affected member, for actions that warrant one
pub fn private_note(outcome: &Outcome, actor: &Actor, user_id: UserId) -> Option<PrivateNote> {
    let (verb, reason) = match outcome {
        Outcome::Success(Action::Kicked { reason }) => ("kicked", reason),
        Outcome::Success(Action::Banned { reason }) => ("banned", reason),
        Outcome::Success(Action::Warned { reason }) => ("warned", reason),
        _ => return None,
    };

    Some(PrivateNote {
        user_id,
        text: format!(
            "You were {} by **{}**!\nReason: {}",
            verb, actor.name, reason
        ),
    })
}

/// Channel response plus the private note to the target
pub fn moderation_reply(
    kind: ActionKind,
    outcome: &Outcome,
    actor: &Actor,
    target: &Target,
) -> Reply {
    Reply::from(outcome_response(kind, outcome, actor, Some(&target.name)))
        .with_private(private_note(outcome, actor, target.id))
}

pub fn argument_error(err: &ArgError) -> Response {
    Response::error().title(ERROR_TITLE).description(err.to_string())
}

pub fn missing_capabilities(missing: &[Capability]) -> Response {
    let labels = missing
        .iter()
        .map(|capability| format!("`{}`", capability.label()))
        .collect::<Vec<_>>()
        .join(", ");

    Response::error().title(ERROR_TITLE).description(format!(
        "You are missing the permission(s) {} to execute this command!",
        labels
    ))
}

pub fn guild_only() -> Response {
    Response::error()
        .title(ERROR_TITLE)
        .description("This command can only be used in a server.")
}

pub fn unexpected_error() -> Response {
    Response::error()
        .title(ERROR_TITLE)
        .description("An unexpected error occurred while running this command.")
}

/// Post the primary response.  Delivery failures are logged and dropped.
pub async fn deliver(platform: &dyn Platform, channel_id: ChannelId, response: &Response) {
    if let Err(err) = platform.send_message(channel_id, response).await {
        warn!(%channel_id, error = %err, "Could not deliver response");
    }
}

/// Attempt a private message.  Returns whether it arrived; failure is never an error.
pub async fn deliver_private(platform: &dyn Platform, note: &PrivateNote) -> bool {
    match platform.send_direct_message(note.user_id, &note.text).await {
        Ok(()) => true,
        Err(err) => {
            // Typically the user has direct messages disabled
            debug!(user_id = %note.user_id, error = %err, "Private message not delivered");
            false
        }
    }
}
