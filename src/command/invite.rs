use crate::{
    command::*,
    notify,
    response::{PrivateNote, Response},
};
use anyhow::Result;

/// Permissions the bot asks for when invited
const INVITE_PERMISSIONS: u64 = 470150263;

pub struct Invite;

#[serenity::async_trait]
impl Command for Invite {
    fn name(&self) -> &'static str {
        "invite"
    }

    fn usage(&self) -> &'static str {
        "invite - get a link to invite the bot to your server"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let link = format!(
            "https://discordapp.com/oauth2/authorize?&client_id={}&scope=bot&permissions={}",
            ctx.cfg.general.application_id, INVITE_PERMISSIONS
        );

        let text = format!("Invite me by clicking [here]({}).", link);
        Ok(privately_or_here(ctx, invocation, text).await)
    }
}

/// Send `text` to the invoking user privately.  If their direct messages are closed, post it in
/// the channel instead.
pub(super) async fn privately_or_here(
    ctx: &Context<'_>,
    invocation: &Invocation,
    text: String,
) -> Reply {
    let note = PrivateNote {
        user_id: invocation.actor.id,
        text,
    };

    if notify::deliver_private(ctx.platform, &note).await {
        Response::info()
            .description("I sent you a private message!")
            .into()
    } else {
        Response::info().description(note.text).into()
    }
}
