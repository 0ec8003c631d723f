use crate::{
    action::{ActionKind, Executor},
    args::{or_default, DEFAULT_REASON},
    command::*,
    notify,
};
use anyhow::Result;

pub struct Kick;

#[serenity::async_trait]
impl Command for Kick {
    fn name(&self) -> &'static str {
        "kick"
    }

    fn required(&self) -> &'static [Capability] {
        &[Capability::KickMembers]
    }

    fn usage(&self) -> &'static str {
        "kick <member> [reason] - kick a member out of the server"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let guild_id = invocation.guild()?;
        let (target, reason) = match resolve_target(ctx, invocation).await? {
            Ok(found) => found,
            Err(err) => return Ok(notify::argument_error(&err).into()),
        };

        let reason = or_default(reason, DEFAULT_REASON);
        let outcome = Executor::new(ctx.platform)
            .kick(guild_id, &target, reason)
            .await;

        Ok(notify::moderation_reply(
            ActionKind::Kick,
            &outcome,
            &invocation.actor,
            &target,
        ))
    }
}
