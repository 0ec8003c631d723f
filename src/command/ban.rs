use crate::{
    action::{ActionKind, Executor},
    args::{or_default, DEFAULT_REASON},
    command::*,
    notify,
};
use anyhow::Result;

pub struct Ban;

#[serenity::async_trait]
impl Command for Ban {
    fn name(&self) -> &'static str {
        "ban"
    }

    fn required(&self) -> &'static [Capability] {
        &[Capability::BanMembers]
    }

    fn usage(&self) -> &'static str {
        "ban <member> [reason] - ban a member from the server"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let guild_id = invocation.guild()?;
        let (target, reason) = match resolve_target(ctx, invocation).await? {
            Ok(found) => found,
            Err(err) => return Ok(notify::argument_error(&err).into()),
        };

        let reason = or_default(reason, DEFAULT_REASON);
        let outcome = Executor::new(ctx.platform)
            .ban(guild_id, &target, reason)
            .await;

        Ok(notify::moderation_reply(
            ActionKind::Ban,
            &outcome,
            &invocation.actor,
            &target,
        ))
    }
}
