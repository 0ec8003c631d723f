use crate::{
    action::{ActionKind, Executor},
    command::*,
    notify,
};
use anyhow::Result;

pub struct Nick;

#[serenity::async_trait]
impl Command for Nick {
    fn name(&self) -> &'static str {
        "nick"
    }

    fn required(&self) -> &'static [Capability] {
        &[Capability::ManageNicknames]
    }

    fn usage(&self) -> &'static str {
        "nick <member> [nickname] - change a member's nickname, or reset it if none is given"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let guild_id = invocation.guild()?;
        let (target, nickname) = match resolve_target(ctx, invocation).await? {
            Ok(found) => found,
            Err(err) => return Ok(notify::argument_error(&err).into()),
        };

        let nickname = Some(nickname).filter(|nickname| !nickname.is_empty());
        let outcome = Executor::new(ctx.platform)
            .set_nickname(guild_id, &target, nickname)
            .await;

        Ok(notify::moderation_reply(
            ActionKind::Nick,
            &outcome,
            &invocation.actor,
            &target,
        ))
    }
}
