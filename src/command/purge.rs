use crate::{
    action::{ActionKind, Executor},
    command::*,
    notify,
};
use anyhow::Result;

pub struct Purge;

#[serenity::async_trait]
impl Command for Purge {
    fn name(&self) -> &'static str {
        "purge"
    }

    fn required(&self) -> &'static [Capability] {
        &[Capability::ManageMessages, Capability::ManageChannels]
    }

    fn usage(&self) -> &'static str {
        "purge <amount> - delete the most recent messages in this channel"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let Some((amount, _)) = split_first(&invocation.args) else {
            return Ok(notify::argument_error(&ArgError::Missing("amount")).into());
        };

        let limit = ctx.cfg.moderation.purge_limit;
        let outcome = Executor::new(ctx.platform)
            .purge(invocation.channel_id, amount, limit)
            .await;

        Ok(notify::outcome_response(ActionKind::Purge, &outcome, &invocation.actor, None).into())
    }
}
