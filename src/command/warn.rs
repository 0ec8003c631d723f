use crate::{
    action::{ActionKind, Executor},
    args::{or_default, DEFAULT_REASON},
    command::*,
    notify,
};
use anyhow::Result;

pub struct Warn;

#[serenity::async_trait]
impl Command for Warn {
    fn name(&self) -> &'static str {
        "warn"
    }

    fn required(&self) -> &'static [Capability] {
        &[Capability::ManageMessages]
    }

    fn usage(&self) -> &'static str {
        "warn <member> [reason] - warn a member in their private messages"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let (target, reason) = match resolve_target(ctx, invocation).await? {
            Ok(found) => found,
            Err(err) => return Ok(notify::argument_error(&err).into()),
        };

        let reason = or_default(reason, DEFAULT_REASON);
        let outcome = Executor::new(ctx.platform).warn(&target, reason);

        // The dispatcher sends the private note after the channel response, and drops any
        // failure to deliver it.
        Ok(notify::moderation_reply(
            ActionKind::Warn,
            &outcome,
            &invocation.actor,
            &target,
        ))
    }
}
