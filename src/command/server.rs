use crate::command::{invite::privately_or_here, *};
use anyhow::Result;

/// Link to the bot's support server
pub struct Server;

#[serenity::async_trait]
impl Command for Server {
    fn name(&self) -> &'static str {
        "server"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["support", "supportserver"]
    }

    fn usage(&self) -> &'static str {
        "server - get a link to the bot's support server"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let text = format!(
            "Join the support server for the bot by clicking [here]({}).",
            ctx.cfg.about.support_invite
        );

        Ok(privately_or_here(ctx, invocation, text).await)
    }
}
