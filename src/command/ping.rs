use crate::{command::*, response::Response};
use anyhow::Result;

pub struct Ping;

#[serenity::async_trait]
impl Command for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn usage(&self) -> &'static str {
        "ping - check if the bot is alive"
    }

    async fn run(&self, ctx: &Context<'_>, _invocation: &Invocation) -> Result<Reply> {
        // No heartbeat has been acknowledged right after connecting
        let description = match ctx.platform.latency().await {
            Some(latency) => format!("The bot latency is {}ms.", latency.as_millis()),
            None => "The bot latency is unknown.".to_owned(),
        };

        Ok(Response::success()
            .title("🏓 Pong!")
            .description(description)
            .into())
    }
}
