use crate::{command::*, response::Response};
use anyhow::Result;

pub struct Info;

#[serenity::async_trait]
impl Command for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["botinfo"]
    }

    fn usage(&self) -> &'static str {
        "info - show information about the bot"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let cfg = ctx.cfg;

        Ok(Response::success()
            .author("Bot Information")
            .description(&cfg.about.description)
            .field("Creators:", &cfg.about.creators, true)
            .field("Bot version:", env!("CARGO_PKG_VERSION"), true)
            .field("Bot usage prefix:", &cfg.general.command_prefix, false)
            .footer(format!(
                "This info was requested by {}",
                invocation.actor.name
            ))
            .into())
    }
}
