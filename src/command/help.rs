use crate::{command::*, response::Response};
use anyhow::Result;

pub struct Help;

#[serenity::async_trait]
impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help - show this help message"
    }

    async fn run(&self, ctx: &Context<'_>, _invocation: &Invocation) -> Result<Reply> {
        let prefix = &ctx.cfg.general.command_prefix;

        let mut reply = String::new();
        reply.push_str("```\n");
        for command in ctx.registry.commands() {
            reply.push_str(prefix);
            reply.push_str(command.usage());
            reply.push('\n');
        }
        reply.push_str("```");

        Ok(Response::info().title("Commands").description(reply).into())
    }
}
