use crate::{
    args::{split_first, ArgError},
    context::Context,
    dispatch::Invocation,
    permission::{Capability, Target},
    response::Reply,
};
use anyhow::Result;

mod ban;
mod bitcoin;
mod eight_ball;
mod help;
mod info;
mod invite;
mod kick;
mod nick;
mod ping;
mod poll;
mod purge;
mod server;
mod serverinfo;
mod warn;

#[serenity::async_trait]
pub trait Command: Sync + Send {
    /// Command name, matched after the prefix
    fn name(&self) -> &'static str;
    /// Other names the command answers to
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }
    /// Capabilities the invoking user must hold.  Checked before `run`.
    fn required(&self) -> &'static [Capability] {
        &[]
    }
    /// Whether the command is meaningless outside a server
    fn guild_only(&self) -> bool {
        !self.required().is_empty()
    }
    /// Help message line, without the prefix
    fn usage(&self) -> &'static str;
    /// Handle one invocation.  Returns the response for the channel, plus an optional private
    /// note.  Errors are reported generically by the dispatcher.
    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply>;
}

/// Ordered list of available commands
pub fn commands() -> Vec<Box<dyn Command>> {
    vec![
        // General
        Box::new(help::Help),
        Box::new(info::Info),
        Box::new(serverinfo::ServerInfo),
        Box::new(ping::Ping),
        Box::new(invite::Invite),
        Box::new(server::Server),
        // Fun
        Box::new(poll::Poll),
        Box::new(eight_ball::EightBall),
        Box::new(bitcoin::Bitcoin),
        // Moderation
        Box::new(kick::Kick),
        Box::new(nick::Nick),
        Box::new(ban::Ban),
        Box::new(warn::Warn),
        Box::new(purge::Purge),
    ]
}

/// Resolve the leading `<member>` argument.  Returns the member and the remaining text.
async fn resolve_target<'a>(
    ctx: &Context<'_>,
    invocation: &'a Invocation,
) -> Result<std::result::Result<(Target, &'a str), ArgError>> {
    let guild_id = invocation.guild()?;
    let Some((raw, rest)) = split_first(&invocation.args) else {
        return Ok(Err(ArgError::Missing("member")));
    };

    Ok(ctx
        .platform
        .resolve_member(guild_id, raw)
        .await?
        .map(|target| (target, rest))
        .ok_or_else(|| ArgError::MemberNotFound(raw.to_owned())))
}
