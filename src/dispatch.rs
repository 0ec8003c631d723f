//! Matching command text to a handler and running it.
//!
//! The dispatcher is the only place that catches handler failures.  A command that returns an
//! error or panics gets a generic error response, and nothing else is affected.

use crate::{
    command::Command,
    context::Context,
    notify,
    permission::{self, Actor},
    response::{Reply, Status},
};
use anyhow::{anyhow, Result};
use futures_util::FutureExt;
use serenity::all::{ChannelId, GuildId};
use std::{any::Any, panic::AssertUnwindSafe};
use tracing::{debug, error, info};

/// A single command as typed by a user
#[derive(Clone, Debug)]
pub struct Invocation {
    /// Without the prefix, case preserved
    pub name: String,
    /// Everything after the name, trimmed
    pub args: String,
    /// `None` in direct messages
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub actor: Actor,
}

impl Invocation {
    pub fn guild(&self) -> Result<GuildId> {
        self.guild_id
            .ok_or(anyhow!("`{}` invoked outside of a server", self.name))
    }
}

/// What the dispatcher did with an invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// Not a known command; nothing was sent
    Ignored,
    /// A response with this status was posted
    Responded(Status),
}

/// Split `content` into a command name and argument tail, if it starts with `prefix`.
pub fn parse<'a>(content: &'a str, prefix: &str) -> Option<(String, &'a str)> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };

    if name.is_empty() {
        return None;
    }

    Some((name.to_owned(), args))
}

/// Every command the bot understands, in help order
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    pub fn new(commands: Vec<Box<dyn Command>>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|command| command.as_ref())
    }

    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands()
            .find(|command| command.name() == name || command.aliases().contains(&name))
    }

    pub async fn dispatch(&self, ctx: &Context<'_>, invocation: &Invocation) -> Dispatched {
        let Some(command) = self.find(&invocation.name) else {
            debug!(name = %invocation.name, "Ignoring unknown command");
            return Dispatched::Ignored;
        };

        info!(
            command = command.name(),
            actor = %invocation.actor.name,
            channel_id = %invocation.channel_id,
            "Dispatching command"
        );

        let missing = permission::missing(&invocation.actor, command.required());
        let reply = if command.guild_only() && invocation.guild_id.is_none() {
            Reply::from(notify::guild_only())
        } else if !missing.is_empty() {
            info!(command = command.name(), ?missing, "Actor lacks capabilities");
            Reply::from(notify::missing_capabilities(&missing))
        } else {
            run(command, ctx, invocation).await
        };

        notify::deliver(ctx.platform, invocation.channel_id, &reply.response).await;
        if let Some(note) = &reply.private {
            notify::deliver_private(ctx.platform, note).await;
        }

        Dispatched::Responded(reply.response.status)
    }
}

async fn run(command: &dyn Command, ctx: &Context<'_>, invocation: &Invocation) -> Reply {
    match AssertUnwindSafe(command.run(ctx, invocation))
        .catch_unwind()
        .await
    {
        Ok(Ok(reply)) => reply,
        Ok(Err(err)) => {
            error!(command = command.name(), error = %format!("{:#}", err), "Command failed");
            Reply::from(notify::unexpected_error())
        }
        Err(panic) => {
            error!(
                command = command.name(),
                panic = panic_message(panic.as_ref()),
                "Command panicked"
            );
            Reply::from(notify::unexpected_error())
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "<non-string panic>"
    }
}
