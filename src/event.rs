//! The Serenity crate we're using for the Discord API is designed around callbacks to handle
//! events.  The handler translates those callbacks into this enum so the routing logic lives in
//! one place.

use crate::{
    context::Context,
    dispatch::{self, Dispatched, Invocation},
    log_event, notify,
};
use serenity::all::{Message, Ready};
use tracing::{debug, warn};

/// A Discord event
pub enum Event {
    Ready(Ready),
    Message(Message),
}

impl Event {
    pub async fn handle(self, ctx: &Context<'_>) {
        match self {
            Event::Ready(ready) => {
                log_event!(
                    "Connected as {} to {} server(s)",
                    ready.user.tag(),
                    ready.guilds.len()
                );
            }
            Event::Message(msg) => {
                handle_message(ctx, &msg).await;
            }
        }
    }
}

async fn handle_message(ctx: &Context<'_>, msg: &Message) -> Option<Dispatched> {
    // Includes ourselves
    if msg.author.bot {
        return None;
    }

    let (name, args) = dispatch::parse(&msg.content, &ctx.cfg.general.command_prefix)?;

    // Skip the member lookup for text that merely starts with the prefix
    ctx.registry.find(&name)?;

    let actor = match ctx
        .platform
        .actor(msg.guild_id, msg.channel_id, &msg.author)
        .await
    {
        Ok(actor) => actor,
        Err(err) => {
            warn!(
                command = %name,
                user_id = %msg.author.id,
                error = %format!("{:#}", err),
                "Could not resolve invoking member"
            );
            let response = notify::unexpected_error();
            notify::deliver(ctx.platform, msg.channel_id, &response).await;
            return Some(Dispatched::Responded(response.status));
        }
    };

    let invocation = Invocation {
        args: args.to_owned(),
        guild_id: msg.guild_id,
        channel_id: msg.channel_id,
        actor,
        name,
    };

    let dispatched = ctx.registry.dispatch(ctx, &invocation).await;
    if let Dispatched::Responded(status) = dispatched {
        debug!(command = %invocation.name, ?status, "Handled message");
    }
    Some(dispatched)
}
