use crate::{
    command, config::Config, context::Context, dispatch::Registry, event::Event,
    platform::DiscordPlatform,
};
use serenity::all::{Message, Ready};

/// Discord event handler
pub struct Handler {
    cfg: Config,
    registry: Registry,
}

impl Handler {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            registry: Registry::new(command::commands()),
        }
    }

    async fn handle(&self, discord_ctx: &serenity::all::Context, event: Event) {
        let discord = DiscordPlatform::new(discord_ctx, self.cfg.colors);
        let ctx = Context {
            cfg: &self.cfg,
            platform: &discord,
            registry: &self.registry,
        };
        event.handle(&ctx).await;
    }
}

#[serenity::async_trait]
impl serenity::all::EventHandler for Handler {
    async fn ready(&self, discord_ctx: serenity::all::Context, ready: Ready) {
        self.handle(&discord_ctx, Event::Ready(ready)).await;
    }

    async fn message(&self, discord_ctx: serenity::all::Context, msg: Message) {
        self.handle(&discord_ctx, Event::Message(msg)).await;
    }
}
