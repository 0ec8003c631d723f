mod action;
mod args;
mod command;
mod config;
mod context;
mod dispatch;
mod event;
mod handler;
mod helper;
mod logging;
mod notify;
mod permission;
mod platform;
mod response;

use serenity::{all::GatewayIntents, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cfg = crate::config::Config::load().await?;
    let token = cfg.general.discord_token.clone();
    log_internal!(
        "Loaded configuration, command prefix is {:?}",
        cfg.general.command_prefix
    );
    let handler = handler::Handler::new(cfg);

    // Things we want discord to tell us about.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    client
        .data
        .write()
        .await
        .insert::<platform::ShardManagerContainer>(client.shard_manager.clone());

    client.start().await.map_err(Into::into)
}
