//! [`Platform`] backed by the serenity client of the current event

use super::{GuildSummary, Platform};
use crate::{
    args::parse_user_id,
    config::Colors,
    context::CacheHttp,
    helper::{MemberHelper, UserIdHelper},
    permission::{Actor, Capabilities, Target},
    response::{Response, Status},
};
use anyhow::{anyhow, Result};
use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, EditMember,
        GetMessages, GuildId, MessageId, ReactionType, ShardManager, Timestamp, User, UserId,
    },
    http::StatusCode,
    prelude::TypeMapKey,
};
use std::{sync::Arc, time::Duration};

/// Discord returns at most this many messages per request, and bulk-deletes at most this many
const MESSAGE_PAGE: usize = 100;
/// Bulk deletion only accepts messages younger than two weeks
const BULK_DELETE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60;

/// Lets event handlers find the shard runners, which track gateway latency
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

pub struct DiscordPlatform<'a> {
    cache_http: &'a CacheHttp,
    colors: Colors,
}

impl<'a> DiscordPlatform<'a> {
    pub fn new(cache_http: &'a CacheHttp, colors: Colors) -> Self {
        Self { cache_http, colors }
    }

    fn embed(&self, response: &Response) -> CreateEmbed {
        let colour = match response.status {
            Status::Success => self.colors.success,
            Status::Error => self.colors.error,
            Status::Info => self.colors.main,
        };

        let mut embed = CreateEmbed::new().colour(colour);
        if let Some(title) = &response.title {
            embed = embed.title(title);
        }
        if let Some(description) = &response.description {
            embed = embed.description(description);
        }
        if let Some(author) = &response.author {
            embed = embed.author(CreateEmbedAuthor::new(author));
        }
        if let Some(url) = &response.thumbnail {
            embed = embed.thumbnail(url);
        }
        for field in &response.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }
        if let Some(footer) = &response.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }
        embed
    }

    /// Find a member id by exact user name or nickname, from the cache
    fn member_named(&self, guild_id: GuildId, name: &str) -> Option<UserId> {
        let guild = self.cache_http.cache.guild(guild_id)?;
        guild.member_named(name).map(|member| member.user.id)
    }
}

#[serenity::async_trait]
impl Platform for DiscordPlatform<'_> {
    async fn actor(
        &self,
        guild_id: Option<GuildId>,
        channel_id: ChannelId,
        user: &User,
    ) -> Result<Actor> {
        let capabilities = match guild_id {
            Some(guild_id) => guild_id
                .member(self.cache_http, user.id)
                .await?
                .capabilities_in_channel(&self.cache_http.cache, guild_id, channel_id),
            None => Capabilities::default(),
        };

        Ok(Actor {
            id: user.id,
            name: user.tag(),
            capabilities,
        })
    }

    async fn send_message(&self, channel_id: ChannelId, response: &Response) -> Result<()> {
        let message = channel_id
            .send_message(self.cache_http, CreateMessage::new().embed(self.embed(response)))
            .await?;

        for emoji in &response.reactions {
            message
                .react(self.cache_http, ReactionType::Unicode(emoji.clone()))
                .await?;
        }

        Ok(())
    }

    async fn send_direct_message(&self, user_id: UserId, text: &str) -> Result<()> {
        user_id
            .direct_message(self.cache_http, CreateMessage::new().content(text))
            .await?;
        Ok(())
    }

    async fn kick_member(&self, guild_id: GuildId, user_id: UserId, reason: &str) -> Result<()> {
        guild_id
            .kick_with_reason(self.cache_http, user_id, reason)
            .await
            .map_err(Into::into)
    }

    async fn ban_member(&self, guild_id: GuildId, user_id: UserId, reason: &str) -> Result<()> {
        // Keep the member's message history
        guild_id
            .ban_with_reason(self.cache_http, user_id, 0, reason)
            .await
            .map_err(Into::into)
    }

    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: Option<&str>,
    ) -> Result<()> {
        // An empty nickname resets it to the user name
        let edit = EditMember::new().nickname(nickname.unwrap_or_default());
        guild_id
            .edit_member(self.cache_http, user_id, edit)
            .await?;
        Ok(())
    }

    async fn delete_messages(&self, channel_id: ChannelId, count: usize) -> Result<usize> {
        let mut deleted = 0;
        let mut before: Option<MessageId> = None;

        while deleted < count {
            let limit = (count - deleted).min(MESSAGE_PAGE);
            let mut request = GetMessages::new().limit(limit as u8);
            if let Some(before) = before {
                request = request.before(before);
            }

            // Newest first
            let page = channel_id.messages(self.cache_http, request).await?;
            let Some(oldest) = page.last() else {
                break;
            };
            before = Some(oldest.id);

            let cutoff = Timestamp::now().unix_timestamp() - BULK_DELETE_MAX_AGE_SECS;
            let (recent, old): (Vec<_>, Vec<_>) = page
                .iter()
                .partition(|msg| msg.timestamp.unix_timestamp() > cutoff);

            match recent.as_slice() {
                [] => {}
                [msg] => channel_id.delete_message(self.cache_http, msg.id).await?,
                _ => {
                    let ids: Vec<MessageId> = recent.iter().map(|msg| msg.id).collect();
                    channel_id.delete_messages(self.cache_http, &ids).await?
                }
            }
            for msg in old {
                channel_id.delete_message(self.cache_http, msg.id).await?;
            }

            deleted += page.len();
            if page.len() < limit {
                break;
            }
        }

        Ok(deleted)
    }

    async fn resolve_member(&self, guild_id: GuildId, raw: &str) -> Result<Option<Target>> {
        let Some(user_id) = parse_user_id(raw).or_else(|| self.member_named(guild_id, raw)) else {
            return Ok(None);
        };

        match guild_id.member(self.cache_http, user_id).await {
            Ok(member) => Ok(Some(member.to_target(&self.cache_http.cache, guild_id))),
            Err(serenity::Error::Http(err)) if is_not_found(err.status_code()) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn guild_summary(&self, guild_id: GuildId) -> Result<GuildSummary> {
        // Copy out of the cache before awaiting anything
        let (summary, owner_cached) = {
            let guild = self
                .cache_http
                .cache
                .guild(guild_id)
                .ok_or(anyhow!("Guild {} is not cached", guild_id))?;

            let mut roles: Vec<_> = guild.roles.values().collect();
            roles.sort_by_key(|role| role.position);

            let owner_cached = guild
                .members
                .get(&guild.owner_id)
                .map(|member| member.user.tag());

            let summary = GuildSummary {
                id: guild.id,
                name: guild.name.clone(),
                icon_url: guild.icon_url(),
                owner_id: guild.owner_id,
                owner_name: String::new(),
                member_count: guild.member_count,
                channel_count: guild.channels.len(),
                roles: roles.into_iter().map(|role| role.name.clone()).collect(),
                created_at: guild_id.created_at(),
            };
            (summary, owner_cached)
        };

        let owner_name = match owner_cached {
            Some(name) => name,
            None => summary.owner_id.tag(self.cache_http).await,
        };

        Ok(GuildSummary {
            owner_name,
            ..summary
        })
    }

    async fn latency(&self) -> Option<Duration> {
        let manager = self
            .cache_http
            .data
            .read()
            .await
            .get::<ShardManagerContainer>()
            .cloned()?;

        let runners = manager.runners.lock().await;
        runners
            .get(&self.cache_http.shard_id)
            .and_then(|runner| runner.latency)
    }
}

/// Discord answers 404 for ids that aren't members of the guild
fn is_not_found(status: Option<StatusCode>) -> bool {
    status == Some(StatusCode::NOT_FOUND)
}
