//! The narrow set of chat-platform operations commands are allowed to perform.
//!
//! Commands never touch serenity directly.  They go through [`Platform`], which lets the moderation
//! pipeline be exercised against [`mock::MockPlatform`] in tests.

use crate::{
    permission::{Actor, Target},
    response::Response,
};
use anyhow::Result;
use serenity::all::{ChannelId, GuildId, Timestamp, User, UserId};
use std::time::Duration;

mod discord;
#[cfg(test)]
pub mod mock;

pub use discord::{DiscordPlatform, ShardManagerContainer};

#[serenity::async_trait]
pub trait Platform: Send + Sync {
    /// The invoking user with their capabilities in `channel_id`.  Outside a guild the actor
    /// holds no capabilities.
    async fn actor(
        &self,
        guild_id: Option<GuildId>,
        channel_id: ChannelId,
        user: &User,
    ) -> Result<Actor>;
    /// Post an embed, then add its reactions in order
    async fn send_message(&self, channel_id: ChannelId, response: &Response) -> Result<()>;
    async fn send_direct_message(&self, user_id: UserId, text: &str) -> Result<()>;
    async fn kick_member(&self, guild_id: GuildId, user_id: UserId, reason: &str) -> Result<()>;
    async fn ban_member(&self, guild_id: GuildId, user_id: UserId, reason: &str) -> Result<()>;
    /// `None` resets the nickname
    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: Option<&str>,
    ) -> Result<()>;
    /// Delete up to `count` of the most recent messages.  Returns how many were deleted.
    async fn delete_messages(&self, channel_id: ChannelId, count: usize) -> Result<usize>;
    /// Look up a member from a mention, id, or name.  `Ok(None)` if there is no such member.
    async fn resolve_member(&self, guild_id: GuildId, raw: &str) -> Result<Option<Target>>;
    async fn guild_summary(&self, guild_id: GuildId) -> Result<GuildSummary>;
    /// Gateway heartbeat latency, if one has been measured yet
    async fn latency(&self) -> Option<Duration>;
}

/// Server details shown by `serverinfo`
#[derive(Clone, Debug)]
pub struct GuildSummary {
    pub id: GuildId,
    pub name: String,
    pub icon_url: Option<String>,
    pub owner_id: UserId,
    pub owner_name: String,
    pub member_count: u64,
    pub channel_count: usize,
    /// Lowest position first
    pub roles: Vec<String>,
    pub created_at: Timestamp,
}
