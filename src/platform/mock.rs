//! Recording, scriptable [`Platform`] for tests

use super::{GuildSummary, Platform};
use crate::{
    args::parse_user_id,
    dispatch::Invocation,
    permission::{Actor, Capability, Target},
    response::Response,
};
use anyhow::{anyhow, Result};
use serenity::all::{ChannelId, GuildId, User, UserId};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::sync::Notify;

pub const GUILD: GuildId = GuildId::new(10);
pub const CHANNEL: ChannelId = ChannelId::new(20);

/// A remote mutation the mock was asked to perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Kick(UserId, String),
    Ban(UserId, String),
    Nick(UserId, Option<String>),
    Delete(ChannelId, usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Actor,
    Send,
    DirectMessage,
    Kick,
    Ban,
    Nick,
    Delete,
    Resolve,
}

#[derive(Default)]
pub struct MockPlatform {
    members: Vec<Target>,
    /// Held by every invoking user
    actor_capabilities: Vec<Capability>,
    failing: HashSet<Op>,
    latency: Option<Duration>,
    guild: Option<GuildSummary>,
    /// Messages left in the channel
    messages: Mutex<usize>,
    /// When set, kicks wait for a channel message to be sent first
    kick_gate: Option<Arc<Notify>>,
    pub calls: Mutex<Vec<Call>>,
    pub sent: Mutex<Vec<(ChannelId, Response)>>,
    pub direct: Mutex<Vec<(UserId, String)>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, target: Target) -> Self {
        self.members.push(target);
        self
    }

    pub fn with_actor_capabilities(mut self, capabilities: &[Capability]) -> Self {
        self.actor_capabilities = capabilities.to_vec();
        self
    }

    pub fn with_messages(self, count: usize) -> Self {
        *self.messages.lock().unwrap() = count;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_guild(mut self, guild: GuildSummary) -> Self {
        self.guild = Some(guild);
        self
    }

    pub fn with_kick_gate(mut self, gate: Arc<Notify>) -> Self {
        self.kick_gate = Some(gate);
        self
    }

    pub fn failing(mut self, op: Op) -> Self {
        self.failing.insert(op);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<Response> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, response)| response.clone())
            .collect()
    }

    pub fn direct(&self) -> Vec<(UserId, String)> {
        self.direct.lock().unwrap().clone()
    }

    fn check(&self, op: Op) -> Result<()> {
        if self.failing.contains(&op) {
            Err(anyhow!("{:?} rejected by mock", op))
        } else {
            Ok(())
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[serenity::async_trait]
impl Platform for MockPlatform {
    async fn actor(
        &self,
        guild_id: Option<GuildId>,
        _channel_id: ChannelId,
        user: &User,
    ) -> Result<Actor> {
        self.check(Op::Actor)?;
        let capabilities = match guild_id {
            Some(_) => self.actor_capabilities.iter().copied().collect(),
            None => Default::default(),
        };
        Ok(Actor {
            id: user.id,
            name: user.name.clone(),
            capabilities,
        })
    }

    async fn send_message(&self, channel_id: ChannelId, response: &Response) -> Result<()> {
        self.check(Op::Send)?;
        self.sent
            .lock()
            .unwrap()
            .push((channel_id, response.clone()));
        if let Some(gate) = &self.kick_gate {
            gate.notify_one();
        }
        Ok(())
    }

    async fn send_direct_message(&self, user_id: UserId, text: &str) -> Result<()> {
        self.check(Op::DirectMessage)?;
        self.direct.lock().unwrap().push((user_id, text.to_owned()));
        Ok(())
    }

    async fn kick_member(&self, _guild_id: GuildId, user_id: UserId, reason: &str) -> Result<()> {
        if let Some(gate) = &self.kick_gate {
            gate.notified().await;
        }
        self.record(Call::Kick(user_id, reason.to_owned()));
        self.check(Op::Kick)
    }

    async fn ban_member(&self, _guild_id: GuildId, user_id: UserId, reason: &str) -> Result<()> {
        self.record(Call::Ban(user_id, reason.to_owned()));
        self.check(Op::Ban)
    }

    async fn set_nickname(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        nickname: Option<&str>,
    ) -> Result<()> {
        self.record(Call::Nick(user_id, nickname.map(str::to_owned)));
        self.check(Op::Nick)
    }

    async fn delete_messages(&self, channel_id: ChannelId, count: usize) -> Result<usize> {
        self.record(Call::Delete(channel_id, count));
        self.check(Op::Delete)?;
        let mut remaining = self.messages.lock().unwrap();
        let deleted = count.min(*remaining);
        *remaining -= deleted;
        Ok(deleted)
    }

    async fn resolve_member(&self, _guild_id: GuildId, raw: &str) -> Result<Option<Target>> {
        self.check(Op::Resolve)?;
        let id = parse_user_id(raw);
        Ok(self
            .members
            .iter()
            .find(|member| Some(member.id) == id || member.name == raw)
            .cloned())
    }

    async fn guild_summary(&self, _guild_id: GuildId) -> Result<GuildSummary> {
        self.guild.clone().ok_or(anyhow!("guild not cached"))
    }

    async fn latency(&self) -> Option<Duration> {
        self.latency
    }
}

pub fn actor(capabilities: &[Capability]) -> Actor {
    Actor {
        id: UserId::new(1),
        name: "moderator".to_owned(),
        capabilities: capabilities.iter().copied().collect(),
    }
}

pub fn member(id: u64, name: &str, capabilities: &[Capability]) -> Target {
    Target {
        id: UserId::new(id),
        name: name.to_owned(),
        capabilities: capabilities.iter().copied().collect(),
    }
}

/// An invocation in [`GUILD`] / [`CHANNEL`]
pub fn invocation(name: &str, args: &str, actor: Actor) -> Invocation {
    Invocation {
        name: name.to_owned(),
        args: args.to_owned(),
        guild_id: Some(GUILD),
        channel_id: CHANNEL,
        actor,
    }
}
