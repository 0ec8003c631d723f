//! Moderation actions against the platform, classified into an [`Outcome`].
//!
//! Local validation and the administrator shield are both checked before the platform is asked to
//! change anything.  Each action calls the platform at most once and never retries.

use crate::{
    permission::{is_shielded, Target},
    platform::Platform,
};
use serenity::all::{ChannelId, GuildId};
use tracing::{info, warn};

/// Which moderation action was attempted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Kick,
    Ban,
    Nick,
    Warn,
    Purge,
}

/// What a successful action did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Kicked { reason: String },
    Banned { reason: String },
    Nicknamed { nickname: Option<String> },
    Warned { reason: String },
    Purged { deleted: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success(Action),
    /// The target is an administrator
    Forbidden,
    /// The platform refused the request, e.g. role hierarchy
    RemoteFailure,
    /// The argument failed local validation.  Carries the offending text.
    InvalidArgument(String),
}

pub struct Executor<'a> {
    platform: &'a dyn Platform,
}

impl<'a> Executor<'a> {
    pub fn new(platform: &'a dyn Platform) -> Self {
        Self { platform }
    }

    pub async fn kick(&self, guild_id: GuildId, target: &Target, reason: &str) -> Outcome {
        if is_shielded(target) {
            info!(member = %target.name, "Refusing to kick an administrator");
            return Outcome::Forbidden;
        }

        match self.platform.kick_member(guild_id, target.id, reason).await {
            Ok(()) => Outcome::Success(Action::Kicked {
                reason: reason.to_owned(),
            }),
            Err(err) => {
                warn!(member = %target.name, error = %err, "Kick rejected");
                Outcome::RemoteFailure
            }
        }
    }

    pub async fn ban(&self, guild_id: GuildId, target: &Target, reason: &str) -> Outcome {
        if is_shielded(target) {
            info!(member = %target.name, "Refusing to ban an administrator");
            return Outcome::Forbidden;
        }

        match self.platform.ban_member(guild_id, target.id, reason).await {
            Ok(()) => Outcome::Success(Action::Banned {
                reason: reason.to_owned(),
            }),
            Err(err) => {
                warn!(member = %target.name, error = %err, "Ban rejected");
                Outcome::RemoteFailure
            }
        }
    }

    pub async fn set_nickname(
        &self,
        guild_id: GuildId,
        target: &Target,
        nickname: Option<&str>,
    ) -> Outcome {
        match self
            .platform
            .set_nickname(guild_id, target.id, nickname)
            .await
        {
            Ok(()) => Outcome::Success(Action::Nicknamed {
                nickname: nickname.map(str::to_owned),
            }),
            Err(err) => {
                warn!(member = %target.name, error = %err, "Nickname change rejected");
                Outcome::RemoteFailure
            }
        }
    }

    /// Warnings only notify the member, so there is nothing remote that can fail.
    pub fn warn(&self, target: &Target, reason: &str) -> Outcome {
        info!(member = %target.name, reason, "Warning member");
        Outcome::Success(Action::Warned {
            reason: reason.to_owned(),
        })
    }

    pub async fn purge(&self, channel_id: ChannelId, raw_count: &str, limit: usize) -> Outcome {
        let Some(count) = parse_count(raw_count, limit) else {
            return Outcome::InvalidArgument(raw_count.to_owned());
        };

        match self.platform.delete_messages(channel_id, count).await {
            Ok(deleted) => {
                info!(%channel_id, requested = count, deleted, "Purged messages");
                Outcome::Success(Action::Purged { deleted })
            }
            Err(err) => {
                warn!(%channel_id, error = %err, "Purge rejected");
                Outcome::RemoteFailure
            }
        }
    }
}

/// A positive count no larger than `limit`
fn parse_count(raw: &str, limit: usize) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|count| (1..=limit).contains(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::Capability;
    use crate::platform::mock::{member, Call, MockPlatform, Op, CHANNEL, GUILD};

    #[tokio::test]
    async fn shielded_targets_are_never_kicked_or_banned() {
        let platform = MockPlatform::new();
        let executor = Executor::new(&platform);
        let admin = member(2, "admin", &[Capability::Administrator]);

        assert_eq!(
            executor.kick(GUILD, &admin, "spam").await,
            Outcome::Forbidden
        );
        assert_eq!(executor.ban(GUILD, &admin, "spam").await, Outcome::Forbidden);
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn kick_calls_the_platform_once() {
        let platform = MockPlatform::new();
        let executor = Executor::new(&platform);
        let target = member(2, "troll", &[]);

        assert_eq!(
            executor.kick(GUILD, &target, "spam").await,
            Outcome::Success(Action::Kicked {
                reason: "spam".to_owned()
            })
        );
        assert_eq!(
            platform.calls(),
            vec![Call::Kick(target.id, "spam".to_owned())]
        );
    }

    #[tokio::test]
    async fn rejected_ban_is_a_remote_failure_without_retry() {
        let platform = MockPlatform::new().failing(Op::Ban);
        let executor = Executor::new(&platform);
        let target = member(2, "troll", &[Capability::KickMembers]);

        assert_eq!(
            executor.ban(GUILD, &target, "spam").await,
            Outcome::RemoteFailure
        );
        assert_eq!(platform.calls().len(), 1);
    }

    #[tokio::test]
    async fn nickname_ignores_the_shield() {
        let platform = MockPlatform::new();
        let executor = Executor::new(&platform);
        let admin = member(2, "admin", &[Capability::Administrator]);

        assert_eq!(
            executor.set_nickname(GUILD, &admin, Some("boss")).await,
            Outcome::Success(Action::Nicknamed {
                nickname: Some("boss".to_owned())
            })
        );
        assert_eq!(
            platform.calls(),
            vec![Call::Nick(admin.id, Some("boss".to_owned()))]
        );
    }

    #[tokio::test]
    async fn rejected_nickname_is_a_remote_failure() {
        let platform = MockPlatform::new().failing(Op::Nick);
        let executor = Executor::new(&platform);

        assert_eq!(
            executor
                .set_nickname(GUILD, &member(2, "troll", &[]), None)
                .await,
            Outcome::RemoteFailure
        );
    }

    #[tokio::test]
    async fn warn_never_touches_the_platform() {
        let platform = MockPlatform::new().failing(Op::DirectMessage);
        let executor = Executor::new(&platform);

        assert_eq!(
            executor.warn(&member(2, "troll", &[]), "be nice"),
            Outcome::Success(Action::Warned {
                reason: "be nice".to_owned()
            })
        );
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_purge_counts_skip_the_platform() {
        let platform = MockPlatform::new().with_messages(100);
        let executor = Executor::new(&platform);

        for raw in ["ten", "0", "-3", "2.5", "", "1001"] {
            assert_eq!(
                executor.purge(CHANNEL, raw, 1000).await,
                Outcome::InvalidArgument(raw.to_owned())
            );
        }
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn purge_reports_what_was_actually_deleted() {
        let platform = MockPlatform::new().with_messages(3);
        let executor = Executor::new(&platform);

        assert_eq!(
            executor.purge(CHANNEL, "10", 1000).await,
            Outcome::Success(Action::Purged { deleted: 3 })
        );
        assert_eq!(platform.calls(), vec![Call::Delete(CHANNEL, 10)]);
    }

    #[tokio::test]
    async fn failed_deletion_is_a_remote_failure() {
        let platform = MockPlatform::new().with_messages(3).failing(Op::Delete);
        let executor = Executor::new(&platform);

        assert_eq!(
            executor.purge(CHANNEL, "2", 1000).await,
            Outcome::RemoteFailure
        );
    }

    #[test]
    fn count_bounds_are_inclusive() {
        assert_eq!(parse_count("1", 5), Some(1));
        assert_eq!(parse_count(" 5 ", 5), Some(5));
        assert_eq!(parse_count("6", 5), None);
    }
}
