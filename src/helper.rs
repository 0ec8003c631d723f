//! Miscellaneous convenience methods

use crate::{
    context::CacheHttp,
    permission::{Capabilities, Target},
};
use serenity::all::{Cache, ChannelId, Guild, GuildId, Member};

pub trait GuildHelper {
    fn capabilities_of(&self, member: &Member, channel_id: ChannelId) -> Capabilities;
}

impl GuildHelper for Guild {
    /// Effective permissions in a channel, after its overwrites.  Threads use their parent
    /// channel's overwrites.  Channels we can't find fall back to guild-level permissions.
    fn capabilities_of(&self, member: &Member, channel_id: ChannelId) -> Capabilities {
        let channel = self.channels.get(&channel_id).or_else(|| {
            self.threads
                .iter()
                .find(|thread| thread.id == channel_id)
                .and_then(|thread| thread.parent_id)
                .and_then(|parent_id| self.channels.get(&parent_id))
        });

        let permissions = match channel {
            Some(channel) => self.user_permissions_in(channel, member),
            None => self.member_permissions(member),
        };
        Capabilities::from(permissions)
    }
}

pub trait MemberHelper {
    fn capabilities_in(&self, cache: &Cache, guild_id: GuildId) -> Capabilities;
    fn capabilities_in_channel(
        &self,
        cache: &Cache,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Capabilities;
    fn to_target(&self, cache: &Cache, guild_id: GuildId) -> Target;
}

impl MemberHelper for Member {
    /// Guild-level permissions, including the owner and administrator overrides.  Empty if the
    /// guild is not cached.
    fn capabilities_in(&self, cache: &Cache, guild_id: GuildId) -> Capabilities {
        cache
            .guild(guild_id)
            .map(|guild| Capabilities::from(guild.member_permissions(self)))
            .unwrap_or_default()
    }

    fn capabilities_in_channel(
        &self,
        cache: &Cache,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Capabilities {
        cache
            .guild(guild_id)
            .map(|guild| guild.capabilities_of(self, channel_id))
            .unwrap_or_default()
    }

    /// Targets are shielded by guild-level administrator, so no channel applies
    fn to_target(&self, cache: &Cache, guild_id: GuildId) -> Target {
        Target {
            id: self.user.id,
            name: self.user.tag(),
            capabilities: self.capabilities_in(cache, guild_id),
        }
    }
}

#[serenity::async_trait]
pub trait UserIdHelper {
    async fn tag(&self, ctx: &CacheHttp) -> String;
}

#[serenity::async_trait]
impl UserIdHelper for serenity::all::UserId {
    async fn tag(&self, ctx: &CacheHttp) -> String {
        match self.to_user(ctx).await {
            Ok(user) => user.tag(),
            Err(_) => format!("<unknown-user-{}>", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::Capability;
    use serenity::all::{
        GuildChannel, PermissionOverwrite, PermissionOverwriteType, Permissions, Role, RoleId,
        UserId,
    };

    const GUILD: GuildId = GuildId::new(10);
    const CHANNEL: ChannelId = ChannelId::new(20);
    const THREAD: ChannelId = ChannelId::new(21);
    const MOD_ROLE: RoleId = RoleId::new(30);

    fn role(id: RoleId, permissions: Permissions) -> Role {
        let mut role = Role::default();
        role.id = id;
        role.guild_id = GUILD;
        role.permissions = permissions;
        role
    }

    fn guild(overwrites: Vec<PermissionOverwrite>) -> Guild {
        let everyone = RoleId::new(GUILD.get());
        let mut channel = GuildChannel::default();
        channel.id = CHANNEL;
        channel.guild_id = GUILD;
        channel.permission_overwrites = overwrites;

        let mut thread = GuildChannel::default();
        thread.id = THREAD;
        thread.guild_id = GUILD;
        thread.parent_id = Some(CHANNEL);

        let mut guild = Guild::default();
        guild.id = GUILD;
        guild.owner_id = UserId::new(99);
        guild.roles.insert(everyone, role(everyone, Permissions::SEND_MESSAGES));
        guild.roles.insert(
            MOD_ROLE,
            role(
                MOD_ROLE,
                Permissions::MANAGE_MESSAGES | Permissions::MANAGE_CHANNELS,
            ),
        );
        guild.channels.insert(CHANNEL, channel);
        guild.threads.push(thread);
        guild
    }

    fn member(roles: Vec<RoleId>) -> Member {
        let mut member = Member::default();
        member.user.id = UserId::new(2);
        member.guild_id = GUILD;
        member.roles = roles;
        member
    }

    #[test]
    fn channel_overwrite_can_deny_a_role_permission() {
        let guild = guild(vec![PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::MANAGE_MESSAGES,
            kind: PermissionOverwriteType::Role(MOD_ROLE),
        }]);
        let moderator = member(vec![MOD_ROLE]);

        let in_channel = guild.capabilities_of(&moderator, CHANNEL);
        assert!(!in_channel.contains(Capability::ManageMessages));
        assert!(in_channel.contains(Capability::ManageChannels));

        // Threads inherit the parent's overwrites
        let in_thread = guild.capabilities_of(&moderator, THREAD);
        assert!(!in_thread.contains(Capability::ManageMessages));

        let elsewhere = guild.capabilities_of(&moderator, ChannelId::new(404));
        assert!(elsewhere.contains(Capability::ManageMessages));
    }

    #[test]
    fn channel_overwrite_can_grant_a_member_permission() {
        let guild = guild(vec![PermissionOverwrite {
            allow: Permissions::MANAGE_MESSAGES,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(UserId::new(2)),
        }]);
        let helper = member(vec![]);

        assert!(guild
            .capabilities_of(&helper, CHANNEL)
            .contains(Capability::ManageMessages));
        assert!(!Capabilities::from(guild.member_permissions(&helper))
            .contains(Capability::ManageMessages));
    }

    #[test]
    fn administrators_ignore_channel_denials() {
        let admin_role = RoleId::new(31);
        let mut guild = guild(vec![PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::MANAGE_MESSAGES,
            kind: PermissionOverwriteType::Role(admin_role),
        }]);
        guild
            .roles
            .insert(admin_role, role(admin_role, Permissions::ADMINISTRATOR));

        let capabilities = guild.capabilities_of(&member(vec![admin_role]), CHANNEL);
        assert!(capabilities.contains(Capability::ManageMessages));
        assert!(capabilities.contains(Capability::Administrator));
    }
}
