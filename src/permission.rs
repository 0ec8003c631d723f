//! Capability checks over already-resolved permission data.
//!
//! The platform client resolves roles and channel overwrites into a flat permission set before a
//! command runs.  Everything here is a pure function of that set.

use serenity::all::{Permissions, UserId};
use std::collections::BTreeSet;

/// A single privilege a command may require
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    KickMembers,
    BanMembers,
    ManageNicknames,
    ManageMessages,
    ManageChannels,
    Administrator,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::KickMembers,
        Capability::BanMembers,
        Capability::ManageNicknames,
        Capability::ManageMessages,
        Capability::ManageChannels,
        Capability::Administrator,
    ];

    /// Name as shown in the Discord client
    pub fn label(self) -> &'static str {
        match self {
            Capability::KickMembers => "Kick Members",
            Capability::BanMembers => "Ban Members",
            Capability::ManageNicknames => "Manage Nicknames",
            Capability::ManageMessages => "Manage Messages",
            Capability::ManageChannels => "Manage Channels",
            Capability::Administrator => "Administrator",
        }
    }

    fn permission(self) -> Permissions {
        match self {
            Capability::KickMembers => Permissions::KICK_MEMBERS,
            Capability::BanMembers => Permissions::BAN_MEMBERS,
            Capability::ManageNicknames => Permissions::MANAGE_NICKNAMES,
            Capability::ManageMessages => Permissions::MANAGE_MESSAGES,
            Capability::ManageChannels => Permissions::MANAGE_CHANNELS,
            Capability::Administrator => Permissions::ADMINISTRATOR,
        }
    }
}

/// Effective capabilities of a user within one server
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities(BTreeSet<Capability>);

impl Capabilities {
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Permissions> for Capabilities {
    fn from(permissions: Permissions) -> Self {
        Capability::ALL
            .into_iter()
            .filter(|capability| permissions.contains(capability.permission()))
            .collect()
    }
}

/// The user who invoked a command
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: UserId,
    pub name: String,
    pub capabilities: Capabilities,
}

/// The member a moderation action applies to
#[derive(Clone, Debug)]
pub struct Target {
    pub id: UserId,
    pub name: String,
    pub capabilities: Capabilities,
}

pub fn authorize(actor: &Actor, required: &[Capability]) -> bool {
    missing(actor, required).is_empty()
}

/// Required capabilities the actor lacks, in the order they were required
pub fn missing(actor: &Actor, required: &[Capability]) -> Vec<Capability> {
    required
        .iter()
        .copied()
        .filter(|capability| !actor.capabilities.contains(*capability))
        .collect()
}

/// Administrators may not be kicked or banned through the bot.
pub fn is_shielded(target: &Target) -> bool {
    target.capabilities.contains(Capability::Administrator)
}
