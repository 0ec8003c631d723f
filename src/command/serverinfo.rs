use crate::{command::*, platform::GuildSummary, response::Response};
use anyhow::Result;

/// More roles than this are elided from the list
const MAX_LISTED_ROLES: usize = 50;

pub struct ServerInfo;

#[serenity::async_trait]
impl Command for ServerInfo {
    fn name(&self) -> &'static str {
        "serverinfo"
    }

    fn guild_only(&self) -> bool {
        true
    }

    fn usage(&self) -> &'static str {
        "serverinfo - show information about this server"
    }

    async fn run(&self, ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let summary = ctx.platform.guild_summary(invocation.guild()?).await?;
        Ok(summary_response(&summary).into())
    }
}

fn summary_response(summary: &GuildSummary) -> Response {
    let role_count = summary.roles.len();
    let mut roles = summary
        .roles
        .iter()
        .take(MAX_LISTED_ROLES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if role_count > MAX_LISTED_ROLES {
        roles.push_str(&format!(
            ", >>>> Displaying[{}/{}] Roles",
            MAX_LISTED_ROLES, role_count
        ));
    }

    // RFC 3339, keep only the date
    let created_at = summary.created_at.to_string();
    let created_on = created_at.split('T').next().unwrap_or(&created_at);

    let response = Response::success()
        .title("**Server Name:**")
        .description(&summary.name)
        .field(
            "Owner",
            format!("{}\n{}", summary.owner_name, summary.owner_id),
            true,
        )
        .field("Server ID", summary.id.to_string(), true)
        .field("Member Count", summary.member_count.to_string(), true)
        .field("Text/Voice Channels", summary.channel_count.to_string(), true)
        .field(format!("Roles ({})", role_count), roles, true)
        .footer(format!("Created at: {}", created_on));

    match &summary.icon_url {
        Some(url) => response.thumbnail(url),
        None => response,
    }
}
