use crate::{command::*, notify, response::Response};
use anyhow::Result;

const VOTE_REACTIONS: [&str; 3] = ["👍", "👎", "🤷"];

pub struct Poll;

#[serenity::async_trait]
impl Command for Poll {
    fn name(&self) -> &'static str {
        "poll"
    }

    fn usage(&self) -> &'static str {
        "poll <title> - create a poll members can vote on"
    }

    async fn run(&self, _ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let title = invocation.args.trim();
        if title.is_empty() {
            return Ok(notify::argument_error(&ArgError::Missing("title")).into());
        }

        let response = VOTE_REACTIONS.iter().fold(
            Response::success()
                .title("A new poll has been created!")
                .description(title)
                .footer(format!(
                    "Poll created by: {} • React to vote!",
                    invocation.actor.name
                )),
            |response, emoji| response.reaction(*emoji),
        );

        Ok(response.into())
    }
}
