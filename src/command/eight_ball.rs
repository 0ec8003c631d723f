use crate::{command::*, notify, response::Response};
use anyhow::Result;
use rand::seq::SliceRandom;

const ANSWERS: [&str; 20] = [
    "It is certain.",
    "It is decidedly so.",
    "You may rely on it.",
    "Without a doubt.",
    "Yes - definitely.",
    "As I see, yes.",
    "Most likely.",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again later.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

pub struct EightBall;

#[serenity::async_trait]
impl Command for EightBall {
    fn name(&self) -> &'static str {
        "8ball"
    }

    fn usage(&self) -> &'static str {
        "8ball <question> - ask the bot any question"
    }

    async fn run(&self, _ctx: &Context<'_>, invocation: &Invocation) -> Result<Reply> {
        let question = invocation.args.trim();
        if question.is_empty() {
            return Ok(notify::argument_error(&ArgError::Missing("question")).into());
        }

        let answer = ANSWERS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(ANSWERS[0]);

        Ok(Response::success()
            .title("**My Answer:**")
            .description(answer)
            .footer(format!("The question was: {}", question))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dispatch::Registry;
    use crate::platform::mock::{actor, invocation, MockPlatform};

    #[tokio::test]
    async fn answers_from_the_list() {
        let cfg = Config::sample();
        let registry = Registry::new(commands());
        let platform = MockPlatform::new();
        let ctx = Context {
            cfg: &cfg,
            platform: &platform,
            registry: &registry,
        };

        let reply = EightBall
            .run(&ctx, &invocation("8ball", "Will it rain?", actor(&[])))
            .await
            .unwrap();

        let answer = reply.response.description.unwrap();
        assert!(ANSWERS.contains(&answer.as_str()));
        assert_eq!(
            reply.response.footer.as_deref(),
            Some("The question was: Will it rain?")
        );
    }
}
