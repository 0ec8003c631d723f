//! Platform-neutral description of what the bot says back

use serenity::all::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A single embed posted to a channel.  The status is turned into a color at delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub thumbnail: Option<String>,
    pub fields: Vec<Field>,
    pub footer: Option<String>,
    /// Unicode emoji the bot reacts with after posting
    pub reactions: Vec<String>,
}

impl Response {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            title: None,
            description: None,
            author: None,
            thumbnail: None,
            fields: Vec::new(),
            footer: None,
            reactions: Vec::new(),
        }
    }

    pub fn success() -> Self {
        Self::new(Status::Success)
    }

    pub fn error() -> Self {
        Self::new(Status::Error)
    }

    pub fn info() -> Self {
        Self::new(Status::Info)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn reaction(mut self, emoji: impl Into<String>) -> Self {
        self.reactions.push(emoji.into());
        self
    }
}

/// Best-effort direct message to the user affected by a command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateNote {
    pub user_id: UserId,
    pub text: String,
}

/// What a command hands back to the dispatcher
#[derive(Clone, Debug)]
pub struct Reply {
    pub response: Response,
    pub private: Option<PrivateNote>,
}

impl Reply {
    pub fn with_private(mut self, note: Option<PrivateNote>) -> Self {
        self.private = note;
        self
    }
}

impl From<Response> for Reply {
    fn from(response: Response) -> Self {
        Self {
            response,
            private: None,
        }
    }
}
