use anyhow::{anyhow, Result};
use std::path::PathBuf;

const CONFIG_PATH_REL_HOME: &str = ".config/warden/config.toml";
/// Overrides the default configuration location when set
const CONFIG_PATH_ENV: &str = "WARDEN_CONFIG";
const DEFAULT_PURGE_LIMIT: usize = 1000;

/// Bot configuration
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub general: General,
    pub colors: Colors,
    pub about: About,
    #[serde(default)]
    pub moderation: Moderation,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct General {
    pub discord_token: String,
    pub command_prefix: String,
    pub application_id: u64,
}

/// Embed colors, as RGB integers
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Colors {
    pub success: u32,
    pub error: u32,
    pub main: u32,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct About {
    pub description: String,
    pub creators: String,
    pub support_invite: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct Moderation {
    /// Largest message count a single purge may request
    #[serde(default = "default_purge_limit")]
    pub purge_limit: usize,
}

fn default_purge_limit() -> usize {
    DEFAULT_PURGE_LIMIT
}

impl Default for Moderation {
    fn default() -> Self {
        Self {
            purge_limit: DEFAULT_PURGE_LIMIT,
        }
    }
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        dirs::home_dir()
            .map(|p| p.join(CONFIG_PATH_REL_HOME))
            .ok_or(anyhow!("Could not find home directory"))
    }

    pub async fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            anyhow!(
                "Could not read configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        Self::from_toml(&contents).map_err(|e| {
            anyhow!(
                "Could not parse configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(Into::into)
    }

    #[cfg(test)]
    pub fn sample() -> Self {
        Self::from_toml(SAMPLE).expect("sample configuration parses")
    }
}

#[cfg(test)]
const SAMPLE: &str = r#"
[general]
discord_token = "token"
command_prefix = "!"
application_id = 4242

[colors]
success = 0x42F56C
error = 0xE02B2B
main = 0x0099FF

[about]
description = "Moderator bot for handling quizzes"
creators = "The quiz team"
support_invite = "https://discord.gg/example"
"#;
