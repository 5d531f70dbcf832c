use std::env;

use crate::pluralkit::DEFAULT_PLURALKIT_URL;

pub const DEFAULT_COMMAND_PREFIX: &str = "\\pkp ";

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub pluralkit_url: String,
    pub pluralkit_token: Option<String>,
    pub database_url: String,
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bot_token: env::var("BOT_TOKEN").map_err(|_| "BOT_TOKEN must be set".to_string())?,
            pluralkit_url: env::var("PLURALKIT_API_URL")
                .unwrap_or_else(|_| DEFAULT_PLURALKIT_URL.to_string()),
            pluralkit_token: env::var("PLURALKIT_TOKEN").ok().filter(|t| !t.is_empty()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "./sys.db".to_string()),
            command_prefix: env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
        })
    }
}
