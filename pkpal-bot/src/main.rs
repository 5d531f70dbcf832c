//! PK Pal: a Discord bot for leaving notes to the members of a PluralKit system.

use dotenv::dotenv;
use std::sync::Arc;

mod bot;
mod commands;
mod config;
mod db;
mod discord;
mod error;
mod pluralkit;
mod resolve;
#[cfg(test)]
mod testing;

use bot::Bot;
use config::Config;
use db::{Database, NoteStore};
use pluralkit::PluralKitClient;

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url)?;

    log::info!("Using PluralKit API at {}", config.pluralkit_url);
    let registry = PluralKitClient::new(&config.pluralkit_url, config.pluralkit_token.clone())?;

    let bot = Arc::new(Bot::new(Arc::new(registry), NoteStore::new(db)));

    discord::start_discord_listener(&config.bot_token, &config.command_prefix, bot).await
}
