use crate::bot::Bot;
use crate::commands;
use serenity::all::{
    ActivityData, Client, Context, EventHandler, GatewayIntents, Message, OnlineStatus, Ready,
};
use std::sync::Arc;

/// Discord rejects messages longer than this many characters
const DISCORD_MESSAGE_LIMIT: usize = 2000;

struct DiscordHandler {
    bot: Arc<Bot>,
    prefix: String,
}

#[serenity::async_trait]
impl EventHandler for DiscordHandler {
    // serenity runs each event on its own task, so a slow registry call for
    // one sender never holds up another.
    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore messages from bots (including ourselves)
        if msg.author.bot {
            return;
        }

        let Some(body) = msg.content.strip_prefix(self.prefix.as_str()) else {
            return;
        };

        let sender_id = msg.author.id.to_string();
        log::info!(
            "Discord: Command from {} ({}): {}",
            msg.author.name,
            sender_id,
            body.chars().take(50).collect::<String>()
        );

        let replies = match commands::parse(body) {
            Ok(cmd) => commands::execute(cmd, &sender_id, &self.bot).await,
            Err(e) => vec![e.reply()],
        };

        for reply in replies {
            for chunk in split_message(&reply, DISCORD_MESSAGE_LIMIT) {
                if let Err(e) = msg.channel_id.say(&ctx.http, &chunk).await {
                    log::error!("Discord: Failed to send reply to {}: {}", sender_id, e);
                }
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        ctx.set_presence(
            Some(ActivityData::playing("Online & Ready!")),
            OnlineStatus::Online,
        );
        log::info!("Discord: Bot connected as {}", ready.user.name);
    }
}

/// Split a message into chunks of at most `max_chars` characters, preferring
/// line boundaries
fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        let separator = usize::from(!current.is_empty());

        if current_len + separator + line_len <= max_chars {
            if separator == 1 {
                current.push('\n');
            }
            current.push_str(line);
            current_len += separator + line_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        // A single line over the limit is cut on character boundaries
        current_len = 0;
        for c in line.chars() {
            if current_len == max_chars {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(c);
            current_len += 1;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Connect to the Discord gateway and answer prefixed commands until the
/// process is interrupted
pub async fn start_discord_listener(
    bot_token: &str,
    prefix: &str,
    bot: Arc<Bot>,
) -> Result<(), String> {
    log::info!("Discord: Starting listener with prefix {:?}", prefix);

    // Message content is needed to read command text
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = DiscordHandler {
        bot,
        prefix: prefix.to_string(),
    };

    let mut client = Client::builder(bot_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| format!("Failed to create Discord client: {}", e))?;

    let shard_manager = client.shard_manager.clone();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("Discord: Received shutdown signal");
            shard_manager.shutdown_all().await;
        }
        result = client.start() => {
            if let Err(e) = result {
                let error = format!("Discord client error: {}", e);
                log::error!("{}", error);
                return Err(error);
            }
        }
    }

    log::info!("Discord: Listener stopped");
    Ok(())
}
