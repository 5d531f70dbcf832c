//! Sysid command - replies with the sender's PluralKit system ID

use super::UNREGISTERED_MESSAGE;
use crate::bot::Bot;

pub async fn execute(sender_id: &str, bot: &Bot) -> String {
    log::debug!("Commands: {} requested system ID", sender_id);

    match bot.registry().resolve_sender(sender_id).await {
        Ok(system) => format!("Your system ID is '{}'.", system.id),
        Err(_) => UNREGISTERED_MESSAGE.to_string(),
    }
}
