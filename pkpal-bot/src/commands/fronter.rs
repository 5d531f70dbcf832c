//! Fronter command - replies with the member currently fronting

use super::UNREGISTERED_MESSAGE;
use crate::bot::Bot;

pub async fn execute(sender_id: &str, bot: &Bot) -> String {
    log::debug!("Commands: {} requested current fronter", sender_id);

    let system = match bot.registry().resolve_sender(sender_id).await {
        Ok(system) => system,
        Err(_) => return UNREGISTERED_MESSAGE.to_string(),
    };

    match bot.registry().list_fronters(sender_id, &system.id).await {
        Ok(fronters) => match fronters.first() {
            Some(member) => {
                log::debug!("Commands: Current fronter for {} is {}", sender_id, member.name);
                format!("Current fronter is {}", member.name)
            }
            None => {
                log::debug!("Commands: No current fronter for {}", sender_id);
                "No one is currently fronting.".to_string()
            }
        },
        Err(_) => {
            log::debug!(
                "Commands: Fronter list of system {} unavailable for {}",
                system.id,
                sender_id
            );
            "Your PluralKit fronter list is unavailable".to_string()
        }
    }
}
