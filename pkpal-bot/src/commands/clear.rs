//! Clear command - removes every note left for a member

use super::resolve_failure_message;
use crate::bot::Bot;
use crate::resolve::resolve_member;

pub async fn execute(sender_id: &str, member: &str, bot: &Bot) -> String {
    log::debug!("Commands: {} requested to clear messages for {}", sender_id, member);

    let member = match resolve_member(bot.registry(), sender_id, member).await {
        Ok(member) => member,
        Err(e) => return resolve_failure_message(&e),
    };

    match bot.notes().clear(sender_id, &member.name).await {
        Ok(_) => format!("Messages of {} cleared.", member.name),
        Err(_) => "Bot error. Messages not cleared.".to_string(),
    }
}
