//! Leave message command - stores a note for a member of the sender's system

use super::resolve_failure_message;
use crate::bot::Bot;
use crate::resolve::resolve_member;

pub async fn execute(sender_id: &str, member: &str, message: &str, bot: &Bot) -> String {
    log::debug!("Commands: {} requested to leave a message for {}", sender_id, member);

    let member = match resolve_member(bot.registry(), sender_id, member).await {
        Ok(member) => member,
        Err(e) => return resolve_failure_message(&e),
    };

    if message.is_empty() {
        return "No message given so none saved".to_string();
    }

    match bot.notes().append(sender_id, &member.name, message).await {
        Ok(()) => format!("Message for {} saved successfully.", member.name),
        Err(_) => "Bot error. Message not saved.".to_string(),
    }
}
