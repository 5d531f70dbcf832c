//! Read message command - sends back every note left for a member

use super::resolve_failure_message;
use crate::bot::Bot;
use crate::resolve::resolve_member;

/// One reply per stored note, so each arrives as its own Discord message
pub async fn execute(sender_id: &str, member: &str, bot: &Bot) -> Vec<String> {
    log::debug!("Commands: {} requested saved messages of {}", sender_id, member);

    let member = match resolve_member(bot.registry(), sender_id, member).await {
        Ok(member) => member,
        Err(e) => return vec![resolve_failure_message(&e)],
    };

    match bot.notes().fetch_all(sender_id, &member.name).await {
        Ok(notes) if notes.is_empty() => vec![format!("No messages left for {}.", member.name)],
        Ok(notes) => notes,
        Err(_) => vec!["Bot error. Messages not obtained.".to_string()],
    }
}
