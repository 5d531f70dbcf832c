//! Prefix command parsing and dispatch

mod clear;
mod fronter;
mod help;
mod leave_message;
mod read_message;
mod sysid;

use crate::bot::Bot;
use crate::error::ResolveError;

/// Commands understood after the prefix
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `sysid`
    SystemId,
    /// `fronter`
    Fronter,
    /// `leave_message <member> <text...>`
    LeaveMessage { member: String, message: String },
    /// `read_message <member>`
    ReadMessages { member: String },
    /// `clear <member>`
    Clear { member: String },
    /// `help`
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not a command this bot knows
    Unknown,
    /// A member command invoked without a member; carries the usage line
    MissingMember(&'static str),
}

impl ParseError {
    pub fn reply(&self) -> String {
        match self {
            ParseError::Unknown => "Could not parse.".to_string(),
            ParseError::MissingMember(usage) => format!("Missing member name. Usage: `{}`", usage),
        }
    }
}

/// Parse the text that followed the command prefix
pub fn parse(text: &str) -> Result<Command, ParseError> {
    let (name, rest) = match take_argument(text) {
        Some(split) => split,
        None => return Err(ParseError::Unknown),
    };
    let name = name.to_lowercase();

    log::debug!("Commands: Parsing '{}' with arguments {:?}", name, rest);

    match name.as_str() {
        "sysid" | "systemid" | "id" => Ok(Command::SystemId),
        "fronter" | "sysfronter" | "fronters" => Ok(Command::Fronter),
        "leave_message" | "leavemsg" | "leavemessage" | "leaveamsg" | "leaveamessage" => {
            let (member, message) = take_argument(rest)
                .ok_or(ParseError::MissingMember("leave_message <member> <message>"))?;
            Ok(Command::LeaveMessage {
                member,
                message: message.trim().to_string(),
            })
        }
        "read_message" | "readmsg" | "readmsgs" | "readmessage" | "readmessages" => {
            let (member, _) =
                take_argument(rest).ok_or(ParseError::MissingMember("read_message <member>"))?;
            Ok(Command::ReadMessages { member })
        }
        "clear" | "clearmessage" | "clearmessages" | "clearmsgs" | "clearmsg" => {
            let (member, _) =
                take_argument(rest).ok_or(ParseError::MissingMember("clear <member>"))?;
            Ok(Command::Clear { member })
        }
        "help" => Ok(Command::Help),
        _ => {
            log::debug!("Commands: Unknown command '{}'", name);
            Err(ParseError::Unknown)
        }
    }
}

/// Split one argument off the front of `text`. A double-quoted argument may
/// contain spaces (`"Mary Ann"`); an unterminated quote is taken literally.
fn take_argument(text: &str) -> Option<(String, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }

    if let Some(quoted) = text.strip_prefix('"') {
        if let Some(end) = quoted.find('"') {
            return Some((quoted[..end].to_string(), &quoted[end + 1..]));
        }
    }

    match text.find(char::is_whitespace) {
        Some(i) => Some((text[..i].to_string(), &text[i..])),
        None => Some((text.to_string(), "")),
    }
}

/// Execute a command; each returned string is sent as its own message
pub async fn execute(cmd: Command, sender_id: &str, bot: &Bot) -> Vec<String> {
    match cmd {
        Command::SystemId => vec![sysid::execute(sender_id, bot).await],
        Command::Fronter => vec![fronter::execute(sender_id, bot).await],
        Command::LeaveMessage { member, message } => {
            vec![leave_message::execute(sender_id, &member, &message, bot).await]
        }
        Command::ReadMessages { member } => read_message::execute(sender_id, &member, bot).await,
        Command::Clear { member } => vec![clear::execute(sender_id, &member, bot).await],
        Command::Help => vec![help::execute()],
    }
}

pub(crate) const UNREGISTERED_MESSAGE: &str = "Could not find your PluralKit system. \
    Either the PluralKit API is down or you have not registered a system.";

/// Reply for a member lookup that did not succeed
pub(crate) fn resolve_failure_message(err: &ResolveError) -> String {
    match err {
        ResolveError::SenderUnregistered => UNREGISTERED_MESSAGE.to_string(),
        ResolveError::RegistryUnavailable => "Your PluralKit members list is unavailable".to_string(),
        ResolveError::MemberNotFound(name) => format!("{} not found in member's list", name),
    }
}
