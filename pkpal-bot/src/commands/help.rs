//! Help command - shows available commands

/// Execute the help command
pub fn execute() -> String {
    "**PK Pal Commands**\n\n\
    - `sysid` (`systemid`, `id`) - Show your PluralKit system ID\n\
    - `fronter` (`sysfronter`, `fronters`) - Show who is currently fronting\n\
    - `leave_message <member> <message>` (`leavemsg`, `leavemessage`, `leaveamsg`, `leaveamessage`) - Leave a message for a member\n\
    - `read_message <member>` (`readmsg`, `readmsgs`, `readmessage`, `readmessages`) - Read the messages left for a member\n\
    - `clear <member>` (`clearmessage`, `clearmessages`, `clearmsgs`, `clearmsg`) - Delete the messages left for a member\n\
    - `help` - Show this help message\n\n\
    Wrap member names containing spaces in double quotes: `leavemsg \"Mary Ann\" hi!`"
        .to_string()
}
