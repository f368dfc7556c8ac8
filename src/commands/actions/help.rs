//! Help command handler.
//!
//! Renders the configured command table: a one-line summary of every command,
//! or the usage line of a single command.

use log::debug;

use crate::commands::{
    CommandContext,
    chat_response::{format_command_help, format_help_summary, format_no_command},
    command::find_command,
};

/// Says the command summary, or the details of the command named by the first
/// argument.
///
/// The requested name is lowercased before the lookup. An unknown name is
/// echoed back in the response.
pub fn handle_help(context: &CommandContext, args: &[String]) {
    debug!("handling help command: {:?}", args);

    let commands = &context.config.commands;
    let prefix = context.prefix();

    let help = match args.first() {
        None => format_help_summary(commands, prefix),
        Some(query) => {
            let alias = query.to_lowercase();
            match find_command(commands, &alias) {
                Some(command) => format_command_help(command, prefix),
                None => {
                    debug!("no command {:?} to describe", alias);
                    format_no_command(prefix, query)
                }
            }
        }
    };

    context.say(&help);
}
