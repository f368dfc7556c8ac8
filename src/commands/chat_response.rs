//! Chat response formatters for bot commands.
//!
//! Every line the command layer sends to the channel is built here. Responses
//! are plain text, `prefix` is the configured command prefix character.

use crate::{
    commands::{CommandDescriptor, ParamType},
    decks::DeckInfo,
    utils::truncate_chars,
};

/// Maximum length of the `deckinfo` line.
const MAX_DECK_INFO_LENGTH: usize = 400;

/// Formats the notice sent when a command needs a running game.
///
/// # Examples
///
/// ```text
/// No game running. Start the game by typing !start.
/// ```
pub fn format_no_game(prefix: char) -> String {
    format!("No game running. Start the game by typing {}start.", prefix)
}

pub fn format_already_in_game() -> String {
    "You are already in the current game.".to_owned()
}

pub fn format_game_running(prefix: char) -> String {
    format!("A game is already running. Type {}join to join the game.", prefix)
}

/// Formats the list of deck codes that could not be loaded by `start`.
///
/// # Arguments
///
/// * `decks` - Well-formed deck codes that are not enabled
/// * `prefix` - The command prefix character
pub fn format_failed_decks(decks: &[String], prefix: char) -> String {
    format!(
        "Could not load decks: {}; see {}decks",
        decks.join(", "),
        prefix
    )
}

pub fn format_not_playing(nick: &str) -> String {
    format!("{} is not currently playing.", nick)
}

pub fn format_remove_usage(prefix: char) -> String {
    format!("Usage: {}remove <nick>", prefix)
}

pub fn format_pick_unavailable(prefix: char) -> String {
    format!("{}pick command not available in current state.", prefix)
}

/// Formats the notice refusing an operator command.
pub fn format_operator_only(prefix: char, command: &str) -> String {
    format!(
        "You must be a channel operator to use {}{}.",
        prefix, command
    )
}

pub fn format_test_notice() -> String {
    "Can you hear me now?".to_owned()
}

/// Formats the available and default decks.
pub fn format_decks(decks: &[String], default_decks: &[String], prefix: char) -> String {
    format!(
        "Card decks available (use {}deckinfo for details): {}; default decks: {}",
        prefix,
        decks.join(", "),
        default_decks.join(", ")
    )
}

/// Formats the alias list of a command: `!b, !c` for aliases `["a", "b", "c"]`.
fn format_aliases(command: &CommandDescriptor, prefix: char) -> String {
    command
        .aliases()
        .iter()
        .map(|alias| format!("{}{}", prefix, alias))
        .collect::<Vec<String>>()
        .join(", ")
}

/// Formats the summary of every command, in table order.
///
/// Each command is shown by its canonical alias, followed by its other aliases
/// in parentheses when it has some.
///
/// # Examples
///
/// ```text
/// Commands: !start (!s); !stop; !join (!j) [!help <command> for details]
/// ```
pub fn format_help_summary(commands: &[CommandDescriptor], prefix: char) -> String {
    let summary = commands
        .iter()
        .map(|command| match command.aliases().is_empty() {
            true => format!("{}{}", prefix, command.name()),
            false => format!(
                "{}{} ({})",
                prefix,
                command.name(),
                format_aliases(command, prefix)
            ),
        })
        .collect::<Vec<String>>()
        .join("; ");

    format!(
        "Commands: {} [{}help <command> for details]",
        summary, prefix
    )
}

/// Formats the detailed help of a single command.
///
/// Required parameters are shown as `<name>`, optional ones as `[name]`.
/// Numeric parameters get a `Number` suffix and repeatable ones a `, ...`
/// suffix.
///
/// # Examples
///
/// ```text
/// !remove <nick> - (op) Remove a player from the game. (aliases: !kick)
/// ```
pub fn format_command_help(command: &CommandDescriptor, prefix: char) -> String {
    let mut help = format!("{}{}", prefix, command.name());

    for param in &command.params {
        let mut param_help = param.name.clone();
        if param.kind == ParamType::Number {
            param_help.push_str("Number");
        }
        if param.multiple {
            param_help.push_str(", ...");
        }
        match param.required {
            true => help.push_str(&format!(" <{}>", param_help)),
            false => help.push_str(&format!(" [{}]", param_help)),
        }
    }

    help.push_str(" - ");
    if command.is_operator_only() {
        help.push_str("(op) ");
    }
    help.push_str(&command.info);

    if !command.aliases().is_empty() {
        help.push_str(&format!(" (aliases: {})", format_aliases(command, prefix)));
    }

    help
}

pub fn format_no_command(prefix: char, query: &str) -> String {
    format!("No command \"{}{}\"", prefix, query)
}

pub fn format_not_enough_beer() -> String {
    "There's not enough beer!".to_owned()
}

/// Formats the action of the bot pouring a beer for itself.
pub fn format_self_beer(beer: &str, from: &str) -> String {
    format!(
        "pours itself a tall, cold glass of {}. cheers, {}!",
        beer, from
    )
}

pub fn format_invalid_deck_code(code: &str) -> String {
    format!("Invalid deck code format: {}", code)
}

pub fn format_deck_not_enabled(code: &str) -> String {
    format!(
        "Deck {} is not enabled. If you really want it, yell about it.",
        code
    )
}

/// Formats the `deckinfo` line, cut to 400 characters.
///
/// # Examples
///
/// ```text
/// ABCDE: "Geek Pack" [12/40] by alice on 2014-09-06 (https://www.cardcastgame.com/browse/deck/ABCDE) - For nerds
/// ```
pub fn format_deck_info(info: &DeckInfo) -> String {
    let line = format!(
        "{}: \"{}\" [{}/{}] by {} on {} ({}) - {}",
        info.code,
        info.name,
        info.calls,
        info.responses,
        info.author,
        info.created,
        info.url,
        info.description
    );

    truncate_chars(&line, MAX_DECK_INFO_LENGTH)
}

pub fn format_deck_error(kind: &str, message: &str) -> String {
    format!("Error {}: {}", kind, message)
}
