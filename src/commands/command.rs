//! Command table and line parsing.
//!
//! The command table is loaded from the configuration: each
//! [`CommandDescriptor`] lists the aliases of a command, its parameters for
//! the help output, and the [`Action`] that handles it.

use command_parser::Parser;
use log::debug;
use serde::Deserialize;

/// Handler bound to a command descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Stop,
    Pause,
    Resume,
    Join,
    Quit,
    Remove,
    Cards,
    Play,
    Winner,
    Pick,
    List,
    Points,
    Status,
    Decks,
    Deckinfo,
    Help,
    Test,
    Beer,
}

/// Type of a command parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Number,
}

/// Parameter of a command, used to render the help.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ParamType,
    #[serde(default)]
    pub required: bool,
    /// Whether the parameter accepts several values
    #[serde(default)]
    pub multiple: bool,
}

/// Immutable metadata of a command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandDescriptor {
    /// Aliases of the command, the first one is canonical
    pub commands: Vec<String>,
    #[serde(default)]
    pub params: Vec<Param>,
    /// Privilege flag, `o` for operator only commands
    #[serde(default)]
    pub flag: Option<String>,
    /// One line description
    pub info: String,
    pub action: Action,
}

impl CommandDescriptor {
    /// Canonical alias of the command.
    pub fn name(&self) -> &str {
        self.commands.first().map(String::as_str).unwrap_or_default()
    }

    /// Aliases other than the canonical one.
    pub fn aliases(&self) -> &[String] {
        self.commands.get(1..).unwrap_or_default()
    }

    pub fn is_operator_only(&self) -> bool {
        self.flag.as_deref() == Some("o")
    }
}

/// Returns the first command having `alias` among its aliases.
///
/// The lookup is case-sensitive.
pub fn find_command<'a>(
    commands: &'a [CommandDescriptor],
    alias: &str,
) -> Option<&'a CommandDescriptor> {
    commands
        .iter()
        .find(|command| command.commands.iter().any(|a| a == alias))
}

/// A prefixed chat line split into command name and arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

/// Errors that can occur during line parsing.
#[derive(Debug)]
pub enum CommandParsingError {
    /// The line is not a command
    UnableToParse,
}

impl CommandLine {
    /// Parses a chat line into a [`CommandLine`].
    ///
    /// # Arguments
    ///
    /// * `parser` - The command parser configured with the command prefix
    /// * `body` - The message text to parse
    ///
    /// # Errors
    ///
    /// Returns [`CommandParsingError::UnableToParse`] when the line does not
    /// start with the command prefix.
    ///
    /// Arguments are the whitespace separated tokens following the command
    /// word, passed untouched: dashes and quotes have no special meaning.
    pub fn parse(parser: &Parser, body: &str) -> Result<Self, CommandParsingError> {
        let mut tokens = body.split_whitespace();
        let head = tokens.next().ok_or(CommandParsingError::UnableToParse)?;

        // Only the command word goes through the parser, it drops dash-prefixed tokens and merges quoted ones
        // For an unknown reason the parser ignores the last word, so we add a dummy word at the end
        let head = head.to_string() + " dummy";

        // This is normal to fails if the message is not a command
        let command = match parser.parse(&head) {
            Ok(cmd) => cmd,
            Err(_) => return Err(CommandParsingError::UnableToParse),
        };

        debug!("Parsing command: {:?}", command);

        if command.name.is_empty() {
            return Err(CommandParsingError::UnableToParse);
        }

        Ok(CommandLine {
            name: command.name,
            args: tokens.map(str::to_owned).collect(),
        })
    }
}

/// Returns the numbers of a fast pick line, e.g. `1 3`.
///
/// A fast pick line is a non-prefixed line made only of numbers.
pub fn parse_fast_pick(body: &str) -> Option<Vec<String>> {
    let tokens = body
        .split_whitespace()
        .map(str::to_owned)
        .collect::<Vec<String>>();

    match !tokens.is_empty() && tokens.iter().all(|t| t.parse::<u32>().is_ok()) {
        true => Some(tokens),
        false => None,
    }
}
