//! Bot command routing and handling.
//!
//! This module turns chat lines into calls against the game engine and into
//! chat responses.
//!
//! # Overview
//!
//! 1. **Parsing** - A line starting with the command prefix is split into a
//!    command name and arguments
//! 2. **Resolution** - The name is looked up in the configured command table
//! 3. **Guarding** - Operator-only commands are refused to other users, and
//!    game commands stop early when no game is running
//! 4. **Execution** - The [`Action`] bound to the command runs its handler
//!
//! # Architecture
//!
//! ```text
//! Chat Message
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: handle_message()
//! └─────────────┘
//!      │
//!      ├── parse() ──────────────► CommandDescriptor + args
//!      │
//!      └── execute() ────────────┐
//!                                ▼
//!                     ┌─────────────────────┐
//!                     │ Action Handlers     │
//!                     │  - lifecycle        │
//!                     │  - gameplay / pick  │
//!                     │  - informational    │
//!                     │  - help             │
//!                     │  - beer             │
//!                     │  - deckinfo (async) │
//!                     └─────────────────────┘
//!                                │
//!                                ▼
//!                     GameEngine / ChatTransport
//! ```
//!
//! # Module Organization
//!
//! - [`commander`] - Routes chat lines to handlers
//! - [`command`] - Command table and line parsing
//! - [`actions`] - Individual command handler implementations
//! - [`chat_response`] - Response formatting utilities

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};

mod actions;
mod chat_response;
mod command;
mod commander;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::commands::command::{Action, CommandDescriptor, Param, ParamType};
pub use crate::commands::commander::Commander;
use crate::{
    chat::ChatTransport,
    commands::chat_response::format_no_game,
    config::Config,
    decks::DeckRepository,
    game::{GameEngine, GameFactory},
};

/// State and collaborators handed to every command handler.
///
/// It owns the game session of the channel: at most one game exists at a
/// time, created by `start` and dropped by `stop`.
pub struct CommandContext {
    /// Bot configuration
    pub config: Arc<Config>,
    /// Running game of the channel, if any
    pub game: Option<Box<dyn GameEngine>>,
    /// Chat output and channel queries
    pub transport: Arc<dyn ChatTransport>,
    /// Deck metadata source for `deckinfo`
    pub deck_repository: Arc<dyn DeckRepository>,
    /// Creates the game session on `start`
    pub game_factory: Box<dyn GameFactory>,
    /// Random source of the flavor texts
    pub rng: StdRng,
}

impl CommandContext {
    pub fn new(
        config: Arc<Config>,
        transport: Arc<dyn ChatTransport>,
        deck_repository: Arc<dyn DeckRepository>,
        game_factory: Box<dyn GameFactory>,
    ) -> Self {
        CommandContext {
            config,
            game: None,
            transport,
            deck_repository,
            game_factory,
            rng: StdRng::from_entropy(),
        }
    }

    /// Command prefix character.
    pub fn prefix(&self) -> char {
        self.config.chat.command_prefix
    }

    /// Says `message` in the game channel.
    pub fn say(&self, message: &str) {
        self.transport.say(message);
    }

    /// Returns `true` when no game is running.
    ///
    /// Unless `silent` is set, the channel is told how to start a game.
    pub fn no_game(&self, silent: bool) -> bool {
        if self.game.is_some() {
            return false;
        }
        if !silent {
            self.say(&format_no_game(self.prefix()));
        }
        true
    }
}

/// Errors that can occur when resolving a chat line.
///
/// Neither produces a response: chat lines that are not commands of this bot
/// are ignored.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    /// The line is not a command
    NotForBot,
    /// The command name is not in the command table
    UnknownCommand(String),
}
