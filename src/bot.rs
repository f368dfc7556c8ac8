//! Bot module wiring the chat transport to the command layer.
//!
//! This module provides the main [`Bot`] implementation. It reads chat lines,
//! keeps track of who is in the channel, and hands every line to the
//! [`Commander`].
//!
//! # Command Processing Flow
//!
//! ```text
//! Console Line → Sender Mask → Commander → Handler → Transport output
//! ```
//!
//! Deck lookups run as background tasks. Lines keep being handled while they
//! are pending, and they are awaited before the bot stops.

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    task::JoinHandle,
};

use crate::{
    chat::{ChatTransport, ConsoleTransport, parse_console_line},
    commands::{CommandContext, Commander},
    config::Config,
    decks::DeckRequester,
    game::ConsoleGameFactory,
};

/// Chat bot running a game in a single channel.
pub struct Bot {
    /// Routes chat lines to command handlers
    commander: Commander,
    /// Channel output and membership
    transport: Arc<ConsoleTransport>,
}

impl Bot {
    /// Creates a new bot from `config`.
    ///
    /// The bot talks on the console transport, fetches decks from the
    /// configured repository, and plays console games.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration cannot be used to set up the
    /// bot, e.g. an empty command table.
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        if config.commands.is_empty() {
            anyhow::bail!("the command table is empty");
        }

        let transport = Arc::new(ConsoleTransport::new(
            &config.chat.channel,
            &config.chat.nick,
            &config.chat.operators,
        ));
        let deck_repository = Arc::new(DeckRequester::new(&config.decks_api.url));
        let game_factory = Box::new(ConsoleGameFactory::new(
            transport.clone(),
            &config.game.default_decks,
        ));

        info!(
            "{} joins {} with {} commands",
            config.chat.nick,
            config.chat.channel,
            config.commands.len()
        );

        let context = CommandContext::new(
            Arc::new(config),
            transport.clone(),
            deck_repository,
            game_factory,
        );

        Ok(Bot {
            commander: Commander::new(context),
            transport,
        })
    }

    /// Starts the bot on the standard input, until it is closed.
    pub async fn start(mut self) {
        let reader = BufReader::new(tokio::io::stdin());
        if let Err(e) = self.run(reader).await {
            error!("Failed to read chat lines: {}", e);
        }
        info!("Input closed, stopping bot");
    }

    /// Handles every line of `reader` until its end.
    ///
    /// Lines without a sender mask are skipped.
    async fn run<R: AsyncBufRead + Unpin>(&mut self, reader: R) -> Result<(), anyhow::Error> {
        let mut lines = reader.lines();
        let mut tasks: Vec<JoinHandle<()>> = Vec::new();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let Some(message) = parse_console_line(&line) else {
                warn!("Skipping line without sender mask: {:?}", line);
                continue;
            };

            debug!("message from {}: {}", message.nick, message.text);
            self.transport.add_member(&message.nick);

            if let Some(task) = self.commander.handle_message(&message) {
                tasks.push(task);
            }
            tasks.retain(|task| !task.is_finished());
        }

        for task in tasks {
            if let Err(e) = task.await {
                error!("Deck lookup task failed: {}", e);
            }
        }

        Ok(())
    }
}
