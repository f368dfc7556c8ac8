//! Cahbot - A chat bot running Cards Against Humanity games.
//!
//! This is the main entry point for the cahbot, the command interpreter of a
//! chat-room card game. Players type commands in the game channel, the bot
//! validates them against the state of the running game and forwards them to
//! the game engine.
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings (see [`config`] for the
//! complete format):
//!
//! ```yaml
//! chat:
//!   nick: "cahbot"
//!   channel: "#cah"
//!
//! game:
//!   point_limit: 10
//!   decks: ["CAHBS", "CAHE1"]
//!
//! decks_api:
//!   url: "https://api.cardcastgame.com/v1"
//!
//! commands:
//!   - commands: ["join", "j"]
//!     action: join
//!     info: "Join the game."
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `CAHBOT_` prefix:
//!
//! ```bash
//! export CAHBOT_CHAT__CHANNEL="#cards"
//! export CAHBOT_GAME__POINT_LIMIT=5
//! ```
//!
//! # Usage
//!
//! ```bash
//! cahbot --config config.yaml
//! ```
//!
//! Chat lines are read on the standard input as `nick!user@host text`, and
//! the bot output is written on the standard output.
//!
//! # Bot Commands
//!
//! The command table comes from the configuration. The shipped one provides:
//!
//! - `!start [points] [deck, ...]`, `!stop`, `!pause`, `!resume` - Game lifecycle
//! - `!join`, `!quit`, `!remove <nick>` - Roster
//! - `!cards`, `!play <card, ...>`, `!winner <card>`, `!pick <card, ...>` - Rounds
//! - `!list`, `!points`, `!status`, `!decks`, `!deckinfo <code>` - Information
//! - `!help [command]`, `!test`, `!beer [nick, ...]` - Miscellaneous
//!
//! # Architecture
//!
//! The bot consists of several modules:
//!
//! - [`bot`] - Main loop reading chat lines
//! - [`chat`] - Chat transport seam and console transport
//! - [`commands`] - Command parsing, routing and handlers
//! - [`config`] - YAML configuration file structures and loading with environment variable support
//! - [`decks`] - Deck repository API client
//! - [`game`] - Game engine seam and console game
//! - [`utils`] - Text helpers
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` for verbose output
//!   - Set to `warn` or `error` for minimal logging

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod chat;
mod commands;
mod config;
mod decks;
mod game;
mod utils;

/// Command-line arguments for the cahbot.
///
/// Most configuration is done through the YAML file (see [`config::Config`]).
///
/// # Examples
///
/// ```bash
/// cahbot --config config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Values can be overridden with `CAHBOT_` environment variables, nested
    /// keys being separated by `__`.
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

/// Main entry point for the cahbot.
///
/// 1. **Logging Setup**: Configures the logger with `info` level by default
///    (can be overridden with the `RUST_LOG` environment variable)
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Reads the YAML configuration file and applies
///    the environment overrides
/// 4. **Bot Execution**: Handles chat lines until the input is closed
///
/// Configuration errors are logged and end the process without panicking.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting cahbot {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {:#}", e);
            return;
        }
    };

    let bot = match Bot::new(config) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };
    bot.start().await;
}
