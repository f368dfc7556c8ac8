//! Configuration file structures for the cahbot.
//!
//! The configuration is a YAML file, any value of which can be overridden with
//! an environment variable prefixed by `CAHBOT_` (nested keys are separated by
//! `__`, e.g. `CAHBOT_GAME__POINT_LIMIT=5`).
//!
//! # Configuration File Format
//!
//! ```yaml
//! chat:
//!   nick: "cahbot"
//!   channel: "#cah"
//!   command_prefix: "!"
//!   operators: ["alice"]
//!
//! game:
//!   point_limit: 10
//!   start_on_first_join: true
//!   enable_fast_pick: true
//!   decks: ["CAHBS", "CAHE1"]
//!   default_decks: ["CAHBS"]
//!
//! beers: ["Blue Moon", "Guinness"]
//!
//! decks_api:
//!   url: "https://api.cardcastgame.com/v1"
//!
//! commands:
//!   - commands: ["start", "s"]
//!     action: start
//!     params:
//!       - { name: "points", type: "number" }
//!       - { name: "deck", multiple: true }
//!     info: "Start a new game."
//! ```

use anyhow::{Context, bail};
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::commands::CommandDescriptor;

/// Prefix of the environment variables overriding the file values.
const ENV_PREFIX: &str = "CAHBOT_";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Chat channel settings
    pub chat: Chat,
    /// Game session settings
    pub game: Game,
    /// Beverages poured by the `beer` command
    #[serde(default)]
    pub beers: Vec<String>,
    /// Deck repository settings
    pub decks_api: DecksApi,
    /// Command table, in the order shown by `help`
    pub commands: Vec<CommandDescriptor>,
}

/// Chat channel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Nick of the bot
    pub nick: String,
    /// Channel where the game is played
    pub channel: String,
    /// Character starting every command
    #[serde(default = "default_command_prefix")]
    pub command_prefix: char,
    /// Nicks allowed to run operator commands
    #[serde(default)]
    pub operators: Vec<String>,
}

/// Game configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    /// Points needed to win when `start` gives no limit
    pub point_limit: u32,
    /// Whether `join` starts a game when none is running
    #[serde(default)]
    pub start_on_first_join: bool,
    /// Whether a bare list of numbers is treated as a `pick`
    #[serde(default)]
    pub enable_fast_pick: bool,
    /// Deck codes that can be loaded
    #[serde(default)]
    pub decks: Vec<String>,
    /// Deck codes loaded when `start` names none
    #[serde(default)]
    pub default_decks: Vec<String>,
}

/// Deck repository configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DecksApi {
    /// Base url of the repository API
    pub url: String,
    /// Prefix of the canonical deck page, the deck code is appended to it
    #[serde(default = "default_browse_url")]
    pub browse_url: String,
}

fn default_command_prefix() -> char {
    '!'
}

fn default_browse_url() -> String {
    "https://www.cardcastgame.com/browse/deck/".to_owned()
}

impl Config {
    /// Loads the configuration from the YAML file at `path`, then applies the
    /// `CAHBOT_` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed, a required value is
    /// missing, or the command table is invalid.
    pub fn load(path: &str) -> Result<Self, anyhow::Error> {
        let config: Config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("invalid configuration in {}", path))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if let Some(position) = self.commands.iter().position(|c| c.commands.is_empty()) {
            bail!("command #{} has no alias", position + 1);
        }
        if self.chat.command_prefix.is_whitespace() {
            bail!("command prefix cannot be a whitespace");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::commands::{Action, ParamType};

    const CONFIG: &str = r##"
chat:
  nick: "cahbot"
  channel: "#cah"
game:
  point_limit: 10
  decks: ["CAHBS", "CAHE1"]
  default_decks: ["CAHBS"]
beers: ["Guinness"]
decks_api:
  url: "http://decks.example/v1"
commands:
  - commands: ["start", "s"]
    action: start
    params:
      - { name: "points", type: "number" }
      - { name: "deck", multiple: true }
    info: "Start a new game."
  - commands: ["stop"]
    action: stop
    flag: "o"
    info: "Stop the game."
"##;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_config() {
        let file = write_config(CONFIG);
        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.chat.nick, "cahbot");
        assert_eq!(config.chat.command_prefix, '!');
        assert!(config.chat.operators.is_empty());
        assert_eq!(config.game.point_limit, 10);
        assert!(!config.game.start_on_first_join);
        assert_eq!(config.game.decks, vec!["CAHBS", "CAHE1"]);
        assert_eq!(config.decks_api.browse_url, "https://www.cardcastgame.com/browse/deck/");

        assert_eq!(config.commands.len(), 2);
        let start = &config.commands[0];
        assert_eq!(start.action, Action::Start);
        assert_eq!(start.params[0].kind, ParamType::Number);
        assert!(!start.params[0].required);
        assert!(start.params[1].multiple);
        assert!(config.commands[1].is_operator_only());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = write_config(CONFIG);
        // SAFETY: serialized with the other tests touching the environment
        unsafe {
            std::env::set_var("CAHBOT_GAME__POINT_LIMIT", "5");
            std::env::set_var("CAHBOT_CHAT__COMMAND_PREFIX", ".");
        }

        let config = Config::load(file.path().to_str().unwrap());

        unsafe {
            std::env::remove_var("CAHBOT_GAME__POINT_LIMIT");
            std::env::remove_var("CAHBOT_CHAT__COMMAND_PREFIX");
        }

        let config = config.unwrap();
        assert_eq!(config.game.point_limit, 5);
        assert_eq!(config.chat.command_prefix, '.');
    }

    #[test]
    #[serial]
    fn test_missing_section_fails() {
        let file = write_config("chat:\n  nick: cahbot\n  channel: \"#cah\"\n");
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    #[serial]
    fn test_unknown_action_fails() {
        let content = CONFIG.replace("action: stop", "action: dance");
        let file = write_config(&content);
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    #[serial]
    fn test_command_without_alias_fails() {
        let content = CONFIG.replace(r#"commands: ["stop"]"#, "commands: []");
        let file = write_config(&content);
        let error = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(error.to_string().contains("no alias"));
    }
}
