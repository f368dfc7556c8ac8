//! Game engine integration.
//!
//! The round state machine, card dealing and scoring live in an external game
//! engine. This module defines the narrow contract the command layer consumes:
//!
//! - [`GameEngine`] - one running game session
//! - [`GameFactory`] - creates a session when `start` succeeds
//! - [`Player`], [`PlayerFilter`], [`GameState`] - values exchanged with the engine
//!
//! A console game session is provided to drive the bot from a terminal without the
//! real engine.

mod console;
mod structs;

use mockall::automock;

pub use crate::game::console::ConsoleGameFactory;
pub use crate::game::structs::{GameState, Player, PlayerFilter};

/// Operations of a running game session.
///
/// The engine is responsible for its own channel output (card lists, scores,
/// round announcements). The command layer only forwards validated requests.
#[automock]
pub trait GameEngine {
    /// Finds a player of the roster.
    fn get_player(&self, filter: &PlayerFilter) -> Option<Player>;
    /// Returns the identity of `player` in `user@hostname` form.
    fn get_player_uhost(&self, player: &Player) -> String;
    /// Returns the nicks of every player in the roster.
    fn get_player_nicks(&self) -> Vec<String>;
    fn add_player(&mut self, player: Player);
    fn remove_player(&mut self, player: &Player);
    /// Stops the game; `player` is the one who asked for it, if known.
    fn stop(&mut self, player: Option<Player>);
    fn pause(&mut self);
    fn resume(&mut self);
    fn show_cards(&mut self, player: &Player);
    /// Plays cards; token interpretation is left to the engine.
    fn play_card(&mut self, args: Vec<String>, player: &Player, fast_pick: bool);
    fn select_winner(&mut self, arg: Option<String>, player: &Player, fast_pick: bool);
    fn list_players(&self);
    fn show_points(&self);
    fn show_status(&self);
    /// Current state of the round state machine.
    fn state(&self) -> GameState;
    /// Appends an identity to the audit list of removed players.
    fn push_removed(&mut self, uhost: String);
}

/// Creates game sessions.
#[automock]
pub trait GameFactory {
    /// Creates a game played until `point_limit` with the given deck codes loaded.
    fn create(&self, point_limit: u32, decks: Vec<String>) -> Box<dyn GameEngine>;
}
