//! Stand-in game session for the console binary.
//!
//! It keeps the roster so that identity lookups work, and announces every
//! forwarded request in the channel. It never deals cards nor advances rounds.

use std::sync::Arc;

use log::info;

use crate::{
    chat::ChatTransport,
    game::{GameEngine, GameFactory, GameState, Player, PlayerFilter},
};

pub struct ConsoleGame {
    transport: Arc<dyn ChatTransport>,
    players: Vec<Player>,
    removed: Vec<String>,
    state: GameState,
}

impl ConsoleGame {
    pub fn new(transport: Arc<dyn ChatTransport>, point_limit: u32, decks: &[String]) -> Self {
        transport.say(&format!(
            "Game created, playing to {} points with decks: {}",
            point_limit,
            decks.join(", ")
        ));

        ConsoleGame {
            transport,
            players: Vec::new(),
            removed: Vec::new(),
            state: GameState::Waiting,
        }
    }
}

impl GameEngine for ConsoleGame {
    fn get_player(&self, filter: &PlayerFilter) -> Option<Player> {
        self.players.iter().find(|p| filter.matches(p)).cloned()
    }

    fn get_player_uhost(&self, player: &Player) -> String {
        player.uhost()
    }

    fn get_player_nicks(&self) -> Vec<String> {
        self.players.iter().map(|p| p.nick.clone()).collect()
    }

    fn add_player(&mut self, player: Player) {
        if self.removed.contains(&player.uhost()) {
            self.transport
                .say(&format!("{} has been removed from this game.", player.nick));
            return;
        }
        if self.get_player(&PlayerFilter::Nick(player.nick.clone())).is_some() {
            return;
        }
        self.transport
            .say(&format!("{} has joined the game.", player.nick));
        self.players.push(player);
    }

    fn remove_player(&mut self, player: &Player) {
        self.players.retain(|p| p != player);
        self.transport
            .say(&format!("{} has left the game.", player.nick));
    }

    fn stop(&mut self, player: Option<Player>) {
        self.state = GameState::Stopped;
        match player {
            Some(player) => self
                .transport
                .say(&format!("{} stopped the game.", player.nick)),
            None => self.transport.say("Game has been stopped."),
        }
    }

    fn pause(&mut self) {
        self.state = GameState::Paused;
        self.transport.say("Game is now paused.");
    }

    fn resume(&mut self) {
        self.state = GameState::Waiting;
        self.transport.say("Game has been resumed.");
    }

    fn show_cards(&mut self, player: &Player) {
        self.transport
            .notice(&player.nick, "No cards are dealt in console mode.");
    }

    fn play_card(&mut self, args: Vec<String>, player: &Player, _fast_pick: bool) {
        info!("{} plays {:?}", player, args);
    }

    fn select_winner(&mut self, arg: Option<String>, player: &Player, _fast_pick: bool) {
        info!("{} picks {:?}", player, arg);
    }

    fn list_players(&self) {
        self.transport
            .say(&format!("Players currently in the game: {}", self.get_player_nicks().join(", ")));
    }

    fn show_points(&self) {
        self.transport.say("No points are scored in console mode.");
    }

    fn show_status(&self) {
        self.transport.say(&format!("Game status: {:?}", self.state));
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn push_removed(&mut self, uhost: String) {
        self.removed.push(uhost);
    }
}

/// Creates [`ConsoleGame`] sessions.
///
/// A game started without deck codes is played with the default decks.
pub struct ConsoleGameFactory {
    transport: Arc<dyn ChatTransport>,
    default_decks: Vec<String>,
}

impl ConsoleGameFactory {
    pub fn new(transport: Arc<dyn ChatTransport>, default_decks: &[String]) -> Self {
        ConsoleGameFactory {
            transport,
            default_decks: default_decks.to_vec(),
        }
    }
}

impl GameFactory for ConsoleGameFactory {
    fn create(&self, point_limit: u32, decks: Vec<String>) -> Box<dyn GameEngine> {
        let decks = match decks.is_empty() {
            true => self.default_decks.clone(),
            false => decks,
        };
        Box::new(ConsoleGame::new(Arc::clone(&self.transport), point_limit, &decks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::RecordingTransport;

    fn create_game() -> (ConsoleGame, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new("cahbot"));
        let game = ConsoleGame::new(transport.clone(), 10, &["ABCDE".to_owned()]);
        (game, transport)
    }

    #[test]
    fn test_new_game_announces_decks() {
        let (_, transport) = create_game();
        assert_eq!(
            transport.said(),
            vec!["Game created, playing to 10 points with decks: ABCDE"]
        );
    }

    #[test]
    fn test_factory_falls_back_to_default_decks() {
        let transport = Arc::new(RecordingTransport::new("cahbot"));
        let factory = ConsoleGameFactory::new(transport.clone(), &["CAHBS".to_owned()]);

        factory.create(5, vec![]);
        factory.create(8, vec!["ABCDE".to_owned()]);

        assert_eq!(
            transport.said(),
            vec![
                "Game created, playing to 5 points with decks: CAHBS",
                "Game created, playing to 8 points with decks: ABCDE"
            ]
        );
    }

    #[test]
    fn test_roster_lookup() {
        let (mut game, _) = create_game();
        game.add_player(Player::new("alice", "al", "example.org"));

        assert!(game.get_player(&PlayerFilter::identity("al", "example.org")).is_some());
        assert_eq!(game.get_player_nicks(), vec!["alice"]);

        let alice = game.get_player(&PlayerFilter::Nick("alice".to_owned())).unwrap();
        game.remove_player(&alice);
        assert!(game.get_player_nicks().is_empty());
    }

    #[test]
    fn test_removed_players_cannot_join_again() {
        let (mut game, transport) = create_game();
        let alice = Player::new("alice", "al", "example.org");
        game.push_removed(alice.uhost());
        game.add_player(alice);

        assert!(game.get_player_nicks().is_empty());
        assert!(transport.said().contains(&"alice has been removed from this game.".to_owned()));
    }

    #[test]
    fn test_pause_and_resume() {
        let (mut game, _) = create_game();
        game.pause();
        assert_eq!(game.state(), GameState::Paused);
        game.resume();
        assert_eq!(game.state(), GameState::Waiting);
    }
}
