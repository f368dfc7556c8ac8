//! Data structures shared with the game engine.
//!
//! The engine owns the roster and the round state machine; this module only
//! describes the values exchanged with it.

use std::fmt;

/// A participant of the game, identified by its IRC-style user mask.
///
/// The nick is a display value that can change during a game. The
/// (`user`, `hostname`) pair is the stable identity used to find the
/// acting player when a command arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Current nick of the player
    pub nick: String,
    /// User part of the mask
    pub user: String,
    /// Host part of the mask
    pub hostname: String,
}

impl Player {
    pub fn new(nick: &str, user: &str, hostname: &str) -> Self {
        Player {
            nick: nick.to_owned(),
            user: user.to_owned(),
            hostname: hostname.to_owned(),
        }
    }

    /// Returns the `user@hostname` form of the player identity.
    pub fn uhost(&self) -> String {
        format!("{}@{}", self.user, self.hostname)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}!{}@{}", self.nick, self.user, self.hostname)
    }
}

/// Lookup criteria for a player in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerFilter {
    /// Match on the display nick (moderation commands)
    Nick(String),
    /// Match on the stable identity (commands acting on the invoker)
    Identity { user: String, hostname: String },
}

impl PlayerFilter {
    pub fn identity(user: &str, hostname: &str) -> Self {
        PlayerFilter::Identity {
            user: user.to_owned(),
            hostname: hostname.to_owned(),
        }
    }

    /// Returns `true` when `player` satisfies the filter.
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            PlayerFilter::Nick(nick) => &player.nick == nick,
            PlayerFilter::Identity { user, hostname } => {
                &player.user == user && &player.hostname == hostname
            }
        }
    }
}

/// States reported by the game engine.
///
/// Only [`GameState::Playable`] and [`GameState::Played`] change how the
/// `pick` command is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The game is over
    Stopped,
    /// The game has been created and waits for the first round
    Started,
    /// Players can play their cards
    Playable,
    /// Every player has played, the czar picks a winner
    Played,
    /// A round just ended
    RoundEnd,
    /// Not enough players to continue
    Waiting,
    /// The game has been paused
    Paused,
}
