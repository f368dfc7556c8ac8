//! Chat transport seam.
//!
//! The connection to the chat network is an external collaborator. Commands
//! only need to talk to the game channel and read who is in it, which is what
//! [`ChatTransport`] exposes.
//!
//! - [`ConsoleTransport`] writes channel output to stdout, used by the binary
//! - `RecordingTransport` keeps every output line in memory for tests

mod console;
#[cfg(test)]
mod recording;

pub use crate::chat::console::{ConsoleTransport, parse_console_line};
#[cfg(test)]
pub use crate::chat::recording::{Output, RecordingTransport};

/// Output primitives and channel queries available to command handlers.
///
/// Implementations are shared between the command handlers and the deck
/// lookup tasks, hence the `Send + Sync` bound.
pub trait ChatTransport: Send + Sync {
    /// Says `message` in the game channel.
    fn say(&self, message: &str);
    /// Sends `message` privately to `nick`.
    fn notice(&self, nick: &str, message: &str);
    /// Emits `message` as a third-person action of the bot in the game channel.
    fn action(&self, message: &str);
    /// Returns `true` when `nick` is currently in the game channel.
    fn nick_is_in_channel(&self, nick: &str) -> bool;
    /// Returns `true` when `nick` has operator privilege in the game channel.
    fn is_operator(&self, nick: &str) -> bool;
    /// Current nick of the bot.
    fn nick(&self) -> String;
}

/// An inbound chat line with the sender mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Nick of the sender
    pub nick: String,
    /// User part of the sender mask
    pub user: String,
    /// Host part of the sender mask
    pub host: String,
    /// Raw text of the line
    pub text: String,
}

impl Message {
    pub fn new(nick: &str, user: &str, host: &str, text: &str) -> Self {
        Message {
            nick: nick.to_owned(),
            user: user.to_owned(),
            host: host.to_owned(),
            text: text.to_owned(),
        }
    }
}
