//! Terminal transport.
//!
//! Inbound lines are read as `nick!user@host text`; every nick seen is
//! considered present in the channel.

use std::{
    collections::HashSet,
    sync::{Mutex, PoisonError},
};

use log::debug;

use crate::chat::{ChatTransport, Message};

/// Prints channel output on stdout.
pub struct ConsoleTransport {
    /// Name of the game channel
    channel: String,
    /// Nick of the bot
    nick: String,
    /// Nicks granted operator privilege
    operators: HashSet<String>,
    /// Nicks seen in the channel
    members: Mutex<HashSet<String>>,
}

impl ConsoleTransport {
    pub fn new(channel: &str, nick: &str, operators: &[String]) -> Self {
        ConsoleTransport {
            channel: channel.to_owned(),
            nick: nick.to_owned(),
            operators: operators.iter().cloned().collect(),
            members: Mutex::new(HashSet::new()),
        }
    }

    /// Marks `nick` as present in the channel.
    pub fn add_member(&self, nick: &str) {
        let mut members = self.members.lock().unwrap_or_else(PoisonError::into_inner);
        if members.insert(nick.to_owned()) {
            debug!("{} joined {}", nick, self.channel);
        }
    }
}

impl ChatTransport for ConsoleTransport {
    fn say(&self, message: &str) {
        println!("[{}] <{}> {}", self.channel, self.nick, message);
    }

    fn notice(&self, nick: &str, message: &str) {
        println!("-{}- {}: {}", self.nick, nick, message);
    }

    fn action(&self, message: &str) {
        println!("[{}] * {} {}", self.channel, self.nick, message);
    }

    fn nick_is_in_channel(&self, nick: &str) -> bool {
        nick == self.nick
            || self
                .members
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(nick)
    }

    fn is_operator(&self, nick: &str) -> bool {
        self.operators.contains(nick)
    }

    fn nick(&self) -> String {
        self.nick.clone()
    }
}

/// Parses a console line of the form `nick!user@host text`.
///
/// Returns `None` when the sender mask is missing or incomplete.
pub fn parse_console_line(line: &str) -> Option<Message> {
    let (mask, text) = line.trim().split_once(char::is_whitespace)?;
    let (nick, uhost) = mask.split_once('!')?;
    let (user, host) = uhost.split_once('@')?;

    if nick.is_empty() || user.is_empty() || host.is_empty() {
        return None;
    }

    Some(Message::new(nick, user, host, text.trim()))
}
