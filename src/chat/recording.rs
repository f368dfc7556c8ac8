//! In-memory transport used by tests.

use std::{
    collections::HashSet,
    sync::{Mutex, PoisonError},
};

use crate::chat::ChatTransport;

/// One line emitted through the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Say(String),
    Notice(String, String),
    Action(String),
}

/// Records every output line and answers channel queries from fixed sets.
pub struct RecordingTransport {
    nick: String,
    members: HashSet<String>,
    operators: HashSet<String>,
    outputs: Mutex<Vec<Output>>,
}

impl RecordingTransport {
    pub fn new(nick: &str) -> Self {
        RecordingTransport {
            nick: nick.to_owned(),
            members: HashSet::new(),
            operators: HashSet::new(),
            outputs: Mutex::new(Vec::new()),
        }
    }

    pub fn with_members(mut self, members: &[&str]) -> Self {
        self.members = members.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_operators(mut self, operators: &[&str]) -> Self {
        self.operators = operators.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn outputs(&self) -> Vec<Output> {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines said in the channel.
    pub fn said(&self) -> Vec<String> {
        self.outputs()
            .into_iter()
            .filter_map(|o| match o {
                Output::Say(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Actions emitted in the channel.
    pub fn actions(&self) -> Vec<String> {
        self.outputs()
            .into_iter()
            .filter_map(|o| match o {
                Output::Action(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, output: Output) {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(output);
    }
}

impl ChatTransport for RecordingTransport {
    fn say(&self, message: &str) {
        self.push(Output::Say(message.to_owned()));
    }

    fn notice(&self, nick: &str, message: &str) {
        self.push(Output::Notice(nick.to_owned(), message.to_owned()));
    }

    fn action(&self, message: &str) {
        self.push(Output::Action(message.to_owned()));
    }

    fn nick_is_in_channel(&self, nick: &str) -> bool {
        self.members.contains(nick)
    }

    fn is_operator(&self, nick: &str) -> bool {
        self.operators.contains(nick)
    }

    fn nick(&self) -> String {
        self.nick.clone()
    }
}
