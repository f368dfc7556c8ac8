//! Shared fixtures of the command tests.

use std::sync::Arc;

use figment::{
    Figment,
    providers::{Format, Yaml},
};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    chat::{Message, RecordingTransport},
    commands::CommandContext,
    config::Config,
    decks::MockDeckRepository,
    game::{MockGameFactory, Player, PlayerFilter},
};

/// The configuration shipped with the bot.
pub fn create_test_config() -> Config {
    Figment::from(Yaml::string(include_str!("../../config.yaml")))
        .extract()
        .unwrap()
}

/// A transport where alice, bob, carol and dave are in the channel.
pub fn create_test_transport() -> Arc<RecordingTransport> {
    Arc::new(RecordingTransport::new("cahbot").with_members(&["alice", "bob", "carol", "dave"]))
}

/// A context without running game, with a seeded random source.
pub fn create_test_context(config: Config, transport: &Arc<RecordingTransport>) -> CommandContext {
    let mut context = CommandContext::new(
        Arc::new(config),
        transport.clone(),
        Arc::new(MockDeckRepository::new()),
        Box::new(MockGameFactory::new()),
    );
    context.rng = StdRng::seed_from_u64(42);
    context
}

pub fn create_message(text: &str) -> Message {
    Message::new("alice", "al", "alice.example.org", text)
}

pub fn alice() -> Player {
    Player::new("alice", "al", "alice.example.org")
}

pub fn alice_identity() -> PlayerFilter {
    PlayerFilter::identity("al", "alice.example.org")
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
