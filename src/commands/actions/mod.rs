//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler receives
//! the [`CommandContext`](crate::commands::CommandContext), checks its
//! preconditions, then forwards to the game engine or answers in the channel.
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Return early when a running game is needed and there is none
//! 2. Resolve the acting player when the command acts on the invoker
//! 3. Forward to the game engine, or say the response through the transport
//!
//! Only `start`, `join`, `decks`, `deckinfo`, `help`, `test` and `beer` work
//! without a running game.
//!
//! # Available Handlers
//!
//! - [`lifecycle`] - start, stop, pause, resume, join, quit and remove
//! - [`gameplay`] - cards, play and winner
//! - [`pick`] - state dependent play or winner selection
//! - [`informational`] - list, points, status, decks and test
//! - [`help`] - command summary and details
//! - [`beer`] - flavor text
//! - [`deckinfo`] - asynchronous deck lookup

mod beer;
mod deckinfo;
mod gameplay;
mod help;
mod informational;
mod lifecycle;
mod pick;

pub use crate::commands::actions::{
    beer::handle_beer,
    deckinfo::handle_deckinfo,
    gameplay::{handle_cards, handle_play, handle_winner},
    help::handle_help,
    informational::{handle_decks, handle_list, handle_points, handle_status, handle_test},
    lifecycle::{
        handle_join, handle_pause, handle_quit, handle_remove, handle_resume, handle_start,
        handle_stop,
    },
    pick::handle_pick,
};
