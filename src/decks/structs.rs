//! Deck values exchanged with the command layer.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{decks::response_structs::Card, utils::leading_iso_date};

/// Creation date of a deck as sent by the repository.
///
/// The repository sends either a full timestamp or a free-form string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Created {
    Date(DateTime<Utc>),
    Text(String),
}

impl Created {
    /// Normalizes the value to `YYYY-MM-DD`.
    ///
    /// A string that does not start with a date is returned unchanged.
    pub fn to_date_string(&self) -> String {
        match self {
            Created::Date(date) => date.format("%Y-%m-%d").to_string(),
            Created::Text(text) => leading_iso_date(text).unwrap_or(text).to_owned(),
        }
    }
}

/// A deck fetched from the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub name: String,
    pub description: String,
    pub created: Created,
    pub author: String,
    pub calls: Vec<Card>,
    pub responses: Vec<Card>,
}

/// Projection of a [`Deck`] displayed by the `deckinfo` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckInfo {
    /// Upper-case deck code
    pub code: String,
    pub name: String,
    /// First line of the description
    pub description: String,
    /// Creation date as `YYYY-MM-DD`
    pub created: String,
    pub author: String,
    /// Number of call (black) cards
    pub calls: usize,
    /// Number of response (white) cards
    pub responses: usize,
    /// Canonical page of the deck
    pub url: String,
}

impl DeckInfo {
    /// Builds the projection of `deck`.
    ///
    /// # Arguments
    ///
    /// * `code` - The deck code that was looked up
    /// * `deck` - The fetched deck
    /// * `browse_url` - Prefix of the canonical deck page, the code is appended to it
    pub fn new(code: &str, deck: &Deck, browse_url: &str) -> Self {
        DeckInfo {
            code: code.to_owned(),
            name: deck.name.clone(),
            description: deck.description.lines().next().unwrap_or_default().to_owned(),
            created: deck.created.to_date_string(),
            author: deck.author.clone(),
            calls: deck.calls.len(),
            responses: deck.responses.len(),
            url: format!("{}{}", browse_url, code),
        }
    }
}
