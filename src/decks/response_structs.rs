//! Response structures for the deck repository API.

use serde::Deserialize;
use std::fmt;

use crate::decks::structs::Created;

/// Representation of a deck from `/decks/{code}`.
#[derive(Deserialize, Debug)]
pub struct DeckDetail {
    /// Deck title
    pub name: String,
    /// Free text description, may span several lines
    #[serde(default)]
    pub description: String,
    /// Creation date, either a timestamp or a plain string
    pub created_at: Created,
    /// Deck author
    pub author: Author,
}

impl fmt::Display for DeckDetail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name={}, author={}, created_at={:?}",
            self.name, self.author.username, self.created_at
        )
    }
}

/// Author of a deck.
#[derive(Deserialize, Debug)]
pub struct Author {
    pub username: String,
}

/// Response from `/decks/{code}/cards`.
#[derive(Deserialize, Debug)]
pub struct CardsResponse {
    /// Black cards
    pub calls: Vec<Card>,
    /// White cards
    pub responses: Vec<Card>,
}

/// A single card. Text segments are split around the blanks.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Card {
    #[serde(default)]
    pub text: Vec<String>,
}
