//! Remote deck repository integration.
//!
//! Card decks are hosted by an external repository identified by five
//! character codes. This module fetches the metadata shown by `deckinfo`.
//!
//! # Modules
//!
//! - `requester` - HTTP client for the deck repository API
//! - `response_structs` - Raw API payloads
//! - `structs` - Deck values handed to the command layer
//!
//! # Examples
//!
//! ```no_run
//! use cahbot::decks::{DeckRepository, DeckRequester};
//!
//! # async fn example() {
//! let requester = DeckRequester::new("https://api.cardcastgame.com/v1");
//! let deck = requester.fetch_deck("ABCDE").await;
//! # }
//! ```

mod requester;
mod response_structs;
mod structs;

use std::fmt;

use async_trait::async_trait;
use mockall::automock;

pub use crate::decks::requester::DeckRequester;
pub use crate::decks::structs::{Created, Deck, DeckInfo};
#[cfg(test)]
pub use crate::decks::response_structs::Card;

/// Source of deck metadata.
#[automock]
#[async_trait]
pub trait DeckRepository: Send + Sync {
    /// Fetches the deck identified by `code` together with its cards.
    async fn fetch_deck(&self, code: &str) -> Result<Deck, DeckError>;
}

/// Failures of a deck lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The repository answered 404 for the given URL
    NotFound(String),
    /// The repository answered with another non-success status
    ///
    /// # Fields
    ///
    /// * `u16` - HTTP status code
    /// * `String` - Requested URL
    Http(u16, String),
    /// The request could not be sent or its payload could not be decoded
    Request(String),
}

impl DeckError {
    /// Name of the failure kind, as shown in the channel.
    pub fn kind(&self) -> &'static str {
        match self {
            DeckError::NotFound(_) => "NotFoundError",
            DeckError::Http(_, _) => "HttpError",
            DeckError::Request(_) => "RequestError",
        }
    }

    pub fn message(&self) -> String {
        match self {
            DeckError::NotFound(url) => url.clone(),
            DeckError::Http(status, url) => format!("status {} for {}", status, url),
            DeckError::Request(message) => message.clone(),
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl From<reqwest::Error> for DeckError {
    fn from(error: reqwest::Error) -> Self {
        DeckError::Request(error.to_string())
    }
}
