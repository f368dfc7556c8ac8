//! HTTP client for the deck repository API.
//!
//! This module provides the [`DeckRequester`] struct for making HTTP requests
//! to the deck repository and retrieving deck information.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::decks::{
    Deck, DeckError, DeckRepository,
    response_structs::{CardsResponse, DeckDetail},
};

/// HTTP client for requesting decks from the repository.
///
/// # Examples
///
/// ```no_run
/// let deck_requester = DeckRequester::new("https://api.cardcastgame.com/v1");
/// let deck = deck_requester.fetch_deck("ABCDE").await.unwrap();
/// println!("Deck: {:?}", deck);
/// ```
pub struct DeckRequester {
    /// Base url of the repository API, without trailing slash
    url: String,
    /// HTTP client
    client: Client,
}

impl DeckRequester {
    /// Create a new [DeckRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the deck repository API.
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::new();
        DeckRequester {
            url: url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Requests `url` and decodes its json body.
    ///
    /// A 404 answer is reported as [`DeckError::NotFound`] carrying the
    /// requested url, any other non-success status as [`DeckError::Http`].
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, DeckError> {
        debug!("request {}", url);

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(DeckError::NotFound(url.to_owned())),
            status if !status.is_success() => {
                Err(DeckError::Http(status.as_u16(), url.to_owned()))
            }
            _ => Ok(response.json().await?),
        }
    }
}

#[async_trait]
impl DeckRepository for DeckRequester {
    /// Request `/decks/{code}` and `/decks/{code}/cards` to build a [`Deck`].
    ///
    /// The first call returns the deck details:
    /// ```text
    /// {
    ///   name: "Geek Pack",
    ///   description: "For nerds",
    ///   created_at: "2014-09-06T21:04:34.000Z",
    ///   author: { username: "alice" }
    /// }
    /// ```
    /// The second one returns the cards:
    /// ```text
    /// { calls: [{ text: ["Why ", "?"] }], responses: [{ text: ["A cat"] }] }
    /// ```
    async fn fetch_deck(&self, code: &str) -> Result<Deck, DeckError> {
        info!("request deck {}", code);

        let deck_url = format!("{}/decks/{}", &self.url, code);
        let detail: DeckDetail = self.get(&deck_url).await?;
        debug!("response from {} -> {}", &deck_url, &detail);

        // A missing card list is reported on the deck url, whose last segment is the code
        let cards: CardsResponse = match self.get(&format!("{}/cards", &deck_url)).await {
            Err(DeckError::NotFound(_)) => return Err(DeckError::NotFound(deck_url)),
            result => result?,
        };
        debug!(
            "deck {} has {} calls and {} responses",
            code,
            cards.calls.len(),
            cards.responses.len()
        );

        Ok(Deck {
            name: detail.name,
            description: detail.description,
            created: detail.created_at,
            author: detail.author.username,
            calls: cards.calls,
            responses: cards.responses,
        })
    }
}
