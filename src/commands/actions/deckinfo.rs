//! Deckinfo command handler.
//!
//! The deck is fetched from the repository in a spawned task, so the bot keeps
//! handling chat lines while the request is pending. The result is said in the
//! channel when it arrives.

use std::sync::Arc;

use log::{debug, error};
use tokio::task::JoinHandle;

use crate::{
    chat::ChatTransport,
    commands::{
        CommandContext,
        chat_response::{
            format_deck_error, format_deck_info, format_deck_not_enabled,
            format_invalid_deck_code,
        },
    },
    decks::{DeckError, DeckInfo, DeckRepository},
    utils::is_deck_code,
};

/// Validates the deck code given as first argument and starts its lookup.
///
/// Returns the handle of the lookup task, or `None` when the code was refused.
pub fn handle_deckinfo(context: &CommandContext, args: &[String]) -> Option<JoinHandle<()>> {
    debug!("handling deckinfo command: {:?}", args);

    let code = args.first().map(String::as_str).unwrap_or_default();
    if !is_deck_code(code) {
        context.say(&format_invalid_deck_code(code));
        return None;
    }

    let code = code.to_uppercase();
    if !context.config.game.decks.contains(&code) {
        context.say(&format_deck_not_enabled(&code));
        return None;
    }

    let transport = Arc::clone(&context.transport);
    let deck_repository = Arc::clone(&context.deck_repository);
    let browse_url = context.config.decks_api.browse_url.clone();

    Some(tokio::spawn(async move {
        say_deck_info(transport, deck_repository, code, browse_url).await;
    }))
}

async fn say_deck_info(
    transport: Arc<dyn ChatTransport>,
    deck_repository: Arc<dyn DeckRepository>,
    code: String,
    browse_url: String,
) {
    match deck_repository.fetch_deck(&code).await {
        Ok(deck) => {
            let info = DeckInfo::new(&code, &deck, &browse_url);
            debug!("deck info {:?}", info);
            transport.say(&format_deck_info(&info));
        }
        Err(err) => {
            let message = match &err {
                DeckError::NotFound(url) => url.rsplit('/').next().unwrap_or(url).to_owned(),
                _ => err.message(),
            };
            error!("failed to fetch deck {}: {}: {}", code, err.kind(), message);
            transport.say(&format_deck_error(err.kind(), &message));
        }
    }
}
