//! Beer command handler.
//!
//! The bot serves a round of beers to a list of nicks with a randomly chosen
//! action. Templates are written for a single recipient and rewritten to their
//! plural form when the round is for several people.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;

use crate::{
    chat::Message,
    commands::{
        CommandContext,
        chat_response::{format_not_enough_beer, format_self_beer},
    },
    utils::list_to_prose,
};

/// Most recipients served in a single round.
const MAX_BEER_NICKS: usize = 7;

const ACTIONS: [&str; 4] = [
    "pours a tall, cold glass of {beer} and slides it down the bar to {nick}.",
    "cracks open a bottle of {beer} for {nick}.",
    "pours a refreshing pint of {beer} for {nick}",
    "slams a foamy stein of {beer} down on the table for {nick}",
];

/// Singular fragments of [`ACTIONS`] and their plural, applied in order.
const PLURALS: [(&str, &str); 5] = [
    ("a tall, cold glass", "tall, cold glasses"),
    ("a bottle", "bottles"),
    ("a refreshing pint", "refreshing pints"),
    ("a foamy stein", "foamy steins"),
    ("it", "them"),
];

/// Rewrites every singular fragment of `action` to its plural.
fn pluralize(action: &str) -> String {
    PLURALS
        .iter()
        .fold(action.to_owned(), |action, (singular, plural)| {
            action.replace(singular, plural)
        })
}

/// Pours a beer for the nicks given as arguments.
///
/// - `all` serves every player of the running game
/// - no argument serves the sender
///
/// Nicks that are not in the channel are skipped. When the bot is among the
/// recipients, it pours its own glass after everyone else's.
pub fn handle_beer(context: &mut CommandContext, message: &Message, args: &[String]) {
    debug!("handling beer command: {:?}", args);

    let nicks = match (args.first(), &context.game) {
        (Some(first), Some(game)) if first == "all" => game.get_player_nicks(),
        _ if !args.is_empty() => args.to_vec(),
        _ => vec![message.nick.clone()],
    };

    pour(context, message, &nicks);
}

fn pour(context: &mut CommandContext, message: &Message, nicks: &[String]) {
    let bot_nick = context.transport.nick();

    if nicks.len() == 1 && nicks[0] == bot_nick {
        let Some(beer) = context.config.beers.choose(&mut context.rng) else {
            debug!("no beer configured");
            return;
        };
        context
            .transport
            .action(&format_self_beer(beer, &message.nick));
        return;
    }

    let mut seen = HashSet::new();
    let mut beer_to_bot = false;
    let mut beer_nicks = Vec::new();
    for nick in nicks.iter().filter(|nick| seen.insert(nick.as_str())) {
        if *nick == bot_nick {
            beer_to_bot = true;
        } else if context.transport.nick_is_in_channel(nick) {
            beer_nicks.push(nick.clone());
        } else {
            debug!("{} is not in the channel, no beer", nick);
        }
    }

    let max_nicks = context.config.beers.len().min(MAX_BEER_NICKS);
    if beer_nicks.len() > max_nicks {
        context.say(&format_not_enough_beer());
        return;
    }

    if !beer_nicks.is_empty() {
        let action = ACTIONS.choose(&mut context.rng).copied().unwrap_or(ACTIONS[0]);
        let action = match beer_nicks.len() > 1 {
            true => pluralize(action),
            false => action.to_owned(),
        };
        let beers = context
            .config
            .beers
            .choose_multiple(&mut context.rng, beer_nicks.len())
            .cloned()
            .collect::<Vec<String>>();

        context.transport.action(
            &action
                .replace("{beer}", &list_to_prose(&beers))
                .replace("{nick}", &list_to_prose(&beer_nicks)),
        );
    }

    if beer_to_bot {
        pour(context, message, &[bot_nick]);
    }
}
