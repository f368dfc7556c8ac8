//! Round command handlers.
//!
//! These commands act on the invoker, resolved by its (user, host) identity.
//! A sender that is not part of the roster gets no response.

use log::debug;

use crate::{
    chat::Message,
    commands::CommandContext,
    game::{GameEngine, Player, PlayerFilter},
};

/// Returns the running game and the player behind `message`, if both exist.
pub(crate) fn acting_player<'a>(
    context: &'a mut CommandContext,
    message: &Message,
) -> Option<(&'a mut Box<dyn GameEngine>, Player)> {
    let game = context.game.as_mut()?;
    match game.get_player(&PlayerFilter::identity(&message.user, &message.host)) {
        Some(player) => Some((game, player)),
        None => {
            debug!("{} is not playing", message.nick);
            None
        }
    }
}

/// Shows the hand of the invoker. A sender outside the roster has no hand, so
/// nothing is forwarded to the engine.
pub fn handle_cards(context: &mut CommandContext, message: &Message) {
    debug!("handling cards command");

    if context.no_game(false) {
        return;
    }
    if let Some((game, player)) = acting_player(context, message) {
        game.show_cards(&player);
    }
}

/// Forwards the card tokens untouched, the engine validates them.
pub fn handle_play(context: &mut CommandContext, message: &Message, args: &[String]) {
    debug!("handling play command: {:?}", args);

    if context.no_game(false) {
        return;
    }
    if let Some((game, player)) = acting_player(context, message) {
        game.play_card(args.to_vec(), &player, false);
    }
}

pub fn handle_winner(context: &mut CommandContext, message: &Message, args: &[String]) {
    debug!("handling winner command: {:?}", args);

    if context.no_game(false) {
        return;
    }
    if let Some((game, player)) = acting_player(context, message) {
        game.select_winner(args.first().cloned(), &player, false);
    }
}
