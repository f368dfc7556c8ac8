//! Pick command handler.
//!
//! `pick` plays cards or picks the winner depending on the round state. It is
//! also the target of fast picks: with `enable_fast_pick`, a line made only of
//! numbers is handled as a pick.
//!
//! # Silent failures
//!
//! A fast pick outside of a game, or outside of a state where picking makes
//! sense, produces no response: numbers are common in regular chat. An
//! explicit `pick` command gets a response in both cases.

use log::debug;

use crate::{
    chat::Message,
    commands::{CommandContext, actions::gameplay::acting_player, chat_response::format_pick_unavailable},
    game::GameState,
};

pub fn handle_pick(context: &mut CommandContext, message: &Message, args: &[String], fast_pick: bool) {
    debug!("handling pick command: {:?} (fast pick: {})", args, fast_pick);

    if context.no_game(fast_pick) {
        return;
    }

    let prefix = context.prefix();
    let transport = context.transport.clone();
    let Some((game, player)) = acting_player(context, message) else {
        return;
    };

    match game.state() {
        GameState::Played => game.select_winner(args.first().cloned(), &player, fast_pick),
        GameState::Playable => game.play_card(args.to_vec(), &player, fast_pick),
        state => {
            debug!("pick not available in state {:?}", state);
            if !fast_pick {
                transport.say(&format_pick_unavailable(prefix));
            }
        }
    }
}
