//! Game lifecycle command handlers.
//!
//! `start` and `join` create the game session, `stop` drops it. The other
//! handlers forward to the running game and stop early when there is none.
//!
//! # Player resolution
//!
//! - `quit` and `stop` act on the invoker, found by its (user, host) identity
//! - `remove` is a moderation command acting on the nick given as argument

use log::{debug, info, warn};

use crate::{
    chat::Message,
    commands::{
        CommandContext,
        chat_response::{
            format_already_in_game, format_failed_decks, format_game_running,
            format_not_playing, format_remove_usage,
        },
    },
    game::{Player, PlayerFilter},
    utils::is_deck_code,
};

/// Starts a game and makes the invoker join it.
///
/// An optional leading number sets the points needed to win, otherwise the
/// configured limit is used. Remaining arguments that look like deck codes are
/// loaded when enabled, and reported when not. Other arguments are ignored.
///
/// Nothing is created when a game is already running.
pub fn handle_start(context: &mut CommandContext, message: &Message, args: &[String]) {
    debug!("handling start command: {:?}", args);

    if let Some(game) = &context.game {
        match game.get_player(&PlayerFilter::Nick(message.nick.clone())) {
            Some(_) => context.say(&format_already_in_game()),
            None => context.say(&format_game_running(context.prefix())),
        }
        return;
    }

    let mut args = args;
    let mut point_limit = context.config.game.point_limit;
    if let Some(limit) = args.first().and_then(|arg| arg.parse::<u32>().ok()) {
        point_limit = limit;
        args = &args[1..];
    }

    let mut load_decks = Vec::new();
    let mut fail_decks = Vec::new();
    let mut join_args = Vec::new();
    for arg in args {
        if !is_deck_code(arg) {
            join_args.push(arg.clone());
            continue;
        }
        let code = arg.to_uppercase();
        match context.config.game.decks.contains(&code) {
            true => load_decks.push(code),
            false => fail_decks.push(code),
        }
    }

    if !fail_decks.is_empty() {
        warn!("could not load decks {:?}", fail_decks);
        context.say(&format_failed_decks(&fail_decks, context.prefix()));
    }

    info!(
        "starting game to {} points with decks {:?}",
        point_limit, load_decks
    );
    context.game = Some(context.game_factory.create(point_limit, load_decks));

    handle_join(context, message, &join_args);
}

/// Stops the running game and drops it, whatever the engine does with the request.
pub fn handle_stop(context: &mut CommandContext, message: &Message) {
    debug!("handling stop command");

    if context.no_game(false) {
        return;
    }

    if let Some(mut game) = context.game.take() {
        let player = game.get_player(&PlayerFilter::identity(&message.user, &message.host));
        game.stop(player);
        info!("game stopped by {}", message.nick);
    }
}

pub fn handle_pause(context: &mut CommandContext) {
    debug!("handling pause command");

    if context.no_game(false) {
        return;
    }
    if let Some(game) = context.game.as_mut() {
        game.pause();
    }
}

pub fn handle_resume(context: &mut CommandContext) {
    debug!("handling resume command");

    if context.no_game(false) {
        return;
    }
    if let Some(game) = context.game.as_mut() {
        game.resume();
    }
}

/// Adds the invoker to the running game.
///
/// Without a running game, a game is started when `start_on_first_join` is
/// configured; otherwise the channel is told no game is running.
pub fn handle_join(context: &mut CommandContext, message: &Message, args: &[String]) {
    debug!("handling join command");

    let start_on_first_join = context.config.game.start_on_first_join;
    if context.no_game(start_on_first_join) {
        if start_on_first_join {
            handle_start(context, message, args);
        }
        return;
    }

    if let Some(game) = context.game.as_mut() {
        game.add_player(Player::new(&message.nick, &message.user, &message.host));
    }
}

/// Removes the invoker from the running game.
pub fn handle_quit(context: &mut CommandContext, message: &Message) {
    debug!("handling quit command");

    if context.no_game(false) {
        return;
    }

    if let Some(game) = context.game.as_mut() {
        match game.get_player(&PlayerFilter::identity(&message.user, &message.host)) {
            Some(player) => game.remove_player(&player),
            None => debug!("{} is not playing, nothing to quit", message.nick),
        }
    }
}

/// Removes the player named by the first argument.
///
/// The identity of the removed player is recorded in the audit list of the
/// game before the removal.
pub fn handle_remove(context: &mut CommandContext, args: &[String]) {
    debug!("handling remove command: {:?}", args);

    if context.no_game(false) {
        return;
    }

    let Some(target) = args.first() else {
        context.say(&format_remove_usage(context.prefix()));
        return;
    };

    if let Some(game) = context.game.as_mut() {
        match game.get_player(&PlayerFilter::Nick(target.clone())) {
            Some(player) => {
                let uhost = game.get_player_uhost(&player);
                info!("removing {} ({})", player.nick, uhost);
                game.push_removed(uhost);
                game.remove_player(&player);
            }
            None => context.transport.say(&format_not_playing(target)),
        }
    }
}
