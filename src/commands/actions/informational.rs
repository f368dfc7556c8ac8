//! Read-only command handlers.
//!
//! `list`, `points` and `status` are rendered by the game engine, `decks` and
//! `test` are answered from the configuration.

use log::debug;

use crate::{
    chat::Message,
    commands::{
        CommandContext,
        chat_response::{format_decks, format_test_notice},
    },
};

pub fn handle_list(context: &CommandContext) {
    debug!("handling list command");

    if context.no_game(false) {
        return;
    }
    if let Some(game) = &context.game {
        game.list_players();
    }
}

pub fn handle_points(context: &CommandContext) {
    debug!("handling points command");

    if context.no_game(false) {
        return;
    }
    if let Some(game) = &context.game {
        game.show_points();
    }
}

pub fn handle_status(context: &CommandContext) {
    debug!("handling status command");

    if context.no_game(false) {
        return;
    }
    if let Some(game) = &context.game {
        game.show_status();
    }
}

/// Lists the enabled decks and the default ones, with or without a game.
pub fn handle_decks(context: &CommandContext) {
    debug!("handling decks command");

    context.say(&format_decks(
        &context.config.game.decks,
        &context.config.game.default_decks,
        context.prefix(),
    ));
}

/// Sends a notice to the sender so they can check their client displays them.
pub fn handle_test(context: &CommandContext, message: &Message) {
    debug!("handling test command");

    context.transport.notice(&message.nick, &format_test_notice());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chat::Output,
        commands::test_utils::{
            create_message, create_test_config, create_test_context, create_test_transport,
        },
        game::MockGameEngine,
    };

    #[test]
    fn test_read_only_commands_forward() {
        let mut game = MockGameEngine::new();
        game.expect_list_players().times(1).return_const(());
        game.expect_show_points().times(1).return_const(());
        game.expect_show_status().times(1).return_const(());

        let transport = create_test_transport();
        let mut context = create_test_context(create_test_config(), &transport);
        context.game = Some(Box::new(game));

        handle_list(&context);
        handle_points(&context);
        handle_status(&context);

        assert!(transport.outputs().is_empty());
    }

    #[test]
    fn test_read_only_commands_without_game() {
        let transport = create_test_transport();
        let context = create_test_context(create_test_config(), &transport);

        handle_list(&context);
        handle_points(&context);
        handle_status(&context);

        assert_eq!(
            transport.said(),
            vec!["No game running. Start the game by typing !start."; 3]
        );
    }

    #[test]
    fn test_decks_without_game() {
        let mut config = create_test_config();
        config.game.decks = vec!["CAHBS".to_owned(), "CAHE1".to_owned(), "ABCDE".to_owned()];
        config.game.default_decks = vec!["CAHBS".to_owned()];
        let transport = create_test_transport();
        let context = create_test_context(config, &transport);

        handle_decks(&context);

        assert_eq!(
            transport.said(),
            vec![
                "Card decks available (use !deckinfo for details): CAHBS, CAHE1, ABCDE; default decks: CAHBS"
            ]
        );
    }

    #[test]
    fn test_test_sends_notice_to_sender() {
        let transport = create_test_transport();
        let context = create_test_context(create_test_config(), &transport);

        handle_test(&context, &create_message("!test"));

        assert_eq!(
            transport.outputs(),
            vec![Output::Notice(
                "alice".to_owned(),
                "Can you hear me now?".to_owned()
            )]
        );
    }
}
