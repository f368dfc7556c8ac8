//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry point
//! for processing chat lines. It coordinates command parsing and execution, routing
//! commands to their appropriate handlers.
//!
//! # Architecture
//!
//! The Commander follows a two-phase processing model:
//!
//! 1. **Parsing Phase** - Splits the line and resolves its name in the command table
//! 2. **Execution Phase** - Routes the [`Action`] of the command to its handler
//!
//! # Flow
//!
//! ```text
//! Chat Message → parse() → CommandDescriptor + args → execute() → handler
//! ```

use command_parser::Parser;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::{
    chat::Message,
    commands::{
        Action, CommandContext, CommandDescriptor, CommandParseError,
        actions::{
            handle_beer, handle_cards, handle_deckinfo, handle_decks, handle_help, handle_join,
            handle_list, handle_pause, handle_pick, handle_play, handle_points, handle_quit,
            handle_remove, handle_resume, handle_start, handle_status, handle_stop, handle_test,
            handle_winner,
        },
        chat_response::format_operator_only,
        command::{CommandLine, find_command, parse_fast_pick},
    },
};

/// Command orchestrator for parsing and executing bot commands.
///
/// The Commander is responsible for:
/// - Parsing raw chat lines into a command of the configured table
/// - Refusing operator commands to other users
/// - Routing commands to appropriate handlers
///
/// # Command Prefix
///
/// Commands start with the configured prefix character. Other lines are
/// ignored, except fast picks when `enable_fast_pick` is configured.
pub struct Commander {
    /// Command parser for processing user commands
    parser: Parser,
    /// Game session and collaborators of the handlers
    context: CommandContext,
}

impl Commander {
    /// Creates a new Commander owning `context`.
    ///
    /// The parser is configured with the configured command prefix and `-` as
    /// the option prefix.
    pub fn new(context: CommandContext) -> Self {
        let parser = Parser::new(context.prefix(), '-');
        Commander { parser, context }
    }

    /// Parses a chat line into a command of the table and its arguments.
    ///
    /// # Returns
    ///
    /// * `Ok((CommandDescriptor, Vec<String>))` - The resolved command and its arguments
    /// * `Err(CommandParseError::NotForBot)` - The line is not a command
    /// * `Err(CommandParseError::UnknownCommand)` - No command has this alias
    pub fn parse(&self, body: &str) -> Result<(CommandDescriptor, Vec<String>), CommandParseError> {
        let line = CommandLine::parse(&self.parser, body).map_err(|_| CommandParseError::NotForBot)?;

        match find_command(&self.context.config.commands, &line.name) {
            Some(command) => Ok((command.clone(), line.args)),
            None => Err(CommandParseError::UnknownCommand(line.name)),
        }
    }

    /// Handles an inbound chat line.
    ///
    /// Returns the handle of the background task started by the command, if any.
    pub fn handle_message(&mut self, message: &Message) -> Option<JoinHandle<()>> {
        let (command, args) = match self.parse(&message.text) {
            Ok(parsed) => parsed,
            Err(CommandParseError::NotForBot) => {
                self.handle_fast_pick(message);
                return None;
            }
            Err(CommandParseError::UnknownCommand(name)) => {
                debug!("ignoring unknown command {:?} from {}", name, message.nick);
                return None;
            }
        };

        if command.is_operator_only() && !self.context.transport.is_operator(&message.nick) {
            warn!(
                "{} is not allowed to use operator command {}",
                message.nick,
                command.name()
            );
            self.context.transport.notice(
                &message.nick,
                &format_operator_only(self.context.prefix(), command.name()),
            );
            return None;
        }

        info!("{} runs {} {:?}", message.nick, command.name(), args);
        self.execute(command.action, message, &args)
    }

    /// Handles a line made only of numbers as a silent `pick`.
    fn handle_fast_pick(&mut self, message: &Message) {
        if !self.context.config.game.enable_fast_pick {
            return;
        }
        if let Some(args) = parse_fast_pick(&message.text) {
            handle_pick(&mut self.context, message, &args, true);
        }
    }

    /// Executes the handler bound to `action`.
    ///
    /// # Command Handlers
    ///
    /// - [`Action::Start`] → [`handle_start`]
    /// - [`Action::Pick`] → [`handle_pick`]
    /// - [`Action::Deckinfo`] → [`handle_deckinfo`], the only asynchronous one
    /// - every other action maps to the handler of the same name
    fn execute(&mut self, action: Action, message: &Message, args: &[String]) -> Option<JoinHandle<()>> {
        let context = &mut self.context;

        match action {
            Action::Start => handle_start(context, message, args),
            Action::Stop => handle_stop(context, message),
            Action::Pause => handle_pause(context),
            Action::Resume => handle_resume(context),
            Action::Join => handle_join(context, message, args),
            Action::Quit => handle_quit(context, message),
            Action::Remove => handle_remove(context, args),
            Action::Cards => handle_cards(context, message),
            Action::Play => handle_play(context, message, args),
            Action::Winner => handle_winner(context, message, args),
            Action::Pick => handle_pick(context, message, args, false),
            Action::List => handle_list(context),
            Action::Points => handle_points(context),
            Action::Status => handle_status(context),
            Action::Decks => handle_decks(context),
            Action::Deckinfo => return handle_deckinfo(context, args),
            Action::Help => handle_help(context, args),
            Action::Test => handle_test(context, message),
            Action::Beer => handle_beer(context, message, args),
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::{
        chat::{Output, RecordingTransport},
        commands::test_utils::{
            alice, alice_identity, args, create_message, create_test_config,
            create_test_context, create_test_transport,
        },
        config::Config,
        decks::{DeckError, MockDeckRepository},
        game::{GameState, MockGameEngine},
    };

    fn create_commander(config: Config, transport: &Arc<RecordingTransport>) -> Commander {
        Commander::new(create_test_context(config, transport))
    }

    fn create_commander_with_game(
        game: MockGameEngine,
        transport: &Arc<RecordingTransport>,
    ) -> Commander {
        let mut context = create_test_context(create_test_config(), transport);
        context.game = Some(Box::new(game));
        Commander::new(context)
    }

    #[test]
    fn test_parse_resolves_aliases() {
        let transport = create_test_transport();
        let commander = create_commander(create_test_config(), &transport);

        for line in ["!quit", "!q", "!leave"] {
            let (command, args) = commander.parse(line).unwrap();
            assert_eq!(command.action, Action::Quit);
            assert!(args.is_empty());
        }

        let (command, args) = commander.parse("!s 15 ABCDE").unwrap();
        assert_eq!(command.action, Action::Start);
        assert_eq!(args, vec!["15", "ABCDE"]);
    }

    #[test]
    fn test_parse_unknown_command() {
        let transport = create_test_transport();
        let commander = create_commander(create_test_config(), &transport);

        assert_eq!(
            commander.parse("!dance now").unwrap_err(),
            CommandParseError::UnknownCommand("dance".to_owned())
        );
        assert_eq!(
            commander.parse("!START").unwrap_err(),
            CommandParseError::UnknownCommand("START".to_owned())
        );
    }

    #[test]
    fn test_parse_not_a_command() {
        let transport = create_test_transport();
        let commander = create_commander(create_test_config(), &transport);

        assert_eq!(
            commander.parse("This is just a regular message").unwrap_err(),
            CommandParseError::NotForBot
        );
    }

    #[test]
    fn test_parse_other_prefix() {
        let mut config = create_test_config();
        config.chat.command_prefix = '.';
        let transport = create_test_transport();
        let commander = create_commander(config, &transport);

        assert!(commander.parse(".join").is_ok());
        assert_eq!(commander.parse("!join").unwrap_err(), CommandParseError::NotForBot);
    }

    #[test]
    fn test_unknown_command_is_ignored() {
        let transport = create_test_transport();
        let mut commander = create_commander(create_test_config(), &transport);

        assert!(commander.handle_message(&create_message("!dance")).is_none());
        assert!(transport.outputs().is_empty());
    }

    #[test]
    fn test_operator_command_refused() {
        let mut game = MockGameEngine::new();
        game.expect_stop().never();
        let transport = create_test_transport();
        let mut commander = create_commander_with_game(game, &transport);

        commander.handle_message(&create_message("!stop"));

        assert_eq!(
            transport.outputs(),
            vec![Output::Notice(
                "alice".to_owned(),
                "You must be a channel operator to use !stop.".to_owned()
            )]
        );
        assert!(commander.context.game.is_some());
    }

    #[test]
    fn test_operator_command_allowed() {
        let mut game = MockGameEngine::new();
        game.expect_get_player()
            .with(eq(alice_identity()))
            .return_const(Some(alice()));
        game.expect_stop()
            .with(eq(Some(alice())))
            .times(1)
            .return_const(());
        let transport = Arc::new(
            RecordingTransport::new("cahbot")
                .with_members(&["alice"])
                .with_operators(&["alice"]),
        );
        let mut commander = create_commander_with_game(game, &transport);

        commander.handle_message(&create_message("!stop"));

        assert!(commander.context.game.is_none());
        assert!(transport.outputs().is_empty());
    }

    #[test]
    fn test_fast_pick() {
        let mut game = MockGameEngine::new();
        game.expect_get_player()
            .with(eq(alice_identity()))
            .return_const(Some(alice()));
        game.expect_state().return_const(GameState::Playable);
        game.expect_play_card()
            .with(eq(args(&["1", "3"])), eq(alice()), eq(true))
            .times(1)
            .return_const(());
        let transport = create_test_transport();
        let mut commander = create_commander_with_game(game, &transport);

        commander.handle_message(&create_message("1 3"));
        commander.handle_message(&create_message("1 and 3"));

        assert!(transport.outputs().is_empty());
    }

    #[test]
    fn test_fast_pick_disabled() {
        let mut config = create_test_config();
        config.game.enable_fast_pick = false;
        let mut game = MockGameEngine::new();
        game.expect_get_player().never();
        game.expect_play_card().never();
        let transport = create_test_transport();
        let mut context = create_test_context(config, &transport);
        context.game = Some(Box::new(game));
        let mut commander = Commander::new(context);

        commander.handle_message(&create_message("1"));

        assert!(transport.outputs().is_empty());
    }

    #[test]
    fn test_fast_pick_without_game_is_silent() {
        let transport = create_test_transport();
        let mut commander = create_commander(create_test_config(), &transport);

        commander.handle_message(&create_message("2"));

        assert!(transport.outputs().is_empty());
    }

    #[test]
    fn test_play_forwards_dash_prefixed_tokens() {
        let mut game = MockGameEngine::new();
        game.expect_get_player()
            .with(eq(alice_identity()))
            .return_const(Some(alice()));
        game.expect_play_card()
            .with(eq(args(&["-1", "2"])), eq(alice()), eq(false))
            .times(1)
            .return_const(());
        let transport = create_test_transport();
        let mut commander = create_commander_with_game(game, &transport);

        commander.handle_message(&create_message("!play -1\t2"));
    }

    #[test]
    fn test_pick_command_is_not_fast() {
        let mut game = MockGameEngine::new();
        game.expect_get_player().return_const(Some(alice()));
        game.expect_state().return_const(GameState::Played);
        game.expect_select_winner()
            .with(eq(Some("2".to_owned())), eq(alice()), eq(false))
            .times(1)
            .return_const(());
        let transport = create_test_transport();
        let mut commander = create_commander_with_game(game, &transport);

        commander.handle_message(&create_message("!p 2"));
    }

    #[test]
    fn test_help_through_alias() {
        let transport = create_test_transport();
        let mut commander = create_commander(create_test_config(), &transport);

        commander.handle_message(&create_message("!h j"));

        assert_eq!(
            transport.said(),
            vec!["!join - Join the game, starting one if none is running. (aliases: !j)"]
        );
    }

    #[test]
    fn test_game_command_without_game() {
        let transport = create_test_transport();
        let mut commander = create_commander(create_test_config(), &transport);

        commander.handle_message(&create_message("!cards"));

        assert_eq!(
            transport.said(),
            vec!["No game running. Start the game by typing !start."]
        );
    }

    #[tokio::test]
    async fn test_deckinfo_returns_lookup_task() {
        let mut repository = MockDeckRepository::new();
        repository
            .expect_fetch_deck()
            .times(1)
            .returning(|_| Err(DeckError::Request("connection refused".to_owned())));
        let transport = create_test_transport();
        let mut context = create_test_context(create_test_config(), &transport);
        context.deck_repository = Arc::new(repository);
        let mut commander = Commander::new(context);

        let handle = commander.handle_message(&create_message("!deckinfo cahbs"));
        handle.unwrap().await.unwrap();

        assert_eq!(
            transport.said(),
            vec!["Error RequestError: connection refused"]
        );
    }
}
