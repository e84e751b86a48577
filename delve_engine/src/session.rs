//! Session module
//!
//! The dispatcher: folds raw input into a command, enforces the phase's command
//! set, runs the matching resolver and replays the terminal outcome once the
//! game is over.

use std::collections::HashMap;

use log::{debug, info, warn};
use thiserror::Error;

use crate::command::{CommandKey, ParsedInput, parse_input};
use crate::commands;
use crate::dice::Roller;
use crate::loader::help::{HelpError, HelpTable};
use crate::outcome::Outcome;
use crate::world::{GameState, Phase};

/// A command resolver.
pub type Resolver = fn(&mut Context<'_>, &[String]) -> Vec<Outcome>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Help(#[from] HelpError),
    #[error("no resolver registered for {0}")]
    MissingResolver(CommandKey),
    #[error("the world has no room at the starting position {0}")]
    NoStartingRoom(usize),
}

/// What a resolver can see and change while it runs.
pub struct Context<'a> {
    pub state: &'a mut GameState,
    pub dice: &'a mut dyn Roller,
    pub help: &'a HelpTable,
    terminal: &'a mut Option<Outcome>,
}

impl<'a> Context<'a> {
    pub fn new(
        state: &'a mut GameState,
        dice: &'a mut dyn Roller,
        help: &'a HelpTable,
        terminal: &'a mut Option<Outcome>,
    ) -> Self {
        Self {
            state,
            dice,
            help,
            terminal,
        }
    }

    /// Record `outcome` as the game's last word and end the game.
    pub fn end_game(&mut self, outcome: Outcome) -> Outcome {
        info!("game over: {outcome:?}");
        self.state.game_has_ended = true;
        *self.terminal = Some(outcome.clone());
        outcome
    }

    pub fn bad_syntax(&self, command: CommandKey) -> Outcome {
        Outcome::BadSyntax {
            command,
            usages: self.help.usages(command),
        }
    }

    /// Commands legal in the current phase.
    pub fn allowed_commands(&self) -> Vec<CommandKey> {
        allowed_for(self.state.phase())
    }
}

fn allowed_for(phase: Phase) -> Vec<CommandKey> {
    match phase {
        Phase::Pregame => CommandKey::PREGAME.to_vec(),
        Phase::InGame => CommandKey::INGAME.to_vec(),
        Phase::Ended => Vec::new(),
    }
}

/// Resolver for every command key.
#[derive(Clone)]
pub struct CommandTable {
    resolvers: HashMap<CommandKey, Resolver>,
}

impl CommandTable {
    /// Register every resolver and check that none is missing.
    /// # Errors
    /// - if a command key has no resolver
    pub fn build() -> Result<Self, SessionError> {
        let entries: [(CommandKey, Resolver); 24] = [
            (CommandKey::Attack, commands::attack_handler),
            (CommandKey::CastSpell, commands::cast_spell_handler),
            (CommandKey::Drink, commands::drink_handler),
            (CommandKey::Drop, commands::drop_handler),
            (CommandKey::Equip, commands::equip_handler),
            (CommandKey::Unequip, commands::unequip_handler),
            (CommandKey::Put, commands::put_handler),
            (CommandKey::Take, commands::take_handler),
            (CommandKey::PickUp, commands::pick_up_handler),
            (CommandKey::Lock, commands::lock_handler),
            (CommandKey::Unlock, commands::unlock_handler),
            (CommandKey::Open, commands::open_handler),
            (CommandKey::Close, commands::close_handler),
            (CommandKey::PickLock, commands::pick_lock_handler),
            (CommandKey::LookAt, commands::look_at_handler),
            (CommandKey::Leave, commands::leave_handler),
            (CommandKey::Inventory, commands::inventory_handler),
            (CommandKey::Status, commands::status_handler),
            (CommandKey::Help, commands::help_handler),
            (CommandKey::SetName, commands::set_name_handler),
            (CommandKey::SetClass, commands::set_class_handler),
            (CommandKey::Reroll, commands::reroll_handler),
            (CommandKey::BeginGame, commands::begin_game_handler),
            (CommandKey::Quit, commands::quit_handler),
        ];
        let resolvers: HashMap<CommandKey, Resolver> = entries.into_iter().collect();
        if let Some(missing) = CommandKey::ALL.into_iter().find(|key| !resolvers.contains_key(key)) {
            return Err(SessionError::MissingResolver(missing));
        }
        Ok(Self { resolvers })
    }

    pub fn get(&self, key: CommandKey) -> Option<Resolver> {
        self.resolvers.get(&key).copied()
    }
}

/// One game session: state, dice, help and the dispatcher.
pub struct Session {
    state: GameState,
    roller: Box<dyn Roller>,
    help: HelpTable,
    table: CommandTable,
    terminal: Option<Outcome>,
}

impl Session {
    /// # Errors
    /// - if the embedded help table or the command table is incomplete
    /// - if the room cursor doesn't point into the room arena
    pub fn new(state: GameState, roller: Box<dyn Roller>) -> Result<Self, SessionError> {
        let cursor = state.rooms.cursor();
        if state.rooms.get(cursor).is_none() {
            return Err(SessionError::NoStartingRoom(cursor));
        }
        Ok(Self {
            state,
            roller,
            help: HelpTable::embedded()?,
            table: CommandTable::build()?,
            terminal: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn help(&self) -> &HelpTable {
        &self.help
    }

    /// Resolve one line of player input.
    pub fn process(&mut self, raw: &str) -> Vec<Outcome> {
        if let Some(terminal) = &self.terminal {
            debug!("game over, replaying terminal outcome");
            return vec![terminal.clone()];
        }
        let allowed = allowed_for(self.state.phase());
        let (key, args) = match parse_input(raw) {
            ParsedInput::Unknown(command) => {
                warn!("unrecognized command '{command}'");
                return vec![Outcome::CommandNotRecognized { command, allowed }];
            },
            ParsedInput::Command { key, args } => (key, args),
        };
        if !allowed.contains(&key) {
            info!("{key} not allowed in {:?}", self.state.phase());
            return vec![Outcome::CommandNotAllowedNow { command: key, allowed }];
        }
        let Some(resolver) = self.table.get(key) else {
            return vec![Outcome::CommandNotRecognized {
                command: key.name().to_string(),
                allowed,
            }];
        };
        debug!("resolving {key} with {args:?}");
        let mut context = Context::new(&mut self.state, &mut *self.roller, &self.help, &mut self.terminal);
        resolver(&mut context, &args)
    }
}
