#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Delve: a small dungeon crawl.
//!
//! Raw command lines go in through [`Session::process`]; a list of
//! [`Outcome`]s comes out. Everything else is state and rules.

pub const DELVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod character;
pub mod command;
pub mod commands;
pub mod container;
pub mod creature;
pub mod data_paths;
pub mod dice;
pub mod door;
pub mod health;
pub mod item;
pub mod lexical;
pub mod loader;
pub mod outcome;
pub mod repl;
pub mod room;
pub mod rules;
pub mod session;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use character::Character;
pub use dice::{RandomRoller, Roller, ScriptedRoller};
pub use item::{Item, ItemHolder};
pub use loader::{build_game_state, load_world};
pub use outcome::Outcome;
pub use repl::run_repl;
pub use room::Room;
pub use session::Session;
pub use world::{GameState, Phase};
