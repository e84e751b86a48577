//! World module
//!
//! `GameState` holds the room graph, the item catalog, the character and the
//! phase flags for one session.

use std::collections::HashMap;

use delve_data::{CharacterClass, Id};
use log::info;

use crate::character::{Character, roll_ability_scores};
use crate::dice::Roller;
use crate::item::ItemsState;
use crate::outcome::Outcome;
use crate::room::RoomsState;

/// Which commands are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pregame,
    InGame,
    Ended,
}

/// Complete state of a running game.
///
/// Built once by the loader; the character appears the moment both a name and
/// a class have been chosen.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub title: String,
    pub intro: String,
    pub name: Option<String>,
    pub class: Option<CharacterClass>,
    pub character: Option<Character>,
    pub rooms: RoomsState,
    pub items: ItemsState,
    pub starter_gear: HashMap<CharacterClass, Vec<Id>>,
    pub game_has_begun: bool,
    pub game_has_ended: bool,
}

/// Disjoint mutable borrows of the parts most commands touch together.
pub struct Parts<'a> {
    pub character: &'a mut Character,
    pub rooms: &'a mut RoomsState,
    pub items: &'a ItemsState,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        if self.game_has_ended {
            Phase::Ended
        } else if self.game_has_begun {
            Phase::InGame
        } else {
            Phase::Pregame
        }
    }

    /// Set the character's name. Returns `true` if this created the character.
    pub fn set_name(&mut self, name: &str, roller: &mut dyn Roller) -> bool {
        info!("name set to '{name}'");
        self.name = Some(name.to_string());
        match &mut self.character {
            Some(character) => {
                character.name = name.to_string();
                false
            },
            None => self.materialize_character(roller),
        }
    }

    /// Set the character's class. Returns `true` if this created the character.
    pub fn set_class(&mut self, class: CharacterClass, roller: &mut dyn Roller) -> bool {
        info!("class set to {class}");
        self.class = Some(class);
        match &mut self.character {
            Some(character) => {
                character.set_class(class);
                false
            },
            None => self.materialize_character(roller),
        }
    }

    fn materialize_character(&mut self, roller: &mut dyn Roller) -> bool {
        let (Some(name), Some(class)) = (&self.name, self.class) else {
            return false;
        };
        let abilities = roll_ability_scores(roller, class);
        self.character = Some(Character::new(name, class, abilities));
        true
    }

    /// The character, or the outcome explaining why there isn't one yet.
    pub fn character(&self) -> Result<&Character, Outcome> {
        self.character.as_ref().ok_or(Outcome::NameOrClassNotSet {
            name_missing: self.name.is_none(),
            class_missing: self.class.is_none(),
        })
    }

    pub fn parts_mut(&mut self) -> Result<Parts<'_>, Outcome> {
        let missing = Outcome::NameOrClassNotSet {
            name_missing: self.name.is_none(),
            class_missing: self.class.is_none(),
        };
        let character = self.character.as_mut().ok_or(missing)?;
        Ok(Parts {
            character,
            rooms: &mut self.rooms,
            items: &self.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRoller;

    #[test]
    fn character_appears_once_both_are_set() {
        let mut state = GameState::default();
        let mut roller = ScriptedRoller::default();
        assert!(state.character().is_err());
        assert!(!state.set_class(CharacterClass::Mage, &mut roller));
        assert!(state.character.is_none());
        assert!(state.set_name("Arliss", &mut roller));
        assert_eq!(state.character().map(|c| c.name.as_str()), Ok("Arliss"));
        assert!(!state.set_name("Bree", &mut roller));
        assert_eq!(state.character().map(|c| c.name.as_str()), Ok("Bree"));
    }

    #[test]
    fn phases_move_forward() {
        let mut state = GameState::default();
        assert_eq!(state.phase(), Phase::Pregame);
        state.game_has_begun = true;
        assert_eq!(state.phase(), Phase::InGame);
        state.game_has_ended = true;
        assert_eq!(state.phase(), Phase::Ended);
    }
}
