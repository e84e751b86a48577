//! Chests and corpses.

use delve_data::Id;
use variantly::Variantly;

use crate::item::{ItemHolder, Stacks};

/// A room fixture that holds items.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub contents: Stacks,
    pub kind: ContainerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum ContainerKind {
    Chest(ChestState),
    Corpse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChestState {
    pub closed: bool,
    pub locked: bool,
}

impl Container {
    /// `None` for corpses, which cannot be closed at all.
    pub fn is_closed(&self) -> Option<bool> {
        match self.kind {
            ContainerKind::Chest(state) => Some(state.closed),
            ContainerKind::Corpse => None,
        }
    }

    /// `None` for corpses, which cannot be locked at all.
    pub fn is_locked(&self) -> Option<bool> {
        match self.kind {
            ContainerKind::Chest(state) => Some(state.locked),
            ContainerKind::Corpse => None,
        }
    }

    pub fn chest_state_mut(&mut self) -> Option<&mut ChestState> {
        match &mut self.kind {
            ContainerKind::Chest(state) => Some(state),
            ContainerKind::Corpse => None,
        }
    }

    /// Preposition used for items held by this container: "in" a chest, "on" a corpse.
    pub fn joinword(&self) -> &'static str {
        match self.kind {
            ContainerKind::Chest(_) => "in",
            ContainerKind::Corpse => "on",
        }
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }
}

impl ItemHolder for Container {
    fn add_items(&mut self, item_id: &str, quantity: u32) {
        self.contents.add_items(item_id, quantity);
    }

    fn remove_items(&mut self, item_id: &str, quantity: u32) -> bool {
        self.contents.remove_items(item_id, quantity)
    }

    fn quantity_of(&self, item_id: &str) -> u32 {
        self.contents.quantity_of(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chest(closed: bool, locked: bool) -> Container {
        Container {
            id: "chest".into(),
            title: "wooden chest".into(),
            description: String::new(),
            contents: Stacks::new(),
            kind: ContainerKind::Chest(ChestState { closed, locked }),
        }
    }

    #[test]
    fn corpse_state_is_absent() {
        let corpse = Container {
            kind: ContainerKind::Corpse,
            ..chest(false, false)
        };
        assert_eq!(corpse.is_closed(), None);
        assert_eq!(corpse.is_locked(), None);
        assert_eq!(corpse.joinword(), "on");
    }

    #[test]
    fn chest_state_is_reported() {
        let mut chest = chest(true, true);
        assert_eq!(chest.is_locked(), Some(true));
        assert_eq!(chest.joinword(), "in");
        if let Some(state) = chest.chest_state_mut() {
            state.locked = false;
        }
        assert_eq!(chest.is_locked(), Some(false));
        assert_eq!(chest.is_closed(), Some(true));
    }
}
