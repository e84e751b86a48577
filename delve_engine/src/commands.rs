//! Command resolvers.
//!
//! Each `*_handler` takes the session context and the argument tokens left
//! after the verb and returns at least one `Outcome`. Preconditions are checked
//! in a fixed order: class restrictions, then syntax, then the target, then the
//! target's state, then resources. The first failure is the only outcome.

pub mod combat;
pub mod doors;
pub mod equipment;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod pregame;
pub mod quantity;
pub mod system;
pub mod targets;
pub mod transfer;

pub use combat::*;
pub use doors::*;
pub use equipment::*;
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use pregame::*;
pub use system::*;
pub use transfer::*;

use crate::character::Character;
use crate::item::{EquipSlot, ItemHolder};
use crate::outcome::Outcome;

/// Flatten a resolver's early rejection into its outcome list.
pub(crate) fn settle(result: Result<Vec<Outcome>, Outcome>) -> Vec<Outcome> {
    result.unwrap_or_else(|rejection| vec![rejection])
}

/// Unequip `item_id` if no copies of it remain in the inventory.
pub(crate) fn unequip_if_gone(character: &mut Character, item_id: &str) -> Option<Outcome> {
    if character.contains_item(item_id) {
        return None;
    }
    let slot: EquipSlot = character.equipped_slot_of(item_id)?;
    let item = character.unequip(slot)?;
    Some(Outcome::ItemUnequipped {
        title: item.title,
        slot,
        stats: character.slot_stats(slot),
    })
}
