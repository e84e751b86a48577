//! Hostile creatures.

use delve_data::Id;
use log::info;

use crate::container::{Container, ContainerKind};
use crate::dice::Dice;
use crate::health::Points;
use crate::item::Stacks;

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub armor_class: i32,
    /// Rolled against the character's armor class.
    pub attack_roll: Dice,
    pub damage_roll: Dice,
    pub hit_points: Points,
    pub inventory: Stacks,
}

impl Creature {
    pub fn is_dead(&self) -> bool {
        self.hit_points.is_depleted()
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }

    /// Turn a slain creature into a corpse holding its inventory.
    pub fn convert_to_corpse(self) -> Container {
        info!("{} ({}) converted to a corpse", self.title, self.id);
        Container {
            id: format!("{}_corpse", self.id),
            title: format!("{} corpse", self.title),
            description: format!("The lifeless body of a {}.", self.title),
            contents: self.inventory,
            kind: ContainerKind::Corpse,
        }
    }
}
