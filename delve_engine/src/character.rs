//! The player character: ability scores, hit and mana points, inventory and equipment.

use std::collections::BTreeMap;
use std::fmt;

use delve_data::CharacterClass;
use log::info;

use crate::dice::{Dice, Roller};
use crate::health::Points;
use crate::item::{EquipSlot, Item, ItemHolder, Stacks};
use crate::outcome::{SlotStats, WeaponKind};
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScores([u32; 6]);

impl AbilityScores {
    /// Lowest and highest value a 4d6-drop-lowest roll can produce.
    pub const RANGE: std::ops::RangeInclusive<u32> = 3..=18;

    pub fn new(scores: [(Ability, u32); 6]) -> Self {
        let mut values = [10; 6];
        for (ability, score) in scores {
            values[ability as usize] = score;
        }
        Self(values)
    }

    pub fn get(&self, ability: Ability) -> u32 {
        self.0[ability as usize]
    }

    /// Standard modifier: `floor((score - 10) / 2)`.
    pub fn modifier(&self, ability: Ability) -> i32 {
        (self.get(ability) as i32 - 10).div_euclid(2)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, u32)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

/// Sum of the highest three of four d6.
pub fn roll_4d6_drop_lowest(roller: &mut dyn Roller) -> u32 {
    let mut rolls: Vec<i32> = (0..4).map(|_| roller.roll(&rules::ABILITY_DIE)).collect();
    rolls.sort_unstable();
    rolls[1..].iter().map(|r| (*r).clamp(1, 6) as u32).sum()
}

/// Roll six scores and hand the highest to the class's most important abilities.
pub fn roll_ability_scores(roller: &mut dyn Roller, class: CharacterClass) -> AbilityScores {
    let mut rolls: Vec<u32> = (0..6).map(|_| roll_4d6_drop_lowest(roller)).collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));
    let priority = rules::ability_priority(class);
    let mut values = [10; 6];
    for (ability, score) in priority.into_iter().zip(rolls) {
        values[ability as usize] = score;
    }
    AbilityScores(values)
}

/// Combat numbers for whatever the character currently fights with.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackStats {
    pub title: String,
    pub bonus: i32,
    pub damage: Dice,
    pub with: WeaponKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub abilities: AbilityScores,
    pub hit_points: Points,
    /// `None` for classes that don't cast spells.
    pub mana_points: Option<Points>,
    pub inventory: Stacks,
    equipment: BTreeMap<EquipSlot, Item>,
}

impl Character {
    pub fn new(name: &str, class: CharacterClass, abilities: AbilityScores) -> Character {
        let mut character = Character {
            name: name.to_string(),
            class,
            abilities,
            hit_points: Points::new_at_max(1),
            mana_points: None,
            inventory: Stacks::new(),
            equipment: BTreeMap::new(),
        };
        character.refill_points();
        info!("character {name} the {class} created");
        character
    }

    /// Replace the ability scores and refill derived points.
    pub fn set_abilities(&mut self, abilities: AbilityScores) {
        self.abilities = abilities;
        self.refill_points();
    }

    /// Change class and refill derived points.
    pub fn set_class(&mut self, class: CharacterClass) {
        self.class = class;
        self.refill_points();
    }

    fn refill_points(&mut self) {
        self.hit_points = Points::new_at_max(self.hit_point_total());
        self.mana_points = self.mana_point_total().map(Points::new_at_max);
    }

    fn hit_point_total(&self) -> u32 {
        let con = self.abilities.modifier(Ability::Constitution);
        (rules::base_hit_points(self.class) + 3 * con).max(1) as u32
    }

    fn mana_point_total(&self) -> Option<u32> {
        let ability = rules::spellcasting_ability(self.class)?;
        Some((rules::BASE_MANA_POINTS + 3 * self.abilities.modifier(ability)).max(1) as u32)
    }

    pub fn is_dead(&self) -> bool {
        self.hit_points.is_depleted()
    }

    pub fn armor_class(&self) -> i32 {
        let gear: i32 = self.equipment.values().map(Item::armor_bonus).sum();
        10 + gear + self.abilities.modifier(Ability::Dexterity)
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<&Item> {
        self.equipment.get(&slot)
    }

    /// Slot holding the item with `item_id`, if it is equipped.
    pub fn equipped_slot_of(&self, item_id: &str) -> Option<EquipSlot> {
        self.equipment
            .iter()
            .find(|(_, item)| item.id == item_id)
            .map(|(slot, _)| *slot)
    }

    /// Put `item` in its slot, returning whatever it displaced.
    /// Items without a slot are ignored.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        let slot = item.slot()?;
        info!("{} equipped {} as {slot}", self.name, item.title);
        self.equipment.insert(slot, item)
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        let removed = self.equipment.remove(&slot);
        if let Some(item) = &removed {
            info!("{} unequipped {} from {slot}", self.name, item.title);
        }
        removed
    }

    /// The wand for a Mage who has one equipped, otherwise the weapon.
    pub fn attack_stats(&self) -> Option<AttackStats> {
        let (item, with, ability) = match (self.class, self.equipped(EquipSlot::Wand)) {
            (CharacterClass::Mage, Some(wand)) => (wand, WeaponKind::Wand, Ability::Intelligence),
            _ => {
                let ability = if self.class == CharacterClass::Thief {
                    Ability::Dexterity
                } else {
                    Ability::Strength
                };
                (self.equipped(EquipSlot::Weapon)?, WeaponKind::Weapon, ability)
            },
        };
        let armament = item.armament()?;
        let modifier = self.abilities.modifier(ability);
        Some(AttackStats {
            title: item.title.clone(),
            bonus: armament.attack_bonus + modifier,
            damage: armament.damage.with_modifier(modifier),
            with,
        })
    }

    /// Derived numbers relevant to `slot`.
    pub fn slot_stats(&self, slot: EquipSlot) -> SlotStats {
        match slot {
            EquipSlot::Armor | EquipSlot::Shield => SlotStats::ArmorClass(self.armor_class()),
            EquipSlot::Weapon | EquipSlot::Wand => match self.attack_stats() {
                Some(stats) => SlotStats::Attack {
                    bonus: stats.bonus,
                    damage: stats.damage.to_string(),
                    with: stats.with,
                },
                None => SlotStats::Unarmed,
            },
        }
    }
}

impl ItemHolder for Character {
    fn add_items(&mut self, item_id: &str, quantity: u32) {
        self.inventory.add_items(item_id, quantity);
    }

    fn remove_items(&mut self, item_id: &str, quantity: u32) -> bool {
        self.inventory.remove_items(item_id, quantity)
    }

    fn quantity_of(&self, item_id: &str) -> u32 {
        self.inventory.quantity_of(item_id)
    }
}
