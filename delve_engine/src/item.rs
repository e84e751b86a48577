//! Item types and related helpers.
//!
//! Items live once in the `ItemsState` catalog. Rooms, containers, creatures and
//! the character hold `Stacks`: item ids with a quantity, so identical copies of
//! an item share one identity.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use delve_data::{CharacterClass, Id, KeyKind, Resource};
use variantly::Variantly;

use crate::dice::Dice;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub kind: ItemKind,
}

/// Capability set of an item.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ItemKind {
    Armor(Protection),
    Shield(Protection),
    Weapon(Armament),
    Wand(Armament),
    Potion(Draught),
    Key(KeyKind),
    Plain,
}

/// Armor and shields.
#[derive(Debug, Clone, PartialEq)]
pub struct Protection {
    pub armor_bonus: i32,
    pub usable_by: Vec<CharacterClass>,
}

/// Weapons and wands.
#[derive(Debug, Clone, PartialEq)]
pub struct Armament {
    pub attack_bonus: i32,
    pub damage: Dice,
    pub usable_by: Vec<CharacterClass>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draught {
    pub restores: Resource,
    pub amount: Dice,
}

/// Equipment slots, ordered by slot name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EquipSlot {
    Armor,
    Shield,
    Wand,
    Weapon,
}

impl EquipSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            EquipSlot::Armor => "armor",
            EquipSlot::Shield => "shield",
            EquipSlot::Wand => "wand",
            EquipSlot::Weapon => "weapon",
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Item {
    /// The slot this item occupies when equipped, if it is equipment.
    pub fn slot(&self) -> Option<EquipSlot> {
        match self.kind {
            ItemKind::Armor(_) => Some(EquipSlot::Armor),
            ItemKind::Shield(_) => Some(EquipSlot::Shield),
            ItemKind::Weapon(_) => Some(EquipSlot::Weapon),
            ItemKind::Wand(_) => Some(EquipSlot::Wand),
            ItemKind::Potion(_) | ItemKind::Key(_) | ItemKind::Plain => None,
        }
    }

    /// Whether `class` may equip this item. Non-equipment is usable by nobody.
    pub fn usable_by(&self, class: CharacterClass) -> bool {
        match &self.kind {
            ItemKind::Armor(p) | ItemKind::Shield(p) => p.usable_by.contains(&class),
            ItemKind::Weapon(a) | ItemKind::Wand(a) => a.usable_by.contains(&class),
            ItemKind::Potion(_) | ItemKind::Key(_) | ItemKind::Plain => false,
        }
    }

    pub fn armor_bonus(&self) -> i32 {
        match &self.kind {
            ItemKind::Armor(p) | ItemKind::Shield(p) => p.armor_bonus,
            _ => 0,
        }
    }

    pub fn armament(&self) -> Option<&Armament> {
        match &self.kind {
            ItemKind::Weapon(a) | ItemKind::Wand(a) => Some(a),
            _ => None,
        }
    }

    pub fn opens(&self) -> Option<KeyKind> {
        match self.kind {
            ItemKind::Key(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }
}

/// Catalog of every item definition, keyed by internal id.
#[derive(Debug, Clone, Default)]
pub struct ItemsState {
    items: HashMap<Id, Item>,
}

impl ItemsState {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id.clone(), item)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// The title of `id`, or the id itself if it's missing from the catalog.
    pub fn title_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.items.get(id).map_or(id, |item| item.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Multiset of items by id.
pub type Stacks = BTreeMap<Id, u32>;

/// Anything that holds stacks of items.
pub trait ItemHolder {
    /// Add `quantity` copies of an item.
    fn add_items(&mut self, item_id: &str, quantity: u32);
    /// Remove up to `quantity` copies. Returns `false` (and removes nothing) if too few are held.
    fn remove_items(&mut self, item_id: &str, quantity: u32) -> bool;
    /// Number of copies held.
    fn quantity_of(&self, item_id: &str) -> u32;

    fn contains_item(&self, item_id: &str) -> bool {
        self.quantity_of(item_id) > 0
    }
}

impl ItemHolder for Stacks {
    fn add_items(&mut self, item_id: &str, quantity: u32) {
        if quantity > 0 {
            *self.entry(item_id.to_string()).or_insert(0) += quantity;
        }
    }

    fn remove_items(&mut self, item_id: &str, quantity: u32) -> bool {
        let Some(held) = self.get_mut(item_id) else {
            return false;
        };
        if *held < quantity {
            return false;
        }
        *held -= quantity;
        if *held == 0 {
            self.remove(item_id);
        }
        true
    }

    fn quantity_of(&self, item_id: &str) -> u32 {
        self.get(item_id).copied().unwrap_or(0)
    }
}

/// Find the id of a held stack whose item title matches `title`.
pub fn find_stack<'a>(stacks: &'a Stacks, items: &ItemsState, title: &str) -> Option<&'a Id> {
    stacks
        .keys()
        .find(|id| items.get(id).is_some_and(|item| item.title_matches(title)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin() -> Item {
        Item {
            id: "gold_coin".into(),
            title: "gold coin".into(),
            description: "Shiny.".into(),
            kind: ItemKind::Plain,
        }
    }

    #[test]
    fn stacks_add_and_remove() {
        let mut stacks = Stacks::new();
        stacks.add_items("gold_coin", 3);
        assert_eq!(stacks.quantity_of("gold_coin"), 3);
        assert!(!stacks.remove_items("gold_coin", 4));
        assert!(stacks.remove_items("gold_coin", 3));
        assert!(!stacks.contains_item("gold_coin"));
        assert!(stacks.is_empty());
    }

    #[test]
    fn find_stack_by_title() {
        let items = ItemsState::new([coin()]);
        let mut stacks = Stacks::new();
        stacks.add_items("gold_coin", 2);
        assert_eq!(find_stack(&stacks, &items, "Gold Coin").map(String::as_str), Some("gold_coin"));
        assert_eq!(find_stack(&stacks, &items, "coin"), None);
    }

    #[test]
    fn slots_and_usability() {
        let wand = Item {
            id: "wand".into(),
            title: "wand".into(),
            description: String::new(),
            kind: ItemKind::Wand(Armament {
                attack_bonus: 1,
                damage: Dice::new(1, 6, 0),
                usable_by: vec![CharacterClass::Mage],
            }),
        };
        assert_eq!(wand.slot(), Some(EquipSlot::Wand));
        assert!(wand.usable_by(CharacterClass::Mage));
        assert!(!wand.usable_by(CharacterClass::Warrior));
        assert!(wand.kind.is_wand());
        assert_eq!(coin().slot(), None);
        assert!(!coin().usable_by(CharacterClass::Warrior));
    }

    #[test]
    fn slots_sort_by_name() {
        let mut slots = vec![EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Wand, EquipSlot::Shield];
        slots.sort();
        let names: Vec<&str> = slots.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["armor", "shield", "wand", "weapon"]);
    }
}
