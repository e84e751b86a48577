use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub containers: Vec<ContainerDef>,
    #[serde(default)]
    pub creatures: Vec<CreatureDef>,
    #[serde(default)]
    pub starter_gear: Vec<StarterGearDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: Id,
}

/// The four playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Thief,
    Mage,
    Priest,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [Self::Warrior, Self::Thief, Self::Mage, Self::Priest];

    /// Mages and Priests have mana and can cast spells.
    pub fn is_caster(self) -> bool {
        matches!(self, Self::Mage | Self::Priest)
    }

    pub fn can_use_shield(self) -> bool {
        matches!(self, Self::Warrior | Self::Priest)
    }

    pub fn can_use_armor(self) -> bool {
        !matches!(self, Self::Mage)
    }

    pub fn can_use_wand(self) -> bool {
        matches!(self, Self::Mage)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Thief => "Thief",
            Self::Mage => "Mage",
            Self::Priest => "Priest",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known class or direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name '{}'", self.0)
    }
}

impl std::error::Error for UnknownName {}

impl FromStr for CharacterClass {
    type Err = UnknownName;

    /// Class names are proper nouns: only the capitalized spelling is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Compass direction of a door within its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    pub const ALL: [Compass; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn opposite(self) -> Compass {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compass {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str() == lower)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// What a generic key opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Door,
    Chest,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Door => f.write_str("door key"),
            KeyKind::Chest => f.write_str("chest key"),
        }
    }
}

/// Which pool a potion refills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    HitPoints,
    ManaPoints,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    #[serde(default)]
    pub container: Option<Id>,
    #[serde(default)]
    pub creature: Option<Id>,
    #[serde(default)]
    pub items: Vec<StackDef>,
}

/// One side of a door, as seen from the room that lists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorDef {
    pub direction: Compass,
    #[serde(default)]
    pub portal: PortalDef,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub closed: bool,
    /// Destination room. Absent only for the dungeon exit.
    #[serde(default)]
    pub leads_to: Option<Id>,
    #[serde(default)]
    pub exit: bool,
}

/// Physical kind of a door.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortalDef {
    Door {
        material: String,
    },
    #[default]
    Doorway,
}

/// A quantity of one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDef {
    pub item: Id,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Catalog entry for an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub kind: ItemKindDef,
}

/// Capability set of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKindDef {
    Armor {
        armor_bonus: i32,
        usable_by: Vec<CharacterClass>,
    },
    Shield {
        armor_bonus: i32,
        usable_by: Vec<CharacterClass>,
    },
    Weapon {
        attack_bonus: i32,
        damage: String,
        usable_by: Vec<CharacterClass>,
    },
    Wand {
        attack_bonus: i32,
        damage: String,
        usable_by: Vec<CharacterClass>,
    },
    Potion {
        restores: Resource,
        amount: String,
    },
    Key {
        opens: KeyKind,
    },
    Plain,
}

/// Chest or pre-placed corpse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDef {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub kind: ContainerKindDef,
    #[serde(default)]
    pub contents: Vec<StackDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContainerKindDef {
    Chest {
        #[serde(default)]
        closed: bool,
        #[serde(default)]
        locked: bool,
    },
    Corpse,
}

/// Hostile creature definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureDef {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub armor_class: i32,
    /// Dice rolled against the character's armor class.
    pub attack: String,
    pub damage: String,
    pub hit_points: u32,
    #[serde(default)]
    pub inventory: Vec<StackDef>,
}

/// Items equipped by BEGIN GAME for one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarterGearDef {
    pub class: CharacterClass,
    pub items: Vec<Id>,
}

impl ItemKindDef {
    /// Classes allowed to equip this kind, or `None` if it isn't equipment.
    pub fn usable_by(&self) -> Option<&[CharacterClass]> {
        match self {
            ItemKindDef::Armor { usable_by, .. }
            | ItemKindDef::Shield { usable_by, .. }
            | ItemKindDef::Weapon { usable_by, .. }
            | ItemKindDef::Wand { usable_by, .. } => Some(usable_by),
            ItemKindDef::Potion { .. } | ItemKindDef::Key { .. } | ItemKindDef::Plain => None,
        }
    }

    /// Name of the equipment slot this kind occupies.
    pub fn slot_name(&self) -> Option<&'static str> {
        match self {
            ItemKindDef::Armor { .. } => Some("armor"),
            ItemKindDef::Shield { .. } => Some("shield"),
            ItemKindDef::Weapon { .. } => Some("weapon"),
            ItemKindDef::Wand { .. } => Some("wand"),
            ItemKindDef::Potion { .. } | ItemKindDef::Key { .. } | ItemKindDef::Plain => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_are_case_sensitive() {
        assert_eq!("Mage".parse::<CharacterClass>(), Ok(CharacterClass::Mage));
        assert!("mage".parse::<CharacterClass>().is_err());
        assert!("Necromancer".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn compass_parses_any_case_and_reverses() {
        assert_eq!("NORTH".parse::<Compass>(), Ok(Compass::North));
        assert_eq!(Compass::East.opposite(), Compass::West);
        assert_eq!(Compass::North.opposite().opposite(), Compass::North);
    }

    #[test]
    fn caster_and_shield_rules() {
        assert!(CharacterClass::Priest.is_caster());
        assert!(!CharacterClass::Thief.is_caster());
        assert!(CharacterClass::Warrior.can_use_shield());
        assert!(!CharacterClass::Mage.can_use_shield());
        assert!(!CharacterClass::Mage.can_use_armor());
    }
}
