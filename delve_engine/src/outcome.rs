//! Outcome module
//!
//! Every command resolves to one or more `Outcome`s. Each variant carries
//! exactly what its message needs; rendering lives in `view`.

use delve_data::{CharacterClass, Compass, KeyKind};
use variantly::Variantly;

use crate::character::Ability;
use crate::command::CommandKey;
use crate::item::EquipSlot;

/// One stack of items in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLine {
    pub title: String,
    pub quantity: u32,
    /// Set when the listed item is currently equipped.
    pub equipped: Option<EquipSlot>,
}

/// Everything shown on entering a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub title: String,
    pub description: String,
    pub exits: Vec<String>,
    pub container: Option<String>,
    pub creature: Option<String>,
    pub floor: Vec<StackLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Weapon,
    Wand,
}

/// Derived numbers reported after equipment changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStats {
    ArmorClass(i32),
    Attack { bonus: i32, damage: String, with: WeaponKind },
    Unarmed,
}

/// How an equipment slot appears in a status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotDisplay {
    /// The class can't use this slot at all.
    Hidden,
    Empty,
    Equipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub name: String,
    pub class: CharacterClass,
    pub hit_points: (u32, u32),
    pub mana_points: Option<(u32, u32)>,
    pub armor_class: i32,
    pub abilities: Vec<(Ability, u32)>,
    pub armor: SlotDisplay,
    pub shield: SlotDisplay,
    pub wand: SlotDisplay,
    pub weapon: SlotDisplay,
    pub attack: SlotStats,
}

/// Where a quantity of items was looked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackSource {
    Inventory,
    Floor,
    Container { title: String, joinword: &'static str },
}

/// Where LOOK AT searched for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookPlace {
    Floor,
    Inventory,
    Container { title: String, joinword: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Outcome {
    // dispatch
    CommandNotRecognized {
        command: String,
        allowed: Vec<CommandKey>,
    },
    CommandNotAllowedNow {
        command: CommandKey,
        allowed: Vec<CommandKey>,
    },
    BadSyntax {
        command: CommandKey,
        usages: Vec<String>,
    },
    ClassRestricted {
        command: CommandKey,
        classes: Vec<CharacterClass>,
    },
    NameOrClassNotSet {
        name_missing: bool,
        class_missing: bool,
    },

    // targets and quantities
    DoorNotPresent {
        compass: Option<Compass>,
        title: String,
    },
    AmbiguousDoorSpecifier {
        candidates: Vec<String>,
    },
    TargetNotFound {
        title: String,
    },
    ContainerNotFound {
        title: String,
    },
    ContainerIsClosed {
        title: String,
    },
    ItemNotInInventory {
        title: String,
    },
    QuantityUnclear,
    QuantityExceedsAvailable {
        title: String,
        requested: u32,
        available: u32,
        source: StackSource,
    },
    ItemNotInContainer {
        title: String,
        container: String,
        joinword: &'static str,
    },
    ItemNotOnFloor {
        title: String,
    },

    // combat
    NoWeaponEquipped {
        class: CharacterClass,
    },
    OpponentNotFound {
        title: String,
        present: Option<String>,
    },
    AttackHit {
        creature: String,
        damage: u32,
        weapon: String,
        with: WeaponKind,
    },
    AttackMissed {
        creature: String,
        weapon: String,
    },
    FoeSlain {
        creature: String,
    },
    RetaliationHit {
        creature: String,
        damage: u32,
        hit_points: u32,
        total: u32,
    },
    RetaliationMissed {
        creature: String,
    },
    CharacterDied {
        creature: String,
    },
    SpellDamaged {
        creature: String,
        damage: u32,
    },
    SpellHealed {
        healed: u32,
        hit_points: u32,
        total: u32,
    },
    NoCreatureToTarget,
    InsufficientMana {
        current: u32,
        required: u32,
    },

    // drinking
    DrankHealthPotion {
        title: String,
        quantity: u32,
        healed: u32,
        hit_points: u32,
        total: u32,
    },
    DrankManaPotion {
        title: String,
        quantity: u32,
        restored: u32,
        mana_points: u32,
        total: u32,
    },
    ManaPotionWasted {
        title: String,
        quantity: u32,
    },
    NotDrinkable {
        title: String,
    },

    // moving items
    ItemDropped {
        title: String,
        quantity: u32,
        on_floor: u32,
        remaining: u32,
    },
    ItemPickedUp {
        title: String,
        quantity: u32,
        in_inventory: u32,
    },
    CantPickUp {
        title: String,
    },
    ItemPut {
        title: String,
        quantity: u32,
        container: String,
        joinword: &'static str,
    },
    ItemTaken {
        title: String,
        quantity: u32,
        container: String,
        joinword: &'static str,
    },

    // equipment
    ItemEquipped {
        title: String,
        slot: EquipSlot,
        stats: SlotStats,
    },
    ItemUnequipped {
        title: String,
        slot: EquipSlot,
        stats: SlotStats,
    },
    ClassCantUse {
        title: String,
        class: CharacterClass,
    },
    NotEquippable {
        title: String,
    },
    AlreadyEquipped {
        title: String,
        slot: EquipSlot,
    },
    ItemNotEquipped {
        title: String,
    },

    // locks and doors
    HasBeenLocked {
        target: String,
    },
    HasBeenUnlocked {
        target: String,
    },
    HasBeenOpened {
        target: String,
    },
    HasBeenClosed {
        target: String,
    },
    LockPicked {
        target: String,
    },
    AlreadyLocked {
        target: String,
    },
    AlreadyUnlocked {
        target: String,
    },
    AlreadyOpen {
        target: String,
    },
    AlreadyClosed {
        target: String,
    },
    NotLockable {
        title: String,
    },
    NotUnlockable {
        title: String,
    },
    NotOpenable {
        title: String,
    },
    NotClosable {
        title: String,
    },
    NotPickable {
        title: String,
    },
    IsLocked {
        target: String,
    },
    MustCloseFirst {
        target: String,
    },
    MissingKey {
        key: KeyKind,
        target: String,
    },

    // movement
    LeftRoom {
        room: String,
        door: String,
    },
    EnteredRoom(RoomSnapshot),
    GameWon {
        name: String,
    },

    // looking
    LookedAtDoor {
        title: String,
        description: String,
        closed: bool,
        locked: bool,
    },
    LookedAtDoorway {
        title: String,
        description: String,
    },
    LookedAtCreature {
        title: String,
        description: String,
    },
    LookedAtChest {
        title: String,
        description: String,
        closed: bool,
        locked: bool,
        /// `None` while the chest is closed.
        contents: Option<Vec<StackLine>>,
    },
    LookedAtCorpse {
        title: String,
        description: String,
        contents: Vec<StackLine>,
    },
    LookedAtItem {
        title: String,
        description: String,
    },
    FoundNothing {
        title: String,
        place: LookPlace,
    },

    // system
    InventoryListing {
        items: Vec<StackLine>,
    },
    StatusReport(StatusSnapshot),
    CommandList {
        commands: Vec<CommandKey>,
    },
    CommandHelp {
        command: CommandKey,
        usages: Vec<String>,
        blurb: String,
    },
    GameQuit,

    // pregame
    NameSet {
        name: String,
    },
    ClassSet {
        class: CharacterClass,
    },
    InvalidNamePart {
        part: String,
    },
    InvalidClass {
        class: String,
    },
    AbilityScoresRolled {
        scores: Vec<(Ability, u32)>,
    },
}

impl Outcome {
    /// Outcomes that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Outcome::CharacterDied { .. } | Outcome::GameWon { .. } | Outcome::GameQuit
        )
    }
}
