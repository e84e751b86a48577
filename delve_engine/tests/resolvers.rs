mod common;

use common::{begin_as, into_guardroom, session_with};
use de::ItemHolder;
use de::command::CommandKey;
use de::item::EquipSlot;
use de::outcome::{LookPlace, Outcome, SlotDisplay, SlotStats, StackLine, StackSource, WeaponKind};
use delve_data::{CharacterClass, Compass, KeyKind};
use delve_engine as de;

fn give(session: &mut de::Session, item_id: &str, quantity: u32) {
    session
        .state_mut()
        .character
        .as_mut()
        .expect("character exists")
        .add_items(item_id, quantity);
}

#[test]
fn pregame_checks_come_in_order() {
    let mut session = session_with([]);
    assert_eq!(
        session.process("begin game"),
        vec![Outcome::NameOrClassNotSet {
            name_missing: true,
            class_missing: true,
        }]
    );
    assert_eq!(
        session.process("reroll now"),
        vec![Outcome::NameOrClassNotSet {
            name_missing: true,
            class_missing: true,
        }]
    );
    assert_eq!(
        session.process("set name arliss"),
        vec![Outcome::InvalidNamePart { part: "arliss".into() }]
    );
    assert_eq!(
        session.process("set class Bard"),
        vec![Outcome::InvalidClass { class: "Bard".into() }]
    );
    assert!(matches!(
        session.process("set class").as_slice(),
        [Outcome::BadSyntax {
            command: CommandKey::SetClass,
            ..
        }]
    ));
    assert_eq!(
        session.process("set name to Arliss"),
        vec![Outcome::NameSet { name: "Arliss".into() }]
    );
    assert_eq!(
        session.process("begin"),
        vec![Outcome::NameOrClassNotSet {
            name_missing: false,
            class_missing: true,
        }]
    );
}

#[test]
fn begin_game_equips_starter_gear() {
    let mut session = session_with(std::iter::repeat_n(6, 24));
    session.process("set name Arliss");
    session.process("set class Warrior");
    let outcomes = session.process("begin the game");
    let equipped: Vec<(&str, EquipSlot)> = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            Outcome::ItemEquipped { title, slot, .. } => Some((title.as_str(), *slot)),
            _ => None,
        })
        .collect();
    assert_eq!(
        equipped,
        vec![
            ("chain mail", EquipSlot::Armor),
            ("round shield", EquipSlot::Shield),
            ("long sword", EquipSlot::Weapon),
        ]
    );
    assert!(matches!(outcomes.last(), Some(Outcome::EnteredRoom(room)) if room.title == "Entry Hall"));
    assert_eq!(session.phase(), de::Phase::InGame);

    // pregame commands are closed once the game has begun
    assert!(matches!(
        session.process("reroll").as_slice(),
        [Outcome::CommandNotAllowedNow {
            command: CommandKey::Reroll,
            ..
        }]
    ));
}

#[test]
fn class_restrictions_precede_syntax() {
    let mut session = begin_as("Warrior", []);
    assert_eq!(
        session.process("cast spell at kobold"),
        vec![Outcome::ClassRestricted {
            command: CommandKey::CastSpell,
            classes: vec![CharacterClass::Mage, CharacterClass::Priest],
        }]
    );
    assert_eq!(
        session.process("pick lock"),
        vec![Outcome::ClassRestricted {
            command: CommandKey::PickLock,
            classes: vec![CharacterClass::Thief],
        }]
    );
    assert!(matches!(
        session.process("attack").as_slice(),
        [Outcome::BadSyntax {
            command: CommandKey::Attack,
            ..
        }]
    ));
    assert_eq!(
        session.process("attack the kobold"),
        vec![Outcome::OpponentNotFound {
            title: "kobold".into(),
            present: None,
        }]
    );
}

/// Both views of the entry hall's north door agree and have the expected state.
fn assert_north_door(session: &de::Session, closed: bool, locked: bool) {
    let rooms = &session.state().rooms;
    let near = &rooms.by_id("entry").expect("entry hall").doors[&Compass::North];
    let far = &rooms.by_id("guardroom").expect("guard room").doors[&Compass::South];
    assert_eq!((near.closed, near.locked), (closed, locked), "entry side");
    assert_eq!((far.closed, far.locked), (closed, locked), "guard room side");
}

#[test]
fn lock_verbs_are_idempotent() {
    let mut session = begin_as("Thief", []);
    let target = || "north wooden door".to_string();

    assert_eq!(
        session.process("unlock north door"),
        vec![Outcome::MissingKey {
            key: KeyKind::Door,
            target: target(),
        }]
    );
    assert_eq!(
        session.process("open north door"),
        vec![Outcome::IsLocked { target: target() }]
    );
    assert_eq!(
        session.process("pick lock on north wooden door"),
        vec![Outcome::LockPicked { target: target() }]
    );
    assert_north_door(&session, true, false);
    assert_eq!(
        session.process("pick lock north door"),
        vec![Outcome::AlreadyUnlocked { target: target() }]
    );
    assert_eq!(
        session.process("open north door"),
        vec![Outcome::HasBeenOpened { target: target() }]
    );
    assert_north_door(&session, false, false);
    assert_eq!(
        session.process("open north door"),
        vec![Outcome::AlreadyOpen { target: target() }]
    );
    assert_eq!(
        session.process("lock north door"),
        vec![Outcome::MustCloseFirst { target: target() }]
    );
    assert_eq!(
        session.process("close the north door"),
        vec![Outcome::HasBeenClosed { target: target() }]
    );
    assert_north_door(&session, true, false);
    assert_eq!(
        session.process("close north door"),
        vec![Outcome::AlreadyClosed { target: target() }]
    );
    session.process("pick up door key");
    assert_eq!(
        session.process("lock north door"),
        vec![Outcome::HasBeenLocked { target: target() }]
    );
    assert_north_door(&session, true, true);
    assert_eq!(
        session.process("lock north door"),
        vec![Outcome::AlreadyLocked { target: target() }]
    );
    assert_eq!(
        session.process("open east doorway"),
        vec![Outcome::NotOpenable {
            title: "east doorway".into()
        }]
    );
}

#[test]
fn the_exit_can_be_locked_shut() {
    let mut session = begin_as("Thief", []);
    into_guardroom(&mut session);
    assert_eq!(
        session.process("lock north iron door"),
        vec![Outcome::HasBeenLocked {
            target: "north iron door".into()
        }]
    );
    assert_eq!(
        session.process("leave north door"),
        vec![Outcome::IsLocked {
            target: "north iron door".into()
        }]
    );
    assert_eq!(session.phase(), de::Phase::InGame);
    assert_eq!(
        session.process("pick lock north iron door"),
        vec![Outcome::LockPicked {
            target: "north iron door".into()
        }]
    );
}

#[test]
fn vague_door_names_are_rejected() {
    let mut session = begin_as("Warrior", []);
    into_guardroom(&mut session);
    assert_eq!(
        session.process("leave door"),
        vec![Outcome::AmbiguousDoorSpecifier {
            candidates: vec![
                "north iron door".into(),
                "south wooden door".into(),
                "west oak door".into(),
            ],
        }]
    );
    assert_eq!(
        session.process("leave doorway"),
        vec![Outcome::DoorNotPresent {
            compass: None,
            title: "doorway".into(),
        }]
    );
    assert!(matches!(
        session.process("leave kobold").as_slice(),
        [Outcome::BadSyntax {
            command: CommandKey::Leave,
            ..
        }]
    ));

    let outcomes = session.process("leave via west oak door");
    assert!(matches!(
        outcomes.as_slice(),
        [Outcome::LeftRoom { .. }, Outcome::EnteredRoom(room)] if room.container.as_deref() == Some("adventurer corpse")
    ));
}

#[test]
fn chest_contents_move_both_ways() {
    let mut session = begin_as("Warrior", []);
    session.process("leave east doorway");
    assert_eq!(session.state().rooms.current().id, "vault");

    assert_eq!(
        session.process("take gold coins from iron chest"),
        vec![Outcome::ContainerIsClosed {
            title: "iron chest".into()
        }]
    );
    assert_eq!(
        session.process("unlock iron chest"),
        vec![Outcome::MissingKey {
            key: KeyKind::Chest,
            target: "iron chest".into(),
        }]
    );
    give(&mut session, "chest_key", 1);
    session.process("unlock iron chest");
    assert_eq!(
        session.process("open the iron chest"),
        vec![Outcome::HasBeenOpened {
            target: "iron chest".into()
        }]
    );

    assert_eq!(
        session.process("take 2 gold coins from the iron chest"),
        vec![Outcome::ItemTaken {
            title: "gold coin".into(),
            quantity: 2,
            container: "iron chest".into(),
            joinword: "in",
        }]
    );
    assert_eq!(
        session.process("take 9 gold coins from iron chest"),
        vec![Outcome::QuantityExceedsAvailable {
            title: "gold coin".into(),
            requested: 9,
            available: 3,
            source: StackSource::Container {
                title: "iron chest".into(),
                joinword: "in",
            },
        }]
    );
    assert!(matches!(
        session.process("put gold coins on iron chest").as_slice(),
        [Outcome::BadSyntax {
            command: CommandKey::Put,
            ..
        }]
    ));
    assert_eq!(
        session.process("put gold coins in iron chest"),
        vec![Outcome::ItemPut {
            title: "gold coin".into(),
            quantity: 2,
            container: "iron chest".into(),
            joinword: "in",
        }]
    );
    assert_eq!(
        session.process("take silver ring from iron chest"),
        vec![Outcome::ItemNotInContainer {
            title: "silver ring".into(),
            container: "iron chest".into(),
            joinword: "in",
        }]
    );
    assert_eq!(
        session.process("take gold coins from adventurer corpse"),
        vec![Outcome::ContainerNotFound {
            title: "adventurer corpse".into()
        }]
    );
}

#[test]
fn putting_away_a_weapon_unequips_it() {
    let mut session = begin_as("Warrior", []);
    session.process("leave east doorway");
    give(&mut session, "chest_key", 1);
    session.process("unlock iron chest");
    session.process("open iron chest");

    let outcomes = session.process("put long sword in iron chest");
    assert_eq!(
        outcomes,
        vec![
            Outcome::ItemPut {
                title: "long sword".into(),
                quantity: 1,
                container: "iron chest".into(),
                joinword: "in",
            },
            Outcome::ItemUnequipped {
                title: "long sword".into(),
                slot: EquipSlot::Weapon,
                stats: SlotStats::Unarmed,
            },
        ]
    );
    let character = session.state().character.as_ref().unwrap();
    assert!(character.equipped(EquipSlot::Weapon).is_none());
}

#[test]
fn dropping_gear_unequips_it() {
    let mut session = begin_as("Warrior", []);
    assert_eq!(
        session.process("drop long sword"),
        vec![
            Outcome::ItemDropped {
                title: "long sword".into(),
                quantity: 1,
                on_floor: 1,
                remaining: 0,
            },
            Outcome::ItemUnequipped {
                title: "long sword".into(),
                slot: EquipSlot::Weapon,
                stats: SlotStats::Unarmed,
            },
        ]
    );
    assert_eq!(session.process("drop gold coins"), vec![Outcome::QuantityUnclear]);
    assert_eq!(
        session.process("drop 2 torches"),
        vec![Outcome::ItemNotInInventory { title: "torch".into() }]
    );
    assert_eq!(session.process("pick up 1 gold coins"), vec![Outcome::QuantityUnclear]);
    assert_eq!(
        session.process("pick up 5 gold coins"),
        vec![Outcome::QuantityExceedsAvailable {
            title: "gold coin".into(),
            requested: 5,
            available: 2,
            source: StackSource::Floor,
        }]
    );
    assert_eq!(
        session.process("pick up north door"),
        vec![Outcome::CantPickUp {
            title: "north door".into()
        }]
    );
}

#[test]
fn equipping_respects_class_and_slot() {
    let mut session = begin_as("Mage", []);
    assert_eq!(
        session.process("equip fire wand"),
        vec![Outcome::AlreadyEquipped {
            title: "fire wand".into(),
            slot: EquipSlot::Wand,
        }]
    );
    give(&mut session, "long_sword", 1);
    assert_eq!(
        session.process("equip long sword"),
        vec![Outcome::ClassCantUse {
            title: "long sword".into(),
            class: CharacterClass::Mage,
        }]
    );
    session.process("pick up torch");
    assert_eq!(
        session.process("equip torch"),
        vec![Outcome::NotEquippable { title: "torch".into() }]
    );
    assert_eq!(
        session.process("unequip torch"),
        vec![Outcome::NotEquippable { title: "torch".into() }]
    );

    // with the wand put away the dagger takes over
    let outcomes = session.process("unequip fire wand");
    assert_eq!(
        outcomes,
        vec![Outcome::ItemUnequipped {
            title: "fire wand".into(),
            slot: EquipSlot::Wand,
            stats: SlotStats::Attack {
                bonus: 4,
                damage: "1d4+4".into(),
                with: WeaponKind::Weapon,
            },
        }]
    );
    assert_eq!(
        session.process("unequip fire wand"),
        vec![Outcome::ItemNotEquipped {
            title: "fire wand".into()
        }]
    );
}

#[test]
fn swapping_weapons_reports_both_sides() {
    let mut session = begin_as("Warrior", []);
    give(&mut session, "dagger", 1);
    let outcomes = session.process("equip dagger");
    assert_eq!(
        outcomes,
        vec![
            Outcome::ItemUnequipped {
                title: "long sword".into(),
                slot: EquipSlot::Weapon,
                stats: SlotStats::Unarmed,
            },
            Outcome::ItemEquipped {
                title: "dagger".into(),
                slot: EquipSlot::Weapon,
                stats: SlotStats::Attack {
                    bonus: 4,
                    damage: "1d4+4".into(),
                    with: WeaponKind::Weapon,
                },
            },
        ]
    );
    let character = session.state().character.as_ref().unwrap();
    assert_eq!(character.equipped_slot_of("long_sword"), None);
    assert_eq!(character.quantity_of("long_sword"), 1);
}

#[test]
fn slaying_the_kobold_leaves_a_corpse() {
    let mut session = begin_as("Warrior", [20, 12]);
    into_guardroom(&mut session);
    session
        .state_mut()
        .rooms
        .current_mut()
        .creature
        .as_mut()
        .unwrap()
        .hit_points
        .damage(25);

    assert_eq!(
        session.process("attack kobold"),
        vec![
            Outcome::AttackHit {
                creature: "kobold".into(),
                damage: 12,
                weapon: "long sword".into(),
                with: WeaponKind::Weapon,
            },
            Outcome::FoeSlain {
                creature: "kobold".into()
            },
        ]
    );
    let room = session.state().rooms.current();
    assert!(room.creature.is_none());
    assert_eq!(room.container.as_ref().map(|c| c.title.as_str()), Some("kobold corpse"));

    assert_eq!(
        session.process("take chest key from kobold corpse"),
        vec![Outcome::ItemTaken {
            title: "chest key".into(),
            quantity: 1,
            container: "kobold corpse".into(),
            joinword: "on",
        }]
    );
    assert!(matches!(
        session.process("cast spell").as_slice(),
        [Outcome::ClassRestricted {
            command: CommandKey::CastSpell,
            ..
        }]
    ));
}

#[test]
fn a_fatal_retaliation_ends_the_game() {
    let mut session = begin_as("Mage", [1, 20, 4]);
    into_guardroom(&mut session);
    let total = {
        let hit_points = &mut session.state_mut().character.as_mut().unwrap().hit_points;
        hit_points.damage(hit_points.total() - 1);
        hit_points.total()
    };

    let outcomes = session.process("attack kobold");
    assert_eq!(
        outcomes,
        vec![
            Outcome::AttackMissed {
                creature: "kobold".into(),
                weapon: "fire wand".into(),
            },
            Outcome::RetaliationHit {
                creature: "kobold".into(),
                damage: 4,
                hit_points: 0,
                total,
            },
            Outcome::CharacterDied {
                creature: "kobold".into()
            },
        ]
    );
    assert_eq!(session.phase(), de::Phase::Ended);
    assert_eq!(
        session.process("drink health potion"),
        vec![Outcome::CharacterDied {
            creature: "kobold".into()
        }]
    );
}

#[test]
fn priest_heals_and_mana_potions_are_wasted_on_warriors() {
    let mut session = begin_as("Priest", [10]);
    let total = {
        let hit_points = &mut session.state_mut().character.as_mut().unwrap().hit_points;
        hit_points.damage(5);
        hit_points.total()
    };
    assert_eq!(
        session.process("cast spell"),
        vec![Outcome::SpellHealed {
            healed: 5,
            hit_points: total,
            total,
        }]
    );

    let mut warrior = begin_as("Warrior", []);
    warrior.process("pick up mana potion");
    assert_eq!(
        warrior.process("drink mana potion"),
        vec![Outcome::ManaPotionWasted {
            title: "mana potion".into(),
            quantity: 1,
        }]
    );
    assert_eq!(
        warrior.process("drink gold coin"),
        vec![Outcome::ItemNotInInventory {
            title: "gold coin".into()
        }]
    );
    warrior.process("pick up a gold coin");
    assert_eq!(
        warrior.process("drink gold coin"),
        vec![Outcome::NotDrinkable {
            title: "gold coin".into()
        }]
    );
}

#[test]
fn mage_spell_needs_a_creature_present() {
    let mut session = begin_as("Mage", []);
    let before = session.state().character.as_ref().and_then(|c| c.mana_points).unwrap();
    assert_eq!(session.process("cast spell"), vec![Outcome::NoCreatureToTarget]);
    let after = session.state().character.as_ref().and_then(|c| c.mana_points).unwrap();
    assert_eq!(after.current(), before.current());
}

#[test]
fn mana_potions_restore_casters_up_to_the_total() {
    let mut session = begin_as("Mage", []);
    let total = {
        let mana = session
            .state_mut()
            .character
            .as_mut()
            .and_then(|c| c.mana_points.as_mut())
            .unwrap();
        assert!(mana.spend(3));
        mana.total()
    };
    session.process("pick up mana potion");
    assert_eq!(
        session.process("drink mana potion"),
        vec![Outcome::DrankManaPotion {
            title: "mana potion".into(),
            quantity: 1,
            restored: 3,
            mana_points: total,
            total,
        }]
    );
}

#[test]
fn looking_around() {
    let mut session = begin_as("Warrior", []);
    assert_eq!(
        session.process("look at the north door"),
        vec![Outcome::LookedAtDoor {
            title: "north wooden door".into(),
            description: "Heavy planks bound with iron.".into(),
            closed: true,
            locked: true,
        }]
    );
    assert_eq!(
        session.process("look at east doorway"),
        vec![Outcome::LookedAtDoorway {
            title: "east doorway".into(),
            description: "An open arch.".into(),
        }]
    );
    assert_eq!(
        session.process("look at health potions"),
        vec![Outcome::LookedAtItem {
            title: "health potion".into(),
            description: "Red and faintly warm.".into(),
        }]
    );
    assert_eq!(
        session.process("look at kobold"),
        vec![Outcome::FoundNothing {
            title: "kobold".into(),
            place: LookPlace::Floor,
        }]
    );
    assert!(matches!(
        session.process("look at long sword in inventory").as_slice(),
        [Outcome::LookedAtItem { title, .. }] if title == "long sword"
    ));
    assert_eq!(
        session.process("look at torch in inventory"),
        vec![Outcome::FoundNothing {
            title: "torch".into(),
            place: LookPlace::Inventory,
        }]
    );
    assert!(matches!(
        session.process("look at torch on inventory").as_slice(),
        [Outcome::BadSyntax {
            command: CommandKey::LookAt,
            ..
        }]
    ));

    session.process("leave east doorway");
    assert_eq!(
        session.process("look at iron chest"),
        vec![Outcome::LookedAtChest {
            title: "iron chest".into(),
            description: "Riveted and cold.".into(),
            closed: true,
            locked: true,
            contents: None,
        }]
    );
    assert_eq!(
        session.process("look at gold coin in iron chest"),
        vec![Outcome::ContainerIsClosed {
            title: "iron chest".into()
        }]
    );
    assert_eq!(
        session.process("look at gold coin in wooden crate"),
        vec![Outcome::ContainerNotFound {
            title: "wooden crate".into()
        }]
    );
}

#[test]
fn looking_into_an_open_chest_lists_contents() {
    let mut session = begin_as("Warrior", []);
    session.process("leave east doorway");
    give(&mut session, "chest_key", 1);
    session.process("unlock iron chest");
    session.process("open iron chest");
    let outcomes = session.process("look at iron chest");
    let [Outcome::LookedAtChest {
        contents: Some(contents),
        closed: false,
        locked: false,
        ..
    }] = outcomes.as_slice()
    else {
        panic!("unexpected outcomes: {outcomes:?}");
    };
    assert!(contents.contains(&StackLine {
        title: "gold coin".into(),
        quantity: 5,
        equipped: None,
    }));
    assert_eq!(
        session.process("look at silver ring in iron chest"),
        vec![Outcome::FoundNothing {
            title: "silver ring".into(),
            place: LookPlace::Container {
                title: "iron chest".into(),
                joinword: "in",
            },
        }]
    );
}

#[test]
fn status_hides_slots_the_class_cannot_use() {
    let mut session = begin_as("Warrior", []);
    let outcomes = session.process("status");
    let [Outcome::StatusReport(status)] = outcomes.as_slice() else {
        panic!("unexpected outcomes: {outcomes:?}");
    };
    assert_eq!(status.name, "Arliss");
    assert_eq!(status.armor_class, 21);
    assert_eq!(status.mana_points, None);
    assert_eq!(status.wand, SlotDisplay::Hidden);
    assert_eq!(status.weapon, SlotDisplay::Equipped("long sword".into()));
    assert_eq!(
        status.attack,
        SlotStats::Attack {
            bonus: 5,
            damage: "1d8+4".into(),
            with: WeaponKind::Weapon,
        }
    );
    assert!(matches!(
        session.process("status report").as_slice(),
        [Outcome::BadSyntax {
            command: CommandKey::Status,
            ..
        }]
    ));
}

#[test]
fn help_and_inventory() {
    let mut session = begin_as("Thief", []);
    let outcomes = session.process("help pick lock");
    assert!(matches!(
        outcomes.as_slice(),
        [Outcome::CommandHelp {
            command: CommandKey::PickLock,
            usages,
            ..
        }] if !usages.is_empty()
    ));
    assert_eq!(
        session.process("help dance"),
        vec![Outcome::CommandNotRecognized {
            command: "dance".into(),
            allowed: CommandKey::INGAME.to_vec(),
        }]
    );
    assert_eq!(
        session.process("help"),
        vec![Outcome::CommandList {
            commands: CommandKey::INGAME.to_vec()
        }]
    );

    session.process("pick up the gold coins");
    let outcomes = session.process("show inventory");
    let [Outcome::InventoryListing { items }] = outcomes.as_slice() else {
        panic!("unexpected outcomes: {outcomes:?}");
    };
    assert!(items.contains(&StackLine {
        title: "gold coin".into(),
        quantity: 2,
        equipped: None,
    }));
    assert!(items.contains(&StackLine {
        title: "short sword".into(),
        quantity: 1,
        equipped: Some(EquipSlot::Weapon),
    }));
}
