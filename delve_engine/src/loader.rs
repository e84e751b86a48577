//! Loader utilities for building a `GameState` from serialized data.
//!
//! The world is described in TOML as a `delve_data::WorldDef`. It is validated
//! as a whole first, so every problem in a world file is reported at once.

pub mod help;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use delve_data::{
    Compass, ContainerDef, ContainerKindDef, CreatureDef, DoorDef, ItemDef, ItemKindDef, PortalDef, RoomDef, StackDef,
    WorldDef,
};
use log::info;

use crate::container::{ChestState, Container, ContainerKind};
use crate::creature::Creature;
use crate::dice::Dice;
use crate::door::{Door, Portal};
use crate::health::Points;
use crate::item::{Armament, Draught, Item, ItemHolder, ItemKind, ItemsState, Protection, Stacks};
use crate::room::{Room, RoomIndex, RoomsState};
use crate::world::GameState;

/// Read and build the world stored at `path`.
///
/// # Errors
/// Errors bubble up from file IO, TOML deserialization, or validation failures.
pub fn load_world(path: &Path) -> Result<GameState> {
    let def = load_worlddef(path).with_context(|| format!("while loading world from {}", path.display()))?;
    build_game_state(&def).context("while building game state from world definition")
}

/// Deserialize a `WorldDef` from a TOML file.
///
/// # Errors
/// - if the file can't be read or isn't a valid `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let def: WorldDef = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(def)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = delve_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("world definition validation failed:\n{details}");
}

/// Turn a world definition into a ready-to-play `GameState`.
///
/// # Errors
/// - if the definition fails validation
/// - if any dice expression is malformed
pub fn build_game_state(def: &WorldDef) -> Result<GameState> {
    validate_worlddef(def)?;

    let room_index: HashMap<&str, RoomIndex> = def
        .rooms
        .iter()
        .enumerate()
        .map(|(index, room)| (room.id.as_str(), index))
        .collect();
    let containers: HashMap<&str, &ContainerDef> = def.containers.iter().map(|c| (c.id.as_str(), c)).collect();
    let creatures: HashMap<&str, &CreatureDef> = def.creatures.iter().map(|c| (c.id.as_str(), c)).collect();

    let items = ItemsState::new(def.items.iter().map(build_item).collect::<Result<Vec<_>>>()?);
    let rooms = def
        .rooms
        .iter()
        .map(|room| build_room(room, &room_index, &containers, &creatures))
        .collect::<Result<Vec<_>>>()?;
    let cursor = room_index
        .get(def.game.start_room.as_str())
        .copied()
        .ok_or_else(|| anyhow!("start room '{}' not found", def.game.start_room))?;

    let starter_gear = def
        .starter_gear
        .iter()
        .map(|gear| (gear.class, gear.items.clone()))
        .collect();

    info!("{} rooms added to the dungeon", rooms.len());
    info!("{} items added to the catalog", items.len());
    info!("{} creatures placed", def.creatures.len());
    info!("starting room: '{}'", def.game.start_room);

    Ok(GameState {
        title: def.game.title.clone(),
        intro: def.game.intro.clone(),
        rooms: RoomsState::new(rooms, cursor),
        items,
        starter_gear,
        ..GameState::default()
    })
}

fn parse_dice(expr: &str, context: &str) -> Result<Dice> {
    expr.parse::<Dice>()
        .with_context(|| format!("invalid dice expression '{expr}' for {context}"))
}

fn build_stacks(stacks: &[StackDef]) -> Stacks {
    let mut built = Stacks::new();
    for stack in stacks {
        built.add_items(&stack.item, stack.quantity);
    }
    built
}

fn build_item(def: &ItemDef) -> Result<Item> {
    let context = format!("item '{}'", def.id);
    let kind = match &def.kind {
        ItemKindDef::Armor { armor_bonus, usable_by } => ItemKind::Armor(Protection {
            armor_bonus: *armor_bonus,
            usable_by: usable_by.clone(),
        }),
        ItemKindDef::Shield { armor_bonus, usable_by } => ItemKind::Shield(Protection {
            armor_bonus: *armor_bonus,
            usable_by: usable_by.clone(),
        }),
        ItemKindDef::Weapon {
            attack_bonus,
            damage,
            usable_by,
        } => ItemKind::Weapon(Armament {
            attack_bonus: *attack_bonus,
            damage: parse_dice(damage, &context)?,
            usable_by: usable_by.clone(),
        }),
        ItemKindDef::Wand {
            attack_bonus,
            damage,
            usable_by,
        } => ItemKind::Wand(Armament {
            attack_bonus: *attack_bonus,
            damage: parse_dice(damage, &context)?,
            usable_by: usable_by.clone(),
        }),
        ItemKindDef::Potion { restores, amount } => ItemKind::Potion(Draught {
            restores: *restores,
            amount: parse_dice(amount, &context)?,
        }),
        ItemKindDef::Key { opens } => ItemKind::Key(*opens),
        ItemKindDef::Plain => ItemKind::Plain,
    };
    Ok(Item {
        id: def.id.clone(),
        title: def.title.clone(),
        description: def.description.clone(),
        kind,
    })
}

fn build_door(def: &DoorDef, room_index: &HashMap<&str, RoomIndex>) -> Result<Door> {
    let leads_to = match &def.leads_to {
        Some(id) => Some(
            room_index
                .get(id.as_str())
                .copied()
                .ok_or_else(|| anyhow!("door leads to unknown room '{id}'"))?,
        ),
        None => None,
    };
    let portal = match &def.portal {
        PortalDef::Door { material } => Portal::Door {
            material: material.clone(),
        },
        PortalDef::Doorway => Portal::Doorway,
    };
    Ok(Door {
        direction: def.direction,
        portal,
        description: def.description.clone(),
        locked: def.locked,
        closed: def.closed,
        leads_to,
        is_exit: def.exit,
    })
}

fn build_container(def: &ContainerDef) -> Container {
    let kind = match def.kind {
        ContainerKindDef::Chest { closed, locked } => ContainerKind::Chest(ChestState { closed, locked }),
        ContainerKindDef::Corpse => ContainerKind::Corpse,
    };
    Container {
        id: def.id.clone(),
        title: def.title.clone(),
        description: def.description.clone(),
        contents: build_stacks(&def.contents),
        kind,
    }
}

fn build_creature(def: &CreatureDef) -> Result<Creature> {
    let context = format!("creature '{}'", def.id);
    Ok(Creature {
        id: def.id.clone(),
        title: def.title.clone(),
        description: def.description.clone(),
        armor_class: def.armor_class,
        attack_roll: parse_dice(&def.attack, &context)?,
        damage_roll: parse_dice(&def.damage, &context)?,
        hit_points: Points::new_at_max(def.hit_points),
        inventory: build_stacks(&def.inventory),
    })
}

fn build_room(
    def: &RoomDef,
    room_index: &HashMap<&str, RoomIndex>,
    containers: &HashMap<&str, &ContainerDef>,
    creatures: &HashMap<&str, &CreatureDef>,
) -> Result<Room> {
    let doors: BTreeMap<Compass, Door> = def
        .doors
        .iter()
        .map(|door| -> Result<(Compass, Door)> { Ok((door.direction, build_door(door, room_index)?)) })
        .collect::<Result<_>>()
        .with_context(|| format!("building doors of room '{}'", def.id))?;
    let container = match &def.container {
        Some(id) => Some(build_container(
            containers
                .get(id.as_str())
                .ok_or_else(|| anyhow!("room '{}' holds unknown container '{id}'", def.id))?,
        )),
        None => None,
    };
    let creature = match &def.creature {
        Some(id) => Some(build_creature(
            creatures
                .get(id.as_str())
                .ok_or_else(|| anyhow!("room '{}' holds unknown creature '{id}'", def.id))?,
        )?),
        None => None,
    };
    Ok(Room {
        id: def.id.clone(),
        title: def.title.clone(),
        description: def.description.clone(),
        doors,
        container,
        creature,
        floor: build_stacks(&def.items),
    })
}
