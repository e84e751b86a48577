use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and structural invariants in a WorldDef.
///
/// ```
/// use delve_data::{
///     Compass, DoorDef, GameDef, PortalDef, RoomDef, WorldDef, validate_world,
/// };
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: String::new(),
///         start_room: "start".into(),
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         title: "Start".into(),
///         description: "A room.".into(),
///         doors: vec![DoorDef {
///             direction: Compass::North,
///             portal: PortalDef::Door { material: "wooden".into() },
///             description: String::new(),
///             locked: false,
///             closed: true,
///             leads_to: None,
///             exit: true,
///         }],
///         container: None,
///         creature: None,
///         items: Vec::new(),
///     }],
///     ..WorldDef::default()
/// };
/// let errors = validate_world(&world);
/// // only the missing starter gear is reported
/// assert_eq!(errors.len(), 4);
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut containers = HashSet::new();
    let mut creatures = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);
    track_ids(
        "container",
        world.containers.iter().map(|c| c.id.as_str()),
        &mut containers,
        &mut errors,
    );
    track_ids(
        "creature",
        world.creatures.iter().map(|c| c.id.as_str()),
        &mut creatures,
        &mut errors,
    );

    if world.game.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start room missing".to_string(),
        });
    } else {
        check_ref("room", &world.game.start_room, &rooms, "game start room".to_string(), &mut errors);
    }

    let rooms_by_id: HashMap<&str, &RoomDef> = world.rooms.iter().map(|r| (r.id.as_str(), r)).collect();
    let mut placed_containers = HashSet::new();
    let mut placed_creatures = HashSet::new();
    let mut exit_count = 0;

    for room in &world.rooms {
        let context = format!("room '{}'", room.id);
        if let Some(container) = &room.container {
            check_ref("container", container, &containers, context.clone(), &mut errors);
            if !placed_containers.insert(container.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("container '{container}' placed in more than one room"),
                });
            }
        }
        if let Some(creature) = &room.creature {
            check_ref("creature", creature, &creatures, context.clone(), &mut errors);
            if !placed_creatures.insert(creature.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("creature '{creature}' placed in more than one room"),
                });
            }
        }
        if room.container.is_some() && room.creature.is_some() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} holds both a container and a creature"),
            });
        }
        check_stacks(&room.items, &items, &context, &mut errors);

        let mut directions = HashSet::new();
        for door in &room.doors {
            let door_context = format!("{} door of room '{}'", door.direction, room.id);
            if !directions.insert(door.direction) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{door_context} defined twice"),
                });
            }
            if door.locked && !door.closed {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{door_context} is locked but open"),
                });
            }
            if door.portal == PortalDef::Doorway && (door.locked || door.closed) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{door_context} is a doorway and cannot be closed or locked"),
                });
            }
            if door.exit {
                exit_count += 1;
                if door.leads_to.is_some() {
                    errors.push(ValidationError::InvalidValue {
                        context: format!("{door_context} is the exit and cannot lead to a room"),
                    });
                }
                continue;
            }
            let Some(dest_id) = &door.leads_to else {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{door_context} leads nowhere"),
                });
                continue;
            };
            let Some(dest) = rooms_by_id.get(dest_id.as_str()) else {
                check_ref("room", dest_id, &rooms, door_context, &mut errors);
                continue;
            };
            check_opposite_view(room, door, dest, &door_context, &mut errors);
        }
    }

    if exit_count != 1 {
        errors.push(ValidationError::InvalidValue {
            context: format!("world must have exactly one exit door, found {exit_count}"),
        });
    }

    for container in &world.containers {
        let context = format!("container '{}'", container.id);
        if matches!(container.kind, ContainerKindDef::Chest { closed: false, locked: true }) {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} is locked but open"),
            });
        }
        check_stacks(&container.contents, &items, &context, &mut errors);
    }

    for creature in &world.creatures {
        let context = format!("creature '{}'", creature.id);
        if creature.hit_points == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} has zero hit points"),
            });
        }
        check_stacks(&creature.inventory, &items, &context, &mut errors);
    }

    validate_starter_gear(world, &items, &mut errors);

    errors
}

fn validate_starter_gear(world: &WorldDef, items: &HashSet<String>, errors: &mut Vec<ValidationError>) {
    let items_by_id: HashMap<&str, &ItemDef> = world.items.iter().map(|i| (i.id.as_str(), i)).collect();
    for class in CharacterClass::ALL {
        let Some(gear) = world.starter_gear.iter().find(|g| g.class == class) else {
            errors.push(ValidationError::InvalidValue {
                context: format!("no starter gear for class {class}"),
            });
            continue;
        };
        let mut slots = HashSet::new();
        for item_id in &gear.items {
            let context = format!("starter gear for {class}");
            check_ref("item", item_id, items, context.clone(), errors);
            let Some(item) = items_by_id.get(item_id.as_str()) else {
                continue;
            };
            match (item.kind.slot_name(), item.kind.usable_by()) {
                (Some(slot), Some(usable_by)) => {
                    if !usable_by.contains(&class) {
                        errors.push(ValidationError::InvalidValue {
                            context: format!("{context}: '{item_id}' is not usable by {class}"),
                        });
                    }
                    if !slots.insert(slot) {
                        errors.push(ValidationError::InvalidValue {
                            context: format!("{context}: two items for the {slot} slot"),
                        });
                    }
                },
                _ => errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: '{item_id}' is not equipment"),
                }),
            }
        }
    }
}

/// The destination room must show the same physical door from the other side.
fn check_opposite_view(
    room: &RoomDef,
    door: &DoorDef,
    dest: &RoomDef,
    context: &str,
    errors: &mut Vec<ValidationError>,
) {
    let back = dest.doors.iter().find(|d| d.direction == door.direction.opposite());
    match back {
        None => errors.push(ValidationError::InvalidValue {
            context: format!("{context}: room '{}' has no {} door", dest.id, door.direction.opposite()),
        }),
        Some(back) => {
            if back.leads_to.as_deref() != Some(room.id.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: opposite view in '{}' does not lead back", dest.id),
                });
            }
            if back.portal != door.portal || back.locked != door.locked || back.closed != door.closed {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: opposite view in '{}' disagrees on kind or state", dest.id),
                });
            }
        },
    }
}

fn check_stacks(stacks: &[StackDef], items: &HashSet<String>, context: &str, errors: &mut Vec<ValidationError>) {
    for stack in stacks {
        check_ref("item", &stack.item, items, context.to_string(), errors);
        if stack.quantity == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context}: zero quantity of '{}'", stack.item),
            });
        }
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door(direction: Compass, leads_to: Option<&str>) -> DoorDef {
        DoorDef {
            direction,
            portal: PortalDef::Door {
                material: "iron".into(),
            },
            description: String::new(),
            locked: false,
            closed: true,
            leads_to: leads_to.map(str::to_string),
            exit: false,
        }
    }

    fn room(id: &str, doors: Vec<DoorDef>) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            title: format!("Room {id}"),
            description: "Test room".into(),
            doors,
            container: None,
            creature: None,
            items: Vec::new(),
        }
    }

    fn sword() -> ItemDef {
        ItemDef {
            id: "sword".into(),
            title: "sword".into(),
            description: String::new(),
            kind: ItemKindDef::Weapon {
                attack_bonus: 0,
                damage: "1d8".into(),
                usable_by: CharacterClass::ALL.to_vec(),
            },
        }
    }

    fn base_world() -> WorldDef {
        let mut exit = door(Compass::West, None);
        exit.exit = true;
        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                intro: String::new(),
                start_room: "a".into(),
            },
            rooms: vec![
                room("a", vec![door(Compass::North, Some("b")), exit]),
                room("b", vec![door(Compass::South, Some("a"))]),
            ],
            items: vec![sword()],
            starter_gear: CharacterClass::ALL
                .into_iter()
                .map(|class| StarterGearDef {
                    class,
                    items: vec!["sword".into()],
                })
                .collect(),
            ..WorldDef::default()
        }
    }

    #[test]
    fn base_world_is_valid() {
        assert_eq!(validate_world(&base_world()), Vec::new());
    }

    #[test]
    fn missing_opposite_view_is_reported() {
        let mut world = base_world();
        world.rooms[1].doors.clear();
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("has no south door")));
    }

    #[test]
    fn disagreeing_views_are_reported() {
        let mut world = base_world();
        world.rooms[1].doors[0].locked = true;
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("disagrees")));
    }

    #[test]
    fn exactly_one_exit_required() {
        let mut world = base_world();
        world.rooms[0].doors.pop();
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("exactly one exit door, found 0")));
    }

    #[test]
    fn container_and_creature_cannot_share_a_room() {
        let mut world = base_world();
        world.containers.push(ContainerDef {
            id: "chest".into(),
            title: "wooden chest".into(),
            description: String::new(),
            kind: ContainerKindDef::Chest {
                closed: true,
                locked: false,
            },
            contents: Vec::new(),
        });
        world.creatures.push(CreatureDef {
            id: "kobold".into(),
            title: "kobold".into(),
            description: String::new(),
            armor_class: 10,
            attack: "1d20".into(),
            damage: "1d4".into(),
            hit_points: 5,
            inventory: Vec::new(),
        });
        world.rooms[1].container = Some("chest".into());
        world.rooms[1].creature = Some("kobold".into());
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("both a container and a creature")));
    }

    #[test]
    fn starter_gear_must_be_usable() {
        let mut world = base_world();
        world.items[0].kind = ItemKindDef::Weapon {
            attack_bonus: 0,
            damage: "1d8".into(),
            usable_by: vec![CharacterClass::Warrior],
        };
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn dangling_stack_reference() {
        let mut world = base_world();
        world.rooms[0].items.push(StackDef {
            item: "ghost".into(),
            quantity: 1,
        });
        let errors = validate_world(&world);
        assert_eq!(
            errors,
            vec![ValidationError::MissingReference {
                kind: "item",
                id: "ghost".into(),
                context: "room 'a'".into(),
            }]
        );
    }
}
