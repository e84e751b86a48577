//! `commands::targets` module
//!
//! Resolves doors, containers and other fixtures named in argument tokens.

use delve_data::Compass;
use log::debug;

use crate::item::{ItemsState, Stacks, find_stack};
use crate::outcome::Outcome;
use crate::room::Room;

/// True when the tokens name a door or doorway.
pub fn names_door(tokens: &[String]) -> bool {
    matches!(tokens.last().map(String::as_str), Some("door" | "doorway"))
}

/// Drop a leading "the".
pub fn strip_article(tokens: &[String]) -> &[String] {
    match tokens {
        [first, rest @ ..] if first == "the" && !rest.is_empty() => rest,
        _ => tokens,
    }
}

/// Pick the one door in `room` described by `tokens`.
///
/// Tokens read `[compass] [material...] door|doorway`. Every constraint given
/// must match; with neither compass nor material only the kind word is matched.
pub fn resolve_door(room: &Room, tokens: &[String]) -> Result<Compass, Outcome> {
    let tokens = strip_article(tokens);
    let Some((kind, qualifiers)) = tokens.split_last() else {
        return Err(Outcome::DoorNotPresent {
            compass: None,
            title: String::new(),
        });
    };
    let (compass, material) = match qualifiers.split_first() {
        Some((first, rest)) => match first.parse::<Compass>() {
            Ok(compass) => (Some(compass), rest),
            Err(_) => (None, qualifiers),
        },
        None => (None, qualifiers),
    };
    let material = (!material.is_empty()).then(|| material.join(" "));

    let candidates: Vec<Compass> = room
        .doors
        .values()
        .filter(|door| door.kind_word() == kind)
        .filter(|door| compass.is_none_or(|c| door.direction == c))
        .filter(|door| {
            material
                .as_deref()
                .is_none_or(|m| door.material().is_some_and(|dm| dm.eq_ignore_ascii_case(m)))
        })
        .map(|door| door.direction)
        .collect();

    match candidates.as_slice() {
        [direction] => Ok(*direction),
        [] => {
            debug!("no door matches {tokens:?} in '{}'", room.id);
            Err(Outcome::DoorNotPresent {
                compass,
                title: tokens.join(" "),
            })
        },
        many => Err(Outcome::AmbiguousDoorSpecifier {
            candidates: many
                .iter()
                .filter_map(|dir| room.doors.get(dir))
                .map(|door| door.full_title())
                .collect(),
        }),
    }
}

/// The verbs sharing lock-style target classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockVerb {
    Lock,
    Unlock,
    Open,
    Close,
    Pick,
}

impl LockVerb {
    /// Rejection for something that exists but can't take this verb.
    pub fn not_applicable(self, title: String) -> Outcome {
        match self {
            LockVerb::Lock => Outcome::NotLockable { title },
            LockVerb::Unlock => Outcome::NotUnlockable { title },
            LockVerb::Open => Outcome::NotOpenable { title },
            LockVerb::Close => Outcome::NotClosable { title },
            LockVerb::Pick => Outcome::NotPickable { title },
        }
    }
}

/// A door or the room's chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockTarget {
    Door(Compass),
    Chest,
}

/// Classify the target of LOCK, UNLOCK, OPEN, CLOSE or PICK LOCK.
///
/// Doors resolve through [`resolve_door`]; doorways, corpses, creatures and
/// items are present but the wrong kind; anything else isn't here.
pub fn classify_lock_target(
    room: &Room,
    items: &ItemsState,
    inventory: &Stacks,
    tokens: &[String],
    verb: LockVerb,
) -> Result<LockTarget, Outcome> {
    if names_door(tokens) {
        let direction = resolve_door(room, tokens)?;
        return match room.doors.get(&direction) {
            Some(door) if door.is_doorway() => Err(verb.not_applicable(door.full_title())),
            _ => Ok(LockTarget::Door(direction)),
        };
    }
    let title = strip_article(tokens).join(" ");
    if let Some(container) = room.container.as_ref().filter(|c| c.title_matches(&title)) {
        return if container.kind.is_chest() {
            Ok(LockTarget::Chest)
        } else {
            Err(verb.not_applicable(container.title.clone()))
        };
    }
    if room.creature.as_ref().is_some_and(|c| c.title_matches(&title))
        || find_stack(&room.floor, items, &title).is_some()
        || find_stack(inventory, items, &title).is_some()
    {
        return Err(verb.not_applicable(title));
    }
    Err(Outcome::TargetNotFound { title })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::container::{ChestState, Container, ContainerKind};
    use crate::door::{Door, Portal};

    fn tokens(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(str::to_string).collect()
    }

    fn door(direction: Compass, portal: Portal) -> Door {
        Door {
            direction,
            portal,
            description: String::new(),
            locked: false,
            closed: false,
            leads_to: Some(1),
            is_exit: false,
        }
    }

    fn iron() -> Portal {
        Portal::Door {
            material: "iron".into(),
        }
    }

    fn room() -> Room {
        let doors = [
            door(Compass::North, iron()),
            door(Compass::East, Portal::Door {
                material: "wooden".into(),
            }),
            door(Compass::South, iron()),
            door(Compass::West, Portal::Doorway),
        ];
        Room {
            id: "hall".into(),
            title: "Hall".into(),
            description: String::new(),
            doors: doors.into_iter().map(|d| (d.direction, d)).collect::<BTreeMap<_, _>>(),
            container: Some(Container {
                id: "chest".into(),
                title: "wooden chest".into(),
                description: String::new(),
                contents: Stacks::new(),
                kind: ContainerKind::Chest(ChestState::default()),
            }),
            creature: None,
            floor: Stacks::new(),
        }
    }

    #[test]
    fn door_by_compass_material_or_both() {
        let room = room();
        assert_eq!(resolve_door(&room, &tokens("north door")), Ok(Compass::North));
        assert_eq!(resolve_door(&room, &tokens("wooden door")), Ok(Compass::East));
        assert_eq!(resolve_door(&room, &tokens("south iron door")), Ok(Compass::South));
        assert_eq!(resolve_door(&room, &tokens("doorway")), Ok(Compass::West));
        assert_eq!(resolve_door(&room, &tokens("the west doorway")), Ok(Compass::West));
    }

    #[test]
    fn ambiguous_and_missing_doors() {
        let room = room();
        assert_eq!(
            resolve_door(&room, &tokens("iron door")),
            Err(Outcome::AmbiguousDoorSpecifier {
                candidates: vec!["north iron door".into(), "south iron door".into()],
            })
        );
        assert!(matches!(
            resolve_door(&room, &tokens("door")),
            Err(Outcome::AmbiguousDoorSpecifier { candidates }) if candidates.len() == 3
        ));
        assert_eq!(
            resolve_door(&room, &tokens("west door")),
            Err(Outcome::DoorNotPresent {
                compass: Some(Compass::West),
                title: "west door".into(),
            })
        );
    }

    #[test]
    fn lock_targets_are_classified() {
        let room = room();
        let items = ItemsState::default();
        let inventory = Stacks::new();
        let classify = |raw: &str| classify_lock_target(&room, &items, &inventory, &tokens(raw), LockVerb::Lock);
        assert_eq!(classify("north door"), Ok(LockTarget::Door(Compass::North)));
        assert_eq!(classify("wooden chest"), Ok(LockTarget::Chest));
        assert_eq!(
            classify("doorway"),
            Err(Outcome::NotLockable {
                title: "west doorway".into(),
            })
        );
        assert_eq!(
            classify("barrel"),
            Err(Outcome::TargetNotFound {
                title: "barrel".into(),
            })
        );
    }
}
