//! `commands::look` module
//!
//! LOOK AT a door, a creature, a container, or an item on the floor, in the
//! inventory, or in/on the room's container.

use crate::command::CommandKey;
use crate::commands::settle;
use crate::commands::targets::{names_door, resolve_door, strip_article};
use crate::container::ContainerKind;
use crate::item::{ItemsState, Stacks, find_stack};
use crate::lexical::singularize;
use crate::outcome::{LookPlace, Outcome};
use crate::room::stack_lines;
use crate::session::Context;

pub fn look_at_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(look_at(ctx, args))
}

/// Find an item by title in `stacks`, accepting a plural title too.
fn look_in_stacks(stacks: &Stacks, items: &ItemsState, title: &str) -> Option<Outcome> {
    let id = find_stack(stacks, items, title).or_else(|| find_stack(stacks, items, singularize(title)))?;
    let item = items.get(id)?;
    Some(Outcome::LookedAtItem {
        title: item.title.clone(),
        description: item.description.clone(),
    })
}

fn look_at(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::LookAt));
    }
    let bad_syntax = ctx.bad_syntax(CommandKey::LookAt);
    let character = ctx.state.character()?;
    let room = ctx.state.rooms.current();
    let items = &ctx.state.items;

    let clause = args
        .iter()
        .position(|word| word == "in" || word == "on")
        .filter(|position| *position > 0);
    let Some(position) = clause else {
        if names_door(args) {
            let direction = resolve_door(room, args)?;
            let Some(door) = room.doors.get(&direction) else {
                return Err(Outcome::DoorNotPresent {
                    compass: Some(direction),
                    title: args.join(" "),
                });
            };
            let outcome = if door.is_doorway() {
                Outcome::LookedAtDoorway {
                    title: door.full_title(),
                    description: door.description.clone(),
                }
            } else {
                Outcome::LookedAtDoor {
                    title: door.full_title(),
                    description: door.description.clone(),
                    closed: door.closed,
                    locked: door.locked,
                }
            };
            return Ok(vec![outcome]);
        }

        let title = strip_article(args).join(" ");
        if let Some(creature) = room.creature.as_ref().filter(|c| c.title_matches(&title)) {
            return Ok(vec![Outcome::LookedAtCreature {
                title: creature.title.clone(),
                description: creature.description.clone(),
            }]);
        }
        if let Some(container) = room.container.as_ref().filter(|c| c.title_matches(&title)) {
            let outcome = match container.kind {
                ContainerKind::Chest(state) => Outcome::LookedAtChest {
                    title: container.title.clone(),
                    description: container.description.clone(),
                    closed: state.closed,
                    locked: state.locked,
                    contents: (!state.closed).then(|| stack_lines(&container.contents, items)),
                },
                ContainerKind::Corpse => Outcome::LookedAtCorpse {
                    title: container.title.clone(),
                    description: container.description.clone(),
                    contents: stack_lines(&container.contents, items),
                },
            };
            return Ok(vec![outcome]);
        }
        return look_in_stacks(&room.floor, items, &title)
            .map(|outcome| vec![outcome])
            .ok_or(Outcome::FoundNothing {
                title,
                place: LookPlace::Floor,
            });
    };

    let (item_tokens, rest) = args.split_at(position);
    let joinword = rest[0].as_str();
    let place_tokens = strip_article(&rest[1..]);
    if place_tokens.is_empty() {
        return Err(bad_syntax);
    }
    let title = strip_article(item_tokens).join(" ");
    let place_title = place_tokens.join(" ");
    let place_kind = place_tokens.last().map(String::as_str);

    match (joinword, place_title.as_str(), place_kind) {
        ("in", "inventory", _) => look_in_stacks(&character.inventory, items, &title)
            .map(|outcome| vec![outcome])
            .ok_or(Outcome::FoundNothing {
                title,
                place: LookPlace::Inventory,
            }),
        ("on", "floor", _) => look_in_stacks(&room.floor, items, &title)
            .map(|outcome| vec![outcome])
            .ok_or(Outcome::FoundNothing {
                title,
                place: LookPlace::Floor,
            }),
        ("on", "inventory", _) | ("in", "floor", _) | ("in", _, Some("corpse")) | ("on", _, Some("chest")) => {
            Err(bad_syntax)
        },
        _ => {
            let Some(container) = room.container.as_ref().filter(|c| c.title_matches(&place_title)) else {
                return Err(Outcome::ContainerNotFound { title: place_title });
            };
            if container.joinword() != joinword {
                return Err(bad_syntax);
            }
            if container.is_closed() == Some(true) {
                return Err(Outcome::ContainerIsClosed {
                    title: container.title.clone(),
                });
            }
            look_in_stacks(&container.contents, items, &title)
                .map(|outcome| vec![outcome])
                .ok_or(Outcome::FoundNothing {
                    title,
                    place: LookPlace::Container {
                        title: container.title.clone(),
                        joinword: container.joinword(),
                    },
                })
        },
    }
}
