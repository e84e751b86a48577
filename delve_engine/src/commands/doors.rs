//! `commands::doors` module
//!
//! LOCK, UNLOCK, OPEN, CLOSE and PICK LOCK on doors and chests. Door changes
//! are applied to both views of the door.

use delve_data::{CharacterClass, KeyKind};
use log::info;

use crate::command::CommandKey;
use crate::commands::settle;
use crate::commands::targets::{LockTarget, LockVerb, classify_lock_target};
use crate::item::{ItemsState, Stacks};
use crate::outcome::Outcome;
use crate::session::Context;

pub fn lock_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(change_lock_state(ctx, args, LockVerb::Lock))
}

pub fn unlock_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(change_lock_state(ctx, args, LockVerb::Unlock))
}

pub fn open_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(change_lock_state(ctx, args, LockVerb::Open))
}

pub fn close_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(change_lock_state(ctx, args, LockVerb::Close))
}

/// Thieves unlock without a key.
pub fn pick_lock_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(change_lock_state(ctx, args, LockVerb::Pick))
}

fn command_for(verb: LockVerb) -> CommandKey {
    match verb {
        LockVerb::Lock => CommandKey::Lock,
        LockVerb::Unlock => CommandKey::Unlock,
        LockVerb::Open => CommandKey::Open,
        LockVerb::Close => CommandKey::Close,
        LockVerb::Pick => CommandKey::PickLock,
    }
}

fn carries_key(inventory: &Stacks, items: &ItemsState, kind: KeyKind) -> bool {
    inventory
        .keys()
        .filter_map(|id| items.get(id))
        .any(|item| item.opens() == Some(kind))
}

fn change_lock_state(ctx: &mut Context<'_>, args: &[String], verb: LockVerb) -> Result<Vec<Outcome>, Outcome> {
    let command = command_for(verb);
    let class = ctx.state.character()?.class;
    if verb == LockVerb::Pick && class != CharacterClass::Thief {
        return Err(Outcome::ClassRestricted {
            command,
            classes: vec![CharacterClass::Thief],
        });
    }
    let args = match (verb, args) {
        (LockVerb::Pick, [on, rest @ ..]) if on == "on" => rest,
        _ => args,
    };
    if args.is_empty() {
        return Err(ctx.bad_syntax(command));
    }

    let parts = ctx.state.parts_mut()?;
    let room = parts.rooms.current();
    let target = classify_lock_target(room, parts.items, &parts.character.inventory, args, verb)?;
    let (title, closed, locked, key) = match target {
        LockTarget::Door(direction) => {
            let Some(door) = room.doors.get(&direction) else {
                return Err(Outcome::DoorNotPresent {
                    compass: Some(direction),
                    title: args.join(" "),
                });
            };
            (door.full_title(), door.closed, door.locked, KeyKind::Door)
        },
        LockTarget::Chest => {
            let Some(chest) = room.container.as_ref() else {
                return Err(Outcome::TargetNotFound { title: args.join(" ") });
            };
            (
                chest.title.clone(),
                chest.is_closed().unwrap_or(false),
                chest.is_locked().unwrap_or(false),
                KeyKind::Chest,
            )
        },
    };
    let has_key = carries_key(&parts.character.inventory, parts.items, key);
    let target_title = title.clone();

    let (now_closed, now_locked, outcome) = match verb {
        LockVerb::Lock => {
            if locked {
                return Err(Outcome::AlreadyLocked { target: title });
            }
            if !closed {
                return Err(Outcome::MustCloseFirst { target: title });
            }
            if !has_key {
                return Err(Outcome::MissingKey { key, target: title });
            }
            (closed, true, Outcome::HasBeenLocked { target: title })
        },
        LockVerb::Unlock => {
            if !locked {
                return Err(Outcome::AlreadyUnlocked { target: title });
            }
            if !has_key {
                return Err(Outcome::MissingKey { key, target: title });
            }
            (closed, false, Outcome::HasBeenUnlocked { target: title })
        },
        LockVerb::Open => {
            if !closed {
                return Err(Outcome::AlreadyOpen { target: title });
            }
            if locked {
                return Err(Outcome::IsLocked { target: title });
            }
            (false, locked, Outcome::HasBeenOpened { target: title })
        },
        LockVerb::Close => {
            if closed {
                return Err(Outcome::AlreadyClosed { target: title });
            }
            (true, locked, Outcome::HasBeenClosed { target: title })
        },
        LockVerb::Pick => {
            if !locked {
                return Err(Outcome::AlreadyUnlocked { target: title });
            }
            (closed, false, Outcome::LockPicked { target: title })
        },
    };

    match target {
        LockTarget::Door(direction) => parts.rooms.update_door(direction, |door| {
            door.closed = now_closed;
            door.locked = now_locked;
        }),
        LockTarget::Chest => {
            if let Some(state) = parts.rooms.current_mut().container.as_mut().and_then(|c| c.chest_state_mut()) {
                state.closed = now_closed;
                state.locked = now_locked;
            }
        },
    }
    info!("{command}: {target_title} is now closed={now_closed} locked={now_locked}");
    Ok(vec![outcome])
}
