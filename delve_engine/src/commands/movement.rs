//! `commands::movement` module
//!
//! LEAVE through a door. Leaving through the exit wins the game.

use log::{info, warn};

use crate::command::CommandKey;
use crate::commands::settle;
use crate::commands::targets::{names_door, resolve_door};
use crate::outcome::Outcome;
use crate::session::Context;

pub fn leave_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(leave(ctx, args))
}

fn leave(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if !names_door(args) {
        return Err(ctx.bad_syntax(CommandKey::Leave));
    }
    let name = ctx.state.character()?.name.clone();
    let room = ctx.state.rooms.current();
    let direction = resolve_door(room, args)?;
    let Some(door) = room.doors.get(&direction) else {
        return Err(Outcome::DoorNotPresent {
            compass: Some(direction),
            title: args.join(" "),
        });
    };
    if door.locked {
        return Err(Outcome::IsLocked {
            target: door.full_title(),
        });
    }
    let left = Outcome::LeftRoom {
        room: room.title.clone(),
        door: door.full_title(),
    };

    if door.is_exit {
        info!("{name} left the dungeon through the {}", door.full_title());
        let won = ctx.end_game(Outcome::GameWon { name });
        return Ok(vec![left, won]);
    }
    if ctx.state.rooms.move_through(direction).is_none() {
        warn!("{direction} door of '{}' leads nowhere", ctx.state.rooms.current().id);
        return Err(Outcome::DoorNotPresent {
            compass: Some(direction),
            title: args.join(" "),
        });
    }
    let entered = ctx.state.rooms.current().snapshot(&ctx.state.items);
    Ok(vec![left, Outcome::EnteredRoom(entered)])
}
