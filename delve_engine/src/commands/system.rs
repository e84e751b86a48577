//! `commands::system` module
//!
//! STATUS, HELP and QUIT.

use std::str::FromStr;

use crate::character::Character;
use crate::command::CommandKey;
use crate::item::EquipSlot;
use crate::outcome::{Outcome, SlotDisplay, StatusSnapshot};
use crate::session::Context;

fn slot_display(character: &Character, slot: EquipSlot, usable: bool) -> SlotDisplay {
    if !usable {
        return SlotDisplay::Hidden;
    }
    match character.equipped(slot) {
        Some(item) => SlotDisplay::Equipped(item.title.clone()),
        None => SlotDisplay::Empty,
    }
}

/// Capture everything the status report shows.
pub fn status_snapshot(character: &Character) -> StatusSnapshot {
    let class = character.class;
    StatusSnapshot {
        name: character.name.clone(),
        class,
        hit_points: (character.hit_points.current(), character.hit_points.total()),
        mana_points: character.mana_points.as_ref().map(|mp| (mp.current(), mp.total())),
        armor_class: character.armor_class(),
        abilities: character.abilities.iter().collect(),
        armor: slot_display(character, EquipSlot::Armor, class.can_use_armor()),
        shield: slot_display(character, EquipSlot::Shield, class.can_use_shield()),
        wand: slot_display(character, EquipSlot::Wand, class.can_use_wand()),
        weapon: slot_display(character, EquipSlot::Weapon, true),
        attack: character.slot_stats(EquipSlot::Weapon),
    }
}

pub fn status_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    if !args.is_empty() {
        return vec![ctx.bad_syntax(CommandKey::Status)];
    }
    match ctx.state.character() {
        Ok(character) => vec![Outcome::StatusReport(status_snapshot(character))],
        Err(rejection) => vec![rejection],
    }
}

/// List the commands legal right now, or explain one of them.
pub fn help_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    let allowed = ctx.allowed_commands();
    if args.is_empty() {
        return vec![Outcome::CommandList { commands: allowed }];
    }
    let asked = args.join(" ");
    match CommandKey::from_str(&asked) {
        Ok(command) => vec![Outcome::CommandHelp {
            command,
            usages: ctx.help.usages(command),
            blurb: ctx.help.blurb(command),
        }],
        Err(_) => vec![Outcome::CommandNotRecognized { command: asked, allowed }],
    }
}

pub fn quit_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    if !args.is_empty() {
        return vec![ctx.bad_syntax(CommandKey::Quit)];
    }
    vec![ctx.end_game(Outcome::GameQuit)]
}
