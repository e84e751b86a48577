//! `commands::pregame` module
//!
//! Character creation: SET NAME, SET CLASS, REROLL and BEGIN GAME.

use delve_data::CharacterClass;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;

use crate::character::{Character, roll_ability_scores};
use crate::command::CommandKey;
use crate::commands::settle;
use crate::item::ItemHolder;
use crate::outcome::Outcome;
use crate::session::Context;

lazy_static! {
    static ref NAME_PART: Regex = Regex::new(r"^[A-Z][a-z]+$").expect("valid name pattern");
}

fn scores_rolled(character: &Character) -> Outcome {
    Outcome::AbilityScoresRolled {
        scores: character.abilities.iter().collect(),
    }
}

/// Name the character. Each part must be capitalized letters only, e.g. "Arliss Vane".
pub fn set_name_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(set_name(ctx, args))
}

fn set_name(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::SetName));
    }
    if let Some(part) = args.iter().find(|part| !NAME_PART.is_match(part)) {
        return Err(Outcome::InvalidNamePart { part: part.clone() });
    }
    let name = args.join(" ");
    let created = ctx.state.set_name(&name, &mut *ctx.dice);
    let mut outcomes = vec![Outcome::NameSet { name }];
    if created {
        outcomes.push(scores_rolled(ctx.state.character()?));
    }
    Ok(outcomes)
}

/// Choose one of the four classes. Class names are case-sensitive.
pub fn set_class_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(set_class(ctx, args))
}

fn set_class(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    let [class_name] = args else {
        return Err(ctx.bad_syntax(CommandKey::SetClass));
    };
    let Ok(class) = class_name.parse::<CharacterClass>() else {
        return Err(Outcome::InvalidClass {
            class: class_name.clone(),
        });
    };
    let created = ctx.state.set_class(class, &mut *ctx.dice);
    let mut outcomes = vec![Outcome::ClassSet { class }];
    if created {
        outcomes.push(scores_rolled(ctx.state.character()?));
    }
    Ok(outcomes)
}

/// Roll a fresh set of ability scores.
pub fn reroll_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(reroll(ctx, args))
}

fn reroll(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    let class = ctx.state.character()?.class;
    if !args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::Reroll));
    }
    let abilities = roll_ability_scores(&mut *ctx.dice, class);
    let character = ctx.state.parts_mut()?.character;
    character.set_abilities(abilities);
    info!("{} rerolled ability scores", character.name);
    Ok(vec![scores_rolled(character)])
}

/// Hand out the class's starting gear and enter the first room.
pub fn begin_game_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(begin_game(ctx, args))
}

fn begin_game(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    let class = ctx.state.character()?.class;
    if !args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::BeginGame));
    }
    let gear_ids = ctx.state.starter_gear.get(&class).cloned().unwrap_or_default();
    let parts = ctx.state.parts_mut()?;

    let mut gear: Vec<_> = gear_ids
        .iter()
        .filter_map(|id| {
            let item = parts.items.get(id);
            if item.is_none() {
                warn!("starter gear '{id}' is not in the item catalog");
            }
            item
        })
        .filter_map(|item| item.slot().map(|slot| (slot, item)))
        .collect();
    gear.sort_by_key(|(slot, _)| *slot);

    let mut outcomes = Vec::new();
    for (slot, item) in gear {
        parts.character.add_items(&item.id, 1);
        parts.character.equip(item.clone());
        outcomes.push(Outcome::ItemEquipped {
            title: item.title.clone(),
            slot,
            stats: parts.character.slot_stats(slot),
        });
    }
    info!("{} the {class} enters the dungeon", parts.character.name);
    outcomes.push(Outcome::EnteredRoom(parts.rooms.current().snapshot(parts.items)));
    ctx.state.game_has_begun = true;
    Ok(outcomes)
}
