//! `commands::combat` module
//!
//! ATTACK, CAST SPELL and the creature's retaliation.

use delve_data::CharacterClass;
use log::info;

use crate::command::CommandKey;
use crate::commands::settle;
use crate::commands::targets::strip_article;
use crate::outcome::Outcome;
use crate::rules;
use crate::session::Context;

/// Attack the creature in the room with the equipped weapon (or a Mage's wand).
pub fn attack_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(attack(ctx, args))
}

fn attack(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    let character = ctx.state.character()?;
    let Some(stats) = character.attack_stats() else {
        return Err(Outcome::NoWeaponEquipped { class: character.class });
    };
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::Attack));
    }
    let title = strip_article(args).join(" ");
    let room = ctx.state.rooms.current();
    let Some(creature) = room.creature.as_ref().filter(|c| c.title_matches(&title)) else {
        return Err(Outcome::OpponentNotFound {
            title,
            present: room.creature.as_ref().map(|c| c.title.clone()),
        });
    };
    let creature_title = creature.title.clone();
    let armor_class = creature.armor_class;

    let roll = ctx.dice.roll(&rules::ATTACK_DIE) + stats.bonus;
    info!("attack on {creature_title}: rolled {roll} against armor class {armor_class}");
    if roll < armor_class {
        let mut outcomes = vec![Outcome::AttackMissed {
            creature: creature_title,
            weapon: stats.title,
        }];
        outcomes.extend(retaliate(ctx));
        return Ok(outcomes);
    }

    let damage = ctx.dice.roll(&stats.damage).max(1) as u32;
    let mut outcomes = vec![Outcome::AttackHit {
        creature: creature_title,
        damage,
        weapon: stats.title,
        with: stats.with,
    }];
    outcomes.extend(wound_creature(ctx, damage));
    Ok(outcomes)
}

/// Cast a damaging spell (Mage) or a healing spell (Priest).
pub fn cast_spell_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(cast_spell(ctx, args))
}

fn cast_spell(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    let class = ctx.state.character()?.class;
    if !class.is_caster() {
        return Err(Outcome::ClassRestricted {
            command: CommandKey::CastSpell,
            classes: vec![CharacterClass::Mage, CharacterClass::Priest],
        });
    }
    if !args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::CastSpell));
    }
    if class == CharacterClass::Mage && ctx.state.rooms.current().creature.is_none() {
        return Err(Outcome::NoCreatureToTarget);
    }

    let parts = ctx.state.parts_mut()?;
    let Some(mana) = parts.character.mana_points.as_mut() else {
        return Err(Outcome::InsufficientMana {
            current: 0,
            required: rules::SPELL_MANA_COST,
        });
    };
    if !mana.spend(rules::SPELL_MANA_COST) {
        return Err(Outcome::InsufficientMana {
            current: mana.current(),
            required: rules::SPELL_MANA_COST,
        });
    }
    info!("{} spent {} mana on a spell", parts.character.name, rules::SPELL_MANA_COST);

    if class == CharacterClass::Priest {
        let amount = ctx.dice.roll(&rules::PRIEST_HEAL).max(0) as u32;
        let character = ctx.state.parts_mut()?.character;
        let healed = character.hit_points.restore(amount);
        return Ok(vec![Outcome::SpellHealed {
            healed,
            hit_points: character.hit_points.current(),
            total: character.hit_points.total(),
        }]);
    }

    let damage = ctx.dice.roll(&rules::SPELL_DAMAGE).max(1) as u32;
    let creature = ctx
        .state
        .rooms
        .current()
        .creature
        .as_ref()
        .map(|c| c.title.clone())
        .unwrap_or_default();
    let mut outcomes = vec![Outcome::SpellDamaged { creature, damage }];
    outcomes.extend(wound_creature(ctx, damage));
    Ok(outcomes)
}

/// Apply damage to the room's creature: a kill leaves a corpse, anything less
/// provokes retaliation.
fn wound_creature(ctx: &mut Context<'_>, damage: u32) -> Vec<Outcome> {
    let room = ctx.state.rooms.current_mut();
    let Some(creature) = room.creature.as_mut() else {
        return Vec::new();
    };
    creature.hit_points.damage(damage);
    info!("{} took {damage} damage ({} left)", creature.title, creature.hit_points);
    if creature.is_dead() {
        let title = creature.title.clone();
        room.creature_to_corpse();
        return vec![Outcome::FoeSlain { creature: title }];
    }
    retaliate(ctx)
}

/// The room's creature strikes back. Killing the character ends the game.
pub fn retaliate(ctx: &mut Context<'_>) -> Vec<Outcome> {
    let Some(creature) = ctx.state.rooms.current().creature.clone() else {
        return Vec::new();
    };
    let Ok(parts) = ctx.state.parts_mut() else {
        return Vec::new();
    };
    let armor_class = parts.character.armor_class();
    let roll = ctx.dice.roll(&creature.attack_roll);
    info!("{} retaliates: rolled {roll} against armor class {armor_class}", creature.title);
    if roll < armor_class {
        return vec![Outcome::RetaliationMissed {
            creature: creature.title,
        }];
    }

    let damage = ctx.dice.roll(&creature.damage_roll).max(1) as u32;
    let Ok(parts) = ctx.state.parts_mut() else {
        return Vec::new();
    };
    let hit_points = &mut parts.character.hit_points;
    hit_points.damage(damage);
    let mut outcomes = vec![Outcome::RetaliationHit {
        creature: creature.title.clone(),
        damage,
        hit_points: hit_points.current(),
        total: hit_points.total(),
    }];
    if hit_points.is_depleted() {
        outcomes.push(ctx.end_game(Outcome::CharacterDied {
            creature: creature.title,
        }));
    }
    outcomes
}
