//! `commands::equipment` module
//!
//! EQUIP and UNEQUIP. Both report the derived stats for the affected slot.

use crate::command::CommandKey;
use crate::commands::settle;
use crate::commands::targets::strip_article;
use crate::item::find_stack;
use crate::outcome::Outcome;
use crate::session::Context;

/// Equip an item from the inventory, displacing whatever held its slot.
pub fn equip_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(equip(ctx, args))
}

fn equip(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::Equip));
    }
    let title = strip_article(args).join(" ");
    let parts = ctx.state.parts_mut()?;
    let character = parts.character;
    let Some(item) = find_stack(&character.inventory, parts.items, &title).and_then(|id| parts.items.get(id)) else {
        return Err(Outcome::ItemNotInInventory { title });
    };
    let Some(slot) = item.slot() else {
        return Err(Outcome::NotEquippable {
            title: item.title.clone(),
        });
    };
    if !item.usable_by(character.class) {
        return Err(Outcome::ClassCantUse {
            title: item.title.clone(),
            class: character.class,
        });
    }
    if character.equipped_slot_of(&item.id) == Some(slot) {
        return Err(Outcome::AlreadyEquipped {
            title: item.title.clone(),
            slot,
        });
    }

    let mut outcomes = Vec::new();
    if let Some(previous) = character.unequip(slot) {
        outcomes.push(Outcome::ItemUnequipped {
            title: previous.title,
            slot,
            stats: character.slot_stats(slot),
        });
    }
    character.equip(item.clone());
    outcomes.push(Outcome::ItemEquipped {
        title: item.title.clone(),
        slot,
        stats: character.slot_stats(slot),
    });
    Ok(outcomes)
}

/// Unequip an equipped item. It stays in the inventory.
pub fn unequip_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(unequip(ctx, args))
}

fn unequip(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::Unequip));
    }
    let title = strip_article(args).join(" ");
    let parts = ctx.state.parts_mut()?;
    let character = parts.character;
    let Some(item) = find_stack(&character.inventory, parts.items, &title).and_then(|id| parts.items.get(id)) else {
        return Err(Outcome::ItemNotInInventory { title });
    };
    if item.slot().is_none() {
        return Err(Outcome::NotEquippable {
            title: item.title.clone(),
        });
    }
    let Some(slot) = character.equipped_slot_of(&item.id) else {
        return Err(Outcome::ItemNotEquipped {
            title: item.title.clone(),
        });
    };
    character.unequip(slot);
    Ok(vec![Outcome::ItemUnequipped {
        title: item.title.clone(),
        slot,
        stats: character.slot_stats(slot),
    }])
}
