//! `commands::inventory` module
//!
//! Handlers for commands that move items between the floor and the inventory,
//! consume them, or list them.

use delve_data::Resource;
use log::info;

use crate::command::CommandKey;
use crate::commands::quantity::{BarePlural, ParsedQuantity, parse_quantity, settle_quantity};
use crate::commands::targets::names_door;
use crate::commands::{settle, unequip_if_gone};
use crate::item::{ItemHolder, ItemKind, find_stack};
use crate::outcome::{Outcome, StackLine, StackSource};
use crate::session::Context;

/// Drink one or more potions from the inventory.
pub fn drink_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(drink(ctx, args))
}

fn drink(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::Drink));
    }
    let (quantity, title) = parse_quantity(args, BarePlural::MeansAll);
    if quantity == ParsedQuantity::Invalid {
        return Err(Outcome::QuantityUnclear);
    }
    let parts = ctx.state.parts_mut()?;
    let Some(item_id) = find_stack(&parts.character.inventory, parts.items, &title).cloned() else {
        return Err(Outcome::ItemNotInInventory { title });
    };
    let Some(item) = parts.items.get(&item_id) else {
        return Err(Outcome::ItemNotInInventory { title });
    };
    let ItemKind::Potion(draught) = &item.kind else {
        return Err(Outcome::NotDrinkable { title: item.title.clone() });
    };
    let held = parts.character.quantity_of(&item_id);
    let count = settle_quantity(quantity, &item.title, held, StackSource::Inventory)?;

    let draught = draught.clone();
    let item_title = item.title.clone();
    parts.character.remove_items(&item_id, count);
    info!("{} drank {count} x {item_title}", parts.character.name);

    let amount: u32 = (0..count)
        .map(|_| ctx.dice.roll(&draught.amount).max(0) as u32)
        .sum();
    let character = ctx.state.parts_mut()?.character;
    let outcome = match draught.restores {
        Resource::HitPoints => {
            let healed = character.hit_points.restore(amount);
            Outcome::DrankHealthPotion {
                title: item_title.clone(),
                quantity: count,
                healed,
                hit_points: character.hit_points.current(),
                total: character.hit_points.total(),
            }
        },
        Resource::ManaPoints => match character.mana_points.as_mut() {
            Some(mana) => {
                let restored = mana.restore(amount);
                Outcome::DrankManaPotion {
                    title: item_title.clone(),
                    quantity: count,
                    restored,
                    mana_points: mana.current(),
                    total: mana.total(),
                }
            },
            None => Outcome::ManaPotionWasted {
                title: item_title.clone(),
                quantity: count,
            },
        },
    };
    Ok(vec![outcome])
}

/// Drop items from the inventory onto the floor.
pub fn drop_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(drop_items(ctx, args))
}

fn drop_items(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::Drop));
    }
    let (quantity, title) = parse_quantity(args, BarePlural::Unclear);
    if quantity == ParsedQuantity::Invalid {
        return Err(Outcome::QuantityUnclear);
    }
    let parts = ctx.state.parts_mut()?;
    let Some(item_id) = find_stack(&parts.character.inventory, parts.items, &title).cloned() else {
        return Err(Outcome::ItemNotInInventory { title });
    };
    let item_title = parts.items.title_of(&item_id).to_string();
    let held = parts.character.quantity_of(&item_id);
    let count = settle_quantity(quantity, &item_title, held, StackSource::Inventory)?;

    parts.character.remove_items(&item_id, count);
    let floor = &mut parts.rooms.current_mut().floor;
    floor.add_items(&item_id, count);
    info!("{} dropped {count} x {item_title}", parts.character.name);

    let mut outcomes = vec![Outcome::ItemDropped {
        title: item_title,
        quantity: count,
        on_floor: floor.quantity_of(&item_id),
        remaining: parts.character.quantity_of(&item_id),
    }];
    outcomes.extend(unequip_if_gone(parts.character, &item_id));
    Ok(outcomes)
}

/// Pick items up off the floor.
pub fn pick_up_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(pick_up(ctx, args))
}

fn pick_up(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    if args.is_empty() {
        return Err(ctx.bad_syntax(CommandKey::PickUp));
    }
    let (quantity, title) = parse_quantity(args, BarePlural::Unclear);
    if quantity == ParsedQuantity::Invalid {
        return Err(Outcome::QuantityUnclear);
    }
    let parts = ctx.state.parts_mut()?;
    let room = parts.rooms.current_mut();
    let raw_title = args.join(" ");
    let is_fixture = names_door(args)
        || room.container.as_ref().is_some_and(|c| c.title_matches(&title) || c.title_matches(&raw_title))
        || room.creature.as_ref().is_some_and(|c| c.title_matches(&title) || c.title_matches(&raw_title));
    if is_fixture {
        return Err(Outcome::CantPickUp { title: raw_title });
    }
    let Some(item_id) = find_stack(&room.floor, parts.items, &title).cloned() else {
        return Err(Outcome::ItemNotOnFloor { title });
    };
    let item_title = parts.items.title_of(&item_id).to_string();
    let on_floor = room.floor.quantity_of(&item_id);
    let count = settle_quantity(quantity, &item_title, on_floor, StackSource::Floor)?;

    room.floor.remove_items(&item_id, count);
    parts.character.add_items(&item_id, count);
    info!("{} picked up {count} x {item_title}", parts.character.name);
    Ok(vec![Outcome::ItemPickedUp {
        title: item_title,
        quantity: count,
        in_inventory: parts.character.quantity_of(&item_id),
    }])
}

/// List the inventory, marking equipped items.
pub fn inventory_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    if !args.is_empty() {
        return vec![ctx.bad_syntax(CommandKey::Inventory)];
    }
    let character = match ctx.state.character() {
        Ok(character) => character,
        Err(rejection) => return vec![rejection],
    };
    let items = character
        .inventory
        .iter()
        .map(|(id, quantity)| StackLine {
            title: ctx.state.items.title_of(id).to_string(),
            quantity: *quantity,
            equipped: character.equipped_slot_of(id),
        })
        .collect();
    vec![Outcome::InventoryListing { items }]
}
