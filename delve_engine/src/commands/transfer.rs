//! `commands::transfer` module
//!
//! PUT items in a chest or on a corpse, and TAKE them back out.

use log::info;

use crate::command::CommandKey;
use crate::commands::quantity::{BarePlural, ParsedQuantity, parse_quantity, settle_quantity};
use crate::commands::targets::strip_article;
use crate::commands::{settle, unequip_if_gone};
use crate::container::Container;
use crate::item::{ItemHolder, find_stack};
use crate::outcome::{Outcome, StackSource};
use crate::session::Context;

/// Split `<item tokens> <joinword> <container tokens>` at the first joinword.
fn split_clause<'t>(args: &'t [String], joinwords: &[&str]) -> Option<(&'t [String], &'t str, &'t [String])> {
    let position = args.iter().position(|word| joinwords.contains(&word.as_str()))?;
    let (item, rest) = args.split_at(position);
    let (joinword, container) = rest.split_first()?;
    if item.is_empty() || container.is_empty() {
        return None;
    }
    Some((item, joinword.as_str(), strip_article(container)))
}

/// The room's container, if `title` names it.
fn find_container<'r>(container: Option<&'r mut Container>, title: &str) -> Result<&'r mut Container, Outcome> {
    container
        .filter(|c| c.title_matches(title))
        .ok_or_else(|| Outcome::ContainerNotFound { title: title.to_string() })
}

/// Put items from the inventory in a chest or on a corpse.
pub fn put_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(put(ctx, args))
}

fn put(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    let Some((item_tokens, joinword, container_tokens)) = split_clause(args, &["in", "on"]) else {
        return Err(ctx.bad_syntax(CommandKey::Put));
    };
    let (quantity, title) = parse_quantity(item_tokens, BarePlural::MeansAll);
    if quantity == ParsedQuantity::Invalid {
        return Err(Outcome::QuantityUnclear);
    }
    let container_title = container_tokens.join(" ");
    let bad_syntax = ctx.bad_syntax(CommandKey::Put);

    let parts = ctx.state.parts_mut()?;
    let container = find_container(parts.rooms.current_mut().container.as_mut(), &container_title)?;
    if container.joinword() != joinword {
        return Err(bad_syntax);
    }
    if container.is_closed() == Some(true) {
        return Err(Outcome::ContainerIsClosed {
            title: container.title.clone(),
        });
    }
    let Some(item_id) = find_stack(&parts.character.inventory, parts.items, &title).cloned() else {
        return Err(Outcome::ItemNotInInventory { title });
    };
    let item_title = parts.items.title_of(&item_id).to_string();
    let held = parts.character.quantity_of(&item_id);
    let count = settle_quantity(quantity, &item_title, held, StackSource::Inventory)?;

    parts.character.remove_items(&item_id, count);
    container.add_items(&item_id, count);
    info!("{} put {count} x {item_title} {joinword} {}", parts.character.name, container.title);

    let mut outcomes = vec![Outcome::ItemPut {
        title: item_title,
        quantity: count,
        container: container.title.clone(),
        joinword: container.joinword(),
    }];
    outcomes.extend(unequip_if_gone(parts.character, &item_id));
    Ok(outcomes)
}

/// Take items out of a chest or off a corpse.
pub fn take_handler(ctx: &mut Context<'_>, args: &[String]) -> Vec<Outcome> {
    settle(take(ctx, args))
}

fn take(ctx: &mut Context<'_>, args: &[String]) -> Result<Vec<Outcome>, Outcome> {
    let Some((item_tokens, _, container_tokens)) = split_clause(args, &["from"]) else {
        return Err(ctx.bad_syntax(CommandKey::Take));
    };
    let (quantity, title) = parse_quantity(item_tokens, BarePlural::MeansAll);
    if quantity == ParsedQuantity::Invalid {
        return Err(Outcome::QuantityUnclear);
    }
    let container_title = container_tokens.join(" ");

    let parts = ctx.state.parts_mut()?;
    let container = find_container(parts.rooms.current_mut().container.as_mut(), &container_title)?;
    if container.is_closed() == Some(true) {
        return Err(Outcome::ContainerIsClosed {
            title: container.title.clone(),
        });
    }
    let Some(item_id) = find_stack(&container.contents, parts.items, &title).cloned() else {
        return Err(Outcome::ItemNotInContainer {
            title,
            container: container.title.clone(),
            joinword: container.joinword(),
        });
    };
    let item_title = parts.items.title_of(&item_id).to_string();
    let available = container.quantity_of(&item_id);
    let source = StackSource::Container {
        title: container.title.clone(),
        joinword: container.joinword(),
    };
    let count = settle_quantity(quantity, &item_title, available, source)?;

    container.remove_items(&item_id, count);
    parts.character.add_items(&item_id, count);
    info!("{} took {count} x {item_title} from {}", parts.character.name, container.title);
    Ok(vec![Outcome::ItemTaken {
        title: item_title,
        quantity: count,
        container: container.title.clone(),
        joinword: container.joinword(),
    }])
}
