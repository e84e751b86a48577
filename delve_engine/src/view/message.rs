//! module `view::message`
//!
//! Plain-text sentences for each `Outcome`. Styling is applied later by `View`.

use std::fmt::{self, Display, Formatter};

use crate::command::CommandKey;
use crate::lexical::{join_with_conjunction, quantified};
use crate::outcome::{LookPlace, Outcome, RoomSnapshot, SlotDisplay, SlotStats, StackLine, StackSource, WeaponKind};

fn command_names(commands: &[CommandKey]) -> String {
    let names: Vec<&str> = commands.iter().map(|key| key.name()).collect();
    join_with_conjunction(&names, "and")
}

fn stack_list(stacks: &[StackLine]) -> String {
    let entries: Vec<String> = stacks
        .iter()
        .map(|line| {
            let text = quantified(&line.title, line.quantity);
            match line.equipped {
                Some(slot) => format!("{text} (equipped as {slot})"),
                None => text,
            }
        })
        .collect();
    join_with_conjunction(&entries, "and")
}

impl Display for StackSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StackSource::Inventory => f.write_str("in your inventory"),
            StackSource::Floor => f.write_str("on the floor"),
            StackSource::Container { title, joinword } => write!(f, "{joinword} the {title}"),
        }
    }
}

impl Display for LookPlace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LookPlace::Floor => f.write_str("on the floor"),
            LookPlace::Inventory => f.write_str("in your inventory"),
            LookPlace::Container { title, joinword } => write!(f, "{joinword} the {title}"),
        }
    }
}

impl Display for SlotStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SlotStats::ArmorClass(ac) => write!(f, "Your armor class is now {ac}."),
            SlotStats::Attack { bonus, damage, with } => {
                let with = match with {
                    WeaponKind::Weapon => "weapon",
                    WeaponKind::Wand => "wand",
                };
                write!(f, "You attack with your {with} at {bonus:+} to hit for {damage} damage.")
            },
            SlotStats::Unarmed => f.write_str("You have nothing to attack with."),
        }
    }
}

impl Display for SlotDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SlotDisplay::Hidden => Ok(()),
            SlotDisplay::Empty => f.write_str("(none)"),
            SlotDisplay::Equipped(title) => f.write_str(title),
        }
    }
}

/// Sentences describing what is in a room besides its description.
pub fn room_details(room: &RoomSnapshot) -> Vec<String> {
    let mut details = Vec::new();
    if let Some(creature) = &room.creature {
        details.push(format!("A {creature} is here."));
    }
    if let Some(container) = &room.container {
        details.push(format!("There is a {container} here."));
    }
    if !room.floor.is_empty() {
        details.push(format!("On the floor you see {}.", stack_list(&room.floor)));
    }
    if !room.exits.is_empty() {
        details.push(format!("Exits: {}.", join_with_conjunction(&room.exits, "and")));
    }
    details
}

impl Display for RoomSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.description)?;
        for line in room_details(self) {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

impl Display for Outcome {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::CommandNotRecognized { command, allowed } => write!(
                f,
                "'{command}' is not a command you can use. Try {}.",
                command_names(allowed)
            ),
            Outcome::CommandNotAllowedNow { command, allowed } => write!(
                f,
                "You can't use {command} right now. You can use {}.",
                command_names(allowed)
            ),
            Outcome::BadSyntax { command, usages } => {
                write!(f, "That isn't how {command} works. Usage: {}", usages.join(" | "))
            },
            Outcome::ClassRestricted { command, classes } => {
                let names: Vec<&str> = classes.iter().map(|c| c.as_str()).collect();
                write!(f, "Only a {} can use {command}.", join_with_conjunction(&names, "or"))
            },
            Outcome::NameOrClassNotSet {
                name_missing,
                class_missing,
            } => match (name_missing, class_missing) {
                (true, true) => f.write_str("Set your name and class first."),
                (true, false) => f.write_str("Set your name first."),
                _ => f.write_str("Set your class first."),
            },

            Outcome::DoorNotPresent { title, .. } => write!(f, "There is no {title} here."),
            Outcome::AmbiguousDoorSpecifier { candidates } => write!(
                f,
                "Which do you mean: {}?",
                join_with_conjunction(candidates, "or")
            ),
            Outcome::TargetNotFound { title } => write!(f, "You don't see any {title} here."),
            Outcome::ContainerNotFound { title } => write!(f, "There is no {title} here."),
            Outcome::ContainerIsClosed { title } => write!(f, "The {title} is closed."),
            Outcome::ItemNotInInventory { title } => write!(f, "You aren't carrying any {title}."),
            Outcome::QuantityUnclear => f.write_str("How many? Say a number, or use \"the\" for all of them."),
            Outcome::QuantityExceedsAvailable {
                title,
                requested,
                available,
                source,
            } => write!(
                f,
                "You asked for {requested}, but there {} only {} {source}.",
                if *available == 1 { "is" } else { "are" },
                quantified(title, *available)
            ),
            Outcome::ItemNotInContainer {
                title,
                container,
                joinword,
            } => write!(f, "There is no {title} {joinword} the {container}."),
            Outcome::ItemNotOnFloor { title } => write!(f, "There is no {title} on the floor."),

            Outcome::NoWeaponEquipped { class } => write!(f, "A {class} needs a weapon equipped to attack."),
            Outcome::OpponentNotFound { title, present } => match present {
                Some(creature) => write!(f, "There is no {title} here, only a {creature}."),
                None => write!(f, "There is no {title} here to fight."),
            },
            Outcome::AttackHit {
                creature,
                damage,
                weapon,
                ..
            } => write!(f, "Your {weapon} strikes the {creature} for {damage} damage."),
            Outcome::AttackMissed { creature, weapon } => write!(f, "Your {weapon} misses the {creature}."),
            Outcome::FoeSlain { creature } => write!(f, "The {creature} collapses, dead."),
            Outcome::RetaliationHit {
                creature,
                damage,
                hit_points,
                total,
            } => write!(
                f,
                "The {creature} hits you for {damage} damage. You have {hit_points}/{total} hit points."
            ),
            Outcome::RetaliationMissed { creature } => write!(f, "The {creature} attacks and misses you."),
            Outcome::CharacterDied { creature } => write!(f, "The {creature} has killed you. Your adventure is over."),
            Outcome::SpellDamaged { creature, damage } => {
                write!(f, "Your spell sears the {creature} for {damage} damage.")
            },
            Outcome::SpellHealed {
                healed,
                hit_points,
                total,
            } => write!(
                f,
                "Your prayer heals {healed} hit points. You have {hit_points}/{total} hit points."
            ),
            Outcome::NoCreatureToTarget => f.write_str("There is nothing here to cast a spell at."),
            Outcome::InsufficientMana { current, required } => write!(
                f,
                "You need {required} mana points to cast a spell but have only {current}."
            ),

            Outcome::DrankHealthPotion {
                title,
                quantity,
                healed,
                hit_points,
                total,
            } => write!(
                f,
                "You drink {} and recover {healed} hit points. You have {hit_points}/{total} hit points.",
                quantified(title, *quantity)
            ),
            Outcome::DrankManaPotion {
                title,
                quantity,
                restored,
                mana_points,
                total,
            } => write!(
                f,
                "You drink {} and recover {restored} mana points. You have {mana_points}/{total} mana points.",
                quantified(title, *quantity)
            ),
            Outcome::ManaPotionWasted { title, quantity } => write!(
                f,
                "You drink {}, but you have no magic for it to restore.",
                quantified(title, *quantity)
            ),
            Outcome::NotDrinkable { title } => write!(f, "You can't drink the {title}."),

            Outcome::ItemDropped {
                title,
                quantity,
                on_floor,
                remaining,
            } => write!(
                f,
                "You drop {}. There {} now {} on the floor and you have {remaining} left.",
                quantified(title, *quantity),
                if *on_floor == 1 { "is" } else { "are" },
                quantified(title, *on_floor)
            ),
            Outcome::ItemPickedUp {
                title,
                quantity,
                in_inventory,
            } => write!(
                f,
                "You pick up {}. You now carry {in_inventory}.",
                quantified(title, *quantity)
            ),
            Outcome::CantPickUp { title } => write!(f, "You can't pick up the {title}."),
            Outcome::ItemPut {
                title,
                quantity,
                container,
                joinword,
            } => write!(f, "You put {} {joinword} the {container}.", quantified(title, *quantity)),
            Outcome::ItemTaken {
                title,
                quantity,
                container,
                joinword,
            } => {
                let from = if *joinword == "on" { "off" } else { "out of" };
                write!(f, "You take {} {from} the {container}.", quantified(title, *quantity))
            },

            Outcome::ItemEquipped { title, slot, stats } => {
                write!(f, "You equip the {title} as your {slot}. {stats}")
            },
            Outcome::ItemUnequipped { title, slot, stats } => {
                write!(f, "You unequip the {title} from your {slot} slot. {stats}")
            },
            Outcome::ClassCantUse { title, class } => write!(f, "A {class} can't use the {title}."),
            Outcome::NotEquippable { title } => write!(f, "The {title} can't be equipped."),
            Outcome::AlreadyEquipped { title, slot } => {
                write!(f, "The {title} is already equipped as your {slot}.")
            },
            Outcome::ItemNotEquipped { title } => write!(f, "The {title} isn't equipped."),

            Outcome::HasBeenLocked { target } => write!(f, "You lock the {target}."),
            Outcome::HasBeenUnlocked { target } => write!(f, "You unlock the {target}."),
            Outcome::HasBeenOpened { target } => write!(f, "You open the {target}."),
            Outcome::HasBeenClosed { target } => write!(f, "You close the {target}."),
            Outcome::LockPicked { target } => write!(f, "You pick the lock on the {target}."),
            Outcome::AlreadyLocked { target } => write!(f, "The {target} is already locked."),
            Outcome::AlreadyUnlocked { target } => write!(f, "The {target} isn't locked."),
            Outcome::AlreadyOpen { target } => write!(f, "The {target} is already open."),
            Outcome::AlreadyClosed { target } => write!(f, "The {target} is already closed."),
            Outcome::NotLockable { title } => write!(f, "The {title} can't be locked."),
            Outcome::NotUnlockable { title } => write!(f, "The {title} can't be unlocked."),
            Outcome::NotOpenable { title } => write!(f, "The {title} can't be opened."),
            Outcome::NotClosable { title } => write!(f, "The {title} can't be closed."),
            Outcome::NotPickable { title } => write!(f, "The {title} has no lock to pick."),
            Outcome::IsLocked { target } => write!(f, "The {target} is locked."),
            Outcome::MustCloseFirst { target } => write!(f, "You need to close the {target} first."),
            Outcome::MissingKey { key, target } => write!(f, "You need a {key} for the {target}."),

            Outcome::LeftRoom { room, door } => write!(f, "You leave the {room} through the {door}."),
            Outcome::EnteredRoom(snapshot) => write!(f, "{snapshot}"),
            Outcome::GameWon { name } => write!(f, "{name} has escaped the dungeon. You win!"),

            Outcome::LookedAtDoor {
                title,
                description,
                closed,
                locked,
            } => {
                let state = match (closed, locked) {
                    (true, true) => "closed and locked",
                    (true, false) => "closed",
                    _ => "open",
                };
                write!(f, "The {title}: {description} It is {state}.")
            },
            Outcome::LookedAtDoorway { title, description } => write!(f, "The {title}: {description}"),
            Outcome::LookedAtCreature { title, description } | Outcome::LookedAtItem { title, description } => {
                write!(f, "The {title}: {description}")
            },
            Outcome::LookedAtChest {
                title,
                description,
                locked,
                contents,
                ..
            } => {
                write!(f, "The {title}: {description}")?;
                match contents {
                    None if *locked => f.write_str(" It is closed and locked."),
                    None => f.write_str(" It is closed."),
                    Some(stacks) if stacks.is_empty() => f.write_str(" It is open and empty."),
                    Some(stacks) => write!(f, " Inside you see {}.", stack_list(stacks)),
                }
            },
            Outcome::LookedAtCorpse {
                title,
                description,
                contents,
            } => {
                write!(f, "The {title}: {description}")?;
                if contents.is_empty() {
                    f.write_str(" It carries nothing.")
                } else {
                    write!(f, " On it you see {}.", stack_list(contents))
                }
            },
            Outcome::FoundNothing { title, place } => write!(f, "There is no {title} {place}."),

            Outcome::InventoryListing { items } => {
                if items.is_empty() {
                    f.write_str("You aren't carrying anything.")
                } else {
                    write!(f, "You are carrying {}.", stack_list(items))
                }
            },
            Outcome::StatusReport(status) => {
                writeln!(f, "{} the {}", status.name, status.class)?;
                writeln!(f, "Hit points: {}/{}", status.hit_points.0, status.hit_points.1)?;
                if let Some((current, total)) = status.mana_points {
                    writeln!(f, "Mana points: {current}/{total}")?;
                }
                writeln!(f, "Armor class: {}", status.armor_class)?;
                for (ability, score) in &status.abilities {
                    writeln!(f, "{ability}: {score}")?;
                }
                for (label, slot) in [
                    ("Armor", &status.armor),
                    ("Shield", &status.shield),
                    ("Wand", &status.wand),
                    ("Weapon", &status.weapon),
                ] {
                    if *slot != SlotDisplay::Hidden {
                        writeln!(f, "{label}: {slot}")?;
                    }
                }
                write!(f, "{}", status.attack)
            },
            Outcome::CommandList { commands } => write!(f, "You can use {}.", command_names(commands)),
            Outcome::CommandHelp { command, usages, blurb } => {
                write!(f, "{command}: {blurb} Usage: {}", usages.join(" | "))
            },
            Outcome::GameQuit => f.write_str("You give up the quest. Farewell."),

            Outcome::NameSet { name } => write!(f, "Your name is now {name}."),
            Outcome::ClassSet { class } => write!(f, "You are now a {class}."),
            Outcome::InvalidNamePart { part } => write!(
                f,
                "'{part}' isn't a valid name. Each part needs a capital letter followed by lowercase letters."
            ),
            Outcome::InvalidClass { class } => write!(
                f,
                "'{class}' isn't a class. Choose Warrior, Thief, Mage or Priest."
            ),
            Outcome::AbilityScoresRolled { scores } => {
                let rolled: Vec<String> = scores.iter().map(|(ability, score)| format!("{ability} {score}")).collect();
                write!(f, "Your ability scores: {}.", rolled.join(", "))
            },
        }
    }
}
