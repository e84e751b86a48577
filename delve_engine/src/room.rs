//! Room definitions and the room graph.
//!
//! Rooms live in an arena and refer to each other by index. The cursor marks the
//! room the character currently occupies.

use std::collections::BTreeMap;

use delve_data::{Compass, Id};
use log::info;

use crate::container::Container;
use crate::creature::Creature;
use crate::door::Door;
use crate::item::{ItemsState, Stacks};
use crate::outcome::{RoomSnapshot, StackLine};

pub type RoomIndex = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub doors: BTreeMap<Compass, Door>,
    /// A chest, or the corpse left by a slain creature.
    pub container: Option<Container>,
    pub creature: Option<Creature>,
    pub floor: Stacks,
}

impl Room {
    /// Full description used when the character enters.
    pub fn snapshot(&self, items: &ItemsState) -> RoomSnapshot {
        RoomSnapshot {
            title: self.title.clone(),
            description: self.description.clone(),
            exits: self.doors.values().map(Door::full_title).collect(),
            container: self.container.as_ref().map(|c| c.title.clone()),
            creature: self.creature.as_ref().map(|c| c.title.clone()),
            floor: stack_lines(&self.floor, items),
        }
    }

    /// Replace a slain creature with its corpse.
    pub fn creature_to_corpse(&mut self) {
        if let Some(creature) = self.creature.take() {
            self.container = Some(creature.convert_to_corpse());
        }
    }
}

/// Titles and quantities of every stack, in id order.
pub fn stack_lines(stacks: &Stacks, items: &ItemsState) -> Vec<StackLine> {
    stacks
        .iter()
        .map(|(id, quantity)| StackLine {
            title: items.title_of(id).to_string(),
            quantity: *quantity,
            equipped: None,
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct RoomsState {
    rooms: Vec<Room>,
    cursor: RoomIndex,
}

impl RoomsState {
    pub fn new(rooms: Vec<Room>, cursor: RoomIndex) -> Self {
        Self { rooms, cursor }
    }

    pub fn cursor(&self) -> RoomIndex {
        self.cursor
    }

    /// The occupied room. A `Session` only accepts states whose cursor
    /// points into the arena, so this never indexes out of bounds in play.
    pub fn current(&self) -> &Room {
        &self.rooms[self.cursor]
    }

    pub fn current_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.cursor]
    }

    pub fn get(&self, index: RoomIndex) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Move the cursor through the current room's door in `direction`.
    /// Returns the new cursor, or `None` if no such door leads anywhere.
    pub fn move_through(&mut self, direction: Compass) -> Option<RoomIndex> {
        let next = self.current().doors.get(&direction)?.leads_to?;
        if next >= self.rooms.len() {
            return None;
        }
        info!(
            "moved from '{}' to '{}' via {direction} door",
            self.current().id,
            self.rooms[next].id
        );
        self.cursor = next;
        Some(next)
    }

    /// The other room's view of the current room's door in `direction`.
    /// `None` for the exit, which has no other side.
    pub fn opposite_door(&self, direction: Compass) -> Option<&Door> {
        let door = self.current().doors.get(&direction)?;
        let other = self.rooms.get(door.leads_to?)?;
        other.doors.get(&direction.opposite())
    }

    fn opposite_door_mut(&mut self, direction: Compass) -> Option<&mut Door> {
        let door = self.current().doors.get(&direction)?;
        let other = door.leads_to?;
        self.rooms.get_mut(other)?.doors.get_mut(&direction.opposite())
    }

    /// Apply `change` to both views of the current room's door in `direction`.
    pub fn update_door(&mut self, direction: Compass, change: impl Fn(&mut Door)) {
        if let Some(door) = self.current_mut().doors.get_mut(&direction) {
            change(door);
        }
        if let Some(opposite) = self.opposite_door_mut(direction) {
            change(opposite);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door::Portal;

    fn door(direction: Compass, leads_to: Option<RoomIndex>) -> Door {
        Door {
            direction,
            portal: Portal::Door {
                material: "oak".into(),
            },
            description: String::new(),
            locked: false,
            closed: true,
            leads_to,
            is_exit: leads_to.is_none(),
        }
    }

    fn room(id: &str, doors: Vec<Door>) -> Room {
        Room {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            doors: doors.into_iter().map(|d| (d.direction, d)).collect(),
            container: None,
            creature: None,
            floor: Stacks::new(),
        }
    }

    fn two_rooms() -> RoomsState {
        RoomsState::new(
            vec![
                room("a", vec![door(Compass::North, Some(1)), door(Compass::West, None)]),
                room("b", vec![door(Compass::South, Some(0))]),
            ],
            0,
        )
    }

    #[test]
    fn update_door_syncs_both_views() {
        let mut rooms = two_rooms();
        rooms.update_door(Compass::North, |d| d.locked = true);
        assert!(rooms.current().doors[&Compass::North].locked);
        assert!(rooms.opposite_door(Compass::North).is_some_and(|d| d.locked));
    }

    #[test]
    fn exit_has_no_opposite() {
        let mut rooms = two_rooms();
        assert!(rooms.opposite_door(Compass::West).is_none());
        rooms.update_door(Compass::West, |d| d.locked = true);
        assert!(rooms.current().doors[&Compass::West].locked);
    }

    #[test]
    fn move_through_follows_doors() {
        let mut rooms = two_rooms();
        assert_eq!(rooms.move_through(Compass::North), Some(1));
        assert_eq!(rooms.current().id, "b");
        assert_eq!(rooms.move_through(Compass::East), None);
        assert_eq!(rooms.move_through(Compass::South), Some(0));
    }
}
