//! Indexed room collection.
//!
//! # Responsibility
//! - Hold the rooms of one estimate keyed by stable `RoomId`.
//! - Replace rooms by ID instead of rebuilding the whole list.
//!
//! # Invariants
//! - No two rooms share an ID.
//! - Iteration follows insertion order.
//! - Rooms are only ever added or replaced, never removed.

use crate::model::room::{Room, RoomId};
use crate::pricing::PriceTable;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Roster insert/update errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    DuplicateRoom(RoomId),
    RoomNotFound(RoomId),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRoom(id) => write!(f, "room already exists: {id}"),
            Self::RoomNotFound(id) => write!(f, "room not found: {id}"),
        }
    }
}

impl Error for RosterError {}

/// Rooms of one estimate session.
#[derive(Debug, Clone, Default)]
pub struct RoomRoster {
    order: Vec<RoomId>,
    rooms: HashMap<RoomId, Room>,
}

impl RoomRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a default room and returns its new ID.
    pub fn add_default(&mut self) -> RoomId {
        let room = Room::new();
        let id = room.id;
        self.order.push(id);
        self.rooms.insert(id, room);
        id
    }

    /// Appends a caller-built room.
    pub fn insert(&mut self, room: Room) -> Result<RoomId, RosterError> {
        if self.contains(room.id) {
            return Err(RosterError::DuplicateRoom(room.id));
        }
        let id = room.id;
        self.order.push(id);
        self.rooms.insert(id, room);
        Ok(id)
    }

    /// Replaces the stored room with the same ID.
    pub fn update(&mut self, room: Room) -> Result<(), RosterError> {
        match self.rooms.get_mut(&room.id) {
            Some(slot) => {
                *slot = room;
                Ok(())
            }
            None => Err(RosterError::RoomNotFound(room.id)),
        }
    }

    /// Returns one room by ID.
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Number of rooms in the estimate.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates rooms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> + '_ {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    pub fn to_vec(&self) -> Vec<Room> {
        self.iter().cloned().collect()
    }

    /// Running total of all rooms under `table`.
    pub fn total(&self, table: &PriceTable) -> f64 {
        table.total(self.iter())
    }
}
