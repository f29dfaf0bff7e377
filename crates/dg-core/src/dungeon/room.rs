//! Placed rooms

use serde::{Deserialize, Serialize};

use super::rect::{GridPos, RoomRect};
use crate::geometry::Point2;

/// Index of a room in placement order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RoomId(pub usize);

/// A rectangular room on the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub bounds: RoomRect,
}

impl Room {
    pub const fn new(id: RoomId, bounds: RoomRect) -> Self {
        Self { id, bounds }
    }

    /// Geometric center, used as the room's triangulation vertex
    pub fn center(&self) -> Point2 {
        self.bounds.center()
    }

    /// Cell corridors start and end at (the minimum corner)
    pub const fn anchor(&self) -> GridPos {
        self.bounds.min()
    }
}
