//! Generation constants
//!
//! Defaults for level size and room parameters, plus the fixed costs used
//! when routing corridors.

/// Default level dimensions
pub const DEFAULT_WIDTH: i32 = 64;
pub const DEFAULT_HEIGHT: i32 = 48;

/// Default number of rooms to place
pub const DEFAULT_ROOM_COUNT: usize = 12;

/// Default room size limits (width, height), inclusive
pub const DEFAULT_ROOM_MIN_SIZE: (i32, i32) = (3, 3);
pub const DEFAULT_ROOM_MAX_SIZE: (i32, i32) = (9, 7);

/// Total candidate rooms sampled before placement gives up
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Padding applied around a candidate room before the overlap test.
/// The buffer starts `ROOM_PAD_BEFORE` cells earlier on each axis and
/// extends `ROOM_PAD_AFTER` cells past the room's exclusive end.
pub const ROOM_PAD_BEFORE: i32 = 2;
pub const ROOM_PAD_AFTER: i32 = 1;

/// Probability that a non-tree triangulation edge is kept as a corridor
pub const EXTRA_EDGE_PROBABILITY: f64 = 0.125;

/// Corridor step costs by the type of the cell being entered
pub const COST_EMPTY: f64 = 1.0;
pub const COST_ROOM: f64 = 10.0;
pub const COST_HALLWAY: f64 = 15.0;
