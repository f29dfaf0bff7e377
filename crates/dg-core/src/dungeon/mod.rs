//! Dungeon level model and generation
//!
//! - `cell`, `grid`, `rect`, `room`: the level data model
//! - `placement`: rejection-sampled room placement
//! - `pathfind`: A* corridor routing
//! - `generation`: the end-to-end pipeline

mod cell;
pub mod generation;
mod grid;
pub mod pathfind;
pub mod placement;
mod rect;
mod room;

pub use cell::CellType;
pub use generation::{Corridor, Dungeon, GeneratorConfig, generate, generate_with_rng};
pub use grid::Grid;
pub use pathfind::{Path, PathCost, find_path};
pub use placement::place_rooms;
pub use rect::{GridPos, RoomRect};
pub use room::{Room, RoomId};
