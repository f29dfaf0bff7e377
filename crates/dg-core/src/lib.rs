//! dg-core: Core dungeon layout generation
//!
//! Places non-overlapping rooms on a bounded grid, triangulates the room
//! centers (Bowyer-Watson), reduces the triangulation to a sparse graph
//! (minimum spanning tree plus a few random extra edges) and carves
//! corridors between the selected room pairs with A*.
//!
//! The crate does no I/O beyond optional config file loading and is
//! deterministic for a given seed.

pub mod delaunay;
pub mod dungeon;
pub mod geometry;
pub mod graph;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::{ConfigError, GenerationError, TriangulationError};
pub use rng::DungeonRng;

pub use delaunay::{Triangulation, triangulate};
pub use dungeon::{Dungeon, GeneratorConfig, generate};
