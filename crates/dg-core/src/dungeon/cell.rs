//! Level cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{COST_EMPTY, COST_HALLWAY, COST_ROOM};

/// What occupies a grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    #[default]
    None = 0,
    Room = 1,
    Hallway = 2,
}

impl CellType {
    /// Cost of stepping into a cell of this type while routing corridors
    pub const fn step_cost(&self) -> f64 {
        match self {
            CellType::None => COST_EMPTY,
            CellType::Room => COST_ROOM,
            CellType::Hallway => COST_HALLWAY,
        }
    }

    /// Get the display character for this cell type
    pub const fn symbol(&self) -> char {
        match self {
            CellType::None => ' ',
            CellType::Room => '.',
            CellType::Hallway => '#',
        }
    }
}
