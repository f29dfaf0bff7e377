//! Bounded 2D grid container
//!
//! Row-major storage addressed by [`GridPos`]. Reads and writes outside the
//! bounds are rejected rather than wrapped or clamped.

use serde::{Deserialize, Serialize};

use super::rect::{GridPos, RoomRect};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Grid filled with `T::default()`. Negative sizes are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![T::default(); width as usize * height as usize],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> RoomRect {
        RoomRect::new(0, 0, self.width, self.height)
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        self.bounds().contains(pos)
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn get(&self, pos: GridPos) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut T> {
        self.index(pos).map(|i| &mut self.cells[i])
    }

    /// Write a cell; returns false (and writes nothing) out of bounds
    pub fn set(&mut self, pos: GridPos, value: T) -> bool {
        match self.get_mut(pos) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Cells of `rect` that lie inside the grid, row by row
    pub fn positions_within(&self, rect: &RoomRect) -> impl Iterator<Item = GridPos> + use<T> {
        let bounds = self.bounds();
        rect.positions().filter(move |&pos| bounds.contains(pos))
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl<T: PartialEq> Grid<T> {
    /// Number of cells equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|&cell| cell == value).count()
    }
}
