//! Integer grid positions and rectangles

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

/// A cell coordinate on the level grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another cell
    pub fn distance(&self, other: GridPos) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// The four orthogonal neighbors (no bounds check)
    pub const fn neighbors(&self) -> [GridPos; 4] {
        [
            GridPos::new(self.x - 1, self.y),
            GridPos::new(self.x + 1, self.y),
            GridPos::new(self.x, self.y - 1),
            GridPos::new(self.x, self.y + 1),
        ]
    }
}

/// Axis-aligned rectangle covering `x..x + width`, `y..y + height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RoomRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Minimum corner
    pub const fn min(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    /// Exclusive maximum corner
    pub const fn max(&self) -> GridPos {
        GridPos::new(self.x + self.width, self.y + self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if the rectangles share at least one cell
    pub const fn intersects(&self, other: &RoomRect) -> bool {
        !(self.x >= other.x + other.width
            || self.x + self.width <= other.x
            || self.y >= other.y + other.height
            || self.y + self.height <= other.y)
    }

    /// Grow by `before` cells on the low side and `after` cells past the
    /// high side of each axis
    pub const fn expand(&self, before: i32, after: i32) -> RoomRect {
        RoomRect::new(
            self.x - before,
            self.y - before,
            self.width + before + after,
            self.height + before + after,
        )
    }

    /// Check if a cell is inside
    pub const fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }

    /// Geometric center; half-cell for odd sizes
    pub fn center(&self) -> Point2 {
        Point2::new(
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// All cells, row by row
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + use<> {
        let RoomRect {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| GridPos::new(px, py)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_half_open() {
        let a = RoomRect::new(0, 0, 4, 4);
        assert!(a.intersects(&RoomRect::new(3, 3, 2, 2)));
        // Touching edges share no cell
        assert!(!a.intersects(&RoomRect::new(4, 0, 2, 2)));
        assert!(!a.intersects(&RoomRect::new(0, 4, 2, 2)));
    }

    #[test]
    fn test_expand_buffer() {
        let buffer = RoomRect::new(10, 10, 3, 4).expand(2, 1);
        assert_eq!(buffer, RoomRect::new(8, 8, 6, 7));
        assert_eq!(buffer.max(), GridPos::new(14, 15));
    }

    #[test]
    fn test_center_and_contains() {
        let r = RoomRect::new(2, 4, 3, 2);
        assert_eq!(r.center(), Point2::new(3.5, 5.0));
        assert!(r.contains(GridPos::new(4, 5)));
        assert!(!r.contains(GridPos::new(5, 5)));
    }

    #[test]
    fn test_positions() {
        let r = RoomRect::new(1, 1, 2, 2);
        let cells: Vec<_> = r.positions().collect();
        assert_eq!(
            cells,
            vec![
                GridPos::new(1, 1),
                GridPos::new(2, 1),
                GridPos::new(1, 2),
                GridPos::new(2, 2),
            ]
        );
        assert_eq!(RoomRect::new(0, 0, 0, 5).positions().count(), 0);
    }

    #[test]
    fn test_grid_distance() {
        assert_eq!(GridPos::new(0, 0).distance(GridPos::new(3, 4)), 5.0);
    }
}
