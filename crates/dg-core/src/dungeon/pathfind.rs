//! A* corridor routing on the level grid
//!
//! 4-connected moves, step costs supplied by the caller, straight-line
//! distance to the goal as heuristic. The frontier breaks ties on `f` by
//! preferring the lower heuristic, then the earlier push, so equal inputs
//! always yield the same path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use super::rect::GridPos;

/// Cost of one step, as reported by the caller's cost function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCost {
    pub cost: f64,
    pub traversable: bool,
}

impl PathCost {
    pub const fn open(cost: f64) -> Self {
        Self {
            cost,
            traversable: true,
        }
    }

    pub const fn blocked() -> Self {
        Self {
            cost: 0.0,
            traversable: false,
        }
    }
}

/// A route from start to goal, both inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub cells: Vec<GridPos>,
    /// Sum of the step costs along the route
    pub cost: f64,
}

impl Path {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct AStarNode {
    pos: GridPos,
    g_cost: f64,
    h_cost: f64,
    f_cost: f64,
    seq: u64,
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.h_cost.total_cmp(&self.h_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AStarNode {}

/// Straight-line distance heuristic
fn heuristic(from: GridPos, to: GridPos) -> f64 {
    from.distance(to)
}

fn reconstruct_path(came_from: &[Option<GridPos>], width: i32, end: GridPos) -> Vec<GridPos> {
    let index = |p: GridPos| p.y as usize * width as usize + p.x as usize;
    let mut path = vec![end];
    let mut current = end;

    while let Some(prev) = came_from[index(current)] {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}

/// Find the cheapest path from `start` to `goal` on a `width` x `height` grid.
///
/// `step_cost(from, to)` prices the move into `to`; non-traversable steps are
/// never taken. Returns `None` when either endpoint is off the grid or the
/// goal cannot be reached.
pub fn find_path<F>(
    width: i32,
    height: i32,
    start: GridPos,
    goal: GridPos,
    mut step_cost: F,
) -> Option<Path>
where
    F: FnMut(GridPos, GridPos) -> PathCost,
{
    let in_bounds = |p: GridPos| p.x >= 0 && p.y >= 0 && p.x < width && p.y < height;
    if !in_bounds(start) || !in_bounds(goal) {
        return None;
    }
    if start == goal {
        return Some(Path {
            cells: vec![start],
            cost: 0.0,
        });
    }

    let size = width as usize * height as usize;
    let index = |p: GridPos| p.y as usize * width as usize + p.x as usize;

    let mut g_scores = vec![f64::INFINITY; size];
    let mut came_from: Vec<Option<GridPos>> = vec![None; size];
    let mut closed = vec![false; size];
    let mut open_set = BinaryHeap::new();
    let mut seq = 0u64;

    let h = heuristic(start, goal);
    g_scores[index(start)] = 0.0;
    open_set.push(AStarNode {
        pos: start,
        g_cost: 0.0,
        h_cost: h,
        f_cost: h,
        seq,
    });

    while let Some(current) = open_set.pop() {
        let ci = index(current.pos);
        if closed[ci] {
            continue;
        }
        if current.pos == goal {
            return Some(Path {
                cells: reconstruct_path(&came_from, width, goal),
                cost: current.g_cost,
            });
        }
        closed[ci] = true;

        for next in current.pos.neighbors() {
            if !in_bounds(next) {
                continue;
            }
            let ni = index(next);
            if closed[ni] {
                continue;
            }

            let step = step_cost(current.pos, next);
            if !step.traversable {
                continue;
            }

            let new_g = current.g_cost + step.cost;
            if new_g < g_scores[ni] {
                g_scores[ni] = new_g;
                came_from[ni] = Some(current.pos);
                let h_cost = heuristic(next, goal);
                seq += 1;
                open_set.push(AStarNode {
                    pos: next,
                    g_cost: new_g,
                    h_cost,
                    f_cost: new_g + h_cost,
                    seq,
                });
            }
        }
    }

    None
}
