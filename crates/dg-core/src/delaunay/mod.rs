//! Delaunay triangulation of room centers
//!
//! `bowyer_watson` builds the triangulation; `validation` checks a finished one.

mod bowyer_watson;
pub mod validation;

pub use bowyer_watson::{SUPER_TRIANGLE_SCALE, Triangulation, triangulate};
pub use validation::{Violation, find_structural_fault, find_violation, is_delaunay};
