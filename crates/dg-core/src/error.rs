//! Error types for triangulation and level generation

use thiserror::Error;

use crate::delaunay::Violation;

/// Failures of the triangulation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangulationError {
    #[error("cannot triangulate an empty vertex set")]
    EmptyInput,

    #[error("vertices {first} and {second} coincide")]
    CoincidentVertices { first: usize, second: usize },

    /// A circumcenter came out non-finite (collinear or coincident corners).
    /// Indices address the working vertex list: inputs first, then the
    /// three super-triangle vertices.
    #[error("degenerate triangle {triangle:?}: circumcenter is not finite")]
    DegenerateGeometry { triangle: [usize; 3] },

    /// The region replaced by a new vertex could not be made star-shaped
    /// around it, so fanning it would overlap existing triangles.
    #[error("no valid cavity around vertex {vertex}")]
    InvalidCavity { vertex: usize },

    /// The finished triangles overlap or leave a vertex out
    #[error("inconsistent triangulation: {0}")]
    InvalidStructure(Violation),
}

/// Invalid generator configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("level dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    #[error("invalid room size range {min:?}..={max:?} for a {width}x{height} level")]
    InvalidRoomSize {
        min: (i32, i32),
        max: (i32, i32),
        width: i32,
        height: i32,
    },

    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("could not read config: {0}")]
    Io(String),

    #[error("could not parse config: {0}")]
    Parse(String),
}

/// Failures of the generation pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("placed only {placed} of {requested} rooms after {attempts} attempts")]
    RoomPlacementFailed {
        placed: usize,
        requested: usize,
        attempts: u32,
    },

    #[error("triangulation failed: {0}")]
    Triangulation(#[from] TriangulationError),
}
