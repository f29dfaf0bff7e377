//! Level generation pipeline
//!
//! Phases run in a fixed order and share one random stream:
//! 1. Place rooms and stamp them into the grid
//! 2. Triangulate the room centers
//! 3. Select corridor edges (spanning tree plus random extras)
//! 4. Route each corridor with A* and carve it as hallway
//!
//! Each phase is a plain function so it can be driven and tested on its own.

use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use super::cell::CellType;
use super::grid::Grid;
use super::pathfind::{Path, PathCost, find_path};
use super::placement::place_rooms;
use super::rect::GridPos;
use super::room::{Room, RoomId};
use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_ROOM_COUNT, DEFAULT_ROOM_MAX_SIZE, DEFAULT_ROOM_MIN_SIZE,
    DEFAULT_WIDTH, EXTRA_EDGE_PROBABILITY, MAX_PLACEMENT_ATTEMPTS,
};
use crate::delaunay::{Triangulation, triangulate};
use crate::error::{ConfigError, GenerationError};
use crate::geometry::{Edge, Vertex, VertexId};
use crate::graph::{Selection, chain_edges, select_edges, weigh_edges};
use crate::rng::DungeonRng;

/// Generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Level width in cells
    pub width: i32,
    /// Level height in cells
    pub height: i32,
    /// Number of rooms to place
    pub room_count: usize,
    /// Smallest room (width, height), inclusive
    pub room_min_size: (i32, i32),
    /// Largest room (width, height), inclusive
    pub room_max_size: (i32, i32),
    pub seed: u64,
    /// Candidate rooms drawn before placement gives up
    pub max_placement_attempts: u32,
    /// Chance that a non-tree triangulation edge becomes a corridor
    pub extra_edge_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_count: DEFAULT_ROOM_COUNT,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
            seed: 0,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            extra_edge_probability: EXTRA_EDGE_PROBABILITY,
        }
    }
}

impl GeneratorConfig {
    /// Check that the parameters describe a level rooms can fit in
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }

        let (min_w, min_h) = self.room_min_size;
        let (max_w, max_h) = self.room_max_size;
        // A room's exclusive max corner must stay inside the level
        if min_w < 1
            || min_h < 1
            || min_w > max_w
            || min_h > max_h
            || max_w >= self.width
            || max_h >= self.height
        {
            return Err(ConfigError::InvalidRoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
                width: self.width,
                height: self.height,
            });
        }

        if !(0.0..=1.0).contains(&self.extra_edge_probability) {
            return Err(ConfigError::InvalidProbability(self.extra_edge_probability));
        }
        Ok(())
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a JSON configuration file
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }
}

/// A carved corridor between two rooms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub from: RoomId,
    pub to: RoomId,
    pub path: Vec<GridPos>,
    pub cost: f64,
}

/// A generated level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub config: GeneratorConfig,
    pub grid: Grid<CellType>,
    pub rooms: Vec<Room>,
    /// Triangulation edges between rooms (vertex ids are room indices)
    pub triangulation_edges: Vec<Edge>,
    /// Edges chosen for corridors: tree first, then extras
    pub selected_edges: Vec<Edge>,
    pub corridors: Vec<Corridor>,
    /// Selected edges no path was found for
    pub unrouted: Vec<Edge>,
}

impl Dungeon {
    /// Text rendering, one line per row
    pub fn render(&self) -> String {
        let capacity = (self.grid.width() as usize + 1) * self.grid.height() as usize;
        let mut out = String::with_capacity(capacity);
        for row in self.grid.rows() {
            out.extend(row.iter().map(CellType::symbol));
            out.push('\n');
        }
        out
    }
}

/// Generate a level from `config`, seeding the stream with `config.seed`
pub fn generate(config: &GeneratorConfig) -> Result<Dungeon, GenerationError> {
    let mut rng = DungeonRng::new(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Generate a level drawing from a caller-supplied stream
pub fn generate_with_rng(
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Result<Dungeon, GenerationError> {
    config.validate()?;
    log::debug!("generating with stream seed {}", rng.seed());

    let mut grid = Grid::new(config.width, config.height);
    let rooms = place_rooms(config, rng)?;
    stamp_rooms(&mut grid, &rooms);

    let triangulation = triangulate_rooms(&rooms)?;
    let selection = select_corridors(&triangulation, rng, config.extra_edge_probability);
    let selected_edges: Vec<Edge> = selection.edges().copied().collect();
    let (corridors, unrouted) = carve_corridors(&mut grid, &rooms, &selected_edges);

    log::info!(
        "generated {}x{} level: {} rooms, {} corridors, {} unrouted",
        config.width,
        config.height,
        rooms.len(),
        corridors.len(),
        unrouted.len()
    );

    Ok(Dungeon {
        config: config.clone(),
        grid,
        rooms,
        triangulation_edges: triangulation.edges().to_vec(),
        selected_edges,
        corridors,
        unrouted,
    })
}

/// Mark every room cell as `Room`
pub fn stamp_rooms(grid: &mut Grid<CellType>, rooms: &[Room]) {
    for room in rooms {
        for pos in grid.positions_within(&room.bounds) {
            grid.set(pos, CellType::Room);
        }
    }
}

/// Triangulate room centers; vertex `i` carries room `i`'s id
pub fn triangulate_rooms(rooms: &[Room]) -> Result<Triangulation<RoomId>, GenerationError> {
    if rooms.is_empty() {
        return Ok(Triangulation::default());
    }
    let vertices = rooms
        .iter()
        .map(|room| Vertex::new(room.center(), room.id))
        .collect();
    Ok(triangulate(vertices)?)
}

/// Pick corridor edges from the triangulation.
///
/// Without triangulation edges (fewer than three rooms, or collinear
/// centers) the rooms are chained in placement order instead; the chain is
/// its own spanning tree and no random draw is made.
pub fn select_corridors(
    triangulation: &Triangulation<RoomId>,
    rng: &mut DungeonRng,
    probability: f64,
) -> Selection {
    let position = |id: VertexId| triangulation.vertices()[id.index()].position;

    if triangulation.edges().is_empty() {
        let chain = chain_edges(triangulation.vertices().len());
        if !chain.is_empty() {
            log::debug!("no triangulation edges, chaining {} rooms", chain.len() + 1);
        }
        return Selection {
            tree: chain,
            extras: Vec::new(),
        };
    }

    let weighted = weigh_edges(triangulation.edges(), position);
    select_edges(&weighted, rng, probability)
}

/// Step cost for corridor routing: entering a room costs 10, open ground 1,
/// an existing hallway 15.
pub fn corridor_cost(grid: &Grid<CellType>, to: GridPos) -> PathCost {
    match grid.get(to) {
        Some(cell) => PathCost::open(cell.step_cost()),
        None => PathCost::blocked(),
    }
}

/// Route and carve one corridor per edge, in order.
///
/// Later corridors see the hallways carved by earlier ones. Edges with no
/// path are returned separately and leave the grid untouched.
pub fn carve_corridors(
    grid: &mut Grid<CellType>,
    rooms: &[Room],
    edges: &[Edge],
) -> (Vec<Corridor>, Vec<Edge>) {
    let mut corridors = Vec::new();
    let mut unrouted = Vec::new();

    for &edge in edges {
        let (Some(from), Some(to)) = (rooms.get(edge.u.index()), rooms.get(edge.v.index())) else {
            log::warn!("edge {:?} references a missing room", edge);
            unrouted.push(edge);
            continue;
        };

        let found = find_path(grid.width(), grid.height(), from.anchor(), to.anchor(), |_, next| {
            corridor_cost(grid, next)
        });
        let Some(Path { cells, cost }) = found else {
            log::warn!("no corridor between rooms {} and {}", from.id.0, to.id.0);
            unrouted.push(edge);
            continue;
        };

        for &pos in &cells {
            grid.set(pos, CellType::Hallway);
        }
        corridors.push(Corridor {
            from: from.id,
            to: to.id,
            path: cells,
            cost,
        });
    }

    (corridors, unrouted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::RoomRect;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extra_edge_probability, 0.125);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = GeneratorConfig {
            width: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidDimension { .. })));

        let bad = GeneratorConfig {
            room_min_size: (5, 5),
            room_max_size: (4, 8),
            ..GeneratorConfig::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidRoomSize { .. })));

        let bad = GeneratorConfig {
            width: 9,
            ..GeneratorConfig::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidRoomSize { .. })));

        let bad = GeneratorConfig {
            extra_edge_probability: 1.5,
            ..GeneratorConfig::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::InvalidProbability(1.5)));

        let bad = GeneratorConfig {
            extra_edge_probability: f64::NAN,
            ..GeneratorConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GeneratorConfig::from_json(r#"{"seed": 77, "room_count": 5}"#).unwrap();
        assert_eq!(config.seed, 77);
        assert_eq!(config.room_count, 5);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.room_max_size, DEFAULT_ROOM_MAX_SIZE);

        assert!(matches!(
            GeneratorConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load("/nonexistent/dungen.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_stamp_rooms() {
        let mut grid = Grid::new(10, 10);
        let rooms = [Room::new(RoomId(0), RoomRect::new(1, 1, 3, 2))];
        stamp_rooms(&mut grid, &rooms);
        assert_eq!(grid.count(&CellType::Room), 6);
        assert_eq!(grid.get(GridPos::new(3, 2)), Some(&CellType::Room));
    }

    #[test]
    fn test_two_rooms_fall_back_to_chain() {
        let rooms = [
            Room::new(RoomId(0), RoomRect::new(1, 1, 3, 3)),
            Room::new(RoomId(1), RoomRect::new(10, 1, 3, 3)),
        ];
        let triangulation = triangulate_rooms(&rooms).unwrap();
        assert!(triangulation.edges().is_empty());

        let mut rng = DungeonRng::new(0);
        let selection = select_corridors(&triangulation, &mut rng, 0.125);
        assert_eq!(selection.tree, vec![Edge::new(VertexId(0), VertexId(1))]);
        assert!(selection.extras.is_empty());
    }

    #[test]
    fn test_carve_single_corridor() {
        let mut grid = Grid::new(20, 8);
        let rooms = [
            Room::new(RoomId(0), RoomRect::new(1, 1, 3, 3)),
            Room::new(RoomId(1), RoomRect::new(12, 1, 3, 3)),
        ];
        stamp_rooms(&mut grid, &rooms);
        let edges = [Edge::new(VertexId(0), VertexId(1))];

        let (corridors, unrouted) = carve_corridors(&mut grid, &rooms, &edges);
        assert!(unrouted.is_empty());
        assert_eq!(corridors.len(), 1);

        let corridor = &corridors[0];
        assert_eq!(corridor.path.first(), Some(&GridPos::new(1, 1)));
        assert_eq!(corridor.path.last(), Some(&GridPos::new(12, 1)));
        for pos in &corridor.path {
            assert_eq!(grid.get(*pos), Some(&CellType::Hallway));
        }
    }

    #[test]
    fn test_corridor_cost_by_cell() {
        let mut grid = Grid::new(3, 1);
        grid.set(GridPos::new(1, 0), CellType::Room);
        grid.set(GridPos::new(2, 0), CellType::Hallway);
        assert_eq!(corridor_cost(&grid, GridPos::new(0, 0)).cost, 1.0);
        assert_eq!(corridor_cost(&grid, GridPos::new(1, 0)).cost, 10.0);
        assert_eq!(corridor_cost(&grid, GridPos::new(2, 0)).cost, 15.0);
        assert!(!corridor_cost(&grid, GridPos::new(3, 0)).traversable);
    }

    #[test]
    fn test_generate_small_level() {
        let config = GeneratorConfig {
            seed: 5,
            room_count: 6,
            ..GeneratorConfig::default()
        };
        let dungeon = generate(&config).unwrap();
        assert_eq!(dungeon.rooms.len(), 6);
        assert!(dungeon.grid.count(&CellType::Room) > 0);
        assert_eq!(
            dungeon.corridors.len() + dungeon.unrouted.len(),
            dungeon.selected_edges.len()
        );
        assert!(dungeon.selected_edges.len() >= 5);
        assert_eq!(dungeon.render().lines().count(), config.height as usize);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = GeneratorConfig {
            height: -3,
            ..GeneratorConfig::default()
        };
        assert!(matches!(generate(&config), Err(GenerationError::Config(_))));
    }
}
