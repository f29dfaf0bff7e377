//! Room placement by bounded rejection sampling
//!
//! Candidates are drawn one after another; a candidate is kept when it stays
//! inside the level and its padded buffer misses every room kept so far.
//! The number of candidates is capped so an overcrowded configuration fails
//! instead of looping forever.

use super::generation::GeneratorConfig;
use super::rect::RoomRect;
use super::room::{Room, RoomId};
use crate::consts::{ROOM_PAD_AFTER, ROOM_PAD_BEFORE};
use crate::error::GenerationError;
use crate::rng::DungeonRng;

/// Draw one candidate rectangle.
///
/// Draw order is fixed: x, y, width, height.
pub fn sample_room(config: &GeneratorConfig, rng: &mut DungeonRng) -> RoomRect {
    let x = rng.range(0, config.width);
    let y = rng.range(0, config.height);
    let (min_w, min_h) = config.room_min_size;
    let (max_w, max_h) = config.room_max_size;
    let width = rng.range_inclusive(min_w, max_w);
    let height = rng.range_inclusive(min_h, max_h);
    RoomRect::new(x, y, width, height)
}

/// Check a candidate against the level bounds and the rooms already placed
pub fn fits(candidate: &RoomRect, placed: &[Room], width: i32, height: i32) -> bool {
    let min = candidate.min();
    let max = candidate.max();
    if min.x < 0 || min.y < 0 || max.x >= width || max.y >= height {
        return false;
    }

    let buffer = candidate.expand(ROOM_PAD_BEFORE, ROOM_PAD_AFTER);
    !placed.iter().any(|room| room.bounds.intersects(&buffer))
}

/// Place `config.room_count` rooms.
///
/// Rooms are numbered in acceptance order. Fails with
/// [`GenerationError::RoomPlacementFailed`] once
/// `config.max_placement_attempts` candidates have been drawn without
/// reaching the target.
pub fn place_rooms(
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Result<Vec<Room>, GenerationError> {
    let mut rooms: Vec<Room> = Vec::with_capacity(config.room_count);
    let mut attempts = 0u32;

    while rooms.len() < config.room_count {
        if attempts >= config.max_placement_attempts {
            log::warn!(
                "room placement gave up: {} of {} rooms after {} attempts",
                rooms.len(),
                config.room_count,
                attempts
            );
            return Err(GenerationError::RoomPlacementFailed {
                placed: rooms.len(),
                requested: config.room_count,
                attempts,
            });
        }
        attempts += 1;

        let candidate = sample_room(config, rng);
        if fits(&candidate, &rooms, config.width, config.height) {
            rooms.push(Room::new(RoomId(rooms.len()), candidate));
        }
    }

    log::info!("placed {} rooms in {} attempts", rooms.len(), attempts);
    Ok(rooms)
}
