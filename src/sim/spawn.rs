//! Procedural asteroid generation and splitting

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::direction;

use super::state::Asteroid;

/// Roll a fresh jaggedness profile, one multiplier per outline vertex
fn roll_jag<R: Rng>(rng: &mut R) -> [f32; ASTEROID_VERTICES] {
    let mut jag = [0.0; ASTEROID_VERTICES];
    for slot in jag.iter_mut() {
        *slot = rng.random_range(JAG_MIN..JAG_MAX);
    }
    jag
}

/// Build one asteroid of the given size at a position
fn spawn_at<R: Rng>(rng: &mut R, pos: Vec2, size: f32) -> Asteroid {
    let orientation = rng.random_range(0.0..std::f32::consts::TAU);
    let speed = rng.random_range(0.0..ASTEROID_SPEED);
    Asteroid {
        pos,
        vel: direction(orientation) * speed,
        size,
        orientation,
        jag: roll_jag(rng),
    }
}

/// Generate the initial asteroid field.
///
/// Positions are drawn uniformly over the playfield and resampled while the
/// draw exactly matches an already-placed asteroid. An exact f32 collision
/// is astronomically unlikely, but the resample loop keeps placement
/// well-defined when it happens.
pub fn generate_field<R: Rng>(rng: &mut R) -> Vec<Asteroid> {
    let mut asteroids = Vec::with_capacity(INITIAL_ASTEROIDS);
    let mut positions: Vec<Vec2> = Vec::with_capacity(INITIAL_ASTEROIDS);

    for _ in 0..INITIAL_ASTEROIDS {
        let mut pos = Vec2::new(
            rng.random_range(0.0..FIELD_WIDTH),
            rng.random_range(0.0..FIELD_HEIGHT),
        );
        while positions.contains(&pos) {
            pos = Vec2::new(
                rng.random_range(0.0..FIELD_WIDTH),
                rng.random_range(0.0..FIELD_HEIGHT),
            );
        }
        positions.push(pos);
        asteroids.push(spawn_at(rng, pos, ASTEROID_BASE_SIZE));
    }

    log::info!("generated field of {} asteroids", asteroids.len());
    asteroids
}

/// Split a destroyed asteroid into its children.
///
/// Full-size rocks break into two half-size rocks, half-size into two
/// quarter-size; quarter-size rocks just vanish. Children spawn at the
/// parent's position with fresh random heading, speed and jaggedness.
pub fn split<R: Rng>(rng: &mut R, destroyed: &Asteroid) -> Vec<Asteroid> {
    let child_size = if destroyed.size == ASTEROID_BASE_SIZE {
        ASTEROID_BASE_SIZE / 2.0
    } else if destroyed.size == ASTEROID_BASE_SIZE / 2.0 {
        ASTEROID_BASE_SIZE / 4.0
    } else {
        return Vec::new();
    };

    (0..2)
        .map(|_| spawn_at(rng, destroyed.pos, child_size))
        .collect()
}
