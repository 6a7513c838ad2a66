//! Outline geometry for the ship and asteroids
//!
//! Both the collision scans and the render path consume these generators, so
//! there is exactly one definition of every silhouette in the game.

use glam::Vec2;

use crate::consts::ASTEROID_VERTICES;
use crate::direction;

/// Phase offsets (in turns) for the 11 asteroid vertices.
///
/// Vertex 0 sits on the asteroid's own orientation; the rest advance from
/// one full turn up through 1.9 turns in 0.1-turn steps. The spacing is
/// deliberately non-uniform: vertices 0 and 1 land on the same angle with
/// different radii, which is what cuts the signature notch into every rock.
const VERTEX_PHASE_TURNS: [f32; ASTEROID_VERTICES] = [
    0.0, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9,
];

/// Build the 11-vertex outline of an asteroid.
///
/// Vertex k is `center + direction(orientation + phase_k) * size * jag[k]`.
/// The outline closes by connecting vertex 10 back to vertex 0.
pub fn asteroid_vertices(
    center: Vec2,
    size: f32,
    orientation: f32,
    jag: &[f32; ASTEROID_VERTICES],
) -> [Vec2; ASTEROID_VERTICES] {
    let mut points = [Vec2::ZERO; ASTEROID_VERTICES];
    for (k, point) in points.iter_mut().enumerate() {
        let phase = orientation + VERTEX_PHASE_TURNS[k] * std::f32::consts::TAU;
        *point = center + direction(phase) * size * jag[k];
    }
    points
}

/// Build the ship's 4-point kite hull.
///
/// Nose, starboard wing tip, aft center (the ship position itself), port
/// wing tip. Drawn and collided as the closed loop nose -> wing -> center
/// -> wing -> nose, which self-intersects on purpose.
pub fn ship_hull(pos: Vec2, size: f32, orientation: f32) -> [Vec2; 4] {
    let forward = direction(orientation) * size;
    let lateral = direction(orientation + std::f32::consts::FRAC_PI_2) * size;

    [
        pos + forward,
        pos - forward - lateral,
        pos,
        pos - forward + lateral,
    ]
}
