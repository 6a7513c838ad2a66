//! Collision queries over entity outlines
//!
//! The tricky part of the game: exact segment tests between the ship's kite
//! hull and procedurally irregular asteroid polygons, plus the thick-edge
//! proximity test projectiles use. Everything here is a pure query; the tick
//! decides what to do with the answers.
//!
//! Both scans walk an asteroid's ten connecting edges (vertex k to k+1) and
//! skip the closing edge from vertex 10 back to vertex 0. Rendering draws
//! that closing edge, collision does not; the mismatch is longstanding
//! behavior and is pinned by test rather than corrected.

use glam::Vec2;

use crate::consts::{ASTEROID_VERTICES, HIT_RADIUS};

use super::poly::{asteroid_vertices, ship_hull};
use super::state::{Asteroid, Projectile, Ship};

/// Exact segment/segment intersection test.
///
/// Solves the two parametric line equations; both parameters must land in
/// [0, 1]. Parallel and degenerate (zero-length) segments report no
/// intersection.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let da = a2 - a1;
    let db = b2 - b1;

    let denom = da.perp_dot(db);
    if denom == 0.0 {
        return false;
    }

    let ab = b1 - a1;
    let t = ab.perp_dot(db) / denom;
    let u = ab.perp_dot(da) / denom;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Distance from a point to a line segment (clamped projection).
///
/// A zero-length segment degrades to point distance.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-8 {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

/// The ten connecting edges of an asteroid outline (closing edge excluded)
fn connecting_edges(points: &[Vec2; ASTEROID_VERTICES]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    points.windows(2).map(|w| (w[0], w[1]))
}

/// Does the ship's hull cross any asteroid outline this frame?
///
/// Each of the hull's four edges is tested against each asteroid's ten
/// connecting edges; the first intersection anywhere decides the frame.
pub fn ship_hits_asteroids(ship: &Ship, asteroids: &[Asteroid]) -> bool {
    let hull = ship_hull(ship.pos, ship.size, ship.orientation);
    let hull_edges = [
        (hull[0], hull[1]),
        (hull[1], hull[2]),
        (hull[2], hull[3]),
        (hull[3], hull[0]),
    ];

    for asteroid in asteroids {
        let points =
            asteroid_vertices(asteroid.pos, asteroid.size, asteroid.orientation, &asteroid.jag);
        for (e1, e2) in connecting_edges(&points) {
            for &(h1, h2) in &hull_edges {
                if segments_intersect(h1, h2, e1, e2) {
                    return true;
                }
            }
        }
    }
    false
}

/// A projectile/asteroid hit found during a scan, by index into the live
/// collections at scan time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub projectile: usize,
    pub asteroid: usize,
}

/// Scan every projectile against every asteroid outline.
///
/// A projectile scores when it passes within [`HIT_RADIUS`] of any
/// connecting edge; the first asteroid hit claims the shot. Hits are
/// returned as index pairs so the caller can apply removals and splits
/// after the scan instead of mutating mid-iteration.
pub fn projectile_hits(projectiles: &[Projectile], asteroids: &[Asteroid]) -> Vec<Hit> {
    let mut hits = Vec::new();

    'shots: for (pi, projectile) in projectiles.iter().enumerate() {
        for (ai, asteroid) in asteroids.iter().enumerate() {
            let points = asteroid_vertices(
                asteroid.pos,
                asteroid.size,
                asteroid.orientation,
                &asteroid.jag,
            );
            for (e1, e2) in connecting_edges(&points) {
                if point_segment_distance(projectile.pos, e1, e2) <= HIT_RADIUS {
                    hits.push(Hit { projectile: pi, asteroid: ai });
                    continue 'shots;
                }
            }
        }
    }

    hits
}
