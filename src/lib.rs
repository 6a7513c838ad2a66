//! Toro Rocks - an asteroid-blasting arcade game on a toroidal field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Render sink boundary (polylines, circles, text)
//!
//! The playfield is a 1024x768 torus: anything leaving one edge re-enters
//! from the opposite edge. All gameplay advances in fixed 60 Hz frames and
//! velocities are expressed in pixels per frame.

pub mod render;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Fixed frame rate the simulation is stepped at
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock seconds per simulation frame
    pub const FRAME_SECS: f32 = 1.0 / TICK_RATE as f32;

    /// Playfield (torus) dimensions
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 20.0;
    /// Heading at game start and after every respawn (pointing up)
    pub const SHIP_START_ORIENTATION: f32 = -PI / 2.0;
    /// Radians of turn applied per frame a turn key is held
    pub const SHIP_TURN_SPEED: f32 = 0.02 * PI;
    /// Thrust added to velocity per frame (pixels/frame)
    pub const SHIP_THRUST: f32 = 0.3;
    /// Per-axis saturation bound on ship velocity (pixels/frame)
    pub const SHIP_MAX_SPEED: f32 = 5.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = SHIP_THRUST + 15.0;
    /// Frames a projectile stays alive without hitting anything
    pub const PROJECTILE_TTL: i32 = 45;
    pub const PROJECTILE_RADIUS: f32 = 2.5;
    /// Muzzle offset beyond the ship nose when firing
    pub const MUZZLE_OFFSET: f32 = 10.0;

    /// Asteroid defaults
    pub const INITIAL_ASTEROIDS: usize = 12;
    /// Upper bound on a freshly rolled asteroid speed (pixels/frame)
    pub const ASTEROID_SPEED: f32 = 1.0;
    /// Radius of a full-size, unsplit asteroid
    pub const ASTEROID_BASE_SIZE: f32 = 50.0;
    /// Vertices in an asteroid outline
    pub const ASTEROID_VERTICES: usize = 11;
    /// Per-vertex radius multiplier range (the silhouette jaggedness)
    pub const JAG_MIN: f32 = 0.6;
    pub const JAG_MAX: f32 = 1.2;

    /// Projectile hit tolerance against an asteroid edge. This is a thick
    /// line test, not point-in-polygon: a shot counts while still outside
    /// the silhouette if it passes within this many pixels of an edge.
    pub const HIT_RADIUS: f32 = 20.0;

    /// Lifecycle
    pub const START_LIVES: i32 = 3;
    /// Countdown value when the ship starts exploding
    pub const DESTROYED_TIME: f32 = 5.0;
    /// Amount the countdown drops per frame while exploding
    pub const DESTROYED_DECAY: f32 = 0.1;
}

/// Unit vector for a heading in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Wrap a position back onto the torus.
///
/// Each axis is reduced with floating-point modulo; a result at or below
/// zero lands on the far bound itself (1024 or 768), not on 0. Objects
/// leaving the left edge reappear flush against the right edge.
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    let mut x = pos.x % consts::FIELD_WIDTH;
    let mut y = pos.y % consts::FIELD_HEIGHT;
    if x <= 0.0 {
        x = consts::FIELD_WIDTH;
    }
    if y <= 0.0 {
        y = consts::FIELD_HEIGHT;
    }
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direction_cardinal_headings() {
        assert!((direction(0.0) - Vec2::X).length() < 1e-6);
        let up = direction(-std::f32::consts::FRAC_PI_2);
        assert!(up.x.abs() < 1e-6);
        assert!((up.y - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_in_bounds_is_identity() {
        let p = Vec2::new(512.0, 384.0);
        assert_eq!(wrap_position(p), p);
        let edge = Vec2::new(consts::FIELD_WIDTH, consts::FIELD_HEIGHT);
        assert_eq!(wrap_position(edge), edge);
    }

    #[test]
    fn test_wrap_left_exit_lands_on_right_bound() {
        // x == 0 maps to the bound, not to 0
        let p = wrap_position(Vec2::new(0.0, 100.0));
        assert_eq!(p.x, consts::FIELD_WIDTH);
        assert_eq!(p.y, 100.0);

        // any negative remainder also snaps to the bound itself
        let p = wrap_position(Vec2::new(-5.0, 100.0));
        assert_eq!(p.x, consts::FIELD_WIDTH);
    }

    #[test]
    fn test_wrap_top_exit_lands_on_bottom_bound() {
        let p = wrap_position(Vec2::new(100.0, -0.25));
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, consts::FIELD_HEIGHT);
    }

    #[test]
    fn test_wrap_past_right_edge() {
        let p = wrap_position(Vec2::new(consts::FIELD_WIDTH + 30.0, 50.0));
        assert_eq!(p.x, 30.0);
    }

    proptest! {
        #[test]
        fn prop_wrap_is_idempotent(x in -5000.0f32..5000.0, y in -5000.0f32..5000.0) {
            let once = wrap_position(Vec2::new(x, y));
            let twice = wrap_position(once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_wrap_lands_on_half_open_range(x in -5000.0f32..5000.0, y in -5000.0f32..5000.0) {
            let p = wrap_position(Vec2::new(x, y));
            prop_assert!(p.x > 0.0 && p.x <= consts::FIELD_WIDTH);
            prop_assert!(p.y > 0.0 && p.y <= consts::FIELD_HEIGHT);
        }
    }
}
