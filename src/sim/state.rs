//! Game state and core simulation types
//!
//! Everything that must survive a snapshot (and everything determinism
//! depends on, including the RNG) lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::direction;

use super::spawn::generate_field;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship under player control
    Playing,
    /// Ship hit a rock; input suppressed while the respawn countdown runs
    Exploding,
    /// Out of lives. Terminal: only the asteroids keep drifting.
    GameOver,
}

/// A fired projectile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames of life remaining; removed once this drops below 1
    pub ttl: i32,
    pub radius: f32,
}

/// An asteroid. The jaggedness profile is fixed at creation and never
/// mutated; splitting spawns fresh children instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Base outline radius (50 full, 25 half, 12.5 quarter)
    pub size: f32,
    pub orientation: f32,
    /// Per-vertex radius multipliers, each in [0.6, 1.2)
    pub jag: [f32; ASTEROID_VERTICES],
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in radians. Confined to (-2pi, 2pi): crossing either bound
    /// resets it to exactly 0.0 rather than wrapping modulo.
    pub orientation: f32,
    pub size: f32,
    /// Thrust per frame while a thrust key is held
    pub speed: f32,
    pub vel: Vec2,
    /// Shots in flight, owned by the ship
    pub projectiles: Vec<Projectile>,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            orientation: SHIP_START_ORIENTATION,
            size: SHIP_SIZE,
            speed: SHIP_THRUST,
            vel: Vec2::ZERO,
            projectiles: Vec::new(),
        }
    }
}

impl Ship {
    /// Turn by `delta` radians, resetting to 0.0 on a +-2pi overflow
    pub fn turn(&mut self, delta: f32) {
        let next = self.orientation + delta;
        if next >= std::f32::consts::TAU || next <= -std::f32::consts::TAU {
            self.orientation = 0.0;
        } else {
            self.orientation = next;
        }
    }

    /// Add thrust along the current heading (negative for reverse)
    pub fn thrust(&mut self, amount: f32) {
        self.vel += direction(self.orientation) * amount;
    }

    /// Fire a projectile from just past the nose.
    ///
    /// The shot inherits the ship's velocity plus the muzzle velocity along
    /// the heading, so strafing shots drift with the ship.
    pub fn shoot(&mut self) {
        let heading = direction(self.orientation);
        let projectile = Projectile {
            pos: self.pos + heading * (self.size + MUZZLE_OFFSET),
            vel: self.vel + heading * (PROJECTILE_SPEED + SHIP_THRUST),
            ttl: PROJECTILE_TTL,
            radius: PROJECTILE_RADIUS,
        };
        self.projectiles.push(projectile);
    }

    /// Saturate each velocity axis independently to the speed bound
    pub fn clamp_velocity(&mut self) {
        self.vel.x = self.vel.x.clamp(-SHIP_MAX_SPEED, SHIP_MAX_SPEED);
        self.vel.y = self.vel.y.clamp(-SHIP_MAX_SPEED, SHIP_MAX_SPEED);
    }

    /// Put the ship back at field center with a fresh heading
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        self.orientation = SHIP_START_ORIENTATION;
        self.vel = Vec2::ZERO;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG driving all spawn randomness; serialized so a restored snapshot
    /// continues the same sequence
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub lives: i32,
    /// Countdown while exploding; respawn fires when it drops below zero
    pub destroyed_time: f32,
    /// Simulation frame counter
    pub time_ticks: u64,
    /// Debug overlay toggle
    pub debug: bool,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
}

impl GameState {
    /// Create a new game with a seeded asteroid field
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let asteroids = generate_field(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            lives: START_LIVES,
            destroyed_time: DESTROYED_TIME,
            time_ticks: 0,
            debug: false,
            ship: Ship::default(),
            asteroids,
        }
    }

    /// Whether the ship is currently in its post-collision countdown
    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.phase == GamePhase::Exploding
    }

    /// Elapsed game time in seconds
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * FRAME_SECS
    }
}
