//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick == one 60 Hz frame)
//! - Seeded RNG only
//! - Stable iteration order (collections scanned front to back, mutations
//!   collected during scans and applied afterwards)
//! - No rendering or platform dependencies

pub mod collision;
pub mod poly;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hit, point_segment_distance, projectile_hits, segments_intersect, ship_hits_asteroids};
pub use poly::{asteroid_vertices, ship_hull};
pub use spawn::{generate_field, split};
pub use state::{Asteroid, GamePhase, GameState, Projectile, Ship};
pub use tick::{TickInput, restart_game, tick};
