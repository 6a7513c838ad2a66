//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the game by exactly one 60 Hz frame:
//! input, integration, wraparound, collision resolution and the
//! destroyed/respawn countdown, in that order.

use crate::consts::*;
use crate::wrap_position;

use super::collision::{projectile_hits, ship_hits_asteroids};
use super::spawn::split;
use super::state::{GamePhase, GameState};

/// Input snapshot for a single tick.
///
/// Held actions (turning, thrust) stay true for every frame the key is
/// down; `fire` and `toggle_debug` are edge-triggered and should be set for
/// exactly one frame per press (the driver clears them after each tick).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub reverse: bool,
    pub fire: bool,
    pub toggle_debug: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // the overlay toggle works in every phase, including game over
    if input.toggle_debug {
        state.debug = !state.debug;
        log::debug!("debug overlay {}", if state.debug { "on" } else { "off" });
    }

    if state.phase == GamePhase::GameOver {
        // terminal state: the field keeps drifting, everything else is frozen
        move_asteroids(state);
        return;
    }

    state.time_ticks += 1;

    // Input pass. Suppressed while the ship is exploding; the wreck does
    // not steer, thrust or shoot.
    if !state.is_exploding() {
        apply_input(state, input);
    }

    state.ship.pos = wrap_position(state.ship.pos);

    move_projectiles(state);
    // a projectile is spent once its ttl drops below one frame
    state.ship.projectiles.retain(|p| p.ttl >= 1);

    move_asteroids(state);

    if !state.is_exploding() {
        // Second integration: the ship position advances once in the input
        // pass and once here, so one tick moves it by two velocity steps.
        state.ship.pos += state.ship.vel;
        state.ship.clamp_velocity();

        if ship_hits_asteroids(&state.ship, &state.asteroids) {
            state.phase = GamePhase::Exploding;
            log::info!(
                "ship hit at ({:.1}, {:.1}), {} lives in reserve",
                state.ship.pos.x,
                state.ship.pos.y,
                state.lives - 1
            );
        }
    }

    resolve_projectile_hits(state);

    if state.is_exploding() {
        state.destroyed_time -= DESTROYED_DECAY;
        if state.destroyed_time < 0.0 {
            restart_game(state);
        }
    }
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    let ship = &mut state.ship;

    if input.right {
        ship.turn(SHIP_TURN_SPEED);
        log::trace!("turn right, orientation {:.3}", ship.orientation);
    }
    if input.left {
        ship.turn(-SHIP_TURN_SPEED);
        log::trace!("turn left, orientation {:.3}", ship.orientation);
    }
    if input.thrust {
        ship.thrust(ship.speed);
    }
    if input.reverse {
        ship.thrust(-ship.speed);
    }
    if input.fire {
        ship.shoot();
        log::debug!("fired, {} shots in flight", ship.projectiles.len());
    }

    // first integration (see the matching step in `tick`)
    ship.pos += ship.vel;
}

fn move_projectiles(state: &mut GameState) {
    for p in &mut state.ship.projectiles {
        p.pos += p.vel;
        p.pos = wrap_position(p.pos);
        p.ttl -= 1;
    }
}

fn move_asteroids(state: &mut GameState) {
    for a in &mut state.asteroids {
        a.pos += a.vel;
        a.pos = wrap_position(a.pos);
    }
}

/// Apply this frame's projectile hits: spent shots and destroyed rocks are
/// collected during the scan and removed afterwards, then split children
/// join the field. Each asteroid resolves at most once per frame even if
/// several shots reached it.
fn resolve_projectile_hits(state: &mut GameState) {
    let hits = projectile_hits(&state.ship.projectiles, &state.asteroids);
    if hits.is_empty() {
        return;
    }

    let mut spent_shots: Vec<usize> = Vec::new();
    let mut destroyed_rocks: Vec<usize> = Vec::new();
    let mut children = Vec::new();

    for hit in &hits {
        spent_shots.push(hit.projectile);
        if !destroyed_rocks.contains(&hit.asteroid) {
            destroyed_rocks.push(hit.asteroid);
            children.extend(split(&mut state.rng, &state.asteroids[hit.asteroid]));
        }
    }

    // remove from the back so earlier indices stay valid; out-of-range
    // indices are skipped rather than trusted
    spent_shots.sort_unstable();
    for idx in spent_shots.into_iter().rev() {
        if idx < state.ship.projectiles.len() {
            state.ship.projectiles.remove(idx);
        }
    }
    destroyed_rocks.sort_unstable();
    let destroyed = destroyed_rocks.len();
    for idx in destroyed_rocks.into_iter().rev() {
        if idx < state.asteroids.len() {
            state.asteroids.remove(idx);
        }
    }

    state.asteroids.append(&mut children);
    log::debug!(
        "{} rock(s) destroyed, field now {}",
        destroyed,
        state.asteroids.len()
    );
}

/// Finish the exploding countdown: respawn at field center or end the run
pub fn restart_game(state: &mut GameState) {
    state.ship.respawn();
    state.lives -= 1;
    state.destroyed_time = DESTROYED_TIME;

    if state.lives > 0 {
        state.phase = GamePhase::Playing;
        log::info!("respawned, {} lives left", state.lives);
    } else {
        state.phase = GamePhase::GameOver;
        log::info!("game over after {:.1}s", state.elapsed_secs());
    }
}
