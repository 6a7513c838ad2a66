//! Toro Rocks headless driver
//!
//! Runs the simulation without a window: a scripted pilot flies the ship
//! while every frame is rendered into a primitive-counting sink. Useful for
//! soak-testing the sim, watching lifecycle logs and dumping state
//! snapshots.
//!
//! Usage: `toro-rocks [seed] [ticks] [--realtime] [--dump-state]`

use std::time::Duration;

use glam::Vec2;

use toro_rocks::consts::FRAME_SECS;
use toro_rocks::render::{Color, RenderSink, draw};
use toro_rocks::sim::{GamePhase, GameState, TickInput, tick};

/// Sink that tallies primitives instead of drawing them
#[derive(Default)]
struct CountingSink {
    segments: u64,
    circles: u64,
    texts: u64,
}

impl RenderSink for CountingSink {
    fn segment(&mut self, _a: Vec2, _b: Vec2, _color: Color) {
        self.segments += 1;
    }
    fn circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.circles += 1;
    }
    fn text(&mut self, _s: &str, _pos: Vec2, _size: f32, _color: Color) {
        self.texts += 1;
    }
}

/// Deterministic demo pilot: sweep the heading, thrust in bursts, fire on
/// a fixed cadence. One-shot actions pulse for a single frame, the same
/// contract a real input layer honors.
fn scripted_input(frame: u64) -> TickInput {
    TickInput {
        right: frame % 120 < 45,
        left: frame % 120 >= 90,
        thrust: frame % 60 < 15,
        reverse: false,
        fire: frame % 30 == 0,
        toggle_debug: frame == 0,
    }
}

fn main() {
    env_logger::init();

    let mut seed: u64 = 0xDECAF;
    let mut ticks: u64 = 3600;
    let mut realtime = false;
    let mut dump_state = false;

    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            "--dump-state" => dump_state = true,
            other => {
                match (positional, other.parse::<u64>()) {
                    (0, Ok(v)) => seed = v,
                    (1, Ok(v)) => ticks = v,
                    _ => {
                        eprintln!("usage: toro-rocks [seed] [ticks] [--realtime] [--dump-state]");
                        std::process::exit(2);
                    }
                }
                positional += 1;
            }
        }
    }

    log::info!("starting run: seed {seed}, {ticks} ticks");
    let mut state = GameState::new(seed);
    let mut sink = CountingSink::default();

    let mut frames: u64 = 0;
    for frame in 0..ticks {
        tick(&mut state, &scripted_input(frame));
        draw(&state, &mut sink);
        frames += 1;

        if state.phase == GamePhase::GameOver {
            log::info!("run ended in game over after {frames} frames");
            break;
        }
        if realtime {
            std::thread::sleep(Duration::from_secs_f32(FRAME_SECS));
        }
    }

    log::info!(
        "finished: {frames} frames, {} asteroids left, {} lives, {:.1}s game time",
        state.asteroids.len(),
        state.lives,
        state.elapsed_secs()
    );
    log::info!(
        "render totals: {} segments, {} circles, {} texts",
        sink.segments,
        sink.circles,
        sink.texts
    );

    if dump_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("state dump failed: {e}"),
        }
    }
}
