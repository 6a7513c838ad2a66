//! Render sink boundary
//!
//! The simulation never draws pixels. [`draw`] walks the game state and
//! emits three kinds of primitives into a [`RenderSink`] the platform
//! provides: line segments, filled circles and positioned text. Anything
//! that can consume those three calls can present the game.

use glam::Vec2;

use crate::consts::*;
use crate::direction;
use crate::sim::poly::{asteroid_vertices, ship_hull};
use crate::sim::state::{GamePhase, GameState, Ship};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const GRAY: Color = Color { r: 130, g: 130, b: 130, a: 255 };
    pub const ORANGE: Color = Color { r: 255, g: 161, b: 0, a: 255 };
    pub const RED: Color = Color { r: 230, g: 41, b: 55, a: 255 };
}

/// Receiver for the game's draw primitives
pub trait RenderSink {
    /// Draw a line segment
    fn segment(&mut self, a: Vec2, b: Vec2, color: Color);
    /// Draw a filled circle
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Draw a text string at a position with a pixel size
    fn text(&mut self, s: &str, pos: Vec2, size: f32, color: Color);
}

/// Size of the lives-indicator miniatures in the corner
const LIVES_GLYPH_SIZE: f32 = 10.0;
const DEBUG_TEXT_SIZE: f32 = 10.0;

/// Emit one frame of the game into the sink
pub fn draw(state: &GameState, sink: &mut impl RenderSink) {
    if state.debug {
        draw_debug_overlay(state, sink);
    }

    if state.is_exploding() {
        draw_explosion(state.ship.pos, state.ship.size, sink);
    } else if state.phase != GamePhase::GameOver {
        draw_ship(&state.ship, sink);
    }

    for p in &state.ship.projectiles {
        sink.circle(p.pos, p.radius, Color::WHITE);
    }

    for a in &state.asteroids {
        let points = asteroid_vertices(a.pos, a.size, a.orientation, &a.jag);
        // the outline closes: unlike the collision scan, drawing includes
        // the edge from vertex 10 back to vertex 0
        for k in 0..points.len() {
            sink.segment(points[k], points[(k + 1) % points.len()], Color::WHITE);
        }
    }

    draw_lives(state, sink);

    if state.phase == GamePhase::GameOver {
        sink.text(
            "GAME OVER",
            Vec2::new(FIELD_WIDTH / 2.0 - 120.0, FIELD_HEIGHT / 2.0 - 20.0),
            40.0,
            Color::RED,
        );
    }
}

fn draw_ship(ship: &Ship, sink: &mut impl RenderSink) {
    let hull = ship_hull(ship.pos, ship.size, ship.orientation);
    // closed loop: nose -> wing -> center -> wing -> nose
    for k in 0..hull.len() {
        sink.segment(hull[k], hull[(k + 1) % hull.len()], Color::WHITE);
    }
}

/// Starburst shown in place of the hull while the respawn countdown runs
fn draw_explosion(pos: Vec2, size: f32, sink: &mut impl RenderSink) {
    for k in 0..8 {
        let angle = k as f32 * std::f32::consts::TAU / 8.0;
        let ray = direction(angle);
        sink.segment(pos + ray * (size * 0.3), pos + ray * size, Color::ORANGE);
    }
}

fn draw_lives(state: &GameState, sink: &mut impl RenderSink) {
    for k in 0..state.lives.max(0) {
        let pos = Vec2::new(20.0 + k as f32 * 25.0, 25.0);
        let hull = ship_hull(pos, LIVES_GLYPH_SIZE, SHIP_START_ORIENTATION);
        for i in 0..hull.len() {
            sink.segment(hull[i], hull[(i + 1) % hull.len()], Color::GRAY);
        }
    }
}

fn draw_debug_overlay(state: &GameState, sink: &mut impl RenderSink) {
    let ship = &state.ship;
    sink.text(
        &format!("Ship position: ({:.3}, {:.3})", ship.pos.x, ship.pos.y),
        Vec2::new(10.0, 10.0),
        DEBUG_TEXT_SIZE,
        Color::WHITE,
    );
    sink.text(
        &format!("Velocity: ({:.3}, {:.3})", ship.vel.x, ship.vel.y),
        Vec2::new(10.0, 30.0),
        DEBUG_TEXT_SIZE,
        Color::WHITE,
    );
    sink.text(
        &format!(
            "Phase: {:?}  lives: {}  t: {:.2}s",
            state.phase,
            state.lives,
            state.elapsed_secs()
        ),
        Vec2::new(10.0, 50.0),
        DEBUG_TEXT_SIZE,
        Color::WHITE,
    );

    for (i, p) in ship.projectiles.iter().enumerate() {
        sink.text(
            &format!("P({:.1}, {:.1})", p.pos.x, p.pos.y),
            Vec2::new(150.0, 70.0 + 10.0 * i as f32),
            DEBUG_TEXT_SIZE,
            Color::WHITE,
        );
    }
    for (i, a) in state.asteroids.iter().enumerate() {
        sink.text(
            &format!("A({:.1}, {:.1})", a.pos.x, a.pos.y),
            Vec2::new(10.0, 70.0 + 10.0 * i as f32),
            DEBUG_TEXT_SIZE,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameState;

    /// Sink that records primitive counts and text payloads
    #[derive(Default)]
    struct RecordingSink {
        segments: usize,
        circles: usize,
        texts: Vec<String>,
    }

    impl RenderSink for RecordingSink {
        fn segment(&mut self, _a: Vec2, _b: Vec2, _color: Color) {
            self.segments += 1;
        }
        fn circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
            self.circles += 1;
        }
        fn text(&mut self, s: &str, _pos: Vec2, _size: f32, _color: Color) {
            self.texts.push(s.to_string());
        }
    }

    #[test]
    fn test_fresh_game_frame_contents() {
        let state = GameState::new(1);
        let mut sink = RecordingSink::default();
        draw(&state, &mut sink);

        // 4 hull edges + 11 closed-outline edges per asteroid + 3 lives
        // miniatures of 4 edges each
        let expected = 4 + INITIAL_ASTEROIDS * ASTEROID_VERTICES + 3 * 4;
        assert_eq!(sink.segments, expected);
        assert_eq!(sink.circles, 0);
        assert!(sink.texts.is_empty(), "no overlay without the debug flag");
    }

    #[test]
    fn test_projectiles_draw_as_circles() {
        let mut state = GameState::new(2);
        state.asteroids.clear();
        state.ship.shoot();
        state.ship.shoot();

        let mut sink = RecordingSink::default();
        draw(&state, &mut sink);
        assert_eq!(sink.circles, 2);
    }

    #[test]
    fn test_exploding_swaps_hull_for_starburst() {
        let mut state = GameState::new(3);
        state.asteroids.clear();
        state.phase = GamePhase::Exploding;

        let mut sink = RecordingSink::default();
        draw(&state, &mut sink);
        // 8 starburst rays + lives miniatures, no hull
        assert_eq!(sink.segments, 8 + 3 * 4);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::new(4);
        state.asteroids.clear();
        state.phase = GamePhase::GameOver;
        state.lives = 0;

        let mut sink = RecordingSink::default();
        draw(&state, &mut sink);
        assert_eq!(sink.segments, 0, "no hull, no lives left to show");
        assert_eq!(sink.texts, vec!["GAME OVER".to_string()]);
    }

    #[test]
    fn test_debug_overlay_lists_entities() {
        let mut state = GameState::new(5);
        state.debug = true;
        state.ship.shoot();

        let mut sink = RecordingSink::default();
        draw(&state, &mut sink);

        // ship pos, velocity, phase line, one projectile, twelve asteroids
        assert_eq!(sink.texts.len(), 3 + 1 + INITIAL_ASTEROIDS);
        assert!(sink.texts[0].starts_with("Ship position"));
    }
}
