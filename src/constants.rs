//! Centralised gameplay and layout constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  [`crate::config::GameConfig::default`] mirrors every
//! value below; `assets/game.toml` can override any subset at startup.
//!
//! ## Coordinate convention
//!
//! Positions in this file are in **screen space**: origin at the top-left of
//! the 800 × 600 arena, y growing downward.  [`crate::arena::screen_to_world`]
//! converts them into Bevy world space (origin centre, y up).

// ── Arena ─────────────────────────────────────────────────────────────────────

/// Arena width in logical pixels.
pub const ARENA_WIDTH: f32 = 800.0;

/// Arena height in logical pixels.
pub const ARENA_HEIGHT: f32 = 600.0;

/// Thickness of the invisible wall colliders placed just outside the arena.
pub const WALL_THICKNESS: f32 = 40.0;

/// Background colour `#1a1a2e`.
pub const BACKGROUND_RGB: [u8; 3] = [0x1a, 0x1a, 0x2e];

// ── Paddle ────────────────────────────────────────────────────────────────────

pub const PADDLE_WIDTH: f32 = 100.0;
pub const PADDLE_HEIGHT: f32 = 20.0;

/// Paddle centre at rest (screen space).
pub const PADDLE_START_X: f32 = 400.0;
pub const PADDLE_Y: f32 = 550.0;

/// Paddle fill colour `#4a90e2`.
pub const PADDLE_RGB: [u8; 3] = [0x4a, 0x90, 0xe2];

/// Keyboard paddle speed (px/s).
///
/// 8 px per frame at 60 fps.
pub const PADDLE_KEY_SPEED: f32 = 480.0;

/// Leftmost and rightmost allowed paddle centre x (half a paddle from each wall).
pub const PADDLE_MIN_X: f32 = 50.0;
pub const PADDLE_MAX_X: f32 = 750.0;

/// Horizontal velocity imparted per pixel of offset between ball and paddle centres.
///
/// A hit 50 px off-centre (the paddle edge) leaves at 250 px/s sideways.
pub const PADDLE_DEFLECTION: f32 = 5.0;

// ── Ball ──────────────────────────────────────────────────────────────────────

pub const BALL_RADIUS: f32 = 8.0;

/// Ball rest position (screen space), just above the paddle.
pub const BALL_START_X: f32 = 400.0;
pub const BALL_START_Y: f32 = 530.0;

/// Launch speed on level 1, applied to both axes.
pub const BALL_INITIAL_SPEED: f32 = 200.0;

/// Factor applied to the launch speed on each completed level (result floored).
pub const BALL_SPEED_MULTIPLIER: f32 = 1.25;

// ── Scoring & lives ──────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 3;

/// Points awarded for every destroyed brick, including bomb blast victims.
pub const POINTS_PER_BRICK: u32 = 10;

// ── Bricks ────────────────────────────────────────────────────────────────────

pub const BRICK_WIDTH: f32 = 70.0;
pub const BRICK_HEIGHT: f32 = 25.0;

/// Gap between neighbouring bricks, both axes.
pub const BRICK_SPACING: f32 = 5.0;

/// Centre of grid cell (0, 0) in screen space.
pub const BRICK_ORIGIN_X: f32 = 55.0;
pub const BRICK_ORIGIN_Y: f32 = 80.0;

/// Probability that a cell rolls a bomb brick.
pub const BOMB_CHANCE: f64 = 0.15;

/// Probability that a cell rolls a spring brick (stacked on top of `BOMB_CHANCE`).
pub const SPRING_CHANCE: f64 = 0.10;

/// Plain-brick palette: red, orange, yellow, green, blue, purple.
pub const BRICK_PALETTE: [[u8; 3]; 6] = [
    [0xe7, 0x4c, 0x3c],
    [0xe6, 0x7e, 0x22],
    [0xf3, 0x9c, 0x12],
    [0x2e, 0xcc, 0x71],
    [0x34, 0x98, 0xdb],
    [0x9b, 0x59, 0xb6],
];

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const HUD_FONT_SIZE: f32 = 24.0;
pub const PROMPT_FONT_SIZE: f32 = 28.0;
pub const TITLE_FONT_SIZE: f32 = 48.0;
