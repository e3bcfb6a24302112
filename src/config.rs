//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tunable constants in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! ball_initial_speed = 260.0
//! bomb_chance = 0.3
//! ```
//!
//! A file that fails to parse or validate is rejected as a whole; the game
//! keeps the compiled defaults and logs a warning.

use crate::constants::*;
use crate::error::{validate_positive, validate_probability, GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Location of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
///
/// Positions are in screen space (see [`crate::constants`]).
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Paddle ────────────────────────────────────────────────────────────────
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_start_x: f32,
    pub paddle_y: f32,
    pub paddle_key_speed: f32,
    pub paddle_min_x: f32,
    pub paddle_max_x: f32,
    pub paddle_deflection: f32,

    // ── Ball ──────────────────────────────────────────────────────────────────
    pub ball_radius: f32,
    pub ball_start_x: f32,
    pub ball_start_y: f32,
    pub ball_initial_speed: f32,
    pub ball_speed_multiplier: f32,

    // ── Scoring ───────────────────────────────────────────────────────────────
    pub starting_lives: u32,
    pub points_per_brick: u32,

    // ── Bricks ────────────────────────────────────────────────────────────────
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_spacing: f32,
    pub brick_origin_x: f32,
    pub brick_origin_y: f32,
    pub bomb_chance: f64,
    pub spring_chance: f64,

    // ── HUD ───────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_start_x: PADDLE_START_X,
            paddle_y: PADDLE_Y,
            paddle_key_speed: PADDLE_KEY_SPEED,
            paddle_min_x: PADDLE_MIN_X,
            paddle_max_x: PADDLE_MAX_X,
            paddle_deflection: PADDLE_DEFLECTION,
            ball_radius: BALL_RADIUS,
            ball_start_x: BALL_START_X,
            ball_start_y: BALL_START_Y,
            ball_initial_speed: BALL_INITIAL_SPEED,
            ball_speed_multiplier: BALL_SPEED_MULTIPLIER,
            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_spacing: BRICK_SPACING,
            brick_origin_x: BRICK_ORIGIN_X,
            brick_origin_y: BRICK_ORIGIN_Y,
            bomb_chance: BOMB_CHANCE,
            spring_chance: SPRING_CHANCE,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str, path: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|source| {
            GameError::ConfigParse {
                path: path.to_string(),
                source,
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path` if it exists.  `Ok(None)` means there is no override file.
    pub fn load_from_path(path: &Path) -> GameResult<Option<Self>> {
        let display = path.display().to_string();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(GameError::ConfigRead {
                    path: display,
                    source,
                })
            }
        };
        Self::from_toml_str(&contents, &display).map(Some)
    }

    /// Reject values that would make the game unplayable or the layout
    /// generator ill-defined.
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("paddle_width", self.paddle_width)?;
        validate_positive("paddle_height", self.paddle_height)?;
        validate_positive("paddle_key_speed", self.paddle_key_speed)?;
        validate_positive("ball_radius", self.ball_radius)?;
        validate_positive("ball_initial_speed", self.ball_initial_speed)?;
        validate_positive("brick_width", self.brick_width)?;
        validate_positive("brick_height", self.brick_height)?;
        validate_positive("hud_font_size", self.hud_font_size)?;
        validate_probability("bomb_chance", self.bomb_chance)?;
        validate_probability("spring_chance", self.spring_chance)?;
        validate_probability("bomb_chance + spring_chance", self.bomb_chance + self.spring_chance)?;

        if !(self.ball_speed_multiplier >= 1.0) {
            return Err(GameError::InvalidConfig {
                name: "ball_speed_multiplier",
                value: self.ball_speed_multiplier as f64,
                expected: ">= 1.0",
            });
        }
        if self.starting_lives == 0 {
            return Err(GameError::InvalidConfig {
                name: "starting_lives",
                value: 0.0,
                expected: ">= 1",
            });
        }
        if self.brick_spacing < 0.0 {
            return Err(GameError::InvalidConfig {
                name: "brick_spacing",
                value: self.brick_spacing as f64,
                expected: ">= 0",
            });
        }
        if !(0.0..=ARENA_WIDTH).contains(&self.paddle_min_x)
            || !(0.0..=ARENA_WIDTH).contains(&self.paddle_max_x)
            || self.paddle_min_x > self.paddle_max_x
        {
            return Err(GameError::InvalidConfig {
                name: "paddle_min_x / paddle_max_x",
                value: self.paddle_min_x as f64,
                expected: "0 <= paddle_min_x <= paddle_max_x <= arena width",
            });
        }
        if !(self.paddle_min_x..=self.paddle_max_x).contains(&self.paddle_start_x) {
            return Err(GameError::InvalidConfig {
                name: "paddle_start_x",
                value: self.paddle_start_x as f64,
                expected: "between paddle_min_x and paddle_max_x",
            });
        }
        Ok(())
    }

    /// Distance between neighbouring brick centres, per axis.
    pub fn brick_pitch(&self) -> Vec2 {
        Vec2::new(
            self.brick_width + self.brick_spacing,
            self.brick_height + self.brick_spacing,
        )
    }

    /// Clamp a paddle centre x to the allowed range.
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(self.paddle_min_x, self.paddle_max_x)
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with its values.
///
/// Missing keys retain their compiled defaults.  Read, parse and validation
/// errors are logged but do not abort the game.  A missing file is not an
/// error.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match GameConfig::load_from_path(Path::new(CONFIG_PATH)) {
        Ok(Some(loaded)) => {
            *config = loaded;
            info!("Loaded game config from {CONFIG_PATH}");
        }
        Ok(None) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
        Err(e) => {
            warn!("{e}; using compiled defaults");
        }
    }
}
