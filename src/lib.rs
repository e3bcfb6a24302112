//! Brick breaker game library
//!
//! An Arkanoid-style game on Bevy + Rapier: a paddle, one ball, and six
//! rotating brick layouts salted with bomb and spring bricks.  The physics
//! engine handles every bounce; game code reacts to collision events.

pub mod arena;
pub mod ball;
pub mod bricks;
pub mod config;
pub mod constants;
pub mod error;
pub mod flow;
pub mod hud;
pub mod layout;
pub mod paddle;
pub mod scoring;

use bevy::prelude::*;

/// Everything except the window and the physics engine.
///
/// Expects `RapierPhysicsPlugin` (or at least its `CollisionEvent` message and
/// `PhysicsSet`) to be present in the app.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // Compiled defaults; load_game_config overwrites them from
        // assets/game.toml (if present) before anything else reads them.
        app.insert_resource(config::GameConfig::default())
            .insert_resource(scoring::Scoreboard::default())
            .add_plugins((
                flow::FlowPlugin,
                paddle::PaddlePlugin,
                bricks::BricksPlugin,
                hud::HudPlugin,
            ))
            .add_systems(
                Startup,
                (
                    config::load_game_config,
                    scoring::init_scoreboard,
                    (
                        arena::setup_camera,
                        arena::spawn_arena,
                        paddle::spawn_paddle,
                        ball::spawn_ball,
                        bricks::setup_brick_assets,
                    ),
                    (bricks::spawn_initial_bricks, hud::setup_hud),
                )
                    .chain(),
            )
            .add_systems(Startup, arena::disable_gravity);
    }
}
