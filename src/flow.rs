//! Game flow: the serve/play/level-complete/game-over state machine.
//!
//! ## States
//!
//! | State           | Description                                  | Leaves via                    |
//! |-----------------|----------------------------------------------|-------------------------------|
//! | `Serving`       | Ball at rest above the paddle, prompt shown  | Space / click → `Playing`     |
//! | `Playing`       | Ball in motion                               | floor sensor, last brick      |
//! | `LevelComplete` | Summary card, next level already laid out    | Space / click → `Playing`     |
//! | `GameOver`      | Final card, ball stopped                     | `R` → `Serving` (fresh run)   |
//!
//! ## Systems (registered by `FlowPlugin`)
//!
//! | System                   | Schedule                         | Purpose                              |
//! |--------------------------|----------------------------------|--------------------------------------|
//! | `launch_input_system`    | `Update / Serving, LevelComplete`| Launch the ball                      |
//! | `restart_input_system`   | `Update / GameOver`              | Reset the run                        |
//! | `level_cleared_system`   | `PostUpdate / Playing`           | Advance level, speed up, relayout    |
//! | `floor_hit_system`       | `PostUpdate / Playing`           | Lose a life, relayout or game over   |
//!
//! Losing a life regenerates the *current* level with a fresh random layout.

use crate::arena::Floor;
use crate::ball::{park_ball, Ball};
use crate::bricks::{
    ball_brick_hit_system, regenerate_level, Brick, BrickAssets, GameRng, LevelCleared,
};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::paddle::{paddle_rest_position, Paddle};
use crate::scoring::{LifeOutcome, Scoreboard};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level game state machine.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Waiting for the player to launch the ball.
    #[default]
    Serving,
    /// Ball in motion.
    Playing,
    /// All bricks destroyed; summary card shown.
    LevelComplete,
    /// No lives left.
    GameOver,
}

/// Which wording the serve prompt uses.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServePrompt {
    /// Fresh run.
    #[default]
    Start,
    /// After a lost life.
    Continue,
}

impl ServePrompt {
    pub fn text(self) -> &'static str {
        match self {
            Self::Start => "Click or Press SPACE to Start",
            Self::Continue => "Click or Press SPACE to Continue",
        }
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers [`GameState`], [`ServePrompt`] and the flow systems.
///
/// Must be added before any plugin that uses `run_if(in_state(..))`.
pub struct FlowPlugin;

impl Plugin for FlowPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<ServePrompt>()
            .add_systems(
                Update,
                (
                    launch_input_system.run_if(
                        in_state(GameState::Serving).or(in_state(GameState::LevelComplete)),
                    ),
                    restart_input_system.run_if(in_state(GameState::GameOver)),
                ),
            )
            .add_systems(
                PostUpdate,
                (level_cleared_system, floor_hit_system)
                    .chain()
                    .after(ball_brick_hit_system)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ── Update: input ─────────────────────────────────────────────────────────────

/// Space or left click sends the ball up and to the right at the current speed.
pub fn launch_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut q_ball: Query<&mut Velocity, With<Ball>>,
    scoreboard: Res<Scoreboard>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !(keys.just_pressed(KeyCode::Space) || mouse_buttons.just_pressed(MouseButton::Left)) {
        return;
    }
    let Ok(mut velocity) = q_ball.single_mut() else {
        warn!("{}", GameError::EntityNotFound { context: "launch" });
        return;
    };

    velocity.linvel = scoreboard.launch_velocity();
    next_state.set(GameState::Playing);
    info!(
        "Ball launched on level {} at speed {}",
        scoreboard.level, scoreboard.ball_speed
    );
}

/// `R` starts a fresh run from level 1 with the paddle back in the centre.
#[allow(clippy::too_many_arguments)]
pub fn restart_input_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut q_ball: Query<(&mut Transform, &mut Velocity), With<Ball>>,
    mut q_paddle: Query<&mut Transform, (With<Paddle>, Without<Ball>)>,
    q_bricks: Query<Entity, With<Brick>>,
    mut scoreboard: ResMut<Scoreboard>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    assets: Option<Res<BrickAssets>>,
    mut prompt: ResMut<ServePrompt>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    scoreboard.reset();
    for (mut transform, mut velocity) in q_ball.iter_mut() {
        park_ball(&mut transform, &mut velocity, &config);
    }
    let paddle_rest = paddle_rest_position(&config);
    for mut transform in q_paddle.iter_mut() {
        transform.translation.x = paddle_rest.x;
        transform.translation.y = paddle_rest.y;
    }
    regenerate_level(
        &mut commands,
        q_bricks.iter(),
        scoreboard.level,
        &config,
        &mut rng,
        assets.as_deref(),
    );
    *prompt = ServePrompt::Start;
    next_state.set(GameState::Serving);
    info!("Game restarted");
}

// ── PostUpdate: outcomes ──────────────────────────────────────────────────────

/// Level done: bump level and speed, lay out the next level, show the card.
#[allow(clippy::too_many_arguments)]
pub fn level_cleared_system(
    mut commands: Commands,
    mut cleared: MessageReader<LevelCleared>,
    mut q_ball: Query<(&mut Transform, &mut Velocity), With<Ball>>,
    q_bricks: Query<Entity, With<Brick>>,
    mut scoreboard: ResMut<Scoreboard>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    assets: Option<Res<BrickAssets>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(event) = cleared.read().last().copied() else {
        return;
    };

    scoreboard.advance_level();
    info!(
        "Level {} complete; next level {} at speed {}",
        event.level, scoreboard.level, scoreboard.ball_speed
    );

    for (mut transform, mut velocity) in q_ball.iter_mut() {
        park_ball(&mut transform, &mut velocity, &config);
    }
    regenerate_level(
        &mut commands,
        q_bricks.iter(),
        scoreboard.level,
        &config,
        &mut rng,
        assets.as_deref(),
    );
    next_state.set(GameState::LevelComplete);
}

/// Ball reached the floor: lose a life, then either relayout and serve again
/// or end the run.
///
/// Skipped on a frame where the level was also cleared.
#[allow(clippy::too_many_arguments)]
pub fn floor_hit_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut cleared: MessageReader<LevelCleared>,
    mut q_ball: Query<(&mut Transform, &mut Velocity), With<Ball>>,
    q_floor: Query<(), With<Floor>>,
    q_bricks: Query<Entity, With<Brick>>,
    mut scoreboard: ResMut<Scoreboard>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    assets: Option<Res<BrickAssets>>,
    mut prompt: ResMut<ServePrompt>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let floor_hit = collision_events.read().any(|event| match event {
        CollisionEvent::Started(e1, e2, _) => {
            (q_ball.contains(*e1) && q_floor.contains(*e2))
                || (q_ball.contains(*e2) && q_floor.contains(*e1))
        }
        CollisionEvent::Stopped(..) => false,
    });
    if cleared.read().count() > 0 || !floor_hit {
        return;
    }

    match scoreboard.lose_life() {
        LifeOutcome::Continue { lives_left } => {
            info!("Ball lost; {} lives left", lives_left);
            for (mut transform, mut velocity) in q_ball.iter_mut() {
                park_ball(&mut transform, &mut velocity, &config);
            }
            regenerate_level(
                &mut commands,
                q_bricks.iter(),
                scoreboard.level,
                &config,
                &mut rng,
                assets.as_deref(),
            );
            *prompt = ServePrompt::Continue;
            next_state.set(GameState::Serving);
        }
        LifeOutcome::GameOver => {
            info!("Game over with score {}", scoreboard.score);
            for (_, mut velocity) in q_ball.iter_mut() {
                *velocity = Velocity::zero();
            }
            next_state.set(GameState::GameOver);
        }
    }
}
