//! Headless tests that run the real Rapier pipeline.
//!
//! Unlike `flow_tests.rs`, no collision is injected by hand: the solver moves
//! the ball at a fixed 60 Hz step and writes its own `CollisionEvent`s, and
//! the game systems react to them in `PostUpdate` after the writeback.
//!
//! Covered scenarios:
//! 1. A ball landing 20 px right of the paddle centre leaves at `(100, +vy)`.
//! 2. A ball driven into the floor sensor costs a life.
//! 3. A ball striking a brick destroys it, scores 10 and is reflected.
//! 4. Wall bounces keep the ball's speed.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::CursorMoved;
use bevy_rapier2d::prelude::*;
use brickbreaker::arena::{disable_gravity, spawn_arena};
use brickbreaker::ball::{ball_physics, Ball};
use brickbreaker::bricks::{brick_physics, Brick, BricksPlugin, GameRng};
use brickbreaker::config::GameConfig;
use brickbreaker::flow::{FlowPlugin, GameState};
use brickbreaker::layout::BrickKind;
use brickbreaker::paddle::{paddle_physics, Paddle, PaddlePlugin};
use brickbreaker::scoring::Scoreboard;
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Game plugins plus Rapier at one world unit per pixel, starting in
/// `Playing`, with the arena walls and floor sensor spawned.
fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
    ));
    app.init_asset::<Mesh>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0));

    app.add_message::<CursorMoved>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.insert_resource(GameConfig::default());
    app.insert_resource(Scoreboard::default());
    app.insert_resource(GameRng::seeded(3));
    app.insert_state(GameState::Playing);
    app.add_plugins((FlowPlugin, PaddlePlugin, BricksPlugin));
    app.add_systems(Startup, (spawn_arena, disable_gravity));

    app.update();
    app
}

fn spawn_ball(app: &mut App, at: Vec2, linvel: Vec2) -> Entity {
    let config = GameConfig::default();
    app.world_mut()
        .spawn((
            Ball,
            Transform::from_translation(at.extend(1.0)),
            ball_physics(&config),
        ))
        .insert(Velocity::linear(linvel))
        .id()
}

fn spawn_plain_brick(app: &mut App, grid: IVec2, at: Vec2) -> Entity {
    let config = GameConfig::default();
    app.world_mut()
        .spawn((
            Brick { grid },
            BrickKind::Plain,
            Transform::from_translation(at.extend(0.0)),
            brick_physics(&config),
        ))
        .id()
}

fn velocity(app: &App, ball: Entity) -> Vec2 {
    app.world().get::<Velocity>(ball).unwrap().linvel
}

/// Step until `done` holds or `max_frames` pass; returns whether it held.
fn run_until(app: &mut App, max_frames: usize, done: impl Fn(&App) -> bool) -> bool {
    for _ in 0..max_frames {
        app.update();
        if done(app) {
            return true;
        }
    }
    false
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn paddle_reflects_then_angles_the_ball() {
    let mut app = physics_app();
    let config = GameConfig::default();
    app.world_mut().spawn((
        Paddle,
        Transform::from_xyz(0.0, -250.0, 0.5),
        paddle_physics(&config),
    ));
    let ball = spawn_ball(&mut app, Vec2::new(20.0, -180.0), Vec2::new(0.0, -300.0));

    let bounced = run_until(&mut app, 120, |app| velocity(app, ball).y > 0.0);
    assert!(bounced, "ball never came back off the paddle");

    let v = velocity(&app, ball);
    assert!((v.x - 100.0).abs() < 1e-2, "v = {v}");
    assert!((v.y - 300.0).abs() < 5.0, "v = {v}");
}

#[test]
fn floor_sensor_costs_a_life() {
    let mut app = physics_app();
    spawn_ball(&mut app, Vec2::new(0.0, -250.0), Vec2::new(0.0, -400.0));

    let lost = run_until(&mut app, 120, |app| {
        *app.world().resource::<State<GameState>>().get() == GameState::Serving
    });
    assert!(lost, "floor sensor never fired");
    assert_eq!(app.world().resource::<Scoreboard>().lives, 2);
}

#[test]
fn brick_hit_destroys_scores_and_reflects() {
    let mut app = physics_app();
    let target = spawn_plain_brick(&mut app, IVec2::new(4, 2), Vec2::ZERO);
    // A second brick far away keeps the level from clearing.
    spawn_plain_brick(&mut app, IVec2::new(9, 0), Vec2::new(300.0, 200.0));
    let ball = spawn_ball(&mut app, Vec2::new(0.0, -80.0), Vec2::new(0.0, 300.0));

    let hit = run_until(&mut app, 120, |app| app.world().get_entity(target).is_err());
    assert!(hit, "brick was never destroyed");

    assert_eq!(app.world().resource::<Scoreboard>().score, 10);
    let v = velocity(&app, ball);
    assert!(v.y < 0.0, "v = {v}");
    assert!((v.length() - 300.0).abs() < 5.0, "v = {v}");
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
}

#[test]
fn walls_keep_ball_speed() {
    let mut app = physics_app();
    let start = Vec2::new(300.0, 300.0);
    let ball = spawn_ball(&mut app, Vec2::ZERO, start);

    // Two seconds: one bounce off the top wall and one off the right wall.
    for _ in 0..120 {
        app.update();
    }

    let v = velocity(&app, ball);
    assert!(v.x < 0.0 && v.y < 0.0, "ball should be heading down-left, v = {v}");
    assert!((v.length() - start.length()).abs() < 1.0, "v = {v}");
}
