//! Player paddle: spawn, pointer and keyboard control, and the ball deflection
//! rule applied when the ball strikes it.
//!
//! The paddle is a kinematic position-based body: systems write its
//! `Transform` and Rapier moves the collider, so it pushes the ball but is
//! never pushed back.

use crate::arena::{screen_to_world, world_to_screen};
use crate::ball::Ball;
use crate::config::GameConfig;
use crate::constants::PADDLE_RGB;
use crate::flow::GameState;
use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy_rapier2d::prelude::*;

/// Marker component for the paddle entity.
#[derive(Component)]
pub struct Paddle;

pub struct PaddlePlugin;

impl Plugin for PaddlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                paddle_pointer_system,
                paddle_keyboard_system.run_if(in_state(GameState::Playing)),
            ),
        )
        .add_systems(
            PostUpdate,
            ball_paddle_hit_system
                .after(PhysicsSet::Writeback)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Horizontal ball velocity after a paddle hit: proportional to how far from
/// the paddle centre the ball struck.
pub fn paddle_deflection(ball_x: f32, paddle_x: f32, factor: f32) -> f32 {
    (ball_x - paddle_x) * factor
}

/// Paddle colour `#4a90e2`.
pub fn paddle_color() -> Color {
    let [r, g, b] = PADDLE_RGB;
    Color::srgb_u8(r, g, b)
}

/// Physics components for the paddle.
pub fn paddle_physics(config: &GameConfig) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::cuboid(config.paddle_width / 2.0, config.paddle_height / 2.0),
        Restitution {
            coefficient: 1.0,
            combine_rule: CoefficientCombineRule::Max,
        },
        Friction {
            coefficient: 0.0,
            combine_rule: CoefficientCombineRule::Min,
        },
        ActiveEvents::COLLISION_EVENTS,
    )
}

/// World-space rest position of the paddle centre.
pub fn paddle_rest_position(config: &GameConfig) -> Vec2 {
    screen_to_world(Vec2::new(config.paddle_start_x, config.paddle_y))
}

/// Startup system: spawn the paddle centred at the bottom of the arena.
pub fn spawn_paddle(mut commands: Commands, config: Res<GameConfig>) {
    let pos = paddle_rest_position(&config);
    commands.spawn((
        Paddle,
        Sprite::from_color(
            paddle_color(),
            Vec2::new(config.paddle_width, config.paddle_height),
        ),
        Transform::from_translation(pos.extend(0.5)),
        paddle_physics(&config),
    ));
    debug!("Paddle spawned");
}

/// Follow the pointer: the paddle centre tracks the cursor x, clamped.
///
/// Live in every state.  Only reacts to actual pointer movement so it does not fight the keyboard.
pub fn paddle_pointer_system(
    mut cursor_moves: MessageReader<CursorMoved>,
    mut q_paddle: Query<&mut Transform, With<Paddle>>,
    config: Res<GameConfig>,
) {
    // Cursor positions are logical pixels from the window's top-left: screen space.
    let Some(last) = cursor_moves.read().last() else {
        return;
    };
    let screen_x = config.clamp_paddle_x(last.position.x);
    for mut transform in q_paddle.iter_mut() {
        transform.translation.x = screen_to_world(Vec2::new(screen_x, 0.0)).x;
    }
}

/// Arrow keys slide the paddle at `paddle_key_speed`, clamped.
pub fn paddle_keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut q_paddle: Query<&mut Transform, With<Paddle>>,
    config: Res<GameConfig>,
) {
    let direction = if keys.pressed(KeyCode::ArrowLeft) {
        -1.0
    } else if keys.pressed(KeyCode::ArrowRight) {
        1.0
    } else {
        return;
    };

    let step = direction * config.paddle_key_speed * time.delta_secs();
    for mut transform in q_paddle.iter_mut() {
        let screen = world_to_screen(transform.translation.truncate());
        let x = config.clamp_paddle_x(screen.x + step);
        transform.translation.x = screen_to_world(Vec2::new(x, screen.y)).x;
    }
}

/// Angle the ball off the paddle.
///
/// The solver has already reflected the vertical velocity by the time the
/// `Started` event is read; only the horizontal component is replaced.
pub fn ball_paddle_hit_system(
    mut collision_events: MessageReader<CollisionEvent>,
    mut q_ball: Query<(&Transform, &mut Velocity), With<Ball>>,
    q_paddle: Query<&Transform, (With<Paddle>, Without<Ball>)>,
    config: Res<GameConfig>,
) {
    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let (ball_entity, paddle_entity) = if q_ball.contains(e1) && q_paddle.contains(e2) {
            (e1, e2)
        } else if q_ball.contains(e2) && q_paddle.contains(e1) {
            (e2, e1)
        } else {
            continue;
        };

        let Ok(paddle_transform) = q_paddle.get(paddle_entity) else {
            continue;
        };
        let paddle_x = paddle_transform.translation.x;
        if let Ok((ball_transform, mut velocity)) = q_ball.get_mut(ball_entity) {
            velocity.linvel.x = paddle_deflection(
                ball_transform.translation.x,
                paddle_x,
                config.paddle_deflection,
            );
        }
    }
}
