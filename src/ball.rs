//! The ball: spawn, rest/launch helpers, and the spring-brick velocity rule.
//!
//! The ball is a Rapier dynamic body with perfect restitution and no
//! friction, so the solver handles every bounce.  Game code only ever
//! *overrides* its velocity: on launch, on paddle hits (see
//! [`crate::paddle`]) and on spring-brick hits (see [`crate::bricks`]).

use crate::arena::screen_to_world;
use crate::config::GameConfig;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Marker component for the ball entity.
#[derive(Component)]
pub struct Ball;

/// World-space rest position of the ball, just above the paddle.
pub fn ball_rest_position(config: &GameConfig) -> Vec2 {
    screen_to_world(Vec2::new(config.ball_start_x, config.ball_start_y))
}

/// Velocity after a spring brick: same speed, new direction `angle` (radians).
pub fn spring_velocity(current: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle) * current.length()
}

/// Physics components shared by the spawned ball and headless test balls.
pub fn ball_physics(config: &GameConfig) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::ball(config.ball_radius),
        Restitution {
            coefficient: 1.0,
            combine_rule: CoefficientCombineRule::Max,
        },
        Friction {
            coefficient: 0.0,
            combine_rule: CoefficientCombineRule::Min,
        },
        Velocity::zero(),
        GravityScale(0.0),
        Damping {
            linear_damping: 0.0,
            angular_damping: 0.0,
        },
        LockedAxes::ROTATION_LOCKED,
        Ccd::enabled(),
        Sleeping::disabled(),
        ActiveEvents::COLLISION_EVENTS,
    )
}

/// Startup system: spawn the ball at rest.
pub fn spawn_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    let mesh = meshes.add(Circle::new(config.ball_radius));
    let material = materials.add(ColorMaterial::from_color(Color::WHITE));
    commands.spawn((
        Ball,
        Transform::from_translation(ball_rest_position(&config).extend(1.0)),
        Mesh2d(mesh),
        MeshMaterial2d(material),
        ball_physics(&config),
    ));
    debug!("Ball spawned");
}

/// Put the ball back at its rest position with zero velocity.
pub fn park_ball(transform: &mut Transform, velocity: &mut Velocity, config: &GameConfig) {
    let rest = ball_rest_position(config);
    transform.translation.x = rest.x;
    transform.translation.y = rest.y;
    *velocity = Velocity::zero();
}
