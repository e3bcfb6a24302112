//! Arena bounds: coordinate mapping, camera, walls and the floor sensor.
//!
//! The game is authored in **screen space** (origin top-left, y down, 800 × 600)
//! and rendered in Bevy world space (origin centre, y up) with a default
//! `Camera2d`, so one world unit is one logical pixel.
//!
//! ## Colliders
//!
//! | Entity | Body  | Notes                                          |
//! |--------|-------|------------------------------------------------|
//! | Left   | Fixed | Restitution 1, friction 0                      |
//! | Right  | Fixed | Restitution 1, friction 0                      |
//! | Top    | Fixed | Restitution 1, friction 0                      |
//! | Floor  | Fixed | `Sensor`; touching it costs the player a life  |
//!
//! Walls sit just outside the visible arena so the ball bounces off the
//! window edges.

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, BACKGROUND_RGB, WALL_THICKNESS};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Marker for the solid left/right/top walls.
#[derive(Component)]
pub struct Wall;

/// Marker for the bottom sensor strip.
#[derive(Component)]
pub struct Floor;

/// Convert a screen-space point (top-left origin, y down) to world space.
pub fn screen_to_world(p: Vec2) -> Vec2 {
    Vec2::new(p.x - ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0 - p.y)
}

/// Convert a world-space point back to screen space.
pub fn world_to_screen(p: Vec2) -> Vec2 {
    Vec2::new(p.x + ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0 - p.y)
}

/// Clear colour `#1a1a2e`.
pub fn background_color() -> Color {
    let [r, g, b] = BACKGROUND_RGB;
    Color::srgb_u8(r, g, b)
}

/// Spawn the 2D camera.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    debug!("Camera spawned");
}

/// Spawn the three bouncing walls and the floor sensor.
pub fn spawn_arena(mut commands: Commands) {
    let half_w = ARENA_WIDTH / 2.0;
    let half_h = ARENA_HEIGHT / 2.0;
    let half_t = WALL_THICKNESS / 2.0;

    let walls = [
        // left
        (
            Vec2::new(-half_w - half_t, 0.0),
            Vec2::new(half_t, half_h + WALL_THICKNESS),
        ),
        // right
        (
            Vec2::new(half_w + half_t, 0.0),
            Vec2::new(half_t, half_h + WALL_THICKNESS),
        ),
        // top
        (
            Vec2::new(0.0, half_h + half_t),
            Vec2::new(half_w + WALL_THICKNESS, half_t),
        ),
    ];

    for (center, half_extents) in walls {
        commands.spawn((
            Wall,
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            Restitution {
                coefficient: 1.0,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
        ));
    }

    commands.spawn((
        Floor,
        Transform::from_translation(Vec3::new(0.0, -half_h - half_t, 0.0)),
        RigidBody::Fixed,
        Collider::cuboid(half_w + WALL_THICKNESS, half_t),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
    ));

    debug!("Arena walls and floor sensor spawned");
}

/// Turn Rapier gravity off; the ball only moves by its own velocity.
pub fn disable_gravity(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_corners_map_to_world_corners() {
        assert_eq!(screen_to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(
            screen_to_world(Vec2::new(800.0, 600.0)),
            Vec2::new(400.0, -300.0)
        );
        assert_eq!(screen_to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn paddle_rest_position_is_below_centre() {
        assert_eq!(
            screen_to_world(Vec2::new(400.0, 550.0)),
            Vec2::new(0.0, -250.0)
        );
    }

    #[test]
    fn mapping_round_trips() {
        let p = Vec2::new(123.5, 456.25);
        assert_eq!(world_to_screen(screen_to_world(p)), p);
    }
}
