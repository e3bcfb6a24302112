//! Bricks: spawning a generated layout, the ball–brick hit rules, and the
//! retained meshes that draw bomb and spring bricks.
//!
//! ## Hit rules
//!
//! | Kind   | Effect on hit                                                      |
//! |--------|--------------------------------------------------------------------|
//! | Plain  | Destroyed, +10                                                     |
//! | Spring | Destroyed, +10, ball re-aimed at a random angle with the same speed|
//! | Bomb   | Destroyed, +10, plus every brick in the 8 neighbouring grid cells, +10 each |
//!
//! Bricks destroyed by a blast do not trigger their own effects.  Each brick
//! is processed at most once per frame even when several `CollisionEvent`s
//! name it.  When the last brick goes, [`LevelCleared`] is written.
//!
//! ## Visuals
//!
//! Plain bricks are flat `Sprite`s.  Bomb and spring bricks are a rounded
//! `Mesh2d` slab with child meshes for the bomb body, fuse and spark or the
//! spring coils.  All meshes are built once in [`setup_brick_assets`].  When
//! [`BrickAssets`] is absent (headless tests) bricks are spawned with physics
//! only.

use crate::arena::screen_to_world;
use crate::ball::{spring_velocity, Ball};
use crate::config::GameConfig;
use crate::constants::BRICK_PALETTE;
use crate::flow::GameState;
use crate::layout::{
    generate_layout, BrickKind, BrickSpec, LayoutKind, LayoutParams, NEIGHBOR_OFFSETS,
};
use crate::scoring::Scoreboard;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};
use bevy_rapier2d::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

// ── Components, resources & messages ─────────────────────────────────────────

/// A destructible brick.  Its effect lives in the sibling [`BrickKind`] component.
#[derive(Component, Debug, Clone, Copy)]
pub struct Brick {
    /// Logical grid cell; bombs destroy the 8 cells around their own.
    pub grid: IVec2,
}

/// Randomness for layouts and spring bounces.
///
/// Seeded from entropy in the game; tests insert a fixed seed.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Written when the ball destroys the last brick of a level.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCleared {
    /// The level that was just completed.
    pub level: u32,
}

/// One child mesh of a special brick.
#[derive(Clone)]
struct BrickPart {
    mesh: Handle<Mesh>,
    material: Handle<ColorMaterial>,
    offset: Vec3,
}

/// Shared mesh and material handles for special bricks.
#[derive(Resource, Clone)]
pub struct BrickAssets {
    slab: Handle<Mesh>,
    bomb_slab: Handle<ColorMaterial>,
    spring_slab: Handle<ColorMaterial>,
    bomb_parts: Vec<BrickPart>,
    spring_parts: Vec<BrickPart>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct BricksPlugin;

impl Plugin for BricksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameRng>()
            .add_message::<LevelCleared>()
            .add_systems(
                PostUpdate,
                ball_brick_hit_system
                    .after(PhysicsSet::Writeback)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ── Colours ───────────────────────────────────────────────────────────────────

/// Plain-brick colour for a palette index (wraps).
pub fn palette_color(index: usize) -> Color {
    let [r, g, b] = BRICK_PALETTE[index % BRICK_PALETTE.len()];
    Color::srgb_u8(r, g, b)
}

pub(crate) fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

// ── Startup: shared assets ────────────────────────────────────────────────────

/// Build the slab and decoration meshes for bomb and spring bricks.
pub fn setup_brick_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    let mut material = |color: Color| materials.add(ColorMaterial::from_color(color));
    let decoration_z = 0.1;

    let slab = meshes.add(rounded_rect_mesh(
        Vec2::new(config.brick_width, config.brick_height),
        3.0,
        4,
    ));
    let bomb_slab = material(hex(0x2c3e50));
    let spring_slab = material(hex(0x16a085));

    // Offsets are relative to the brick centre, y up.
    let bomb_parts = vec![
        BrickPart {
            mesh: meshes.add(Circle::new(7.0)),
            material: material(hex(0x1a1a1a)),
            offset: Vec3::new(0.0, 0.0, decoration_z),
        },
        BrickPart {
            mesh: meshes.add(Circle::new(2.0)),
            material: material(Color::srgba_u8(0x7f, 0x8c, 0x8d, 153)),
            offset: Vec3::new(-2.0, 2.5, decoration_z + 0.01),
        },
        BrickPart {
            mesh: meshes.add(stroke_mesh(
                &[vec![
                    Vec2::new(0.0, 7.5),
                    Vec2::new(3.0, 10.5),
                    Vec2::new(5.0, 12.5),
                ]],
                2.0,
            )),
            material: material(hex(0xe74c3c)),
            offset: Vec3::new(0.0, 0.0, decoration_z),
        },
        BrickPart {
            mesh: meshes.add(Circle::new(2.0)),
            material: material(hex(0xf39c12)),
            offset: Vec3::new(5.0, 12.5, decoration_z + 0.02),
        },
    ];

    let coils: Vec<Vec<Vec2>> = (0..5)
        .map(|i| arc_points(Vec2::new(-20.0 + 10.0 * i as f32, 0.0), 5.0, 0.0, PI, 12))
        .collect();
    let base_lines = vec![
        vec![Vec2::new(-25.0, 0.0), Vec2::new(-20.0, 0.0)],
        vec![Vec2::new(20.0, 0.0), Vec2::new(25.0, 0.0)],
    ];
    let spring_parts = vec![
        BrickPart {
            mesh: meshes.add(stroke_mesh(&coils, 3.0)),
            material: material(hex(0x1abc9c)),
            offset: Vec3::new(0.0, 0.0, decoration_z),
        },
        BrickPart {
            mesh: meshes.add(stroke_mesh(&base_lines, 2.0)),
            material: material(hex(0x0e8c73)),
            offset: Vec3::new(0.0, 0.0, decoration_z),
        },
    ];

    commands.insert_resource(BrickAssets {
        slab,
        bomb_slab,
        spring_slab,
        bomb_parts,
        spring_parts,
    });
    debug!("Brick assets built");
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Physics components for a brick.
pub fn brick_physics(config: &GameConfig) -> impl Bundle {
    (
        RigidBody::Fixed,
        Collider::cuboid(config.brick_width / 2.0, config.brick_height / 2.0),
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

/// Spawn one brick from its spec.
pub fn spawn_brick(
    commands: &mut Commands,
    spec: &BrickSpec,
    config: &GameConfig,
    assets: Option<&BrickAssets>,
) -> Entity {
    let position = screen_to_world(spec.center).extend(0.0);
    let mut entity = commands.spawn((
        Brick { grid: spec.grid },
        spec.kind,
        Transform::from_translation(position),
        brick_physics(config),
    ));

    let Some(assets) = assets else {
        return entity.id();
    };

    let (slab_material, parts) = match spec.kind {
        BrickKind::Plain => {
            entity.insert(Sprite::from_color(
                palette_color(spec.color_index),
                Vec2::new(config.brick_width, config.brick_height),
            ));
            return entity.id();
        }
        BrickKind::Bomb => (&assets.bomb_slab, &assets.bomb_parts),
        BrickKind::Spring => (&assets.spring_slab, &assets.spring_parts),
    };

    entity
        .insert((
            Mesh2d(assets.slab.clone()),
            MeshMaterial2d(slab_material.clone()),
        ))
        .with_children(|brick| {
            for part in parts {
                brick.spawn((
                    Mesh2d(part.mesh.clone()),
                    MeshMaterial2d(part.material.clone()),
                    Transform::from_translation(part.offset),
                ));
            }
        });
    entity.id()
}

/// Despawn every existing brick and spawn a fresh layout for `level`.
///
/// Returns the number of bricks spawned.
pub fn regenerate_level(
    commands: &mut Commands,
    existing: impl IntoIterator<Item = Entity>,
    level: u32,
    config: &GameConfig,
    rng: &mut GameRng,
    assets: Option<&BrickAssets>,
) -> usize {
    for entity in existing {
        commands.entity(entity).despawn();
    }

    let specs = generate_layout(level, &LayoutParams::from(config), &mut rng.0);
    for spec in &specs {
        spawn_brick(commands, spec, config, assets);
    }

    let bombs = specs.iter().filter(|s| s.kind == BrickKind::Bomb).count();
    let springs = specs.iter().filter(|s| s.kind == BrickKind::Spring).count();
    info!(
        "Level {} ({}): {} bricks, {} bombs, {} springs",
        level,
        LayoutKind::for_level(level).name(),
        specs.len(),
        bombs,
        springs
    );
    specs.len()
}

/// Startup system: spawn the first level's bricks.
pub fn spawn_initial_bricks(
    mut commands: Commands,
    config: Res<GameConfig>,
    scoreboard: Res<Scoreboard>,
    mut rng: ResMut<GameRng>,
    assets: Option<Res<BrickAssets>>,
) {
    regenerate_level(
        &mut commands,
        std::iter::empty(),
        scoreboard.level,
        &config,
        &mut rng,
        assets.as_deref(),
    );
}

// ── Hit handling ──────────────────────────────────────────────────────────────

/// Live bricks in the 8 grid cells around `center`, skipping any in `skip`.
pub fn blast_targets(
    center: IVec2,
    bricks: impl IntoIterator<Item = (Entity, IVec2)>,
    skip: &HashSet<Entity>,
) -> Vec<Entity> {
    bricks
        .into_iter()
        .filter(|(entity, grid)| {
            !skip.contains(entity) && NEIGHBOR_OFFSETS.contains(&(*grid - center))
        })
        .map(|(entity, _)| entity)
        .collect()
}

/// Process ball–brick collision events: destroy, score, and apply effects.
#[allow(clippy::too_many_arguments)]
pub fn ball_brick_hit_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut q_ball: Query<&mut Velocity, With<Ball>>,
    q_bricks: Query<(Entity, &Brick, &BrickKind)>,
    mut scoreboard: ResMut<Scoreboard>,
    mut rng: ResMut<GameRng>,
    mut cleared: MessageWriter<LevelCleared>,
) {
    let mut destroyed: HashSet<Entity> = HashSet::new();

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let (ball_entity, brick_entity) = if q_ball.contains(e1) && q_bricks.contains(e2) {
            (e1, e2)
        } else if q_ball.contains(e2) && q_bricks.contains(e1) {
            (e2, e1)
        } else {
            continue;
        };

        if destroyed.contains(&brick_entity) {
            continue;
        }
        let Ok((_, brick, kind)) = q_bricks.get(brick_entity) else {
            continue;
        };

        destroyed.insert(brick_entity);
        commands.entity(brick_entity).despawn();
        scoreboard.award(1);

        match kind {
            BrickKind::Plain => {}
            BrickKind::Spring => {
                if let Ok(mut velocity) = q_ball.get_mut(ball_entity) {
                    let angle = rng.0.gen_range(0.0..TAU);
                    velocity.linvel = spring_velocity(velocity.linvel, angle);
                }
            }
            BrickKind::Bomb => {
                let targets = blast_targets(
                    brick.grid,
                    q_bricks.iter().map(|(e, b, _)| (e, b.grid)),
                    &destroyed,
                );
                debug!("Bomb at {} took out {} bricks", brick.grid, targets.len());
                for target in targets {
                    destroyed.insert(target);
                    commands.entity(target).despawn();
                    scoreboard.award(1);
                }
            }
        }
    }

    if !destroyed.is_empty() && destroyed.len() >= q_bricks.iter().count() {
        cleared.write(LevelCleared {
            level: scoreboard.level,
        });
    }
}

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Points along a circular arc from `start` to `end` (radians, CCW).
pub fn arc_points(center: Vec2, radius: f32, start: f32, end: f32, segments: u32) -> Vec<Vec2> {
    (0..=segments)
        .map(|i| {
            let t = start + (end - start) * i as f32 / segments as f32;
            center + Vec2::from_angle(t) * radius
        })
        .collect()
}

/// Filled rectangle with rounded corners, centred on the origin.
///
/// Triangle fan around a centre vertex; `corner_segments` steps per corner.
pub fn rounded_rect_mesh(size: Vec2, radius: f32, corner_segments: u32) -> Mesh {
    let half = size / 2.0;
    let r = radius.min(half.x).min(half.y);
    let corners = [
        (Vec2::new(half.x - r, half.y - r), 0.0),
        (Vec2::new(-half.x + r, half.y - r), PI / 2.0),
        (Vec2::new(-half.x + r, -half.y + r), PI),
        (Vec2::new(half.x - r, -half.y + r), 3.0 * PI / 2.0),
    ];

    let mut outline: Vec<Vec2> = Vec::new();
    for (center, start) in corners {
        outline.extend(arc_points(center, r, start, start + PI / 2.0, corner_segments));
    }

    let mut positions: Vec<[f32; 3]> = vec![[0.0, 0.0, 0.0]];
    positions.extend(outline.iter().map(|p| [p.x, p.y, 0.0]));
    let n = outline.len() as u32;

    let mut indices: Vec<u32> = Vec::with_capacity(n as usize * 3);
    for i in 0..n {
        indices.extend_from_slice(&[0, 1 + i, 1 + (i + 1) % n]);
    }

    build_mesh(positions, indices, size)
}

/// Thick polyline strokes: one quad per segment, all in a single mesh.
pub fn stroke_mesh(polylines: &[Vec<Vec2>], width: f32) -> Mesh {
    let half = width / 2.0;
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut extent = Vec2::ONE;

    for line in polylines {
        for pair in line.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let normal = (b - a).perp().normalize_or_zero() * half;
            let base = positions.len() as u32;
            for p in [a + normal, a - normal, b - normal, b + normal] {
                positions.push([p.x, p.y, 0.0]);
                extent = extent.max(p.abs() * 2.0);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    build_mesh(positions, indices, extent)
}

fn build_mesh(positions: Vec<[f32; 3]>, indices: Vec<u32>, extent: Vec2) -> Mesh {
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| [p[0] / extent.x + 0.5, p[1] / extent.y + 0.5])
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::state::app::StatesPlugin;

    fn brick_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_state(GameState::Playing);
        app.add_message::<CollisionEvent>();
        app.add_message::<LevelCleared>();
        app.insert_resource(GameConfig::default());
        app.insert_resource(Scoreboard::default());
        app.insert_resource(GameRng::seeded(7));
        app.add_systems(PostUpdate, ball_brick_hit_system);
        app
    }

    fn spawn_test_brick(app: &mut App, x: i32, y: i32, kind: BrickKind) -> Entity {
        app.world_mut()
            .spawn((Brick { grid: IVec2::new(x, y) }, kind))
            .id()
    }

    fn spawn_test_ball(app: &mut App, linvel: Vec2) -> Entity {
        app.world_mut()
            .spawn((Ball, Transform::default(), Velocity::linear(linvel)))
            .id()
    }

    fn hit(app: &mut App, ball: Entity, brick: Entity) {
        app.world_mut().write_message(CollisionEvent::Started(
            brick,
            ball,
            bevy_rapier2d::rapier::geometry::CollisionEventFlags::empty(),
        ));
    }

    fn cleared_count(app: &App) -> usize {
        let messages = app.world().resource::<Messages<LevelCleared>>();
        messages.iter_current_update_messages().count()
    }

    fn score(app: &App) -> u32 {
        app.world().resource::<Scoreboard>().score
    }

    #[test]
    fn plain_hit_destroys_and_scores() {
        let mut app = brick_test_app();
        let ball = spawn_test_ball(&mut app, Vec2::new(200.0, 200.0));
        let target = spawn_test_brick(&mut app, 0, 0, BrickKind::Plain);
        let other = spawn_test_brick(&mut app, 5, 0, BrickKind::Plain);

        hit(&mut app, ball, target);
        app.update();

        assert!(app.world().get_entity(target).is_err());
        assert!(app.world().get_entity(other).is_ok());
        assert_eq!(score(&app), 10);
        assert_eq!(cleared_count(&app), 0);
    }

    #[test]
    fn duplicate_events_score_once() {
        let mut app = brick_test_app();
        let ball = spawn_test_ball(&mut app, Vec2::new(200.0, 200.0));
        let target = spawn_test_brick(&mut app, 0, 0, BrickKind::Plain);
        spawn_test_brick(&mut app, 5, 0, BrickKind::Plain);

        hit(&mut app, ball, target);
        hit(&mut app, ball, target);
        app.update();

        assert_eq!(score(&app), 10);
    }

    #[test]
    fn bomb_clears_its_eight_neighbours() {
        let mut app = brick_test_app();
        let ball = spawn_test_ball(&mut app, Vec2::new(200.0, 200.0));
        let bomb = spawn_test_brick(&mut app, 3, 2, BrickKind::Bomb);
        let mut neighbours = Vec::new();
        for offset in NEIGHBOR_OFFSETS {
            let g = IVec2::new(3, 2) + offset;
            neighbours.push(spawn_test_brick(&mut app, g.x, g.y, BrickKind::Plain));
        }
        let far = spawn_test_brick(&mut app, 5, 2, BrickKind::Plain);

        hit(&mut app, ball, bomb);
        app.update();

        for n in neighbours {
            assert!(app.world().get_entity(n).is_err());
        }
        assert!(app.world().get_entity(far).is_ok());
        assert_eq!(score(&app), 90);
    }

    #[test]
    fn blasted_spring_does_not_redirect_ball() {
        let mut app = brick_test_app();
        let ball = spawn_test_ball(&mut app, Vec2::new(200.0, 200.0));
        let bomb = spawn_test_brick(&mut app, 1, 1, BrickKind::Bomb);
        spawn_test_brick(&mut app, 2, 1, BrickKind::Spring);
        spawn_test_brick(&mut app, 9, 9, BrickKind::Plain);

        hit(&mut app, ball, bomb);
        app.update();

        let v = app.world().get::<Velocity>(ball).unwrap().linvel;
        assert_eq!(v, Vec2::new(200.0, 200.0));
        assert_eq!(score(&app), 20);
    }

    #[test]
    fn spring_keeps_ball_speed() {
        let mut app = brick_test_app();
        let ball = spawn_test_ball(&mut app, Vec2::new(300.0, -400.0));
        let spring = spawn_test_brick(&mut app, 0, 0, BrickKind::Spring);
        spawn_test_brick(&mut app, 8, 0, BrickKind::Plain);

        hit(&mut app, ball, spring);
        app.update();

        let v = app.world().get::<Velocity>(ball).unwrap().linvel;
        assert!((v.length() - 500.0).abs() < 1e-2, "speed {}", v.length());
        assert_eq!(score(&app), 10);
    }

    #[test]
    fn last_brick_writes_level_cleared() {
        let mut app = brick_test_app();
        let ball = spawn_test_ball(&mut app, Vec2::new(200.0, 200.0));
        let only = spawn_test_brick(&mut app, 0, 0, BrickKind::Plain);

        hit(&mut app, ball, only);
        app.update();

        assert_eq!(cleared_count(&app), 1);
    }

    #[test]
    fn bomb_blast_can_clear_the_level() {
        let mut app = brick_test_app();
        let ball = spawn_test_ball(&mut app, Vec2::new(200.0, 200.0));
        let bomb = spawn_test_brick(&mut app, 4, 4, BrickKind::Bomb);
        spawn_test_brick(&mut app, 5, 5, BrickKind::Plain);
        spawn_test_brick(&mut app, 3, 4, BrickKind::Spring);

        hit(&mut app, ball, bomb);
        app.update();

        assert_eq!(score(&app), 30);
        assert_eq!(cleared_count(&app), 1);
    }

    #[test]
    fn events_without_ball_are_ignored() {
        let mut app = brick_test_app();
        let a = spawn_test_brick(&mut app, 0, 0, BrickKind::Plain);
        let b = spawn_test_brick(&mut app, 1, 0, BrickKind::Plain);

        hit(&mut app, a, b);
        app.update();

        assert!(app.world().get_entity(a).is_ok());
        assert!(app.world().get_entity(b).is_ok());
        assert_eq!(score(&app), 0);
    }

    #[test]
    fn blast_targets_ignores_far_and_skipped_bricks() {
        let mut world = World::new();
        let near = world.spawn_empty().id();
        let skipped = world.spawn_empty().id();
        let far = world.spawn_empty().id();
        let mut skip = HashSet::new();
        skip.insert(skipped);

        let targets = blast_targets(
            IVec2::new(2, 2),
            [
                (near, IVec2::new(1, 3)),
                (skipped, IVec2::new(2, 3)),
                (far, IVec2::new(4, 2)),
            ],
            &skip,
        );
        assert_eq!(targets, vec![near]);
    }

    #[test]
    fn regenerate_replaces_bricks_without_assets() {
        let mut app = brick_test_app();
        let stale = spawn_test_brick(&mut app, 0, 0, BrickKind::Plain);

        let spawned = app
            .world_mut()
            .run_system_once(
                move |mut commands: Commands,
                      config: Res<GameConfig>,
                      mut rng: ResMut<GameRng>| {
                    regenerate_level(&mut commands, [stale], 1, &config, &mut rng, None)
                },
            )
            .unwrap();

        assert_eq!(spawned, 50);
        assert!(app.world().get_entity(stale).is_err());
        let mut bricks = app.world_mut().query::<&Brick>();
        assert_eq!(bricks.iter(app.world()).count(), 50);
    }

    #[test]
    fn rounded_rect_is_a_closed_fan() {
        let mesh = rounded_rect_mesh(Vec2::new(70.0, 25.0), 3.0, 4);
        // 4 corners × 5 points + centre
        assert_eq!(mesh.count_vertices(), 21);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(20 * 3));
    }

    #[test]
    fn stroke_has_one_quad_per_segment() {
        let mesh = stroke_mesh(
            &[
                vec![Vec2::ZERO, Vec2::X, Vec2::new(1.0, 1.0)],
                vec![Vec2::ZERO, Vec2::Y],
            ],
            2.0,
        );
        assert_eq!(mesh.count_vertices(), 12);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(18));
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(palette_color(0), palette_color(6));
        assert_eq!(palette_color(0), Color::srgb_u8(0xe7, 0x4c, 0x3c));
    }
}
