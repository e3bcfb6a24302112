//! HUD: score/level/lives labels and the per-state overlay cards.
//!
//! ## Systems (registered by `HudPlugin`)
//!
//! | System                     | Schedule                 | Purpose                           |
//! |----------------------------|--------------------------|-----------------------------------|
//! | `setup_hud`                | `Startup`                | Spawn the three top-row labels    |
//! | `hud_refresh_system`       | `Update`                 | Rewrite labels when score changes |
//! | `spawn_serve_prompt`       | `OnEnter(Serving)`       | "Click or Press SPACE to …"       |
//! | `spawn_level_complete_card`| `OnEnter(LevelComplete)` | Level summary + new speed         |
//! | `spawn_game_over_card`     | `OnEnter(GameOver)`      | "GAME OVER" + restart hint        |
//!
//! Every overlay is despawned on the matching `OnExit`.
//!
//! UI `Val::Px` units are logical pixels from the window's top-left, so the
//! screen-space layout numbers apply directly.

use crate::bricks::hex;
use crate::config::GameConfig;
use crate::constants::{PROMPT_FONT_SIZE, TITLE_FONT_SIZE};
use crate::flow::{GameState, ServePrompt};
use crate::scoring::Scoreboard;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct LivesText;

/// Root of the serve prompt; despawned on `OnExit(Serving)`.
#[derive(Component)]
pub struct ServePromptRoot;

/// Root of the level-complete card; despawned on `OnExit(LevelComplete)`.
#[derive(Component)]
pub struct LevelCompleteRoot;

/// Root of the game-over card; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, hud_refresh_system)
            .add_systems(OnEnter(GameState::Serving), spawn_serve_prompt)
            .add_systems(OnExit(GameState::Serving), despawn_all::<ServePromptRoot>)
            .add_systems(
                OnEnter(GameState::LevelComplete),
                spawn_level_complete_card,
            )
            .add_systems(
                OnExit(GameState::LevelComplete),
                despawn_all::<LevelCompleteRoot>,
            )
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_card)
            .add_systems(OnExit(GameState::GameOver), despawn_all::<GameOverRoot>);
    }
}

// ── Text helpers ──────────────────────────────────────────────────────────────

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

pub fn level_label(level: u32) -> String {
    format!("Level: {level}")
}

pub fn lives_label(lives: u32) -> String {
    format!("Lives: {lives}")
}

/// Lines of the level-complete card.  Called after the scoreboard has already
/// advanced, so the completed level is `level - 1`.
pub fn level_complete_lines(scoreboard: &Scoreboard) -> [String; 4] {
    [
        format!("LEVEL {} COMPLETE!", scoreboard.level.saturating_sub(1)),
        format!("Next: Level {}", scoreboard.level),
        format!("Speed: {}", scoreboard.ball_speed),
        "Press SPACE to Continue".to_string(),
    ]
}

// ── Startup: labels ───────────────────────────────────────────────────────────

/// Spawn the score, level and lives labels along the top edge.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>, scoreboard: Res<Scoreboard>) {
    let font = TextFont {
        font_size: config.hud_font_size,
        ..default()
    };
    let at = |left: f32| Node {
        position_type: PositionType::Absolute,
        left: Val::Px(left),
        top: Val::Px(16.0),
        ..default()
    };

    commands.spawn((
        Text::new(score_label(scoreboard.score)),
        font.clone(),
        TextColor(Color::WHITE),
        at(16.0),
        ScoreText,
    ));
    commands.spawn((
        Text::new(level_label(scoreboard.level)),
        font.clone(),
        TextColor(Color::WHITE),
        at(350.0),
        LevelText,
    ));
    commands.spawn((
        Text::new(lives_label(scoreboard.lives)),
        font,
        TextColor(Color::WHITE),
        at(680.0),
        LivesText,
    ));
}

// ── Update: labels ────────────────────────────────────────────────────────────

/// Rewrite the three labels whenever the scoreboard changes.
#[allow(clippy::type_complexity)]
pub fn hud_refresh_system(
    scoreboard: Res<Scoreboard>,
    mut q_score: Query<&mut Text, (With<ScoreText>, Without<LevelText>, Without<LivesText>)>,
    mut q_level: Query<&mut Text, (With<LevelText>, Without<ScoreText>, Without<LivesText>)>,
    mut q_lives: Query<&mut Text, (With<LivesText>, Without<ScoreText>, Without<LevelText>)>,
) {
    if !scoreboard.is_changed() {
        return;
    }
    for mut text in q_score.iter_mut() {
        text.0 = score_label(scoreboard.score);
    }
    for mut text in q_level.iter_mut() {
        text.0 = level_label(scoreboard.level);
    }
    for mut text in q_lives.iter_mut() {
        text.0 = lives_label(scoreboard.lives);
    }
}

// ── Overlays ──────────────────────────────────────────────────────────────────

/// Spawn a full-window overlay root tagged with `marker`.
fn overlay_root(commands: &mut Commands, marker: impl Component) -> Entity {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            ZIndex(100),
            marker,
        ))
        .id()
}

/// A line of text horizontally centred, its middle at `center_y`.
fn centered_line(
    parent: &mut ChildSpawnerCommands<'_>,
    text: impl Into<String>,
    font_size: f32,
    color: Color,
    center_y: f32,
) {
    parent
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            top: Val::Px(center_y - font_size * 0.6),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(text),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(color),
            ));
        });
}

/// `OnEnter(Serving)`: show the start/continue prompt.
pub fn spawn_serve_prompt(mut commands: Commands, prompt: Res<ServePrompt>) {
    let root = overlay_root(&mut commands, ServePromptRoot);
    let text = prompt.text();
    commands.entity(root).with_children(|overlay| {
        centered_line(overlay, text, PROMPT_FONT_SIZE, Color::WHITE, 300.0);
    });
}

/// `OnEnter(LevelComplete)`: completed level, next level, new speed, hint.
pub fn spawn_level_complete_card(mut commands: Commands, scoreboard: Res<Scoreboard>) {
    let [title, next, speed, hint] = level_complete_lines(&scoreboard);
    let root = overlay_root(&mut commands, LevelCompleteRoot);
    commands.entity(root).with_children(|overlay| {
        centered_line(overlay, title, TITLE_FONT_SIZE, hex(0x2ecc71), 250.0);
        centered_line(overlay, next, 32.0, Color::WHITE, 320.0);
        centered_line(overlay, speed, 24.0, hex(0xf39c12), 370.0);
        centered_line(overlay, hint, 24.0, Color::WHITE, 420.0);
    });
}

/// `OnEnter(GameOver)`: "GAME OVER" and the restart hint.
pub fn spawn_game_over_card(mut commands: Commands) {
    let root = overlay_root(&mut commands, GameOverRoot);
    commands.entity(root).with_children(|overlay| {
        centered_line(overlay, "GAME OVER", TITLE_FONT_SIZE, hex(0xe74c3c), 300.0);
        centered_line(overlay, "Press R to Restart", 24.0, Color::WHITE, 360.0);
    });
}

/// Despawn every entity tagged `T` (children go with it).
pub fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
