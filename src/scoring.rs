//! Score, lives, level and ball-speed bookkeeping.
//!
//! [`Scoreboard`] is the single source of truth for progression.  Its methods
//! are plain arithmetic so the rules can be unit-tested without an `App`;
//! the flow systems in [`crate::flow`] call them and react to the outcome.

use crate::config::GameConfig;
use bevy::prelude::*;

/// Result of losing a life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeOutcome {
    /// Lives remain; the level restarts.
    Continue { lives_left: u32 },
    /// No lives remain.
    GameOver,
}

/// Progression state for the current run.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
    /// 1-based level number.
    pub level: u32,
    /// Launch speed per axis (px/s), always a whole number.
    pub ball_speed: f32,
    points_per_brick: u32,
    speed_multiplier: f32,
    starting_lives: u32,
    initial_speed: f32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl Scoreboard {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            level: 1,
            ball_speed: config.ball_initial_speed.floor(),
            points_per_brick: config.points_per_brick,
            speed_multiplier: config.ball_speed_multiplier,
            starting_lives: config.starting_lives,
            initial_speed: config.ball_initial_speed.floor(),
        }
    }

    /// Credit `bricks` destroyed bricks.  Returns the points added.
    pub fn award(&mut self, bricks: u32) -> u32 {
        let points = bricks.saturating_mul(self.points_per_brick);
        self.score = self.score.saturating_add(points);
        points
    }

    /// Remove one life.  Losing a life at zero lives stays at zero.
    pub fn lose_life(&mut self) -> LifeOutcome {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            LifeOutcome::GameOver
        } else {
            LifeOutcome::Continue {
                lives_left: self.lives,
            }
        }
    }

    /// Move to the next level and speed the ball up (floored to a whole number).
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.ball_speed = (self.ball_speed * self.speed_multiplier).floor();
    }

    /// Back to a fresh run: score 0, full lives, level 1, initial speed.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.starting_lives;
        self.level = 1;
        self.ball_speed = self.initial_speed;
    }

    /// Launch velocity in world space: right and up at `ball_speed` per axis.
    pub fn launch_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed, self.ball_speed)
    }
}

/// Syncs the scoreboard's tuning with a freshly loaded config.
///
/// Runs once at startup after [`crate::config::load_game_config`], before any
/// points are scored.
pub fn init_scoreboard(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(Scoreboard::from_config(&config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_run_defaults() {
        let s = Scoreboard::default();
        assert_eq!((s.score, s.lives, s.level), (0, 3, 1));
        assert_eq!(s.ball_speed, 200.0);
        assert_eq!(s.launch_velocity(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn award_adds_ten_per_brick() {
        let mut s = Scoreboard::default();
        assert_eq!(s.award(1), 10);
        assert_eq!(s.award(9), 90);
        assert_eq!(s.score, 100);
    }

    #[test]
    fn third_lost_life_is_game_over() {
        let mut s = Scoreboard::default();
        assert_eq!(s.lose_life(), LifeOutcome::Continue { lives_left: 2 });
        assert_eq!(s.lose_life(), LifeOutcome::Continue { lives_left: 1 });
        assert_eq!(s.lose_life(), LifeOutcome::GameOver);
        assert_eq!(s.lives, 0);
        assert_eq!(s.lose_life(), LifeOutcome::GameOver);
        assert_eq!(s.lives, 0);
    }

    #[test]
    fn speed_grows_by_a_quarter_and_floors() {
        let mut s = Scoreboard::default();
        let expected = [250.0, 312.0, 390.0, 487.0, 608.0];
        for want in expected {
            s.advance_level();
            assert_eq!(s.ball_speed, want);
        }
        assert_eq!(s.level, 6);
    }

    #[test]
    fn reset_restores_fresh_run_but_keeps_tuning() {
        let config = GameConfig {
            starting_lives: 5,
            ball_initial_speed: 150.0,
            ..Default::default()
        };
        let mut s = Scoreboard::from_config(&config);
        s.award(4);
        s.advance_level();
        s.lose_life();
        s.reset();
        assert_eq!((s.score, s.lives, s.level), (0, 5, 1));
        assert_eq!(s.ball_speed, 150.0);
    }
}
