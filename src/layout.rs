//! Procedural brick layouts.
//!
//! Six layouts cycle with the level number (level 7 is classic rows again).
//! Every layout is generated in row-major order; each cell gets one uniform
//! roll that decides whether it becomes a bomb, a spring or a plain brick.
//!
//! | Level | Layout       | Cells                                     |
//! |-------|--------------|-------------------------------------------|
//! | 1     | Classic rows | 5 × 10                                    |
//! | 2     | Pyramid      | 8 rows, `10 - row` bricks, half-step shift|
//! | 3     | Checkerboard | 6 × 10, `(row + col)` even                |
//! | 4     | Diamond      | 9 rows, `9 - 2·|row - 4|` bricks          |
//! | 5     | Walls        | 7 × 10, outer columns + top three rows    |
//! | 6     | Cross        | 7 × 10, columns 4–5 + row 3               |
//!
//! ## Special-brick roll
//!
//! With `u ∈ [0, 1)`:
//! - `u < bomb` and no bomb in the 8 neighbouring grid cells → bomb
//! - otherwise `u < bomb + spring` → spring
//! - otherwise plain
//!
//! A cell that rolls a bomb next to an existing bomb therefore becomes a
//! spring, and no two bombs are 8-connected neighbours.  The checkerboard is
//! the exception: its cells only touch diagonally and every bomb roll stands.
//!
//! Grid coordinates are logical: the pyramid's `grid_x = col + row` does not
//! line up with its half-step visual offset, and blasts follow the grid.

use crate::config::GameConfig;
use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

/// The 8 grid offsets surrounding a cell.
pub const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
    IVec2::new(-1, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(1, 1),
];

/// What happens when the ball destroys a brick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickKind {
    /// Destroyed, nothing else.
    Plain,
    /// Also destroys every brick in the 8 surrounding grid cells.
    Bomb,
    /// Sends the ball off at a random angle, same speed.
    Spring,
}

/// One brick to spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickSpec {
    /// Logical grid cell, used for bomb adjacency.
    pub grid: IVec2,
    /// Centre in screen space.
    pub center: Vec2,
    pub kind: BrickKind,
    /// Index into [`crate::constants::BRICK_PALETTE`]; only drawn for plain bricks.
    pub color_index: usize,
}

/// The six level shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    ClassicRows,
    Pyramid,
    Checkerboard,
    Diamond,
    Walls,
    Cross,
}

/// A cell of a layout before the special-brick roll.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    row: i32,
    col: i32,
    grid_x: i32,
    /// Horizontal shift of the row, in brick pitches.
    shift: f32,
    color_index: usize,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 6] = [
        LayoutKind::ClassicRows,
        LayoutKind::Pyramid,
        LayoutKind::Checkerboard,
        LayoutKind::Diamond,
        LayoutKind::Walls,
        LayoutKind::Cross,
    ];

    /// Layout used for a 1-based level number.  Level 0 is treated as level 1.
    pub fn for_level(level: u32) -> Self {
        let idx = level.saturating_sub(1) as usize % Self::ALL.len();
        Self::ALL[idx]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ClassicRows => "classic rows",
            Self::Pyramid => "pyramid",
            Self::Checkerboard => "checkerboard",
            Self::Diamond => "diamond",
            Self::Walls => "walls",
            Self::Cross => "cross",
        }
    }

    /// Whether a bomb roll next to an earlier bomb is demoted.  The
    /// checkerboard takes every bomb roll as rolled.
    pub fn spaces_bombs(self) -> bool {
        self != Self::Checkerboard
    }

    fn cells(self) -> Vec<Cell> {
        let mut cells = Vec::new();
        let plain = |row: i32, col: i32, color_index: usize| Cell {
            row,
            col,
            grid_x: col,
            shift: 0.0,
            color_index,
        };

        match self {
            Self::ClassicRows => {
                for row in 0..5 {
                    for col in 0..10 {
                        cells.push(plain(row, col, row as usize));
                    }
                }
            }
            Self::Pyramid => {
                for row in 0..8 {
                    for col in 0..(10 - row) {
                        cells.push(Cell {
                            row,
                            col,
                            grid_x: col + row,
                            shift: row as f32 * 0.5,
                            color_index: row as usize % 6,
                        });
                    }
                }
            }
            Self::Checkerboard => {
                for row in 0..6 {
                    for col in 0..10 {
                        if (row + col) % 2 == 0 {
                            cells.push(plain(row, col, row as usize % 6));
                        }
                    }
                }
            }
            Self::Diamond => {
                for row in 0..9i32 {
                    let distance = (row - 4).abs();
                    for col in 0..(9 - distance * 2) {
                        cells.push(Cell {
                            row,
                            col,
                            grid_x: col + distance,
                            shift: distance as f32,
                            color_index: distance as usize % 6,
                        });
                    }
                }
            }
            Self::Walls => {
                for row in 0..7 {
                    for col in 0..10 {
                        if col == 0 || col == 9 || row < 3 {
                            cells.push(plain(row, col, row as usize % 6));
                        }
                    }
                }
            }
            Self::Cross => {
                for row in 0..7 {
                    for col in 0..10 {
                        if col == 4 || col == 5 || row == 3 {
                            cells.push(plain(row, col, (row + col) as usize % 6));
                        }
                    }
                }
            }
        }
        cells
    }
}

/// Geometry and odds the generator needs, extracted from [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Screen-space centre of grid cell (0, 0).
    pub origin: Vec2,
    /// Distance between neighbouring brick centres.
    pub pitch: Vec2,
    pub bomb_chance: f64,
    pub spring_chance: f64,
}

impl From<&GameConfig> for LayoutParams {
    fn from(config: &GameConfig) -> Self {
        Self {
            origin: Vec2::new(config.brick_origin_x, config.brick_origin_y),
            pitch: config.brick_pitch(),
            bomb_chance: config.bomb_chance,
            spring_chance: config.spring_chance,
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

/// `true` if any of the 8 cells around `grid` already holds a bomb.
pub fn has_adjacent_bomb(bombs: &HashSet<IVec2>, grid: IVec2) -> bool {
    NEIGHBOR_OFFSETS
        .iter()
        .any(|offset| bombs.contains(&(grid + *offset)))
}

/// Generate the bricks for `level`.
pub fn generate_layout<R: Rng + ?Sized>(
    level: u32,
    params: &LayoutParams,
    rng: &mut R,
) -> Vec<BrickSpec> {
    let shape = LayoutKind::for_level(level);
    let cells = shape.cells();
    let spaced = shape.spaces_bombs();
    let mut bombs: HashSet<IVec2> = HashSet::new();
    let mut bricks = Vec::with_capacity(cells.len());

    for cell in cells {
        let grid = IVec2::new(cell.grid_x, cell.row);
        let center = Vec2::new(
            params.origin.x + (cell.shift + cell.col as f32) * params.pitch.x,
            params.origin.y + cell.row as f32 * params.pitch.y,
        );

        let roll: f64 = rng.gen();
        let blocked = spaced && has_adjacent_bomb(&bombs, grid);
        let kind = if roll < params.bomb_chance && !blocked {
            bombs.insert(grid);
            BrickKind::Bomb
        } else if roll < params.bomb_chance + params.spring_chance {
            BrickKind::Spring
        } else {
            BrickKind::Plain
        };

        bricks.push(BrickSpec {
            grid,
            center,
            kind,
            color_index: cell.color_index,
        });
    }

    bricks
}
