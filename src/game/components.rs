//! Shared grid types and ECS marker components for the snake game.

use bevy::prelude::*;

/// A single addressable grid cell: its row, its column and its pixel footprint.
///
/// `rect` is in screen space: origin at the window's top-left corner, y growing downward.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

impl Tile {
    pub fn new(row: usize, col: usize, tile_size: f32) -> Self {
        let min = Vec2::new(col as f32 * tile_size, row as f32 * tile_size);
        Tile {
            row,
            col,
            rect: Rect::from_corners(min, min + Vec2::splat(tile_size)),
        }
    }

    /// Check if both tiles address the same grid cell.
    pub fn same_cell(&self, other: &Tile) -> bool {
        self.row == other.row && self.col == other.col
    }

    /// Row and column one step away in `direction`, or `None` if that would go below zero.
    pub fn step(&self, direction: Direction) -> Option<(usize, usize)> {
        let row = self.row.checked_add_signed(direction.y as isize)?;
        let col = self.col.checked_add_signed(direction.x as isize)?;
        Some((row, col))
    }
}

/// Unit movement vector: `x` is the column delta, `y` the row delta (negative is up).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Direction {
    pub x: i32,
    pub y: i32,
}

impl Direction {
    pub const NONE: Direction = Direction { x: 0, y: 0 };
    pub const RIGHT: Direction = Direction { x: 1, y: 0 };
    pub const LEFT: Direction = Direction { x: -1, y: 0 };
    pub const UP: Direction = Direction { x: 0, y: -1 };
    pub const DOWN: Direction = Direction { x: 0, y: 1 };

    /// Reads the arrow keys and returns the new heading.
    ///
    /// Keys are checked right, left, up, down and the last match wins, so a held
    /// down arrow overrides everything else. A key counts if it is held or was
    /// pressed this frame.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>, current: Direction) -> Direction {
        let held = |key: KeyCode| keyboard_input.pressed(key) || keyboard_input.just_pressed(key);

        let mut direction = current;
        if held(KeyCode::ArrowRight) {
            direction = Direction::RIGHT;
        }
        if held(KeyCode::ArrowLeft) {
            direction = Direction::LEFT;
        }
        if held(KeyCode::ArrowUp) {
            direction = Direction::UP;
        }
        if held(KeyCode::ArrowDown) {
            direction = Direction::DOWN;
        }
        direction
    }
}

/// Component to mark the sprite drawing one grid cell's fill.
#[derive(Component)]
pub struct GridCellSprite;

/// Component to mark one snake tile sprite; index 0 is the head, `i + 1` is body segment `i`.
#[derive(Component)]
pub struct SnakeSprite {
    pub index: usize,
}

/// Component to mark the fruit sprite.
#[derive(Component)]
pub struct FruitSprite;

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;
