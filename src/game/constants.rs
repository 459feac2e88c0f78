//! Game constants for window size, grid layout, timing, colors, and rendering layers.

use bevy::prelude::*;

// Window dimensions (logical pixels)
pub const WINDOW_WIDTH: u32 = 1500;
pub const WINDOW_HEIGHT: u32 = 1000;
pub const WINDOW_TITLE: &str = "Snake";

// Grid layout
pub const TILE_SIZE: u32 = 50;
pub const ROWS: usize = (WINDOW_HEIGHT / TILE_SIZE) as usize;
pub const COLS: usize = (WINDOW_WIDTH / TILE_SIZE) as usize;
pub const OUTLINE_THICKNESS: f32 = 2.0;

// Timing
pub const TARGET_FPS: u32 = 60;
pub const MOVES_PER_SECOND: u32 = 5;
pub const FRAMES_PER_MOVE: u32 = TARGET_FPS / MOVES_PER_SECOND;

// Score text
pub const SCORE_FONT_SIZE: f32 = 50.0;
pub const SCORE_TOP: f32 = 6.0;
pub const SCORE_LEFT: f32 = WINDOW_WIDTH as f32 / 2.0 - 6.0 * 25.0;

// Colors
pub const BACKGROUND_COLOR: Color = Color::WHITE;
pub const CELL_FILL_COLOR: Color = Color::srgb(130.0 / 255.0, 130.0 / 255.0, 130.0 / 255.0);
pub const CELL_OUTLINE_COLOR: Color = Color::WHITE;
pub const SNAKE_COLOR: Color = Color::srgb(0.0, 228.0 / 255.0, 48.0 / 255.0);
pub const FRUIT_COLOR: Color = Color::srgb(0.0, 121.0 / 255.0, 241.0 / 255.0);
pub const SCORE_COLOR: Color = Color::BLACK;

// Z-index constants for rendering layers
pub const Z_GRID: f32 = 0.0;
pub const Z_GRID_OUTLINE: f32 = 0.1;
pub const Z_SNAKE: f32 = 1.0;
pub const Z_FRUIT: f32 = 2.0;
