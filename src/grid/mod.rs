//! Grid plugin - the fixed board of tiles and its background render pass.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    CELL_FILL_COLOR, CELL_OUTLINE_COLOR, COLS, GridCellSprite, OUTLINE_THICKNESS, ROWS, TILE_SIZE,
    Tile, Z_GRID, Z_GRID_OUTLINE,
};
use crate::rendering::tile_translation;

/// A tile together with the colors it is drawn with.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub tile: Tile,
    pub fill_color: Color,
    pub outline_color: Color,
}

/// The board: `rows * cols` cells stored row-major.
#[derive(Resource, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tile_size: f32,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(ROWS, COLS, TILE_SIZE as f32)
    }
}

impl Grid {
    pub fn new(rows: usize, cols: usize, tile_size: f32) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell {
                    tile: Tile::new(row, col, tile_size),
                    fill_color: CELL_FILL_COLOR,
                    outline_color: CELL_OUTLINE_COLOR,
                });
            }
        }

        Grid {
            rows,
            cols,
            tile_size,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.cell(row, col).map(|cell| cell.tile)
    }

    /// The tile in the middle of the board.
    pub fn center(&self) -> Tile {
        Tile::new(self.rows / 2, self.cols / 2, self.tile_size)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

/// Plugin for drawing the board.
pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_grid_cells);
    }
}

/// Spawns a filled square and an outline for every cell.
fn spawn_grid_cells(mut commands: Commands, grid: Res<Grid>) {
    let size = Vec2::splat(grid.tile_size());

    for cell in grid.cells() {
        commands.spawn((
            Sprite {
                color: cell.fill_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(tile_translation(&cell.tile, Z_GRID)),
            GridCellSprite,
        ));

        commands.spawn(ShapeBundle::rect(
            &ShapeConfig {
                color: cell.outline_color,
                hollow: true,
                thickness: OUTLINE_THICKNESS,
                transform: Transform::from_translation(tile_translation(
                    &cell.tile,
                    Z_GRID_OUTLINE,
                )),
                ..ShapeConfig::default_2d()
            },
            size,
        ));
    }
}
