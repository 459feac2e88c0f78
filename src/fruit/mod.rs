//! Fruit plugin - handles fruit placement and collection by the snake.

use bevy::prelude::*;
use rand::Rng;

use crate::game::{GameRng, Score, SimulationSet, Tile};
use crate::grid::Grid;
use crate::snake::Snake;

/// The single fruit on the board. Collecting it moves it elsewhere.
#[derive(Resource, Debug, Clone)]
pub struct Fruit {
    tile: Tile,
}

impl Fruit {
    /// Places a fruit on a uniformly random tile. Tiles under the snake are not excluded.
    pub fn spawn(grid: &Grid, rng: &mut impl Rng) -> Self {
        Fruit::at(random_tile(grid, rng))
    }

    pub fn at(tile: Tile) -> Self {
        Fruit { tile }
    }

    pub fn tile(&self) -> Tile {
        self.tile
    }

    pub fn respawn(&mut self, grid: &Grid, rng: &mut impl Rng) {
        self.tile = random_tile(grid, rng);
    }

    /// If the snake's head is on the fruit, grows the snake, moves the fruit and
    /// returns `score + 1`. Otherwise returns `score` and changes nothing.
    pub fn collect(
        &mut self,
        snake: &mut Snake,
        grid: &Grid,
        score: u32,
        rng: &mut impl Rng,
    ) -> u32 {
        if !self.tile.same_cell(&snake.head()) {
            return score;
        }

        snake.grow();
        self.respawn(grid, rng);
        score + 1
    }
}

fn random_tile(grid: &Grid, rng: &mut impl Rng) -> Tile {
    let row = rng.random_range(0..grid.rows());
    let col = rng.random_range(0..grid.cols());
    Tile::new(row, col, grid.tile_size())
}

/// Plugin for fruit-related systems.
pub struct FruitPlugin;

impl Plugin for FruitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            fruit_collection.in_set(SimulationSet::Collection),
        );
    }
}

/// System to detect the snake's head on the fruit and apply growth and scoring.
fn fruit_collection(
    mut fruit: ResMut<Fruit>,
    mut snake: ResMut<Snake>,
    mut score: ResMut<Score>,
    mut rng: ResMut<GameRng>,
    grid: Res<Grid>,
) {
    if !fruit.tile().same_cell(&snake.head()) {
        return;
    }

    score.0 = fruit.collect(&mut snake, &grid, score.0, &mut rng.0);
    debug!(
        "Fruit collected, score {}, snake length {}, next fruit at ({}, {})",
        score.0,
        snake.body_len(),
        fruit.tile().row,
        fruit.tile().col
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, Direction, ROWS};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn respawn_stays_on_the_grid() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut fruit = Fruit::spawn(&grid, &mut rng);

        for _ in 0..2_000 {
            fruit.respawn(&grid, &mut rng);
            let tile = fruit.tile();
            assert!(tile.row < ROWS);
            assert!(tile.col < COLS);
            assert_eq!(Some(tile), grid.tile(tile.row, tile.col));
        }
    }

    #[test]
    fn respawn_reaches_every_edge() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut fruit = Fruit::spawn(&grid, &mut rng);
        let (mut rows, mut cols) = (vec![false; ROWS], vec![false; COLS]);

        for _ in 0..5_000 {
            fruit.respawn(&grid, &mut rng);
            rows[fruit.tile().row] = true;
            cols[fruit.tile().col] = true;
        }

        assert!(rows.iter().all(|seen| *seen));
        assert!(cols.iter().all(|seen| *seen));
    }

    #[test]
    fn head_on_fruit_grows_respawns_and_scores() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut snake = Snake::new(grid.center());
        let mut fruit = Fruit::at(grid.center());

        let score = fruit.collect(&mut snake, &grid, 4, &mut rng);

        assert_eq!(score, 5);
        assert_eq!(snake.body_len(), 1);
        assert!(fruit.tile().row < ROWS && fruit.tile().col < COLS);
    }

    #[test]
    fn head_elsewhere_changes_nothing() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut snake = Snake::new(grid.center());
        let start = grid.tile(11, 16).expect("tile on grid");
        let mut fruit = Fruit::at(start);

        let score = fruit.collect(&mut snake, &grid, 2, &mut rng);

        assert_eq!(score, 2);
        assert_eq!(snake.body_len(), 0);
        assert_eq!(fruit.tile(), start);
    }

    #[test]
    fn collects_from_every_approach() {
        let grid = Grid::default();
        let target = grid.tile(6, 6).expect("tile on grid");

        for (row, col, step) in [
            (6, 5, Direction::RIGHT),
            (6, 7, Direction::LEFT),
            (7, 6, Direction::UP),
            (5, 6, Direction::DOWN),
        ] {
            let mut rng = StdRng::seed_from_u64(row as u64 * 31 + col as u64);
            let mut snake = Snake::new(grid.tile(row, col).expect("tile on grid"));
            let mut fruit = Fruit::at(target);
            let mut direction = step;

            assert_eq!(fruit.collect(&mut snake, &grid, 0, &mut rng), 0);
            snake.advance(&mut direction, &grid);
            assert_eq!(fruit.collect(&mut snake, &grid, 0, &mut rng), 1);
            assert_eq!(snake.body_len(), 1);
        }
    }

    #[test]
    fn body_length_tracks_score() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut snake = Snake::new(grid.center());
        let mut score = 0;

        for _ in 0..10 {
            let mut fruit = Fruit::at(snake.head());
            score = fruit.collect(&mut snake, &grid, score, &mut rng);
            assert_eq!(snake.body_len(), score as usize);
        }
        assert_eq!(score, 10);
    }
}
