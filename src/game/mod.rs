//! Core game module containing shared types, resources, constants, and the simulation schedule.

mod components;
mod constants;
mod resources;

pub use components::*;
pub use constants::*;
pub use resources::*;

use bevy::prelude::*;

use crate::fruit::Fruit;
use crate::grid::Grid;
use crate::snake::Snake;

/// Ordering of the per-tick simulation inside `FixedUpdate`. Input is read in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Movement,
    Collection,
}

/// Plugin that owns the game state and the tick ordering. Needs no window.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let grid = Grid::default();
        let mut rng = GameRng::from_os();
        let snake = Snake::new(grid.center());
        let fruit = Fruit::spawn(&grid, &mut rng.0);

        app.configure_sets(
            FixedUpdate,
            (SimulationSet::Movement, SimulationSet::Collection).chain(),
        )
        .insert_resource(grid)
        .insert_resource(snake)
        .insert_resource(fruit)
        .insert_resource(rng)
        .init_resource::<Heading>()
        .init_resource::<Score>()
        .init_resource::<MoveCadence>()
        .add_systems(Startup, log_startup);
    }
}

fn log_startup(grid: Res<Grid>, cadence: Res<MoveCadence>, snake: Res<Snake>, fruit: Res<Fruit>) {
    info!(
        "{}x{} grid, snake moves every {} frames, head at ({}, {}), fruit at ({}, {})",
        grid.cols(),
        grid.rows(),
        cadence.frames_to_wait,
        snake.head().row,
        snake.head().col,
        fruit.tile().row,
        fruit.tile().col,
    );
}
