//! Snake plugin - handles the snake's body, keyboard input, and throttled movement.

use std::mem;

use bevy::prelude::*;

use crate::game::{Direction, Heading, MoveCadence, SimulationSet, Tile};
use crate::grid::Grid;

/// The player's snake: a head tile followed by its body segments, nearest first.
#[derive(Resource, Debug, Clone)]
pub struct Snake {
    head: Tile,
    body: Vec<Tile>,
}

impl Snake {
    pub fn new(head: Tile) -> Self {
        Snake {
            head,
            body: Vec::new(),
        }
    }

    pub fn head(&self) -> Tile {
        self.head
    }

    pub fn body(&self) -> &[Tile] {
        &self.body
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Head first, then every body segment.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        std::iter::once(&self.head).chain(self.body())
    }

    /// Adds one segment at the tail. It sits on top of the old tail until the next move.
    pub fn grow(&mut self) {
        let tail = self.body.last().copied().unwrap_or(self.head);
        self.body.push(tail);
    }

    /// Moves the head one tile in `direction` and drags the body along.
    ///
    /// If the target tile is off the grid nothing moves and `direction` is reset
    /// to [`Direction::NONE`]. Returns whether the snake moved.
    pub fn advance(&mut self, direction: &mut Direction, grid: &Grid) -> bool {
        let Some(next) = self
            .head
            .step(*direction)
            .and_then(|(row, col)| grid.tile(row, col))
        else {
            *direction = Direction::NONE;
            return false;
        };

        let mut previous = mem::replace(&mut self.head, next);
        for segment in self.body.iter_mut() {
            previous = mem::replace(segment, previous);
        }
        true
    }
}

/// Plugin for snake input and movement systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, snake_movement_input).add_systems(
            FixedUpdate,
            snake_movement.in_set(SimulationSet::Movement),
        );
    }
}

/// System to read the arrow keys into the heading, once per rendered frame.
fn snake_movement_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut heading: ResMut<Heading>) {
    let direction = Direction::from_input(&keyboard_input, heading.direction);
    if direction != heading.direction {
        heading.direction = direction;
    }
}

/// System to move the snake once every `frames_to_wait` ticks.
fn snake_movement(
    mut cadence: ResMut<MoveCadence>,
    mut heading: ResMut<Heading>,
    mut snake: ResMut<Snake>,
    grid: Res<Grid>,
) {
    if !cadence.tick() {
        return;
    }

    let direction = heading.direction;
    if !snake.advance(&mut heading.direction, &grid) {
        debug!(
            "Move {:?} blocked at ({}, {})",
            direction,
            snake.head().row,
            snake.head().col
        );
    }
}
