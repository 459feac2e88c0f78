//! Game resources (singleton state).

use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use super::{Direction, FRAMES_PER_MOVE};

/// The direction the snake will take on its next move.
#[derive(Resource, Default, Debug)]
pub struct Heading {
    pub direction: Direction,
}

/// Number of fruits eaten so far.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

/// Frame-count throttle between snake moves.
#[derive(Resource, Debug)]
pub struct MoveCadence {
    pub frame_counter: u32,
    pub frames_to_wait: u32,
}

impl Default for MoveCadence {
    fn default() -> Self {
        MoveCadence {
            frame_counter: 0,
            frames_to_wait: FRAMES_PER_MOVE,
        }
    }
}

impl MoveCadence {
    /// Count one frame. Returns true (and starts counting again) when a move is due.
    pub fn tick(&mut self) -> bool {
        self.frame_counter += 1;
        if self.frame_counter >= self.frames_to_wait {
            self.frame_counter = 0;
            true
        } else {
            false
        }
    }
}

/// Random source for fruit placement.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_os() -> Self {
        GameRng(StdRng::from_os_rng())
    }
}
