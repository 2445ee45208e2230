//! Simulation driver that folds a command string over the rover's position.
//!
//! The entry point is [`RoverSimulator`]. Configure it with [`MapBounds`],
//! then call [`RoverSimulator::run`] with a raw command string and a starting
//! [`Position`]. The driver filters out unrecognized characters, executes the
//! retained commands one at a time through [`RoverSimulator::step`], and
//! returns one [`MoveOutcome`] per retained command.

use crate::command::{Command, filter_commands};
use crate::rover::Position;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The inclusive extent of the rectangular grid.
///
/// The grid spans `0..=width` by `0..=height` with the origin at the bottom
/// left. Bounds are not validated: a negative `width` or `height` simply
/// makes every cell invalid, including the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    /// Largest valid x coordinate.
    pub width: i32,

    /// Largest valid y coordinate.
    pub height: i32,
}

impl MapBounds {
    /// Creates bounds spanning `0..=width` by `0..=height`.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `cell` lies on the grid: `0 <= x <= width` and `0 <= y <= height`.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x <= self.width && cell.y >= 0 && cell.y <= self.height
    }
}

/// The result of executing one command: whether the move was accepted, and
/// the rover's position afterwards.
///
/// On rejection `position` is the unchanged prior position, never the
/// out-of-bounds candidate. A rejected move is ordinary data, not an error;
/// the run continues from `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// `true` if the command's candidate position was on the grid.
    pub accepted: bool,

    /// The rover's position after this step.
    pub position: Position,
}

impl MoveOutcome {
    /// An accepted move landing on `position`.
    pub fn accepted(position: Position) -> Self {
        Self {
            accepted: true,
            position,
        }
    }

    /// A rejected move leaving the rover at `position`.
    pub fn rejected(position: Position) -> Self {
        Self {
            accepted: false,
            position,
        }
    }
}

/// Interprets command strings to drive a rover across a bounded grid.
///
/// Stateless and reentrant: the simulator holds only the grid bounds, so a
/// single instance can run any number of independent simulations.
#[derive(Clone, Copy, Debug)]
pub struct RoverSimulator {
    bounds: MapBounds,
}

impl RoverSimulator {
    /// Creates a simulator for a grid with the given bounds.
    pub fn new(bounds: MapBounds) -> Self {
        Self { bounds }
    }

    /// The grid bounds this simulator validates against.
    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Executes a single command from `position`.
    ///
    /// The candidate position is computed first (rotation for `L`/`R`, a
    /// one-cell advance for `A`) and then validated against the bounds. The
    /// validation is applied uniformly to all three commands, so rotating on
    /// an off-grid cell is rejected just like an advance off the edge.
    /// Rotation never invalidates a cell that was already valid.
    pub fn step(&self, command: Command, position: Position) -> MoveOutcome {
        let candidate = match command {
            Command::RotateLeft => position.turned_left(),
            Command::RotateRight => position.turned_right(),
            Command::Advance => position.advanced(),
        };

        if self.bounds.contains(candidate.cell) {
            MoveOutcome::accepted(candidate)
        } else {
            MoveOutcome::rejected(position)
        }
    }

    /// Runs a raw command string from `start` and returns the full history.
    ///
    /// Unrecognized characters contribute no history entry. Each retained
    /// command is executed from the position of the previous outcome, whether
    /// or not that outcome was accepted, so the rover "bounces" off an edge
    /// and keeps interpreting. The history length always equals the number of
    /// recognized commands.
    pub fn run(&self, commands: &str, start: Position) -> Vec<MoveOutcome> {
        filter_commands(commands)
            .into_iter()
            .scan(start, |position, command| {
                let outcome = self.step(command, *position);
                *position = outcome.position;
                Some(outcome)
            })
            .collect()
    }
}
