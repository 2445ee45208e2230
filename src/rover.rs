//! Rover state and spatial operations: facing directions and positions.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A compass facing direction.
///
/// The four variants form a fixed cycle (see [`Direction::CYCLE`]); rotation
/// commands step through that cycle and never leave it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Failed to parse a [`Direction`] from external text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction {0:?}, expected one of N, E, S, W")]
pub struct ParseDirectionError(pub char);

impl Direction {
    /// The clockwise rotation order. A right turn steps forward through this
    /// cycle, a left turn steps backward, both wrapping at the ends.
    pub const CYCLE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn cycle_index(self) -> i32 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Steps `delta` places through [`Direction::CYCLE`] with wraparound.
    ///
    /// Uses `rem_euclid` so a negative step (a left turn from `North`) still
    /// lands on a valid index rather than a negative one.
    pub fn stepped(self, delta: i32) -> Self {
        let idx = (self.cycle_index() + delta).rem_euclid(Self::CYCLE.len() as i32);
        Self::CYCLE[idx as usize]
    }

    /// The direction one quarter turn counter-clockwise.
    pub fn turned_left(self) -> Self {
        self.stepped(-1)
    }

    /// The direction one quarter turn clockwise.
    pub fn turned_right(self) -> Self {
        self.stepped(1)
    }

    /// The unit cell displacement of a single advance in this direction.
    pub fn unit_step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, 1),
            Direction::East => IVec2::new(1, 0),
            Direction::South => IVec2::new(0, -1),
            Direction::West => IVec2::new(-1, 0),
        }
    }

    /// Parses a single compass letter (`N`, `E`, `S`, `W`).
    pub fn from_char(c: char) -> Result<Self, ParseDirectionError> {
        match c {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            other => Err(ParseDirectionError(other)),
        }
    }

    /// The single compass letter for this direction.
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_char(c),
            _ => Err(ParseDirectionError(s.chars().next().unwrap_or('\0'))),
        }
    }
}

/// The rover's full spatial state: a grid cell plus a facing direction.
///
/// Positions are plain values. Every operation returns a new `Position`;
/// two positions with equal fields are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// The occupied grid cell. The grid origin is `(0, 0)` at the bottom left.
    pub cell: IVec2,

    /// The current facing direction.
    pub heading: Direction,
}

impl Position {
    /// Creates a position at `(x, y)` facing `heading`.
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            cell: IVec2::new(x, y),
            heading,
        }
    }

    /// The same cell with the heading rotated one quarter turn counter-clockwise.
    pub fn turned_left(self) -> Self {
        Self {
            heading: self.heading.turned_left(),
            ..self
        }
    }

    /// The same cell with the heading rotated one quarter turn clockwise.
    pub fn turned_right(self) -> Self {
        Self {
            heading: self.heading.turned_right(),
            ..self
        }
    }

    /// The cell one step ahead in the current heading, heading unchanged.
    ///
    /// Performs no boundary check; validation is the simulator's concern.
    pub fn advanced(self) -> Self {
        Self {
            cell: self.cell + self.heading.unit_step(),
            ..self
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.cell.x, self.cell.y, self.heading)
    }
}
