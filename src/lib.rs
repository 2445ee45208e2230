//! # rover-grid
//!
//! A deterministic simulation core for a rover moving on a bounded rectangular grid.
//!
//! The rover interprets a string of single-character commands: `L`/`R` rotate it in
//! place through the cycle North → East → South → West, `A` advances it one cell in
//! its facing direction, and anything else is silently dropped. Moves that would
//! leave the grid are rejected without moving the rover, and the run continues from
//! the unchanged position.
//!
//! The entry point is [`RoverSimulator`]. Construct it with [`MapBounds`], then call
//! [`RoverSimulator::run`] with a command string and a starting [`Position`] to get
//! the ordered [`MoveOutcome`] history, one entry per recognized command.

pub mod command;
pub mod rover;
pub mod simulator;

pub use command::*;
pub use rover::*;
pub use simulator::*;
