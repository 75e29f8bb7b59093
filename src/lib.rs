//! Optimal solver for the sliding-tile (N-puzzle) problem.
//!
//! A [`Board`] is an immutable puzzle position that keeps its Hamming and
//! Manhattan distances up to date as slides are applied. A [`Solver`] runs
//! an A* search from the board and, in lock-step, from its twin; whichever
//! reaches the goal first decides whether the board can be solved.

pub mod board;
pub mod config;
pub mod error;
pub mod frontier;
pub mod input;
pub mod moves;
pub mod node;
pub mod render;
pub mod scramble;
pub mod solver;

pub use board::Board;
pub use config::{DuplicateCheck, SolverConfig};
pub use error::{BoardError, Error, Result};
pub use moves::Move;
pub use solver::{Outcome, SearchStats, Solver};
