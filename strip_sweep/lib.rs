//! Batch driver for an external 1xN strip game solver.
//!
//! A [sweep](crate::sweep::Sweep) walks a range of board sizes, builds an
//! [opening strip](crate::board::Strip::opening) for each size, hands it to a
//! [solver](crate::solver::Solve) together with the [side to move](crate::player::Player)
//! and appends the solver output to an append-only [results log](crate::results::ResultsLog).

#![warn(missing_docs)]

pub mod board;
pub mod player;
pub mod results;
pub mod solver;
pub mod sweep;
