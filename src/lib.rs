//! An 8-puzzle solver: IDA* search with the Manhattan-distance heuristic.

pub mod board;
pub mod heuristic;
pub mod search;

pub use board::{Board, Move, SIDE};
pub use heuristic::{Heuristic, Manhattan};
pub use search::{Outcome, SearchReport, Solver, MAX_DEPTH};
