//! Search module for the Morris AI
//!
//! Contains:
//! - Alpha-Beta minimax over cloned game states
//! - Greedy one-ply selectors for removals and fast placement

pub mod alphabeta;
pub mod greedy;

pub use alphabeta::{
    SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, MILL_MOVE_BONUS, TERMINAL_SCORE,
};
pub use greedy::{choose_placement, choose_removal};
