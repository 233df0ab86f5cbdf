//! Nine Men's Morris rules engine and AI opponent
//!
//! A rules core and search-based computer player for Nine Men's Morris:
//! - 24 points on three concentric rings, 16 fixed mill lines
//! - Placing, Moving and Flying phases derived from piece counts
//! - Forming a mill removes an opposing piece (mill-protected pieces excepted)
//! - A player loses below three pieces or when unable to move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Points, players, topology tables and board storage
//! - [`state`]: Piece counts, derived phases and the full game state
//! - [`rules`]: Mill detection, removal eligibility, move generation
//! - [`eval`]: Position evaluation and heuristics
//! - [`search`]: Alpha-beta search and greedy selectors
//! - [`engine`]: Main AI engine integrating the search components
//! - [`game`]: Turn order, removal protocol and the session controller
//!
//! # Quick Start
//!
//! ```
//! use morris::{AIEngine, GameController, Move, Player, Pos, Stage};
//!
//! // Shallow search keeps the doc test fast
//! let mut game = GameController::new(AIEngine::with_depth(2));
//!
//! game.apply_move(Move::Place(Pos::new(0))).unwrap();
//!
//! // AI responds as B
//! let turn = game.choose_and_apply_automated_move().unwrap();
//! assert!(turn.mv.is_some());
//! assert_eq!(game.status().stage, Stage::Placing(Player::A));
//! ```
//!
//! All rule functions take a `&GameState` and return a fresh state, so a
//! rejected move or removal never leaves a half-applied change behind.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod state;

// Re-export commonly used types for convenience
pub use board::{Board, Occupant, Player, Pos, NUM_POSITIONS, PIECES_PER_PLAYER};
pub use engine::{AIEngine, EngineConfig, MoveResult, PlacementStrategy, SearchType};
pub use error::{Error, IllegalMove, IllegalRemoval};
pub use game::{
    apply_player_move, apply_removal, current_status, new_game, removable_positions,
    AutomatedTurn, GameController, HistoryEntry, Stage, Status,
};
pub use rules::{legal_moves, Move};
pub use state::{GameState, Phase, PieceCounts};
