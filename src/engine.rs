//! Main AI engine integrating the search components
//!
//! The engine chooses moves and removals for the automated opponent:
//!
//! 1. **Placement**: alpha-beta search, or the one-ply greedy selector when
//!    configured with [`PlacementStrategy::Greedy`]
//! 2. **Moving / Flying**: alpha-beta search to the configured depth
//! 3. **Removal**: greedy selection among eligible opposing pieces
//!
//! # Example
//!
//! ```
//! use morris::{AIEngine, GameState, Player};
//!
//! // Use smaller depth for faster example
//! let mut engine = AIEngine::with_depth(2);
//! let state = GameState::new();
//!
//! let result = engine.choose_move_with_stats(&state, Player::A);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Player, Pos};
use crate::rules::Move;
use crate::search::{choose_placement, choose_removal, Searcher, DEFAULT_DEPTH};
use crate::state::{GameState, Phase};

/// How the engine places pieces during the Placing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Same alpha-beta search as the other phases
    #[default]
    Search,
    /// One-ply heuristic, much faster early in the game
    Greedy,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Alpha-beta depth in plies; 0 is treated as 1
    pub depth: u8,
    pub placement: PlacementStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            placement: PlacementStrategy::Search,
        }
    }
}

/// Which component produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    AlphaBeta,
    GreedyPlacement,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` if the side has no legal move
    pub best_move: Option<Move>,
    /// Search score from the mover's perspective (0 for greedy placement)
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn greedy(pos: Option<Pos>, time_ms: u64) -> Self {
        Self {
            best_move: pos.map(Move::Place),
            score: 0,
            search_type: SearchType::GreedyPlacement,
            time_ms,
            nodes: 1,
        }
    }
}

/// Automated opponent.
///
/// Stateless between calls apart from its configuration; the same engine
/// can play either side.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration (depth 5, search
    /// in every phase).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            config,
        }
    }

    /// Default configuration with a custom search depth
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self::with_config(EngineConfig {
            depth,
            ..EngineConfig::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for `me`. `None` if `me` has no legal move.
    #[must_use]
    pub fn choose_move(&mut self, state: &GameState, me: Player) -> Option<Move> {
        self.choose_move_with_stats(state, me).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// Must not be called on a finished game.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, state: &GameState, me: Player) -> MoveResult {
        let start = Instant::now();

        if state.phase(me) == Phase::Placing && self.config.placement == PlacementStrategy::Greedy
        {
            let pos = choose_placement(state, me);
            let result = MoveResult::greedy(pos, start.elapsed().as_millis() as u64);
            debug!(player = %me, mv = ?result.best_move, "greedy placement");
            return result;
        }

        let result = self.searcher.search(state, me, self.config.depth);
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            player = %me,
            mv = ?result.best_move,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "alpha-beta search finished"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// Choose which opposing piece `me` removes after forming a mill.
    /// `None` if the opponent has no piece on the board.
    #[must_use]
    pub fn choose_removal(&self, state: &GameState, me: Player) -> Option<Pos> {
        let pos = choose_removal(&state.board, me);
        debug!(player = %me, removal = ?pos, "removal chosen");
        pos
    }
}
