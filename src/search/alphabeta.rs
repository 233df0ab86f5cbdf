//! Depth-bounded minimax with alpha-beta pruning
//!
//! This module implements the search used by the automated opponent.
//!
//! # Design
//!
//! - Fixed depth, no iterative deepening or time limit
//! - One fixed perspective: every leaf is scored for the root mover and the
//!   levels alternate between maximizing and minimizing that score
//! - Each branch owns a cloned `GameState`; nothing is made and unmade
//! - A move that forms a mill adds `MILL_MOVE_BONUS` for the root mover
//!   (subtracts it for the opponent) on top of the child score. The capture
//!   that follows is not played out inside the tree.
//! - Ties go to the first move in generation order
//!
//! # Example
//!
//! ```
//! use morris::search::Searcher;
//! use morris::{GameState, Player};
//!
//! let mut searcher = Searcher::new();
//! let state = GameState::new();
//!
//! let result = searcher.search(&state, Player::A, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::Player;
use crate::eval::evaluate;
use crate::rules::{forms_mill, legal_moves, play, Move};
use crate::state::GameState;

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u8 = 5;

/// Score returned when the side to act has no legal move
pub const TERMINAL_SCORE: i32 = 10_000;

/// Immediate credit for a move that completes a mill
pub const MILL_MOVE_BONUS: i32 = 200;

/// Bound for the alpha-beta window, well clear of any reachable score
const INF: i32 = 1_000_000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
    /// Leaves scored by the evaluator
    pub leaf_evals: u64,
    /// Nodes where the side to act had no legal move
    pub terminal_nodes: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` if the root mover had no legal move
    pub best_move: Option<Move>,
    /// Score of the best move from the root mover's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only per-search counters, so one instance can be reused across
/// searches and sides.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth` plies for the best move of `me`.
    ///
    /// `state` is left untouched. Depth 0 is treated as 1.
    /// Must not be called on a finished game.
    #[must_use]
    pub fn search(&mut self, state: &GameState, me: Player, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;
        self.stats = SearchStats::default();

        let (score, best_move) = self.minimax(state, me, depth, -INF, INF, true);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax over cloned states.
    ///
    /// `me` is the root mover; the side to act is `me` on maximizing levels
    /// and the opponent otherwise.
    fn minimax(
        &mut self,
        state: &GameState,
        me: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 {
            self.stats.leaf_evals += 1;
            return (evaluate(&state.board, &state.counts, me), None);
        }

        let mover = if maximizing { me } else { me.opponent() };
        let moves = legal_moves(state, mover);
        if moves.is_empty() {
            self.stats.terminal_nodes += 1;
            let score = if maximizing { -TERMINAL_SCORE } else { TERMINAL_SCORE };
            return (score, None);
        }

        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for mv in moves {
            let mut child = play(state, mover, mv);
            child.current = mover.opponent();

            let bonus = if forms_mill(&child.board, mv.destination(), mover) {
                if maximizing { MILL_MOVE_BONUS } else { -MILL_MOVE_BONUS }
            } else {
                0
            };

            // Shift the child's window by the bonus so its bounds stay
            // exact once the bonus is added back.
            let (child_score, _) = self.minimax(
                &child,
                me,
                depth - 1,
                alpha - bonus,
                beta - bonus,
                !maximizing,
            );
            let score = child_score + bonus;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}
