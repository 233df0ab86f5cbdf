//! Game state shared by the rules, evaluator, search and controller

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, PIECES_PER_PLAYER};

/// Per-player sub-game mode, always derived from piece counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces remain to be placed
    Placing,
    /// Relocation along board lines only
    Moving,
    /// Relocation to any empty point, at exactly three pieces
    Flying,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placing => f.write_str("placing"),
            Phase::Moving => f.write_str("moving"),
            Phase::Flying => f.write_str("flying"),
        }
    }
}

/// Piece bookkeeping for one player.
///
/// `remaining + on_board + removed() == PIECES_PER_PLAYER` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceCounts {
    /// Pieces still in hand
    pub remaining: u8,
    /// Pieces on the board
    pub on_board: u8,
}

impl PieceCounts {
    pub const INITIAL: PieceCounts = PieceCounts {
        remaining: PIECES_PER_PLAYER,
        on_board: 0,
    };

    /// Pieces captured by the opponent
    #[inline]
    pub fn removed(self) -> u8 {
        PIECES_PER_PLAYER.saturating_sub(self.remaining + self.on_board)
    }

    /// Pieces still in play, in hand or on the board
    #[inline]
    pub fn in_play(self) -> u8 {
        self.remaining + self.on_board
    }

    #[inline]
    pub fn phase(self) -> Phase {
        if self.remaining > 0 {
            Phase::Placing
        } else if self.on_board == 3 {
            Phase::Flying
        } else {
            Phase::Moving
        }
    }
}

impl Default for PieceCounts {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Complete state of one game.
///
/// Search clones this per branch; no two branches share a state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    /// Side to act
    pub current: Player,
    /// Indexed by `Player::index`
    pub counts: [PieceCounts; 2],
    /// Player who formed a mill and must now remove an opposing piece
    pub pending_removal: Option<Player>,
    pub winner: Option<Player>,
}

impl GameState {
    /// Empty board, nine pieces in hand each, A to place
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::A,
            counts: [PieceCounts::INITIAL; 2],
            pending_removal: None,
            winner: None,
        }
    }

    /// State for an arbitrary board, with `remaining` pieces in hand per
    /// player (indexed by `Player::index`). On-board counts come from the board.
    pub fn from_position(board: Board, current: Player, remaining: [u8; 2]) -> Self {
        let counts = Player::ALL.map(|player| PieceCounts {
            remaining: remaining[player.index()],
            on_board: board.count(player),
        });
        Self {
            board,
            current,
            counts,
            pending_removal: None,
            winner: None,
        }
    }

    #[inline]
    pub fn counts(&self, player: Player) -> PieceCounts {
        self.counts[player.index()]
    }

    #[inline]
    pub fn counts_mut(&mut self, player: Player) -> &mut PieceCounts {
        &mut self.counts[player.index()]
    }

    #[inline]
    pub fn phase(&self, player: Player) -> Phase {
        self.counts(player).phase()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_phase_from_counts() {
        let placing = PieceCounts { remaining: 1, on_board: 3 };
        let flying = PieceCounts { remaining: 0, on_board: 3 };
        let moving = PieceCounts { remaining: 0, on_board: 7 };
        let short = PieceCounts { remaining: 0, on_board: 2 };

        assert_eq!(placing.phase(), Phase::Placing);
        assert_eq!(flying.phase(), Phase::Flying);
        assert_eq!(moving.phase(), Phase::Moving);
        assert_eq!(short.phase(), Phase::Moving);
    }

    #[test]
    fn test_removed_is_implicit() {
        let counts = PieceCounts { remaining: 2, on_board: 4 };
        assert_eq!(counts.removed(), 3);
        assert_eq!(counts.in_play(), 6);
        assert_eq!(PieceCounts::INITIAL.removed(), 0);
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.current, Player::A);
        assert_eq!(state.phase(Player::A), Phase::Placing);
        assert_eq!(state.phase(Player::B), Phase::Placing);
        assert_eq!(state.board.count_of(crate::board::Occupant::Empty), 24);
        assert!(!state.is_over());
    }

    #[test]
    fn test_from_position_counts_board() {
        let board = Board::from_layout(&[0, 1, 2], &[8, 9, 10, 11]);
        let state = GameState::from_position(board, Player::B, [0, 0]);
        assert_eq!(state.counts(Player::A).on_board, 3);
        assert_eq!(state.phase(Player::A), Phase::Flying);
        assert_eq!(state.phase(Player::B), Phase::Moving);
        assert_eq!(state.counts(Player::B).removed(), 5);
        assert!(state.board.is_owned_by(Pos::new(11), Player::B));
    }
}
