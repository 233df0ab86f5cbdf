//! Move representation, generation and application
//!
//! Generation order is fixed: ascending source point, then ascending
//! destination point. Search tie-breaking relies on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{is_adjacent, neighbors, Board, Occupant, ParsePosError, Player, Pos};
use crate::error::IllegalMove;
use crate::state::{GameState, Phase};

/// A move by the side to act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a piece from hand onto an empty point (Placing only)
    Place(Pos),
    /// Shift a piece: along a line while Moving, anywhere while Flying
    Relocate { from: Pos, to: Pos },
}

impl Move {
    /// Point the moved piece ends up on
    #[inline]
    pub fn destination(self) -> Pos {
        match self {
            Move::Place(pos) => pos,
            Move::Relocate { to, .. } => to,
        }
    }

    #[inline]
    pub fn source(self) -> Option<Pos> {
        match self {
            Move::Place(_) => None,
            Move::Relocate { from, .. } => Some(from),
        }
    }
}

/// `5` for a placement, `1-2` for a relocation
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "{pos}"),
            Move::Relocate { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

impl FromStr for Move {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((from, to)) => Ok(Move::Relocate {
                from: from.parse()?,
                to: to.parse()?,
            }),
            None => Ok(Move::Place(s.parse()?)),
        }
    }
}

/// All legal moves for `player` in `state`
pub fn legal_moves(state: &GameState, player: Player) -> Vec<Move> {
    moves_for(&state.board, state.phase(player), player)
}

/// Legal moves for `player` on `board` given their phase
pub fn moves_for(board: &Board, phase: Phase, player: Player) -> Vec<Move> {
    match phase {
        Phase::Placing => board.empty_points().map(Move::Place).collect(),
        Phase::Moving => board
            .pieces(player)
            .flat_map(|from| {
                neighbors(from)
                    .filter(|&to| board.is_empty(to))
                    .map(move |to| Move::Relocate { from, to })
            })
            .collect(),
        Phase::Flying => board
            .pieces(player)
            .flat_map(|from| board.empty_points().map(move |to| Move::Relocate { from, to }))
            .collect(),
    }
}

/// Number of legal moves, without building them
pub fn mobility(board: &Board, phase: Phase, player: Player) -> i32 {
    let empty = board.count_of(Occupant::Empty) as i32;
    match phase {
        Phase::Placing => empty,
        Phase::Moving => board
            .pieces(player)
            .map(|from| neighbors(from).filter(|&to| board.is_empty(to)).count() as i32)
            .sum(),
        Phase::Flying => board.count(player) as i32 * empty,
    }
}

/// Check whether `player` has any legal move.
///
/// Outside the Placing phase a player without one has lost.
pub fn has_any_legal_move(state: &GameState, player: Player) -> bool {
    let board = &state.board;
    let any_empty = board.empty_points().next().is_some();
    match state.phase(player) {
        Phase::Placing => any_empty,
        Phase::Moving => board
            .pieces(player)
            .any(|from| neighbors(from).any(|to| board.is_empty(to))),
        Phase::Flying => any_empty && board.pieces(player).next().is_some(),
    }
}

/// Check a move for `player` against the board and their phase
pub fn validate_move(state: &GameState, player: Player, mv: Move) -> Result<(), IllegalMove> {
    let board = &state.board;
    let phase = state.phase(player);
    match (phase, mv) {
        (Phase::Placing, Move::Place(pos)) => {
            if !board.is_empty(pos) {
                return Err(IllegalMove::Occupied(pos));
            }
        }
        (Phase::Moving | Phase::Flying, Move::Relocate { from, to }) => {
            if !board.is_owned_by(from, player) {
                return Err(IllegalMove::NotOwnPiece(from));
            }
            if !board.is_empty(to) {
                return Err(IllegalMove::Occupied(to));
            }
            if phase == Phase::Moving && !is_adjacent(from, to) {
                return Err(IllegalMove::NotAdjacent { from, to });
            }
        }
        _ => return Err(IllegalMove::WrongPhase { phase, mv }),
    }
    Ok(())
}

/// Apply a move for `player`, returning the new state.
///
/// Counters are updated; mill removal and turn order are left to the
/// caller. `state` is never modified, including on rejection.
pub fn apply_move(state: &GameState, player: Player, mv: Move) -> Result<GameState, IllegalMove> {
    validate_move(state, player, mv)?;
    Ok(play(state, player, mv))
}

/// Apply a move already known to be legal
pub(crate) fn play(state: &GameState, player: Player, mv: Move) -> GameState {
    let mut next = state.clone();
    match mv {
        Move::Place(pos) => {
            next.board.set(pos, player.into());
            let counts = next.counts_mut(player);
            counts.remaining -= 1;
            counts.on_board += 1;
        }
        Move::Relocate { from, to } => {
            next.board.set(from, Occupant::Empty);
            next.board.set(to, player.into());
        }
    }
    next
}
