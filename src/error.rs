//! Typed rejections for moves and removals.
//!
//! A rejected request never modifies the state it was checked against.

use std::fmt;

use crate::board::Pos;
use crate::rules::Move;
use crate::state::Phase;

/// Why a move was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// The game has already been decided
    GameOver,
    /// The mover owes a removal before moving again
    RemovalPending,
    /// `Place` outside the Placing phase, or `Relocate` inside it
    WrongPhase { phase: Phase, mv: Move },
    /// Destination already holds a piece
    Occupied(Pos),
    /// Relocation source is not one of the mover's pieces
    NotOwnPiece(Pos),
    /// Destination is not connected to the source while Moving
    NotAdjacent { from: Pos, to: Pos },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "game is over"),
            IllegalMove::RemovalPending => write!(f, "a piece must be removed first"),
            IllegalMove::WrongPhase { phase, mv } => {
                write!(f, "move {mv} is not allowed in the {phase} phase")
            }
            IllegalMove::Occupied(pos) => write!(f, "position {pos} is occupied"),
            IllegalMove::NotOwnPiece(pos) => write!(f, "no own piece at position {pos}"),
            IllegalMove::NotAdjacent { from, to } => {
                write!(f, "position {to} is not adjacent to {from}")
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Why a removal was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalRemoval {
    GameOver,
    /// No mill was formed, so nothing may be removed
    NotPending,
    Empty(Pos),
    /// The piece belongs to the remover
    NotOpponent(Pos),
    /// The piece sits in a mill while the owner has pieces outside mills
    MillProtected(Pos),
}

impl fmt::Display for IllegalRemoval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalRemoval::GameOver => write!(f, "game is over"),
            IllegalRemoval::NotPending => write!(f, "no removal is pending"),
            IllegalRemoval::Empty(pos) => write!(f, "position {pos} is empty"),
            IllegalRemoval::NotOpponent(pos) => {
                write!(f, "piece at position {pos} is not an opponent piece")
            }
            IllegalRemoval::MillProtected(pos) => {
                write!(f, "piece at position {pos} is protected by a mill")
            }
        }
    }
}

impl std::error::Error for IllegalRemoval {}

/// Failures of the automated turn driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    IllegalMove(IllegalMove),
    IllegalRemoval(IllegalRemoval),
    /// The engine found nothing to play (game over or no legal action)
    NoAction,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalMove(e) => write!(f, "illegal move: {e}"),
            Error::IllegalRemoval(e) => write!(f, "illegal removal: {e}"),
            Error::NoAction => write!(f, "no action available"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IllegalMove(e) => Some(e),
            Error::IllegalRemoval(e) => Some(e),
            Error::NoAction => None,
        }
    }
}

impl From<IllegalMove> for Error {
    fn from(e: IllegalMove) -> Self {
        Error::IllegalMove(e)
    }
}

impl From<IllegalRemoval> for Error {
    fn from(e: IllegalRemoval) -> Self {
        Error::IllegalRemoval(e)
    }
}
