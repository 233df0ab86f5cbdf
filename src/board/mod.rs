//! Board representation for Nine Men's Morris

pub mod board;
pub mod topology;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;
pub use topology::{all_mills, is_adjacent, mills_containing, neighbors, Mill};

/// Number of points on the board (three rings of eight)
pub const NUM_POSITIONS: usize = 24;

/// Points per ring
pub const RING_SIZE: usize = 8;

/// Pieces each player starts the game with
pub const PIECES_PER_PLAYER: u8 = 9;

/// The two sides. Player A moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Index into per-player arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => f.write_str("A"),
            Player::B => f.write_str("B"),
        }
    }
}

/// Contents of a single point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    A,
    B,
}

impl Occupant {
    /// Owner of the piece, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::A => Some(Player::A),
            Occupant::B => Some(Player::B),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// Board symbol used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::A => 'A',
            Occupant::B => 'B',
        }
    }
}

impl From<Player> for Occupant {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::A => Occupant::A,
            Player::B => Occupant::B,
        }
    }
}

/// A point on the board, 0-23.
///
/// Ring `r` holds ids `8r..8r+8`, numbered clockwise from the top-left
/// corner: even offsets are corners, odd offsets are side midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pos(u8);

impl Pos {
    #[inline]
    pub const fn new(id: u8) -> Self {
        debug_assert!((id as usize) < NUM_POSITIONS);
        Self(id)
    }

    /// Checked constructor
    #[inline]
    pub fn try_new(id: u8) -> Option<Self> {
        ((id as usize) < NUM_POSITIONS).then_some(Self(id))
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    /// Ring number: 0 outer, 1 middle, 2 inner
    #[inline]
    pub fn ring(self) -> usize {
        self.to_index() / RING_SIZE
    }

    /// Side midpoints join the spokes between rings and sit on more
    /// lines than corners do.
    #[inline]
    pub fn is_strategic(self) -> bool {
        self.0 % 2 == 1
    }

    /// All points in ascending order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..NUM_POSITIONS as u8).map(Pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Pos {
    type Error = ParsePosError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Pos::try_new(id).ok_or(ParsePosError::OutOfRange(id.into()))
    }
}

impl From<Pos> for u8 {
    fn from(pos: Pos) -> u8 {
        pos.0
    }
}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u32 = s
            .trim()
            .parse()
            .map_err(|_| ParsePosError::NotANumber(s.trim().to_string()))?;
        u8::try_from(id)
            .ok()
            .and_then(Pos::try_new)
            .ok_or(ParsePosError::OutOfRange(id))
    }
}

/// Failure to read a position from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePosError {
    NotANumber(String),
    OutOfRange(u32),
}

impl fmt::Display for ParsePosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePosError::NotANumber(s) => write!(f, "'{s}' is not a position number"),
            ParsePosError::OutOfRange(id) => {
                write!(f, "position {id} is out of range (0-{})", NUM_POSITIONS - 1)
            }
        }
    }
}

impl std::error::Error for ParsePosError {}
