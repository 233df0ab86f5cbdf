//! Board storage: one occupant per point, no rules

use std::fmt;

use super::{Occupant, Player, Pos, NUM_POSITIONS, RING_SIZE};

/// Occupancy of the 24 points.
///
/// `Clone` copies the whole cell array, so a cloned board never shares
/// state with the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Occupant; NUM_POSITIONS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Occupant::Empty; NUM_POSITIONS],
        }
    }

    /// Build a board from lists of point ids for each side
    ///
    /// # Example
    ///
    /// ```
    /// use morris::{Board, Occupant, Pos};
    ///
    /// let board = Board::from_layout(&[0, 1], &[9]);
    /// assert_eq!(board.get(Pos::new(1)), Occupant::A);
    /// assert_eq!(board.get(Pos::new(9)), Occupant::B);
    /// ```
    pub fn from_layout(a: &[u8], b: &[u8]) -> Self {
        let mut board = Self::new();
        for &id in a {
            board.set(Pos::new(id), Occupant::A);
        }
        for &id in b {
            board.set(Pos::new(id), Occupant::B);
        }
        board
    }

    /// Get occupant at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Occupant {
        self.cells[pos.to_index()]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, occupant: Occupant) {
        self.cells[pos.to_index()] = occupant;
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    #[inline]
    pub fn is_owned_by(&self, pos: Pos, player: Player) -> bool {
        self.get(pos) == Occupant::from(player)
    }

    /// Number of points holding `occupant`
    #[inline]
    pub fn count_of(&self, occupant: Occupant) -> u8 {
        self.cells.iter().filter(|&&cell| cell == occupant).count() as u8
    }

    /// Pieces of `player` on the board
    #[inline]
    pub fn count(&self, player: Player) -> u8 {
        self.count_of(player.into())
    }

    /// Points held by `player`, ascending
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        let occupant = Occupant::from(player);
        Pos::all().filter(move |&pos| self.get(pos) == occupant)
    }

    /// Empty points, ascending
    pub fn empty_points(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Pieces of `player` on ring `ring`
    pub fn ring_count(&self, ring: usize, player: Player) -> u8 {
        let occupant = Occupant::from(player);
        self.cells[ring * RING_SIZE..(ring + 1) * RING_SIZE]
            .iter()
            .filter(|&&cell| cell == occupant)
            .count() as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per ring, outer first, points in id order
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 3] = ["outer", "middle", "inner"];
        for (ring, name) in NAMES.iter().enumerate() {
            write!(f, "{name:>6} ")?;
            for cell in &self.cells[ring * RING_SIZE..(ring + 1) * RING_SIZE] {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
