//! Static board geometry: adjacency and the sixteen mill lines

use super::{Pos, NUM_POSITIONS};

/// Three points forming a line
pub type Mill = [Pos; 3];

const fn line(a: u8, b: u8, c: u8) -> Mill {
    [Pos::new(a), Pos::new(b), Pos::new(c)]
}

/// All mill lines: four per ring, then the four spokes across the rings
const MILLS: [Mill; 16] = [
    // Outer ring
    line(0, 1, 2),
    line(2, 3, 4),
    line(4, 5, 6),
    line(6, 7, 0),
    // Middle ring
    line(8, 9, 10),
    line(10, 11, 12),
    line(12, 13, 14),
    line(14, 15, 8),
    // Inner ring
    line(16, 17, 18),
    line(18, 19, 20),
    line(20, 21, 22),
    line(22, 23, 16),
    // Spokes
    line(1, 9, 17),
    line(3, 11, 19),
    line(5, 13, 21),
    line(7, 15, 23),
];

/// Indices into `MILLS` of the two lines through each point
const MILLS_AT: [[usize; 2]; NUM_POSITIONS] = [
    [0, 3], [0, 12], [0, 1], [1, 13], [1, 2], [2, 14], [2, 3], [3, 15],
    [4, 7], [4, 12], [4, 5], [5, 13], [5, 6], [6, 14], [6, 7], [7, 15],
    [8, 11], [8, 12], [8, 9], [9, 13], [9, 10], [10, 14], [10, 11], [11, 15],
];

/// Neighbor lists, each sorted ascending
const NEIGHBORS: [&[u8]; NUM_POSITIONS] = [
    &[1, 7],
    &[0, 2, 9],
    &[1, 3],
    &[2, 4, 11],
    &[3, 5],
    &[4, 6, 13],
    &[5, 7],
    &[0, 6, 15],
    &[9, 15],
    &[1, 8, 10, 17],
    &[9, 11],
    &[3, 10, 12, 19],
    &[11, 13],
    &[5, 12, 14, 21],
    &[13, 15],
    &[7, 8, 14, 23],
    &[17, 23],
    &[9, 16, 18],
    &[17, 19],
    &[11, 18, 20],
    &[19, 21],
    &[13, 20, 22],
    &[21, 23],
    &[15, 16, 22],
];

/// Points connected to `pos` by a board line, ascending
#[inline]
pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    NEIGHBORS[pos.to_index()].iter().map(|&id| Pos::new(id))
}

#[inline]
pub fn is_adjacent(a: Pos, b: Pos) -> bool {
    NEIGHBORS[a.to_index()].contains(&b.id())
}

/// The two mill lines passing through `pos`
#[inline]
pub fn mills_containing(pos: Pos) -> [&'static Mill; 2] {
    let [first, second] = MILLS_AT[pos.to_index()];
    [&MILLS[first], &MILLS[second]]
}

#[inline]
pub fn all_mills() -> &'static [Mill; 16] {
    &MILLS
}
