//! Weights for Nine Men's Morris evaluation
//!
//! Per-unit ordering matters more than the exact values: shallow searches
//! often tie, and the tie is then broken by which feature dominates.
//! Formed mill > double-mill point > near-mill > endgame material >
//! mobility > positional bonuses.

/// Evaluation weights
pub struct Weight;

impl Weight {
    /// Each formed mill
    pub const MILL: i32 = 300;
    /// Each empty point completing two or more near-mills at once
    pub const DOUBLE_MILL: i32 = 200;
    /// Each line with two own pieces and one empty point
    pub const NEAR_MILL: i32 = 120;

    /// Per piece of material once the opponent is down to four or fewer
    pub const PIECE_ENDGAME: i32 = 100;
    /// Per piece of material otherwise
    pub const PIECE: i32 = 50;
    /// Opponent on-board count at or below which material is boosted
    pub const ENDGAME_PIECES: u8 = 4;

    /// Per legal move
    pub const MOBILITY: i32 = 12;

    /// Per piece on a side midpoint
    pub const STRATEGIC: i32 = 10;
    /// Per piece on a ring holding three or more own pieces
    pub const CLUSTER: i32 = 4;

    /// Opponent cannot move and still has more than three pieces
    pub const LOCKOUT: i32 = 500;
    /// Opponent is one capture from losing while we are not
    pub const CLOSING: i32 = 200;
}
