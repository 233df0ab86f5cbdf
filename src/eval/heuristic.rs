//! Heuristic evaluation function for Nine Men's Morris positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! The score is a weighted sum of independent features, each computed
//! for both sides and differenced.
//!
//! Two terms are deliberately one-sided (lockout and closing): they reward
//! the evaluating side only. The search keeps one fixed perspective for the
//! whole tree, so the score is not expected to be antisymmetric.

use crate::board::{Board, Player, NUM_POSITIONS, RING_SIZE};
use crate::rules::{completable_lines, count_mills, count_near_mills, mobility};
use crate::state::{PieceCounts, Phase};

use super::weights::Weight;

const RINGS: usize = NUM_POSITIONS / RING_SIZE;

/// Evaluate the position from the perspective of `me`.
///
/// Positive values favour `me`, negative values favour the opponent.
///
/// # Arguments
/// * `board` - The current board
/// * `counts` - Piece counts indexed by `Player::index`
/// * `me` - The side to evaluate for
#[must_use]
pub fn evaluate(board: &Board, counts: &[PieceCounts; 2], me: Player) -> i32 {
    let opp = me.opponent();
    let mine = counts[me.index()];
    let theirs = counts[opp.index()];

    let material = material_score(mine, theirs);

    let mills = (count_mills(board, me) - count_mills(board, opp)) * Weight::MILL;
    let near_mills =
        (count_near_mills(board, me) - count_near_mills(board, opp)) * Weight::NEAR_MILL;
    let double_mills =
        (double_mill_points(board, me) - double_mill_points(board, opp)) * Weight::DOUBLE_MILL;

    let my_mobility = mobility(board, mine.phase(), me);
    let opp_mobility = mobility(board, theirs.phase(), opp);
    let mobility_score = (my_mobility - opp_mobility) * Weight::MOBILITY;

    let lockout = lockout_bonus(opp_mobility, theirs);

    let strategic = (strategic_count(board, me) - strategic_count(board, opp)) * Weight::STRATEGIC;
    let cluster = (cluster_score(board, me) - cluster_score(board, opp)) * Weight::CLUSTER;

    material + mills + near_mills + double_mills + mobility_score + lockout + strategic + cluster
        + closing_bonus(mine, theirs)
}

/// Material difference. Each piece is worth more once the opponent is
/// close to the three-piece loss threshold.
fn material_score(mine: PieceCounts, theirs: PieceCounts) -> i32 {
    let weight = if theirs.on_board <= Weight::ENDGAME_PIECES {
        Weight::PIECE_ENDGAME
    } else {
        Weight::PIECE
    };
    (i32::from(mine.on_board) - i32::from(theirs.on_board)) * weight
}

/// Count empty points that would complete two or more near-mills of
/// `player` at once. A single defender cannot cover both.
pub fn double_mill_points(board: &Board, player: Player) -> i32 {
    board
        .empty_points()
        .filter(|&pos| completable_lines(board, pos, player) >= 2)
        .count() as i32
}

/// Pieces of `player` on side midpoints
fn strategic_count(board: &Board, player: Player) -> i32 {
    board.pieces(player).filter(|pos| pos.is_strategic()).count() as i32
}

/// Sum of piece counts over rings holding three or more pieces of `player`
fn cluster_score(board: &Board, player: Player) -> i32 {
    (0..RINGS)
        .map(|ring| board.ring_count(ring, player))
        .filter(|&n| n >= 3)
        .map(i32::from)
        .sum()
}

/// Bonus when the opponent is immobilized with more than three pieces,
/// i.e. about to lose by blockade rather than by attrition
fn lockout_bonus(opp_mobility: i32, theirs: PieceCounts) -> i32 {
    if opp_mobility == 0 && theirs.on_board > 3 {
        Weight::LOCKOUT
    } else {
        0
    }
}

/// Bonus when the opponent is done placing and down to three pieces while
/// we still have more
fn closing_bonus(mine: PieceCounts, theirs: PieceCounts) -> i32 {
    if theirs.phase() != Phase::Placing && theirs.on_board == 3 && mine.on_board > 3 {
        Weight::CLOSING
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::state::GameState;

    fn eval(state: &GameState, me: Player) -> i32 {
        evaluate(&state.board, &state.counts, me)
    }

    #[test]
    fn test_evaluate_empty_board() {
        let state = GameState::new();
        assert_eq!(eval(&state, Player::A), 0);
        assert_eq!(eval(&state, Player::B), 0);
    }

    #[test]
    fn test_evaluate_mirror_placement_is_even() {
        // same shape on two rings
        let board = Board::from_layout(&[0, 1], &[8, 9]);
        let state = GameState::from_position(board, Player::A, [7, 7]);
        assert_eq!(eval(&state, Player::A), 0);
        assert_eq!(eval(&state, Player::B), 0);
    }

    #[test]
    fn test_formed_mill_scores_above_near_mill() {
        let mill_board = Board::from_layout(&[0, 1, 2], &[]);
        let near_board = Board::from_layout(&[0, 1, 4], &[]);
        let mill = GameState::from_position(mill_board, Player::B, [6, 9]);
        let near = GameState::from_position(near_board, Player::B, [6, 9]);
        assert!(eval(&mill, Player::A) > eval(&near, Player::A));
    }

    #[test]
    fn test_double_mill_points() {
        // 0-1-_ and 4-3-_ both complete at 2
        let board = Board::from_layout(&[0, 1, 3, 4], &[]);
        assert_eq!(double_mill_points(&board, Player::A), 1);
        assert_eq!(double_mill_points(&board, Player::B), 0);

        let blocked = Board::from_layout(&[0, 1, 3, 4], &[2]);
        assert_eq!(double_mill_points(&blocked, Player::A), 0);
    }

    #[test]
    fn test_material_boost_near_endgame() {
        let plain = material_score(
            PieceCounts { remaining: 0, on_board: 7 },
            PieceCounts { remaining: 0, on_board: 6 },
        );
        let boosted = material_score(
            PieceCounts { remaining: 0, on_board: 5 },
            PieceCounts { remaining: 0, on_board: 4 },
        );
        assert_eq!(plain, Weight::PIECE);
        assert_eq!(boosted, Weight::PIECE_ENDGAME);
    }

    #[test]
    fn test_lockout_bonus() {
        // B on 0, 2, 4, 6 with every neighbor taken by A
        let board = Board::from_layout(&[1, 3, 5, 7, 9, 11], &[0, 2, 4, 6]);
        let state = GameState::from_position(board, Player::A, [0, 0]);
        assert_eq!(mobility(&state.board, Phase::Moving, Player::B), 0);

        assert_eq!(lockout_bonus(0, state.counts(Player::B)), Weight::LOCKOUT);
        assert_eq!(lockout_bonus(0, PieceCounts { remaining: 0, on_board: 3 }), 0);
        assert_eq!(lockout_bonus(2, state.counts(Player::B)), 0);
        assert!(eval(&state, Player::A) > Weight::LOCKOUT);
    }

    #[test]
    fn test_closing_bonus_requires_finished_placement() {
        let three = PieceCounts { remaining: 0, on_board: 3 };
        let placing = PieceCounts { remaining: 4, on_board: 3 };
        let strong = PieceCounts { remaining: 0, on_board: 6 };
        assert_eq!(closing_bonus(strong, three), Weight::CLOSING);
        assert_eq!(closing_bonus(strong, placing), 0);
        assert_eq!(closing_bonus(three, three), 0);
    }

    #[test]
    fn test_strategic_and_cluster() {
        let board = Board::from_layout(&[1, 3, 5, 0], &[16]);
        assert_eq!(strategic_count(&board, Player::A), 3);
        assert_eq!(cluster_score(&board, Player::A), 4);
        assert_eq!(cluster_score(&board, Player::B), 0);
        assert!(Pos::new(16).ring() == 2);
    }
}
