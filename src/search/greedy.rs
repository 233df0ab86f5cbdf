//! One-ply selectors outside the minimax tree
//!
//! - Removal: which opposing piece to take after forming a mill
//! - Placement: a fast alternative to full search while placing

use crate::board::{mills_containing, Board, Player, Pos};
use crate::eval::evaluate;
use crate::rules::{forms_mill, is_removable, line_counts, play, Move};
use crate::state::GameState;

/// Per line through the candidate holding two or more opposing pieces
const REMOVAL_LINE: i32 = 50;
/// Candidate sits on a side midpoint
const REMOVAL_STRATEGIC: i32 = 20;

const PLACE_MILL: i32 = 400;
const PLACE_DOUBLE_SETUP: i32 = 150;
const PLACE_STRATEGIC: i32 = 15;
const PLACE_BLOCK: i32 = 80;
const PLACE_COMPLETE: i32 = 60;

/// Pick the opposing piece for `me` to remove.
///
/// Only pieces eligible under the mill-protection rule are considered.
/// Pieces on opposing near-mills and on midpoints score highest; ties go to
/// the lowest position. `None` if the opponent has no pieces.
pub fn choose_removal(board: &Board, me: Player) -> Option<Pos> {
    let victim = me.opponent();
    let mut best: Option<(Pos, i32)> = None;

    for pos in board.pieces(victim) {
        if !is_removable(board, pos, victim) {
            continue;
        }
        let score = removal_score(board, pos, victim);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}

fn removal_score(board: &Board, pos: Pos, victim: Player) -> i32 {
    let lines = mills_containing(pos)
        .iter()
        .filter(|mill| line_counts(board, mill, victim).0 >= 2)
        .count() as i32;
    let strategic = if pos.is_strategic() { REMOVAL_STRATEGIC } else { 0 };
    lines * REMOVAL_LINE + strategic
}

/// Pick a placement point for `me` by one-ply lookahead.
///
/// Each empty point is scored by the evaluation after placing there plus
/// bonuses for forming a mill, setting up two lines at once, taking a
/// midpoint, blocking an opposing near-mill and extending an own near-mill.
pub fn choose_placement(state: &GameState, me: Player) -> Option<Pos> {
    let board = &state.board;
    let opp = me.opponent();
    let mut best: Option<(Pos, i32)> = None;

    for pos in board.empty_points() {
        let next = play(state, me, Move::Place(pos));
        let mut score = evaluate(&next.board, &next.counts, me);

        if forms_mill(&next.board, pos, me) {
            score += PLACE_MILL;
        }

        let lines = mills_containing(pos);
        let setups = lines
            .iter()
            .filter(|mill| line_counts(board, mill, me) == (1, 2))
            .count();
        if setups >= 2 {
            score += PLACE_DOUBLE_SETUP;
        }
        if pos.is_strategic() {
            score += PLACE_STRATEGIC;
        }
        if lines.iter().any(|mill| line_counts(board, mill, opp) == (2, 1)) {
            score += PLACE_BLOCK;
        }
        if lines.iter().any(|mill| line_counts(board, mill, me) == (2, 1)) {
            score += PLACE_COMPLETE;
        }

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}
