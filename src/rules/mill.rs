//! Mill detection and removal eligibility
//!
//! A mill is three pieces of one player on one of the sixteen lines.
//! Forming one entitles the mover to remove an opposing piece, but a piece
//! inside a formed mill is protected while its owner has any piece outside
//! a mill.

use crate::board::{all_mills, mills_containing, Board, Mill, Occupant, Player, Pos};

/// Count pieces of `player` and empty points on a line
#[inline]
pub fn line_counts(board: &Board, mill: &Mill, player: Player) -> (u8, u8) {
    let own = Occupant::from(player);
    mill.iter().fold((0, 0), |(mine, empty), &pos| match board.get(pos) {
        cell if cell == own => (mine + 1, empty),
        Occupant::Empty => (mine, empty + 1),
        _ => (mine, empty),
    })
}

/// Check whether any line through `pos` is fully held by `player`
#[inline]
pub fn forms_mill(board: &Board, pos: Pos, player: Player) -> bool {
    let own = Occupant::from(player);
    mills_containing(pos)
        .iter()
        .any(|mill| mill.iter().all(|&p| board.get(p) == own))
}

/// Check whether the piece at `pos` belongs to one of its owner's mills.
/// Empty points are never in a mill.
#[inline]
pub fn is_in_any_mill(board: &Board, pos: Pos) -> bool {
    board
        .get(pos)
        .player()
        .is_some_and(|owner| forms_mill(board, pos, owner))
}

/// Check whether `player` owns at least one piece outside every formed mill.
///
/// While this holds, only those pieces may be removed. Once every piece is
/// in a mill, protection is waived and any piece may be taken.
pub fn has_removable_pieces(board: &Board, player: Player) -> bool {
    board
        .pieces(player)
        .any(|pos| !forms_mill(board, pos, player))
}

/// Check whether the piece at `pos` may be removed from `victim`
pub fn is_removable(board: &Board, pos: Pos, victim: Player) -> bool {
    board.is_owned_by(pos, victim)
        && (!forms_mill(board, pos, victim) || !has_removable_pieces(board, victim))
}

/// Pieces of `victim` eligible for removal, ascending
pub fn removable_positions(board: &Board, victim: Player) -> Vec<Pos> {
    let waived = !has_removable_pieces(board, victim);
    board
        .pieces(victim)
        .filter(|&pos| waived || !forms_mill(board, pos, victim))
        .collect()
}

/// Number of lines fully held by `player`
pub fn count_mills(board: &Board, player: Player) -> i32 {
    all_mills()
        .iter()
        .filter(|mill| line_counts(board, mill, player).0 == 3)
        .count() as i32
}

/// Number of lines with two pieces of `player` and one empty point
pub fn count_near_mills(board: &Board, player: Player) -> i32 {
    all_mills()
        .iter()
        .filter(|mill| line_counts(board, mill, player) == (2, 1))
        .count() as i32
}

/// Number of lines through `pos` that `player` would complete by
/// occupying it
pub fn completable_lines(board: &Board, pos: Pos, player: Player) -> usize {
    mills_containing(pos)
        .iter()
        .filter(|mill| line_counts(board, mill, player) == (2, 1))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relabel(board: &Board) -> Board {
        let mut swapped = Board::new();
        for pos in Pos::all() {
            let cell = match board.get(pos) {
                Occupant::A => Occupant::B,
                Occupant::B => Occupant::A,
                Occupant::Empty => Occupant::Empty,
            };
            swapped.set(pos, cell);
        }
        swapped
    }

    #[test]
    fn test_forms_mill_on_ring() {
        let board = Board::from_layout(&[0, 1, 2], &[]);
        assert!(forms_mill(&board, Pos::new(0), Player::A));
        assert!(forms_mill(&board, Pos::new(2), Player::A));
        assert!(!forms_mill(&board, Pos::new(0), Player::B));
        assert!(!forms_mill(&board, Pos::new(3), Player::A));
    }

    #[test]
    fn test_forms_mill_on_spoke() {
        let board = Board::from_layout(&[], &[7, 15, 23]);
        assert!(forms_mill(&board, Pos::new(15), Player::B));
        let broken = Board::from_layout(&[15], &[7, 23]);
        assert!(!forms_mill(&broken, Pos::new(7), Player::B));
    }

    #[test]
    fn test_corners_do_not_span_rings() {
        // 0, 8, 16 are corners of different rings, not a line
        let board = Board::from_layout(&[0, 8, 16], &[]);
        for id in [0, 8, 16] {
            assert!(!forms_mill(&board, Pos::new(id), Player::A));
        }
    }

    #[test]
    fn test_forms_mill_symmetric_under_relabel() {
        let layouts: [(&[u8], &[u8]); 3] = [
            (&[0, 1, 2, 9], &[3, 11, 19]),
            (&[4, 5, 6], &[13, 21]),
            (&[16, 23, 22], &[15, 7]),
        ];
        for (a, b) in layouts {
            let board = Board::from_layout(a, b);
            let swapped = relabel(&board);
            for pos in Pos::all() {
                for player in Player::ALL {
                    assert_eq!(
                        forms_mill(&board, pos, player),
                        forms_mill(&swapped, pos, player.opponent())
                    );
                }
            }
        }
    }

    #[test]
    fn test_is_in_any_mill() {
        let board = Board::from_layout(&[0, 1, 2, 3], &[]);
        assert!(is_in_any_mill(&board, Pos::new(1)));
        assert!(!is_in_any_mill(&board, Pos::new(3)));
        assert!(!is_in_any_mill(&board, Pos::new(5)));
    }

    #[test]
    fn test_mill_protection() {
        // B: mill 8-9-10 plus a loose piece on 20
        let board = Board::from_layout(&[0], &[8, 9, 10, 20]);
        assert!(has_removable_pieces(&board, Player::B));
        assert_eq!(removable_positions(&board, Player::B), vec![Pos::new(20)]);
        assert!(!is_removable(&board, Pos::new(9), Player::B));
        assert!(is_removable(&board, Pos::new(20), Player::B));
        assert!(!is_removable(&board, Pos::new(0), Player::B));
    }

    #[test]
    fn test_protection_waived_when_all_in_mills() {
        let board = Board::from_layout(&[0], &[8, 9, 10]);
        assert!(!has_removable_pieces(&board, Player::B));
        assert_eq!(
            removable_positions(&board, Player::B),
            vec![Pos::new(8), Pos::new(9), Pos::new(10)]
        );
        assert!(is_removable(&board, Pos::new(9), Player::B));
    }

    #[test]
    fn test_line_counting() {
        let board = Board::from_layout(&[0, 1, 9, 17, 3], &[2, 11]);
        assert_eq!(count_mills(&board, Player::A), 1); // 1-9-17
        assert_eq!(count_near_mills(&board, Player::A), 0); // 0-1-2 blocked by B
        assert_eq!(completable_lines(&board, Pos::new(7), Player::A), 0);

        let open = Board::from_layout(&[0, 1, 6], &[]);
        assert_eq!(count_near_mills(&open, Player::A), 2); // 0-1-_, 6-_-0
        assert_eq!(completable_lines(&open, Pos::new(2), Player::A), 1);
        assert_eq!(completable_lines(&open, Pos::new(7), Player::A), 1);
    }
}
