use morris::rules::{apply_move, forms_mill, has_any_legal_move};
use morris::{
    apply_player_move, apply_removal, current_status, legal_moves, new_game, removable_positions,
    Board, GameState, IllegalMove, Move, Phase, Player, Pos, Stage,
};

fn pos(id: u8) -> Pos {
    Pos::new(id)
}

#[test]
fn placing_without_mill_keeps_all_placements_open() {
    let mut state = new_game();
    for id in [1, 3, 5] {
        state = apply_move(&state, Player::A, Move::Place(pos(id))).expect("legal placement");
        assert!(!forms_mill(&state.board, pos(id), Player::A));
    }

    let moves = legal_moves(&state, Player::A);
    assert_eq!(moves.len(), 21);
    for p in state.board.empty_points() {
        assert!(moves.contains(&Move::Place(p)), "missing placement at {p}");
    }
    assert_eq!(state.counts(Player::A).remaining, 6);
    assert_eq!(state.phase(Player::A), Phase::Placing);
}

#[test]
fn completing_line_by_placement_awaits_removal() {
    let board = Board::from_layout(&[0, 1], &[10, 21]);
    let state = GameState::from_position(board, Player::A, [7, 7]);

    let next = apply_player_move(&state, Move::Place(pos(2))).expect("legal placement");
    assert!(forms_mill(&next.board, pos(2), Player::A));
    assert_eq!(current_status(&next).stage, Stage::AwaitingRemoval(Player::A));
    assert_eq!(current_status(&next).pending_removal, Some(Player::A));
}

#[test]
fn completing_line_by_relocation_awaits_removal() {
    let board = Board::from_layout(&[0, 1, 3, 16], &[10, 12, 21, 22]);
    let state = GameState::from_position(board, Player::A, [0, 0]);

    let mv = Move::Relocate { from: pos(3), to: pos(2) };
    let next = apply_player_move(&state, mv).expect("legal relocation");
    assert!(forms_mill(&next.board, pos(2), Player::A));
    assert_eq!(current_status(&next).stage, Stage::AwaitingRemoval(Player::A));
    assert_eq!(
        apply_player_move(&next, Move::Relocate { from: pos(16), to: pos(17) }),
        Err(IllegalMove::RemovalPending)
    );
}

#[test]
fn mill_protection_waived_when_every_piece_is_in_a_mill() {
    let board = Board::from_layout(&[0, 3, 6], &[16, 17, 18]);
    let state = GameState::from_position(board, Player::A, [0, 0]);
    assert_eq!(removable_positions(&state, Player::B), vec![pos(16), pos(17), pos(18)]);
}

#[test]
fn mill_protection_applies_with_loose_pieces() {
    let board = Board::from_layout(&[0, 3, 6], &[16, 17, 18, 12]);
    let state = GameState::from_position(board, Player::A, [0, 0]);
    assert_eq!(removable_positions(&state, Player::B), vec![pos(12)]);
}

#[test]
fn removal_to_two_pieces_ends_game() {
    let board = Board::from_layout(&[0, 1, 2, 12], &[8, 14, 21]);
    let mut state = GameState::from_position(board, Player::A, [0, 0]);
    state.pending_removal = Some(Player::A);

    let next = apply_removal(&state, pos(14)).expect("legal removal");
    assert_eq!(next.counts(Player::B).on_board, 2);
    assert_eq!(next.counts(Player::B).remaining, 0);
    assert_eq!(next.winner, Some(Player::A));
    assert_eq!(current_status(&next).stage, Stage::GameOver(Player::A));
}

#[test]
fn blocked_player_loses() {
    // A moves 15 -> 7, sealing B's last exit
    let board = Board::from_layout(&[1, 3, 5, 15], &[0, 2, 4, 6]);
    let state = GameState::from_position(board, Player::A, [0, 0]);
    assert!(has_any_legal_move(&state, Player::B));

    let next = apply_player_move(&state, Move::Relocate { from: pos(15), to: pos(7) })
        .expect("legal relocation");
    assert!(!has_any_legal_move(&next, Player::B));
    assert_eq!(next.winner, Some(Player::A));
    assert_eq!(current_status(&next).stage, Stage::GameOver(Player::A));
}

#[test]
fn rejected_requests_leave_state_unchanged() {
    let state = apply_player_move(&new_game(), Move::Place(pos(4))).expect("legal placement");
    let before = state.clone();

    assert_eq!(
        apply_player_move(&state, Move::Place(pos(4))),
        Err(IllegalMove::Occupied(pos(4)))
    );
    assert!(apply_player_move(&state, Move::Relocate { from: pos(4), to: pos(5) }).is_err());
    assert!(apply_removal(&state, pos(4)).is_err());
    assert_eq!(state, before);
}
