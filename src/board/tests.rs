use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::A.opponent(), Player::B);
    assert_eq!(Player::B.opponent(), Player::A);
    assert_eq!(Player::A.index(), 0);
    assert_eq!(Player::B.index(), 1);
}

#[test]
fn test_occupant_player() {
    assert_eq!(Occupant::Empty.player(), None);
    assert_eq!(Occupant::A.player(), Some(Player::A));
    assert_eq!(Occupant::from(Player::B), Occupant::B);
}

#[test]
fn test_pos_ring_and_strategic() {
    assert_eq!(Pos::new(0).ring(), 0);
    assert_eq!(Pos::new(8).ring(), 1);
    assert_eq!(Pos::new(23).ring(), 2);

    let strategic: Vec<u8> = Pos::all().filter(|p| p.is_strategic()).map(Pos::id).collect();
    assert_eq!(strategic, vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23]);
}

#[test]
fn test_pos_parsing() {
    assert_eq!("7".parse::<Pos>(), Ok(Pos::new(7)));
    assert_eq!(" 23 ".parse::<Pos>(), Ok(Pos::new(23)));
    assert_eq!("24".parse::<Pos>(), Err(ParsePosError::OutOfRange(24)));
    assert!(matches!("x".parse::<Pos>(), Err(ParsePosError::NotANumber(_))));
    assert_eq!(Pos::try_new(24), None);
}

#[test]
fn test_neighbors_are_symmetric() {
    let mut edges = 0;
    for pos in Pos::all() {
        for n in neighbors(pos) {
            assert!(is_adjacent(n, pos), "{pos} -> {n} not mirrored");
            edges += 1;
        }
    }
    // 24 ring edges + 8 spoke edges, each counted from both ends
    assert_eq!(edges, 64);
}

#[test]
fn test_neighbors_sorted() {
    for pos in Pos::all() {
        let list: Vec<Pos> = neighbors(pos).collect();
        let mut sorted = list.clone();
        sorted.sort();
        assert_eq!(list, sorted);
    }
}

#[test]
fn test_spokes_connect_midpoints() {
    assert!(is_adjacent(Pos::new(1), Pos::new(9)));
    assert!(is_adjacent(Pos::new(15), Pos::new(23)));
    assert!(!is_adjacent(Pos::new(0), Pos::new(8)));
    assert!(!is_adjacent(Pos::new(1), Pos::new(17)));
}

#[test]
fn test_mill_index_matches_lines() {
    assert_eq!(all_mills().len(), 16);
    for pos in Pos::all() {
        for mill in mills_containing(pos) {
            assert!(mill.contains(&pos));
        }
        let through = all_mills().iter().filter(|m| m.contains(&pos)).count();
        assert_eq!(through, 2);
    }
}

#[test]
fn test_mill_lines_are_connected() {
    for mill in all_mills() {
        assert!(is_adjacent(mill[0], mill[1]));
        assert!(is_adjacent(mill[1], mill[2]));
    }
}

#[test]
fn test_board_counts() {
    let board = Board::from_layout(&[0, 1, 2], &[8, 16]);
    assert_eq!(board.count(Player::A), 3);
    assert_eq!(board.count(Player::B), 2);
    assert_eq!(board.count_of(Occupant::Empty), 19);
    assert_eq!(board.ring_count(0, Player::A), 3);
    assert_eq!(board.ring_count(1, Player::B), 1);
    assert_eq!(
        board.pieces(Player::B).collect::<Vec<_>>(),
        vec![Pos::new(8), Pos::new(16)]
    );
}

#[test]
fn test_board_clone_is_independent() {
    let original = Board::from_layout(&[4], &[5]);
    let mut copy = original.clone();
    copy.set(Pos::new(4), Occupant::Empty);
    copy.set(Pos::new(6), Occupant::B);

    assert_eq!(original.get(Pos::new(4)), Occupant::A);
    assert!(original.is_empty(Pos::new(6)));
    assert_ne!(original, copy);
}

#[test]
fn test_board_display() {
    let board = Board::from_layout(&[0], &[23]);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], " outer  A . . . . . . .");
    assert_eq!(lines[2], " inner  . . . . . . . B");
}
