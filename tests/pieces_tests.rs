//! Shape catalog, piece and rotation resolver tests

use blockfall::core::pieces::{
    get_shape, get_spawn_shape, next_rotation, rotation_count, rotation_states,
};
use blockfall::core::{collides, try_move, try_rotate, try_rotate_with, Board, Piece};
use blockfall::types::{PieceKind, RotationDirection, KICK_OFFSETS};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::I, 0).minos(),
        &[(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::I, 1).minos(),
        &[(2, 0), (2, 1), (2, 2), (2, 3)]
    );
    // Index wraps modulo the state count
    assert_eq!(get_shape(PieceKind::I, 2), get_shape(PieceKind::I, 0));
}

#[test]
fn test_o_piece_has_single_state() {
    let states = rotation_states(PieceKind::O);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].minos(), &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!((states[0].width(), states[0].height()), (2, 2));
}

#[test]
fn test_t_second_state_has_empty_left_column() {
    let shape = get_shape(PieceKind::T, 1);
    assert_eq!(
        shape.to_matrix(),
        vec![
            vec![false, true, false],
            vec![false, true, true],
            vec![false, true, false],
        ]
    );
}

#[test]
fn test_spawn_shape_is_first_state() {
    for kind in PieceKind::ALL {
        assert_eq!(get_spawn_shape(kind), &rotation_states(kind)[0]);
    }
}

#[test]
fn test_every_state_has_four_minos_in_box() {
    for kind in PieceKind::ALL {
        for shape in rotation_states(kind) {
            let filled: usize = shape
                .to_matrix()
                .iter()
                .map(|row| row.iter().filter(|&&c| c).count())
                .sum();
            assert_eq!(filled, 4, "{:?}", kind);
        }
    }
}

// ============== Rotation index ==============

#[test]
fn test_rotation_cycles_back_to_start() {
    for kind in PieceKind::ALL {
        let count = rotation_count(kind);
        for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
            let mut rotation = 0;
            for _ in 0..count {
                rotation = next_rotation(kind, rotation, direction);
            }
            assert_eq!(rotation, 0, "{:?} {:?}", kind, direction);
        }
    }
}

#[test]
fn test_counter_clockwise_undoes_clockwise() {
    for kind in PieceKind::ALL {
        for start in 0..rotation_count(kind) {
            let cw = next_rotation(kind, start, RotationDirection::Clockwise);
            assert_eq!(
                next_rotation(kind, cw, RotationDirection::CounterClockwise),
                start
            );
        }
    }
}

// ============== Resolver ==============

#[test]
fn test_o_piece_moves_to_floor() {
    let board = Board::default();
    let mut piece = Piece::spawn(PieceKind::O, board.width());
    assert_eq!((piece.x, piece.y), (4, 0));

    for _ in 0..18 {
        piece = try_move(&board, &piece, 0, 1).expect("room to fall");
    }
    assert_eq!(try_move(&board, &piece, 0, 1), None);
    assert_eq!(piece.y, 18);
}

#[test]
fn test_t_kicks_off_left_wall() {
    let board = Board::default();
    let piece = Piece {
        kind: PieceKind::T,
        rotation: 1,
        x: -1,
        y: 5,
    };
    // Flush against the wall thanks to the empty left column
    assert!(!collides(&board, &piece));
    assert_eq!(try_move(&board, &piece, -1, 0), None);

    let rotated = try_rotate(&board, &piece, RotationDirection::Clockwise).unwrap();
    assert_eq!(rotated.rotation, 2);
    assert_eq!((rotated.x, rotated.y), (0, 5));
}

#[test]
fn test_kick_can_lift_piece() {
    // Horizontal I resting on the stack: the vertical state hits the floor
    // or the stack at every sideways offset, so the first upward kick wins.
    let board = Board::from_rows(&[
        "......", //
        "......", //
        "......", //
        "......", //
        "......", //
        "OO.O..", //
    ])
    .unwrap();
    let piece = Piece {
        kind: PieceKind::I,
        rotation: 0,
        x: 0,
        y: 3,
    };
    assert!(!collides(&board, &piece));
    assert_eq!(try_move(&board, &piece, 0, 1), None);

    let rotated = try_rotate(&board, &piece, RotationDirection::Clockwise).unwrap();
    assert_eq!(rotated.rotation, 1);
    assert_eq!((rotated.x, rotated.y), (0, 2));
    assert!(!collides(&board, &rotated));
}

#[test]
fn test_custom_kick_table_without_offsets() {
    let board = Board::default();
    let piece = Piece {
        kind: PieceKind::T,
        rotation: 1,
        x: -1,
        y: 5,
    };
    assert_eq!(
        try_rotate_with(&board, &piece, RotationDirection::Clockwise, &[(0, 0)]),
        None
    );
    assert!(try_rotate_with(&board, &piece, RotationDirection::Clockwise, &KICK_OFFSETS).is_some());
}
