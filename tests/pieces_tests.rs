//! Piece shape and rotation tests

use rstest::rstest;
use tetris::core::{get_shape, spawn_position, try_rotate};
use tetris::types::{PieceKind, Rotation};

fn sorted(mut shape: [(i8, i8); 4]) -> [(i8, i8); 4] {
    shape.sort();
    shape
}

#[rstest]
#[case(PieceKind::O, [(0, 0), (0, 1), (1, 0), (1, 1)])]
#[case(PieceKind::I, [(0, -2), (0, -1), (0, 0), (0, 1)])]
#[case(PieceKind::S, [(0, 0), (1, 0), (-1, 1), (0, 1)])]
#[case(PieceKind::Z, [(0, 0), (-1, 0), (1, 1), (0, 1)])]
#[case(PieceKind::T, [(-1, 0), (0, 0), (1, 0), (0, 1)])]
#[case(PieceKind::L, [(0, -1), (0, 0), (0, 1), (1, 1)])]
#[case(PieceKind::J, [(0, -1), (1, -1), (0, 0), (0, 1)])]
fn spawn_shapes(#[case] kind: PieceKind, #[case] expected: [(i8, i8); 4]) {
    assert_eq!(sorted(get_shape(kind, Rotation::North)), sorted(expected));
}

#[test]
fn four_turns_return_to_spawn_shape() {
    for kind in PieceKind::ALL {
        let mut rotation = Rotation::North;
        for _ in 0..4 {
            rotation = rotation.rotate_cw();
        }
        assert_eq!(get_shape(kind, rotation), get_shape(kind, Rotation::North));
    }
}

#[test]
fn clockwise_turns_t_stem_to_the_left() {
    // T points down at spawn; a clockwise quarter turn points it left.
    let east = sorted(get_shape(PieceKind::T, Rotation::East));
    assert_eq!(east, sorted([(0, -1), (0, 0), (0, 1), (-1, 0)]));
}

#[test]
fn cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        let (_, cw) = try_rotate(kind, Rotation::North, 5, 5, true, |_, _| true)
            .unwrap_or((get_shape(kind, Rotation::North), Rotation::North));
        let back = try_rotate(kind, cw, 5, 5, false, |_, _| true)
            .map(|(_, r)| r)
            .unwrap_or(cw);
        assert_eq!(back, Rotation::North, "{kind:?}");
    }
}

#[test]
fn blocked_rotation_does_not_kick() {
    // Vertical I against the left wall turns into a horizontal bar that
    // would poke through the wall.
    let rotated = try_rotate(PieceKind::I, Rotation::North, 0, 5, true, |x, _| x >= 0);
    assert_eq!(rotated, None);
}

#[test]
fn o_never_rotates() {
    assert_eq!(
        try_rotate(PieceKind::O, Rotation::North, 4, 4, false, |_, _| true),
        None
    );
}

#[rstest]
#[case(10, (4, -2))]
#[case(4, (1, -2))]
#[case(7, (2, -2))]
fn spawn_column_is_left_of_centre(#[case] width: u8, #[case] expected: (i8, i8)) {
    assert_eq!(spawn_position(width), expected);
}
