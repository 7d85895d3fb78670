//! Pieces module - piece shapes and quarter-turn rotation
//!
//! Each piece is four minos given as offsets from the piece origin. Rotation
//! turns every offset a quarter turn about that origin; there are no wall
//! kicks, so a rotation either fits where the piece is or does not happen.

use crate::types::{PieceKind, Rotation, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Spawn shapes (y grows downward)
fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        PieceKind::I => [(0, -2), (0, -1), (0, 0), (0, 1)],
        PieceKind::S => [(0, 0), (1, 0), (-1, 1), (0, 1)],
        PieceKind::Z => [(0, 0), (-1, 0), (1, 1), (0, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::L => [(0, -1), (0, 0), (0, 1), (1, 1)],
        PieceKind::J => [(0, -1), (1, -1), (0, 0), (0, 1)],
    }
}

/// Quarter turn clockwise on screen (y down)
#[inline]
pub fn rotate_offset_cw((x, y): MinoOffset) -> MinoOffset {
    (-y, x)
}

/// Quarter turn counter-clockwise on screen (y down)
#[inline]
pub fn rotate_offset_ccw((x, y): MinoOffset) -> MinoOffset {
    (y, -x)
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mut shape = base_shape(kind);
    if kind == PieceKind::O {
        return shape;
    }
    for _ in 0..rotation.quarter_turns() {
        for offset in &mut shape {
            *offset = rotate_offset_cw(*offset);
        }
    }
    shape
}

/// Try to rotate a piece in place.
///
/// Returns the new shape and rotation when every rotated mino satisfies
/// `is_free`, `None` otherwise. The O piece never rotates.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    clockwise: bool,
    is_free: impl Fn(i8, i8) -> bool,
) -> Option<(PieceShape, Rotation)> {
    if kind == PieceKind::O {
        return None;
    }

    let new_rotation = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };
    let new_shape = get_shape(kind, new_rotation);

    new_shape
        .iter()
        .all(|&(dx, dy)| is_free(x + dx, y + dy))
        .then_some((new_shape, new_rotation))
}

/// Spawn origin for a board of the given width: just left of centre, two rows
/// above the visible grid.
///
/// `width` must lie in `MIN_BOARD_DIM..=MAX_BOARD_DIM`; the column is computed
/// in `i8`.
pub fn spawn_position(width: u8) -> (i8, i8) {
    debug_assert!((MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&width));
    (width as i8 / 2 - 1, -2)
}
