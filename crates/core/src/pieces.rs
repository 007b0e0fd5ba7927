//! Pieces module - shape catalog with precomputed rotation states
//!
//! Every piece kind owns an ordered, cyclic list of rotation states. States are
//! stored as mino offsets inside a fixed bounding box; the box keeps its empty
//! padding so a state can sit flush against a wall while its box overhangs it.
//!
//! | Kind | States | Box |
//! |------|--------|-----|
//! | I | 2 | 4x4 |
//! | O | 1 | 2x2 |
//! | T, J, L | 4 | 3x3 |
//! | S, Z | 2 | 3x3 |

use crate::types::{PieceKind, RotationDirection};

/// Offset of a single mino relative to the piece anchor (top-left of its box)
pub type MinoOffset = (i8, i8);

/// One rotation state of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    minos: [MinoOffset; 4],
    width: u8,
    height: u8,
}

impl Shape {
    const fn new(minos: [MinoOffset; 4], width: u8, height: u8) -> Self {
        Self {
            minos,
            width,
            height,
        }
    }

    /// Mino offsets, row-major order
    pub fn minos(&self) -> &[MinoOffset; 4] {
        &self.minos
    }

    /// Bounding box width
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding box height
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Matrix lookup inside the bounding box
    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        self.minos
            .iter()
            .any(|&(dx, dy)| dx as u8 == col && dy as u8 == row)
    }

    /// Occupancy matrix, `height` rows of `width` columns
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|row| (0..self.width).map(|col| self.is_filled(col, row)).collect())
            .collect()
    }
}

const I_STATES: [Shape; 2] = [
    // horizontal, second row of the box
    Shape::new([(0, 1), (1, 1), (2, 1), (3, 1)], 4, 4),
    // vertical, third column of the box
    Shape::new([(2, 0), (2, 1), (2, 2), (2, 3)], 4, 4),
];

const O_STATES: [Shape; 1] = [Shape::new([(0, 0), (1, 0), (0, 1), (1, 1)], 2, 2)];

const T_STATES: [Shape; 4] = [
    Shape::new([(1, 0), (0, 1), (1, 1), (2, 1)], 3, 3),
    Shape::new([(1, 0), (1, 1), (2, 1), (1, 2)], 3, 3),
    Shape::new([(0, 1), (1, 1), (2, 1), (1, 2)], 3, 3),
    Shape::new([(1, 0), (0, 1), (1, 1), (1, 2)], 3, 3),
];

const S_STATES: [Shape; 2] = [
    Shape::new([(1, 0), (2, 0), (0, 1), (1, 1)], 3, 3),
    Shape::new([(1, 0), (1, 1), (2, 1), (2, 2)], 3, 3),
];

const Z_STATES: [Shape; 2] = [
    Shape::new([(0, 0), (1, 0), (1, 1), (2, 1)], 3, 3),
    Shape::new([(2, 0), (1, 1), (2, 1), (1, 2)], 3, 3),
];

const J_STATES: [Shape; 4] = [
    Shape::new([(0, 0), (0, 1), (1, 1), (2, 1)], 3, 3),
    Shape::new([(1, 0), (2, 0), (1, 1), (1, 2)], 3, 3),
    Shape::new([(0, 1), (1, 1), (2, 1), (2, 2)], 3, 3),
    Shape::new([(1, 0), (1, 1), (0, 2), (1, 2)], 3, 3),
];

const L_STATES: [Shape; 4] = [
    Shape::new([(2, 0), (0, 1), (1, 1), (2, 1)], 3, 3),
    Shape::new([(1, 0), (1, 1), (1, 2), (2, 2)], 3, 3),
    Shape::new([(0, 1), (1, 1), (2, 1), (0, 2)], 3, 3),
    Shape::new([(0, 0), (1, 0), (1, 1), (1, 2)], 3, 3),
];

/// All rotation states of a piece kind, in clockwise order
pub fn rotation_states(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of distinct rotation states
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotation_states(kind).len() as u8
}

/// Shape for a kind and rotation index (index taken modulo the state count)
pub fn get_shape(kind: PieceKind, rotation: u8) -> &'static Shape {
    let states = rotation_states(kind);
    &states[rotation as usize % states.len()]
}

/// Next rotation index in the given direction, wrapping around
pub fn next_rotation(kind: PieceKind, rotation: u8, direction: RotationDirection) -> u8 {
    let count = rotation_count(kind) as i16;
    let current = rotation as i16 % count;
    (current + direction.step() as i16).rem_euclid(count) as u8
}

/// Get initial shape for a new piece
pub fn get_spawn_shape(kind: PieceKind) -> &'static Shape {
    get_shape(kind, 0)
}
