//! The active falling piece.

use arrayvec::ArrayVec;

use crate::pieces::{get_shape, next_rotation, rotation_count, Shape};
use crate::types::{PieceKind, RotationDirection};

/// Absolute board positions of a piece's minos
pub type PieceCells = ArrayVec<(i16, i16), 4>;

/// Active falling piece: kind, rotation index and anchor (top-left of its box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Create a piece at an explicit anchor in its first rotation state
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Create a piece at the spawn position: box centred horizontally, lifted
    /// so the topmost mino sits on row 0
    pub fn spawn(kind: PieceKind, board_width: u16) -> Self {
        let shape = get_shape(kind, 0);
        let top = shape
            .minos()
            .iter()
            .map(|&(_, dy)| dy as i16)
            .min()
            .unwrap_or(0);
        Self::new(
            kind,
            board_width as i16 / 2 - shape.width() as i16 / 2,
            -top,
        )
    }

    /// Shape of the current rotation state
    pub fn shape(&self) -> &'static Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Number of rotation states this piece cycles through
    pub fn rotation_count(&self) -> u8 {
        rotation_count(self.kind)
    }

    /// Occupied cells for a candidate anchor and rotation (pure)
    pub fn cells_at(&self, x: i16, y: i16, rotation: u8) -> PieceCells {
        get_shape(self.kind, rotation)
            .minos()
            .iter()
            .map(|&(dx, dy)| (x + dx as i16, y + dy as i16))
            .collect()
    }

    /// Occupied cells at the current placement
    pub fn cells(&self) -> PieceCells {
        self.cells_at(self.x, self.y, self.rotation)
    }

    /// Rotation index after one step in `direction`
    pub fn rotated(&self, direction: RotationDirection) -> u8 {
        next_rotation(self.kind, self.rotation, direction)
    }

    /// Copy of this piece shifted by (dx, dy)
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
