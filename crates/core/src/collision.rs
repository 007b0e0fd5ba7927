//! Collision and rotation resolution.
//!
//! Placement legality is decided here and nowhere else. Every function is pure:
//! candidates are returned as new pieces and the caller decides what a failed
//! move means (a failed downward move is what triggers lock-in).

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{RotationDirection, KICK_OFFSETS};

/// True if any mino of `piece` is outside the walls, at or below the floor,
/// or on a locked cell. Minos above the grid only collide with the walls.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    piece
        .cells()
        .iter()
        .any(|&(x, y)| !board.is_inside(x, y) || board.is_occupied(x, y))
}

/// Translated piece if the destination is free
pub fn try_move(board: &Board, piece: &Piece, dx: i16, dy: i16) -> Option<Piece> {
    let candidate = piece.translated(dx, dy);
    (!collides(board, &candidate)).then_some(candidate)
}

/// Rotate using the standard kick table.
pub fn try_rotate(board: &Board, piece: &Piece, direction: RotationDirection) -> Option<Piece> {
    try_rotate_with(board, piece, direction, &KICK_OFFSETS)
}

/// Rotate one step, trying each kick offset in order.
///
/// Returns the first non-colliding candidate (new rotation plus offset), or
/// None when every offset fails.
pub fn try_rotate_with(
    board: &Board,
    piece: &Piece,
    direction: RotationDirection,
    kicks: &[(i16, i16)],
) -> Option<Piece> {
    let rotation = piece.rotated(direction);

    for &(dx, dy) in kicks {
        let candidate = Piece {
            rotation,
            x: piece.x + dx,
            y: piece.y + dy,
            ..*piece
        };
        if !collides(board, &candidate) {
            if (dx, dy) != (0, 0) {
                log::trace!(
                    "{} rotation kicked by ({}, {})",
                    piece.kind.as_str(),
                    dx,
                    dy
                );
            }
            return Some(candidate);
        }
    }

    None
}

/// How many rows the piece can fall before resting
pub fn drop_distance(board: &Board, piece: &Piece) -> i16 {
    let mut distance = 0;
    while !collides(board, &piece.translated(0, distance + 1)) {
        distance += 1;
    }
    distance
}
