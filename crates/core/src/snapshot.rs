use crate::piece::Piece;
use crate::types::{Cell, GamePhase, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i16,
    pub y: i16,
    /// Absolute mino positions (rows may be negative)
    pub cells: [(i16, i16); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        let mut cells = [(0, 0); 4];
        for (slot, cell) in cells.iter_mut().zip(value.cells()) {
            *slot = cell;
        }
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells,
        }
    }
}

/// Owned copy of everything a renderer reads
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major locked cells, `width * height` long
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i16>,
    pub next: Option<PieceKind>,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub gravity_ms: u32,
}

impl GameSnapshot {
    /// Locked cell at (x, y), None outside the grid or when empty
    pub fn cell(&self, x: i16, y: i16) -> Cell {
        if x < 0 || y < 0 || x as u16 >= self.width || y as u16 >= self.height {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            ghost_y: None,
            next: None,
            phase: GamePhase::Ready,
            score: 0,
            level: 0,
            lines: 0,
            gravity_ms: 0,
        }
    }
}
