//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid where each cell is empty or holds the
//! kind of the piece that locked there. Storage is a flat row-major vector sized
//! once at construction; a board is replaced, never resized.
//!
//! Coordinates: (x, y) where x is the column (0 = left) and y the row
//! (0 = top, growing downward). Rows above the grid (y < 0) are "inside" for
//! bounds purposes but can never hold a cell.

use crate::types::{Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Result of writing a piece into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// Every mino landed inside the visible grid
    Locked,
    /// At least one mino was above row 0; the visible minos were still written
    ToppedOut,
}

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat vector of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x as u16 >= self.width || y as u16 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if outside the visible grid
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if outside the visible grid
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Column inside the walls and row above the floor (negative rows allowed)
    pub fn is_inside(&self, x: i16, y: i16) -> bool {
        x >= 0 && (x as u16) < self.width && (y < 0 || (y as u16) < self.height)
    }

    /// Check if position holds a locked cell (never true above the grid)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.row(y) {
            Some(row) => row.iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Single bottom-to-top pass: every row is tested against its original
    /// contents before anything above it moves, so all full rows are removed
    /// together and the rows above shift down by the number removed beneath them.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Fresh empty rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Lock minos at absolute positions into the board.
    ///
    /// Minos above the grid are not written and report [`LockOutcome::ToppedOut`].
    pub fn lock(&mut self, minos: &[(i16, i16)], kind: PieceKind) -> LockOutcome {
        let mut outcome = LockOutcome::Locked;
        for &(x, y) in minos {
            if y < 0 {
                outcome = LockOutcome::ToppedOut;
                continue;
            }
            self.set(x, y, Some(kind));
        }
        outcome
    }

    /// A single row, top row first
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows of text: `.` is empty, piece letters are filled.
    ///
    /// Returns None for ragged rows or unknown characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(width as u16, height as u16);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    _ => Some(PieceKind::from_str(&ch.to_string())?),
                };
                board.set(x as i16, y as i16, cell);
            }
        }
        Some(board)
    }

    /// Convert to 2D vector (top row first)
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_is_inside_allows_rows_above_grid() {
        let board = Board::new(6, 8);
        assert!(board.is_inside(0, -3));
        assert!(board.is_inside(5, 7));
        assert!(!board.is_inside(6, 0));
        assert!(!board.is_inside(-1, 0));
        assert!(!board.is_inside(0, 8));
        assert!(!board.is_occupied(0, -1));
    }

    #[test]
    fn test_lock_reports_top_out_but_writes_visible_minos() {
        let mut board = Board::new(4, 4);
        let outcome = board.lock(&[(1, -1), (1, 0), (2, 0), (2, 1)], PieceKind::S);
        assert_eq!(outcome, LockOutcome::ToppedOut);
        assert_eq!(board.occupied_count(), 3);

        let outcome = board.lock(&[(0, 3)], PieceKind::I);
        assert_eq!(outcome, LockOutcome::Locked);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::from_rows(&[
            "....", //
            "I...", //
            "OOOO", //
            ".T..", //
            "JJJJ", //
        ])
        .unwrap();

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(
            board,
            Board::from_rows(&[
                "....", //
                "....", //
                "....", //
                "I...", //
                ".T..", //
            ])
            .unwrap()
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Board::from_rows(&["...", ".."]).is_none());
        assert!(Board::from_rows(&["..#"]).is_none());
    }
}
