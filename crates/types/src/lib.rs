//! Core types module - shared data structures and fixed game policy
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the input map and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! The board size is chosen per session (see `blockfall_core::SessionConfig`):
//!
//! - **Default**: 10 columns × 20 rows
//! - **Range**: 4..=64 in both directions (4 is the smallest board every piece fits on)
//! - **Spawn position**: bounding box centred horizontally, topmost mino on row 0
//!
//! # Fixed Policy
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval used by the terminal runner (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Gravity floor |
//! | `LINES_PER_LEVEL` | 10 | Lines needed for each level up |
//! | `LINE_SCORES` | 0/100/300/500/800 | Points for 0..=4 lines, times level |
//!
//! # Drop Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 9 | 200ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, RotationDirection, DEFAULT_BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(RotationDirection::Clockwise.step(), 1);
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Narrowest accepted board (the long piece is 4 cells wide)
pub const MIN_BOARD_WIDTH: u16 = 4;

/// Shortest accepted board
pub const MIN_BOARD_HEIGHT: u16 = 4;

/// Widest accepted board
pub const MAX_BOARD_WIDTH: u16 = 64;

/// Tallest accepted board
pub const MAX_BOARD_HEIGHT: u16 = 64;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Level a fresh session starts on
pub const START_LEVEL: u32 = 1;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring, indexed by lines cleared in one lock (multiplied by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Default soft drop bonus per cell
pub const SOFT_DROP_POINTS_PER_CELL: u32 = 1;

/// Default hard drop bonus per cell
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Kick offsets `(dx, dy)` tried in order when a rotation collides.
///
/// None, left 1, right 1, up 1, left-up, right-up, left 2, right 2.
pub const KICK_OFFSETS: [(i16, i16); 8] = [
    (0, 0),
    (-1, 0),
    (1, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
    (-2, 0),
    (2, 0),
];

/// The seven piece kinds
///
/// The kind doubles as the occupant identifier written into the board,
/// so renderers derive colours from it:
/// - **I**: long bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Direction of a rotation request
///
/// Rotation states are cyclic per piece kind, so a direction is just a
/// step of +1 or -1 through the kind's state list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// Signed step through the rotation state list
    pub fn step(&self) -> i8 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }
}

/// Session lifecycle phase
///
/// `Ready` → `Running` ⇄ `Paused`, `Running` → `GameOver`.
/// `GameOver` is terminal until the session is started again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Game actions (the command surface as a single enum)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Start,
    Restart,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
