//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and the session state machine.
//! It has **no dependencies** on terminals or I/O, which makes it:
//!
//! - **Deterministic**: the same seed and inputs produce identical games
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any front-end that can read a [`GameSnapshot`] can draw it
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog, precomputed rotation states per kind
//! - [`board`]: width x height grid, lock-in and row clearing
//! - [`piece`]: the active piece and its derived cells
//! - [`collision`]: placement legality, movement and kicked rotation
//! - [`scoring`]: line score table, drop bonus policy, level and gravity curve
//! - [`rng`]: seeded uniform / 7-bag / fixed-sequence randomizers
//! - [`config`]: per-game configuration and its validation
//! - [`session`]: game lifecycle, gravity and the lock sequence
//! - [`snapshot`]: owned state copy for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig};
//! use blockfall_core::types::GameAction;
//!
//! let mut game = Session::new(SessionConfig::default().with_seed(12345)).unwrap();
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards points per cell travelled
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! The host owns the clock and calls [`Session::tick`] with elapsed
//! milliseconds. Gravity starts at 1000ms per row and loses 100ms per level
//! down to a 100ms floor.

pub mod board;
pub mod collision;
pub mod config;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockOutcome};
pub use collision::{collides, drop_distance, try_move, try_rotate, try_rotate_with};
pub use config::{ConfigError, SessionConfig};
pub use piece::{Piece, PieceCells};
pub use pieces::{get_shape, rotation_states, Shape};
pub use rng::{PieceQueue, Randomizer, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms, ScoringPolicy};
pub use session::{GameEvent, GameOverReason, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
