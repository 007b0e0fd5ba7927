//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: it avoids widget/layout libraries
//! and renders into a plain framebuffer that is then flushed to the terminal.
//!
//! - `core` stays deterministic and testable; this crate only reads snapshots
//! - each board cell is a fixed block of terminal glyphs (2x1 by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
