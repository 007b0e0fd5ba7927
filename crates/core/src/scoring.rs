//! Scoring module - line clear points, drop bonus, level and gravity curve
//!
//! - Line clears use a non-linear table (single < double < triple < four lines)
//!   multiplied by the level at the time of the clear.
//! - Drop bonus is a per-cell policy so both "soft drop pays" and
//!   "only line clears pay" rule sets can be expressed.
//! - Level is `lines / LINES_PER_LEVEL + 1`; gravity shrinks by a fixed step
//!   per level down to a floor.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_CELL, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS_PER_CELL, START_LEVEL,
};

/// Per-cell drop bonus policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringPolicy {
    /// Points per cell moved by a successful soft drop
    pub soft_drop_per_cell: u32,
    /// Points per cell travelled by a hard drop
    pub hard_drop_per_cell: u32,
}

impl ScoringPolicy {
    /// Only line clears score
    pub const NONE: ScoringPolicy = ScoringPolicy {
        soft_drop_per_cell: 0,
        hard_drop_per_cell: 0,
    };

    /// Drop score for `cells` rows travelled
    pub fn drop_score(&self, cells: u32, is_hard_drop: bool) -> u32 {
        let per_cell = if is_hard_drop {
            self.hard_drop_per_cell
        } else {
            self.soft_drop_per_cell
        };
        cells.saturating_mul(per_cell)
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            soft_drop_per_cell: SOFT_DROP_POINTS_PER_CELL,
            hard_drop_per_cell: HARD_DROP_POINTS_PER_CELL,
        }
    }
}

/// Calculate line clear score
/// lines: number of lines cleared in one lock (capped at 4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Level for a running line total
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level (in milliseconds), clamped at the floor
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(START_LEVEL);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
