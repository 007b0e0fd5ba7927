//! Session module - one game from start to game over
//!
//! The session owns the board, the active and next pieces, the randomizer and
//! the score counters. It is driven from outside: the host calls [`Session::tick`]
//! with elapsed milliseconds and forwards player commands. Commands outside
//! [`GamePhase::Running`] are ignored and report `false`.
//!
//! Lock sequence (gravity or hard drop):
//! 1. write the piece into the board (a mino above row 0 tops out)
//! 2. clear full rows, score them at the current level
//! 3. recompute level and gravity
//! 4. promote the next piece; a blocked spawn ends the game

use crate::board::{Board, LockOutcome};
use crate::collision::{collides, drop_distance, try_move, try_rotate};
use crate::config::{ConfigError, SessionConfig};
use crate::piece::Piece;
use crate::rng::PieceQueue;
use crate::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GamePhase, PieceKind, RotationDirection, START_LEVEL};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// A piece locked with a mino above the visible grid
    ToppedOut,
    /// The next piece overlapped locked cells at its spawn position
    SpawnBlocked,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::ToppedOut => "topped_out",
            GameOverReason::SpawnBlocked => "spawn_blocked",
        }
    }
}

/// Notifications produced by the lock sequence, drained with [`Session::take_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    PieceLocked { kind: PieceKind },
    LinesCleared { count: u32, points: u32 },
    LevelUp { level: u32 },
    GameOver { final_score: u32, reason: GameOverReason },
}

/// A single game
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    queue: PieceQueue,
    active: Option<Piece>,
    next: Option<PieceKind>,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    gravity_ms: u32,
    drop_timer_ms: u32,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session in [`GamePhase::Ready`]
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.width, config.height),
            queue: PieceQueue::new(config.seed, config.randomizer.clone()),
            config,
            active: None,
            next: None,
            phase: GamePhase::Ready,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            gravity_ms: get_drop_interval_ms(START_LEVEL),
            drop_timer_ms: 0,
            events: Vec::new(),
        })
    }

    /// Start a game from `Ready` or `GameOver`.
    ///
    /// The randomizer carries on from where the previous game left it.
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Ready | GamePhase::GameOver => {
                self.begin();
                true
            }
            GamePhase::Running | GamePhase::Paused => false,
        }
    }

    /// Abandon the current game (if any) and start a fresh one
    pub fn restart(&mut self) {
        self.begin();
    }

    /// Start a fresh game with a new configuration.
    ///
    /// Nothing changes when the configuration is rejected. The board is
    /// replaced when the dimensions differ and the randomizer is reseeded.
    pub fn start_with(&mut self, config: SessionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if (config.width, config.height) != (self.board.width(), self.board.height()) {
            self.board = Board::new(config.width, config.height);
        }
        self.queue = PieceQueue::new(config.seed, config.randomizer.clone());
        self.config = config;
        self.begin();
        Ok(())
    }

    fn begin(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.gravity_ms = get_drop_interval_ms(self.level);
        self.drop_timer_ms = 0;
        self.active = None;
        self.next = Some(self.queue.draw());
        self.phase = GamePhase::Running;

        log::info!(
            "game started on {}x{} board (seed {})",
            self.board.width(),
            self.board.height(),
            self.config.seed
        );

        self.spawn_next();
    }

    /// Toggle `Running` and `Paused`; returns whether the phase changed
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::Ready | GamePhase::GameOver => return false,
        };
        true
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// At most one gravity step happens per call; returns whether one did.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.gravity_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        let Some(active) = self.active else {
            return false;
        };
        match try_move(&self.board, &active, 0, 1) {
            Some(moved) => self.active = Some(moved),
            None => self.lock_active(),
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i16) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        match try_move(&self.board, &active, dx, 0) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => false,
        }
    }

    /// Move down one row, awarding the soft drop bonus.
    ///
    /// A blocked soft drop does nothing; only gravity and hard drop lock.
    pub fn soft_drop(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        match try_move(&self.board, &active, 0, 1) {
            Some(moved) => {
                self.active = Some(moved);
                self.score = self
                    .score
                    .saturating_add(self.config.scoring.drop_score(1, false));
                true
            }
            None => false,
        }
    }

    /// Drop straight down and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        let distance = drop_distance(&self.board, &active);
        self.active = Some(active.translated(0, distance));
        self.score = self
            .score
            .saturating_add(self.config.scoring.drop_score(distance as u32, true));
        self.lock_active();
        true
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.rotate(RotationDirection::Clockwise)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.rotate(RotationDirection::CounterClockwise)
    }

    fn rotate(&mut self, direction: RotationDirection) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        // Single-state pieces have nothing to rotate into
        if active.rotation_count() <= 1 {
            return false;
        }
        match try_rotate(&self.board, &active, direction) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Apply a game action; returns whether it changed anything
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    fn running_piece(&self) -> Option<Piece> {
        if self.phase == GamePhase::Running {
            self.active
        } else {
            None
        }
    }

    /// Lock the active piece, clear rows, score and spawn the next piece
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let outcome = self.board.lock(&piece.cells(), piece.kind);
        self.events.push(GameEvent::PieceLocked { kind: piece.kind });
        if outcome == LockOutcome::ToppedOut {
            self.end_game(GameOverReason::ToppedOut);
            return;
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            let points = calculate_line_score(cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines += cleared as u32;
            self.events.push(GameEvent::LinesCleared {
                count: cleared as u32,
                points,
            });
            log::debug!(
                "cleared {} line(s) for {} points (total lines {})",
                cleared,
                points,
                self.lines
            );

            let level = calculate_level(self.lines);
            if level != self.level {
                self.level = level;
                self.gravity_ms = get_drop_interval_ms(level);
                self.events.push(GameEvent::LevelUp { level });
                log::debug!("level {} (gravity {} ms)", level, self.gravity_ms);
            }
        }

        self.drop_timer_ms = 0;
        self.spawn_next();
    }

    /// Promote the next piece and draw a new one; a blocked spawn ends the game
    fn spawn_next(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.queue.draw(),
        };
        self.next = Some(self.queue.draw());

        let piece = Piece::spawn(kind, self.board.width());
        if collides(&self.board, &piece) {
            self.active = None;
            self.end_game(GameOverReason::SpawnBlocked);
            return false;
        }

        self.active = Some(piece);
        true
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
            reason,
        });
        log::info!(
            "game over ({}): score {}, level {}, lines {}",
            reason.as_str(),
            self.score,
            self.level,
            self.lines
        );
    }

    /// Take every event produced since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Row the active piece would come to rest on
    pub fn ghost_y(&self) -> Option<i16> {
        let active = self.active?;
        Some(active.y + drop_distance(&self.board, &active))
    }

    /// Fill `out` with the current state, reusing its board buffer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.gravity_ms = self.gravity_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            board: Board::default(),
            queue: PieceQueue::default(),
            active: None,
            next: None,
            phase: GamePhase::Ready,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            gravity_ms: get_drop_interval_ms(START_LEVEL),
            drop_timer_ms: 0,
            events: Vec::new(),
        }
    }
}
