//! Terminal Blockfall runner (default binary).
//!
//! Crossterm for input, the framebuffer renderer from `blockfall-term` for
//! output, and a fixed timestep driving `Session::tick`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameEvent, GameSnapshot, Randomizer, ScoringPolicy, Session, SessionConfig};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, TICK_MS};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about)]
struct Cli {
    /// Board width in cells (4-64)
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH, value_name = "COLS")]
    width: u16,

    /// Board height in cells (4-64)
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT, value_name = "ROWS")]
    height: u16,

    /// Randomizer seed; defaults to the current time
    #[arg(long)]
    seed: Option<u32>,

    /// How the next piece is chosen
    #[arg(long, value_enum, default_value_t = RandomizerArg::Uniform)]
    randomizer: RandomizerArg,

    /// Only line clears score (no soft/hard drop bonus)
    #[arg(long)]
    no_drop_bonus: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RandomizerArg {
    Uniform,
    Bag,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let randomizer = match self.randomizer {
            RandomizerArg::Uniform => Randomizer::Uniform,
            RandomizerArg::Bag => Randomizer::Bag,
        };
        let scoring = if self.no_drop_bonus {
            ScoringPolicy::NONE
        } else {
            ScoringPolicy::default()
        };
        SessionConfig::default()
            .with_size(self.width, self.height)
            .with_seed(self.seed.unwrap_or_else(clock_seed))
            .with_randomizer(randomizer)
            .with_scoring(scoring)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    // Reject bad dimensions before touching the terminal
    let session = Session::new(cli.session_config())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    let final_score = result?;
    println!("final score: {final_score}");
    Ok(())
}

/// Returns the score of the last game played
fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<u32> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(session.score());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = session.apply_action(action);
                        log::trace!("{} -> {}", action.as_str(), changed);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }

        for event in session.take_events() {
            match event {
                GameEvent::LinesCleared { count, points } => {
                    log::debug!("+{} lines, +{} points", count, points)
                }
                other => log::trace!("{:?}", other),
            }
        }
    }
}
