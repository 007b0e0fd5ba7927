//! Session scenarios - lifecycle, gravity, lock sequence and scoring

use blockfall::core::{
    GameEvent, GameOverReason, Randomizer, ScoringPolicy, Session, SessionConfig,
};
use blockfall::types::{GameAction, GamePhase, PieceKind};

fn scripted(width: u16, height: u16, kinds: &[PieceKind]) -> Session {
    let config = SessionConfig::default()
        .with_size(width, height)
        .with_randomizer(Randomizer::Sequence(kinds.to_vec()))
        .with_scoring(ScoringPolicy::NONE);
    Session::new(config).unwrap()
}

#[test]
fn o_piece_falls_eighteen_rows_then_locks() {
    let mut session = scripted(10, 20, &[PieceKind::O, PieceKind::T]);
    assert!(session.start());

    let spawned = session.active().unwrap();
    assert_eq!((spawned.kind, spawned.x, spawned.y), (PieceKind::O, 4, 0));

    for _ in 0..18 {
        assert!(session.tick(1000));
    }
    assert_eq!(session.active().unwrap().y, 18);
    assert_eq!(session.board().occupied_count(), 0);

    // The 19th step fails and locks
    assert!(session.tick(1000));
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(session.board().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(session.board().occupied_count(), 4);
    assert_eq!(session.active().unwrap().kind, PieceKind::T);
}

#[test]
fn completing_bottom_row_scores_one_line() {
    // On a 4-wide board a horizontal I fills a whole row by itself
    let mut session = scripted(4, 4, &[PieceKind::I]);
    session.start();
    session.take_events();

    assert!(session.hard_drop());
    assert_eq!(session.lines(), 1);
    assert_eq!(session.score(), 100 * session.level());
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(
        session.take_events(),
        vec![
            GameEvent::PieceLocked { kind: PieceKind::I },
            GameEvent::LinesCleared {
                count: 1,
                points: 100
            },
        ]
    );
}

#[test]
fn t_rotates_off_left_wall_with_kick() {
    let mut session = scripted(10, 20, &[PieceKind::T]);
    session.start();
    assert!(session.rotate_cw());
    assert_eq!(session.active().unwrap().rotation, 1);

    while session.move_left() {}
    let pressed = session.active().unwrap();
    assert_eq!(pressed.x, -1);

    assert!(session.rotate_cw());
    let rotated = session.active().unwrap();
    assert_eq!(rotated.rotation, 2);
    assert_eq!(rotated.x, 0);
    assert_eq!(rotated.y, pressed.y);
}

#[test]
fn blocked_spawn_ends_game_without_writing() {
    // Ten O pieces fill columns 4-5 to the top; the eleventh cannot spawn.
    let mut session = scripted(10, 20, &[PieceKind::O]);
    session.start();
    for _ in 0..10 {
        assert!(session.is_running());
        session.hard_drop();
    }

    assert!(session.is_game_over());
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.board().occupied_count(), 40);
    assert!(session.active().is_none());
    assert_eq!(
        session.take_events().last(),
        Some(&GameEvent::GameOver {
            final_score: 0,
            reason: GameOverReason::SpawnBlocked
        })
    );

    // Commands are ignored once the game is over
    assert!(!session.move_left());
    assert!(!session.hard_drop());
    assert!(!session.tick(10_000));
    assert!(!session.toggle_pause());
}

#[test]
fn upward_kick_above_grid_then_lock_tops_out() {
    // Two I pieces stack on the bottom rows of a 4-tall board, under the T spawn
    let mut session = scripted(10, 4, &[PieceKind::I, PieceKind::I, PieceKind::T]);
    session.start();
    assert_eq!(session.active().unwrap().y, -1);
    assert!(session.hard_drop());
    assert!(session.hard_drop());
    for x in 3..=6 {
        assert!(session.board().is_occupied(x, 2));
        assert!(session.board().is_occupied(x, 3));
    }

    // Clockwise T hits row 2 in place and one step either side; the up kick fits
    let spawned = session.active().unwrap();
    assert_eq!((spawned.kind, spawned.x, spawned.y), (PieceKind::T, 4, 0));
    assert!(session.rotate_cw());
    let kicked = session.active().unwrap();
    assert_eq!((kicked.rotation, kicked.x, kicked.y), (1, 4, -1));
    assert!(kicked.cells().iter().any(|&(_, y)| y < 0));

    session.take_events();
    assert!(session.hard_drop());
    assert!(session.is_game_over());
    assert_eq!(
        session.take_events(),
        vec![
            GameEvent::PieceLocked { kind: PieceKind::T },
            GameEvent::GameOver {
                final_score: 0,
                reason: GameOverReason::ToppedOut
            },
        ]
    );
    // Only the on-grid minos were written
    assert_eq!(session.board().occupied_count(), 11);
}

#[test]
fn restart_from_any_state() {
    let mut session = scripted(10, 20, &[PieceKind::O]);
    session.restart();
    assert!(session.is_running());

    session.hard_drop();
    session.toggle_pause();
    assert!(session.is_paused());
    // start() is refused while a game is in progress
    assert!(!session.start());

    session.restart();
    assert!(session.is_running());
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(session.score(), 0);
}

#[test]
fn apply_action_dispatches_commands() {
    let mut session = scripted(10, 20, &[PieceKind::T, PieceKind::I]);
    assert!(!session.apply_action(GameAction::MoveLeft));
    assert!(session.apply_action(GameAction::Start));

    assert!(session.apply_action(GameAction::MoveLeft));
    assert_eq!(session.active().unwrap().x, 3);
    assert!(session.apply_action(GameAction::MoveRight));
    assert!(session.apply_action(GameAction::RotateCcw));
    assert_eq!(session.active().unwrap().rotation, 3);
    assert!(session.apply_action(GameAction::RotateCw));
    assert!(session.apply_action(GameAction::SoftDrop));
    assert_eq!(session.active().unwrap().y, 1);

    assert!(session.apply_action(GameAction::Pause));
    assert!(session.is_paused());
    assert!(session.apply_action(GameAction::Pause));

    assert!(session.apply_action(GameAction::HardDrop));
    assert_eq!(session.active().unwrap().kind, PieceKind::I);

    assert!(session.apply_action(GameAction::Restart));
    assert_eq!(session.board().occupied_count(), 0);
}

#[test]
fn soft_drop_bonus_depends_on_policy() {
    let config = SessionConfig::default().with_randomizer(Randomizer::Sequence(vec![PieceKind::T]));
    let mut paying = Session::new(config.clone()).unwrap();
    let mut free = Session::new(config.with_scoring(ScoringPolicy::NONE)).unwrap();
    paying.start();
    free.start();

    for _ in 0..5 {
        paying.soft_drop();
        free.soft_drop();
    }
    assert_eq!(paying.score(), 5);
    assert_eq!(free.score(), 0);
}

#[test]
fn gravity_speeds_up_with_level() {
    // 4-wide board: every I clears a line, ten clears reach level 2
    let mut session = scripted(4, 8, &[PieceKind::I]);
    session.start();
    for _ in 0..10 {
        session.hard_drop();
    }
    assert_eq!(session.lines(), 10);
    assert_eq!(session.level(), 2);
    assert_eq!(session.gravity_interval_ms(), 900);

    // Ten level-1 singles; the eleventh scores at level 2
    assert_eq!(session.score(), 1000);
    session.hard_drop();
    assert_eq!(session.score(), 1200);

    let events = session.take_events();
    assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
}

#[test]
fn tick_respects_current_gravity() {
    let mut session = scripted(4, 20, &[PieceKind::I]);
    session.start();
    for _ in 0..10 {
        session.hard_drop();
    }
    let y = session.active().unwrap().y;
    assert!(!session.tick(899));
    assert!(session.tick(1));
    assert_eq!(session.active().unwrap().y, y + 1);
}

#[test]
fn start_with_resizes_board() {
    let mut session = scripted(10, 20, &[PieceKind::T]);
    session.start();
    session.hard_drop();

    assert!(session
        .start_with(SessionConfig::default().with_size(3, 20))
        .is_err());
    assert_eq!(session.board().width(), 10);
    assert_eq!(session.board().occupied_count(), 4);

    session
        .start_with(SessionConfig::default().with_size(12, 16).with_seed(7))
        .unwrap();
    assert!(session.is_running());
    assert_eq!((session.board().width(), session.board().height()), (12, 16));
    assert_eq!(session.config().seed, 7);
}

#[test]
fn same_seed_same_game() {
    let config = SessionConfig::default().with_seed(4242).with_randomizer(Randomizer::Bag);
    let mut a = Session::new(config.clone()).unwrap();
    let mut b = Session::new(config).unwrap();
    a.start();
    b.start();
    for _ in 0..20 {
        if a.is_game_over() {
            break;
        }
        assert_eq!(a.active(), b.active());
        assert_eq!(a.next(), b.next());
        a.hard_drop();
        b.hard_drop();
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.score(), b.score());
}

#[test]
fn snapshot_tracks_queries() {
    let mut session = scripted(10, 20, &[PieceKind::J, PieceKind::Z]);
    session.start();
    session.move_right();
    let snap = session.snapshot();

    let active = session.active().unwrap();
    let shot = snap.active.unwrap();
    assert_eq!((shot.kind, shot.x, shot.y), (active.kind, active.x, active.y));
    assert_eq!(shot.cells.to_vec(), active.cells().to_vec());
    assert_eq!(snap.ghost_y, session.ghost_y());
    assert_eq!(snap.next, Some(PieceKind::Z));
    assert_eq!(snap.gravity_ms, 1000);
    assert!(snap.playable());
}
