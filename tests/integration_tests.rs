//! Integration tests for the game loop, driven only through player actions and ticks

use tetris::core::{gravity_interval_ms, GameRules, GameState, PieceQueue, Randomizer, SimpleRng};
use tetris::types::{GameAction, GamePhase, PieceKind, BUFFER_ROWS};

fn started(seed: u32) -> GameState {
    let mut state = GameState::new(GameRules::default(), seed);
    assert!(state.apply_action(GameAction::Start));
    state
}

fn hidden_rows_empty(state: &GameState) -> bool {
    let hidden = BUFFER_ROWS as usize * state.board().width() as usize;
    state.board().cells()[..hidden].iter().all(|c| c.is_none())
}

/// Spawn-and-drop until the stack reaches the top.
fn play_until_game_over(state: &mut GameState) {
    for _ in 0..500 {
        state.tick();
        if state.phase() == GamePhase::GameOver {
            return;
        }
        state.apply_action(GameAction::HardDrop);
    }
    panic!("stacking in one column never ended the game");
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(GameRules::default(), 12345);
    assert_eq!(state.phase(), GamePhase::Idle);
    assert!(!state.tick());
    assert!(!state.apply_action(GameAction::MoveLeft));

    let first = state.next_piece();
    state.apply_action(GameAction::Start);
    assert!(state.is_running());
    assert!(state.active().is_none());
    assert_eq!(state.interval_ms(), 500);

    // First tick spawns two rows above the grid and drops one row.
    assert!(state.tick());
    let active = state.active().unwrap();
    assert_eq!(active.kind, first);
    assert_eq!((active.x, active.y), (4, -1));
    assert_eq!(state.pieces_spawned(), 1);
}

#[test]
fn test_hard_drop_locks_on_the_floor() {
    let mut state = started(7);
    state.tick();
    let kind = state.active().unwrap().kind;

    assert!(state.apply_action(GameAction::HardDrop));
    assert!(state.active().is_none());
    assert_eq!(state.board().visible_filled(), 4);

    let event = state.take_last_event().unwrap();
    assert_eq!(event.kind, kind);
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(state.take_last_event(), None);

    // Next tick brings the next piece.
    state.tick();
    assert!(state.active().is_some());
    assert_eq!(state.pieces_spawned(), 2);
}

#[test]
fn test_hard_drop_without_piece_is_ignored() {
    let mut state = started(7);
    assert!(!state.apply_action(GameAction::HardDrop));
}

#[test]
fn test_move_stops_at_wall() {
    let mut state = started(99);
    state.tick();

    let mut moves = 0;
    while state.apply_action(GameAction::MoveLeft) {
        moves += 1;
        assert!(moves < 10);
    }
    let active = state.active().unwrap();
    let min_x = active.minos().iter().map(|m| m.0).min().unwrap();
    assert_eq!(min_x, 0);
    assert!(active.fits(state.board()));
}

#[test]
fn test_gravity_locks_piece_when_blocked() {
    let mut state = started(3);
    let mut ticks = 0;
    state.tick();
    while state.active().is_some() {
        state.tick();
        ticks += 1;
        assert!(ticks < 30);
    }
    assert_eq!(state.board().visible_filled(), 4);
    assert!(state.take_last_event().is_some());
}

#[test]
fn test_pause_freezes_the_game() {
    let mut state = started(5);
    state.tick();
    let before = state.snapshot();

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), GamePhase::Paused);
    assert!(!state.tick());
    assert!(!state.apply_action(GameAction::MoveRight));
    assert!(!state.apply_action(GameAction::HardDrop));

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), GamePhase::Running);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_game_over_and_restart() {
    let mut state = started(2024);
    play_until_game_over(&mut state);

    assert_eq!(state.phase(), GamePhase::GameOver);
    assert!(state.active().is_none());
    // Pieces that topped out left nothing in the hidden rows.
    assert!(hidden_rows_empty(&state));
    assert!(!state.tick());
    assert!(!state.apply_action(GameAction::RotateCw));
    assert!(!state.apply_action(GameAction::Pause));

    assert!(state.apply_action(GameAction::Start));
    assert!(state.is_running());
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.board().visible_filled(), 0);
    assert!(state.board().cells().iter().all(|c| c.is_none()));
    assert_eq!(state.games_started(), 2);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::RotateCcw,
        GameAction::HardDrop,
    ];

    let mut a = started(42);
    let mut b = started(42);
    for _ in 0..20 {
        for action in script {
            a.tick();
            b.tick();
            assert_eq!(a.apply_action(action), b.apply_action(action));
        }
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_random_play_keeps_invariants() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::HardDrop,
    ];
    let mut rng = SimpleRng::new(777);
    let mut state = started(31337);
    let rules = *state.rules();

    for _ in 0..5000 {
        match rng.next_range(8) {
            0..=4 => {
                state.apply_action(actions[rng.next_range(actions.len() as u32) as usize]);
            }
            _ => {
                state.tick();
            }
        }

        if let Some(active) = state.active() {
            assert!(active.fits(state.board()));
        }
        assert_eq!(state.score(), state.lines() * rules.board_width as u32);
        assert_eq!(state.interval_ms(), gravity_interval_ms(&rules, state.lines()));
        assert!(state.interval_ms() >= rules.min_interval_ms);
        assert!(hidden_rows_empty(&state));

        if state.phase() == GamePhase::GameOver {
            state.apply_action(GameAction::Start);
        }
    }
}

#[test]
fn test_seven_bag_deals_each_kind_once_per_bag() {
    let mut queue = PieceQueue::new(9, Randomizer::SevenBag);
    for _ in 0..3 {
        let mut seen: Vec<PieceKind> = (0..7).map(|_| queue.draw()).collect();
        seen.sort_by_key(|k| k.index());
        assert_eq!(seen, PieceKind::ALL.to_vec());
    }
}

#[test]
fn test_custom_board_size() {
    let rules = GameRules {
        board_width: 6,
        board_height: 8,
        randomizer: Randomizer::SevenBag,
        ..GameRules::default()
    };
    let mut state = GameState::new(rules, 1);
    state.apply_action(GameAction::Start);
    state.tick();

    let snap = state.snapshot();
    assert_eq!((snap.width, snap.height), (6, 8));
    assert_eq!(snap.board.len(), 48);
    assert_eq!(snap.active.unwrap().x, 2);
}
