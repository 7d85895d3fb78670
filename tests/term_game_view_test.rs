use tetris::core::{GameRules, GameState};
use tetris::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tetris::types::{GameAction, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_below_title() {
    let snap = GameState::default().snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide; 15 rows + border + title = 19 high.
    let fb = view.render(&snap, Viewport::new(22, 19));

    assert!(fb.row_text(0).contains("TETRIS!"));
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(21, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::default().snapshot();
    snap.set_cell(0, 14, PieceKind::I.code());

    let fb = GameView::default().render(&snap, Viewport::new(22, 19));

    // Inside the border at (1, 3); bottom row is 14 rows further down.
    let y = 3 + 14;
    assert_eq!(fb.get(1, y).unwrap().ch, '█');
    assert_eq!(fb.get(2, y).unwrap().ch, '█');
    assert_eq!(fb.get(3, y).unwrap().ch, '·');
}

#[test]
fn term_view_shows_phase_overlays() {
    let mut state = GameState::default();
    let view = GameView::default();
    let vp = Viewport::new(22, 19);

    assert!(screen_text(&view.render(&state.snapshot(), vp)).contains("PRESS ENTER"));

    state.apply_action(GameAction::Start);
    state.tick();
    let running = screen_text(&view.render(&state.snapshot(), vp));
    assert!(!running.contains("PRESS ENTER"));
    assert!(!running.contains("PAUSED"));

    state.apply_action(GameAction::Pause);
    assert!(screen_text(&view.render(&state.snapshot(), vp)).contains("PAUSED"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::default().snapshot();
    snap.score = 1234;
    snap.lines = 10;

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
    assert!(all.contains("pause"));

    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(22, 19)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_help_can_be_hidden() {
    let snap = GameState::default().snapshot();
    let view = GameView::default().with_help(false);
    let all = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(all.contains("SCORE"));
    assert!(!all.contains("pause"));
}

#[test]
fn term_view_top_anchor_and_cell_width() {
    let rules = GameRules {
        board_width: 6,
        board_height: 6,
        ..GameRules::default()
    };
    let snap = GameState::new(rules, 1).snapshot();
    let view = GameView::new(3).with_anchor_y(AnchorY::Top);

    let layout = view.layout(&snap, Viewport::new(40, 40));
    assert_eq!(layout.frame_w, 6 * 3 + 2);
    assert_eq!(layout.frame_h, 8);
    assert_eq!(layout.frame_y, 2);
}

#[test]
fn term_view_reuses_framebuffer() {
    let mut state = GameState::default();
    state.apply_action(GameAction::Start);
    let view = GameView::default();

    let mut fb = FrameBuffer::new(0, 0);
    for _ in 0..5 {
        state.tick();
        view.render_into(&state.snapshot(), Viewport::new(40, 20), &mut fb);
        assert_eq!((fb.width(), fb.height()), (40, 20));
    }
}
