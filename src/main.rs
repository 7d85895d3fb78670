//! Terminal Tetris runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. Gravity runs on
//! the game's own interval, which shortens as lines are cleared.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tetris::core::{GameSnapshot, GameState};
use tetris::input::{handle_key_event, should_quit};
use tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris::types::GameAction;
use tetris::{AppConfig, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args)?;
    if args.verbose {
        config.print_banner();
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::new(config.rules, config.seed);
    let view = GameView::new(config.cell_width).with_help(config.show_help);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;
    let mut last_tick = Instant::now();

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let interval = Duration::from_millis(game.interval_ms() as u64);
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if game.apply_action(action) {
                            dirty = true;
                            if action == GameAction::Start {
                                last_tick = Instant::now();
                            }
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(game.interval_ms() as u64) {
            last_tick = Instant::now();
            if game.tick() {
                dirty = true;
            }
        }
    }
}
