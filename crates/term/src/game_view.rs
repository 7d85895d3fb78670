//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, Rotation};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Rows taken by the title above the board frame.
const TITLE_ROWS: u16 = 2;

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
            show_help: true,
        }
    }
}

/// Where the board frame landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Compute the board frame position for a snapshot in a viewport
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        let frame_w = (snap.width as u16) * self.cell_w + 2;
        let frame_h = snap.height as u16 + 2;
        let total_h = frame_h + TITLE_ROWS;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            frame_x,
            frame_y: top + TITLE_ROWS,
            frame_w,
            frame_h,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap, viewport);
        let BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
        } = layout;

        // Title.
        let title = CellStyle::new(Rgb::new(230, 50, 50), SCREEN_BG).bold();
        let title_text = "TETRIS!";
        let title_x = frame_x + frame_w.saturating_sub(title_text.len() as u16) / 2;
        fb.put_str(title_x, frame_y.saturating_sub(TITLE_ROWS), title_text, title);

        // Background for play area.
        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        fb.fill_rect(frame_x + 1, frame_y + 1, frame_w - 2, frame_h - 2, ' ', bg);

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        draw_border(fb, frame_x, frame_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..snap.height {
            for x in 0..snap.width {
                match PieceKind::from_code(snap.cell(x as i8, y as i8)) {
                    Some(kind) => self.draw_board_cell(fb, &layout, x as u16, y as u16, kind),
                    None => self.draw_empty_cell(fb, &layout, x as u16, y as u16),
                }
            }
        }

        // Active piece; minos still in the spawn buffer are not shown.
        if let Some(active) = snap.active {
            for (x, y) in active.minos() {
                if x >= 0 && y >= 0 && (x as u8) < snap.width && (y as u8) < snap.height {
                    self.draw_board_cell(fb, &layout, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        match snap.phase {
            GamePhase::Idle => self.draw_overlay(fb, &layout, &["PRESS ENTER", "TO START"]),
            GamePhase::Paused => self.draw_overlay(fb, &layout, &["PAUSED"]),
            GamePhase::GameOver => self.draw_overlay(fb, &layout, &["GAME OVER", "ENTER: AGAIN"]),
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell(fb, layout, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind), PLAY_BG).bold();
        self.fill_cell(fb, layout, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.frame_x + 1 + cell_x * self.cell_w;
        let py = layout.frame_y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(80, 200, 80), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(90, 140, 255), SCREEN_BG).bold();
        let hint = CellStyle::new(Rgb::new(150, 150, 150), SCREEN_BG).dim();

        let mut y = layout.frame_y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("SPEED ms", snap.interval_ms),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, panel_x, y, snap.next);
        y += 5;

        if self.show_help {
            for line in [
                "←→  move",
                "↑↓  rotate",
                "SPC drop",
                "P   pause",
                "Q   quit",
            ] {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line, hint);
                y += 1;
            }
        }
    }

    /// Draw a piece in its spawn orientation, top-left aligned at (x, y)
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = get_shape(kind, Rotation::North);
        let min_x = shape.iter().map(|m| m.0).min().unwrap_or(0);
        let min_y = shape.iter().map(|m| m.1).min().unwrap_or(0);
        let style = CellStyle::new(piece_color(kind), SCREEN_BG).bold();

        for (dx, dy) in shape {
            let px = x + (dx - min_x) as u16 * self.cell_w;
            let py = y + (dy - min_y) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let mid_y = layout.frame_y + layout.frame_h / 2;
        let start_y = mid_y.saturating_sub(lines.len() as u16 / 2);

        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, start_y + i as u16, text, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Display colour of each piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::O => Rgb::new(240, 220, 60),
        PieceKind::I => Rgb::new(70, 140, 255),
        PieceKind::S => Rgb::new(90, 210, 90),
        PieceKind::Z => Rgb::new(225, 60, 60),
        PieceKind::T => Rgb::new(170, 80, 210),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(40, 60, 170),
    }
}
