use crate::game_state::Tetromino;
use crate::pieces::get_shape;
use crate::types::{GamePhase, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute positions of the four minos (may lie above the visible grid)
    pub fn minos(&self) -> [(i8, i8); 4] {
        get_shape(self.kind, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a game for rendering.
///
/// `board` holds the visible rows only, row-major, as cell codes
/// (`0` empty, `1..=7` piece kind).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
    pub interval_ms: u32,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    /// Cell code at a visible position, `0` outside the grid
    pub fn cell(&self, x: i8, y: i8) -> u8 {
        if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
            return 0;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    pub fn set_cell(&mut self, x: u8, y: u8, code: u8) {
        if x < self.width && y < self.height {
            self.board[y as usize * self.width as usize + x as usize] = code;
        }
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            next: PieceKind::O,
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            interval_ms: 0,
            pieces_spawned: 0,
        }
    }
}
