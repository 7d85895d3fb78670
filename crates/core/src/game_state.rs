//! Game state module - manages the complete game state
//!
//! Ties the board, pieces, randomizer and scoring together. Time is driven
//! from outside: every call to [`GameState::tick`] is one gravity step, and the
//! caller schedules ticks using [`GameState::interval_ms`].
//!
//! A gravity step spawns a piece when none is falling, then moves the falling
//! piece one row down. A piece that cannot move down locks immediately, full
//! rows are cleared and scored, and the next step spawns the following piece.

use crate::board::Board;
use crate::pieces::{get_shape, spawn_position, try_rotate, PieceShape};
use crate::rng::PieceQueue;
use crate::rules::GameRules;
use crate::scoring::{gravity_interval_ms, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GamePhase, PieceKind, Rotation};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board positions of the four minos
    pub fn minos(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether the piece would fit after shifting by (dx, dy)
    pub fn fits_at(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.minos()
            .iter()
            .all(|&(x, y)| board.is_free(x + dx, y + dy))
    }

    pub fn fits(&self, board: &Board) -> bool {
        self.fits_at(board, 0, 0)
    }
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    rules: GameRules,
    board: Board,
    active: Option<Tetromino>,
    next: PieceKind,
    piece_queue: PieceQueue,
    phase: GamePhase,
    score: u32,
    lines: u32,
    interval_ms: u32,
    /// Pieces spawned since the last start
    pieces_spawned: u32,
    /// Number of times the game was (re)started
    games_started: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle game.
    ///
    /// `rules` must pass [`GameRules::validate`]; board dimensions outside
    /// `MIN_BOARD_DIM..=MAX_BOARD_DIM` break spawn and collision arithmetic.
    pub fn new(rules: GameRules, seed: u32) -> Self {
        debug_assert!(rules.validate().is_ok(), "invalid rules: {rules:?}");
        let piece_queue = PieceQueue::new(seed, rules.randomizer);
        let next = piece_queue.peek();

        Self {
            rules,
            board: Board::new(rules.board_width, rules.board_height),
            active: None,
            next,
            piece_queue,
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            interval_ms: rules.start_interval_ms,
            pieces_spawned: 0,
            games_started: 0,
            last_event: None,
        }
    }

    /// Start a new game, discarding any game in progress
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.interval_ms = self.rules.start_interval_ms;
        self.pieces_spawned = 0;
        self.last_event = None;
        self.games_started = self.games_started.wrapping_add(1);
        self.phase = GamePhase::Running;
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// The kind the next spawn will use
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn seed(&self) -> u32 {
        self.piece_queue.seed()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Option<Tetromino>) {
        self.active = piece;
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_visible_u8(&mut out.board);
        out.width = self.board.width();
        out.height = self.board.height();
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.interval_ms = self.interval_ms;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// One gravity step. Returns whether the state changed.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        if self.active.is_none() && !self.spawn_piece() {
            // Game over
            return true;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Spawn the next piece above the grid.
    ///
    /// If the new piece cannot fall a single row the game is over. The piece
    /// is still wholly above the grid at that point, so locking it would
    /// leave nothing on the board; it is dropped and no piece stays active.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        self.next = self.piece_queue.peek();

        let (x, y) = spawn_position(self.board.width());
        let piece = Tetromino::new(kind, x, y);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if !piece.fits(&self.board) || !piece.fits_at(&self.board, 0, 1) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to shift the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if !active.fits_at(&self.board, dx, dy) {
            return false;
        }

        self.active = Some(Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Try to turn the active piece a quarter turn in place
    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let result = try_rotate(
            active.kind,
            active.rotation,
            active.x,
            active.y,
            clockwise,
            |x, y| self.board.is_free(x, y),
        );

        match result {
            Some((_shape, rotation)) => {
                self.active = Some(Tetromino { rotation, ..active });
                true
            }
            None => false,
        }
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the number of rows the piece fell.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.lock_piece();
        distance
    }

    /// Lock the active piece onto the board, then clear and score full rows
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let locked = self
            .board
            .lock_piece(&active.shape(), active.x, active.y, active.kind);
        debug_assert!(locked, "active piece overlapped the board");

        let cleared = self.board.clear_full_rows().len() as u32;
        let points = line_clear_points(cleared, self.board.width());

        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        self.interval_ms = gravity_interval_ms(&self.rules, self.lines);

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared,
            points,
        });
    }

    /// Apply a player action. Returns whether it had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::Pause => match self.phase {
                GamePhase::Running => {
                    self.phase = GamePhase::Paused;
                    true
                }
                GamePhase::Paused => {
                    self.phase = GamePhase::Running;
                    true
                }
                GamePhase::Idle | GamePhase::GameOver => false,
            },
            _ if self.phase != GamePhase::Running => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameRules::default(), 1)
    }
}
