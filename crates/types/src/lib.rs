//! Shared types module - plain data and default constants
//!
//! Everything here is dependency-free so the rules crate, the terminal view and
//! the input mapping can all agree on the same vocabulary.
//!
//! # Grid
//!
//! - **Width**: 10 columns by default (x grows to the right)
//! - **Height**: 15 visible rows by default (y grows downward)
//! - **Buffer**: 4 hidden rows above the visible area (y = -4..0); pieces spawn there
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_INTERVAL_MS` | 500 | Gravity interval of a fresh game |
//! | `SPEEDUP_PER_LINE_MS` | 20 | Interval reduction per cleared line |
//! | `MIN_INTERVAL_MS` | 60 | Lower bound for the gravity interval |
//!
//! # Examples
//!
//! ```
//! use tetris_types::{GameAction, PieceKind, Rotation};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! ```

/// Default number of columns.
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default number of visible rows.
pub const DEFAULT_BOARD_HEIGHT: u8 = 15;

/// Hidden rows kept above the visible grid.
pub const BUFFER_ROWS: u8 = 4;

/// Smallest accepted board dimension.
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board dimension.
pub const MAX_BOARD_DIM: u8 = 40;

/// Gravity interval of a fresh game (500ms per row).
pub const START_INTERVAL_MS: u32 = 500;

/// Each cleared line shortens the gravity interval by this much.
pub const SPEEDUP_PER_LINE_MS: u32 = 20;

/// Gravity never gets faster than this.
pub const MIN_INTERVAL_MS: u32 = 60;

/// The seven piece kinds.
///
/// Colours used by the terminal view:
/// - **O**: yellow
/// - **I**: blue
/// - **S**: green
/// - **Z**: red
/// - **T**: purple
/// - **L**: orange
/// - **J**: dark blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds in their canonical order (also the cell code order).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Parse piece kind from a single letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("J"), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::I => 1,
            PieceKind::S => 2,
            PieceKind::Z => 3,
            PieceKind::T => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Snapshot cell code: `0` is empty, `1..=7` is a kind.
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => None,
            c => Self::from_index(c as usize - 1),
        }
    }
}

/// Orientation of a piece relative to its spawn shape.
///
/// The cycle goes North → East → South → West → North when turning clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns from the spawn orientation.
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Player intents applied to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Quarter turn clockwise about the piece origin
    RotateCw,
    /// Quarter turn counter-clockwise about the piece origin
    RotateCcw,
    /// Drop the piece as far as it goes and lock it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Start a new game (also restarts a running or finished one)
    Start,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Created but never started
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// A board cell: `None` is empty, `Some(kind)` is a locked mino of that kind.
pub type Cell = Option<PieceKind>;
