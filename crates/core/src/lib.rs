//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state with **zero dependencies** on
//! terminal, input or I/O. The same seed and the same sequence of calls always
//! produce the same game.
//!
//! # Module Structure
//!
//! - [`board`]: grid with a hidden spawn buffer, collision checks and line clearing
//! - [`game_state`]: falling piece, gravity steps, player actions, lifecycle
//! - [`pieces`]: the seven shapes and quarter-turn rotation
//! - [`rng`]: deterministic LCG with uniform and 7-bag randomizers
//! - [`rules`]: board size, gravity timing and randomizer selection
//! - [`scoring`]: points per cleared line and the gravity speed-up
//! - [`snapshot`]: read-only copy of a game for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn above the visible grid and fall one row per gravity step
//! - A piece that cannot fall locks at once (there is no lock delay)
//! - Rotation is a quarter turn about the piece origin, without wall kicks
//! - Each cleared line scores one point per column and makes gravity 20ms faster
//! - The game ends when a fresh piece cannot fall a single row
//!
//! # Example
//!
//! ```
//! use tetris_core::{GameRules, GameState};
//! use tetris_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(GameRules::default(), 12345);
//! game.start();
//! game.tick(); // spawns the first piece
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), GamePhase::Running);
//! assert_eq!(game.board().visible_filled(), 4);
//! ```
//!
//! # Timing
//!
//! The caller owns the clock: call [`GameState::tick`](game_state::GameState::tick)
//! once every [`GameState::interval_ms`](game_state::GameState::interval_ms).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;

pub use tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent, Tetromino};
pub use pieces::{get_shape, spawn_position, try_rotate};
pub use rng::{PieceQueue, SimpleRng};
pub use rules::{GameRules, Randomizer, RulesError};
pub use scoring::{gravity_interval_ms, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
