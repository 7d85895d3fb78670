//! Terminal "game renderer" module.
//!
//! Renders into a plain framebuffer of styled characters which is then
//! flushed to the terminal with crossterm. No widget toolkit is involved.
//!
//! - [`game_view`] is pure: snapshot in, framebuffer out
//! - [`renderer`] owns the terminal and writes only what changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_core as core;
pub use tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
