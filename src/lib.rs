//! Terminal Tetris (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them under one name and adds the binary's configuration layer.

pub use tetris_core as core;
pub use tetris_input as input;
pub use tetris_term as term;
pub use tetris_types as types;

pub mod args;
pub mod config;

pub use args::Args;
pub use config::{AppConfig, FileConfig};
