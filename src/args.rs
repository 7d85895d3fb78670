use std::path::PathBuf;

use clap::Parser;

/// Command line flags. Every flag overrides the config file and environment.
#[derive(Parser, Debug, Default, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Config file to read instead of ./Tetris.toml
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the piece sequence; a fresh one is picked when absent.
    #[clap(long)]
    pub seed: Option<u32>,

    /// Board width in columns.
    #[clap(long)]
    pub width: Option<u8>,

    /// Visible board height in rows.
    #[clap(long)]
    pub height: Option<u8>,

    /// Piece randomizer: "uniform" or "bag".
    #[clap(long)]
    pub randomizer: Option<String>,

    /// Terminal columns per board cell.
    #[clap(long)]
    pub cell_width: Option<u16>,

    /// Hide the key help next to the board.
    #[clap(long)]
    pub no_help: bool,

    /// Print the effective configuration to stderr before starting.
    #[clap(long, short)]
    pub verbose: bool,
}
