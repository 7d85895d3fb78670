//! Application configuration.
//!
//! Layers, lowest precedence first: built-in defaults, the TOML file
//! (`./Tetris.toml` or `--config`), `TETRIS_*` environment variables, command
//! line flags. The merged rules are validated before a game is created.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::args::Args;
use crate::core::{GameRules, Randomizer};

pub const DEFAULT_CONFIG_PATH: &str = "Tetris.toml";

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub board: BoardSection,
    pub speed: SpeedSection,
    pub game: GameSection,
    pub view: ViewSection,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSection {
    pub width: Option<u8>,
    pub height: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SpeedSection {
    pub start_interval_ms: Option<u32>,
    pub speedup_per_line_ms: Option<u32>,
    pub min_interval_ms: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameSection {
    pub randomizer: Option<String>,
    pub seed: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewSection {
    pub cell_width: Option<u16>,
    pub show_help: Option<bool>,
}

impl FileConfig {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("parsing config file")
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("in {}", path.display()))
    }
}

/// Fully merged settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub rules: GameRules,
    pub seed: u32,
    pub cell_width: u16,
    pub show_help: bool,
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            seed: 1,
            cell_width: 2,
            show_help: true,
            source: None,
        }
    }
}

impl AppConfig {
    /// Load every layer for a real run.
    pub fn load(args: &Args) -> Result<Self> {
        let (file, source) = match &args.config {
            Some(path) => (FileConfig::read(path)?, Some(path.clone())),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    (FileConfig::read(path)?, Some(path.to_path_buf()))
                } else {
                    (FileConfig::default(), None)
                }
            }
        };

        let mut config = Self {
            seed: time_seed(),
            source,
            ..Self::default()
        };
        config.apply_file(&file)?;
        config.merge_env(|name| std::env::var(name).ok());
        config.apply_args(args)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_file(&mut self, file: &FileConfig) -> Result<()> {
        let rules = &mut self.rules;
        set_if(&mut rules.board_width, file.board.width);
        set_if(&mut rules.board_height, file.board.height);
        set_if(&mut rules.start_interval_ms, file.speed.start_interval_ms);
        set_if(&mut rules.speedup_per_line_ms, file.speed.speedup_per_line_ms);
        set_if(&mut rules.min_interval_ms, file.speed.min_interval_ms);
        if let Some(name) = &file.game.randomizer {
            rules.randomizer = parse_randomizer(name)?;
        }
        set_if(&mut self.seed, file.game.seed);
        set_if(&mut self.cell_width, file.view.cell_width);
        set_if(&mut self.show_help, file.view.show_help);
        Ok(())
    }

    /// Apply `TETRIS_*` variables. Values that do not parse are reported and skipped.
    pub fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env_value(&lookup, "TETRIS_SEED") {
            self.seed = v;
        }
        if let Some(v) = env_value(&lookup, "TETRIS_BOARD_WIDTH") {
            self.rules.board_width = v;
        }
        if let Some(v) = env_value(&lookup, "TETRIS_BOARD_HEIGHT") {
            self.rules.board_height = v;
        }
        if let Some(v) = env_value(&lookup, "TETRIS_START_INTERVAL_MS") {
            self.rules.start_interval_ms = v;
        }
        if let Some(name) = lookup("TETRIS_RANDOMIZER") {
            match Randomizer::from_str(&name) {
                Some(r) => self.rules.randomizer = r,
                None => eprintln!("ignoring TETRIS_RANDOMIZER={name}: expected uniform or bag"),
            }
        }
    }

    pub fn apply_args(&mut self, args: &Args) -> Result<()> {
        set_if(&mut self.seed, args.seed);
        set_if(&mut self.rules.board_width, args.width);
        set_if(&mut self.rules.board_height, args.height);
        if let Some(name) = &args.randomizer {
            self.rules.randomizer = parse_randomizer(name)?;
        }
        set_if(&mut self.cell_width, args.cell_width);
        if args.no_help {
            self.show_help = false;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate().context("invalid game rules")?;
        if !(1..=4).contains(&self.cell_width) {
            bail!("cell width {} is outside 1..=4", self.cell_width);
        }
        Ok(())
    }

    /// Startup banner on stderr.
    pub fn print_banner(&self) {
        eprintln!("----------------------------------------");
        eprintln!("Tetris configuration:");
        match &self.source {
            Some(path) => eprintln!("  Source: {}", path.display()),
            None => eprintln!("  Source: defaults"),
        }
        eprintln!(
            "  Board: {}x{}",
            self.rules.board_width, self.rules.board_height
        );
        eprintln!(
            "  Gravity: {}ms, -{}ms per line, floor {}ms",
            self.rules.start_interval_ms,
            self.rules.speedup_per_line_ms,
            self.rules.min_interval_ms
        );
        eprintln!(
            "  Randomizer: {} (seed {})",
            self.rules.randomizer.as_str(),
            self.seed
        );
        eprintln!("----------------------------------------");
    }
}

fn set_if<T: Copy>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn env_value<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("ignoring {name}={raw}: not a valid number");
            None
        }
    }
}

fn parse_randomizer(name: &str) -> Result<Randomizer> {
    Randomizer::from_str(name)
        .ok_or_else(|| anyhow!("unknown randomizer {name:?} (expected \"uniform\" or \"bag\")"))
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
