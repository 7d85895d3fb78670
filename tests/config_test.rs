use std::path::PathBuf;

use clap::Parser;
use tetris::core::Randomizer;
use tetris::{AppConfig, Args, FileConfig};

const FULL: &str = r#"
[board]
width = 12
height = 20

[speed]
start_interval_ms = 800
speedup_per_line_ms = 10
min_interval_ms = 100

[game]
randomizer = "bag"
seed = 5

[view]
cell_width = 1
show_help = false
"#;

#[test]
fn file_values_override_defaults() {
    let file = FileConfig::parse(FULL).unwrap();
    let mut config = AppConfig::default();
    config.apply_file(&file).unwrap();

    assert_eq!(config.rules.board_width, 12);
    assert_eq!(config.rules.board_height, 20);
    assert_eq!(config.rules.start_interval_ms, 800);
    assert_eq!(config.rules.speedup_per_line_ms, 10);
    assert_eq!(config.rules.min_interval_ms, 100);
    assert_eq!(config.rules.randomizer, Randomizer::SevenBag);
    assert_eq!(config.seed, 5);
    assert_eq!(config.cell_width, 1);
    assert!(!config.show_help);
    config.validate().unwrap();
}

#[test]
fn env_overrides_file_and_flags_override_env() {
    let mut config = AppConfig::default();
    config.apply_file(&FileConfig::parse(FULL).unwrap()).unwrap();

    config.merge_env(|name| match name {
        "TETRIS_BOARD_WIDTH" => Some("14".into()),
        "TETRIS_SEED" => Some("77".into()),
        "TETRIS_RANDOMIZER" => Some("uniform".into()),
        _ => None,
    });
    assert_eq!(config.rules.board_width, 14);
    assert_eq!(config.seed, 77);
    assert_eq!(config.rules.randomizer, Randomizer::Uniform);

    let args = Args::try_parse_from(["tetris", "--width", "8", "--seed", "3"]).unwrap();
    config.apply_args(&args).unwrap();
    assert_eq!(config.rules.board_width, 8);
    assert_eq!(config.seed, 3);
    // Untouched by flags.
    assert_eq!(config.rules.board_height, 20);
}

#[test]
fn flags_parse() {
    let args = Args::try_parse_from([
        "tetris",
        "--config",
        "alt.toml",
        "--height",
        "18",
        "--randomizer",
        "bag",
        "--cell-width",
        "3",
        "--no-help",
        "-v",
    ])
    .unwrap();

    assert_eq!(args.config, Some(PathBuf::from("alt.toml")));
    assert_eq!(args.height, Some(18));
    assert_eq!(args.cell_width, Some(3));
    assert!(args.no_help);
    assert!(args.verbose);

    let mut config = AppConfig::default();
    config.apply_args(&args).unwrap();
    assert_eq!(config.rules.randomizer, Randomizer::SevenBag);
    assert!(!config.show_help);
}

#[test]
fn unknown_randomizer_flag_is_an_error() {
    let args = Args::try_parse_from(["tetris", "--randomizer", "dice"]).unwrap();
    assert!(AppConfig::default().apply_args(&args).is_err());
}

#[test]
fn invalid_board_is_rejected() {
    let mut config = AppConfig::default();
    config.rules.board_width = 2;
    let err = config.validate().unwrap_err();
    assert!(format!("{err:#}").contains("width"));

    let mut config = AppConfig::default();
    config.rules.start_interval_ms = 10;
    assert!(config.validate().is_err());
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let args = Args {
        config: Some(PathBuf::from("/nonexistent/tetris-config.toml")),
        ..Args::default()
    };
    let err = AppConfig::load(&args).unwrap_err();
    assert!(format!("{err:#}").contains("reading config file"));
}

#[test]
fn load_reads_explicit_file() {
    let path = std::env::temp_dir().join(format!("tetris-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[board]\nheight = 12\n[game]\nseed = 9\n").unwrap();

    let args = Args {
        config: Some(path.clone()),
        seed: Some(10),
        ..Args::default()
    };
    let config = AppConfig::load(&args).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.rules.board_height, 12);
    assert_eq!(config.seed, 10);
    assert_eq!(config.source, Some(path));
}

#[test]
fn shipped_config_is_valid() {
    let file = FileConfig::parse(include_str!("../Tetris.toml")).unwrap();
    let mut config = AppConfig::default();
    config.apply_file(&file).unwrap();
    config.validate().unwrap();
    assert_eq!(config.rules, tetris::core::GameRules::default());
}
