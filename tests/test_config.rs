use std::fs;

use flappy_game::config::*;

use tempfile::TempDir;

#[test]
fn defaults_match_shipped_tuning() {
    let config = GameConfig::default();
    assert_eq!((config.width, config.height), (400.0, 600.0));
    assert_eq!(config.pipe_gap, 180.0);
    assert_eq!(config.half_bird(), 16.0);
    assert_eq!(config.gap_top_span(), 320.0);
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let config = GameConfig::from_toml_str("gravity = 0.25\npipe_gap = 150.0\n").unwrap();
    assert_eq!(config.gravity, 0.25);
    assert_eq!(config.pipe_gap, 150.0);
    assert_eq!(config.flap_impulse, GameConfig::default().flap_impulse);
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    assert!(matches!(
        GameConfig::from_toml_str("gravity = \"heavy\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn gap_span_never_collapses() {
    let config = GameConfig {
        height: 200.0,
        ..GameConfig::default()
    };
    assert_eq!(config.gap_top_span(), 1.0);
}

#[test]
fn load_reads_file_and_reports_missing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io(_))));

    fs::write(&path, "auto_flap_interval = 12\n").unwrap();
    assert_eq!(GameConfig::load(&path).unwrap().auto_flap_interval, 12);
}
