use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::DeckError;
use crate::cli::ColorChoice;
use crate::test_support::write_workspace;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["incidence-deck"];
    argv.extend_from_slice(args);
    argv.push("categories");
    Cli::parse_from(argv)
}

#[test]
fn no_config_uses_defaults() {
    let config = load_config(&cli(&["--no-config"])).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_path_is_read() {
    let dir = TempDir::new().unwrap();
    let path = write_workspace(dir.path());

    let config = load_config(&cli(&["--config", path.to_str().unwrap()])).unwrap();

    assert_eq!(config.chart.width, 300);
    assert!(!config.chart.load_system_fonts);
    assert_eq!(config.data.categories, dir.path().join("categories.csv"));
}

#[test]
fn missing_explicit_config_is_file_read_error() {
    let result = load_config(&cli(&["--config", "does/not/exist.toml"]));
    assert!(matches!(result, Err(DeckError::FileRead { .. })));
}

#[test]
fn invalid_config_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[years]\nfirst = 2020\nlast = 2016\n").unwrap();

    let result = load_config(&cli(&["--config", path.to_str().unwrap()]));
    assert!(matches!(result, Err(DeckError::Config(_))));
}

#[test]
fn data_overrides_replace_only_given_paths() {
    let mut config = Config::default();
    let data = DataArgs {
        categories_file: None,
        statistics_file: Some(PathBuf::from("other.csv")),
    };

    apply_data_overrides(&mut config, &data);

    assert_eq!(config.data.statistics, PathBuf::from("other.csv"));
    assert_eq!(config.data.categories, Config::default().data.categories);
}

#[test]
fn load_tables_reads_both_inputs() {
    let dir = TempDir::new().unwrap();
    let path = write_workspace(dir.path());
    let config = load_config(&cli(&["--config", path.to_str().unwrap()])).unwrap();

    let (categories, statistics) = load_tables(&config).unwrap();

    assert_eq!(categories.names(), ["胃", "肺", "子宮", "前立腺"]);
    assert_eq!(statistics.len(), 6);
}

#[test]
fn load_tables_missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.data.categories = dir.path().join("absent.csv");

    match load_tables(&config) {
        Err(DeckError::FileRead { path, .. }) => assert_eq!(path, dir.path().join("absent.csv")),
        other => panic!("expected FileRead, got {other:?}"),
    }
}

#[test]
fn color_mode_follows_flag() {
    let parsed = cli(&["--color", "never"]);
    assert!(matches!(parsed.color, ColorChoice::Never));
    assert_eq!(color_mode(&parsed), ColorMode::Never);
}
