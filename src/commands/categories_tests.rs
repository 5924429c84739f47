use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::test_support::{category_table, write_workspace};

#[test]
fn text_lists_code_and_name_in_table_order() {
    let output = format_categories(&category_table(), OutputFormat::Text).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "   150  胃");
    assert_eq!(lines[3], "   600  前立腺");
    assert_eq!(lines.last(), Some(&"4 categories"));
}

#[test]
fn json_is_an_array_of_records() {
    let output = format_categories(&category_table(), OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1]["name"], "肺");
    assert_eq!(items[1]["code"], "330");
}

#[test]
fn impl_reads_configured_table() {
    let dir = TempDir::new().unwrap();
    let config = write_workspace(dir.path());
    let cli = Cli::parse_from([
        "incidence-deck",
        "--config",
        config.to_str().unwrap(),
        "categories",
    ]);
    let Commands::Categories(args) = &cli.command else {
        panic!("Expected Categories command");
    };

    let output = run_categories_impl(args, &cli).unwrap();
    assert!(output.contains("子宮"));
}

#[test]
fn missing_table_is_run_error() {
    let cli = Cli::parse_from([
        "incidence-deck",
        "--no-config",
        "--color",
        "never",
        "categories",
        "--categories-file",
        "no/such/file.csv",
    ]);
    let Commands::Categories(args) = &cli.command else {
        panic!("Expected Categories command");
    };

    assert_eq!(run_categories(args, &cli), EXIT_RUN_ERROR);
}
