use std::path::PathBuf;

use super::*;
use crate::error::DeckError;
use crate::pipeline::{Artifact, CategorySelection, Selection};
use crate::table::SexSelection;

fn report() -> RunReport {
    RunReport {
        selection: Selection::new(2018, SexSelection::Both, CategorySelection::All),
        artifact: Artifact {
            file_name: "全部位_2018_総数.pptx".to_string(),
            path: PathBuf::from("out/全部位_2018_総数.pptx"),
        },
        categories: vec![
            CategoryOutcome::Added {
                category: "胃".to_string(),
                title: "胃（2018年・総数）".to_string(),
                figure: PathBuf::from("figures/150_2018_総数.png"),
            },
            CategoryOutcome::Skipped {
                category: "肺".to_string(),
                kind: "NonNumeric",
                reason: DeckError::NonNumeric {
                    column: "0-4歳".to_string(),
                    value: "n/a".to_string(),
                }
                .to_string(),
            },
        ],
    }
}

#[test]
fn lists_slides_skips_and_summary() {
    let output = TextFormatter::new(ColorMode::Never).format(&report()).unwrap();

    assert!(output.contains("✓ 胃（2018年・総数）\n"));
    assert!(output.contains("✗ SKIPPED 肺\n   Reason: Non-numeric value 'n/a' in column '0-4歳'\n"));
    assert!(output.contains("Summary: 1 slides, 1 skipped\n"));
    assert!(output.contains("Deck: out/全部位_2018_総数.pptx\n"));
    assert!(!output.contains("Figure:"));
}

#[test]
fn verbose_shows_figure_paths() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&report())
        .unwrap();
    assert!(output.contains("   Figure: figures/150_2018_総数.png\n"));
}

#[test]
fn colors_wrap_status_markers() {
    let output = TextFormatter::new(ColorMode::Always).format(&report()).unwrap();
    assert!(output.contains("\x1b[32m✓\x1b[0m"));
    assert!(output.contains("\x1b[33m✗ SKIPPED\x1b[0m"));
}

#[test]
fn empty_run_has_only_summary() {
    let empty = RunReport {
        categories: Vec::new(),
        ..report()
    };
    let output = TextFormatter::new(ColorMode::Never).format(&empty).unwrap();
    assert!(output.starts_with("Summary: 0 slides, 0 skipped\n"));
}
