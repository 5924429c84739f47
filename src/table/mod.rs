//! Tabular inputs: the category reference table and the wide statistics table.

mod reference;
mod statistics;
mod subgroup;

use std::sync::LazyLock;

use regex::Regex;

pub use reference::{CategoryRecord, CategoryTable, ReferenceColumns};
pub use statistics::{AgeAxis, StatKey, StatisticsColumns, StatisticsTable};
pub use subgroup::{SexSelection, Subgroup};

use crate::error::{DeckError, Result};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Strip a leading byte-order mark and every run of whitespace from a header cell.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    WHITESPACE
        .replace_all(raw.trim_start_matches('\u{feff}'), "")
        .into_owned()
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

fn column_index(headers: &[String], label: &str, table: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == label)
        .ok_or_else(|| DeckError::Schema {
            label: label.to_string(),
            table,
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
