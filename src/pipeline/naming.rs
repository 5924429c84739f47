//! Artifact naming. The deck is always named for all categories, even when
//! only some were selected.

use crate::config::ALL_CATEGORIES;
use crate::table::SexSelection;

/// Deck file name, e.g. `全部位_2018_総数.pptx`.
#[must_use]
pub fn artifact_file_name(year: i32, sex: SexSelection) -> String {
    format!("{}.pptx", artifact_stem(year, sex))
}

/// Deck name without extension, also used as the document title.
#[must_use]
pub fn artifact_stem(year: i32, sex: SexSelection) -> String {
    format!("{ALL_CATEGORIES}_{year}_{}", sex.label())
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
