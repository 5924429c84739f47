//! What one chart shows, independent of how it is drawn.

use serde::Serialize;

use crate::table::{CategoryRecord, SexSelection, Subgroup};

/// One subgroup's counts, aligned to the age axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub subgroup: Subgroup,
    pub values: Vec<f64>,
}

/// One category's chart for a year and sex selection. Holds zero, one or
/// two series; a series with no statistics row is simply absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub category: CategoryRecord,
    pub year: i32,
    pub selection: SexSelection,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Chart and slide title, e.g. `胃（2018年・総数）`.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{}（{}年・{}）",
            self.category.name,
            self.year,
            self.selection.label()
        )
    }

    /// Figure file name, e.g. `150_2018_総数.png`.
    #[must_use]
    pub fn figure_file_name(&self) -> String {
        format!(
            "{}_{}_{}.png",
            self.category.code,
            self.year,
            self.selection.label()
        )
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
