//! What the user asked for: year, sex selection and categories.

use serde::Serialize;

use crate::config::{ALL_CATEGORIES, YearRange};
use crate::error::{DeckError, Result};
use crate::table::{CategoryTable, SexSelection};

/// Categories to chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    /// Every category, in reference-table order.
    All,
    /// The given names in the given order. Duplicates are kept.
    Named(Vec<String>),
}

impl CategorySelection {
    /// Interpret raw names; the all-categories sentinel anywhere in the
    /// list selects everything.
    #[must_use]
    pub fn from_names(names: Vec<String>) -> Self {
        if names.iter().any(|n| n.trim() == ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Named(names)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub year: i32,
    pub sex: SexSelection,
    pub categories: CategorySelection,
}

impl Selection {
    #[must_use]
    pub const fn new(year: i32, sex: SexSelection, categories: CategorySelection) -> Self {
        Self {
            year,
            sex,
            categories,
        }
    }

    /// # Errors
    /// Returns `Selection` if the year is outside the supported range.
    pub fn validate(&self, years: &YearRange) -> Result<()> {
        if years.contains(self.year) {
            Ok(())
        } else {
            Err(DeckError::Selection(format!(
                "year {} is outside the supported range {}..={}",
                self.year, years.first, years.last
            )))
        }
    }

    /// Category names to process, in processing order.
    #[must_use]
    pub fn resolve_targets(&self, table: &CategoryTable) -> Vec<String> {
        match &self.categories {
            CategorySelection::All => table.names(),
            CategorySelection::Named(names) => names.clone(),
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
