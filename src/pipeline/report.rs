use std::path::PathBuf;

use serde::Serialize;

use super::selection::Selection;
use crate::error::DeckError;

/// What happened to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryOutcome {
    Added {
        category: String,
        title: String,
        figure: PathBuf,
    },
    Skipped {
        category: String,
        kind: &'static str,
        reason: String,
    },
}

impl CategoryOutcome {
    pub(crate) fn skipped(category: impl Into<String>, error: &DeckError) -> Self {
        Self::Skipped {
            category: category.into(),
            kind: error.error_type(),
            reason: error.to_string(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Added { category, .. } | Self::Skipped { category, .. } => category,
        }
    }
}

/// The finished deck file, ready to hand to whoever asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub file_name: String,
    pub path: PathBuf,
}

/// Result of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub selection: Selection,
    pub artifact: Artifact,
    pub categories: Vec<CategoryOutcome>,
}

impl RunReport {
    /// Slide titles in deck order.
    #[must_use]
    pub fn slide_titles(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter_map(|o| match o {
                CategoryOutcome::Added { title, .. } => Some(title.as_str()),
                CategoryOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_titles().len()
    }

    #[must_use]
    pub fn skipped(&self) -> Vec<&CategoryOutcome> {
        self.categories
            .iter()
            .filter(|o| matches!(o, CategoryOutcome::Skipped { .. }))
            .collect()
    }

    #[must_use]
    pub fn has_skips(&self) -> bool {
        self.categories
            .iter()
            .any(|o| matches!(o, CategoryOutcome::Skipped { .. }))
    }
}

/// How a generate request ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The category set was empty; nothing was written.
    NothingSelected,
    Completed(RunReport),
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
