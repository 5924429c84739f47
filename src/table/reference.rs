//! Category reference table: user-facing category names and their join codes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::{column_index, normalize_header, reader_builder};
use crate::error::{DeckError, Result};

/// A category name and the code that joins it to the statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub name: String,
    pub code: String,
}

/// Which reference-table columns hold the name and the code.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceColumns<'a> {
    pub name: &'a str,
    pub code: &'a str,
}

/// Name-to-code mapping in table order.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    entries: IndexMap<String, String>,
}

impl CategoryTable {
    /// Load the reference table from a CSV file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, is not valid CSV, or
    /// lacks one of the configured columns.
    pub fn load(path: &Path, columns: ReferenceColumns<'_>) -> Result<Self> {
        let file = File::open(path).map_err(|source| DeckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, columns)?;
        debug!(
            path = %path.display(),
            categories = table.len(),
            "loaded category table"
        );
        Ok(table)
    }

    /// Parse the reference table from any CSV source.
    ///
    /// Header names are compared after whitespace removal. A repeated name
    /// keeps its first code.
    ///
    /// # Errors
    /// Returns an error on malformed CSV or missing columns.
    pub fn from_reader<R: Read>(reader: R, columns: ReferenceColumns<'_>) -> Result<Self> {
        let mut csv_reader = reader_builder().from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let name_idx = column_index(&headers, &normalize_header(columns.name), "category")?;
        let code_idx = column_index(&headers, &normalize_header(columns.code), "category")?;

        let mut entries = IndexMap::new();
        for record in csv_reader.records() {
            let record = record?;
            let name = record.get(name_idx).unwrap_or_default().trim();
            let code = record.get(code_idx).unwrap_or_default().trim();
            if name.is_empty() {
                continue;
            }
            if entries.contains_key(name) {
                warn!(category = name, "duplicate category name, keeping first code");
                continue;
            }
            entries.insert(name.to_string(), code.to_string());
        }

        Ok(Self { entries })
    }

    /// All categories in table order.
    pub fn for_each_category(&self) -> impl Iterator<Item = CategoryRecord> + '_ {
        self.entries.iter().map(|(name, code)| CategoryRecord {
            name: name.clone(),
            code: code.clone(),
        })
    }

    #[must_use]
    pub fn lookup_code(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Resolve a name into a full record.
    ///
    /// # Errors
    /// Returns `UnknownCategory` when the name is not in the table.
    pub fn record(&self, name: &str) -> Result<CategoryRecord> {
        self.lookup_code(name)
            .map(|code| CategoryRecord {
                name: name.to_string(),
                code: code.to_string(),
            })
            .ok_or_else(|| DeckError::UnknownCategory(name.to_string()))
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
