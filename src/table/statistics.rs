//! Wide statistics table: one row per (code, subgroup, year), one column per age bracket.
//!
//! The table is read once per process and never written afterwards, so it is
//! shared by reference with no locking.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use super::subgroup::Subgroup;
use super::{column_index, normalize_header, reader_builder};
use crate::error::{DeckError, Result};

/// Which columns hold the composite lookup key.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsColumns<'a> {
    pub code: &'a str,
    pub subgroup: &'a str,
    pub year: &'a str,
}

/// Typed lookup key for one statistics row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatKey {
    pub code: String,
    pub subgroup: Subgroup,
    pub year: i32,
}

impl StatKey {
    #[must_use]
    pub fn new(code: impl Into<String>, subgroup: Subgroup, year: i32) -> Self {
        Self {
            code: code.into(),
            subgroup,
            year,
        }
    }
}

/// Ordered age-bracket labels: the contiguous header block between the
/// configured first and last bracket, in the table's native column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeAxis {
    labels: Vec<String>,
    start: usize,
}

impl AgeAxis {
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Index of a bracket label on the axis.
    ///
    /// # Errors
    /// Returns `AxisLookup` when the label is not on the axis.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| DeckError::AxisLookup(label.to_string()))
    }

    /// Table column indices covered by the axis.
    fn columns(&self) -> RangeInclusive<usize> {
        self.start..=self.start + self.labels.len() - 1
    }
}

/// The statistics table with a first-match index over its typed keys.
#[derive(Debug, Clone)]
pub struct StatisticsTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
    index: HashMap<StatKey, usize>,
    dropped: usize,
}

impl StatisticsTable {
    /// Load the statistics table from a CSV file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, is not valid CSV, or
    /// lacks one of the key columns.
    pub fn load(path: &Path, columns: StatisticsColumns<'_>) -> Result<Self> {
        let file = File::open(path).map_err(|source| DeckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, columns)?;
        debug!(
            path = %path.display(),
            rows = table.len(),
            "loaded statistics table"
        );
        if table.dropped > 0 {
            info!(
                path = %path.display(),
                dropped = table.dropped,
                "ignored statistics rows without a usable key"
            );
        }
        Ok(table)
    }

    /// Parse the statistics table from any CSV source.
    ///
    /// Rows whose subgroup is not one of the stored subgroups, or whose year is
    /// not an integer, can never match a lookup and are dropped here. When
    /// several rows share a key the first one in table order wins.
    ///
    /// # Errors
    /// Returns an error on malformed CSV or missing key columns.
    pub fn from_reader<R: Read>(reader: R, columns: StatisticsColumns<'_>) -> Result<Self> {
        let mut csv_reader = reader_builder().from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let code_idx = column_index(&headers, &normalize_header(columns.code), "statistics")?;
        let subgroup_idx =
            column_index(&headers, &normalize_header(columns.subgroup), "statistics")?;
        let year_idx = column_index(&headers, &normalize_header(columns.year), "statistics")?;

        let mut rows = Vec::new();
        let mut index = HashMap::new();
        let mut dropped = 0_usize;

        for record in csv_reader.records() {
            let record = record?;
            let Some(key) = Self::row_key(&record, code_idx, subgroup_idx, year_idx) else {
                dropped += 1;
                continue;
            };
            index.entry(key).or_insert(rows.len());
            rows.push(record);
        }

        Ok(Self {
            headers,
            rows,
            index,
            dropped,
        })
    }

    fn row_key(
        record: &StringRecord,
        code_idx: usize,
        subgroup_idx: usize,
        year_idx: usize,
    ) -> Option<StatKey> {
        let subgroup = record.get(subgroup_idx)?.parse::<Subgroup>().ok()?;
        let year = record.get(year_idx)?.trim().parse::<i32>().ok()?;
        let code = record.get(code_idx)?.trim();
        Some(StatKey::new(code, subgroup, year))
    }

    /// Locate the age-bracket block bounded by `first` and `last`, inclusive.
    ///
    /// # Errors
    /// Returns `Schema` if either boundary label is missing, or if `last`
    /// comes before `first` in the header.
    pub fn resolve_axis(&self, first: &str, last: &str) -> Result<AgeAxis> {
        let start = column_index(&self.headers, first, "statistics")?;
        let end = column_index(&self.headers, last, "statistics")?;
        if end < start {
            return Err(DeckError::Schema {
                label: format!("{last} (after {first})"),
                table: "statistics",
            });
        }

        Ok(AgeAxis {
            labels: self.headers[start..=end].to_vec(),
            start,
        })
    }

    /// Values of the first row matching `key`, aligned to `axis`.
    ///
    /// Returns `Ok(None)` when no row matches. Empty cells become `NaN`.
    ///
    /// # Errors
    /// Returns `NonNumeric` if a bracket cell cannot be read as a number.
    pub fn lookup(&self, axis: &AgeAxis, key: &StatKey) -> Result<Option<Vec<f64>>> {
        let Some(&row_idx) = self.index.get(key) else {
            return Ok(None);
        };
        let record = &self.rows[row_idx];

        axis.columns()
            .map(|col| {
                let cell = record.get(col).unwrap_or_default().trim();
                if cell.is_empty() {
                    return Ok(f64::NAN);
                }
                cell.parse::<f64>().map_err(|_| DeckError::NonNumeric {
                    column: self.headers[col].clone(),
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Rows dropped at load because their subgroup or year could not be read.
    #[must_use]
    pub const fn dropped_rows(&self) -> usize {
        self.dropped
    }

    /// Number of keyed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
