//! Assembling one category's chart from the statistics table.

use tracing::debug;

use crate::chart::{ChartSpec, Series};
use crate::config::ExclusionConfig;
use crate::error::{DeckError, Result};
use crate::table::{AgeAxis, CategoryRecord, SexSelection, StatKey, StatisticsTable, Subgroup};

/// How absent subgroup rows are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSeriesPolicy {
    /// Leave the series out of the chart.
    #[default]
    Omit,
    /// Fail the category.
    Fail,
}

impl MissingSeriesPolicy {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Fail } else { Self::Omit }
    }
}

/// Everything needed to turn a category into a `ChartSpec`.
#[derive(Debug, Clone, Copy)]
pub struct SpecBuilder<'a> {
    pub statistics: &'a StatisticsTable,
    pub axis: &'a AgeAxis,
    pub exclusions: &'a ExclusionConfig,
    pub policy: MissingSeriesPolicy,
}

impl SpecBuilder<'_> {
    /// Subgroups attempted for `category`: those in the selection that the
    /// category is not excluded from, male first.
    #[must_use]
    pub fn attempted_subgroups(&self, category: &str, sex: SexSelection) -> Vec<Subgroup> {
        Subgroup::ALL
            .into_iter()
            .filter(|&s| sex.includes(s) && !self.exclusions.excludes(s, category))
            .collect()
    }

    /// Build the chart for `category`.
    ///
    /// # Errors
    /// Returns `NonNumeric` for unreadable cells, and `MissingSeries` for an
    /// attempted subgroup with no row when the policy is `Fail`.
    pub fn build(&self, category: CategoryRecord, year: i32, sex: SexSelection) -> Result<ChartSpec> {
        let mut series = Vec::with_capacity(2);

        for subgroup in self.attempted_subgroups(&category.name, sex) {
            let key = StatKey::new(category.code.clone(), subgroup, year);
            match self.statistics.lookup(self.axis, &key)? {
                Some(values) => series.push(Series { subgroup, values }),
                None if self.policy == MissingSeriesPolicy::Fail => {
                    return Err(DeckError::MissingSeries {
                        category: category.name,
                        subgroup: subgroup.to_string(),
                    });
                }
                None => debug!(category = %category.name, %subgroup, year, "no row, series omitted"),
            }
        }

        Ok(ChartSpec {
            category,
            year,
            selection: sex,
            series,
        })
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
