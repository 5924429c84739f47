//! Cohort bands: shaded index ranges over the age axis.

use super::style::ChartColor;
use crate::config::BandConfig;
use crate::error::{DeckError, Result};
use crate::table::AgeAxis;

/// A band resolved against a concrete axis: `start..end` is half-open.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortBand {
    pub start: usize,
    pub end: usize,
    pub color: ChartColor,
    pub opacity: f64,
}

/// Locate every band on `axis` by its boundary labels.
///
/// # Errors
/// Returns `AxisLookup` if a boundary label is not on the axis, or `Config`
/// if a band is empty or overlaps an earlier one.
pub fn resolve_bands(bands: &[BandConfig], axis: &AgeAxis) -> Result<Vec<CohortBand>> {
    let mut resolved: Vec<CohortBand> = Vec::with_capacity(bands.len());

    for band in bands {
        let start = axis.index_of(&band.first)?;
        let end = axis.index_of(&band.last)? + 1;
        if end <= start {
            return Err(DeckError::Config(format!(
                "band {}..{} ends before it starts",
                band.first, band.last
            )));
        }
        if let Some(other) = resolved.iter().find(|b| start < b.end && b.start < end) {
            return Err(DeckError::Config(format!(
                "band {}..{} overlaps axis indices {}..{}",
                band.first, band.last, other.start, other.end
            )));
        }
        resolved.push(CohortBand {
            start,
            end,
            color: ChartColor::hex(&band.color),
            opacity: band.opacity,
        });
    }

    Ok(resolved)
}

#[cfg(test)]
#[path = "bands_tests.rs"]
mod tests;
