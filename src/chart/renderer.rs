use std::path::{Path, PathBuf};

use super::age_chart::{AgeChart, ChartSeries};
use super::bands::resolve_bands;
use super::raster::ChartBackend;
use super::spec::ChartSpec;
use super::style::ChartColor;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::table::AgeAxis;

/// Turns chart specs into figure files under one directory.
pub struct ChartRenderer<'a, B: ChartBackend> {
    config: &'a ChartConfig,
    backend: B,
    figure_dir: PathBuf,
}

impl<'a, B: ChartBackend> ChartRenderer<'a, B> {
    pub fn new(config: &'a ChartConfig, backend: B, figure_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            backend,
            figure_dir: figure_dir.into(),
        }
    }

    #[must_use]
    pub fn figure_dir(&self) -> &Path {
        &self.figure_dir
    }

    /// Build the drawable chart for `spec` without writing anything.
    ///
    /// # Errors
    /// Returns `AxisLookup` if a band boundary is not on `axis`.
    pub fn build(&self, spec: &ChartSpec, axis: &AgeAxis) -> Result<AgeChart> {
        let bands = resolve_bands(&self.config.bands, axis)?;
        let series = spec
            .series
            .iter()
            .map(|s| {
                let style = self.config.series.style(s.subgroup);
                ChartSeries {
                    label: style.label.clone(),
                    color: ChartColor::hex(&style.color),
                    values: s.values.clone(),
                }
            })
            .collect();

        Ok(AgeChart::new(spec.title(), axis.labels().to_vec())
            .with_size(f64::from(self.config.width), f64::from(self.config.height))
            .with_bands(bands)
            .with_series(series)
            .with_axis_titles(self.config.x_label.clone(), self.config.y_label.clone())
            .with_font_family(self.config.font_family.clone()))
    }

    /// Render `spec` to `{figure_dir}/{figure_file_name}` and return the path.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be built, drawn or written.
    pub fn render(&self, spec: &ChartSpec, axis: &AgeAxis) -> Result<PathBuf> {
        let chart = self.build(spec, axis)?;
        let path = self.figure_dir.join(spec.figure_file_name());
        self.backend.write_chart(&chart, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
