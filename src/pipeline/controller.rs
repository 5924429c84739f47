use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::naming::{artifact_file_name, artifact_stem};
use super::report::{Artifact, CategoryOutcome, RunOutcome, RunReport};
use super::selection::Selection;
use super::spec::{MissingSeriesPolicy, SpecBuilder};
use crate::chart::{ChartBackend, ChartRenderer, resolve_bands};
use crate::config::Config;
use crate::deck::Deck;
use crate::error::{DeckError, Result};
use crate::table::{AgeAxis, CategoryTable, StatisticsTable};

/// Whether a run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Running,
}

/// Drives one run: categories in, one deck out.
///
/// The tables are loaded once by the caller and only read here.
pub struct Controller<'a, B: ChartBackend> {
    config: &'a Config,
    categories: &'a CategoryTable,
    statistics: &'a StatisticsTable,
    axis: AgeAxis,
    renderer: ChartRenderer<'a, B>,
    deck_dir: PathBuf,
    state: PipelineState,
}

impl<'a, B: ChartBackend> Controller<'a, B> {
    /// Resolve the age axis and check that every band boundary lies on it.
    ///
    /// # Errors
    /// Returns `Schema` if an axis or band boundary label is missing from
    /// the statistics header, or `Config` for a malformed band.
    pub fn new(
        config: &'a Config,
        categories: &'a CategoryTable,
        statistics: &'a StatisticsTable,
        backend: B,
    ) -> Result<Self> {
        let axis = statistics.resolve_axis(&config.axis.first, &config.axis.last)?;
        resolve_bands(&config.chart.bands, &axis).map_err(|e| match e {
            DeckError::AxisLookup(label) => DeckError::Schema {
                label,
                table: "statistics",
            },
            other => other,
        })?;
        debug!(brackets = axis.len(), "age axis resolved");

        Ok(Self {
            config,
            categories,
            statistics,
            axis,
            renderer: ChartRenderer::new(&config.chart, backend, &config.output.figure_dir),
            deck_dir: config.output.deck_dir.clone(),
            state: PipelineState::Idle,
        })
    }

    #[must_use]
    pub const fn state(&self) -> PipelineState {
        self.state
    }

    #[must_use]
    pub const fn axis(&self) -> &AgeAxis {
        &self.axis
    }

    #[must_use]
    pub fn deck_dir(&self) -> &Path {
        &self.deck_dir
    }

    /// Run the pipeline for `selection`, calling `observe` after each
    /// category.
    ///
    /// Failures inside one category become `CategoryOutcome::Skipped` and
    /// the run goes on. An empty category set returns `NothingSelected`
    /// without writing anything.
    ///
    /// # Errors
    /// Returns an error for an out-of-range year, or if a directory cannot
    /// be created or the deck cannot be built or saved.
    pub fn generate(
        &mut self,
        selection: &Selection,
        observe: impl FnMut(&CategoryOutcome),
    ) -> Result<RunOutcome> {
        selection.validate(&self.config.years)?;

        let targets = selection.resolve_targets(self.categories);
        if targets.is_empty() {
            info!("no categories selected");
            return Ok(RunOutcome::NothingSelected);
        }

        self.state = PipelineState::Running;
        let result = self.run(selection, &targets, observe);
        self.state = PipelineState::Idle;

        result.map(RunOutcome::Completed)
    }

    fn run(
        &self,
        selection: &Selection,
        targets: &[String],
        mut observe: impl FnMut(&CategoryOutcome),
    ) -> Result<RunReport> {
        fs::create_dir_all(self.renderer.figure_dir())?;
        if !self.deck_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.deck_dir)?;
        }
        info!(
            year = selection.year,
            sex = %selection.sex,
            categories = targets.len(),
            "generating deck"
        );

        let mut deck = Deck::new(artifact_stem(selection.year, selection.sex));
        let mut outcomes = Vec::with_capacity(targets.len());

        for name in targets {
            let outcome = match self.render_category(name, selection) {
                Ok((figure, title)) => {
                    deck.add_slide(&figure, title.clone())?;
                    CategoryOutcome::Added {
                        category: name.clone(),
                        title,
                        figure,
                    }
                }
                Err(e) => {
                    info!(category = %name, error = %e, "category skipped");
                    CategoryOutcome::skipped(name.clone(), &e)
                }
            };
            observe(&outcome);
            outcomes.push(outcome);
        }

        let file_name = artifact_file_name(selection.year, selection.sex);
        let path = self.deck_dir.join(&file_name);
        deck.save(&path)?;
        info!(path = %path.display(), slides = deck.len(), "deck written");

        Ok(RunReport {
            selection: selection.clone(),
            artifact: Artifact { file_name, path },
            categories: outcomes,
        })
    }

    /// Everything that may fail for one category without failing the run.
    fn render_category(&self, name: &str, selection: &Selection) -> Result<(PathBuf, String)> {
        let record = self.categories.record(name)?;
        let spec = SpecBuilder {
            statistics: self.statistics,
            axis: &self.axis,
            exclusions: &self.config.exclusions,
            policy: MissingSeriesPolicy::from_strict(self.config.strict_missing_series),
        }
        .build(record, selection.year, selection.sex)?;

        let figure = self.renderer.render(&spec, &self.axis)?;
        Ok((figure, spec.title()))
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
