use tracing::info;

use crate::cli::{Cli, DataArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::output::{ColorMode, ErrorOutput};
use crate::table::{CategoryTable, StatisticsTable};

/// Load the effective configuration for this invocation.
///
/// `--no-config` skips discovery entirely; `--config` reads exactly that file.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read, parsed or validated.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let loaded = cli
        .config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;

    match &loaded.source {
        Some(path) => info!(path = %path.display(), "using configuration file"),
        None => info!("using built-in configuration"),
    }
    Ok(loaded.config)
}

pub(crate) fn apply_data_overrides(config: &mut Config, data: &DataArgs) {
    if let Some(path) = &data.categories_file {
        config.data.categories.clone_from(path);
    }
    if let Some(path) = &data.statistics_file {
        config.data.statistics.clone_from(path);
    }
}

/// Read both input tables once; callers only borrow them afterwards.
///
/// # Errors
/// Returns an error if either table cannot be read or lacks a configured column.
pub(crate) fn load_tables(config: &Config) -> Result<(CategoryTable, StatisticsTable)> {
    let categories = CategoryTable::load(&config.data.categories, config.columns.reference())?;
    let statistics = StatisticsTable::load(&config.data.statistics, config.columns.statistics())?;
    info!(
        categories = categories.len(),
        rows = statistics.len(),
        dropped = statistics.dropped_rows(),
        "input tables loaded"
    );
    Ok((categories, statistics))
}

pub(crate) fn color_mode(cli: &Cli) -> ColorMode {
    cli.color.into()
}

pub(crate) fn error_output(cli: &Cli) -> ErrorOutput {
    ErrorOutput::new(color_mode(cli))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
