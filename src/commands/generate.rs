use tracing::debug;

use crate::chart::PngBackend;
use crate::cli::{Cli, GenerateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::{ErrorOutput, OutputFormat, RunProgress};
use crate::pipeline::{CategoryOutcome, CategorySelection, Controller, RunOutcome, Selection};
use crate::{EXIT_PARTIAL, EXIT_RUN_ERROR, EXIT_SUCCESS};

use super::context::{apply_data_overrides, color_mode, error_output, load_config, load_tables};

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    match run_generate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            error_output(cli).print_error(&e);
            EXIT_RUN_ERROR
        }
    }
}

/// Load inputs, run the pipeline once and print the report.
///
/// # Errors
/// Returns an error if setup fails (config, tables, axis, fonts) or the deck
/// cannot be written. Per-category failures are reported, not returned.
pub(crate) fn run_generate_impl(args: &GenerateArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli)?;
    apply_generate_overrides(&mut config, args);
    config.validate()?;

    let (categories, statistics) = load_tables(&config)?;
    let backend = PngBackend::new(&config.chart)?;
    let mut controller = Controller::new(&config, &categories, &statistics, backend)?;

    let selection = selection_from_args(args);
    let total = u64::try_from(selection.resolve_targets(&categories).len()).unwrap_or(u64::MAX);
    let progress = RunProgress::new(total, cli.quiet);
    let errors = error_output(cli);

    let outcome = controller.generate(&selection, |outcome| {
        progress.record(outcome);
        report_skip(&progress, &errors, outcome);
    });
    progress.finish();

    match outcome? {
        RunOutcome::NothingSelected => {
            errors.print_warning(
                "No categories selected",
                Some("Pass --category <NAME> (repeatable) or --all"),
            );
            Ok(EXIT_SUCCESS)
        }
        RunOutcome::Completed(report) => {
            debug!(
                slides = report.slide_count(),
                skipped = report.skipped().len(),
                "run finished"
            );
            let formatter = args.format.formatter(color_mode(cli), cli.verbose);
            let output = formatter.format(&report)?;
            if !cli.quiet || args.format == OutputFormat::Json {
                print!("{output}");
            }

            if args.fail_on_skip && report.has_skips() {
                Ok(EXIT_PARTIAL)
            } else {
                Ok(EXIT_SUCCESS)
            }
        }
    }
}

pub(crate) fn apply_generate_overrides(config: &mut Config, args: &GenerateArgs) {
    apply_data_overrides(config, &args.data);
    if let Some(dir) = &args.figure_dir {
        config.output.figure_dir.clone_from(dir);
    }
    if let Some(dir) = &args.deck_dir {
        config.output.deck_dir.clone_from(dir);
    }
    if args.strict {
        config.strict_missing_series = true;
    }
}

pub(crate) fn selection_from_args(args: &GenerateArgs) -> Selection {
    let categories = if args.all {
        CategorySelection::All
    } else {
        CategorySelection::from_names(args.categories.clone())
    };
    Selection::new(args.year, args.sex.into(), categories)
}

/// One warning per skipped category, printed as soon as it happens.
fn report_skip(progress: &RunProgress, errors: &ErrorOutput, outcome: &CategoryOutcome) {
    if let CategoryOutcome::Skipped {
        category, reason, ..
    } = outcome
    {
        progress.suspend(|| {
            errors.print_warning(&format!("Skipped category {category}"), Some(reason));
        });
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
