use std::fmt::Write;

use crate::cli::{CategoriesArgs, Cli};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::table::{CategoryRecord, CategoryTable};
use crate::{EXIT_RUN_ERROR, EXIT_SUCCESS};

use super::context::{apply_data_overrides, error_output, load_config};

#[must_use]
pub fn run_categories(args: &CategoriesArgs, cli: &Cli) -> i32 {
    match run_categories_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            error_output(cli).print_error(&e);
            EXIT_RUN_ERROR
        }
    }
}

/// Read the reference table and format it.
///
/// # Errors
/// Returns an error if the config or the reference table cannot be loaded.
pub(crate) fn run_categories_impl(args: &CategoriesArgs, cli: &Cli) -> Result<String> {
    let mut config = load_config(cli)?;
    apply_data_overrides(&mut config, &args.data);

    let table = CategoryTable::load(&config.data.categories, config.columns.reference())?;
    format_categories(&table, args.format)
}

/// Table order is kept: it is the order `--all` charts in.
pub(crate) fn format_categories(table: &CategoryTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let records: Vec<CategoryRecord> = table.for_each_category().collect();
            let mut output = serde_json::to_string_pretty(&records)?;
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for record in table.for_each_category() {
                let _ = writeln!(output, "{:>6}  {}", record.code, record.name);
            }
            let _ = writeln!(output, "\n{} categories", table.len());
            Ok(output)
        }
    }
}

#[cfg(test)]
#[path = "categories_tests.rs"]
mod tests;
