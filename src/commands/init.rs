use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::{DeckError, Result};
use crate::{EXIT_RUN_ERROR, EXIT_SUCCESS};

use super::context::error_output;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error_output(cli).print_error(&e);
            EXIT_RUN_ERROR
        }
    }
}

/// Writes the commented default configuration.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DeckError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// Every active value equals the built-in default.
#[must_use]
pub fn generate_config_template() -> String {
    r##"# incidence-deck configuration file

# Skip a category when a selected, non-excluded series has no row
# (default: false, the series is left out of the chart)
# strict_missing_series = true

[data]
# Category reference table: one row per category name and its code
categories = "部位別コード表_utf8.csv"
# Wide statistics table: one row per code, sex and diagnosis year
statistics = "number_utf8.csv"

[columns]
# Reference table
category_name = "部位"
category_code = "コード"
# Statistics table key columns
code = "コード"
subgroup = "性別"
year = "診断年"

[axis]
# First and last age-bracket column, inclusive
first = "0-4歳"
last = "100歳以上"

[years]
# Selectable diagnosis years, inclusive
first = 2016
last = 2020

[output]
figure_dir = "figures"
deck_dir = "."

[chart]
width = 1200
height = 600
font_family = "Noto Sans CJK JP, IPAexGothic, Hiragino Sans, Yu Gothic, sans-serif"
# Load extra fonts when no CJK font is installed
# font_files = ["fonts/NotoSansCJKjp-Regular.otf"]
load_system_fonts = true
x_label = "年齢階級"
y_label = "罹患数"

[chart.series.male]
label = "男性"
color = "#ffa500"

[chart.series.female]
label = "女性"
color = "#ffff00"

# Shaded age ranges, bounded by bracket labels (inclusive)
[[chart.bands]]
first = "15-19歳"
last = "55-59歳"
color = "#e0ffff"
opacity = 0.3

[[chart.bands]]
first = "60-64歳"
last = "70-74歳"
color = "#add8e6"
opacity = 0.3

[[chart.bands]]
first = "75-79歳"
last = "100歳以上"
color = "#4682b4"
opacity = 0.3

[exclusions]
# Categories never charted for the male series
male = ["子宮", "子宮頸部", "子宮体部", "卵巣"]
# Categories never charted for the female series
female = ["前立腺"]
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
