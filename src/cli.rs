use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};
use crate::table::SexSelection;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Which subgroups to chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SexArg {
    /// Male series only (男)
    #[value(alias = "男")]
    Male,
    /// Female series only (女)
    #[value(alias = "女")]
    Female,
    /// Both series (総数)
    #[default]
    #[value(alias = "総数")]
    Both,
}

impl From<SexArg> for SexSelection {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Self::Male,
            SexArg::Female => Self::Female,
            SexArg::Both => Self::Both,
        }
    }
}

/// Format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "incidence-deck")]
#[command(author, version, about = "Build a slide deck of age-bracket incidence charts")]
#[command(long_about = "Reads a category reference table and a wide incidence statistics table, \
    draws one chart per category for a year and sex selection, and writes all charts into \
    one PowerPoint deck.\n\n\
    Exit codes:\n  \
    0 - Deck written (or nothing selected)\n  \
    1 - Categories were skipped and --fail-on-skip was given\n  \
    2 - Configuration, input or output error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render charts and write the deck
    Generate(GenerateArgs),

    /// List the categories of the reference table
    Categories(CategoriesArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Table locations shared by commands that read the CSV inputs.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct DataArgs {
    /// Category reference CSV (overrides config)
    #[arg(long)]
    pub categories_file: Option<PathBuf>,

    /// Incidence statistics CSV (overrides config)
    #[arg(long)]
    pub statistics_file: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Diagnosis year
    #[arg(short, long)]
    pub year: i32,

    /// Sex selection [aliases: 男, 女, 総数]
    #[arg(short, long, value_enum, default_value = "both")]
    pub sex: SexArg,

    /// Category to chart, in order (repeatable; 全部位 selects all)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Chart every category in reference-table order
    #[arg(long, conflicts_with = "categories")]
    pub all: bool,

    #[command(flatten)]
    pub data: DataArgs,

    /// Directory for chart images (overrides config)
    #[arg(long)]
    pub figure_dir: Option<PathBuf>,

    /// Directory for the deck (overrides config)
    #[arg(long)]
    pub deck_dir: Option<PathBuf>,

    /// Skip a category when a selected subgroup has no row
    #[arg(long)]
    pub strict: bool,

    /// Report format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 1 if any category was skipped
    #[arg(long)]
    pub fail_on_skip: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".incidence-deck.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Check a configuration file without running anything
    Validate {
        /// Path to the configuration file
        #[arg(default_value = ".incidence-deck.toml")]
        path: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
