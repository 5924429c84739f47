pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod deck;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod table;

#[cfg(test)]
mod test_support;

pub use error::{DeckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
/// Some categories were skipped and `--fail-on-skip` was given.
pub const EXIT_PARTIAL: i32 = 1;
pub const EXIT_RUN_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
