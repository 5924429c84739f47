use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::Config;
use crate::error::{DeckError, Result};
use crate::{EXIT_RUN_ERROR, EXIT_SUCCESS};

use super::context::{error_output, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { path } => run_config_validate_impl(path)
            .map(|()| format!("Configuration is valid: {}\n", path.display())),
        ConfigAction::Show { format } => run_config_show_impl(*format, cli),
    };

    match result {
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

/// Parses and checks one configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has
/// out-of-range values.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(DeckError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| DeckError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;
    config.validate()
}

/// Shows the effective configuration after discovery and defaults.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(format: ConfigOutputFormat, cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;

    match format {
        ConfigOutputFormat::Toml => Ok(toml::to_string_pretty(&config)?),
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
