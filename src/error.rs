use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the run cannot do without is missing from a table header.
    #[error("Required column '{label}' not found in {table} table")]
    Schema { label: String, table: &'static str },

    #[error("Label '{0}' not found on the age axis")]
    AxisLookup(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Non-numeric value '{value}' in column '{column}'")]
    NonNumeric { column: String, value: String },

    #[error("No {subgroup} data for {category}")]
    MissingSeries { category: String, subgroup: String },

    #[error("Invalid subgroup: {0}")]
    InvalidSubgroup(String),

    #[error("Invalid selection: {0}")]
    Selection(String),

    #[error("SVG rendering error: {0}")]
    Svg(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Presentation archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DeckError {
    /// Short, stable category name used in machine-readable reports.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::Csv(_) => "Csv",
            Self::Schema { .. } => "Schema",
            Self::AxisLookup(_) => "AxisLookup",
            Self::UnknownCategory(_) => "UnknownCategory",
            Self::NonNumeric { .. } => "NonNumeric",
            Self::MissingSeries { .. } => "MissingSeries",
            Self::InvalidSubgroup(_) => "InvalidSubgroup",
            Self::Selection(_) => "Selection",
            Self::Svg(_) | Self::Image(_) => "Render",
            Self::Zip(_) => "Document",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// A hint for fixing the error, where one is known.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `incidence-deck config show`")
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    Some("Check that the file path exists, or set it under [data] in the config")
                }
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            Self::Schema { .. } => {
                Some("Check the [columns] and [axis] settings against the CSV header")
            }
            Self::Selection(_) => Some("Pick a year inside the [years] range of the config"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
