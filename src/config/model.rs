use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};
use crate::table::{ReferenceColumns, StatisticsColumns, Subgroup};

/// Category selection sentinel meaning "every category in the reference table".
pub const ALL_CATEGORIES: &str = "全部位";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Treat a missing non-excluded series as a per-category failure instead
    /// of silently omitting it.
    pub strict_missing_series: bool,

    pub data: DataConfig,
    pub columns: ColumnsConfig,
    pub axis: AxisConfig,
    pub years: YearRange,
    pub output: OutputConfig,
    pub chart: ChartConfig,
    pub exclusions: ExclusionConfig,
}

impl Config {
    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns a `Config` error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.years.first > self.years.last {
            return Err(DeckError::Config(format!(
                "years.first ({}) must not be after years.last ({})",
                self.years.first, self.years.last
            )));
        }
        if self.axis.first.trim().is_empty() || self.axis.last.trim().is_empty() {
            return Err(DeckError::Config(
                "axis.first and axis.last must be non-empty".to_string(),
            ));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(DeckError::Config(
                "chart.width and chart.height must be positive".to_string(),
            ));
        }
        for band in &self.chart.bands {
            if !(0.0..=1.0).contains(&band.opacity) {
                return Err(DeckError::Config(format!(
                    "band {}..{} opacity {} is outside 0.0-1.0",
                    band.first, band.last, band.opacity
                )));
            }
        }
        Ok(())
    }
}

/// Input table locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Category reference table (name → code).
    pub categories: PathBuf,
    /// Wide statistics table.
    pub statistics: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            categories: PathBuf::from("部位別コード表_utf8.csv"),
            statistics: PathBuf::from("number_utf8.csv"),
        }
    }
}

/// Column names in both input tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnsConfig {
    pub category_name: String,
    pub category_code: String,
    pub code: String,
    pub subgroup: String,
    pub year: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            category_name: "部位".to_string(),
            category_code: "コード".to_string(),
            code: "コード".to_string(),
            subgroup: "性別".to_string(),
            year: "診断年".to_string(),
        }
    }
}

impl ColumnsConfig {
    #[must_use]
    pub fn reference(&self) -> ReferenceColumns<'_> {
        ReferenceColumns {
            name: &self.category_name,
            code: &self.category_code,
        }
    }

    #[must_use]
    pub fn statistics(&self) -> StatisticsColumns<'_> {
        StatisticsColumns {
            code: &self.code,
            subgroup: &self.subgroup,
            year: &self.year,
        }
    }
}

/// First and last age-bracket column of the statistics table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AxisConfig {
    pub first: String,
    pub last: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            first: "0-4歳".to_string(),
            last: "100歳以上".to_string(),
        }
    }
}

/// Supported diagnosis years, inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            first: 2016,
            last: 2020,
        }
    }
}

impl YearRange {
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.first && year <= self.last
    }
}

/// Where figures and the finished deck are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub figure_dir: PathBuf,
    pub deck_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            figure_dir: PathBuf::from("figures"),
            deck_dir: PathBuf::from("."),
        }
    }
}

/// Chart geometry, fonts and annotation styling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    pub font_family: String,
    /// Extra font files loaded before rendering (e.g. a CJK font).
    pub font_files: Vec<PathBuf>,
    pub load_system_fonts: bool,
    pub x_label: String,
    pub y_label: String,
    /// Shaded cohort bands, drawn in order.
    pub bands: Vec<BandConfig>,
    pub series: SeriesConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            font_family: "Noto Sans CJK JP, IPAexGothic, Hiragino Sans, Yu Gothic, sans-serif"
                .to_string(),
            font_files: Vec::new(),
            load_system_fonts: true,
            x_label: "年齢階級".to_string(),
            y_label: "罹患数".to_string(),
            bands: default_bands(),
            series: SeriesConfig::default(),
        }
    }
}

/// A shaded range over the age axis, bounded by bracket labels (inclusive).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BandConfig {
    pub first: String,
    pub last: String,
    pub color: String,
    #[serde(default = "default_band_opacity")]
    pub opacity: f64,
}

const fn default_band_opacity() -> f64 {
    0.3
}

fn default_bands() -> Vec<BandConfig> {
    [
        ("15-19歳", "55-59歳", "#e0ffff"),
        ("60-64歳", "70-74歳", "#add8e6"),
        ("75-79歳", "100歳以上", "#4682b4"),
    ]
    .into_iter()
    .map(|(first, last, color)| BandConfig {
        first: first.to_string(),
        last: last.to_string(),
        color: color.to_string(),
        opacity: default_band_opacity(),
    })
    .collect()
}

/// Line color and legend label for one subgroup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesStyle {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeriesConfig {
    pub male: SeriesStyle,
    pub female: SeriesStyle,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            male: SeriesStyle {
                label: "男性".to_string(),
                color: "#ffa500".to_string(),
            },
            female: SeriesStyle {
                label: "女性".to_string(),
                color: "#ffff00".to_string(),
            },
        }
    }
}

impl SeriesConfig {
    #[must_use]
    pub const fn style(&self, subgroup: Subgroup) -> &SeriesStyle {
        match subgroup {
            Subgroup::Male => &self.male,
            Subgroup::Female => &self.female,
        }
    }
}

/// Sex-exclusive categories: a category listed under `male` never gets a
/// male series, and likewise for `female`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExclusionConfig {
    pub male: Vec<String>,
    pub female: Vec<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            male: ["子宮", "子宮頸部", "子宮体部", "卵巣"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            female: vec!["前立腺".to_string()],
        }
    }
}

impl ExclusionConfig {
    #[must_use]
    pub fn excludes(&self, subgroup: Subgroup, category: &str) -> bool {
        let list = match subgroup {
            Subgroup::Male => &self.male,
            Subgroup::Female => &self.female,
        };
        list.iter().any(|name| name == category)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
