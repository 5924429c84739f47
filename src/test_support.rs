//! Shared fixtures for unit tests.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::config::{ChartConfig, Config, DataConfig, OutputConfig};
use crate::table::{AgeAxis, CategoryTable, StatisticsTable};

/// The 21 five-year brackets of the reference layout.
pub fn bracket_labels() -> Vec<String> {
    let mut labels: Vec<String> = (0..20).map(|i| format!("{}-{}歳", i * 5, i * 5 + 4)).collect();
    labels.push("100歳以上".to_string());
    labels
}

/// Reference table CSV with a sex-exclusive category on each side.
pub const CATEGORY_CSV: &str = "部位,コード\n胃,150\n肺,330\n子宮,480\n前立腺,600\n";

/// Statistics CSV with one row per (category, subgroup) for `year`, values
/// `base + bracket index`.
pub fn statistics_csv(year: i32) -> String {
    let labels = bracket_labels();
    let mut csv = format!("コード,性別,診断年,{}\n", labels.join(","));
    let rows = [
        ("150", "男", 100),
        ("150", "女", 50),
        ("330", "男", 200),
        ("330", "女", 80),
        ("480", "女", 30),
        ("600", "男", 90),
    ];
    for (code, sex, base) in rows {
        let values: Vec<String> = (0..labels.len()).map(|i| (base + i).to_string()).collect();
        let _ = writeln!(csv, "{code},{sex},{year},{}", values.join(","));
    }
    csv
}

pub fn category_table() -> CategoryTable {
    CategoryTable::from_reader(
        CATEGORY_CSV.as_bytes(),
        Config::default().columns.reference(),
    )
    .expect("fixture category table")
}

pub fn statistics_table(year: i32) -> StatisticsTable {
    StatisticsTable::from_reader(
        statistics_csv(year).as_bytes(),
        Config::default().columns.statistics(),
    )
    .expect("fixture statistics table")
}

pub fn full_axis() -> AgeAxis {
    statistics_table(2018)
        .resolve_axis("0-4歳", "100歳以上")
        .expect("fixture axis")
}

/// Config pointing every path into `dir`, with a small raster and no
/// system font scan.
pub fn workspace_config(dir: &Path) -> Config {
    Config {
        data: DataConfig {
            categories: dir.join("categories.csv"),
            statistics: dir.join("number.csv"),
        },
        output: OutputConfig {
            figure_dir: dir.join("figures"),
            deck_dir: dir.join("decks"),
        },
        chart: ChartConfig {
            width: 300,
            height: 200,
            load_system_fonts: false,
            ..ChartConfig::default()
        },
        ..Config::default()
    }
}

/// Write both CSV inputs and a config file into `dir`; returns the config path.
pub fn write_workspace(dir: &Path) -> PathBuf {
    let config = workspace_config(dir);
    std::fs::write(&config.data.categories, CATEGORY_CSV).expect("write categories");
    std::fs::write(&config.data.statistics, statistics_csv(2018)).expect("write statistics");

    let path = dir.join("deck.toml");
    let toml = toml::to_string(&config).expect("serialize config");
    std::fs::write(&path, toml).expect("write config");
    path
}
