#![allow(dead_code)]

use std::fmt::Write;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipArchive;

/// Creates an `assert_cmd` Command for the incidence-deck binary.
#[macro_export]
macro_rules! incidence_deck {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("incidence-deck"));
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }};
}

/// Reference table with a sex-exclusive category on each side.
pub const CATEGORY_CSV: &str = "部位,コード\n胃,150\n肺,330\n子宮,480\n前立腺,600\n";

/// Small raster, no system font scan, outputs under the fixture directory.
pub const FIXTURE_CONFIG: &str = r#"
[data]
categories = "categories.csv"
statistics = "number.csv"

[output]
figure_dir = "figures"
deck_dir = "out"

[chart]
width = 300
height = 200
load_system_fonts = false
"#;

/// Temporary working directory holding the inputs of one run.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Both tables plus a discoverable `.incidence-deck.toml`.
    pub fn with_inputs() -> Self {
        let fixture = Self::new();
        fixture.create_file("categories.csv", CATEGORY_CSV);
        fixture.create_file("number.csv", &statistics_csv(2018));
        fixture.create_config(FIXTURE_CONFIG);
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".incidence-deck.toml", content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn deck_path(&self, file_name: &str) -> PathBuf {
        self.path().join("out").join(file_name)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The 21 five-year brackets, `0-4歳` through `100歳以上`.
pub fn bracket_labels() -> Vec<String> {
    let mut labels: Vec<String> = (0..20).map(|i| format!("{}-{}歳", i * 5, i * 5 + 4)).collect();
    labels.push("100歳以上".to_string());
    labels
}

/// One row per (code, sex) for `year`; the female-only and male-only
/// categories carry only their own sex.
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

/// Slide titles of a written deck, in slide order.
pub fn deck_titles(path: &Path) -> Vec<String> {
    let mut archive = ZipArchive::new(File::open(path).expect("open deck")).expect("read deck");
    let mut titles = Vec::new();
    for i in 1.. {
        let Ok(mut entry) = archive.by_name(&format!("ppt/slides/slide{i}.xml")) else {
            break;
        };
        let mut xml = String::new();
        entry.read_to_string(&mut xml).expect("read slide");
        let start = xml.find("<a:t>").expect("title run") + "<a:t>".len();
        let end = xml[start..].find("</a:t>").expect("title end") + start;
        titles.push(xml[start..end].to_string());
    }
    titles
}
