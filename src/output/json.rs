use serde::Serialize;

use crate::error::Result;
use crate::pipeline::RunReport;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    slides: Vec<&'a str>,
    #[serde(flatten)]
    report: &'a RunReport,
}

#[derive(Serialize)]
struct Summary {
    categories: usize,
    slides: usize,
    skipped: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                categories: report.categories.len(),
                slides: report.slide_count(),
                skipped: report.skipped().len(),
            },
            slides: report.slide_titles(),
            report,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
