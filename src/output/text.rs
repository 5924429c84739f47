use std::fmt::Write;

use crate::error::Result;
use crate::pipeline::{CategoryOutcome, RunReport};

use super::{ReportFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_outcome(&self, outcome: &CategoryOutcome, output: &mut String) {
        match outcome {
            CategoryOutcome::Added { title, figure, .. } => {
                let _ = writeln!(output, "{} {title}", self.paint("✓", ansi::GREEN));
                if self.verbose > 0 {
                    let _ = writeln!(output, "   Figure: {}", figure.display());
                }
            }
            CategoryOutcome::Skipped {
                category, reason, ..
            } => {
                let _ = writeln!(output, "{} {category}", self.paint("✗ SKIPPED", ansi::YELLOW));
                let _ = writeln!(output, "   Reason: {reason}");
            }
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        for outcome in &report.categories {
            self.format_outcome(outcome, &mut output);
        }
        if !report.categories.is_empty() {
            output.push('\n');
        }

        let skipped = report.skipped().len();
        let _ = writeln!(
            output,
            "Summary: {} slides, {skipped} skipped",
            report.slide_count()
        );
        let _ = writeln!(output, "Deck: {}", report.artifact.path.display());

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
