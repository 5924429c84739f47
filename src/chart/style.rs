//! SVG styling primitives: colors and text anchoring.

use std::fmt;

use super::format::xml_escape;

/// A literal SVG paint value such as `#ffa500` or `steelblue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    /// Create a hex (or any SVG paint) color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.trim().to_string())
    }

    /// Foreground text and axis lines.
    #[must_use]
    pub fn text() -> Self {
        Self::hex("#222222")
    }

    /// Tick labels.
    #[must_use]
    pub fn text_muted() -> Self {
        Self::hex("#555555")
    }

    /// Horizontal grid lines.
    #[must_use]
    pub fn grid() -> Self {
        Self::hex("#dddddd")
    }

    #[must_use]
    pub fn background() -> Self {
        Self::hex("#ffffff")
    }

    /// Attribute-safe CSS value.
    #[must_use]
    pub fn to_css(&self) -> String {
        xml_escape(&self.0)
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
