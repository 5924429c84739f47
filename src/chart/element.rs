//! Primitive SVG elements: axes, lines, markers, rectangles and labels.

use std::fmt::Write;

use super::format::xml_escape;
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component for charts.
///
/// Label positions are fractions of `length` (0.0 at the origin end).
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
    /// Counter-clockwise label rotation in degrees.
    pub label_rotation: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::text(),
            tick_length: 5.0,
            font_size: 12.0,
            label_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::text(),
            tick_length: 5.0,
            font_size: 12.0,
            label_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                // Rotated labels hang from the tick by their end.
                let anchor = if self.label_rotation == 0.0 {
                    TextAnchor::Middle
                } else {
                    TextAnchor::End
                };
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        // Main axis line
        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        // Ticks and labels
        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );

            let text = Label::new(tick.label_x, tick.label_y, label.clone())
                .with_anchor(tick.anchor)
                .with_font_size(self.font_size)
                .with_color(self.color.clone())
                .with_rotation(self.label_rotation);
            output.push_str(&text.render());
        }

        output
    }
}

/// A text label, optionally rotated about its anchor point.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub color: ChartColor,
    pub bold: bool,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f64,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            color: ChartColor::text(),
            bold: false,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let mut attrs = format!(
            r#"x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}""#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size
        );
        if self.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if self.rotation != 0.0 {
            // SVG rotates clockwise for positive angles.
            let _ = write!(
                attrs,
                r#" transform="rotate({} {} {})""#,
                -self.rotation, self.x, self.y
            );
        }
        format!("<text {attrs}>{}</text>\n", xml_escape(&self.text))
    }
}

/// A filled rectangle, used for plot backgrounds and cohort bands.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub opacity: f64,
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}" stroke="none"/>
"#,
            self.x,
            self.y,
            self.width.max(0.0),
            self.height.max(0.0),
            self.color.to_css(),
            self.opacity
        )
    }
}

/// A connected polyline.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub dash: Option<String>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, pattern: &str) -> Self {
        self.dash = Some(pattern.to_string());
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i == 0 {
                let _ = write!(path, "M{x},{y}");
            } else {
                let _ = write!(path, " L{x},{y}");
            }
        }

        let dash = self
            .dash
            .as_ref()
            .map(|d| format!(r#" stroke-dasharray="{}""#, xml_escape(d)))
            .unwrap_or_default();

        format!(
            r#"<path d="{path}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"{dash}/>
"#,
            self.color.to_css(),
            self.stroke_width
        )
    }
}

/// A circular data-point marker.
#[derive(Debug, Clone)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: ChartColor,
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>
"#,
            self.cx,
            self.cy,
            self.radius,
            self.color.to_css()
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
