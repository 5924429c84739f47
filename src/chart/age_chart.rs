//! Age-bracket line chart with cohort bands.

use super::bands::CohortBand;
use super::builder::SvgBuilder;
use super::element::{Axis, Label, Line, Marker, Rect, SvgElement};
use super::format::{format_tick, nice_step};
use super::style::{ChartColor, TextAnchor};

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 120.0;
const TITLE_Y: f64 = 32.0;
const LEGEND_TOP: f64 = 56.0;
const LEGEND_ROW_HEIGHT: f64 = 22.0;
const LEGEND_ENTRY_WIDTH: f64 = 120.0;
const LEGEND_COLUMNS: usize = 2;
const MARKER_RADIUS: f64 = 4.5;
const Y_TICK_TARGET: u32 = 6;
const X_LABEL_ROTATION: f64 = 45.0;

/// One drawable line: legend label, color and axis-aligned values.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub label: String,
    pub color: ChartColor,
    pub values: Vec<f64>,
}

/// Plot rectangle inside the chart margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Y range and tick step, both aligned to the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl YScale {
    fn for_values<'a>(values: impl Iterator<Item = &'a f64>) -> Self {
        let (lo, hi) = values
            .filter(|v| v.is_finite())
            .fold((0.0_f64, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let hi = if hi.is_finite() && hi > 0.0 { hi } else { 1.0 };
        let step = nice_step(hi - lo, Y_TICK_TARGET);
        let min = (lo / step + 1e-9).floor() * step;
        let mut max = (hi / step - 1e-9).ceil() * step;
        if max <= min {
            max = min + step;
        }
        Self { min, max, step }
    }

    fn ticks(&self) -> Vec<f64> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = ((self.max - self.min) / self.step).round() as u32;
        (0..=count)
            .map(|i| f64::from(i).mul_add(self.step, self.min))
            .collect()
    }
}

/// Line chart of counts per age bracket.
///
/// Brackets are categorical: bracket `i` is centred in the `i`-th of `n`
/// equal slots across the plot, and a band `start..end` covers slots
/// `start` through `end - 1`.
#[derive(Debug, Clone)]
pub struct AgeChart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub bands: Vec<CohortBand>,
    pub width: f64,
    pub height: f64,
    pub x_label: String,
    pub y_label: String,
    pub font_family: String,
}

impl AgeChart {
    #[must_use]
    pub fn new(title: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            labels,
            series: Vec::new(),
            bands: Vec::new(),
            width: 1200.0,
            height: 600.0,
            x_label: String::new(),
            y_label: String::new(),
            font_family: String::new(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Vec<ChartSeries>) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_bands(mut self, bands: Vec<CohortBand>) -> Self {
        self.bands = bands;
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    fn legend_rows(&self) -> usize {
        self.series.len().div_ceil(LEGEND_COLUMNS)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn plot_area(&self) -> PlotArea {
        let top = (self.legend_rows().max(1) as f64).mul_add(LEGEND_ROW_HEIGHT, LEGEND_TOP);
        PlotArea {
            left: MARGIN_LEFT,
            top,
            width: (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (self.height - top - MARGIN_BOTTOM).max(1.0),
        }
    }

    #[must_use]
    pub fn y_scale(&self) -> YScale {
        YScale::for_values(self.series.iter().flat_map(|s| s.values.iter()))
    }

    #[allow(clippy::cast_precision_loss)]
    fn slot_width(&self, area: &PlotArea) -> f64 {
        area.width / self.labels.len().max(1) as f64
    }

    /// Horizontal pixel position of bracket `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize) -> f64 {
        let area = self.plot_area();
        self.slot_width(&area)
            .mul_add(index as f64 + 0.5, area.left)
    }

    /// Vertical pixel position of `value`.
    #[must_use]
    pub fn y_at(&self, value: f64) -> f64 {
        Self::project(&self.plot_area(), &self.y_scale(), value)
    }

    fn project(area: &PlotArea, scale: &YScale, value: f64) -> f64 {
        let ratio = (value - scale.min) / (scale.max - scale.min);
        ratio.mul_add(-area.height, area.bottom())
    }

    fn render_bands(&self, area: &PlotArea) -> String {
        let slot = self.slot_width(area);
        self.bands
            .iter()
            .map(|band| {
                #[allow(clippy::cast_precision_loss)]
                let rect = Rect {
                    x: slot.mul_add(band.start as f64, area.left),
                    y: area.top,
                    width: slot * (band.end - band.start) as f64,
                    height: area.height,
                    color: band.color.clone(),
                    opacity: band.opacity,
                };
                rect.render()
            })
            .collect()
    }

    fn render_grid(area: &PlotArea, scale: &YScale) -> String {
        scale
            .ticks()
            .into_iter()
            .skip(1)
            .map(|v| {
                let y = Self::project(area, scale, v);
                Line::new(vec![(area.left, y), (area.left + area.width, y)], ChartColor::grid())
                    .with_stroke_width(1.0)
                    .with_dash("4,4")
                    .render()
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_axes(&self, area: &PlotArea, scale: &YScale) -> String {
        let n = self.labels.len().max(1) as f64;
        let x_ticks = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| ((i as f64 + 0.5) / n, label.clone()))
            .collect();
        let x_axis = Axis::horizontal(area.left, area.bottom(), area.width)
            .with_labels(x_ticks)
            .with_label_rotation(X_LABEL_ROTATION);

        let span = scale.max - scale.min;
        let y_ticks = scale
            .ticks()
            .into_iter()
            .map(|v| ((v - scale.min) / span, format_tick(v, scale.step)))
            .collect();
        let y_axis = Axis::vertical(area.left, area.bottom(), area.height)
            .with_labels(y_ticks)
            .with_color(ChartColor::text_muted());

        let mut out = x_axis.render();
        out.push_str(&y_axis.render());
        out
    }

    /// Lines break at non-finite values; markers sit on every finite value.
    fn render_series(&self, area: &PlotArea, scale: &YScale) -> String {
        let slot = self.slot_width(area);
        let mut out = String::new();

        for series in &self.series {
            let mut segment: Vec<(f64, f64)> = Vec::new();
            let mut markers = String::new();

            for (i, value) in series.values.iter().enumerate().take(self.labels.len()) {
                if !value.is_finite() {
                    Self::flush_segment(&mut segment, &series.color, &mut out);
                    continue;
                }
                #[allow(clippy::cast_precision_loss)]
                let point = (
                    slot.mul_add(i as f64 + 0.5, area.left),
                    Self::project(area, scale, *value),
                );
                segment.push(point);
                markers.push_str(
                    &Marker {
                        cx: point.0,
                        cy: point.1,
                        radius: MARKER_RADIUS,
                        color: series.color.clone(),
                    }
                    .render(),
                );
            }
            Self::flush_segment(&mut segment, &series.color, &mut out);
            out.push_str(&markers);
        }

        out
    }

    fn flush_segment(segment: &mut Vec<(f64, f64)>, color: &ChartColor, out: &mut String) {
        if segment.is_empty() {
            return;
        }
        out.push_str(&Line::new(std::mem::take(segment), color.clone()).render());
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_legend(&self, area: &PlotArea) -> String {
        if self.series.is_empty() {
            return String::new();
        }
        let columns = self.series.len().min(LEGEND_COLUMNS);
        let total_width = LEGEND_ENTRY_WIDTH * columns as f64;
        let start_x = (area.width / 2.0 + area.left) - total_width / 2.0;

        let mut out = String::new();
        for (i, series) in self.series.iter().enumerate() {
            let x = LEGEND_ENTRY_WIDTH.mul_add((i % LEGEND_COLUMNS) as f64, start_x);
            let y = LEGEND_ROW_HEIGHT.mul_add((i / LEGEND_COLUMNS) as f64, LEGEND_TOP);

            out.push_str(&Line::new(vec![(x, y), (x + 28.0, y)], series.color.clone()).render());
            out.push_str(
                &Marker {
                    cx: x + 14.0,
                    cy: y,
                    radius: MARKER_RADIUS,
                    color: series.color.clone(),
                }
                .render(),
            );
            out.push_str(
                &Label::new(x + 36.0, y + 5.0, series.label.clone())
                    .with_font_size(14.0)
                    .render(),
            );
        }
        out
    }

    fn render_titles(&self, area: &PlotArea) -> String {
        let mut out = Label::new(self.width / 2.0, TITLE_Y, self.title.clone())
            .with_anchor(TextAnchor::Middle)
            .with_font_size(20.0)
            .with_bold(true)
            .render();

        if !self.x_label.is_empty() {
            out.push_str(
                &Label::new(area.width / 2.0 + area.left, self.height - 14.0, self.x_label.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(14.0)
                    .render(),
            );
        }
        if !self.y_label.is_empty() {
            out.push_str(
                &Label::new(24.0, area.height / 2.0 + area.top, self.y_label.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(14.0)
                    .with_rotation(90.0)
                    .render(),
            );
        }
        out
    }
}

impl SvgElement for AgeChart {
    fn render(&self) -> String {
        let area = self.plot_area();
        let scale = self.y_scale();

        SvgBuilder::new(self.width, self.height)
            .with_title(self.title.clone())
            .with_font_family(self.font_family.clone())
            .with_background(ChartColor::background())
            .push_raw(self.render_bands(&area))
            .push_raw(Self::render_grid(&area, &scale))
            .push_raw(self.render_axes(&area, &scale))
            .push_raw(self.render_series(&area, &scale))
            .push_raw(self.render_legend(&area))
            .push_raw(self.render_titles(&area))
            .build()
    }
}

#[cfg(test)]
#[path = "age_chart_tests.rs"]
mod tests;
