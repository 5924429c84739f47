//! Per-category incidence charts.
//!
//! Charts are composed as SVG from small primitives, then rasterized to
//! PNG so they can be embedded in slides:
//! - one line per subgroup over the age brackets, broken at missing values
//! - shaded cohort bands behind the lines
//! - 45° bracket labels and a y axis starting at zero

mod age_chart;
mod bands;
mod builder;
mod element;
mod format;
mod raster;
mod renderer;
mod spec;
mod style;

pub use age_chart::{AgeChart, ChartSeries, PlotArea, YScale};
pub use bands::{CohortBand, resolve_bands};
pub use builder::SvgBuilder;
pub use element::{Axis, AxisOrientation, Label, Line, Marker, Rect, SvgElement};
pub use format::xml_escape;
pub use raster::{ChartBackend, PngBackend};
pub use renderer::ChartRenderer;
pub use spec::{ChartSpec, Series};
pub use style::{ChartColor, TextAnchor};
