//! Tests for the age-bracket chart.

use super::*;
use crate::chart::bands::resolve_bands;
use crate::config::ChartConfig;
use crate::test_support::{bracket_labels, full_axis};

fn series(label: &str, color: &str, values: Vec<f64>) -> ChartSeries {
    ChartSeries {
        label: label.to_string(),
        color: ChartColor::hex(color),
        values,
    }
}

fn ramp(base: f64) -> Vec<f64> {
    (0..21).map(|i| base + f64::from(i)).collect()
}

fn chart() -> AgeChart {
    AgeChart::new("胃（2018年・総数）", bracket_labels())
        .with_bands(resolve_bands(&ChartConfig::default().bands, &full_axis()).unwrap())
        .with_axis_titles("年齢階級", "罹患数")
}

mod layout_tests {
    use super::*;

    #[test]
    fn brackets_are_centred_in_equal_slots() {
        let c = chart();
        let area = c.plot_area();
        let slot = area.width / 21.0;

        assert!((c.x_at(0) - (area.left + slot / 2.0)).abs() < 1e-9);
        assert!((c.x_at(20) - (area.left + area.width - slot / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn y_scale_starts_at_zero_and_covers_max() {
        let c = chart().with_series(vec![series("男性", "#ffa500", ramp(100.0))]);
        let scale = c.y_scale();

        assert!(scale.min.abs() < f64::EPSILON);
        assert!(scale.max >= 120.0);
        assert!((c.y_at(0.0) - c.plot_area().bottom()).abs() < 1e-9);
        assert!((c.y_at(scale.max) - c.plot_area().top).abs() < 1e-9);
    }

    #[test]
    fn y_scale_without_data_is_unit_range() {
        let scale = chart().y_scale();
        assert!(scale.min.abs() < f64::EPSILON);
        assert!((scale.max - 1.0).abs() < 1e-9);
    }

    #[test]
    fn y_scale_ignores_nan() {
        let mut values = ramp(0.0);
        values[3] = f64::NAN;
        let c = chart().with_series(vec![series("男性", "#ffa500", values)]);
        assert!(c.y_scale().max.is_finite());
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn renders_title_and_one_tick_label_per_bracket() {
        let svg = chart().render();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<title>胃（2018年・総数）</title>"));
        for label in bracket_labels() {
            assert!(svg.contains(&format!(">{label}</text>")), "missing {label}");
        }
        assert!(svg.contains("rotate(-45"));
        assert!(svg.contains(">年齢階級</text>"));
        assert!(svg.contains(">罹患数</text>"));
    }

    #[test]
    fn renders_three_bands_with_low_opacity() {
        let svg = chart().render();

        assert_eq!(svg.matches("fill-opacity=\"0.3\"").count(), 3);
        assert!(svg.contains("fill=\"#e0ffff\""));
        assert!(svg.contains("fill=\"#add8e6\""));
        assert!(svg.contains("fill=\"#4682b4\""));
    }

    #[test]
    fn absent_series_is_not_drawn() {
        let svg = chart()
            .with_series(vec![series("女性", "#ffff00", ramp(50.0))])
            .render();

        assert!(svg.contains(">女性</text>"));
        assert!(!svg.contains("男性"));
        assert!(!svg.contains("#ffa500"));
    }

    #[test]
    fn no_series_means_no_markers_and_no_legend() {
        let svg = chart().render();

        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("男性"));
        assert!(!svg.contains("女性"));
    }

    #[test]
    fn each_finite_value_gets_a_marker() {
        let svg = chart()
            .with_series(vec![
                series("男性", "#ffa500", ramp(100.0)),
                series("女性", "#ffff00", ramp(50.0)),
            ])
            .render();

        // 21 data markers plus one legend marker per series.
        assert_eq!(svg.matches("fill=\"#ffa500\"/>").count(), 22);
        assert_eq!(svg.matches("fill=\"#ffff00\"/>").count(), 22);
    }

    #[test]
    fn nan_breaks_the_line() {
        let mut values = ramp(100.0);
        values[10] = f64::NAN;
        let svg = chart()
            .with_series(vec![series("男性", "#ffa500", values)])
            .render();

        // Two data segments plus the legend sample.
        assert_eq!(svg.matches("stroke=\"#ffa500\"").count(), 3);
        assert_eq!(svg.matches("fill=\"#ffa500\"/>").count(), 21);
    }

    #[test]
    fn legend_uses_two_columns() {
        let c = chart().with_series(vec![
            series("男性", "#ffa500", ramp(1.0)),
            series("女性", "#ffff00", ramp(2.0)),
        ]);
        let svg = c.render();

        // Both entries share the first legend row.
        let row_y = LEGEND_TOP + 5.0;
        assert_eq!(svg.matches(&format!("y=\"{row_y}\"")).count(), 2);
    }

    #[test]
    fn custom_size_sets_viewbox() {
        let svg = chart().with_size(800.0, 400.0).render();
        assert!(svg.contains("viewBox=\"0 0 800 400\""));
    }
}
