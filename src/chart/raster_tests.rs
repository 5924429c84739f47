use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::chart::age_chart::ChartSeries;
use crate::chart::bands::resolve_bands;
use crate::chart::style::ChartColor;
use crate::test_support::{bracket_labels, full_axis};

fn offline_config() -> ChartConfig {
    ChartConfig {
        load_system_fonts: false,
        ..ChartConfig::default()
    }
}

fn chart(width: f64, height: f64) -> AgeChart {
    let values = (0..21).map(|i| 10.0 + f64::from(i)).collect();
    AgeChart::new("胃（2018年・男）", bracket_labels())
        .with_size(width, height)
        .with_bands(resolve_bands(&ChartConfig::default().bands, &full_axis()).unwrap())
        .with_series(vec![ChartSeries {
            label: "男性".to_string(),
            color: ChartColor::hex("#ffa500"),
            values,
        }])
}

#[test]
fn writes_png_with_configured_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("150_2018_男.png");
    let backend = PngBackend::new(&offline_config()).unwrap();

    backend.write_chart(&chart(640.0, 360.0), &path).unwrap();

    assert_eq!(image::image_dimensions(&path).unwrap(), (640, 360));
}

#[test]
fn overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.png");
    std::fs::write(&path, b"stale").unwrap();
    let backend = PngBackend::new(&offline_config()).unwrap();

    backend.write_chart(&chart(300.0, 200.0), &path).unwrap();

    assert_eq!(image::image_dimensions(&path).unwrap(), (300, 200));
}

#[test]
fn draws_markers_and_bands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.png");
    let backend = PngBackend::new(&offline_config()).unwrap();
    let c = chart(1200.0, 600.0);

    backend.write_chart(&c, &path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let at = |x: f64, y: f64| *img.get_pixel(x.round() as u32, y.round() as u32);

    let marker = at(c.x_at(5), c.y_at(15.0));
    assert!(marker[0] > 240 && (150..=180).contains(&marker[1]) && marker[2] < 30, "{marker:?}");

    let area = c.plot_area();
    let band = at(c.x_at(18), area.top + 6.0);
    assert_ne!(band.0, [255, 255, 255, 255]);
    assert!(band[2] > band[0], "{band:?}");

    let outside = at(c.x_at(1), area.top + 6.0);
    assert_eq!(outside.0, [255, 255, 255, 255]);
}

#[test]
fn invalid_svg_is_a_render_error() {
    let backend = PngBackend::new(&offline_config()).unwrap();
    let err = backend.rasterize("<svg", 10, 10).unwrap_err();
    assert!(matches!(err, DeckError::Svg(_)));
    assert_eq!(err.error_type(), "Render");
}

#[test]
fn zero_sized_pixmap_is_rejected() {
    let backend = PngBackend::new(&offline_config()).unwrap();
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;
    assert!(matches!(backend.rasterize(svg, 0, 10), Err(DeckError::Svg(_))));
}

#[test]
fn missing_font_file_is_reported() {
    let config = ChartConfig {
        font_files: vec![PathBuf::from("/nonexistent/font.ttf")],
        ..offline_config()
    };
    let Err(err) = PngBackend::new(&config) else {
        panic!("expected font load failure");
    };
    assert!(matches!(err, DeckError::FileRead { .. }));
}
