use super::*;
use crate::config::ChartConfig;
use crate::test_support::full_axis;

fn band(first: &str, last: &str) -> BandConfig {
    BandConfig {
        first: first.to_string(),
        last: last.to_string(),
        color: "#000000".to_string(),
        opacity: 0.3,
    }
}

#[test]
fn default_bands_resolve_to_half_open_ranges() {
    let bands = resolve_bands(&ChartConfig::default().bands, &full_axis()).unwrap();

    let ranges: Vec<_> = bands.iter().map(|b| (b.start, b.end)).collect();
    // 15-19歳 is index 3, 55-59歳 index 11, 100歳以上 index 20.
    assert_eq!(ranges, vec![(3, 12), (12, 15), (15, 21)]);
    assert_eq!(bands[2].color, ChartColor::hex("#4682b4"));
}

#[test]
fn missing_label_is_axis_lookup_error() {
    let err = resolve_bands(&[band("15-19歳", "105-109歳")], &full_axis()).unwrap_err();
    assert!(matches!(err, DeckError::AxisLookup(ref l) if l == "105-109歳"));
}

#[test]
fn reversed_band_is_rejected() {
    let err = resolve_bands(&[band("55-59歳", "15-19歳")], &full_axis()).unwrap_err();
    assert!(matches!(err, DeckError::Config(_)));
}

#[test]
fn overlapping_bands_are_rejected() {
    let err = resolve_bands(
        &[band("15-19歳", "55-59歳"), band("50-54歳", "70-74歳")],
        &full_axis(),
    )
    .unwrap_err();
    assert!(matches!(err, DeckError::Config(_)));
}

#[test]
fn single_bracket_band_is_allowed() {
    let bands = resolve_bands(&[band("0-4歳", "0-4歳")], &full_axis()).unwrap();
    assert_eq!((bands[0].start, bands[0].end), (0, 1));
}
