use super::*;
use crate::config::ExclusionConfig;
use crate::test_support::{category_table, full_axis, statistics_table};

fn record(name: &str) -> CategoryRecord {
    category_table().record(name).unwrap()
}

fn build(
    category: CategoryRecord,
    sex: SexSelection,
    policy: MissingSeriesPolicy,
) -> Result<ChartSpec> {
    let statistics = statistics_table(2018);
    let axis = full_axis();
    let exclusions = ExclusionConfig::default();
    SpecBuilder {
        statistics: &statistics,
        axis: &axis,
        exclusions: &exclusions,
        policy,
    }
    .build(category, 2018, sex)
}

fn subgroups(spec: &ChartSpec) -> Vec<Subgroup> {
    spec.series.iter().map(|s| s.subgroup).collect()
}

#[test]
fn both_selection_draws_male_then_female() {
    let spec = build(record("胃"), SexSelection::Both, MissingSeriesPolicy::Omit).unwrap();

    assert_eq!(subgroups(&spec), [Subgroup::Male, Subgroup::Female]);
    assert_eq!(spec.series[0].values.len(), 21);
    assert!((spec.series[0].values[0] - 100.0).abs() < f64::EPSILON);
    assert!((spec.series[1].values[20] - 70.0).abs() < f64::EPSILON);
}

#[test]
fn single_sex_selection_draws_one_series() {
    let spec = build(record("肺"), SexSelection::Female, MissingSeriesPolicy::Omit).unwrap();
    assert_eq!(subgroups(&spec), [Subgroup::Female]);
}

#[test]
fn excluded_subgroup_is_never_attempted() {
    // Strict mode would fail on any attempted-but-missing series.
    let spec = build(record("子宮"), SexSelection::Male, MissingSeriesPolicy::Fail).unwrap();
    assert!(spec.series.is_empty());

    let spec = build(record("前立腺"), SexSelection::Both, MissingSeriesPolicy::Fail).unwrap();
    assert_eq!(subgroups(&spec), [Subgroup::Male]);
}

#[test]
fn missing_row_is_omitted_by_default() {
    let category = CategoryRecord {
        name: "肝臓".to_string(),
        code: "999".to_string(),
    };
    let spec = build(category, SexSelection::Both, MissingSeriesPolicy::Omit).unwrap();
    assert!(spec.series.is_empty());
    assert_eq!(spec.title(), "肝臓（2018年・総数）");
}

#[test]
fn missing_row_fails_in_strict_mode() {
    let category = CategoryRecord {
        name: "肝臓".to_string(),
        code: "999".to_string(),
    };
    let err = build(category, SexSelection::Both, MissingSeriesPolicy::Fail).unwrap_err();
    assert_eq!(err.to_string(), "No 男 data for 肝臓");
}

#[test]
fn attempted_subgroups_respect_selection_and_exclusions() {
    let statistics = statistics_table(2018);
    let axis = full_axis();
    let exclusions = ExclusionConfig::default();
    let builder = SpecBuilder {
        statistics: &statistics,
        axis: &axis,
        exclusions: &exclusions,
        policy: MissingSeriesPolicy::Omit,
    };

    assert_eq!(
        builder.attempted_subgroups("卵巣", SexSelection::Both),
        [Subgroup::Female]
    );
    assert!(builder.attempted_subgroups("卵巣", SexSelection::Male).is_empty());
    assert_eq!(builder.attempted_subgroups("胃", SexSelection::Male), [Subgroup::Male]);
}

#[test]
fn strict_flag_maps_to_policy() {
    assert_eq!(MissingSeriesPolicy::from_strict(true), MissingSeriesPolicy::Fail);
    assert_eq!(MissingSeriesPolicy::from_strict(false), MissingSeriesPolicy::Omit);
}
