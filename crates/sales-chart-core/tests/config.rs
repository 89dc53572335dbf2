// File: crates/sales-chart-core/tests/config.rs
// Purpose: Config validation and series construction helpers.

use chrono::NaiveDate;
use sales_chart_core::types::MAX_GRID_LINE_COUNT;
use sales_chart_core::{BucketLabel, ChartConfig, ChartError, DataPoint, Series};

#[test]
fn default_config_is_valid() {
    let config = ChartConfig::default();
    assert_eq!(config.padding, 40.0);
    assert_eq!(config.grid_line_count, 5);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn validation_rejects_bad_fields() {
    let base = ChartConfig::default;
    assert_eq!(base().with_padding(-1.0).validate(), Err(ChartError::InvalidPadding(-1.0)));
    assert_eq!(base().with_grid_line_count(0).validate(), Err(ChartError::InvalidGridLineCount));
    assert_eq!(base().with_marker_size(0.0).validate(), Err(ChartError::InvalidMarkerSize(0.0)));
    assert_eq!(base().with_label_font_size(-2.0).validate(), Err(ChartError::InvalidFontSize(-2.0)));
    assert_eq!(
        base().with_locale("xx").validate(),
        Err(ChartError::UnknownLocale("xx".to_string()))
    );
    assert_eq!(
        base().with_grid_line_count(MAX_GRID_LINE_COUNT + 1).validate(),
        Err(ChartError::InvalidGridLineCount)
    );
    assert_eq!(base().with_grid_line_count(u32::MAX).validate(), Err(ChartError::InvalidGridLineCount));
    assert_eq!(base().with_grid_line_count(MAX_GRID_LINE_COUNT).validate(), Ok(()));
    assert!(matches!(base().with_padding(f32::INFINITY).validate(), Err(ChartError::InvalidPadding(_))));
}

#[test]
fn aggregate_daily_sums_and_sorts() {
    let d = |day| NaiveDate::from_ymd_opt(2025, 2, day).expect("valid date");
    let series = Series::aggregate_daily(vec![(d(3), 10.0), (d(1), 5.0), (d(3), 2.5), (d(2), 0.0)]);
    let got: Vec<(u32, f64)> = series.iter().map(|p| (p.label.day, p.total)).collect();
    assert_eq!(got, vec![(1, 5.0), (2, 0.0), (3, 12.5)]);
    assert_eq!(series.points()[0].label, BucketLabel::with_year(1, 2, 2025));
}

#[test]
fn max_total_ignores_bad_values() {
    let series = Series::from_points(vec![
        DataPoint::new(-3.0, BucketLabel::new(1, 1)),
        DataPoint::new(f64::INFINITY, BucketLabel::new(2, 1)),
        DataPoint::new(8.0, BucketLabel::new(3, 1)),
    ]);
    assert_eq!(series.max_total(), 8.0);
    assert_eq!(Series::new().max_total(), 0.0);
}
