// File: crates/sales-chart-core/tests/layout.rs
// Purpose: Pixel positions of axes, gridlines, points and labels.

use chrono::NaiveDate;
use sales_chart_core::layout::{DATE_LABEL_OFFSET, VALUE_LABEL_GAP};
use sales_chart_core::{
    BucketLabel, ChartConfig, ChartLayout, DataPoint, DateLabelFormat, Point, Series, TextAlign,
    TextBaseline,
};

fn sample() -> Series {
    Series::from_points(vec![
        DataPoint::new(100.0, BucketLabel::new(1, 3)),
        DataPoint::new(50.0, BucketLabel::new(2, 3)),
        DataPoint::new(200.0, BucketLabel::new(3, 3)),
    ])
}

#[test]
fn nothing_to_lay_out() {
    let config = ChartConfig::default();
    assert!(ChartLayout::compute(800, 400, &Series::new(), &config).is_none());
    assert!(ChartLayout::compute(0, 400, &sample(), &config).is_none());
}

#[test]
fn plot_rect_and_axes() {
    let layout = ChartLayout::compute(800, 400, &sample(), &ChartConfig::default()).expect("layout");
    assert_eq!(layout.plot.width(), 720.0);
    assert_eq!(layout.plot.height(), 320.0);
    assert_eq!(layout.x_axis, (Point::new(40.0, 360.0), Point::new(760.0, 360.0)));
    assert_eq!(layout.y_axis, (Point::new(40.0, 40.0), Point::new(40.0, 360.0)));
}

#[test]
fn points_follow_formula() {
    let layout = ChartLayout::compute(800, 400, &sample(), &ChartConfig::default()).expect("layout");
    assert_eq!(layout.max_value, 200.0);
    assert_eq!(layout.point_spacing, 360.0);
    assert_eq!(
        layout.points,
        vec![Point::new(40.0, 200.0), Point::new(400.0, 280.0), Point::new(760.0, 40.0)]
    );
    assert_eq!(layout.segments().count(), 2);
}

#[test]
fn gridlines_evenly_spaced_top_to_bottom() {
    let config = ChartConfig::default().with_grid_line_count(4);
    let layout = ChartLayout::compute(800, 400, &sample(), &config).expect("layout");
    let ys: Vec<f32> = layout.gridlines.iter().map(|(a, _)| a.y).collect();
    assert_eq!(ys, vec![40.0, 120.0, 200.0, 280.0, 360.0]);
    for (a, b) in &layout.gridlines {
        assert_eq!((a.x, b.x), (40.0, 760.0));
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn date_labels_centered_under_points() {
    let layout = ChartLayout::compute(800, 400, &sample(), &ChartConfig::default()).expect("layout");
    let texts: Vec<&str> = layout.date_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["1/3", "2/3", "3/3"]);
    for (label, p) in layout.date_labels.iter().zip(&layout.points) {
        assert_eq!(label.at.x, p.x);
        assert_eq!(label.at.y, 360.0 + DATE_LABEL_OFFSET);
        assert_eq!(label.align, TextAlign::Center);
    }
}

#[test]
fn value_labels_right_aligned_on_gridlines() {
    let layout = ChartLayout::compute(800, 400, &sample(), &ChartConfig::default()).expect("layout");
    assert_eq!(layout.value_labels.len(), layout.gridlines.len());
    for (label, (a, _)) in layout.value_labels.iter().zip(&layout.gridlines) {
        assert_eq!(label.at, Point::new(40.0 - VALUE_LABEL_GAP, a.y));
        assert_eq!(label.align, TextAlign::Right);
        assert_eq!(label.baseline, TextBaseline::Middle);
    }
    assert_eq!(layout.value_labels[0].text, "$200");
    assert_eq!(layout.value_labels[5].text, "$0");
}

#[test]
fn currency_and_locale_are_configurable() {
    let series = Series::from_points(vec![
        DataPoint::new(0.0, BucketLabel::new(1, 1)),
        DataPoint::new(12_500.0, BucketLabel::new(2, 1)),
    ]);
    let config = ChartConfig::default().with_currency("€").with_locale("de");
    let layout = ChartLayout::compute(800, 400, &series, &config).expect("layout");
    assert_eq!(layout.value_labels[0].text, "€12.500");
    assert_eq!(layout.value_labels[1].text, "€10.000");
}

#[test]
fn export_labels_carry_year() {
    let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).expect("valid date");
    let series = Series::from_daily_totals(vec![(d(12, 31), 10.0), (d(1, 2), 4.0)]);
    let config = ChartConfig::default()
        .with_date_format(DateLabelFormat::DayMonthYear)
        .with_zero_padded_dates(true);
    let layout = ChartLayout::compute(800, 400, &series, &config).expect("layout");
    let texts: Vec<&str> = layout.date_labels.iter().map(|l| l.text.as_str()).collect();
    // Caller order is kept even when dates are not ascending.
    assert_eq!(texts, vec!["31/12/2024", "02/01/2024"]);
}

#[test]
fn oversized_padding_collapses_plot() {
    let layout = ChartLayout::compute(60, 60, &sample(), &ChartConfig::default()).expect("layout");
    assert_eq!(layout.point_spacing, 0.0);
    assert!(layout.points.iter().all(|p| p.x == 40.0 && p.y == 40.0));
}
