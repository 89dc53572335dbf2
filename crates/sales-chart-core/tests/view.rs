// File: crates/sales-chart-core/tests/view.rs
// Purpose: ChartView redraws once per input change and coalesces bursts.

use sales_chart_core::{
    BucketLabel, ChartConfig, ChartView, DataPoint, RecordingSurface, RenderOutcome, Series,
    SkipReason, Theme,
};

fn series(totals: &[f64]) -> Series {
    totals
        .iter()
        .enumerate()
        .map(|(i, &t)| DataPoint::new(t, BucketLabel::new(i as u32 + 1, 5)))
        .collect()
}

#[test]
fn first_redraw_renders_blank_chart() {
    let mut view = ChartView::new(RecordingSurface::new(400, 200), ChartConfig::default());
    assert!(view.is_dirty());
    assert!(view.redraw());
    assert_eq!(view.last_outcome(), Some(RenderOutcome::Skipped(SkipReason::EmptySeries)));
    assert!(!view.redraw());
    assert_eq!(view.render_count(), 1);
}

#[test]
fn bursts_of_changes_coalesce() {
    let mut view = ChartView::new(RecordingSurface::new(400, 200), ChartConfig::default());
    view.redraw();

    view.set_series(series(&[1.0, 2.0]));
    view.set_series(series(&[3.0, 4.0, 5.0]));
    view.set_config(ChartConfig::default().with_theme(Theme::dark()));
    assert!(view.redraw());
    assert_eq!(view.render_count(), 2);
    assert_eq!(view.last_outcome(), Some(RenderOutcome::Drawn { points: 3, degenerate: false }));
    assert_eq!(view.surface().rects().len(), 3);
}

#[test]
fn equal_inputs_do_not_dirty() {
    let mut view = ChartView::new(RecordingSurface::new(400, 200), ChartConfig::default());
    view.set_series(series(&[1.0, 2.0]));
    view.redraw();

    view.set_series(series(&[1.0, 2.0]));
    view.set_config(ChartConfig::default());
    assert!(!view.is_dirty());
    assert!(!view.redraw());
    assert_eq!(view.render_count(), 1);
}

#[test]
fn force_redraw_and_unmount() {
    let mut view = ChartView::new(RecordingSurface::new(400, 200), ChartConfig::default());
    view.set_series(series(&[7.0]));
    view.force_redraw();
    view.force_redraw();
    assert_eq!(view.render_count(), 2);
    let surface = view.into_surface();
    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.rects().len(), 1);
}
