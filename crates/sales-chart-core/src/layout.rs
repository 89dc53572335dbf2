// File: crates/sales-chart-core/src/layout.rs
// Summary: Pure pixel layout of a line chart: axes, gridlines, points and labels.

use crate::config::ChartConfig;
use crate::format::{format_currency, format_date_label};
use crate::geometry::PlotRect;
use crate::scale::{gridline_values, linspace, IndexScale, ValueScale};
use crate::series::Series;
use crate::types::{Point, TextAlign, TextBaseline};

/// Vertical distance from the x-axis to the middle of a date label.
pub const DATE_LABEL_OFFSET: f32 = 20.0;
/// Horizontal gap between the y-axis and the right edge of a value label.
pub const VALUE_LABEL_GAP: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotRect,
    pub x_axis: (Point, Point),
    pub y_axis: (Point, Point),
    /// Top to bottom; the last one coincides with the x-axis.
    pub gridlines: Vec<(Point, Point)>,
    /// One per data point, in series order.
    pub points: Vec<Point>,
    pub date_labels: Vec<Label>,
    /// Top to bottom, paired with `gridlines`.
    pub value_labels: Vec<Label>,
    pub max_value: f64,
    pub point_spacing: f32,
}

impl ChartLayout {
    /// Lay out `series` on a `width` x `height` surface.
    ///
    /// Returns `None` when there is nothing to draw: an empty series or a
    /// surface with zero area.
    pub fn compute(width: u32, height: u32, series: &Series, config: &ChartConfig) -> Option<Self> {
        if width == 0 || height == 0 || series.is_empty() {
            return None;
        }

        let padding = config.effective_padding();
        let grid_count = config.effective_grid_line_count();
        let plot = PlotRect::inset(width, height, padding);
        let max_value = series.max_total();

        let xs = IndexScale::new(plot.left, plot.width(), series.len());
        let ys = ValueScale::new(plot.top, plot.bottom, max_value);

        let points: Vec<Point> = series
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(xs.to_px(i), ys.to_px(p.scaled_total())))
            .collect();

        let grid_ys = linspace(plot.top, plot.bottom, grid_count);
        let gridlines = grid_ys
            .iter()
            .map(|&y| (Point::new(plot.left, y), Point::new(plot.right, y)))
            .collect();

        let date_labels = series
            .iter()
            .zip(&points)
            .map(|(p, at)| Label {
                text: format_date_label(&p.label, config.date_format, config.zero_pad_dates),
                at: Point::new(at.x, plot.bottom + DATE_LABEL_OFFSET),
                align: TextAlign::Center,
                baseline: TextBaseline::Middle,
            })
            .collect();

        let locale = config.number_locale();
        let value_labels = gridline_values(max_value, grid_count)
            .into_iter()
            .zip(&grid_ys)
            .map(|(value, &y)| Label {
                text: format_currency(value, &config.currency_symbol, locale),
                at: Point::new(plot.left - VALUE_LABEL_GAP, y),
                align: TextAlign::Right,
                baseline: TextBaseline::Middle,
            })
            .collect();

        Some(Self {
            plot,
            x_axis: (plot.bottom_left(), plot.bottom_right()),
            y_axis: (plot.top_left(), plot.bottom_left()),
            gridlines,
            points,
            date_labels,
            value_labels,
            max_value,
            point_spacing: xs.spacing,
        })
    }

    /// Consecutive point pairs joined by the polyline; empty for fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}
