// File: crates/sales-chart-core/src/render.rs
// Summary: Line chart renderer issuing immediate-mode calls against a DrawSurface.

use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::layout::{ChartLayout, Label};
use crate::series::Series;
use crate::surface::{DrawSurface, Stroke, TextStyle};
use crate::types::Size;

const AXIS_STROKE_WIDTH: f32 = 1.0;
const GRID_STROKE_WIDTH: f32 = 1.0;
const LINE_STROKE_WIDTH: f32 = 2.0;

/// Why a render stopped before drawing data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Zero-width or zero-height surface; not even a clear is issued.
    EmptySurface,
    /// No points; the surface is cleared and left blank.
    EmptySeries,
}

/// What a render call did. Informational only; rendering has no error path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Skipped(SkipReason),
    Drawn {
        points: usize,
        /// A single point or an all-zero series took the guarded arithmetic path.
        degenerate: bool,
    },
}

/// A series paired with the configuration used to draw it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineChart {
    pub series: Series,
    pub config: ChartConfig,
}

impl LineChart {
    pub fn new(series: Series, config: ChartConfig) -> Self {
        Self { series, config }
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> RenderOutcome {
        render_with_outcome(surface, &self.series, &self.config)
    }
}

/// Redraw `surface` in full from `series` and `config`.
pub fn render<S: DrawSurface + ?Sized>(surface: &mut S, series: &Series, config: &ChartConfig) {
    render_with_outcome(surface, series, config);
}

pub fn render_with_outcome<S: DrawSurface + ?Sized>(
    surface: &mut S,
    series: &Series,
    config: &ChartConfig,
) -> RenderOutcome {
    let (width, height) = (surface.width(), surface.height());
    if surface.is_empty() {
        trace!(width, height, "skipping render on empty surface");
        return RenderOutcome::Skipped(SkipReason::EmptySurface);
    }

    let theme = &config.theme;
    surface.clear(theme.background);

    let Some(layout) = ChartLayout::compute(width, height, series, config) else {
        trace!("skipping render of empty series");
        return RenderOutcome::Skipped(SkipReason::EmptySeries);
    };

    draw_axes(surface, &layout, config);
    draw_grid(surface, &layout, config);
    draw_series(surface, &layout, config);
    draw_labels(surface, &layout, config);

    let points = layout.points.len();
    let degenerate = points == 1 || layout.max_value == 0.0;
    debug!(points, max_value = layout.max_value, width, height, degenerate, "rendered line chart");
    RenderOutcome::Drawn { points, degenerate }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes<S: DrawSurface + ?Sized>(surface: &mut S, layout: &ChartLayout, config: &ChartConfig) {
    let stroke = Stroke::new(config.theme.axis, AXIS_STROKE_WIDTH);
    let (x0, x1) = layout.x_axis;
    let (y0, y1) = layout.y_axis;
    surface.draw_line(x0, x1, &stroke);
    surface.draw_line(y0, y1, &stroke);
}

fn draw_grid<S: DrawSurface + ?Sized>(surface: &mut S, layout: &ChartLayout, config: &ChartConfig) {
    let stroke = Stroke::new(config.theme.grid, GRID_STROKE_WIDTH);
    for &(from, to) in &layout.gridlines {
        surface.draw_line(from, to, &stroke);
    }
}

fn draw_series<S: DrawSurface + ?Sized>(surface: &mut S, layout: &ChartLayout, config: &ChartConfig) {
    let stroke = Stroke::new(config.theme.line, LINE_STROKE_WIDTH);
    for (from, to) in layout.segments() {
        surface.draw_line(from, to, &stroke);
    }

    let side = config.effective_marker_size();
    let half = side * 0.5;
    for p in &layout.points {
        surface.fill_rect((p.x - half, p.y - half).into(), Size::square(side), config.theme.marker);
    }
}

fn draw_labels<S: DrawSurface + ?Sized>(surface: &mut S, layout: &ChartLayout, config: &ChartConfig) {
    let size = config.effective_label_font_size();
    let draw = |surface: &mut S, label: &Label| {
        let style = TextStyle {
            color: config.theme.label,
            size,
            align: label.align,
            baseline: label.baseline,
        };
        surface.draw_text(&label.text, label.at, &style);
    };
    for label in &layout.date_labels {
        draw(surface, label);
    }
    for label in &layout.value_labels {
        draw(surface, label);
    }
}
