// File: crates/sales-chart-core/src/view.rs
// Host-side view: owns a surface and re-renders it when series or config change.

use tracing::trace;

use crate::config::ChartConfig;
use crate::render::{LineChart, RenderOutcome};
use crate::series::Series;
use crate::surface::DrawSurface;

/// Mount-to-unmount owner of a drawing surface.
///
/// Input changes only mark the view dirty; `redraw` renders the latest inputs
/// once, however many changes happened since the previous frame.
pub struct ChartView<S: DrawSurface> {
    surface: S,
    chart: LineChart,
    dirty: bool,
    renders: u64,
    last_outcome: Option<RenderOutcome>,
}

impl<S: DrawSurface> ChartView<S> {
    /// Mount on `surface`. The first `redraw` always renders.
    pub fn new(surface: S, config: ChartConfig) -> Self {
        Self {
            surface,
            chart: LineChart::new(Series::new(), config),
            dirty: true,
            renders: 0,
            last_outcome: None,
        }
    }

    pub fn series(&self) -> &Series { &self.chart.series }
    pub fn config(&self) -> &ChartConfig { &self.chart.config }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn render_count(&self) -> u64 { self.renders }
    pub fn last_outcome(&self) -> Option<RenderOutcome> { self.last_outcome }

    /// Replace the data. Setting an equal series leaves the view clean.
    pub fn set_series(&mut self, series: Series) {
        if self.chart.series != series {
            self.chart.series = series;
            self.dirty = true;
        }
    }

    /// Replace the configuration. Setting an equal config leaves the view clean.
    pub fn set_config(&mut self, config: ChartConfig) {
        if self.chart.config != config {
            self.chart.config = config;
            self.dirty = true;
        }
    }

    /// Render if any input changed since the last frame. Returns whether it did.
    pub fn redraw(&mut self) -> bool {
        if !self.dirty {
            trace!("view clean, redraw skipped");
            return false;
        }
        self.force_redraw();
        true
    }

    /// Render the current inputs unconditionally.
    pub fn force_redraw(&mut self) -> RenderOutcome {
        let outcome = self.chart.render(&mut self.surface);
        self.dirty = false;
        self.renders += 1;
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Unmount, handing the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
