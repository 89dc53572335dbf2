// File: crates/sales-chart-core/src/lib.rs
// Summary: Core library entry point; exports the sales line chart model, layout and renderer.

pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;

pub use config::ChartConfig;
pub use error::ChartError;
pub use format::DateLabelFormat;
pub use layout::{ChartLayout, Label};
pub use render::{render, render_with_outcome, LineChart, RenderOutcome, SkipReason};
pub use series::{BucketLabel, DataPoint, Series};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, Stroke, TextStyle};
pub use theme::Theme;
pub use types::{Color, Point, Size, TextAlign, TextBaseline};
pub use view::ChartView;
