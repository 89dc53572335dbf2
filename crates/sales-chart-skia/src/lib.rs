// File: crates/sales-chart-skia/src/lib.rs
// Summary: Skia raster backend; renders sales charts to PNG.

pub mod error;
pub mod surface;
pub mod text;

use sales_chart_core::{render, ChartConfig, Series};

pub use error::SkiaError;
pub use surface::SkiaSurface;
pub use text::TextShaper;

/// Render `series` on a fresh `width` x `height` raster and return PNG bytes.
pub fn render_png_bytes(
    width: u32,
    height: u32,
    series: &Series,
    config: &ChartConfig,
) -> error::Result<Vec<u8>> {
    let mut surface = SkiaSurface::new(width, height)?;
    render(&mut surface, series, config);
    surface.encode_png()
}
