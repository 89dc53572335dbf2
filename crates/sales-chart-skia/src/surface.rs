// File: crates/sales-chart-skia/src/surface.rs
// Summary: DrawSurface over a Skia CPU raster surface, with PNG export.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use sales_chart_core::{Color, DrawSurface, Point, Size, Stroke, TextStyle};

use crate::error::{Result, SkiaError};
use crate::text::TextShaper;

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaSurface {
    surface: skia::Surface,
    width: u32,
    height: u32,
    text: TextShaper,
    draw_text: bool,
}

impl SkiaSurface {
    /// Allocate an N32 premultiplied raster of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let invalid = || SkiaError::InvalidSurface { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        let surface = skia::surfaces::raster_n32_premul((w, h)).ok_or_else(invalid)?;
        debug!(width, height, "allocated raster surface");
        Ok(Self { surface, width, height, text: TextShaper::new(), draw_text: true })
    }

    /// Skip text draws; font availability differs across machines, so golden
    /// images are rendered without labels.
    pub fn without_text(mut self) -> Self {
        self.draw_text = false;
        self
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SkiaError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode and write to `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }
}

impl DrawSurface for SkiaSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia_color(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(to_skia_color(stroke.color));
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn fill_rect(&mut self, origin: Point, size: Size, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(color));
        let rect = skia::Rect::from_xywh(origin.x, origin.y, size.width, size.height);
        self.surface.canvas().draw_rect(rect, &paint);
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        if !self.draw_text {
            return;
        }
        let canvas = self.surface.canvas();
        self.text.draw_anchored(canvas, text, at, style);
    }
}
