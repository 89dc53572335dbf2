// File: crates/sales-chart-skia/src/text.rs
// Summary: Label shaper using Skia textlayout; measures text so labels can be anchored.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use sales_chart_core::{Point, TextAlign, TextBaseline, TextStyle as LabelStyle};

use crate::surface::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Tabular digits keep currency labels aligned on the right edge
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Top-left corner at which a paragraph of `width` x `height` must be
    /// painted so that `at` becomes its anchor.
    pub fn anchor_origin(at: Point, width: f32, height: f32, align: TextAlign, baseline: TextBaseline) -> Point {
        let x = match align {
            TextAlign::Left => at.x,
            TextAlign::Center => at.x - width * 0.5,
            TextAlign::Right => at.x - width,
        };
        let y = match baseline {
            TextBaseline::Top => at.y,
            TextBaseline::Middle => at.y - height * 0.5,
        };
        Point::new(x, y)
    }

    pub fn draw_anchored(&self, canvas: &skia::Canvas, text: &str, at: Point, style: &LabelStyle) {
        let mut paragraph = self.layout(text, style.size, to_skia_color(style.color));
        let origin = Self::anchor_origin(
            at,
            paragraph.longest_line(),
            paragraph.height(),
            style.align,
            style.baseline,
        );
        paragraph.paint(canvas, (origin.x, origin.y));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
