// File: crates/sales-chart-core/src/surface.rs
// Summary: Immediate-mode drawing surface trait and a recording implementation.

use crate::types::{Color, Point, Size, TextAlign, TextBaseline};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Write-only pixel sink. Implementations draw immediately; nothing is retained
/// between calls, and `clear` wipes whatever a previous frame left behind.
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    /// Fill an axis-aligned rectangle whose top-left corner is `origin`.
    fn fill_rect(&mut self, origin: Point, size: Size, color: Color);
    /// `at` is interpreted through `style.align` and `style.baseline`.
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn width(&self) -> u32 { (**self).width() }
    fn height(&self) -> u32 { (**self).height() }
    fn clear(&mut self, color: Color) { (**self).clear(color) }
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        (**self).draw_line(from, to, stroke)
    }
    fn fill_rect(&mut self, origin: Point, size: Size, color: Color) {
        (**self).fill_rect(origin, size, color)
    }
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        (**self).draw_text(text, at, style)
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line { from: Point, to: Point, stroke: Stroke },
    Rect { origin: Point, size: Size, color: Color },
    Text { text: String, at: Point, style: TextStyle },
}

/// Surface that keeps a display list instead of pixels.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn clear_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Clear(_))).count()
    }

    pub fn lines(&self) -> Vec<(Point, Point, Stroke)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
                _ => None,
            })
            .collect()
    }

    /// Lines drawn with exactly `color`.
    pub fn lines_with_color(&self, color: Color) -> Vec<(Point, Point)> {
        self.lines()
            .into_iter()
            .filter(|(_, _, s)| s.color == color)
            .map(|(a, b, _)| (a, b))
            .collect()
    }

    pub fn rects(&self) -> Vec<(Point, Size, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { origin, size, color } => Some((*origin, *size, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(&str, Point, TextStyle)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, at, style } => Some((text.as_str(), *at, *style)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn clear(&mut self, color: Color) {
        // Immediate mode: a clear wipes everything recorded before it.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke: *stroke });
    }

    fn fill_rect(&mut self, origin: Point, size: Size, color: Color) {
        self.commands.push(DrawCommand::Rect { origin, size, color });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: *style });
    }
}
