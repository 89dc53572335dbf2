// File: crates/sales-chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, pixel points, text alignment).

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;

/// Default inset of the plotting rectangle from every surface edge.
pub const DEFAULT_PADDING: f32 = 40.0;
/// Default number of gridline intervals (one more gridline is drawn).
pub const DEFAULT_GRID_LINE_COUNT: u32 = 5;
/// Upper bound on gridline intervals; larger counts are rejected by
/// validation and clamped by the renderer.
pub const MAX_GRID_LINE_COUNT: u32 = 100;
/// Default side length of a point marker.
pub const DEFAULT_MARKER_SIZE: f32 = 6.0;
/// Default font size of date and value labels.
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 12.0;

/// Straight RGBA8 color, backend independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Rec. 601 luma in 0..=255, used to compare how "light" two strokes are.
    pub fn luma(&self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }
}

/// Position on the drawing surface, in logical pixels (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Width and height of a filled rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn square(side: f32) -> Self {
        Self { width: side, height: side }
    }
}

/// Horizontal anchor of a text label relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text label relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
}
