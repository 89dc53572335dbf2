// File: crates/sales-chart-core/src/geometry.rs
// Summary: Plotting rectangle math for pixel layout.

use crate::types::Point;

/// Inset area of the surface in which data is positioned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Inset a `width` x `height` surface by `padding` on all four sides.
    ///
    /// When the padding is wider than half a dimension, that extent collapses
    /// to zero instead of going negative; `left`/`top` stay at `padding` so
    /// the x and y formulas remain `padding + ...`.
    pub fn inset(width: u32, height: u32, padding: f32) -> Self {
        let padding = sanitize_padding(padding);
        let chart_w = (width as f32 - 2.0 * padding).max(0.0);
        let chart_h = (height as f32 - 2.0 * padding).max(0.0);
        Self {
            left: padding,
            top: padding,
            right: padding + chart_w,
            bottom: padding + chart_h,
        }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    pub fn top_left(&self) -> Point { Point::new(self.left, self.top) }
    pub fn bottom_left(&self) -> Point { Point::new(self.left, self.bottom) }
    pub fn bottom_right(&self) -> Point { Point::new(self.right, self.bottom) }
}

/// Negative and non-finite paddings render as zero.
#[inline]
pub fn sanitize_padding(padding: f32) -> f32 {
    if padding.is_finite() { padding.max(0.0) } else { 0.0 }
}
