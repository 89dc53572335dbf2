// File: crates/sales-chart-core/src/scale.rs
// Summary: Index (X) and Value (Y) scale transforms with divide-by-zero guards.

/// Horizontal scale placing bucket `i` at `left_px + i * spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f32,
    pub spacing: f32,
}

impl IndexScale {
    /// Spread `count` buckets across `width_px`; one bucket or none gives zero spacing.
    pub fn new(left_px: f32, width_px: f32, count: usize) -> Self {
        let spacing = if count > 1 { width_px / (count - 1) as f32 } else { 0.0 };
        Self { left_px, spacing }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.spacing
    }
}

/// Vertical scale mapping `0..=max` to `bottom_px..=top_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub max: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, max: f64) -> Self {
        Self { top_px, bottom_px, max }
    }

    /// Fraction of the plot height covered by `value`. Zero when `max` is 0
    /// or not finite, so every value lands on the baseline.
    #[inline]
    pub fn ratio(&self, value: f64) -> f64 {
        if self.max > 0.0 && self.max.is_finite() && value.is_finite() {
            value / self.max
        } else {
            0.0
        }
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f32 {
        self.bottom_px - (self.ratio(value) as f32) * (self.bottom_px - self.top_px)
    }
}

/// Evenly spaced positions from `start` to `end` inclusive, `intervals + 1` of them.
pub fn linspace(start: f32, end: f32, intervals: u32) -> Vec<f32> {
    if intervals == 0 {
        return vec![start];
    }
    let step = (end - start) / intervals as f32;
    (0..=intervals).map(|i| start + step * i as f32).collect()
}

/// Gridline values top to bottom: `round(max / count * (count - i))` for `i in 0..=count`.
pub fn gridline_values(max: f64, count: u32) -> Vec<f64> {
    let count = count.max(1);
    let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
    (0..=count)
        .map(|i| (max / count as f64 * (count - i) as f64).round())
        .collect()
}
