// File: crates/sales-chart-core/src/config.rs
// Summary: Render configuration (padding, gridlines, label formatting, theme).

use num_format::Locale;

use crate::error::{ChartError, Result};
use crate::format::{locale_from_tag, DateLabelFormat};
use crate::geometry::sanitize_padding;
use crate::theme::Theme;
use crate::types::{
    DEFAULT_GRID_LINE_COUNT, DEFAULT_LABEL_FONT_SIZE, DEFAULT_MARKER_SIZE, DEFAULT_PADDING,
    MAX_GRID_LINE_COUNT,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Inset of the plotting rectangle from every surface edge.
    pub padding: f32,
    /// Number of gridline intervals; `grid_line_count + 1` gridlines are drawn.
    pub grid_line_count: u32,
    pub marker_size: f32,
    pub label_font_size: f32,
    pub currency_symbol: String,
    /// Locale tag for thousands grouping, see [`locale_from_tag`].
    pub locale: String,
    pub date_format: DateLabelFormat,
    pub zero_pad_dates: bool,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            grid_line_count: DEFAULT_GRID_LINE_COUNT,
            marker_size: DEFAULT_MARKER_SIZE,
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            currency_symbol: "$".to_string(),
            locale: "en".to_string(),
            date_format: DateLabelFormat::DayMonth,
            zero_pad_dates: false,
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_grid_line_count(mut self, count: u32) -> Self {
        self.grid_line_count = count;
        self
    }

    pub fn with_marker_size(mut self, size: f32) -> Self {
        self.marker_size = size;
        self
    }

    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.label_font_size = size;
        self
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = tag.into();
        self
    }

    pub fn with_date_format(mut self, format: DateLabelFormat) -> Self {
        self.date_format = format;
        self
    }

    pub fn with_zero_padded_dates(mut self, zero_pad: bool) -> Self {
        self.zero_pad_dates = zero_pad;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Check every field; the renderer tolerates invalid values, hosts should not.
    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidPadding(self.padding));
        }
        if self.grid_line_count == 0 || self.grid_line_count > MAX_GRID_LINE_COUNT {
            return Err(ChartError::InvalidGridLineCount);
        }
        if !self.marker_size.is_finite() || self.marker_size <= 0.0 {
            return Err(ChartError::InvalidMarkerSize(self.marker_size));
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(ChartError::InvalidFontSize(self.label_font_size));
        }
        if locale_from_tag(&self.locale).is_none() {
            return Err(ChartError::UnknownLocale(self.locale.clone()));
        }
        Ok(())
    }

    pub(crate) fn effective_padding(&self) -> f32 {
        sanitize_padding(self.padding)
    }

    pub(crate) fn effective_grid_line_count(&self) -> u32 {
        self.grid_line_count.clamp(1, MAX_GRID_LINE_COUNT)
    }

    pub(crate) fn effective_marker_size(&self) -> f32 {
        if self.marker_size.is_finite() { self.marker_size.max(0.0) } else { DEFAULT_MARKER_SIZE }
    }

    pub(crate) fn effective_label_font_size(&self) -> f32 {
        if self.label_font_size.is_finite() { self.label_font_size.max(1.0) } else { DEFAULT_LABEL_FONT_SIZE }
    }

    /// Unknown tags fall back to English grouping.
    pub fn number_locale(&self) -> &'static Locale {
        locale_from_tag(&self.locale).unwrap_or(&Locale::en)
    }
}
