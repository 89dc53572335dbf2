// File: crates/sales-chart-core/src/error.rs
// Summary: Configuration errors. Rendering itself never fails.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("padding must be a finite, non-negative number (got {0})")]
    InvalidPadding(f32),
    #[error("grid line count must be between 1 and {max}", max = crate::types::MAX_GRID_LINE_COUNT)]
    InvalidGridLineCount,
    #[error("marker size must be a finite, positive number (got {0})")]
    InvalidMarkerSize(f32),
    #[error("label font size must be a finite, positive number (got {0})")]
    InvalidFontSize(f32),
    #[error("unknown locale tag '{0}'")]
    UnknownLocale(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
