// File: crates/sales-chart-skia/src/error.rs
// Summary: Errors raised while allocating or encoding a raster surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkiaError {
    #[error("cannot allocate a {width}x{height} raster surface")]
    InvalidSurface { width: u32, height: u32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SkiaError> = std::result::Result<T, E>;
