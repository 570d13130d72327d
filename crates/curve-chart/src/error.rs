// File: crates/curve-chart/src/error.rs
// Summary: Rendering failures surfaced to callers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("failed to create raster surface")]
    Surface,
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("PNG encode failed")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
