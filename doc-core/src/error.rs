use thiserror::Error;

/// Failures that can surface from a render call.
///
/// Only output-stream and asset-decoding problems live here. A missing
/// optional field (due date, received-by, payment reference) is a
/// documented omission, not an error, and asset-load failures are
/// recovered inside the render pass without reaching the caller.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode logo image: {0}")]
    ImageDecode(#[from] png::DecodingError),

    #[error("Unsupported image data: {0}")]
    UnsupportedImage(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
