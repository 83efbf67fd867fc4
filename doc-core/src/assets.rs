//! Best-effort loading of the company logo.
//!
//! The logo is a single named PNG resource fetched once per render.
//! Failure to load it must never abort a document: callers go through
//! [`fetch_logo`], which logs the failure and returns `None` so
//! composition continues without the image.

use std::path::Path;

use crate::error::{RenderError, Result};

/// Decoded image pixels ready for placement on a surface.
///
/// Pixels are 8-bit RGB with an optional separate alpha channel (the
/// PDF adapter embeds the alpha as an SMask; the preview records the
/// logical name only).
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Logical resource name ("logo"); both adapters reference the
    /// same name so visual and exported output stay in step.
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

/// Decode a PNG into RGB pixels plus an optional alpha channel.
pub fn decode_png(name: &str, bytes: &[u8]) -> Result<ImageData> {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::UnsupportedImage(format!(
            "unsupported PNG bit depth {:?} (expected 8)",
            info.bit_depth
        )));
    }

    let (rgb, alpha) = match info.color_type {
        png::ColorType::Rgb => (buf, None),
        png::ColorType::Rgba => split_alpha(&buf, 4),
        png::ColorType::Grayscale => (expand_gray(&buf), None),
        png::ColorType::GrayscaleAlpha => {
            let (gray, alpha) = split_alpha(&buf, 2);
            (expand_gray(&gray), alpha)
        }
        other => {
            return Err(RenderError::UnsupportedImage(format!(
                "unsupported PNG color type {:?}",
                other
            )))
        }
    };

    Ok(ImageData {
        name: name.to_string(),
        width: info.width,
        height: info.height,
        rgb,
        alpha,
    })
}

/// Separate interleaved pixels into color bytes and an alpha channel.
/// `stride` is bytes per pixel including the trailing alpha byte.
fn split_alpha(buf: &[u8], stride: usize) -> (Vec<u8>, Option<Vec<u8>>) {
    let pixels = buf.len() / stride;
    let mut color = Vec::with_capacity(pixels * (stride - 1));
    let mut alpha = Vec::with_capacity(pixels);
    for px in buf.chunks_exact(stride) {
        color.extend_from_slice(&px[..stride - 1]);
        alpha.push(px[stride - 1]);
    }
    (color, Some(alpha))
}

/// Expand single-channel grayscale to RGB triples.
fn expand_gray(gray: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(gray.len() * 3);
    for &g in gray {
        rgb.extend_from_slice(&[g, g, g]);
    }
    rgb
}

/// Load the company logo from disk.
pub fn load_logo(path: &Path) -> Result<ImageData> {
    let bytes = std::fs::read(path)?;
    decode_png("logo", &bytes)
}

/// Best-effort logo fetch. On any failure the problem is logged and
/// `None` is returned; the render proceeds without the image.
pub fn fetch_logo(path: &Path) -> Option<ImageData> {
    match load_logo(path) {
        Ok(image) => Some(image),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load logo, rendering without it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal 1x1 opaque red PNG (RGBA), generated once with the png crate.
    fn tiny_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, 1, 1);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[255, 0, 0, 255]).unwrap();
        }
        bytes
    }

    #[test]
    fn decodes_rgba_into_rgb_plus_alpha() {
        let image = decode_png("logo", &tiny_png()).unwrap();
        assert_eq!(image.width, 1);
        assert_eq!(image.height, 1);
        assert_eq!(image.rgb, vec![255, 0, 0]);
        assert_eq!(image.alpha, Some(vec![255]));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        assert!(decode_png("logo", b"not a png").is_err());
    }

    #[test]
    fn fetch_logo_swallows_missing_file() {
        assert!(fetch_logo(Path::new("/nonexistent/logo.png")).is_none());
    }
}
