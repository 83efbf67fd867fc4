use serde::Serialize;

use crate::assets::ImageData;

/// RGB color, each component 0.0 (none) to 1.0 (full intensity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    pub fn gray(level: f64) -> Self {
        Color { r: level, g: level, b: level }
    }

    pub fn black() -> Self {
        Color::gray(0.0)
    }

    pub fn white() -> Self {
        Color::gray(1.0)
    }
}

/// The built-in Helvetica variants used by both document templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontId {
    Regular,
    Bold,
    Oblique,
}

/// Font plus size, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub font: FontId,
    pub size: f64,
}

impl TextStyle {
    pub fn regular(size: f64) -> Self {
        TextStyle { font: FontId::Regular, size }
    }

    pub fn bold(size: f64) -> Self {
        TextStyle { font: FontId::Bold, size }
    }

    pub fn oblique(size: f64) -> Self {
        TextStyle { font: FontId::Oblique, size }
    }
}

/// Horizontal text anchoring relative to the given x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// An axis-aligned rectangle. (x, y) is the top-left corner; y grows
/// downward (composition uses screen-style coordinates, the PDF adapter
/// converts to PDF's bottom-left origin internally).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Drawing target shared by both output adapters.
///
/// The composers emit every section through this trait, so the
/// interactive preview and the exported artifact are produced by the
/// same composition pass and can never drift apart.
pub trait Surface {
    /// Page width in points.
    fn page_width(&self) -> f64;

    /// Usable page height in points. Continuous surfaces (the
    /// interactive preview) report `f64::INFINITY`, which disables
    /// grid pagination naturally.
    fn page_height(&self) -> f64;

    /// Close the current page and begin a new one. Only the items grid
    /// triggers this during composition.
    fn start_page(&mut self);

    /// Place a single line of text. `y` is the baseline; `x` is
    /// interpreted per `align`.
    fn text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle, color: Color, align: TextAlign);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64);

    /// Place an image scaled to `rect`. `opacity` is 1.0 for normal
    /// placement and lower for watermarks.
    fn image(&mut self, image: &ImageData, rect: Rect, opacity: f64);
}
