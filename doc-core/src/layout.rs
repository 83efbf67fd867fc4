//! Reusable layout recipes shared by the two composers: vertical cursor
//! bookkeeping, accent-colored panels, two-column splits, and titled or
//! underlined blocks.

use crate::surface::{Color, Rect, Surface, TextAlign, TextStyle};

/// Vertical gap inserted after every panel section.
pub const SECTION_GAP: f64 = 20.0;

/// Line pitch for body text inside blocks, in points.
pub const LINE_PITCH: f64 = 14.0;

/// Tracks where the next section begins on the current page.
///
/// Owned by exactly one composition pass and threaded explicitly
/// through the section functions; never shared across renders.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    y: f64,
}

impl Cursor {
    pub fn new(y: f64) -> Self {
        Cursor { y }
    }

    /// Current vertical offset from the page top.
    pub fn position(&self) -> f64 {
        self.y
    }

    /// Move the cursor down by `height`.
    pub fn advance(&mut self, height: f64) {
        self.y += height;
    }

    /// Jump to an absolute offset (used after the grid returns the
    /// position below its last row).
    pub fn jump_to(&mut self, y: f64) {
        self.y = y;
    }
}

/// Semantic panel kinds, each with a distinguishable accent palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAccent {
    /// Warm highlight for client-facing metadata (peach fill, orange border).
    Informational,
    /// Plain white body with a light gray border.
    Neutral,
    /// Light gray fill for header/footer rows and dividers.
    Structural,
}

impl PanelAccent {
    pub fn fill(self) -> Color {
        match self {
            // #FFF4EE
            PanelAccent::Informational => Color::rgb(1.0, 0.957, 0.933),
            PanelAccent::Neutral => Color::white(),
            // #F5F5F5
            PanelAccent::Structural => Color::gray(0.961),
        }
    }

    pub fn border(self) -> Color {
        match self {
            // #FEDFCA
            PanelAccent::Informational => Color::rgb(0.996, 0.875, 0.792),
            // #E5E7EB
            PanelAccent::Neutral => Color::rgb(0.898, 0.906, 0.922),
            PanelAccent::Structural => Color::gray(0.8),
        }
    }
}

/// Draw a bounded panel at the cursor and advance it by the panel
/// height plus [`SECTION_GAP`]. Returns the panel's rectangle so the
/// caller can position content inside it.
pub fn draw_panel(
    surface: &mut dyn Surface,
    x: f64,
    width: f64,
    height: f64,
    accent: PanelAccent,
    cursor: &mut Cursor,
) -> Rect {
    let rect = Rect { x, y: cursor.position(), width, height };
    surface.fill_rect(rect, accent.fill());
    surface.stroke_rect(rect, accent.border(), 0.75);
    cursor.advance(height + SECTION_GAP);
    rect
}

/// Split a horizontal extent into two column anchor points with a
/// fixed gutter. The columns share a vertical baseline but are
/// composed independently.
pub fn split_columns(x: f64, width: f64, gutter: f64) -> (f64, f64) {
    let column_width = (width - gutter) / 2.0;
    (x, x + column_width + gutter)
}

/// Render an accent-colored title line followed by body lines at
/// [`LINE_PITCH`]. Returns the y offset just below the last line so
/// sibling blocks can be aligned.
pub fn titled_block(
    surface: &mut dyn Surface,
    x: f64,
    y: f64,
    title: &str,
    title_style: &TextStyle,
    title_color: Color,
    body: &[&str],
    body_style: &TextStyle,
    body_color: Color,
) -> f64 {
    surface.text(x, y, title, title_style, title_color, TextAlign::Left);
    let mut line_y = y + LINE_PITCH;
    for line in body {
        surface.text(x, line_y, line, body_style, body_color, TextAlign::Left);
        line_y += LINE_PITCH;
    }
    line_y
}

/// Receipt-style field: a label, a full-width underline, and the value
/// below the line. The label and underline always render; the value
/// line is omitted when absent (the content is what is conditional,
/// not the field itself). Returns the y offset below the block.
pub fn underlined_field(
    surface: &mut dyn Surface,
    x: f64,
    y: f64,
    width: f64,
    label: &str,
    value: Option<&str>,
) -> f64 {
    surface.text(x, y, label, &TextStyle::bold(12.0), Color::black(), TextAlign::Left);
    let rule_y = y + 5.0;
    surface.line(x, rule_y, x + width, rule_y, Color::gray(0.78), 0.5);
    if let Some(value) = value {
        surface.text(x, y + 19.0, value, &TextStyle::regular(10.0), Color::black(), TextAlign::Left);
    }
    y + 46.0
}
