//! Interactive output adapter: records the composed layout as a
//! structured, serializable op tree suitable for direct display.
//!
//! The default scene is continuous (one logical page, no breaks); a
//! finite page height can be set so grid pagination is testable
//! without a real output backend.

use serde::Serialize;

use crate::assets::ImageData;
use crate::surface::{Color, Rect, Surface, TextAlign, TextStyle};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SceneNode {
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
        color: Color,
        align: TextAlign,
    },
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64 },
    Image { name: String, rect: Rect, opacity: f64 },
}

/// The recorded layout tree: pages of ops in paint order.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    page_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_height: Option<f64>,
    pages: Vec<Vec<SceneNode>>,
}

impl Scene {
    /// A continuous surface: one page, unbounded height. This is what
    /// the interactive preview consumes.
    pub fn continuous(page_width: f64) -> Self {
        Scene { page_width, page_height: None, pages: vec![Vec::new()] }
    }

    /// A paged recording surface with a finite page height.
    pub fn paged(page_width: f64, page_height: f64) -> Self {
        Scene { page_width, page_height: Some(page_height), pages: vec![Vec::new()] }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Vec<SceneNode>] {
        &self.pages
    }

    /// All text contents in paint order, across pages.
    pub fn texts(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .filter_map(|node| match node {
                SceneNode::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any text op equals `needle` exactly.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }

    /// Number of text ops equal to `needle`.
    pub fn count_text(&self, needle: &str) -> usize {
        self.texts().iter().filter(|t| **t == needle).count()
    }

    /// Paint-order index of the first text op equal to `needle`.
    pub fn text_index(&self, needle: &str) -> Option<usize> {
        self.texts().iter().position(|t| *t == needle)
    }

    /// Position of the first text op equal to `needle`.
    pub fn text_position(&self, needle: &str) -> Option<(f64, f64)> {
        self.pages.iter().flat_map(|page| page.iter()).find_map(|node| match node {
            SceneNode::Text { x, y, text, .. } if text == needle => Some((*x, *y)),
            _ => None,
        })
    }

    fn push(&mut self, node: SceneNode) {
        // pages is never empty; both constructors seed the first page.
        if let Some(page) = self.pages.last_mut() {
            page.push(node);
        }
    }
}

impl Surface for Scene {
    fn page_width(&self) -> f64 {
        self.page_width
    }

    fn page_height(&self) -> f64 {
        self.page_height.unwrap_or(f64::INFINITY)
    }

    fn start_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle, color: Color, align: TextAlign) {
        self.push(SceneNode::Text { x, y, text: text.to_string(), style: *style, color, align });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(SceneNode::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.push(SceneNode::StrokeRect { rect, color, width });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
        self.push(SceneNode::Line { x1, y1, x2, y2, color, width });
    }

    fn image(&mut self, image: &ImageData, rect: Rect, opacity: f64) {
        self.push(SceneNode::Image { name: image.name.clone(), rect, opacity });
    }
}
