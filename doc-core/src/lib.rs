pub mod assets;
pub mod company;
pub mod error;
pub mod format;
pub mod grid;
pub mod invoice;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod pdf;
pub mod receipt;
pub mod render;
pub mod scene;
pub mod surface;

pub use error::{RenderError, Result};
pub use model::{grand_total, Document, DocumentKind, LineItem};
pub use pdf::{PdfSurface, PAGE_HEIGHT, PAGE_WIDTH};
pub use render::{compose, Renderer};
pub use scene::{Scene, SceneNode};
pub use surface::{Color, FontId, Rect, Surface, TextAlign, TextStyle};
