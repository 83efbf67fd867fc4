//! Top-level render entry points.
//!
//! One render is one synchronous composition pass over one document
//! and its items. Each pass owns its cursor state and output surface,
//! so concurrent renders need no coordination; rendering never mutates
//! the input records.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::assets::{self, ImageData};
use crate::error::Result;
use crate::model::{Document, DocumentKind, LineItem};
use crate::pdf::{PdfSurface, PAGE_WIDTH};
use crate::scene::Scene;
use crate::surface::Surface;
use crate::{invoice, receipt};

/// Default logical path of the company logo asset.
pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";

/// Renders documents to the interactive preview or the exported PDF.
///
/// Both outputs go through the same composition pass and reference the
/// same logo asset, which is what keeps them consistent.
#[derive(Debug, Clone)]
pub struct Renderer {
    logo_path: PathBuf,
    compress: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer {
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            compress: true,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Renderer::default()
    }

    /// Override where the logo is loaded from.
    pub fn logo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = path.into();
        self
    }

    /// Toggle Flate compression of exported content streams (useful
    /// for inspecting the raw output).
    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Render the interactive preview: a continuous, serializable
    /// layout tree in the same section order as the export.
    pub fn preview(&self, document: &Document, items: &[LineItem]) -> Scene {
        let logo = assets::fetch_logo(&self.logo_path);
        let mut scene = Scene::continuous(PAGE_WIDTH);
        compose(document, items, logo.as_ref(), &mut scene);
        scene
    }

    /// Render the exported artifact: a paginated PDF written to `writer`.
    pub fn export_pdf<W: Write>(&self, document: &Document, items: &[LineItem], writer: W) -> Result<W> {
        let logo = assets::fetch_logo(&self.logo_path);
        let mut surface = PdfSurface::new(writer, self.compress)?;
        surface.set_info("Title", &title_for(document));
        surface.set_info("Creator", "Ladina Travel Safaris");
        compose(document, items, logo.as_ref(), &mut surface);
        surface.finish()
    }

    /// Render the exported artifact straight to a file.
    pub fn export_pdf_to_file<P: AsRef<Path>>(
        &self,
        document: &Document,
        items: &[LineItem],
        path: P,
    ) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.export_pdf(document, items, file)?;
        Ok(())
    }
}

/// Dispatch to the composer for the document's kind. Shared verbatim
/// by both adapters.
pub fn compose(
    document: &Document,
    items: &[LineItem],
    logo: Option<&ImageData>,
    surface: &mut dyn Surface,
) {
    tracing::debug!(
        document = %document.id,
        kind = ?document.kind,
        items = items.len(),
        "composing document"
    );
    match document.kind {
        DocumentKind::Invoice => invoice::compose(document, items, logo, surface),
        DocumentKind::Receipt => receipt::compose(document, items, logo, surface),
    }
}

fn title_for(document: &Document) -> String {
    match document.kind {
        DocumentKind::Invoice => format!("Invoice {}", document.id),
        DocumentKind::Receipt => format!("Receipt {}", document.id),
    }
}
