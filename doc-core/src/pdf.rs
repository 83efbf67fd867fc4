//! Exported-artifact adapter: renders the composed layout onto
//! US-Letter PDF pages.
//!
//! Pages are written incrementally; finished page content is flushed
//! to the writer and freed. Only the built-in Helvetica family is
//! used, so no font data is embedded. The logo is embedded once as an
//! image XObject (with an SMask for its alpha channel) and referenced
//! from every placement; watermark placements go through an ExtGState
//! with reduced constant alpha.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::assets::ImageData;
use crate::error::Result;
use crate::metrics;
use crate::surface::{Color, FontId, Rect, Surface, TextAlign, TextStyle};

/// US-Letter page size in points.
pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

const CATALOG_OBJ: u32 = 1;
const PAGES_OBJ: u32 = 2;
// Shared font objects, written up front: (object, resource, base font).
const FONTS: [(u32, &str, &str); 3] = [
    (3, "F1", "Helvetica"),
    (4, "F2", "Helvetica-Bold"),
    (5, "F3", "Helvetica-Oblique"),
];
const FIRST_DYNAMIC_OBJ: u32 = 6;

struct EmbeddedImage {
    name: String,
    obj: u32,
}

struct AlphaState {
    level: f64,
    obj: u32,
}

/// A paginated PDF output surface.
///
/// Generic over `Write` so it works with files, in-memory buffers, or
/// any other writer. The `Surface` methods buffer content ops for the
/// open page; IO failures along the way are stashed and surfaced by
/// [`PdfSurface::finish`].
pub struct PdfSurface<W: Write> {
    writer: W,
    offset: usize,
    xref: Vec<(u32, usize)>,
    next_obj: u32,
    page_ids: Vec<u32>,
    content: Option<Vec<u8>>,
    images: Vec<EmbeddedImage>,
    alphas: Vec<AlphaState>,
    info: Vec<(String, String)>,
    compress: bool,
    io_error: Option<io::Error>,
}

impl PdfSurface<BufWriter<File>> {
    /// Create a PDF surface writing to a file.
    pub fn create<P: AsRef<Path>>(path: P, compress: bool) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), compress)
    }
}

impl<W: Write> PdfSurface<W> {
    /// Write the PDF header and shared font objects immediately.
    pub fn new(writer: W, compress: bool) -> Result<Self> {
        let mut surface = PdfSurface {
            writer,
            offset: 0,
            xref: Vec::new(),
            next_obj: FIRST_DYNAMIC_OBJ,
            page_ids: Vec::new(),
            content: None,
            images: Vec::new(),
            alphas: Vec::new(),
            info: Vec::new(),
            compress,
            io_error: None,
        };
        surface.put(b"%PDF-1.7\n")?;
        // Binary comment so transports treat the file as binary.
        surface.put(b"%\xe2\xe3\xcf\xd3\n")?;
        for (obj, _, base) in FONTS {
            surface.begin_obj(obj)?;
            surface.put(
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    base
                )
                .as_bytes(),
            )?;
            surface.end_obj()?;
        }
        Ok(surface)
    }

    /// Set a document info entry (e.g. "Title", "Creator").
    pub fn set_info(&mut self, key: &str, value: &str) -> &mut Self {
        self.info.push((key.to_string(), value.to_string()));
        self
    }

    /// Finish the document: flushes the open page, then writes the
    /// pages tree, catalog, info, xref table, and trailer. Returns the
    /// inner writer, or the first IO error hit along the way.
    pub fn finish(mut self) -> Result<W> {
        if self.content.is_some() {
            self.end_page()?;
        }
        if let Some(err) = self.io_error.take() {
            return Err(err.into());
        }

        // Alpha ExtGState objects (ids were assigned at first use).
        let alphas = std::mem::take(&mut self.alphas);
        for state in &alphas {
            self.begin_obj(state.obj)?;
            self.put(
                format!(
                    "<< /Type /ExtGState /ca {} /CA {} >>",
                    fmt_coord(state.level),
                    fmt_coord(state.level)
                )
                .as_bytes(),
            )?;
            self.end_obj()?;
        }

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = self.alloc_obj();
            let entries = std::mem::take(&mut self.info);
            self.begin_obj(id)?;
            self.put(b"<<")?;
            for (key, value) in &entries {
                self.put(format!(" /{} ({})", key, escape_text(value)).as_bytes())?;
            }
            self.put(b" >>")?;
            self.end_obj()?;
            Some(id)
        };

        let kids: Vec<String> = self.page_ids.iter().map(|id| format!("{} 0 R", id)).collect();
        let page_count = self.page_ids.len();
        self.begin_obj(PAGES_OBJ)?;
        self.put(
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), page_count)
                .as_bytes(),
        )?;
        self.end_obj()?;

        self.begin_obj(CATALOG_OBJ)?;
        self.put(format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_OBJ).as_bytes())?;
        self.end_obj()?;

        self.write_xref_and_trailer(info_id)?;
        Ok(self.writer)
    }

    // ---------------------------------------------------
    // Object plumbing
    // ---------------------------------------------------

    fn put(&mut self, data: &[u8]) -> io::Result<()> {
        self.writer.write_all(data)?;
        self.offset += data.len();
        Ok(())
    }

    fn begin_obj(&mut self, id: u32) -> io::Result<()> {
        self.xref.push((id, self.offset));
        self.put(format!("{} 0 obj\n", id).as_bytes())
    }

    fn end_obj(&mut self) -> io::Result<()> {
        self.put(b"\nendobj\n")
    }

    fn alloc_obj(&mut self) -> u32 {
        let id = self.next_obj;
        self.next_obj += 1;
        id
    }

    /// Write a stream object with the given extra dict entries.
    fn write_stream(&mut self, id: u32, extra_dict: &str, data: &[u8]) -> io::Result<()> {
        self.begin_obj(id)?;
        self.put(format!("<<{} /Length {} >>\nstream\n", extra_dict, data.len()).as_bytes())?;
        self.put(data)?;
        self.put(b"\nendstream")?;
        self.end_obj()
    }

    fn write_xref_and_trailer(&mut self, info_id: Option<u32>) -> io::Result<()> {
        let xref_offset = self.offset;
        self.xref.sort_by_key(|&(num, _)| num);
        let size = self.xref.last().map(|&(num, _)| num).unwrap_or(0) + 1;

        self.put(b"xref\n")?;
        self.put(format!("0 {}\n", size).as_bytes())?;
        // Object 0: free entry head (every entry is exactly 20 bytes).
        self.put(b"0000000000 65535 f\r\n")?;
        let offsets: std::collections::HashMap<u32, usize> = self.xref.iter().copied().collect();
        for obj_num in 1..size {
            match offsets.get(&obj_num) {
                Some(&off) => self.put(format!("{:010} 00000 n\r\n", off).as_bytes())?,
                None => self.put(b"0000000000 00000 f\r\n")?,
            }
        }

        self.put(format!("trailer\n<< /Size {} /Root {} 0 R", size, CATALOG_OBJ).as_bytes())?;
        if let Some(info) = info_id {
            self.put(format!(" /Info {} 0 R", info).as_bytes())?;
        }
        self.put(b" >>\n")?;
        self.put(format!("startxref\n{}\n%%EOF\n", xref_offset).as_bytes())?;
        Ok(())
    }

    // ---------------------------------------------------
    // Page lifecycle
    // ---------------------------------------------------

    /// Content ops buffer for the open page, opening one on demand.
    fn ops(&mut self) -> &mut Vec<u8> {
        self.content.get_or_insert_with(Vec::new)
    }

    fn end_page(&mut self) -> io::Result<()> {
        let ops = match self.content.take() {
            Some(ops) => ops,
            None => return Ok(()),
        };

        let (data, filter) = if self.compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&ops)?;
            (encoder.finish()?, " /Filter /FlateDecode")
        } else {
            (ops, "")
        };

        let content_id = self.alloc_obj();
        self.write_stream(content_id, filter, &data)?;

        let page_id = self.alloc_obj();
        let resources = self.resources_dict();
        self.begin_obj(page_id)?;
        self.put(
            format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R /Resources {} >>",
                PAGES_OBJ,
                fmt_coord(PAGE_WIDTH),
                fmt_coord(PAGE_HEIGHT),
                content_id,
                resources,
            )
            .as_bytes(),
        )?;
        self.end_obj()?;
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Resources shared by all pages: the three fonts plus any
    /// registered images and alpha states.
    fn resources_dict(&self) -> String {
        let fonts: Vec<String> =
            FONTS.iter().map(|(obj, res, _)| format!("/{} {} 0 R", res, obj)).collect();
        let mut dict = format!("<< /Font << {} >>", fonts.join(" "));
        if !self.images.is_empty() {
            let entries: Vec<String> = self
                .images
                .iter()
                .enumerate()
                .map(|(idx, image)| format!("/Im{} {} 0 R", idx + 1, image.obj))
                .collect();
            dict.push_str(&format!(" /XObject << {} >>", entries.join(" ")));
        }
        if !self.alphas.is_empty() {
            let entries: Vec<String> = self
                .alphas
                .iter()
                .enumerate()
                .map(|(idx, state)| format!("/GS{} {} 0 R", idx + 1, state.obj))
                .collect();
            dict.push_str(&format!(" /ExtGState << {} >>", entries.join(" ")));
        }
        dict.push_str(" >>");
        dict
    }

    // ---------------------------------------------------
    // Image embedding
    // ---------------------------------------------------

    /// Embed the image once and return its resource name. Pixel data
    /// is Flate-compressed; an alpha channel becomes a DeviceGray
    /// SMask object.
    fn register_image(&mut self, image: &ImageData) -> io::Result<String> {
        if let Some(idx) = self.images.iter().position(|i| i.name == image.name) {
            return Ok(format!("Im{}", idx + 1));
        }

        let smask_id = match &image.alpha {
            Some(alpha) => {
                let id = self.alloc_obj();
                let data = deflate(alpha)?;
                let dict = format!(
                    " /Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceGray /BitsPerComponent 8 /Filter /FlateDecode",
                    image.width, image.height
                );
                self.write_stream(id, &dict, &data)?;
                Some(id)
            }
            None => None,
        };

        let id = self.alloc_obj();
        let data = deflate(&image.rgb)?;
        let mut dict = format!(
            " /Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode",
            image.width, image.height
        );
        if let Some(smask) = smask_id {
            dict.push_str(&format!(" /SMask {} 0 R", smask));
        }
        self.write_stream(id, &dict, &data)?;

        self.images.push(EmbeddedImage { name: image.name.clone(), obj: id });
        Ok(format!("Im{}", self.images.len()))
    }

    /// Resource name of the ExtGState for `level`, registering it on
    /// first use. The object itself is written at finish time.
    fn alpha_state(&mut self, level: f64) -> String {
        if let Some(idx) = self.alphas.iter().position(|a| (a.level - level).abs() < 1e-9) {
            return format!("GS{}", idx + 1);
        }
        let obj = self.alloc_obj();
        self.alphas.push(AlphaState { level, obj });
        format!("GS{}", self.alphas.len())
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.io_error.get_or_insert(err);
        }
    }
}

impl<W: Write> Surface for PdfSurface<W> {
    fn page_width(&self) -> f64 {
        PAGE_WIDTH
    }

    fn page_height(&self) -> f64 {
        PAGE_HEIGHT
    }

    fn start_page(&mut self) {
        if self.content.is_some() {
            let result = self.end_page();
            self.record(result);
        }
        self.content = Some(Vec::new());
    }

    fn text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle, color: Color, align: TextAlign) {
        let anchor_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - metrics::text_width(text, style) / 2.0,
            TextAlign::Right => x - metrics::text_width(text, style),
        };
        let baseline = PAGE_HEIGHT - y;
        let ops = format!(
            "BT\n/{} {} Tf\n{} {} {} rg\n{} {} Td\n({}) Tj\nET\n",
            font_resource(style.font),
            fmt_coord(style.size),
            fmt_coord(color.r),
            fmt_coord(color.g),
            fmt_coord(color.b),
            fmt_coord(anchor_x),
            fmt_coord(baseline),
            escape_text(text),
        );
        self.ops().extend_from_slice(ops.as_bytes());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let bottom = PAGE_HEIGHT - rect.y - rect.height;
        let ops = format!(
            "{} {} {} rg\n{} {} {} {} re\nf\n",
            fmt_coord(color.r),
            fmt_coord(color.g),
            fmt_coord(color.b),
            fmt_coord(rect.x),
            fmt_coord(bottom),
            fmt_coord(rect.width),
            fmt_coord(rect.height),
        );
        self.ops().extend_from_slice(ops.as_bytes());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        let bottom = PAGE_HEIGHT - rect.y - rect.height;
        let ops = format!(
            "q\n{} {} {} RG\n{} w\n{} {} {} {} re\nS\nQ\n",
            fmt_coord(color.r),
            fmt_coord(color.g),
            fmt_coord(color.b),
            fmt_coord(width),
            fmt_coord(rect.x),
            fmt_coord(bottom),
            fmt_coord(rect.width),
            fmt_coord(rect.height),
        );
        self.ops().extend_from_slice(ops.as_bytes());
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
        let ops = format!(
            "q\n{} {} {} RG\n{} w\n{} {} m\n{} {} l\nS\nQ\n",
            fmt_coord(color.r),
            fmt_coord(color.g),
            fmt_coord(color.b),
            fmt_coord(width),
            fmt_coord(x1),
            fmt_coord(PAGE_HEIGHT - y1),
            fmt_coord(x2),
            fmt_coord(PAGE_HEIGHT - y2),
        );
        self.ops().extend_from_slice(ops.as_bytes());
    }

    fn image(&mut self, image: &ImageData, rect: Rect, opacity: f64) {
        let resource = match self.register_image(image) {
            Ok(resource) => resource,
            Err(err) => {
                self.io_error.get_or_insert(err);
                return;
            }
        };
        let gs = if opacity < 1.0 { Some(self.alpha_state(opacity)) } else { None };
        let bottom = PAGE_HEIGHT - rect.y - rect.height;
        let mut ops = String::from("q\n");
        if let Some(gs) = &gs {
            ops.push_str(&format!("/{} gs\n", gs));
        }
        ops.push_str(&format!(
            "{} 0 0 {} {} {} cm\n/{} Do\nQ\n",
            fmt_coord(rect.width),
            fmt_coord(rect.height),
            fmt_coord(rect.x),
            fmt_coord(bottom),
            resource,
        ));
        self.ops().extend_from_slice(ops.as_bytes());
    }
}

fn font_resource(font: FontId) -> &'static str {
    match font {
        FontId::Regular => "F1",
        FontId::Bold => "F2",
        FontId::Oblique => "F3",
    }
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Escape a string for a PDF literal, transcoding to WinAnsi bytes.
/// The fonts are declared with /WinAnsiEncoding, so non-ASCII
/// characters become octal escapes of their WinAnsi code point;
/// unmappable characters render as "?".
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            ' '..='~' => out.push(c),
            _ => match winansi_byte(c) {
                Some(byte) => out.push_str(&format!("\\{:03o}", byte)),
                None => out.push('?'),
            },
        }
    }
    out
}

/// WinAnsi (CP1252) code point for a character outside ASCII.
fn winansi_byte(c: char) -> Option<u8> {
    match c {
        '\u{20ac}' => Some(0x80),
        '\u{201a}' => Some(0x82),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201c}' => Some(0x93),
        '\u{201d}' => Some(0x94),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{2122}' => Some(0x99),
        // Latin-1 supplement maps straight through.
        '\u{a0}'..='\u{ff}' => Some(c as u32 as u8),
        _ => None,
    }
}

/// Format a coordinate for content streams: no trailing zeros, no
/// scientific notation.
pub(crate) fn fmt_coord(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_chars() {
        assert_eq!(escape_text("hello"), "hello");
        assert_eq!(escape_text("a(b)c"), "a\\(b\\)c");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn escape_transcodes_to_winansi() {
        assert_eq!(escape_text("\u{20ac}100.00"), "\\200100.00");
        assert_eq!(escape_text("\u{a3}9.50"), "\\2439.50");
        assert_eq!(escape_text("caf\u{e9}"), "caf\\351");
        assert_eq!(escape_text("\u{2713} done"), "? done");
    }

    #[test]
    fn fmt_coord_values() {
        assert_eq!(fmt_coord(612.0), "612");
        assert_eq!(fmt_coord(0.0), "0");
        assert_eq!(fmt_coord(12.5), "12.5");
        assert_eq!(fmt_coord(0.9608), "0.9608");
    }
}
