//! Text measurement for the built-in Helvetica family.
//!
//! Widths are the Adobe AFM advance widths for ASCII 32..=126 in
//! 1/1000 em units. Helvetica-Oblique shares the regular widths.

use crate::surface::{FontId, TextStyle};

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // 32 (space) .. 47 (/)
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 48 (0) .. 63 (?)
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 64 (@) .. 79 (O)
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 80 (P) .. 95 (_)
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 96 (`) .. 111 (o)
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 112 (p) .. 126 (~)
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // 32 (space) .. 47 (/)
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 48 (0) .. 63 (?)
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    // 64 (@) .. 79 (O)
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    // 80 (P) .. 95 (_)
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    // 96 (`) .. 111 (o)
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    // 112 (p) .. 126 (~)
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance width of a character outside the mapped range.
const DEFAULT_WIDTH: u16 = 278;

/// Width of one character in 1/1000 em units.
pub fn char_width(font: FontId, ch: char) -> u16 {
    let code = ch as u32;
    if !(32..=126).contains(&code) {
        return DEFAULT_WIDTH;
    }
    let index = (code - 32) as usize;
    match font {
        FontId::Regular | FontId::Oblique => HELVETICA_WIDTHS[index],
        FontId::Bold => HELVETICA_BOLD_WIDTHS[index],
    }
}

/// Width of a text string in points at the style's font size.
pub fn text_width(text: &str, style: &TextStyle) -> f64 {
    let total: u32 = text.chars().map(|ch| char_width(style.font, ch) as u32).sum();
    total as f64 * style.size / 1000.0
}

/// Line height for a style (1.2x the font size).
pub fn line_height(style: &TextStyle) -> f64 {
    style.size * 1.2
}
