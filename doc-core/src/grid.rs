//! The tabular item grid with auto-pagination.
//!
//! Rows are placed top-to-bottom from the starting cursor. When the
//! next row would cross the bottom margin, the grid starts a new page,
//! re-emits the header row, and continues. The footer row is emitted
//! exactly once, immediately after the last body row. Pagination is an
//! explicit state machine so it can be exercised against any surface,
//! including the in-memory preview.

use crate::layout::PanelAccent;
use crate::metrics;
use crate::surface::{Color, FontId, Rect, Surface, TextAlign, TextStyle};

/// A column definition: header label, fixed width, and the horizontal
/// alignment applied to both the label and body cells.
#[derive(Debug, Clone)]
pub struct Column {
    pub label: String,
    pub width: f64,
    pub align: TextAlign,
}

impl Column {
    pub fn new(label: impl Into<String>, width: f64, align: TextAlign) -> Self {
        Column { label: label.into(), width, align }
    }
}

/// Style for one line of cell text.
#[derive(Debug, Clone, Copy)]
pub struct CellStyle {
    pub font: FontId,
    pub size: f64,
    pub color: Color,
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle { font: FontId::Regular, size: 10.0, color: Color::black() }
    }
}

/// One cell: one or more styled text lines. Multi-line cells grow the
/// row; height is always derived from the tallest cell.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub lines: Vec<(String, CellStyle)>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Cell::styled(text, CellStyle::default())
    }

    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Cell { lines: vec![(text.into(), style)] }
    }

    pub fn multi(lines: Vec<(String, CellStyle)>) -> Self {
        Cell { lines }
    }
}

/// An ordered row of body cells.
#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }
}

/// The totals row: a label spanning every column except the last, and
/// a value in the last column.
#[derive(Debug, Clone)]
pub struct FooterRow {
    pub label: String,
    pub value: String,
}

/// Pagination states. One render pass walks
/// accumulating -> page-full -> accumulating ... until the body is
/// exhausted, then emits the footer (if any) and finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridState {
    AccumulatingRows,
    PageFull,
    EmittingFooter,
    Done,
}

/// Grid layout configuration. Holds columns and visual style, not row
/// data; the caller passes rows to [`Grid::render`].
#[derive(Debug, Clone)]
pub struct Grid {
    pub columns: Vec<Column>,
    pub border_color: Color,
    pub border_width: f64,
    pub padding: f64,
    /// Vertical margins bounding row placement on every page.
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl Grid {
    pub fn new(columns: Vec<Column>) -> Self {
        Grid {
            columns,
            border_color: Color::gray(0.8),
            border_width: 0.5,
            padding: 8.0,
            top_margin: 54.0,
            bottom_margin: 54.0,
        }
    }

    pub fn total_width(&self) -> f64 {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Render header, body rows, and optional footer starting at
    /// (`x`, `start_y`), paginating as needed. Returns the y offset
    /// immediately below the last rendered row on the final page.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        x: f64,
        start_y: f64,
        body: &[Row],
        footer: Option<&FooterRow>,
    ) -> f64 {
        let mut y = start_y;
        y += self.draw_header(surface, x, y);

        let mut state = GridState::AccumulatingRows;
        let mut next_row = 0usize;
        // True until a body row lands on the current page; a row taller
        // than a whole fresh page is placed anyway rather than looping.
        let mut fresh_page = true;

        loop {
            match state {
                GridState::AccumulatingRows => {
                    if next_row == body.len() {
                        state = GridState::EmittingFooter;
                        continue;
                    }
                    let row = &body[next_row];
                    let height = self.row_height(row);
                    if y + height > self.limit(surface) && !fresh_page {
                        state = GridState::PageFull;
                        continue;
                    }
                    self.draw_row(surface, x, y, row);
                    y += height;
                    next_row += 1;
                    fresh_page = false;
                }
                GridState::PageFull => {
                    surface.start_page();
                    y = self.top_margin;
                    y += self.draw_header(surface, x, y);
                    fresh_page = true;
                    state = GridState::AccumulatingRows;
                }
                GridState::EmittingFooter => {
                    if let Some(footer) = footer {
                        if y + self.footer_height() > self.limit(surface) && !fresh_page {
                            surface.start_page();
                            y = self.top_margin;
                            y += self.draw_header(surface, x, y);
                        }
                        self.draw_footer(surface, x, y, footer);
                        y += self.footer_height();
                    }
                    state = GridState::Done;
                }
                GridState::Done => break,
            }
        }
        y
    }

    /// Lowest y a row may extend to on the current page. Infinite for
    /// continuous surfaces, which disables pagination entirely.
    fn limit(&self, surface: &dyn Surface) -> f64 {
        surface.page_height() - self.bottom_margin
    }

    fn header_style(&self) -> CellStyle {
        CellStyle { font: FontId::Bold, size: 9.0, color: Color::black() }
    }

    fn header_height(&self) -> f64 {
        let style = self.header_style();
        metrics::line_height(&TextStyle { font: style.font, size: style.size }) + 2.0 * self.padding
    }

    fn footer_height(&self) -> f64 {
        self.header_height()
    }

    fn row_height(&self, row: &Row) -> f64 {
        let tallest = row
            .cells
            .iter()
            .map(|cell| {
                cell.lines
                    .iter()
                    .map(|(_, style)| {
                        metrics::line_height(&TextStyle { font: style.font, size: style.size })
                    })
                    .sum::<f64>()
            })
            .fold(0.0_f64, f64::max);
        // An all-empty row still takes one default line.
        let default_line =
            metrics::line_height(&TextStyle { font: FontId::Regular, size: 10.0 });
        tallest.max(default_line) + 2.0 * self.padding
    }

    /// Draw the header row at `y`; returns its height.
    fn draw_header(&self, surface: &mut dyn Surface, x: f64, y: f64) -> f64 {
        let height = self.header_height();
        let rect = Rect { x, y, width: self.total_width(), height };
        surface.fill_rect(rect, PanelAccent::Structural.fill());

        let style = self.header_style();
        let text_style = TextStyle { font: style.font, size: style.size };
        let baseline = y + self.padding + style.size;
        let mut col_x = x;
        for column in &self.columns {
            let anchor = self.text_anchor(col_x, column.width, column.align);
            surface.text(anchor, baseline, &column.label, &text_style, style.color, column.align);
            col_x += column.width;
        }
        self.draw_borders(surface, x, y, height);
        height
    }

    fn draw_row(&self, surface: &mut dyn Surface, x: f64, y: f64, row: &Row) {
        let height = self.row_height(row);
        let mut col_x = x;
        for (idx, column) in self.columns.iter().enumerate() {
            if let Some(cell) = row.cells.get(idx) {
                let mut baseline = y + self.padding;
                for (text, style) in &cell.lines {
                    baseline += style.size;
                    let anchor = self.text_anchor(col_x, column.width, column.align);
                    let text_style = TextStyle { font: style.font, size: style.size };
                    surface.text(anchor, baseline, text, &text_style, style.color, column.align);
                    baseline += metrics::line_height(&text_style) - style.size;
                }
            }
            col_x += column.width;
        }
        self.draw_borders(surface, x, y, height);
    }

    /// The footer label is right-aligned across all columns but the
    /// last; the value sits in the last column. Emitted exactly once.
    fn draw_footer(&self, surface: &mut dyn Surface, x: f64, y: f64, footer: &FooterRow) {
        let height = self.footer_height();
        let total = self.total_width();
        let rect = Rect { x, y, width: total, height };
        surface.fill_rect(rect, PanelAccent::Structural.fill());

        let style = TextStyle { font: FontId::Bold, size: 9.0 };
        let baseline = y + self.padding + style.size;
        let last_width = self.columns.last().map(|c| c.width).unwrap_or(0.0);
        let span_end = x + total - last_width;
        surface.text(
            span_end - self.padding,
            baseline,
            &footer.label,
            &style,
            Color::black(),
            TextAlign::Right,
        );
        surface.text(
            x + total - self.padding,
            baseline,
            &footer.value,
            &style,
            Color::black(),
            TextAlign::Right,
        );

        if self.border_width > 0.0 {
            surface.stroke_rect(rect, self.border_color, self.border_width);
        }
    }

    /// Outer rectangle plus vertical dividers for one row band.
    fn draw_borders(&self, surface: &mut dyn Surface, x: f64, y: f64, height: f64) {
        if self.border_width <= 0.0 {
            return;
        }
        let rect = Rect { x, y, width: self.total_width(), height };
        surface.stroke_rect(rect, self.border_color, self.border_width);
        let mut col_x = x;
        for column in &self.columns[..self.columns.len().saturating_sub(1)] {
            col_x += column.width;
            surface.line(col_x, y, col_x, y + height, self.border_color, self.border_width);
        }
    }

    fn text_anchor(&self, col_x: f64, width: f64, align: TextAlign) -> f64 {
        match align {
            TextAlign::Left => col_x + self.padding,
            TextAlign::Center => col_x + width / 2.0,
            TextAlign::Right => col_x + width - self.padding,
        }
    }
}
