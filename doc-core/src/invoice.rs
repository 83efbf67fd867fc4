//! Invoice composer: header band, bill-to panel, items grid, payment
//! details, and footer, placed strictly sequentially.

use crate::assets::ImageData;
use crate::company;
use crate::format::{format_currency, format_date, format_datetime};
use crate::grid::{Cell, CellStyle, Column, FooterRow, Grid, Row};
use crate::layout::{self, Cursor, PanelAccent, LINE_PITCH, SECTION_GAP};
use crate::model::{grand_total, Document, LineItem};
use crate::surface::{Color, FontId, Rect, Surface, TextAlign, TextStyle};

const MARGIN: f64 = 54.0;
const LOGO_SIZE: f64 = 68.0;

fn green() -> Color {
    // #00A651
    Color::rgb(0.0, 0.651, 0.318)
}

fn orange() -> Color {
    // #FF6B00
    Color::rgb(1.0, 0.42, 0.0)
}

fn body_gray() -> Color {
    Color::gray(0.39)
}

/// Compose a complete invoice onto `surface`. The logo is optional;
/// when the asset fetch failed upstream the header simply renders
/// without it.
pub fn compose(
    document: &Document,
    items: &[LineItem],
    logo: Option<&ImageData>,
    surface: &mut dyn Surface,
) {
    let width = surface.page_width() - 2.0 * MARGIN;
    let mut cursor = Cursor::new(MARGIN);

    draw_header_band(surface, logo, &mut cursor);
    draw_bill_to(surface, document, width, &mut cursor);
    draw_items_grid(surface, document, items, width, &mut cursor);
    draw_payment_details(surface, width, &mut cursor);
    draw_footer(surface, width, &mut cursor);
}

/// Company contact text left and right, logo centered between them.
fn draw_header_band(surface: &mut dyn Surface, logo: Option<&ImageData>, cursor: &mut Cursor) {
    let style = TextStyle::regular(10.0);
    let top = cursor.position() + 4.0;
    let right_edge = surface.page_width() - MARGIN;

    for (idx, line) in company::ADDRESS_LINES.iter().enumerate() {
        surface.text(MARGIN, top + idx as f64 * 16.0, line, &style, body_gray(), TextAlign::Left);
    }
    for (idx, line) in company::CONTACT_LINES.iter().enumerate() {
        surface.text(right_edge, top + idx as f64 * 16.0, line, &style, body_gray(), TextAlign::Right);
    }

    if let Some(logo) = logo {
        let rect = Rect {
            x: (surface.page_width() - LOGO_SIZE) / 2.0,
            y: cursor.position() - 18.0,
            width: LOGO_SIZE,
            height: LOGO_SIZE,
        };
        surface.image(logo, rect, 1.0);
    }

    cursor.advance(70.0);
}

/// Informational panel with client name, invoice date, and the due
/// date. The due date is the only content-dependent omission in the
/// whole template: absent means no line at all.
fn draw_bill_to(surface: &mut dyn Surface, document: &Document, width: f64, cursor: &mut Cursor) {
    let panel = layout::draw_panel(surface, MARGIN, width, 100.0, PanelAccent::Informational, cursor);
    let x = panel.x + 10.0;

    surface.text(x, panel.y + 24.0, "Bill To:", &TextStyle::bold(12.0), green(), TextAlign::Left);
    surface.text(
        x,
        panel.y + 44.0,
        &document.client_name,
        &TextStyle::regular(11.0),
        Color::black(),
        TextAlign::Left,
    );

    let meta = TextStyle::regular(10.0);
    let date_line = format!("Invoice Date: {}", format_datetime(document.created_at));
    surface.text(x, panel.y + 64.0, &date_line, &meta, body_gray(), TextAlign::Left);
    if let Some(due) = document.due_date {
        let due_line = format!("Due Date: {}", format_date(due));
        surface.text(x, panel.y + 78.0, &due_line, &meta, body_gray(), TextAlign::Left);
    }
}

/// The auto-paginating items grid with the totals footer.
fn draw_items_grid(
    surface: &mut dyn Surface,
    document: &Document,
    items: &[LineItem],
    width: f64,
    cursor: &mut Cursor,
) {
    let grid = Grid::new(vec![
        Column::new("#", 30.0, TextAlign::Left),
        Column::new("Service Details", width - 278.0, TextAlign::Left),
        Column::new("Qty", 56.0, TextAlign::Center),
        Column::new("Rate", 90.0, TextAlign::Right),
        Column::new("Amount", 102.0, TextAlign::Right),
    ]);

    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| item_row(idx, item, &document.currency))
        .collect();

    let footer = FooterRow {
        label: "Total:".to_string(),
        value: format_currency(grand_total(items), &document.currency),
    };

    let bottom = grid.render(surface, MARGIN, cursor.position(), &rows, Some(&footer));
    cursor.jump_to(bottom + SECTION_GAP);
}

/// Body rows are numbered 1..N by display order, not by item id.
fn item_row(idx: usize, item: &LineItem, currency: &str) -> Row {
    let category_style = CellStyle { font: FontId::Bold, size: 10.0, color: green() };
    let note_style = CellStyle { font: FontId::Oblique, size: 9.0, color: body_gray() };
    let period_style = CellStyle { font: FontId::Regular, size: 7.5, color: body_gray() };

    let mut detail_lines = vec![(item.category.clone(), category_style)];
    if let Some(note) = &item.note {
        detail_lines.push((note.clone(), note_style));
    }
    detail_lines.push((
        format!("{} - {}", format_date(item.from_date), format_date(item.to_date)),
        period_style,
    ));

    Row::new(vec![
        Cell::new((idx + 1).to_string()),
        Cell::multi(detail_lines),
        Cell::new(item.quantity.to_string()),
        Cell::new(format_currency(item.unit_price, currency)),
        Cell::new(format_currency(item.extended_amount(), currency)),
    ])
}

/// Static bank-transfer and mobile-money instructions, side by side.
fn draw_payment_details(surface: &mut dyn Surface, width: f64, cursor: &mut Cursor) {
    let panel = layout::draw_panel(surface, MARGIN, width, 136.0, PanelAccent::Neutral, cursor);
    let inset = 10.0;

    surface.text(
        panel.x + inset,
        panel.y + 24.0,
        "Payment Details",
        &TextStyle::bold(12.0),
        green(),
        TextAlign::Left,
    );

    let (left, right) = layout::split_columns(panel.x + inset, panel.width - 2.0 * inset, 20.0);
    let block_top = panel.y + 24.0 + LINE_PITCH + 10.0;
    let sub_title = TextStyle::bold(11.0);
    let body = TextStyle::regular(9.0);

    layout::titled_block(
        surface,
        left,
        block_top,
        company::BANK_TRANSFER_TITLE,
        &sub_title,
        orange(),
        &company::BANK_TRANSFER_LINES,
        &body,
        body_gray(),
    );
    layout::titled_block(
        surface,
        right,
        block_top,
        company::MOBILE_MONEY_TITLE,
        &sub_title,
        orange(),
        &company::MOBILE_MONEY_LINES,
        &body,
        body_gray(),
    );
}

fn draw_footer(surface: &mut dyn Surface, width: f64, cursor: &mut Cursor) {
    let panel = layout::draw_panel(surface, MARGIN, width, 64.0, PanelAccent::Neutral, cursor);
    let center = panel.x + panel.width / 2.0;

    surface.text(
        center,
        panel.y + 28.0,
        company::THANK_YOU,
        &TextStyle::bold(14.0),
        Color::black(),
        TextAlign::Center,
    );
    surface.text(
        center,
        panel.y + 48.0,
        company::FOOTER_CONTACT,
        &TextStyle::regular(9.0),
        body_gray(),
        TextAlign::Center,
    );
}
