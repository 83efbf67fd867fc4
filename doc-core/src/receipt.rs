//! Receipt composer: centered title with a logo watermark, a left
//! column of underlined fields, and an independently positioned right
//! column holding the payment checklist and balance block.

use crate::assets::ImageData;
use crate::company;
use crate::format::{format_currency, format_date, format_datetime};
use crate::layout::{self, LINE_PITCH};
use crate::metrics;
use crate::model::{grand_total, Document, LineItem};
use crate::surface::{Color, Rect, Surface, TextAlign, TextStyle};

const MARGIN: f64 = 54.0;
const GUTTER: f64 = 28.0;
const WATERMARK_SIZE: f64 = 180.0;
const WATERMARK_OPACITY: f64 = 0.15;
/// The right column starts at its own vertical origin, not chained to
/// the left column's cursor.
const RIGHT_COLUMN_TOP: f64 = 150.0;
const LEFT_COLUMN_TOP: f64 = 140.0;

/// The fixed payment-method checklist. Each entry carries the lowercase
/// spellings it accepts when matching `Document::payment_mode`
/// case-insensitively ("m-pesa" and "mpesa" select Mobile-money).
const PAYMENT_METHODS: [(&str, &[&str]); 4] = [
    ("Cash", &["cash"]),
    ("Cheque", &["cheque", "check"]),
    ("Mobile-money", &["mobile-money", "m-pesa", "mpesa"]),
    ("Bank", &["bank"]),
];

fn muted() -> Color {
    Color::gray(0.39)
}

/// Compose a complete receipt onto `surface`.
pub fn compose(
    document: &Document,
    items: &[LineItem],
    logo: Option<&ImageData>,
    surface: &mut dyn Surface,
) {
    let page_width = surface.page_width();
    let width = page_width - 2.0 * MARGIN;
    let column_width = (width - GUTTER) / 2.0;
    let (left_x, right_x) = layout::split_columns(MARGIN, width, GUTTER);

    draw_title(surface, logo, page_width);
    let left_bottom = draw_left_column(surface, document, items, left_x, column_width);
    let right_bottom = draw_right_column(surface, document, items, right_x, column_width);
    draw_disclaimer(surface, page_width, left_bottom.max(right_bottom));
}

fn draw_title(surface: &mut dyn Surface, logo: Option<&ImageData>, page_width: f64) {
    surface.text(
        page_width / 2.0,
        64.0,
        "RECEIPT",
        &TextStyle::bold(24.0),
        Color::black(),
        TextAlign::Center,
    );

    if let Some(logo) = logo {
        let rect = Rect {
            x: (page_width - WATERMARK_SIZE) / 2.0,
            y: 180.0,
            width: WATERMARK_SIZE,
            height: WATERMARK_SIZE,
        };
        surface.image(logo, rect, WATERMARK_OPACITY);
    }
}

/// Date, Received From, Amount, For (one line per item), Received By.
/// Returns the y offset below the last block.
fn draw_left_column(
    surface: &mut dyn Surface,
    document: &Document,
    items: &[LineItem],
    x: f64,
    width: f64,
) -> f64 {
    let mut y = LEFT_COLUMN_TOP;

    y = layout::underlined_field(
        surface,
        x,
        y,
        width,
        "Date",
        Some(&format_datetime(document.created_at)),
    );
    y = layout::underlined_field(surface, x, y, width, "Received From", Some(&document.client_name));
    y = layout::underlined_field(
        surface,
        x,
        y,
        width,
        "Amount",
        Some(&format_currency(grand_total(items), &document.currency)),
    );

    // "For" block: the label and underline, then one line per item.
    let block_top = y;
    y = layout::underlined_field(surface, x, block_top, width, "For", None);
    let mut item_y = block_top + 19.0;
    for item in items {
        let line = format!(
            "{} ({} - {})",
            item.category,
            format_date(item.from_date),
            format_date(item.to_date)
        );
        surface.text(x, item_y, &line, &TextStyle::regular(10.0), Color::black(), TextAlign::Left);
        item_y += LINE_PITCH;
    }
    y = y.max(item_y + 13.0);

    // Label and underline always render; only the value line depends on
    // the field being present.
    layout::underlined_field(surface, x, y, width, "Received By", document.received_by.as_deref())
}

/// Payment-method checklist and the balance block, both right-aligned
/// within the column. Returns the y offset below the last line.
fn draw_right_column(
    surface: &mut dyn Surface,
    document: &Document,
    items: &[LineItem],
    x: f64,
    width: f64,
) -> f64 {
    let mut y = RIGHT_COLUMN_TOP;
    surface.text(x, y, "Paid By", &TextStyle::bold(12.0), Color::black(), TextAlign::Left);
    y += 22.0;

    let selected_mode = document.payment_mode.as_deref().map(str::to_lowercase);
    let label_style = TextStyle::regular(10.0);
    for (label, aliases) in PAYMENT_METHODS {
        let selected = selected_mode.as_deref().is_some_and(|mode| {
            mode == label.to_lowercase() || aliases.contains(&mode)
        });

        surface.stroke_rect(
            Rect { x, y: y - 8.0, width: 9.0, height: 9.0 },
            Color::black(),
            0.75,
        );
        if selected {
            surface.text(x + 4.5, y - 0.5, "X", &TextStyle::bold(8.0), Color::black(), TextAlign::Center);
        }
        surface.text(x + 16.0, y, label, &label_style, Color::black(), TextAlign::Left);
        if selected {
            if let Some(reference) = &document.payment_reference {
                let offset = metrics::text_width(label, &label_style) + 6.0;
                surface.text(
                    x + 16.0 + offset,
                    y,
                    &format!("({})", reference),
                    &label_style,
                    Color::black(),
                    TextAlign::Left,
                );
            }
        }
        y += 22.0;
    }

    y += 8.0;
    surface.line(x, y, x + width, y, Color::gray(0.78), 0.5);
    y += 18.0;

    // Balance Due mirrors the pre-payment balance field on purpose; the
    // issued documents read this way (see DESIGN.md).
    let total = format_currency(grand_total(items), &document.currency);
    let balance = format_currency(document.balance.unwrap_or(0.0), &document.currency);
    let rows: [(&str, &str); 3] = [
        ("Current Balance:", &balance),
        ("Payment Amount:", &total),
        ("Balance Due:", &balance),
    ];
    for (label, value) in rows {
        surface.text(x, y, label, &TextStyle::regular(10.0), Color::black(), TextAlign::Left);
        surface.text(x + width, y, value, &TextStyle::regular(10.0), Color::black(), TextAlign::Right);
        y += 18.0;
    }
    y
}

fn draw_disclaimer(surface: &mut dyn Surface, page_width: f64, content_bottom: f64) {
    // Pin to the page bottom when the surface is paginated; continuous
    // previews place it below the columns instead.
    let y = if surface.page_height().is_finite() {
        surface.page_height() - 40.0
    } else {
        content_bottom + 40.0
    };
    surface.text(
        page_width / 2.0,
        y,
        company::RECEIPT_DISCLAIMER,
        &TextStyle::regular(10.0),
        muted(),
        TextAlign::Center,
    );
}
