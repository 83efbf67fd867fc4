use chrono::{NaiveDate, TimeZone, Utc};
use doc_core::scene::Scene;
use doc_core::{compose, Document, DocumentKind, LineItem, PAGE_WIDTH};

fn invoice(due_date: Option<NaiveDate>) -> Document {
    Document {
        id: "INV-001".to_string(),
        kind: DocumentKind::Invoice,
        client_name: "Jane Mwangi".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        due_date,
        currency: "USD".to_string(),
        balance: None,
        payment_mode: None,
        payment_reference: None,
        received_by: None,
    }
}

fn safari_van_item() -> LineItem {
    LineItem {
        id: "item-1".to_string(),
        category: "Safari Van".to_string(),
        from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        to_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        quantity: 3,
        unit_price: 100.0,
        note: None,
    }
}

fn render(document: &Document, items: &[LineItem]) -> Scene {
    let mut scene = Scene::continuous(PAGE_WIDTH);
    compose(document, items, None, &mut scene);
    scene
}

#[test]
fn single_item_row_renders_all_cells() {
    let scene = render(&invoice(None), &[safari_van_item()]);

    assert!(scene.contains_text("1"), "row number");
    assert!(scene.contains_text("Safari Van"));
    assert!(scene.contains_text("3"), "quantity");
    assert!(scene.contains_text("$100.00"), "rate");
    assert!(scene.contains_text("$300.00"), "extended amount");
}

#[test]
fn totals_footer_matches_grand_total() {
    let mut second = safari_van_item();
    second.id = "item-2".to_string();
    second.category = "Park Fees".to_string();
    second.quantity = 2;
    second.unit_price = 50.0;
    let scene = render(&invoice(None), &[safari_van_item(), second]);

    assert_eq!(scene.count_text("Total:"), 1);
    assert!(scene.contains_text("$400.00"));
}

#[test]
fn empty_item_list_still_renders_header_and_zero_total() {
    let scene = render(&invoice(None), &[]);

    assert!(scene.contains_text("Service Details"));
    assert_eq!(scene.count_text("Total:"), 1);
    assert!(scene.contains_text("$0.00"));
}

#[test]
fn due_date_line_is_omitted_when_absent() {
    let scene = render(&invoice(None), &[safari_van_item()]);

    assert!(scene.contains_text("Invoice Date: Jan 15, 2024"));
    assert!(
        !scene.texts().iter().any(|t| t.starts_with("Due Date:")),
        "no due-date line when the field is absent"
    );
}

#[test]
fn due_date_line_sits_directly_below_invoice_date() {
    let due = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
    let scene = render(&invoice(Some(due)), &[safari_van_item()]);

    let (date_x, date_y) = scene.text_position("Invoice Date: Jan 15, 2024").unwrap();
    let (due_x, due_y) = scene.text_position("Due Date: Feb 15, 2024").unwrap();
    assert_eq!(date_x, due_x);
    assert!(due_y > date_y);
}

#[test]
fn note_renders_under_the_category() {
    let mut item = safari_van_item();
    item.note = Some("Airport pickup included".to_string());
    let scene = render(&invoice(None), &[item]);

    let category = scene.text_index("Safari Van").unwrap();
    let note = scene.text_index("Airport pickup included").unwrap();
    assert_eq!(note, category + 1);
}

#[test]
fn item_period_uses_display_dates() {
    let scene = render(&invoice(None), &[safari_van_item()]);
    assert!(scene.contains_text("Jan 1, 2024 - Jan 5, 2024"));
}

#[test]
fn sections_appear_in_template_order() {
    let scene = render(&invoice(None), &[safari_van_item()]);

    let bill_to = scene.text_index("Bill To:").unwrap();
    let grid_header = scene.text_index("Service Details").unwrap();
    let payment = scene.text_index("Payment Details").unwrap();
    let thanks = scene.text_index("Thank You for Your Business!").unwrap();
    assert!(bill_to < grid_header);
    assert!(grid_header < payment);
    assert!(payment < thanks);
}

#[test]
fn header_band_carries_company_contacts() {
    let scene = render(&invoice(None), &[safari_van_item()]);

    assert!(scene.contains_text("Kefan Building, Woodavenue Road"));
    assert!(scene.contains_text("info@ladinatravelsafaris.com"));
}

#[test]
fn payment_details_render_both_blocks() {
    let scene = render(&invoice(None), &[safari_van_item()]);

    assert!(scene.contains_text("Bank Transfer"));
    assert!(scene.contains_text("M-PESA"));
    assert!(scene.contains_text("Bank Account: 1007205933"));
    assert!(scene.contains_text("MPESA Paybill: 880100"));
}

#[test]
fn rows_are_numbered_by_display_order() {
    let items: Vec<LineItem> = (0..3)
        .map(|i| {
            let mut item = safari_van_item();
            item.id = format!("zz-{}", 9 - i);
            item
        })
        .collect();
    let scene = render(&invoice(None), &items);

    let first = scene.text_index("1").unwrap();
    let second = scene.text_index("2").unwrap();
    assert!(first < second);
    assert!(scene.contains_text("3"));
}

#[test]
fn continuous_surface_keeps_long_invoices_on_one_page() {
    let items: Vec<LineItem> = (0..60)
        .map(|i| {
            let mut item = safari_van_item();
            item.id = format!("item-{}", i);
            item
        })
        .collect();
    let scene = render(&invoice(None), &items);

    assert_eq!(scene.page_count(), 1);
    assert_eq!(scene.count_text("Service Details"), 1);
}
