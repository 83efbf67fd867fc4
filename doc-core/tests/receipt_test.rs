use chrono::{NaiveDate, TimeZone, Utc};
use doc_core::scene::Scene;
use doc_core::{compose, Document, DocumentKind, LineItem, PAGE_WIDTH};

fn receipt() -> Document {
    Document {
        id: "RCT-007".to_string(),
        kind: DocumentKind::Receipt,
        client_name: "Jane Mwangi".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        due_date: None,
        currency: "USD".to_string(),
        balance: Some(500.0),
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
        quantity: 2,
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
fn title_is_centered_at_the_page_midline() {
    let scene = render(&receipt(), &[safari_van_item()]);

    let (x, _) = scene.text_position("RECEIPT").unwrap();
    assert_eq!(x, PAGE_WIDTH / 2.0);
}

#[test]
fn left_column_fields_carry_document_values() {
    let scene = render(&receipt(), &[safari_van_item()]);

    assert!(scene.contains_text("Date"));
    assert!(scene.contains_text("Jan 15, 2024"));
    assert!(scene.contains_text("Received From"));
    assert!(scene.contains_text("Jane Mwangi"));
    assert!(scene.contains_text("Amount"));
    assert!(scene.contains_text("For"));
    assert!(scene.contains_text("Safari Van (Jan 1, 2024 - Jan 5, 2024)"));
}

#[test]
fn balance_block_mirrors_the_stored_balance() {
    // balance 500, items total 200: the closing line repeats the stored
    // balance rather than subtracting the payment.
    let scene = render(&receipt(), &[safari_van_item()]);

    assert!(scene.contains_text("Current Balance:"));
    assert!(scene.contains_text("Payment Amount:"));
    assert!(scene.contains_text("Balance Due:"));
    assert_eq!(scene.count_text("$500.00"), 2, "balance shown for both balance lines");
    assert_eq!(scene.count_text("$200.00"), 2, "amount field plus payment line");
}

#[test]
fn missing_balance_renders_as_zero() {
    let mut document = receipt();
    document.balance = None;
    let scene = render(&document, &[safari_van_item()]);

    assert_eq!(scene.count_text("$0.00"), 2);
}

#[test]
fn mixed_case_mpesa_selects_only_mobile_money() {
    let mut document = receipt();
    document.payment_mode = Some("M-Pesa".to_string());
    document.payment_reference = Some("XYZ123".to_string());
    let scene = render(&document, &[safari_van_item()]);

    assert_eq!(scene.count_text("X"), 1, "exactly one checked box");
    assert_eq!(scene.count_text("(XYZ123)"), 1);

    // The reference sits on the Mobile-money line, not any other.
    let (_, mobile_y) = scene.text_position("Mobile-money").unwrap();
    let (_, reference_y) = scene.text_position("(XYZ123)").unwrap();
    assert_eq!(mobile_y, reference_y);
    let (_, mark_y) = scene.text_position("X").unwrap();
    assert!((mark_y - mobile_y).abs() < 1.0);
}

#[test]
fn checklist_renders_all_methods_unchecked_without_a_mode() {
    let scene = render(&receipt(), &[safari_van_item()]);

    for label in ["Cash", "Cheque", "Mobile-money", "Bank"] {
        assert!(scene.contains_text(label), "missing {}", label);
    }
    assert_eq!(scene.count_text("X"), 0);
}

#[test]
fn reference_without_matching_mode_never_renders() {
    let mut document = receipt();
    document.payment_reference = Some("XYZ123".to_string());
    let scene = render(&document, &[safari_van_item()]);

    assert_eq!(scene.count_text("(XYZ123)"), 0);
}

#[test]
fn received_by_label_renders_even_without_a_value() {
    let scene = render(&receipt(), &[safari_van_item()]);
    assert!(scene.contains_text("Received By"));

    let mut document = receipt();
    document.received_by = Some("Peter K.".to_string());
    let scene = render(&document, &[safari_van_item()]);
    assert!(scene.contains_text("Peter K."));
}

#[test]
fn for_block_lists_every_item() {
    let mut second = safari_van_item();
    second.id = "item-2".to_string();
    second.category = "Game Drive".to_string();
    let scene = render(&receipt(), &[safari_van_item(), second]);

    assert!(scene.contains_text("Safari Van (Jan 1, 2024 - Jan 5, 2024)"));
    assert!(scene.contains_text("Game Drive (Jan 1, 2024 - Jan 5, 2024)"));
}

#[test]
fn columns_do_not_overlap() {
    let mut document = receipt();
    document.payment_mode = Some("cash".to_string());
    let scene = render(&document, &[safari_van_item()]);

    let (left_x, _) = scene.text_position("Received From").unwrap();
    let (right_x, _) = scene.text_position("Paid By").unwrap();
    let column_width = (PAGE_WIDTH - 2.0 * 54.0 - 28.0) / 2.0;
    assert!(left_x + column_width <= right_x);
}

#[test]
fn disclaimer_renders_below_both_columns_on_continuous_surfaces() {
    let scene = render(&receipt(), &[safari_van_item()]);

    let (_, disclaimer_y) = scene.text_position("This is a computer-generated receipt.").unwrap();
    let (_, received_y) = scene.text_position("Received By").unwrap();
    let (_, due_y) = scene.text_position("Balance Due:").unwrap();
    assert!(disclaimer_y > received_y);
    assert!(disclaimer_y > due_y);
}
