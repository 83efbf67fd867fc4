/// Receipt example — a payment receipt with a checked payment method
/// and the balance block.
///
/// Run with:
///   cargo run --example generate_receipt -p doc-demos
///
/// Opens output at: demos/output/receipt.pdf
use chrono::{NaiveDate, Utc};
use doc_core::{Document, DocumentKind, LineItem, Renderer};

fn main() -> doc_core::Result<()> {
    tracing_subscriber::fmt::init();

    let document = Document {
        id: "RCT-2024-0058".to_string(),
        kind: DocumentKind::Receipt,
        client_name: "Jane Mwangi".to_string(),
        created_at: Utc::now(),
        due_date: None,
        currency: "KES".to_string(),
        balance: Some(120_500.0),
        payment_mode: Some("M-Pesa".to_string()),
        payment_reference: Some("SFJ8K2QPLM".to_string()),
        received_by: Some("Peter K.".to_string()),
    };

    let items = vec![LineItem {
        id: "li-1".to_string(),
        category: "Safari Van".to_string(),
        from_date: NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date"),
        to_date: NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid date"),
        quantity: 2,
        unit_price: 24_000.0,
        note: None,
    }];

    std::fs::create_dir_all("demos/output")?;
    Renderer::new().export_pdf_to_file(&document, &items, "demos/output/receipt.pdf")?;
    println!("Wrote demos/output/receipt.pdf");
    Ok(())
}
