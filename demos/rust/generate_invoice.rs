/// Invoice example — a multi-item invoice exported to PDF.
///
/// Demonstrates the export path: a document plus line items rendered
/// through [`Renderer::export_pdf_to_file`], paginating automatically
/// when the item grid outgrows the page.
///
/// Run with:
///   cargo run --example generate_invoice -p doc-demos
///
/// Opens output at: demos/output/invoice.pdf
use chrono::{NaiveDate, Utc};
use doc_core::{Document, DocumentKind, LineItem, Renderer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn main() -> doc_core::Result<()> {
    tracing_subscriber::fmt::init();

    let document = Document {
        id: "INV-2024-0117".to_string(),
        kind: DocumentKind::Invoice,
        client_name: "Acme Expeditions Ltd.".to_string(),
        created_at: Utc::now(),
        due_date: Some(date(2024, 7, 15)),
        currency: "USD".to_string(),
        balance: None,
        payment_mode: None,
        payment_reference: None,
        received_by: None,
    };

    let items = vec![
        LineItem {
            id: "li-1".to_string(),
            category: "Safari Van".to_string(),
            from_date: date(2024, 6, 10),
            to_date: date(2024, 6, 14),
            quantity: 3,
            unit_price: 100.0,
            note: Some("Airport pickup included".to_string()),
        },
        LineItem {
            id: "li-2".to_string(),
            category: "Land Cruiser".to_string(),
            from_date: date(2024, 6, 10),
            to_date: date(2024, 6, 14),
            quantity: 1,
            unit_price: 240.0,
            note: None,
        },
        LineItem {
            id: "li-3".to_string(),
            category: "Park Fees".to_string(),
            from_date: date(2024, 6, 11),
            to_date: date(2024, 6, 13),
            quantity: 4,
            unit_price: 35.0,
            note: Some("Maasai Mara National Reserve".to_string()),
        },
    ];

    std::fs::create_dir_all("demos/output")?;
    Renderer::new().export_pdf_to_file(&document, &items, "demos/output/invoice.pdf")?;
    println!("Wrote demos/output/invoice.pdf");
    Ok(())
}
