/// Preview example — the same invoice rendered as the serializable
/// layout tree the interactive preview consumes, printed as JSON.
///
/// Run with:
///   cargo run --example preview_json -p doc-demos
use chrono::{NaiveDate, Utc};
use doc_core::{Document, DocumentKind, LineItem, Renderer};

fn main() {
    tracing_subscriber::fmt::init();

    let document = Document {
        id: "INV-2024-0117".to_string(),
        kind: DocumentKind::Invoice,
        client_name: "Acme Expeditions Ltd.".to_string(),
        created_at: Utc::now(),
        due_date: None,
        currency: "USD".to_string(),
        balance: None,
        payment_mode: None,
        payment_reference: None,
        received_by: None,
    };

    let items = vec![LineItem {
        id: "li-1".to_string(),
        category: "Safari Van".to_string(),
        from_date: NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date"),
        to_date: NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid date"),
        quantity: 3,
        unit_price: 100.0,
        note: None,
    }];

    let scene = Renderer::new().preview(&document, &items);
    match serde_json::to_string_pretty(&scene) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("serialization failed: {}", err),
    }
}
