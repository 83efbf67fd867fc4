use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which of the two document templates a record renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Receipt,
}

/// A billing record header, supplied fully formed by the data layer.
///
/// The engine only reads it. Optional fields drive conditional section
/// inclusion: an absent value means the section (or its value line) is
/// omitted entirely, never rendered as a blank placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub kind: DocumentKind,
    pub client_name: String,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<NaiveDate>,
    /// ISO currency code; see [`crate::format::format_currency`] for the
    /// recognized set and the fallback for everything else.
    pub currency: String,
    pub balance: Option<f64>,
    pub payment_mode: Option<String>,
    pub payment_reference: Option<String>,
    pub received_by: Option<String>,
}

/// One billable entry within a document.
///
/// The date range is rendered as given; a reversed range is a data-entry
/// problem upstream and must not break a render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable across re-renders; used as an iteration key, not for display.
    pub id: String,
    /// Category label, e.g. a service or vehicle type.
    pub category: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub quantity: u32,
    /// Unit price in the document's currency.
    pub unit_price: f64,
    /// Optional free-text annotation shown under the category.
    pub note: Option<String>,
}

impl LineItem {
    /// Extended amount: quantity times unit price. Derived, never stored.
    pub fn extended_amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Sum of all extended amounts. Recomputed on every render so it is
/// always consistent with the item list; an empty list totals 0.
pub fn grand_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::extended_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, unit_price: f64) -> LineItem {
        LineItem {
            id: format!("item-{}-{}", quantity, unit_price),
            category: "Safari Van".to_string(),
            from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            quantity,
            unit_price,
            note: None,
        }
    }

    #[test]
    fn extended_amount_is_quantity_times_price() {
        assert_eq!(item(3, 100.0).extended_amount(), 300.0);
        assert_eq!(item(0, 250.0).extended_amount(), 0.0);
    }

    #[test]
    fn grand_total_sums_extended_amounts() {
        let items = vec![item(3, 100.0), item(2, 50.5), item(1, 0.0)];
        assert_eq!(grand_total(&items), 401.0);
    }

    #[test]
    fn grand_total_of_empty_list_is_zero() {
        assert_eq!(grand_total(&[]), 0.0);
    }

    #[test]
    fn document_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DocumentKind::Invoice).unwrap(),
            "\"invoice\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentKind::Receipt).unwrap(),
            "\"receipt\""
        );
    }
}
