//! Enriched transaction rows and the per-upload table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a transaction went to, decided by substring matching on the
/// account name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Account name contains a known commercial entity substring.
    Merchant,
    /// Account name contains a known personal contact substring.
    Friend,
    /// Neither list matched.
    Stranger,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Merchant => "Merchant",
            Category::Friend => "Friend",
            Category::Stranger => "Stranger",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated upload row, augmented with its category and display
/// timestamp. Immutable once produced; lives for one uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTransaction {
    pub amount: f64,
    pub account_name: String,
    /// Raw timestamp as uploaded.
    pub timestamp: String,
    pub category: Category,
    /// Human form, e.g. "05 Mar 2024, 02:30 PM".
    pub display_timestamp: String,
    /// Columns outside the required set, passed through in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl EnrichedTransaction {
    /// One-line label used when picking a transaction out of a list.
    pub fn pick_label(&self, currency: &str) -> String {
        format!(
            "{}{}  →  {}  on  {}",
            currency, self.amount, self.account_name, self.display_timestamp
        )
    }
}

/// The enriched table for the current upload. Rows keep a dense
/// zero-based ordering; `dropped` counts rows the pipeline discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedTable {
    pub rows: Vec<EnrichedTransaction>,
    /// Rows discarded during coercion (bad amount, blank name or
    /// timestamp, timestamp that no parser accepted).
    pub dropped: usize,
}

impl EnrichedTable {
    pub fn new(rows: Vec<EnrichedTransaction>, dropped: usize) -> Self {
        EnrichedTable { rows, dropped }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_amount(&self) -> f64 {
        self.rows.iter().map(|r| r.amount).sum()
    }

    /// Rows of one category, in table order.
    pub fn rows_in(&self, category: Category) -> Vec<&EnrichedTransaction> {
        self.rows.iter().filter(|r| r.category == category).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(amount: f64, name: &str, category: Category) -> EnrichedTransaction {
        EnrichedTransaction {
            amount,
            account_name: name.to_string(),
            timestamp: "2024-01-01T10:00:00".to_string(),
            category,
            display_timestamp: "01 Jan 2024, 10:00 AM".to_string(),
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_pick_label() {
        let r = row(100.0, "Swiggy Order", Category::Merchant);
        assert_eq!(
            r.pick_label("₹"),
            "₹100  →  Swiggy Order  on  01 Jan 2024, 10:00 AM"
        );
    }

    #[test]
    fn test_rows_in_keeps_table_order() {
        let table = EnrichedTable::new(
            vec![
                row(10.0, "a", Category::Friend),
                row(20.0, "b", Category::Merchant),
                row(30.0, "c", Category::Friend),
            ],
            0,
        );
        let friends = table.rows_in(Category::Friend);
        assert_eq!(friends.len(), 2);
        assert_eq!(friends[0].amount, 10.0);
        assert_eq!(friends[1].amount, 30.0);
        assert!(table.rows_in(Category::Stranger).is_empty());
    }

    #[test]
    fn test_total_amount() {
        let table = EnrichedTable::new(
            vec![
                row(10.5, "a", Category::Friend),
                row(20.0, "b", Category::Merchant),
            ],
            1,
        );
        assert_eq!(table.total_amount(), 30.5);
    }

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Category::Merchant).unwrap(),
            "\"Merchant\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Stranger).unwrap(),
            "\"Stranger\""
        );
    }
}
