//! Spend aggregation by category.

use crate::{Category, EnrichedTable};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Total spend of one category across the upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total_amount: f64,
}

/// Group the table by category and sum amounts, largest spend first.
/// Ties break on category name so the ordering is deterministic.
/// An empty table yields an empty vec: nothing to display, not an error.
pub fn spend_by_category(table: &EnrichedTable) -> Vec<CategoryTotal> {
    let mut sums: HashMap<Category, f64> = HashMap::new();
    for row in &table.rows {
        *sums.entry(row.category).or_insert(0.0) += row.amount;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total_amount)| CategoryTotal {
            category,
            total_amount,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnrichedTransaction;

    fn row(amount: f64, category: Category) -> EnrichedTransaction {
        EnrichedTransaction {
            amount,
            account_name: "x".to_string(),
            timestamp: "2024-01-01T10:00:00".to_string(),
            category,
            display_timestamp: "01 Jan 2024, 10:00 AM".to_string(),
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_groups_and_sorts_descending() {
        let table = EnrichedTable::new(
            vec![
                row(100.0, Category::Merchant),
                row(50.0, Category::Friend),
                row(75.0, Category::Stranger),
            ],
            0,
        );
        let totals = spend_by_category(&table);
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: Category::Merchant,
                    total_amount: 100.0
                },
                CategoryTotal {
                    category: Category::Stranger,
                    total_amount: 75.0
                },
                CategoryTotal {
                    category: Category::Friend,
                    total_amount: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_sums_within_category() {
        let table = EnrichedTable::new(
            vec![
                row(10.0, Category::Merchant),
                row(15.5, Category::Merchant),
                row(2.0, Category::Friend),
            ],
            0,
        );
        let totals = spend_by_category(&table);
        assert_eq!(totals[0].category, Category::Merchant);
        assert_eq!(totals[0].total_amount, 25.5);
    }

    #[test]
    fn test_sum_invariant_matches_table_total() {
        let table = EnrichedTable::new(
            vec![
                row(12.25, Category::Merchant),
                row(0.75, Category::Friend),
                row(99.0, Category::Stranger),
                row(3.5, Category::Friend),
            ],
            2,
        );
        let total: f64 = spend_by_category(&table)
            .iter()
            .map(|t| t.total_amount)
            .sum();
        assert_eq!(total, table.total_amount());
    }

    #[test]
    fn test_tie_breaks_on_category_name() {
        let table = EnrichedTable::new(
            vec![row(40.0, Category::Stranger), row(40.0, Category::Friend)],
            0,
        );
        let totals = spend_by_category(&table);
        assert_eq!(totals[0].category, Category::Friend);
        assert_eq!(totals[1].category, Category::Stranger);
    }

    #[test]
    fn test_empty_table_yields_empty_totals() {
        assert!(spend_by_category(&EnrichedTable::default()).is_empty());
    }
}
