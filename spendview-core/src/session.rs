//! Drill-down session: upload → category → single transaction.
//!
//! The UI shell only fires discrete selection events; every legal
//! transition lives here so the flow is testable without a UI harness.

use crate::{Category, CategoryTotal, EnrichedTable, EnrichedTransaction, spend_by_category};
use thiserror::Error;

/// Where the user is in the drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrillDown {
    #[default]
    NoFileLoaded,
    TableReady,
    CategorySelected(Category),
    TransactionSelected { category: Category, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no file loaded")]
    NoTable,
    /// Only categories actually present in the totals are selectable.
    #[error("category {0} has no transactions in this upload")]
    CategoryNotPresent(Category),
    #[error("no category selected")]
    NoCategorySelected,
    #[error("transaction {index} out of range (category has {len} rows)")]
    TransactionOutOfRange { index: usize, len: usize },
}

/// One upload's table, its totals, and the current drill-down position.
#[derive(Debug, Clone, Default)]
pub struct Session {
    table: EnrichedTable,
    totals: Vec<CategoryTotal>,
    state: DrillDown,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Load a freshly processed table. Full reset: totals are recomputed
    /// and any previous drill-down position is discarded.
    pub fn load(&mut self, table: EnrichedTable) {
        self.totals = spend_by_category(&table);
        self.table = table;
        self.state = DrillDown::TableReady;
    }

    /// Back to an empty session, e.g. when a new upload fails and the
    /// previous table must not linger.
    pub fn reset(&mut self) {
        *self = Session::default();
    }

    pub fn state(&self) -> DrillDown {
        self.state
    }

    pub fn table(&self) -> &EnrichedTable {
        &self.table
    }

    /// Category totals, largest spend first. Empty means there is
    /// nothing to display and no further drill-down applies.
    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }

    /// Pick a category. Allowed from any loaded state, so re-picking
    /// from deeper in the drill-down behaves like the UI re-render.
    pub fn select_category(&mut self, category: Category) -> Result<(), SessionError> {
        if self.state == DrillDown::NoFileLoaded {
            return Err(SessionError::NoTable);
        }
        if !self.totals.iter().any(|t| t.category == category) {
            return Err(SessionError::CategoryNotPresent(category));
        }
        self.state = DrillDown::CategorySelected(category);
        Ok(())
    }

    /// Rows of the currently selected category, in table order.
    pub fn category_rows(&self) -> Result<Vec<&EnrichedTransaction>, SessionError> {
        match self.state {
            DrillDown::CategorySelected(c)
            | DrillDown::TransactionSelected { category: c, .. } => Ok(self.table.rows_in(c)),
            DrillDown::NoFileLoaded => Err(SessionError::NoTable),
            DrillDown::TableReady => Err(SessionError::NoCategorySelected),
        }
    }

    /// Pick one transaction by its position in the filtered list,
    /// echoing the full record.
    pub fn select_transaction(
        &mut self,
        index: usize,
    ) -> Result<&EnrichedTransaction, SessionError> {
        let category = match self.state {
            DrillDown::CategorySelected(c)
            | DrillDown::TransactionSelected { category: c, .. } => c,
            DrillDown::NoFileLoaded => return Err(SessionError::NoTable),
            DrillDown::TableReady => return Err(SessionError::NoCategorySelected),
        };

        let len = self
            .table
            .rows
            .iter()
            .filter(|r| r.category == category)
            .count();
        if index >= len {
            return Err(SessionError::TransactionOutOfRange { index, len });
        }

        self.state = DrillDown::TransactionSelected { category, index };
        self.table
            .rows
            .iter()
            .filter(|r| r.category == category)
            .nth(index)
            .ok_or(SessionError::TransactionOutOfRange { index, len })
    }

    /// The record currently shown in the detail panel, if any.
    pub fn selected_transaction(&self) -> Option<&EnrichedTransaction> {
        match self.state {
            DrillDown::TransactionSelected { category, index } => self
                .table
                .rows
                .iter()
                .filter(|r| r.category == category)
                .nth(index),
            _ => None,
        }
    }
}
