//! Analysis CSV export: the enriched table as downloadable bytes.

use anyhow::{Result, anyhow};
use spendview_core::EnrichedTable;

/// Export column order. Header row is always present; no index column.
pub const EXPORT_COLUMNS: [&str; 4] = ["amount", "account_name", "type", "formatted_timestamp"];

/// Render the enriched table as UTF-8 CSV bytes, exactly the four
/// analysis columns in [`EXPORT_COLUMNS`] order.
pub fn to_analysis_csv(table: &EnrichedTable) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(EXPORT_COLUMNS)?;
    for row in &table.rows {
        wtr.write_record(&[
            row.amount.to_string(),
            row.account_name.clone(),
            row.category.to_string(),
            row.display_timestamp.clone(),
        ])?;
    }
    wtr.into_inner()
        .map_err(|e| anyhow!("flushing export CSV: {}", e.error()))
}
