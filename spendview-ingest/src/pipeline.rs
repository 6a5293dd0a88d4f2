//! Upload pipeline: parse CSV bytes, validate the schema, coerce fields,
//! drop incomplete rows, classify and format the survivors.

use anyhow::Context;
use csv::ReaderBuilder;
use spendview_core::{Classifier, EnrichedTable, EnrichedTransaction, format_timestamp};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Columns every upload must provide. Extra columns are tolerated and
/// passed through.
pub const REQUIRED_COLUMNS: [&str; 3] = ["amount", "account_name", "timestamp"];

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The bytes are not a well-formed tabular CSV. Blocking; no partial
    /// results.
    #[error("could not read the CSV: {0}")]
    Parse(#[from] csv::Error),
    /// One or more required columns are missing. Blocking.
    #[error("CSV must contain columns: {}; found: {}", required.join(", "), found.join(", "))]
    Schema {
        required: Vec<String>,
        found: Vec<String>,
    },
}

/// Run the full pipeline over uploaded CSV bytes.
///
/// Row handling: non-finite amount (NaN counts as missing), blank account
/// name or timestamp, and timestamps neither the strict nor the permissive
/// parser accepts are all dropped and counted, never surfaced per row.
/// Short rows read as missing fields and fall into the same drop path.
pub fn process(bytes: &[u8], classifier: &Classifier) -> Result<EnrichedTable, PipelineError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let (Some(amount_idx), Some(name_idx), Some(ts_idx)) =
        (column("amount"), column("account_name"), column("timestamp"))
    else {
        return Err(PipelineError::Schema {
            required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: headers.iter().map(|h| h.trim().to_string()).collect(),
        });
    };

    let extra_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != amount_idx && *i != name_idx && *i != ts_idx)
        .map(|(i, h)| (i, h.trim().to_string()))
        .collect();

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for record in rdr.records() {
        let record = record?;

        let amount = record
            .get(amount_idx)
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite());
        let amount = match amount {
            Some(a) => a,
            None => {
                dropped += 1;
                continue;
            }
        };

        let account_name = record.get(name_idx).unwrap_or("").trim();
        let timestamp = record.get(ts_idx).unwrap_or("").trim();
        if account_name.is_empty() || timestamp.is_empty() {
            dropped += 1;
            continue;
        }

        let display_timestamp = match format_timestamp(timestamp) {
            Some(s) => s,
            None => {
                dropped += 1;
                continue;
            }
        };

        let extra = extra_columns
            .iter()
            .map(|(i, h)| (h.clone(), record.get(*i).unwrap_or("").to_string()))
            .collect();

        rows.push(EnrichedTransaction {
            amount,
            account_name: account_name.to_string(),
            timestamp: timestamp.to_string(),
            category: classifier.classify(account_name),
            display_timestamp,
            extra,
        });
    }

    Ok(EnrichedTable::new(rows, dropped))
}

/// Convenience wrapper: read a file and run [`process`] on its bytes.
pub fn process_path(
    path: impl AsRef<Path>,
    classifier: &Classifier,
) -> anyhow::Result<EnrichedTable> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    process(&bytes, classifier).with_context(|| format!("processing {}", path.display()))
}
