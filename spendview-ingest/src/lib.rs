//! spendview-ingest: transaction CSV pipeline and analysis export.

pub mod export;
pub mod pipeline;

pub use export::{EXPORT_COLUMNS, to_analysis_csv};
pub use pipeline::{PipelineError, REQUIRED_COLUMNS, process, process_path};
