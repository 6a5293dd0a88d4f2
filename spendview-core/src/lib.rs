//! spendview-core: domain types and pure logic for the transaction analyzer.

pub mod classify;
pub mod session;
pub mod summary;
pub mod time;
pub mod transaction;

pub use classify::{Classifier, DEFAULT_CONTACTS, DEFAULT_MERCHANTS};
pub use session::{DrillDown, Session, SessionError};
pub use summary::{CategoryTotal, spend_by_category};
pub use time::{format_timestamp, parse_timestamp};
pub use transaction::{Category, EnrichedTable, EnrichedTransaction};
