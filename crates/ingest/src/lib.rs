//! `dairyops-ingest`: dataset loading.
//!
//! Turns the dashboard's CSV export into normalized [`Record`]s: day-first
//! dates, numbers coerced to zero when unreadable, blank categories absent.
//! The expiration engine never sees raw text.
//!
//! [`Record`]: dairyops_inventory::Record

pub mod error;
pub mod reader;
pub mod row;

pub use error::{IngestError, IngestResult};
pub use reader::{IngestReport, load_records, read_records};
pub use row::{DATE_FORMAT, RawRow, parse_date, parse_number};
