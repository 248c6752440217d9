//! Inventory-expiration accounting.
//!
//! Replays dairy transaction records per product with FIFO depletion and
//! classifies carried-over stock as valid or expired at each production date.
//! Pure, deterministic domain logic (no IO).

pub mod analytics;
pub mod batch;
pub mod engine;
pub mod filter;
pub mod lot;
pub mod record;
pub mod views;

pub use analytics::ExpirationAnalytics;
pub use batch::{Batch, ProductTimeline, group_into_timelines};
pub use engine::{BatchResult, InventoryExpirationEngine};
pub use filter::{RecordFilter, Selection};
pub use lot::{Classification, InventoryLot, LotQueue};
pub use record::Record;
pub use views::{
    DEFAULT_EXCLUDED_YEARS, LossViewConfig, ProductStock, YearlyLoss, loss_by_year,
    stock_by_product,
};
