use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use dairyops_core::ProductId;

use crate::batch::{ProductTimeline, group_into_timelines};
use crate::lot::{InventoryLot, LotQueue};
use crate::record::Record;

/// Valid/expired accounting for one replayed record.
///
/// `valid_quantity` is the record's own sale plus the carryover that was
/// still within its expiration date; `expired_quantity` is the carryover past
/// it. Both are measured at `production_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub product: ProductId,
    pub production_date: NaiveDate,
    pub year: i32,
    pub expired_quantity: f64,
    pub valid_quantity: f64,
    /// Price of the batch being replayed (not of the lots that expired).
    pub unit_price: f64,
}

impl BatchResult {
    /// Monetary value of the expired quantity at this batch's price.
    pub fn loss(&self) -> f64 {
        self.expired_quantity * self.unit_price
    }
}

/// FIFO inventory-expiration engine.
///
/// Replays every product independently:
/// - sort its records by production date (stable),
/// - deplete older lots with each record's sale, oldest first,
/// - classify whatever survives as expired or valid as of the record's
///   production date,
/// - then stock the record's own production as a new lot.
///
/// Pure and deterministic; recomputes everything on each call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryExpirationEngine;

impl InventoryExpirationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Per-record results for every product, products in first-appearance
    /// order and records in replay order.
    #[tracing::instrument(level = "debug", skip_all, fields(records = records.len()))]
    pub fn compute_batch_results(&self, records: &[Record]) -> Vec<BatchResult> {
        let (timelines, skipped) = group_into_timelines(records);
        if skipped > 0 {
            tracing::trace!(skipped, "records without production date excluded");
        }

        let mut results = Vec::with_capacity(records.len() - skipped);
        for timeline in &timelines {
            self.replay(timeline, &mut results);
        }

        tracing::debug!(
            products = timelines.len(),
            results = results.len(),
            "expiration replay complete"
        );
        results
    }

    fn replay(&self, timeline: &ProductTimeline<'_>, out: &mut Vec<BatchResult>) {
        let mut queue = LotQueue::new();
        let mut unmet_demand = 0.0;

        for batch in &timeline.batches {
            for record in &batch.records {
                unmet_demand += queue.deplete(record.quantity_sold);

                let split = queue.classify(batch.production_date);

                if record.quantity_produced > 0.0 {
                    queue.push(InventoryLot::new(
                        record.quantity_produced,
                        record.expiration_date,
                        record.unit_price,
                    ));
                }

                out.push(BatchResult {
                    product: timeline.product.clone(),
                    production_date: batch.production_date,
                    year: batch.production_date.year(),
                    expired_quantity: split.expired,
                    valid_quantity: record.quantity_sold + split.valid,
                    unit_price: record.unit_price,
                });
            }
        }

        tracing::trace!(
            product = %timeline.product,
            batches = timeline.batches.len(),
            open_lots = queue.len(),
            remaining = queue.total_remaining(),
            unmet_demand,
            "product replayed"
        );
    }
}
