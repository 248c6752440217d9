//! FIFO lot queue used by the per-product replay.

use std::collections::VecDeque;

use chrono::NaiveDate;

/// Surviving stock of one production record.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLot {
    pub remaining_quantity: f64,
    /// `None` when the producing record had no expiration date. Such a lot is
    /// classified as expired at every step.
    pub expiration_date: Option<NaiveDate>,
    pub unit_price: f64,
}

impl InventoryLot {
    pub fn new(quantity: f64, expiration_date: Option<NaiveDate>, unit_price: f64) -> Self {
        Self {
            remaining_quantity: quantity,
            expiration_date,
            unit_price,
        }
    }

    /// Whether the lot has passed its expiration date as of `as_of`.
    ///
    /// Strictly earlier: a lot expiring on `as_of` is still valid.
    pub fn is_expired_at(&self, as_of: NaiveDate) -> bool {
        match self.expiration_date {
            Some(expires) => expires < as_of,
            None => true,
        }
    }
}

/// Expired/valid split of the stock left in a queue at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classification {
    pub expired: f64,
    pub valid: f64,
}

/// Ordered lots, oldest at the head.
///
/// Owned by exactly one product replay; nothing is shared between products
/// or between engine calls.
#[derive(Debug, Clone, Default)]
pub struct LotQueue {
    lots: VecDeque<InventoryLot>,
}

impl LotQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lot at the tail.
    pub fn push(&mut self, lot: InventoryLot) {
        self.lots.push_back(lot);
    }

    /// Satisfy `demand` from the oldest lots first.
    ///
    /// Every lot is visited with `use = min(demand, remaining)`, so a negative
    /// demand flows back into the head lot. Lots left without a positive
    /// remainder are dropped. Returns the demand that could not be met.
    pub fn deplete(&mut self, demand: f64) -> f64 {
        let mut outstanding = demand;
        for lot in self.lots.iter_mut() {
            let used = outstanding.min(lot.remaining_quantity);
            lot.remaining_quantity -= used;
            outstanding -= used;
        }
        self.lots.retain(|lot| lot.remaining_quantity > 0.0);
        outstanding
    }

    /// Split the surviving stock into expired and valid as of `as_of`.
    ///
    /// Classification does not remove anything: a lot counted as valid now
    /// is counted again (possibly as expired) at the next step.
    pub fn classify(&self, as_of: NaiveDate) -> Classification {
        self.lots
            .iter()
            .fold(Classification::default(), |mut acc, lot| {
                if lot.is_expired_at(as_of) {
                    acc.expired += lot.remaining_quantity;
                } else {
                    acc.valid += lot.remaining_quantity;
                }
                acc
            })
    }

    pub fn total_remaining(&self) -> f64 {
        self.lots.iter().map(|lot| lot.remaining_quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryLot> {
        self.lots.iter()
    }
}
