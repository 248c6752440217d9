//! Post-aggregations over the engine's result stream.
//!
//! Both views consume the same `BatchResult` list; neither re-runs any FIFO
//! logic.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use dairyops_core::ProductId;

use crate::engine::BatchResult;

/// Years omitted from the loss view unless configured otherwise.
pub const DEFAULT_EXCLUDED_YEARS: [i32; 1] = [2018];

/// Loss view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossViewConfig {
    pub excluded_years: BTreeSet<i32>,
}

impl Default for LossViewConfig {
    fn default() -> Self {
        Self {
            excluded_years: DEFAULT_EXCLUDED_YEARS.into_iter().collect(),
        }
    }
}

impl LossViewConfig {
    pub fn with_excluded_years(years: impl IntoIterator<Item = i32>) -> Self {
        Self {
            excluded_years: years.into_iter().collect(),
        }
    }

    pub fn without_exclusions() -> Self {
        Self {
            excluded_years: BTreeSet::new(),
        }
    }

    pub fn excludes(&self, year: i32) -> bool {
        self.excluded_years.contains(&year)
    }
}

/// Monetary loss from expired stock in one production year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyLoss {
    pub year: i32,
    pub loss: f64,
}

/// Summed valid and expired quantities of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStock {
    pub product: ProductId,
    pub valid: f64,
    pub expired: f64,
}

/// `expired * unit_price` summed per year, ascending, excluded years dropped.
pub fn loss_by_year(results: &[BatchResult], config: &LossViewConfig) -> Vec<YearlyLoss> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for result in results {
        *by_year.entry(result.year).or_default() += result.loss();
    }

    by_year
        .into_iter()
        .filter(|(year, _)| !config.excludes(*year))
        .map(|(year, loss)| YearlyLoss { year, loss })
        .collect()
}

/// Valid and expired quantities summed per product, in the order products
/// first appear in `results`.
pub fn stock_by_product(results: &[BatchResult]) -> Vec<ProductStock> {
    let mut index: HashMap<&ProductId, usize> = HashMap::new();
    let mut stock: Vec<ProductStock> = Vec::new();

    for result in results {
        let slot = *index.entry(&result.product).or_insert_with(|| {
            stock.push(ProductStock {
                product: result.product.clone(),
                valid: 0.0,
                expired: 0.0,
            });
            stock.len() - 1
        });
        stock[slot].valid += result.valid_quantity;
        stock[slot].expired += result.expired_quantity;
    }

    stock
}
