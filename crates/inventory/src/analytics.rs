use serde::{Deserialize, Serialize};

use crate::engine::{BatchResult, InventoryExpirationEngine};
use crate::filter::RecordFilter;
use crate::record::Record;
use crate::views::{LossViewConfig, ProductStock, YearlyLoss, loss_by_year, stock_by_product};

/// Filter + engine + view, the way the dashboard charts consume them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationAnalytics {
    #[serde(skip)]
    engine: InventoryExpirationEngine,
    loss: LossViewConfig,
}

impl ExpirationAnalytics {
    pub fn new(loss: LossViewConfig) -> Self {
        Self {
            engine: InventoryExpirationEngine::new(),
            loss,
        }
    }

    pub fn loss_config(&self) -> &LossViewConfig {
        &self.loss
    }

    /// Raw result stream for the records the filter accepts.
    pub fn batch_results(&self, records: &[Record], filter: &RecordFilter) -> Vec<BatchResult> {
        let selected = filter.apply(records);
        self.engine.compute_batch_results(&selected)
    }

    /// Loss per production year.
    ///
    /// The year selection is ignored: the series always spans every year the
    /// other selections allow.
    pub fn loss_series(&self, records: &[Record], filter: &RecordFilter) -> Vec<YearlyLoss> {
        let results = self.batch_results(records, &filter.without_year());
        loss_by_year(&results, &self.loss)
    }

    /// Valid vs expired stock per product under the full filter.
    pub fn stock_comparison(&self, records: &[Record], filter: &RecordFilter) -> Vec<ProductStock> {
        let results = self.batch_results(records, filter);
        stock_by_product(&results)
    }
}
