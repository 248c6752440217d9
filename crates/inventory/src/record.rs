use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use dairyops_core::{Brand, Location, ProductId, SalesChannel};

/// One normalized transaction row.
///
/// Date parsing and numeric coercion happen before a `Record` is built; the
/// engine never sees raw text. Quantities are not validated: negative values
/// pass through the FIFO arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub product: ProductId,
    pub brand: Option<Brand>,
    pub location: Option<Location>,
    pub sales_channel: Option<SalesChannel>,
    /// Transaction date; drives `year()`/`month()` and is independent of
    /// `production_date`.
    pub transaction_date: Option<NaiveDate>,
    /// Records without a production date never form a batch.
    pub production_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub quantity_produced: f64,
    pub quantity_sold: f64,
    pub unit_price: f64,
}

impl Record {
    /// A record for `product` with every optional field absent and every
    /// numeric field zero.
    pub fn new(product: ProductId) -> Self {
        Self {
            product,
            brand: None,
            location: None,
            sales_channel: None,
            transaction_date: None,
            production_date: None,
            expiration_date: None,
            quantity_produced: 0.0,
            quantity_sold: 0.0,
            unit_price: 0.0,
        }
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_sales_channel(mut self, channel: SalesChannel) -> Self {
        self.sales_channel = Some(channel);
        self
    }

    pub fn with_transaction_date(mut self, date: NaiveDate) -> Self {
        self.transaction_date = Some(date);
        self
    }

    pub fn with_production_date(mut self, date: NaiveDate) -> Self {
        self.production_date = Some(date);
        self
    }

    pub fn with_expiration_date(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    pub fn with_quantities(mut self, produced: f64, sold: f64) -> Self {
        self.quantity_produced = produced;
        self.quantity_sold = sold;
        self
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// Calendar year of the transaction date.
    pub fn year(&self) -> Option<i32> {
        self.transaction_date.map(|d| d.year())
    }

    /// Calendar month (1..=12) of the transaction date.
    pub fn month(&self) -> Option<u32> {
        self.transaction_date.map(|d| d.month())
    }
}
