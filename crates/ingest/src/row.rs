//! Raw CSV row and field coercion rules.

use chrono::NaiveDate;
use serde::Deserialize;

use dairyops_core::{Brand, Location, ProductId, SalesChannel};
use dairyops_inventory::Record;

/// Day-first date format used by the dataset (e.g. `27/02/2021`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One dataset row as text. Columns the engine does not need are ignored;
/// missing columns read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRow {
    #[serde(rename = "Product Name")]
    pub product: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Sales Channel")]
    pub sales_channel: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Production Date")]
    pub production_date: String,
    #[serde(rename = "Expiration Date")]
    pub expiration_date: String,
    #[serde(rename = "Quantity in Stock (liters/kg)")]
    pub quantity_in_stock: String,
    #[serde(rename = "Quantity Sold (liters/kg)")]
    pub quantity_sold: String,
    #[serde(rename = "Price per Unit")]
    pub price_per_unit: String,
}

impl RawRow {
    /// Normalize into a `Record`; `None` when the product name is blank.
    pub fn into_record(self) -> Option<Record> {
        let product = ProductId::new(self.product).ok()?;

        let mut record = Record::new(product);
        record.brand = Brand::new(self.brand).ok();
        record.location = Location::new(self.location).ok();
        record.sales_channel = SalesChannel::new(self.sales_channel).ok();
        record.transaction_date = parse_date(&self.date);
        record.production_date = parse_date(&self.production_date);
        record.expiration_date = parse_date(&self.expiration_date);
        record.quantity_produced = parse_number(&self.quantity_in_stock);
        record.quantity_sold = parse_number(&self.quantity_sold);
        record.unit_price = parse_number(&self.price_per_unit);
        Some(record)
    }
}

/// `DATE_FORMAT` date, or `None` for anything else.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::debug!(value = raw, error = %err, "unparseable date treated as missing");
            None
        }
    }
}

/// Finite number, or `0` for empty, malformed, NaN or infinite input.
pub fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::debug!(value = raw, "unparseable number coerced to 0");
            0.0
        }
    }
}
