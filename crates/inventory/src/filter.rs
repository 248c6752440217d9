//! Cross-filter predicate over records (brand, month, location, channel, year).

use serde::{Deserialize, Serialize};

use dairyops_core::{Brand, DomainError, DomainResult, Location, SalesChannel};

use crate::record::Record;

/// Either every value, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// `All` matches anything, including a missing value; `Only` needs an
    /// equal value.
    pub fn accepts(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

/// Dashboard cross-filter.
///
/// `month` and `year` are read from the record's transaction date, not its
/// production date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    pub brand: Selection<Brand>,
    pub month: Selection<u32>,
    pub location: Selection<Location>,
    pub sales_channel: Selection<SalesChannel>,
    pub year: Selection<i32>,
}

impl RecordFilter {
    /// Filter that accepts every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = Selection::Only(brand);
        self
    }

    pub fn with_month(mut self, month: u32) -> DomainResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!(
                "month must be within 1..=12, got {month}"
            )));
        }
        self.month = Selection::Only(month);
        Ok(self)
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Selection::Only(location);
        self
    }

    pub fn with_sales_channel(mut self, channel: SalesChannel) -> Self {
        self.sales_channel = Selection::Only(channel);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Selection::Only(year);
        self
    }

    /// Same filter with the year selection reset to `All`.
    pub fn without_year(&self) -> Self {
        Self {
            year: Selection::All,
            ..self.clone()
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.brand.accepts(record.brand.as_ref())
            && self.month.accepts(record.month().as_ref())
            && self.location.accepts(record.location.as_ref())
            && self.sales_channel.accepts(record.sales_channel.as_ref())
            && self.year.accepts(record.year().as_ref())
    }

    /// Records accepted by the filter, cloned, in input order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
