use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use dairyops_inventory::Record;

use crate::error::{IngestError, IngestResult};
use crate::row::RawRow;

/// Row counts of one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub rows_read: usize,
    /// Rows dropped because their product name was blank.
    pub rows_skipped: usize,
}

/// Read and normalize every row of a headed CSV stream.
pub fn read_records<R: Read>(reader: R) -> IngestResult<(Vec<Record>, IngestReport)> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    // surface header problems before the first row
    csv.headers().map_err(IngestError::Header)?;

    let mut records = Vec::new();
    let mut report = IngestReport::default();

    for (i, result) in csv.deserialize::<RawRow>().enumerate() {
        // 1-based, header is row 1
        let row = i + 2;
        let raw = result.map_err(|source| IngestError::Csv { row, source })?;
        report.rows_read += 1;

        match raw.into_record() {
            Some(record) => records.push(record),
            None => {
                report.rows_skipped += 1;
                tracing::warn!(row, "row without product name skipped");
            }
        }
    }

    tracing::info!(
        rows_read = report.rows_read,
        rows_skipped = report.rows_skipped,
        "dataset loaded"
    );
    Ok((records, report))
}

/// Open `path` and read it with [`read_records`].
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_records(path: impl AsRef<Path>) -> IngestResult<(Vec<Record>, IngestReport)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: &str = "Date,Product Name,Brand,Location,Sales Channel,Production Date,Expiration Date,Quantity in Stock (liters/kg),Quantity Sold (liters/kg),Price per Unit,Number of Cows";

    #[test]
    fn rows_map_onto_records() {
        let data = format!(
            "{HEADER}\n\
             05/01/2021,Milk,Amul,Delhi,Retail,01/01/2021,08/01/2021,120,35,52.5,40\n"
        );

        let (records, report) = read_records(data.as_bytes()).unwrap();

        assert_eq!(report, IngestReport { rows_read: 1, rows_skipped: 0 });
        let r = &records[0];
        assert_eq!(r.product.as_str(), "Milk");
        assert_eq!(r.sales_channel.as_ref().unwrap().as_str(), "Retail");
        assert_eq!(r.year(), Some(2021));
        assert_eq!(r.production_date, NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(r.expiration_date, NaiveDate::from_ymd_opt(2021, 1, 8));
        assert_eq!((r.quantity_produced, r.quantity_sold, r.unit_price), (120.0, 35.0, 52.5));
    }

    #[test]
    fn malformed_fields_are_coerced_not_rejected() {
        let data = format!(
            "{HEADER}\n\
             bad-date,Curd,,Pune,Online,,,lots,,free,\n"
        );

        let (records, _) = read_records(data.as_bytes()).unwrap();

        let r = &records[0];
        assert!(r.transaction_date.is_none());
        assert!(r.production_date.is_none());
        assert!(r.brand.is_none());
        assert_eq!((r.quantity_produced, r.quantity_sold, r.unit_price), (0.0, 0.0, 0.0));
    }

    #[test]
    fn blank_products_are_counted_as_skipped() {
        let data = format!(
            "{HEADER}\n\
             05/01/2021,,Amul,Delhi,Retail,01/01/2021,08/01/2021,1,1,1,1\n\
             05/01/2021,Ghee,Amul,Delhi,Retail,01/01/2021,08/01/2021,1,1,1,1\n"
        );

        let (records, report) = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(report, IngestReport { rows_read: 2, rows_skipped: 1 });
    }

    #[test]
    fn missing_columns_read_as_empty() {
        let data = "Product Name,Quantity Sold (liters/kg)\nButter,4\n";

        let (records, _) = read_records(data.as_bytes()).unwrap();

        assert_eq!(records[0].quantity_sold, 4.0);
        assert!(records[0].production_date.is_none());
    }

    #[test]
    fn empty_dataset_yields_no_records() {
        let (records, report) = read_records(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
        assert_eq!(report.rows_read, 0);
    }
}
