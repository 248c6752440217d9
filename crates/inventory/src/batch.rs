//! Grouping of records into per-product, chronologically ordered batches.

use std::collections::HashMap;

use chrono::NaiveDate;

use dairyops_core::ProductId;

use crate::record::Record;

/// All records of one product sharing one production date.
///
/// Records keep their input order; each one is replayed as its own step.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<'a> {
    pub product: &'a ProductId,
    pub production_date: NaiveDate,
    pub records: Vec<&'a Record>,
}

/// Chronological batch timeline of one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTimeline<'a> {
    pub product: &'a ProductId,
    pub batches: Vec<Batch<'a>>,
}

/// Group `records` by product (first-appearance order), then by production
/// date (ascending).
///
/// Records without a production date are dropped here. Returns the timelines
/// and the number of records dropped.
pub fn group_into_timelines(records: &[Record]) -> (Vec<ProductTimeline<'_>>, usize) {
    let mut order: Vec<&ProductId> = Vec::new();
    let mut by_product: HashMap<&ProductId, Vec<(NaiveDate, &Record)>> = HashMap::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(production_date) = record.production_date else {
            skipped += 1;
            continue;
        };
        by_product
            .entry(&record.product)
            .or_insert_with(|| {
                order.push(&record.product);
                Vec::new()
            })
            .push((production_date, record));
    }

    let timelines = order
        .into_iter()
        .map(|product| {
            let mut dated = by_product.remove(product).unwrap_or_default();
            // stable: ties keep input order
            dated.sort_by_key(|(date, _)| *date);

            let mut batches: Vec<Batch<'_>> = Vec::new();
            for (production_date, record) in dated {
                match batches.last_mut() {
                    Some(batch) if batch.production_date == production_date => {
                        batch.records.push(record);
                    }
                    _ => batches.push(Batch {
                        product,
                        production_date,
                        records: vec![record],
                    }),
                }
            }

            ProductTimeline { product, batches }
        })
        .collect();

    (timelines, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn record(product: &str, produced_on: Option<NaiveDate>, sold: f64) -> Record {
        let mut r = Record::new(ProductId::new(product).unwrap()).with_quantities(0.0, sold);
        r.production_date = produced_on;
        r
    }

    #[test]
    fn products_keep_first_appearance_order() {
        let records = vec![
            record("Milk", Some(day(2)), 1.0),
            record("Butter", Some(day(1)), 2.0),
            record("Milk", Some(day(1)), 3.0),
        ];

        let (timelines, skipped) = group_into_timelines(&records);

        assert_eq!(skipped, 0);
        let names: Vec<&str> = timelines.iter().map(|t| t.product.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Butter"]);
        let milk_dates: Vec<NaiveDate> =
            timelines[0].batches.iter().map(|b| b.production_date).collect();
        assert_eq!(milk_dates, vec![day(1), day(2)]);
    }

    #[test]
    fn same_day_records_share_a_batch_in_input_order() {
        let records = vec![
            record("Milk", Some(day(3)), 5.0),
            record("Milk", Some(day(1)), 1.0),
            record("Milk", Some(day(3)), 7.0),
        ];

        let (timelines, _) = group_into_timelines(&records);

        let batches = &timelines[0].batches;
        assert_eq!(batches.len(), 2);
        let sold: Vec<f64> = batches[1].records.iter().map(|r| r.quantity_sold).collect();
        assert_eq!(sold, vec![5.0, 7.0]);
    }

    #[test]
    fn undated_records_are_skipped() {
        let records = vec![record("Milk", None, 5.0), record("Curd", None, 1.0)];

        let (timelines, skipped) = group_into_timelines(&records);

        assert!(timelines.is_empty());
        assert_eq!(skipped, 2);
    }
}
