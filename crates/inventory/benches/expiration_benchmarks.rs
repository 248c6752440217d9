use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate};
use dairyops_core::ProductId;
use dairyops_inventory::{
    ExpirationAnalytics, InventoryExpirationEngine, Record, RecordFilter, stock_by_product,
};

const PRODUCTS: [&str; 6] = ["Milk", "Curd", "Ghee", "Butter", "Paneer", "Lassi"];

/// Synthetic year of daily rows: every product restocks each day with a
/// 7-day shelf life and sells a bit less than it produced the day before.
fn synthetic_records(rows_per_product: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let mut records = Vec::with_capacity(rows_per_product * PRODUCTS.len());

    for i in 0..rows_per_product {
        let produced_on = start + Duration::days(i as i64);
        for (p, name) in PRODUCTS.iter().enumerate() {
            let produced = 100.0 + ((i * 7 + p * 13) % 50) as f64;
            let sold = 60.0 + ((i * 11 + p * 5) % 40) as f64;
            records.push(
                Record::new(ProductId::new(*name).unwrap())
                    .with_transaction_date(produced_on)
                    .with_production_date(produced_on)
                    .with_expiration_date(produced_on + Duration::days(7))
                    .with_quantities(produced, sold)
                    .with_unit_price(40.0 + p as f64),
            );
        }
    }

    records
}

fn bench_batch_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_batch_results");
    let engine = InventoryExpirationEngine::new();

    for rows in [30usize, 365, 3650].iter() {
        let records = synthetic_records(*rows);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::new("daily_rows", rows), &records, |b, records| {
            b.iter(|| black_box(engine.compute_batch_results(black_box(records))));
        });
    }

    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("expiration_views");
    let records = synthetic_records(365);
    let analytics = ExpirationAnalytics::default();
    let filter = RecordFilter::all().with_year(2022);

    group.bench_function("loss_series_filtered", |b| {
        b.iter(|| black_box(analytics.loss_series(&records, &filter)));
    });

    let results = InventoryExpirationEngine::new().compute_batch_results(&records);
    group.bench_function("stock_by_product_only", |b| {
        b.iter(|| black_box(stock_by_product(&results)));
    });

    group.finish();
}

criterion_group!(benches, bench_batch_results, bench_views);
criterion_main!(benches);
