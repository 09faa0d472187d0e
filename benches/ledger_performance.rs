use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use finance_tracker::{
    ledger::{Ledger, DATE_FORMAT},
    storage::{StorageBackend, TextStore},
    time::FixedClock,
};
use tempfile::tempdir;

const CATEGORIES: [&str; 4] = ["food", "rent", "salary", "travel"];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
}

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::with_clock(Arc::new(FixedClock(today())));
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for idx in 0..txn_count {
        // scatter dates so inserts land in the middle of the sequence
        let date = start_date + Duration::days(((idx * 7919) % 365) as i64);
        let kind = if idx % 3 == 0 { "income" } else { "outcome" };
        let amount = format!("{}", 50.0 + (idx % 100) as f64);
        let date = date.format(DATE_FORMAT).to_string();
        ledger
            .add(kind, &amount, CATEGORIES[idx % CATEGORIES.len()], &date)
            .expect("valid sample transaction");
    }
    ledger
}

fn bench_ledger_inserts(c: &mut Criterion) {
    c.bench_function("ledger_insert_5k", |b| {
        b.iter(|| black_box(build_sample_ledger(5_000)))
    });
}

fn bench_ledger_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let store = TextStore::new(dir.path().join("transactions.csv"));

    c.bench_function("ledger_save_10k", |b| {
        b.iter(|| {
            store.save(&ledger).expect("save ledger");
        })
    });

    store.save(&ledger).expect("seed");

    c.bench_function("ledger_load_10k", |b| {
        b.iter(|| {
            let loaded = store
                .load(Arc::new(FixedClock(today())))
                .expect("load ledger");
            black_box(loaded);
        })
    });
}

fn bench_ledger_summaries(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("summary_overall", |b| {
        b.iter(|| black_box(ledger.summary().map(|view| view.balance())))
    });

    c.bench_function("summary_month_and_category", |b| {
        b.iter_batched(
            || ledger.clone(),
            |ledger_clone| {
                let month = ledger_clone.month_summary(6, 2025).expect("valid period");
                let category = ledger_clone.category_summary("Food");
                black_box((month.map(|view| view.len()), category.map(|view| view.len())));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_ledger_inserts,
    bench_ledger_io,
    bench_ledger_summaries
);
criterion_main!(benches);
