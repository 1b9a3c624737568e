use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use reportguard_core::{Dataset, ReferenceDataset, Row, Value};
use std::hint::black_box;

/// Rows keyed by a running barcode, with a few text and numeric fields.
///
/// Every `mismatch_every`-th row gets a different name so the comparator
/// also has violations to format.
fn create_dataset(size: usize, mismatch_every: usize) -> Dataset {
    (0..size)
        .map(|i| {
            let mut row = Row::new();
            row.insert("Barcode".to_string(), Value::Integer(i as i64));
            let name = if mismatch_every > 0 && i % mismatch_every == 0 {
                format!("changed-{}", i)
            } else {
                format!("product-{}", i)
            };
            row.insert("Name".to_string(), Value::Text(name));
            row.insert("Price".to_string(), Value::Float(i as f64 * 0.5));
            row.insert("Comment".to_string(), Value::Missing);
            row
        })
        .collect()
}

fn bench_exact_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_value");

    for size in [1_000usize, 10_000, 100_000] {
        let reference = ReferenceDataset::new(create_dataset(size, 0), "Barcode");
        let actual = create_dataset(size, 100);

        group.bench_with_input(BenchmarkId::new("compare", size), &actual, |b, actual| {
            b.iter(|| black_box(reference.compare(black_box(actual))))
        });
    }

    group.bench_function("build_index_100k", |b| {
        b.iter_batched(
            || create_dataset(100_000, 0),
            |rows| black_box(ReferenceDataset::new(rows, "Barcode")),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_exact_value);
criterion_main!(benches);
