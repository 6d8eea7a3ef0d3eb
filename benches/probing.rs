use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use linprobe::table::ProbingTable;

const NUMBER_ELEMENTS: u64 = 10_000;

fn filled() -> ProbingTable<u64, u64> {
    (0..NUMBER_ELEMENTS).map(|i| (i, i)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert");

    //  Starts from the default capacity, growing along the way.
    group.bench_function("insert_growing", |b| {
        b.iter(|| {
            let mut table: ProbingTable<u64, u64> = ProbingTable::with_defaults();

            for i in 0..NUMBER_ELEMENTS {
                table.insert(black_box(i), i).unwrap();
            }

            table
        })
    });

    group.bench_function("insert_presized", |b| {
        b.iter(|| {
            let mut table: ProbingTable<u64, u64> =
                ProbingTable::with_capacity(2 * NUMBER_ELEMENTS as usize).unwrap();

            for i in 0..NUMBER_ELEMENTS {
                table.insert(black_box(i), i).unwrap();
            }

            table
        })
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("Get");

    let table = filled();

    group.bench_function("get_hit", |b| {
        b.iter(|| {
            for i in 0..NUMBER_ELEMENTS {
                black_box(table.try_get(&black_box(i)));
            }
        })
    });

    group.bench_function("get_miss", |b| {
        b.iter(|| {
            for i in NUMBER_ELEMENTS..2 * NUMBER_ELEMENTS {
                black_box(table.try_get(&black_box(i)));
            }
        })
    });

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Churn");

    //  Removals leave tombstones behind, which lengthen later scans.
    group.bench_function("remove_then_insert", |b| {
        b.iter_batched(
            filled,
            |mut table| {
                for i in 0..NUMBER_ELEMENTS {
                    table.remove(&i);
                    table.insert(i + NUMBER_ELEMENTS, i).unwrap();
                }

                table
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_churn);
criterion_main!(benches);
