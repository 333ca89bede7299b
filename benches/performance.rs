//! Performance benchmarks for the book catalog.

use bookshelf::{Book, Library, RecordId};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn sample_book() -> Book {
    Book::new("Leviathan Wakes", "James S.A. Corey", 577, 2011)
}

/// Benchmark add with varying notification fan-out.
fn bench_add_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_fanout");

    for subscribers in [0usize, 1, 8, 64] {
        group.bench_with_input(
            BenchmarkId::new("subscribers", subscribers),
            &subscribers,
            |b, &count| {
                b.iter_batched(
                    || {
                        let mut library = Library::new();
                        for _ in 0..count {
                            library.subscribe(|event| {
                                black_box(event);
                                Ok(())
                            });
                        }
                        library
                    },
                    |mut library| library.add(sample_book()).unwrap(),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark lookup depth in the linear scan.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for size in [10u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("records", size), &size, |b, &count| {
            let mut library = Library::new();
            for i in 0..count {
                library
                    .add(Book::new(format!("book {}", i), "author", 100, 2000))
                    .unwrap();
            }
            let last = RecordId(count - 1);

            b.iter(|| black_box(library.find(black_box(last))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_fanout, bench_find);
criterion_main!(benches);
