//! Dataset building benchmarks for fathom-vectors.
//!
//! Benchmarks cover:
//! - Flattening in given vs shuffled page order
//! - Corpus size scaling
//! - Batch forward evaluation of a fresh classifier
//!
//! # Running benchmarks
//!
//! ```bash
//! cargo bench --bench dataset_building
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fathom_vectors::data::{PageOrder, TrainingSet};
use fathom_vectors::model::classifier;
use fathom_vectors::testing::synthetic_pages;
use fathom_vectors::Page;

const N_FEATURES: usize = 24;

fn n_nodes(pages: &[Page]) -> u64 {
    pages.iter().map(Page::n_nodes).sum::<usize>() as u64
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for n_pages in [100, 1_000, 10_000] {
        let pages = synthetic_pages(n_pages, 40, N_FEATURES, 0.05, 42);
        group.throughput(Throughput::Elements(n_nodes(&pages)));

        group.bench_with_input(BenchmarkId::new("given", n_pages), &pages, |b, pages| {
            b.iter(|| TrainingSet::from_pages(black_box(pages.as_slice()), PageOrder::Given))
        });

        group.bench_with_input(BenchmarkId::new("shuffled", n_pages), &pages, |b, pages| {
            b.iter(|| TrainingSet::from_pages(black_box(pages.as_slice()), PageOrder::Shuffled { seed: 7 }))
        });
    }

    group.finish();
}

fn bench_forward(c: &mut Criterion) {
    let pages = synthetic_pages(2_000, 40, N_FEATURES, 0.05, 42);
    let set = match TrainingSet::from_pages(&pages, PageOrder::Given) {
        Ok(set) => set,
        Err(e) => panic!("failed to build benchmark set: {e}"),
    };
    let model = match classifier(N_FEATURES, 1) {
        Ok(model) => model,
        Err(e) => panic!("failed to build classifier: {e}"),
    };

    let mut group = c.benchmark_group("forward");
    group.throughput(Throughput::Elements(set.n_rows() as u64));
    group.bench_function("batch", |b| {
        b.iter(|| model.forward(black_box(set.inputs.view())))
    });
    group.finish();
}

criterion_group!(benches, bench_flatten, bench_forward);
criterion_main!(benches);
