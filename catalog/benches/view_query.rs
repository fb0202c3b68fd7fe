//! View query and store benchmarks
//!
//! The list view is recomputed on every read, so its cost at catalog scale
//! decides whether it ever needs caching.
//!
//! Run with: `cargo bench --bench view_query`

#![allow(missing_docs)] // Benchmarks don't need extensive docs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use product_catalog::query::{compute_view, ViewParams};
use product_catalog::seed::sample_products;
use product_catalog::{transition, CatalogAction, CatalogState, ListPageAction, Product, ProductCatalog, ProductId};

/// The sample products repeated until `n` products exist
fn catalog_of(n: usize) -> Vec<Product> {
    let samples = sample_products();
    (0..n)
        .map(|i| Product {
            id: ProductId::new(i as u64 + 1),
            ..samples[i % samples.len()].clone()
        })
        .collect()
}

fn benchmark_compute_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_view");

    for size in [10_usize, 1_000, 10_000] {
        let products = catalog_of(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &products, |b, products| {
            let params = ViewParams::default();
            b.iter(|| compute_view(black_box(products), &params).total_pages);
        });

        group.bench_with_input(BenchmarkId::new("all_filters", size), &products, |b, products| {
            let params = ViewParams {
                search_text: "a".to_string(),
                min_price: "100000".to_string(),
                max_price: "400000".to_string(),
                page_number: 3,
                ..ViewParams::default()
            };
            b.iter(|| compute_view(black_box(products), &params).total_count);
        });
    }

    group.finish();
}

fn benchmark_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");
    group.throughput(Throughput::Elements(1));

    let state = CatalogState::with_products(catalog_of(1_000));

    group.bench_function("delete", |b| {
        b.iter(|| transition(&state, black_box(CatalogAction::Delete { id: ProductId::new(500) })));
    });

    group.bench_function("update", |b| {
        let mut product = state.products[10].clone();
        product.quantity += 1;
        b.iter(|| transition(&state, black_box(CatalogAction::Update(product.clone()))));
    });

    group.finish();
}

fn benchmark_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    group.throughput(Throughput::Elements(1));

    group.bench_function("page_and_view", |b| {
        let catalog = ProductCatalog::default();
        b.iter(|| {
            let _ = catalog.list(black_box(ListPageAction::NextPage));
            catalog.view().effective_page
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_compute_view, benchmark_transition, benchmark_facade);
criterion_main!(benches);
