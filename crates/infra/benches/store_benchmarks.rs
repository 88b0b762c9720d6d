use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catalog_infra::InMemoryProductStore;
use catalog_products::{ProductDraft, ProductStore, SortDirection, SortField};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("bench runtime")
}

fn seeded_store(rt: &tokio::runtime::Runtime, count: usize) -> InMemoryProductStore {
    let store = InMemoryProductStore::new();
    rt.block_on(async {
        for i in 0..count {
            store
                .insert(ProductDraft {
                    name: format!("Product {i:06}"),
                    description: format!("Catalog entry number {i}"),
                    price: (i % 997) as f64,
                })
                .await
                .expect("seed insert");
        }
    });
    store
}

/// Paging cost is dominated by the snapshot sort, so it scales with the
/// store, not the page.
fn bench_find_page(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("find_page");

    for store_size in [100usize, 1_000, 10_000] {
        let store = seeded_store(&rt, store_size);
        group.throughput(Throughput::Elements(store_size as u64));

        group.bench_with_input(
            BenchmarkId::new("by_name_asc", store_size),
            &store_size,
            |b, _| {
                b.iter(|| {
                    rt.block_on(store.find_page(
                        black_box(2),
                        black_box(10),
                        SortField::Name,
                        SortDirection::Ascending,
                    ))
                    .expect("page")
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("by_price_desc", store_size),
            &store_size,
            |b, _| {
                b.iter(|| {
                    rt.block_on(store.find_page(
                        black_box(2),
                        black_box(10),
                        SortField::Price,
                        SortDirection::Descending,
                    ))
                    .expect("page")
                });
            },
        );
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(1));

    group.bench_function("single_record", |b| {
        let store = InMemoryProductStore::new();
        b.iter(|| {
            rt.block_on(store.insert(ProductDraft {
                name: "Laptop".to_string(),
                description: "Gaming Laptop".to_string(),
                price: black_box(1500.0),
            }))
            .expect("insert")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_find_page, bench_insert);
criterion_main!(benches);
