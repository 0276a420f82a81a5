// Query benchmarks
// Author: Gabriel Demetrios Lafis

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_record_query_engine::{
    query::{average, group_and_aggregate, top_n_by_key, AvgAggregator},
    records::Product,
};

fn make_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let category = match i % 3 {
                0 => "Electrónica",
                1 => "Hogar",
                _ => "Libros",
            };
            Product::new(&format!("product-{}", i), category, (i % 97) as f64, (i % 13) as i64)
        })
        .collect()
}

fn query_benchmark(c: &mut Criterion) {
    let products = make_products(1000);

    c.bench_function("average_1k", |b| {
        b.iter(|| average(black_box(&products), |p| p.price))
    });

    c.bench_function("group_avg_1k", |b| {
        b.iter(|| {
            group_and_aggregate(
                black_box(&products),
                |p| p.category.clone(),
                &AvgAggregator::new(|p: &Product| p.price),
            )
        })
    });

    c.bench_function("top_10_of_1k", |b| {
        b.iter(|| top_n_by_key(black_box(&products), 10, |p| p.price))
    });
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
