use criterion::{criterion_group, criterion_main, Criterion};
use linqrs::{distinct, hash_join, nested_loop_join, order_by, Query};

fn make_rows(rows: usize, keys: u64) -> Vec<(u64, u64)> {
    (0..rows as u64)
        .map(|i| (i.wrapping_mul(2654435761) % keys, i))
        .collect()
}

fn bench_joins(c: &mut Criterion) {
    let outer = make_rows(512, 64);
    let inner = make_rows(2048, 64);
    c.bench_function("join_nested_loop", |b| {
        b.iter(|| nested_loop_join(&&outer, &&inner, |o| o.0, |i| i.0, |o, i| o.1 + i.1).len())
    });
    c.bench_function("join_hash", |b| {
        b.iter(|| hash_join(&&outer, &&inner, |o| o.0, |i| i.0, |o, i| o.1 + i.1).len())
    });
}

fn bench_materializers(c: &mut Criterion) {
    let rows = make_rows(4096, 256);
    c.bench_function("distinct_keys", |b| {
        b.iter(|| distinct(&(&rows).select(|r| r.0)).len())
    });
    c.bench_function("order_by_key", |b| b.iter(|| order_by(&&rows, |r| r.0).len()));
}

criterion_group!(benches, bench_joins, bench_materializers);
criterion_main!(benches);
