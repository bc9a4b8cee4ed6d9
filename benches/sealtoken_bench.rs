#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

use sealtoken::keys::{KeySet, KeySetRegistry};
use sealtoken::open::open;
use sealtoken::seal::seal;

fn bench_small_payload(c: &mut Criterion) {
    let keyset = KeySet::generate("bench");
    let registry: KeySetRegistry = [keyset.clone()].into_iter().collect();
    let payload = json!({"hello": "world", "foo": "bar"});
    let token = seal(&payload, &keyset).expect("seal");

    c.bench_function("seal_small", |b| {
        b.iter(|| seal(&payload, &keyset).expect("seal"));
    });
    c.bench_function("open_small", |b| {
        b.iter(|| open(&token, &registry).expect("open"));
    });
}

fn bench_kilobyte_payload(c: &mut Criterion) {
    let keyset = KeySet::generate("bench");
    let registry: KeySetRegistry = [keyset.clone()].into_iter().collect();
    let payload = json!({"data": "x".repeat(1024)});
    let token = seal(&payload, &keyset).expect("seal");

    c.bench_function("seal_1k", |b| {
        b.iter(|| seal(&payload, &keyset).expect("seal"));
    });
    c.bench_function("open_1k", |b| {
        b.iter(|| open(&token, &registry).expect("open"));
    });
}

criterion_group!(benches, bench_small_payload, bench_kilobyte_payload);
criterion_main!(benches);
