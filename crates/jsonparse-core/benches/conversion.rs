//! Conversion throughput: uniform vectors, null-bearing vectors and mixed
//! records, each through the full text path.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn int_array(n: usize) -> String {
    let items: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    format!("[{}]", items.join(","))
}

fn sparse_double_array(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| if i % 7 == 0 { "null".to_string() } else { format!("{}.5", i) })
        .collect();
    format!("[{}]", items.join(","))
}

fn records(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id":{i},"name":"user{i}","score":{i}.25,"tags":["a","b",null],"extra":[1,"x",{{"k":true}}]}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_json");
    for (name, input) in [
        ("int_array_10k", int_array(10_000)),
        ("sparse_double_array_10k", sparse_double_array(10_000)),
        ("records_1k", records(1_000)),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| jsonparse_core::from_json(black_box(&input)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
