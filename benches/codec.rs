use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_flatjson::{decode, encode, encode_map, from_str, FlatMap, FlatValue};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    karma: i64,
}

fn sample_map(size: usize) -> FlatMap {
    (0..size)
        .map(|i| {
            let value = if i % 2 == 0 {
                FlatValue::Integer(i as i64 * 7919)
            } else {
                FlatValue::Text(format!("user_{} lorem ipsum dolor sit amet", i))
            };
            (format!("key_{}", i), value)
        })
        .collect()
}

fn benchmark_encode_struct(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        karma: -4,
    };

    c.bench_function("encode_struct", |b| b.iter(|| encode(black_box(&user))));
}

fn benchmark_decode_struct(c: &mut Criterion) {
    let text = r#"{"id": 123, "name": "Alice", "email": "alice@example.com", "karma": -4}"#;

    c.bench_function("decode_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_map_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_map");

    for size in [10, 100, 1_000, 10_000].iter() {
        let map = sample_map(*size);
        let text = encode_map(&map);

        group.bench_with_input(BenchmarkId::new("encode", size), &map, |b, map| {
            b.iter(|| encode_map(black_box(map)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_struct,
    benchmark_decode_struct,
    benchmark_map_sizes
);
criterion_main!(benches);
