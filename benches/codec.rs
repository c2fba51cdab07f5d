//! Encode and decode benchmarks
//!
//! Measures the full pipeline for small and larger payloads, plus the
//! rejection path for a token signed with a different key.

use ajwt::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

mod helpers {
    use ajwt::Payload;
    use serde_json::json;

    pub fn small_payload() -> Payload {
        let mut payload = Payload::new();
        payload.insert("user".into(), json!("user123"));
        payload.insert("role".into(), json!("admin"));
        payload
    }

    pub fn large_payload() -> Payload {
        let mut payload = small_payload();
        for i in 0..50 {
            payload.insert(format!("field_{i}"), json!({"index": i, "label": "välue/ü"}));
        }
        payload
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let encoder = Encoder::new("bench-secret");

    {
        let payload = helpers::small_payload();
        group.bench_function("small", |b| {
            b.iter(|| encoder.encode(black_box(&payload)).unwrap());
        });
    }

    {
        let payload = helpers::large_payload();
        group.bench_function("large", |b| {
            b.iter(|| encoder.encode(black_box(&payload)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let encoder = Encoder::new("bench-secret");
    let decoder = Decoder::new("bench-secret")
        .validate(Validation::new().require("user").validity(3600))
        .build();

    {
        let token = encoder.encode(&helpers::small_payload()).unwrap();
        group.bench_function("small", |b| {
            b.iter(|| decoder.decode(black_box(&token)).unwrap());
        });
    }

    {
        let token = encoder.encode(&helpers::large_payload()).unwrap();
        group.bench_function("large", |b| {
            b.iter(|| decoder.decode(black_box(&token)).unwrap());
        });
    }

    {
        let token = Encoder::new("other-secret")
            .encode(&helpers::small_payload())
            .unwrap();
        group.bench_function("wrong_key", |b| {
            b.iter(|| decoder.decode(black_box(&token)).unwrap_err());
        });
    }

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let key = SecretKey::from("bench-secret");
    let bytes = json!({"user": "user123", "timestamp": 1_700_000_000}).to_string();

    c.bench_function("sign", |b| {
        b.iter(|| signer::sign(black_box(bytes.as_bytes()), &key));
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_sign);
criterion_main!(benches);
