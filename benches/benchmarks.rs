use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rfc_mediatype::*;

const TEST_CASES: &[(&str, &str)] = &[
    ("simple", "text/html"),
    ("with_charset", "text/html; charset=utf-8"),
    ("vendor_tree", "application/vnd.oai.openapi+json; version=3.0"),
    ("complex", "multipart/form-data; boundary=----WebKitFormBoundary7MA4YWxkTrZu0gW; charset=\"utf-8\""),
];

// Benchmark validation alone
fn bench_is_media_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_media_type");

    for (name, input) in TEST_CASES {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| is_media_type(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark full parsing into parts
fn bench_parse_media_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_media_type");

    for (name, input) in TEST_CASES {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse_media_type(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark content type extraction
fn bench_parse_content_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_content_type");

    for (name, input) in TEST_CASES {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse_content_type(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark matching against a list of accepted types
fn bench_matches_content_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("matches_content_type");

    let expected: Vec<MediaType> = [
        "application/json",
        "application/vnd.an-example",
        "text/plain",
        "text/html; charset=utf-8",
    ]
    .iter()
    .map(|s| MediaType::new(*s).unwrap())
    .collect();

    group.bench_function("cached", |b| {
        let input = MediaType::new("text/html; charset=UTF-8").unwrap();
        b.iter(|| matches_content_type(black_box(&input), &expected));
    });

    group.bench_function("uncached", |b| {
        b.iter(|| {
            let input = MediaType::new(black_box("text/html; charset=UTF-8")).unwrap();
            let expected: Vec<MediaType> = expected.iter().map(|e| MediaType::new(e.as_str()).unwrap()).collect();
            matches_content_type(&input, &expected)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_is_media_type,
    bench_parse_media_type,
    bench_parse_content_type,
    bench_matches_content_type
);

criterion_main!(benches);
