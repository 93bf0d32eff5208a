use bencher::{BenchCase, Payload, PayloadKind};
use bytes::BytesMut;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use http::StatusCode;
use micro_response::{ResponseModel, ServerIdent};
use std::hint::black_box;

static SMALL_JSON: Payload = Payload::new("small.json", PayloadKind::Json, include_str!("../resources/small.json"));
static LARGE_JSON: Payload = Payload::new("large.json", PayloadKind::Json, include_str!("../resources/large.json"));
static TABLE_HTML: Payload = Payload::new("table.html", PayloadKind::Html, include_str!("../resources/table.html"));
static LARGE_TEXT: Payload = Payload::new("large.json", PayloadKind::Text, include_str!("../resources/large.json"));

fn create_bench_cases() -> Vec<BenchCase> {
    vec![
        BenchCase::small("small_json", SMALL_JSON),
        BenchCase::large("large_json", LARGE_JSON),
        BenchCase::large("table_html", TABLE_HTML),
        BenchCase::large("large_text", LARGE_TEXT),
    ]
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("construction");

    for case in create_bench_cases() {
        group.throughput(Throughput::Bytes(case.payload().content().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            match case.payload().kind() {
                PayloadKind::Json => {
                    let value: serde_json::Value =
                        serde_json::from_str(case.payload().content()).expect("bench payload should be valid json");
                    b.iter(|| black_box(ResponseModel::json(StatusCode::OK, &value).expect("value should serialize")));
                }
                PayloadKind::Html | PayloadKind::Text => {
                    b.iter(|| black_box(case.payload().build(StatusCode::OK).expect("payload should build")));
                }
            }
        });
    }

    group.finish();
}

fn benchmark_write_step(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("write_step");

    for case in create_bench_cases() {
        let response = case.payload().build(StatusCode::OK).expect("payload should build");
        group.throughput(Throughput::Bytes(response.content().len()));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &response, |b, response| {
            b.iter_batched_ref(
                || BytesMut::with_capacity(response.body().len()),
                |buffer| {
                    let content = response.content();
                    if let Some(step) = content.write_step() {
                        step.write_to(buffer).expect("buffer writes are infallible");
                    }
                    black_box(buffer.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_headers(criterion: &mut Criterion) {
    let ident = ServerIdent::new("micro-bench", "1.0").expect("ident should be a valid header value");
    let response = ResponseModel::error("bench");

    criterion.bench_function("headers_global_ident", |b| b.iter(|| black_box(response.headers())));
    criterion.bench_function("headers_explicit_ident", |b| b.iter(|| black_box(response.headers_with(&ident))));
}

criterion_group!(payload, benchmark_construction, benchmark_write_step, benchmark_headers);
criterion_main!(payload);
