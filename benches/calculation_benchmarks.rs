//! Performance benchmarks for the settlement engine.
//!
//! Covers a single `compute_all`, a report with its audit trace, batches of
//! settlements, and a full round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use liquidacion_engine::api::{AppState, create_router};
use liquidacion_engine::calculation::SettlementCalculator;
use liquidacion_engine::models::SettlementInput;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates the reference settlement input.
fn create_input(day: u32) -> SettlementInput {
    SettlementInput {
        exit_reason: "renuncia".to_string(),
        base_salary: Decimal::from(2_000_000),
        employment_start_date: "01/01/2023".to_string(),
        last_vacation_date: format!("{:02}/06/2023", day),
        accrued_vacation_days: 15,
    }
}

fn bench_compute_all(c: &mut Criterion) {
    let calculator = SettlementCalculator::default();
    let input = create_input(1);

    c.bench_function("compute_all", |b| {
        b.iter(|| calculator.compute_all(black_box(&input)).unwrap())
    });
}

fn bench_compute_report(c: &mut Criterion) {
    let calculator = SettlementCalculator::default();
    let input = create_input(1);

    c.bench_function("compute_report", |b| {
        b.iter(|| calculator.compute_report(black_box(&input)).unwrap())
    });
}

fn bench_batches(c: &mut Criterion) {
    let calculator = SettlementCalculator::default();
    let mut group = c.benchmark_group("batch_compute_all");

    for size in [100usize, 1000] {
        let inputs: Vec<SettlementInput> =
            (0..size).map(|i| create_input((i % 30) as u32 + 1)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(calculator.compute_all(input).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_http_round_trip(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(SettlementCalculator::default()));
    let body = serde_json::json!({
        "exit_reason": "renuncia",
        "base_salary": "2000000",
        "employment_start_date": "01/01/2023",
        "last_vacation_date": "01/06/2023",
        "accrued_vacation_days": 15
    })
    .to_string();

    c.bench_function("http_calculate", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_compute_all,
    bench_compute_report,
    bench_batches,
    bench_http_round_trip
);
criterion_main!(benches);
