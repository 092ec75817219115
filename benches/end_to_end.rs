use clap::Parser;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use daily_avg::cli::Args;
use daily_avg_domain::IndexKind;
use daily_avg_shared_kernel::Reading;
use daily_avg_usecase::fold_readings;
use std::hint::black_box;

fn synthetic_readings(days: u32, per_day: u32) -> Vec<Reading> {
    let mut readings = Vec::with_capacity((days * per_day) as usize);
    for n in 0..per_day {
        for day in 0..days {
            let key = format!("{:04}-{:02}-{:02}", 2000 + day / 336, day / 28 % 12 + 1, day % 28 + 1);
            readings.push(Reading::new(key, f64::from((day * 7 + n * 13) % 40) - 5.0));
        }
    }
    readings
}

fn benchmark_fold(c: &mut Criterion) {
    let readings = synthetic_readings(2_000, 4);
    let mut group = c.benchmark_group("fold_readings");
    for kind in [IndexKind::ByKey, IndexKind::ByValue, IndexKind::Chained] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &readings, |b, readings| {
            b.iter(|| {
                let index = fold_readings(kind, black_box(readings)).unwrap();
                black_box(index.len());
            })
        });
    }
    group.finish();
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_list", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["daily_avg", "-i", "by-value", "list", "a.jsonl"])).unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_fold, benchmark_cli_parsing);
criterion_main!(benches);
