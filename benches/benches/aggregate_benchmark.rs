//! Aggregation and dump throughput benchmarks.
//!
//! Run with: `cargo bench --package tickdump-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::TempDir;
use tickdump_bench::{bench_day, synthetic_ticks};
use tickdump_lib::prelude::*;

/// Tick densities per day: sparse (many gaps) to EURUSD-like.
const TICKS_PER_DAY: [usize; 3] = [1_000, 20_000, 100_000];

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in TICKS_PER_DAY {
        let ticks = synthetic_ticks(count);
        group.throughput(Throughput::Elements(count as u64));

        for timeframe in [Timeframe::Tick, Timeframe::MINUTE_1, Timeframe::HOUR_1] {
            group.bench_with_input(
                BenchmarkId::new(timeframe.to_string(), count),
                &ticks,
                |b, ticks| {
                    b.iter(|| aggregate("EURUSD", timeframe, PriceSource::Ask, ticks));
                },
            );
        }
    }

    group.finish();
}

fn dump_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dump");
    group.sample_size(20);

    let ticks = synthetic_ticks(100_000);
    let dir = TempDir::new().expect("temp dir");
    group.throughput(Throughput::Elements(ticks.len() as u64));

    for timeframe in [Timeframe::Tick, Timeframe::MINUTE_1] {
        let range = DateRange::single_day(bench_day());
        let config = DumpConfig::new("EURUSD", timeframe, range, dir.path());
        let mut dumper = Dumper::new(config).expect("valid config");
        dumper.append(bench_day(), &ticks).expect("sorted ticks");

        group.bench_function(BenchmarkId::new("csv", timeframe.to_string()), |b| {
            b.iter(|| dumper.dump().expect("dump"));
        });
    }

    group.finish();
}

criterion_group!(benches, aggregate_benchmark, dump_benchmark);
criterion_main!(benches);
