//! Performance benchmarks for package interpretation
//!
//! Batches mix all three workout types plus unknown labels so both the
//! report and diagnostic paths are measured.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitcalc::{interpret, Driver, OutputFormat, Package};

fn create_package_batch(size: usize) -> Vec<Package> {
    (0..size)
        .map(|i| match i % 4 {
            0 => Package::new("RUN", vec![15000.0 + i as f64, 1.0, 75.0]),
            1 => Package::new("WLK", vec![9000.0, 1.5, 75.0, 180.0]),
            2 => Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, (i % 60) as f64]),
            _ => Package::new("XYZ", vec![1.0, 2.0, 3.0]),
        })
        .collect()
}

fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("Interpret");

    for (label, data) in [
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ] {
        group.bench_with_input(BenchmarkId::new("interpret", label), &data, |b, data| {
            b.iter(|| interpret(black_box(label), black_box(data)));
        });
    }

    group.finish();
}

fn bench_batch_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Processing");

    for &size in &[10, 1000, 100_000] {
        let packages = create_package_batch(size);
        group.throughput(Throughput::Elements(size as u64));

        for parallel in [false, true] {
            let driver = Driver::new(OutputFormat::Text).with_parallel(parallel);
            let name = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(name, size), &packages, |b, packages| {
                b.iter(|| {
                    let mut sink = std::io::sink();
                    driver.run(packages, &mut sink)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_interpret, bench_batch_processing);

criterion_main!(benches);
