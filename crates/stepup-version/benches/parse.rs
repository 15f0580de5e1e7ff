//! Parsing benchmarks for stepup-version.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stepup_version::{parse_banner, InstalledVersion};

fn bench_parse_banner(c: &mut Criterion) {
    let banner = "postgres (Greenplum Database) 6.21.3 build commit:f7ff4de5 (pg 9.4.26)";

    let mut group = c.benchmark_group("banner");
    group.bench_function("greenplum", |b| {
        b.iter(|| parse_banner(black_box(banner)))
    });
    group.finish();
}

fn bench_parse_compact(c: &mut Criterion) {
    c.bench_function("compact", |b| {
        b.iter(|| black_box("Cloudberry 1.5.2").parse::<InstalledVersion>())
    });
}

fn bench_compact_roundtrip(c: &mut Criterion) {
    let installed: InstalledVersion = "Greenplum 6.21.3".parse().unwrap();

    c.bench_function("compact_roundtrip", |b| {
        b.iter(|| {
            let text = black_box(&installed).to_string();
            text.parse::<InstalledVersion>().unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_parse_banner,
    bench_parse_compact,
    bench_compact_roundtrip
);
criterion_main!(benches);
