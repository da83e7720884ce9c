//! Benchmark – `stringbuilder::StringBuilder` edit paths
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stringbuilder::{StringBuilder, append_format};

/// Deterministic text of exactly `len` bytes with a `cat` every eight bytes,
/// so replacement has plenty of matches.
fn make_payload(len: usize) -> String {
    "the cat ".chars().cycle().take(len).collect()
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for &len in &[64usize, 4_096, 65_536] {
        let payload = make_payload(len);

        group.bench_with_input(BenchmarkId::new("bulk", len), &payload, |b, p| {
            b.iter(|| {
                let mut sb = StringBuilder::new();
                sb.append(black_box(p));
                black_box(sb.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("per_char", len), &payload, |b, p| {
            b.iter(|| {
                let mut sb = StringBuilder::new();
                for ch in black_box(p).chars() {
                    sb.append_char(ch);
                }
                black_box(sb.len());
            });
        });

        // Goes through the second formatting pass once `len` exceeds the
        // scratch area.
        group.bench_with_input(BenchmarkId::new("formatted", len), &payload, |b, p| {
            b.iter(|| {
                let mut sb = StringBuilder::new();
                append_format!(sb, "[{}]", black_box(p));
                black_box(sb.len());
            });
        });
    }
    group.finish();
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    for &len in &[4_096usize, 65_536] {
        let payload = make_payload(len);

        group.bench_with_input(BenchmarkId::new("insert_front", len), &payload, |b, p| {
            b.iter(|| {
                let mut sb = StringBuilder::from(p.as_str());
                for _ in 0..16 {
                    sb.insert(0, "xyz");
                }
                black_box(sb.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("replace_equal", len), &payload, |b, p| {
            b.iter(|| {
                let mut sb = StringBuilder::from(p.as_str());
                sb.replace("cat", "dog");
                black_box(sb.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("replace_grow", len), &payload, |b, p| {
            b.iter(|| {
                let mut sb = StringBuilder::from(p.as_str());
                sb.replace("cat", "tiger");
                black_box(sb.len());
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_append, bench_edits }
criterion_main!(benches);
