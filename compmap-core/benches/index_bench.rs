//! Criterion benchmarks for index construction and chart derivation.
//!
//! Sizes cover the expected range of a loaded catalog (hundreds to low
//! thousands of entities).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use compmap_core::chart::shared_subs;
use compmap_core::{RelationIndex, SourceMapping};

// ── Helpers ──────────────────────────────────────────────────────────

/// `mains` mains, each with 12 subs drawn from a pool of `mains / 2` names,
/// with one duplicate per list.
fn make_source(mains: usize) -> SourceMapping {
    let pool = (mains / 2).max(1);
    (0..mains)
        .map(|m| {
            let mut subs: Vec<String> = (0..12).map(|k| format!("Sub{}", (m * 7 + k * 13) % pool)).collect();
            subs.push(subs[0].clone());
            (format!("Main{m}"), subs)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for size in [100usize, 1_000, 3_000] {
        let source = make_source(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| RelationIndex::build(black_box(source)))
        });
    }
    group.finish();
}

fn bench_shared_subs(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_subs");
    for size in [100usize, 1_000, 3_000] {
        let index = RelationIndex::build(&make_source(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| shared_subs(black_box(index)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_shared_subs);
criterion_main!(benches);
