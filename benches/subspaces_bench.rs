use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use four_subspaces::matrix::matrix::Matrix;
use four_subspaces::random::seeded_matrix;
use four_subspaces::{four_subspaces_with, SubspaceConfig};

/// Square random matrices, sequential vs parallel extraction
fn bench_four_subspaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("four_subspaces");

    for &size in &[4usize, 8, 16] {
        let a = seeded_matrix(size, size, 9, 42).unwrap();
        for parallel in [false, true] {
            let config = SubspaceConfig::default()
                .with_timings(false)
                .with_parallel(parallel);
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, size), &a, |b, a| {
                b.iter(|| four_subspaces_with(black_box(a), &config).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_rref(c: &mut Criterion) {
    let a = seeded_matrix(12, 20, 9, 7).unwrap();
    c.bench_function("rref/12x20", |b| b.iter(|| black_box(&a).rref()));
}

criterion_group!(benches, bench_four_subspaces, bench_rref);
criterion_main!(benches);
