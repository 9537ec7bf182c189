#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use bytetree::BytesTree;

/// Deterministic chunk so every size benches identical content.
fn chunk(i: usize) -> Vec<u8> {
    vec![(i % 251) as u8; 8]
}

fn deep_chain(fragments: usize) -> BytesTree {
    (0..fragments).fold(BytesTree::new(), |acc, i| acc.append_bytes(chunk(i)))
}

fn bench_append_then_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_then_materialize");
    for fragments in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(fragments),
            &fragments,
            |b, &fragments| {
                b.iter(|| {
                    let tree = deep_chain(fragments);
                    black_box(tree.to_bytes())
                });
            },
        );
    }
    group.finish();
}

fn bench_wide_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_concat");
    for fragments in [1_000usize, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(fragments),
            &fragments,
            |b, &fragments| {
                b.iter(|| {
                    let tree = BytesTree::concat(
                        (0..fragments).map(|i| BytesTree::from_bytes(chunk(i))).collect(),
                    );
                    black_box(tree.to_bytes())
                });
            },
        );
    }
    group.finish();
}

fn bench_byte_len(c: &mut Criterion) {
    let tree = deep_chain(100_000);
    c.bench_function("byte_len_deep_100k", |b| {
        b.iter(|| black_box(tree.byte_len()));
    });
}

criterion_group!(
    benches,
    bench_append_then_materialize,
    bench_wide_concat,
    bench_byte_len
);
criterion_main!(benches);
