use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use closed_syncmers::batch::count_batch;
use closed_syncmers::kmer::{canonical_hash, closed_syncmers, compute_closed_syncmers_naive, CanonicalHashes};
use closed_syncmers::synthetic::{random_sequence, random_sequences};
use closed_syncmers::SyncmerParams;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark deque selection against the brute-force scan
fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_syncmers");

    let mut rng = StdRng::seed_from_u64(42);
    let sequence = random_sequence(&mut rng, 10_000);
    group.throughput(Throughput::Bytes(sequence.len() as u64));

    // Window width is what separates O(N) from O(N * w)
    for (k, s) in [(15, 5), (31, 15), (100, 20)] {
        let params = SyncmerParams::new(k, s).unwrap();

        group.bench_with_input(
            BenchmarkId::new("deque", format!("k{}_s{}", k, s)),
            &sequence,
            |b, seq| b.iter(|| black_box(closed_syncmers(seq, &params).count())),
        );

        group.bench_with_input(
            BenchmarkId::new("naive", format!("k{}_s{}", k, s)),
            &sequence,
            |b, seq| b.iter(|| black_box(compute_closed_syncmers_naive(seq, k, s).map(|r| r.len()))),
        );
    }

    group.finish();
}

/// Benchmark rolling canonical hashing vs recomputation
fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_hashing");

    let mut rng = StdRng::seed_from_u64(7);
    let sequence = random_sequence(&mut rng, 10_000);
    let s = 40;

    group.throughput(Throughput::Bytes(sequence.len() as u64));

    group.bench_function("rolling", |b| {
        b.iter(|| {
            let count = CanonicalHashes::new(&sequence, s).map(|it| it.count());
            black_box(count)
        });
    });

    group.bench_function("naive_recompute", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for i in 0..=sequence.len() - s {
                if canonical_hash(&sequence[i..i + s]).is_some() {
                    count += 1;
                }
            }
            black_box(count)
        });
    });

    group.finish();
}

/// Benchmark sequential vs rayon across many sequences
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    let params = SyncmerParams::new(2000, 40).unwrap();
    for num_seqs in [100, 1000] {
        let mut rng = StdRng::seed_from_u64(num_seqs as u64);
        let sequences = random_sequences(&mut rng, num_seqs, 10_000);
        let total_bases: usize = sequences.iter().map(|s| s.len()).sum();

        group.throughput(Throughput::Bytes(total_bases as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", num_seqs),
            &sequences,
            |b, seqs| {
                b.iter(|| {
                    let total: usize = seqs.iter().map(|s| closed_syncmers(s, &params).count()).sum();
                    black_box(total)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", num_seqs),
            &sequences,
            |b, seqs| b.iter(|| black_box(count_batch(seqs, &params))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_selection, bench_hashing, bench_batch);
criterion_main!(benches);
