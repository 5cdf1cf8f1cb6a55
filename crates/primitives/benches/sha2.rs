//! Digest engine throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tessera_primitives::hash::{HashFunction, Sha224, Sha256};

// Patterned input so the message cannot fold into a constant
fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2-oneshot");

    for size in [64usize, 256, 1024, 8192, 65536, 1 << 20] {
        let data = message(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("SHA-256", size), &data, |b, data| {
            b.iter(|| Sha256::digest(black_box(data)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("SHA-224", size), &data, |b, data| {
            b.iter(|| Sha224::digest(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2-streaming");

    // One megabyte absorbed in cache-sized pieces
    let chunk = message(4096);
    let chunks = (1 << 20) / chunk.len();
    group.throughput(Throughput::Bytes(1 << 20));

    group.bench_function("SHA-256/1MB-chunked", |b| {
        b.iter(|| {
            let mut hasher = Sha256::new();
            for _ in 0..chunks {
                hasher.update(black_box(&chunk)).unwrap();
            }
            hasher.finalize().unwrap()
        });
    });

    // Reusing one engine across iterations leans on the reset that
    // finalization performs instead of constructing fresh state.
    group.bench_function("SHA-256/1MB-engine-reuse", |b| {
        let mut hasher = Sha256::new();
        b.iter(|| {
            for _ in 0..chunks {
                hasher.update(black_box(&chunk)).unwrap();
            }
            hasher.finalize().unwrap()
        });
    });

    group.bench_function("SHA-224/1MB-chunked", |b| {
        b.iter(|| {
            let mut hasher = Sha224::new();
            for _ in 0..chunks {
                hasher.update(black_box(&chunk)).unwrap();
            }
            hasher.finalize().unwrap()
        });
    });

    group.finish();
}

fn bench_small_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2-small");

    // Fixed costs dominate below one block
    group.bench_function("SHA-256/empty", |b| {
        b.iter(|| Sha256::digest(black_box(&[])).unwrap());
    });

    let single_block = message(55);
    group.bench_function("SHA-256/55-bytes", |b| {
        b.iter(|| Sha256::digest(black_box(&single_block)).unwrap());
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2-verify");

    for size in [1024usize, 1 << 20] {
        let data = message(size);
        let digest = Sha256::digest(&data).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Sha256::verify(black_box(data), digest.as_ref()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_oneshot,
    bench_streaming,
    bench_small_inputs,
    bench_verify
);
criterion_main!(benches);
