//! # Bloom Filter Benchmarks
//!
//! Claims to validate:
//! - `add`: O(k) hash computations
//! - `check`: O(k) hash computations, stopping at the first unset bit
//! - Parameter calculation: well under 1μs
//!
//! Run with:
//! ```bash
//! cargo bench --package bloomfilter --bench bloom_benchmarks
//! ```

use bloomfilter::domain::optimal_parameters;
use bloomfilter::BloomFilter;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

/// Random 32-byte keys, the shape of typical dedup hashes
fn generate_keys(count: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let mut key = vec![0u8; 32];
            rng.fill(&mut key[..]);
            key
        })
        .collect()
}

/// Keys sharing a long common prefix, differing only in the last 4 bytes
fn generate_adversarial_keys(count: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    let prefix: [u8; 28] = rng.gen();

    (0..count)
        .map(|i| {
            let mut key = vec![0u8; 32];
            key[..28].copy_from_slice(&prefix);
            key[28..].copy_from_slice(&(i as u32).to_le_bytes());
            key
        })
        .collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/add");
    group.measurement_time(Duration::from_secs(5));

    // Stricter rates mean more hash functions per add.
    for eps in [0.1, 0.01, 0.0001] {
        let mut filter = match BloomFilter::new(10_000, eps) {
            Ok(filter) => filter,
            Err(_) => continue,
        };
        let key = generate_keys(1).remove(0);
        group.bench_with_input(
            BenchmarkId::new("single_add_k", filter.hash_count()),
            &key,
            |b, key| b.iter(|| filter.add(black_box(key))),
        );
    }

    let keys = generate_keys(10_000);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("bulk_add_10000", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(10_000, 0.01).unwrap();
            for key in &keys {
                filter.add(black_box(key));
            }
            black_box(filter.bits_set())
        });
    });

    let adversarial = generate_adversarial_keys(10_000);
    group.bench_function("bulk_add_shared_prefix_10000", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(10_000, 0.01).unwrap();
            for key in &adversarial {
                filter.add(black_box(key));
            }
            black_box(filter.bits_set())
        });
    });

    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/check");
    group.measurement_time(Duration::from_secs(5));

    let keys = generate_keys(10_000);
    let mut filter = BloomFilter::new(keys.len(), 0.01).unwrap();
    for key in &keys {
        filter.add(key);
    }

    group.bench_function("check_present", |b| {
        let target = &keys[keys.len() / 2];
        b.iter(|| black_box(filter.check(black_box(target))))
    });

    let absent = generate_keys(1_000);
    group.throughput(Throughput::Elements(absent.len() as u64));
    group.bench_function("check_absent_1000", |b| {
        b.iter(|| absent.iter().filter(|key| filter.check(black_box(key))).count())
    });

    group.finish();
}

fn bench_parameters(c: &mut Criterion) {
    c.bench_function("bloom/optimal_parameters", |b| {
        b.iter(|| optimal_parameters(black_box(1_000_000), black_box(0.001)))
    });
}

criterion_group!(benches, bench_add, bench_check, bench_parameters);
criterion_main!(benches);
