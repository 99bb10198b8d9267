//! Benchmarks for hash distances and word list lookup.
//!
//! Tests various scenarios:
//! - Weighted vs Hamming distance on precomputed hashes
//! - String distance (hashing included)
//! - Ranked lookup over word lists of increasing size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libeudex::commands::handlers::lookup::execute_lookup;
use libeudex::commands::{LookupParams, Metric};
use libeudex::{distance, hamming_distance, string_distance, Hash};

// ============================================================================
// Test Data Generation
// ============================================================================

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        ("identical", "meyer", "meyer"),
        ("vowel_swap", "maier", "meyer"),
        ("first_letter", "horse", "norse"),
        ("suffix", "schmid", "schmidt"),
        ("different", "youtube", "reddit"),
        ("latin1", "möier", "meyer"),
        ("long", "antidisestablishmentarianism", "antidisestablishmentarian"),
    ]
}

fn generate_word_list(count: usize) -> Vec<String> {
    const SYLLABLES: [&str; 10] = ["me", "yer", "mai", "mil", "ler", "sch", "mid", "ro", "bert", "son"];

    (0..count)
        .map(|i| {
            let mut n = i;
            let mut word = String::new();
            for _ in 0..3 {
                word.push_str(SYLLABLES[n % SYLLABLES.len()]);
                n /= SYLLABLES.len();
            }
            word
        })
        .collect()
}

// ============================================================================
// Raw Hash Distances
// ============================================================================

fn bench_hash_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance/hash");

    for (name, source, target) in generate_test_pairs() {
        let (a, b) = (Hash::new(source).raw(), Hash::new(target).raw());

        group.bench_with_input(BenchmarkId::new("weighted", name), &(a, b), |bench, &(a, b)| {
            bench.iter(|| distance(black_box(a), black_box(b)));
        });
        group.bench_with_input(BenchmarkId::new("hamming", name), &(a, b), |bench, &(a, b)| {
            bench.iter(|| hamming_distance(black_box(a), black_box(b)));
        });
    }

    group.finish();
}

// ============================================================================
// String Distances
// ============================================================================

fn bench_string_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance/string");

    for (name, source, target) in generate_test_pairs() {
        let size = source.len() + target.len();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| string_distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Lookup
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000, 10_000, 100_000] {
        let words = generate_word_list(size);
        group.throughput(Throughput::Elements(size as u64));

        for metric in [Metric::Weighted, Metric::Hamming] {
            let mut params = LookupParams::new("meyermiller");
            params.metric = metric;

            group.bench_with_input(
                BenchmarkId::new(metric.to_string(), size),
                &words,
                |b, words| {
                    b.iter(|| execute_lookup(black_box(words), &params));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_hash_distance, bench_string_distance, bench_lookup);
criterion_main!(benches);
