use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;

use lexorder::{compute_order, derive_constraints, infer_order, is_valid_order};

/// Builds a word list sorted under a shuffled hidden alphabet.
fn sorted_dictionary(word_count: usize, max_len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut alphabet: Vec<char> = ('a'..='z').collect();
    alphabet.shuffle(&mut rng);
    let rank = |c: char| alphabet.iter().position(|&s| s == c);

    let mut words: Vec<String> = (0..word_count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect()
        })
        .collect();
    words.sort_by(|a, b| {
        let ka: Vec<_> = a.chars().map(&rank).collect();
        let kb: Vec<_> = b.chars().map(&rank).collect();
        ka.cmp(&kb)
    });
    words
}

fn bench_order(c: &mut Criterion) {
    let words = sorted_dictionary(1_000, 12);
    let keys: Vec<&str> = words.iter().map(String::as_str).collect();
    let candidate = infer_order(&keys);

    c.bench_function("derive_constraints_1k", |b| {
        b.iter(|| derive_constraints(black_box(&keys)).unwrap())
    });

    let graph = derive_constraints(&keys).unwrap();
    c.bench_function("compute_order_1k", |b| {
        b.iter(|| compute_order(black_box(&graph)).unwrap())
    });

    c.bench_function("is_valid_order_1k", |b| {
        b.iter(|| is_valid_order(black_box(&keys), black_box(&candidate)))
    });
}

criterion_group!(benches, bench_order);
criterion_main!(benches);
