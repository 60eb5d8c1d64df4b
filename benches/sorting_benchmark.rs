use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use linesort::core::CodeUnit;
use linesort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn random_text(rng: &mut impl Rng, count: usize, prefix: &str) -> Vec<CodeUnit> {
    let mut units = Vec::new();
    for _ in 0..count {
        units.extend(prefix.encode_utf16());
        let len = rng.random_range(5..20);
        for _ in 0..len {
            let c = if rng.random_bool(0.15) {
                ' '
            } else {
                rng.random_range('a'..='z')
            };
            units.push(c as CodeUnit);
        }
        units.push(0x000A);
    }
    units
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let table = LineTable::from_units(random_text(&mut rng, 10_000, ""));
    let owned: Vec<String> = table.to_strings();

    group.bench_function("sort_forward", |b| {
        b.iter_batched(
            || table.clone(),
            |mut t| black_box(&mut t).sort_forward(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_backward", |b| {
        b.iter_batched(
            || table.clone(),
            |mut t| black_box(&mut t).sort_backward(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("restore snapshot", |b| {
        let mut sorted = table.clone();
        sorted.sort_forward();
        let snapshot = sorted.snapshot();
        b.iter_batched(
            || table.clone(),
            |mut t| t.restore(black_box(&snapshot)),
            BatchSize::SmallInput,
        )
    });

    // Baseline without ignorable skipping
    group.bench_function("slice::sort (String)", |b| {
        b.iter_batched(
            || owned.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_long_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Long Common Prefix");
    group.sample_size(10);

    let mut rng = rand::rng();
    let prefix = "my uncle, man of firm convictions - ";
    let table = LineTable::from_units(random_text(&mut rng, 10_000, prefix));

    group.bench_function("sort_forward", |b| {
        b.iter_batched(
            || table.clone(),
            |mut t| black_box(&mut t).sort_forward(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_backward", |b| {
        b.iter_batched(
            || table.clone(),
            |mut t| black_box(&mut t).sort_backward(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_lines, bench_long_prefix);
criterion_main!(benches);
