use criterion::{Criterion, criterion_group, criterion_main};
use hatfield_core::{FieldGenerator, RandomFieldGenerator, is_solvable};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [10, 50, 200] {
        group.bench_function(format!("{size}x{size}"), |b| {
            let mut generator = RandomFieldGenerator::from_seed(0);
            b.iter(|| generator.generate(black_box(size)).unwrap());
        });
    }
    group.finish();
}

fn bench_is_solvable(c: &mut Criterion) {
    let field = RandomFieldGenerator::from_seed(0).generate(200).unwrap();
    c.bench_function("is_solvable 200x200", |b| b.iter(|| is_solvable(black_box(&field))));
}

criterion_group!(benches, bench_generate, bench_is_solvable);
criterion_main!(benches);
