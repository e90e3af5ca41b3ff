use criterion::{Criterion, criterion_group, criterion_main};
use filter_kit::FilterEntry;
use std::hint::black_box;

fn benchmark_classification(c: &mut Criterion) {
    c.bench_function("classify_contains", |b| {
        b.iter(|| black_box(FilterEntry::new(black_box("*needle*"))))
    });
}

fn benchmark_matching(c: &mut Criterion) {
    let filter = FilterEntry::new("*log*");
    let names: Vec<String> = (0..256).map(|i| format!("file_{i:03}.log")).collect();
    c.bench_function("match_256_names", |b| {
        b.iter(|| {
            let hits = names.iter().filter(|name| filter.matches(name)).count();
            black_box(hits)
        })
    });
}

criterion_group!(benches, benchmark_classification, benchmark_matching);
criterion_main!(benches);
