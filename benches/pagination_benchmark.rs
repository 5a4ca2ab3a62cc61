use criterion::{black_box, criterion_group, criterion_main, Criterion};

use amygdala::Directory;

fn bench_pagination(c: &mut Criterion) {
    let directory = Directory::builtin();
    let mut group = c.benchmark_group("Pagination");

    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("first_page", |b| {
        b.iter(|| directory.page(black_box(1), black_box(10)))
    });

    group.bench_function("last_page", |b| {
        b.iter(|| directory.page(black_box(4), black_box(10)))
    });

    group.bench_function("out_of_range", |b| {
        b.iter(|| directory.page(black_box(100), black_box(10)))
    });

    group.bench_function("whole_directory", |b| {
        b.iter(|| directory.page(black_box(1), black_box(31)))
    });

    group.finish();
}

criterion_group!(benches, bench_pagination);
criterion_main!(benches);
