use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use proxhash::{GridSampler, Point, ProximityCover, compress, expand_to};

fn benchmark_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    let sampler = GridSampler::new();
    let center = Point::new(-74.0060, 40.7128);

    for radius in [100.0, 1_000.0, 5_000.0] {
        group.bench_with_input(
            BenchmarkId::new("precision_7", radius as u64),
            &radius,
            |b, &radius| b.iter(|| sampler.sample(black_box(&center), radius, 7).unwrap()),
        );
    }

    group.bench_function("precision_9_200m", |b| {
        b.iter(|| sampler.sample(black_box(&center), 200.0, 9).unwrap())
    });

    group.finish();
}

fn benchmark_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression");

    // Fully mergeable tree
    let tree = expand_to("dr5r", 3);
    group.bench_function("full_tree_32768", |b| {
        b.iter(|| compress(black_box(&tree), 4, 7).unwrap())
    });

    // Realistic sampled cover with duplicates and ragged edges
    let samples = GridSampler::new()
        .sample(&Point::new(-74.0060, 40.7128), 2_000.0, 8)
        .unwrap();
    group.bench_function("sampled_cover_2km", |b| {
        b.iter(|| compress(black_box(&samples), 3, 7).unwrap())
    });

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let cover = ProximityCover::builder()
        .precision(7)
        .compression(3, 7)
        .build()
        .unwrap();
    let center = Point::new(116.334255, 40.027400);

    c.bench_function("pipeline_1km", |b| {
        b.iter(|| cover.query(black_box(&center), 1_000.0).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_sampling,
    benchmark_compression,
    benchmark_pipeline
);
criterion_main!(benches);
