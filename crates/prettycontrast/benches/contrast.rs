use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prettycontrast::{calculate, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("hex-to-rgb", |b| b.iter(|| hex_to_rgb(black_box("#aee8fb"))));
    group.bench_function("hex-to-rgb-fallback", |b| {
        b.iter(|| hex_to_rgb(black_box("not-a-color")))
    });
    group.bench_function("rgb-to-hex", |b| b.iter(|| rgb_to_hex(black_box([174, 232, 251]))));
    group.bench_function("rgb-to-hsl", |b| b.iter(|| rgb_to_hsl(black_box([174, 232, 251]))));
    group.bench_function("hsl-to-rgb", |b| b.iter(|| hsl_to_rgb(black_box([195.0, 88.0, 83.0]))));

    group.finish();

    let mut group = c.benchmark_group("contrast");

    group.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box([174, 232, 251]), black_box([30, 30, 30]), "small"))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
