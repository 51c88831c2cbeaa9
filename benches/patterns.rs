//! Benchmarks for the stripegen pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stripegen::{generate, Colour, Effect, VectorDocument};

fn palette() -> Vec<Colour> {
    vec![
        Colour::rgb(255, 107, 107),
        Colour::rgb(78, 205, 196),
        Colour::rgb(69, 183, 209),
    ]
}

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    let diagonal = Effect::Diagonal {
        colours: palette(),
        angle: 45.0,
        stripe_width: 40,
    };
    let wave = Effect::Wave {
        colours: palette(),
        wave_height: 50,
    };
    let graduated = Effect::Graduated {
        base: Colour::rgb(255, 107, 107),
        stripes: 10,
    };
    let blocks = Effect::Blocks {
        colours: palette(),
        spacing: 20,
    };

    group.bench_function("diagonal_800x600", |b| {
        b.iter(|| generate(black_box(&diagonal), 800, 600).unwrap())
    });

    group.bench_function("wave_800x600", |b| {
        b.iter(|| generate(black_box(&wave), 800, 600).unwrap())
    });

    group.bench_function("graduated_800x600", |b| {
        b.iter(|| generate(black_box(&graduated), 800, 600).unwrap())
    });

    group.bench_function("blocks_800x600", |b| {
        b.iter(|| generate(black_box(&blocks), 800, 600).unwrap())
    });

    group.finish();
}

// -- Export benchmarks --

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    let wave = Effect::Wave {
        colours: palette(),
        wave_height: 50,
    };
    let pattern = generate(&wave, 800, 600).unwrap();

    group.bench_function("trace_canvas_800x600", |b| {
        b.iter(|| VectorDocument::trace_canvas(black_box(&pattern.canvas)))
    });

    group.bench_function("encode_png_800x600", |b| {
        b.iter(|| stripegen::encode_png(black_box(&pattern.canvas)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_export);
criterion_main!(benches);
