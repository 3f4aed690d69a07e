#[macro_use]
extern crate criterion;

use buddhabrot::{CountGrid, EscapeMask, Mandelbrot, PlaneMapper, RenderConfig, Scheme};
use buddhabrot::{Buddhabrot, MeanMode};
use criterion::Criterion;

fn classify(c: &mut Criterion) {
    c.bench_function("classify 160x100 @ 500", |b| {
        let plane = PlaneMapper::new(160, 100);
        let orbit = Mandelbrot::new(500);
        b.iter(|| EscapeMask::classify(&plane, &orbit).unwrap())
    });
}

fn accumulate(c: &mut Criterion) {
    c.bench_function("accumulate 160x100 @ 500", |b| {
        let plane = PlaneMapper::new(160, 100);
        let orbit = Mandelbrot::new(500);
        let mask = EscapeMask::classify(&plane, &orbit).unwrap();
        b.iter(|| {
            let mut grid = CountGrid::new(&plane).unwrap();
            grid.accumulate(&plane, &orbit, &mask);
            grid.max()
        })
    });
}

fn render(c: &mut Criterion) {
    c.bench_function("render 160x100 @ 500, percentile", |b| {
        let config = RenderConfig {
            width: 160,
            height: 100,
            iterations: 500,
            scheme: Scheme::Percentile,
            mean_mode: MeanMode::Truncated,
        };
        let renderer = Buddhabrot::new(config).unwrap();
        b.iter(|| renderer.render().unwrap())
    });
}

criterion_group!(benches, classify, accumulate, render);
criterion_main!(benches);
