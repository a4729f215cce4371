// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_geo_view::Viewport;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_locations(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0x4D45_5243_4154_4F52);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * 360.0 - 180.0, rng.next_f64() * 170.0 - 85.0))
        .collect()
}

fn make_viewport(rotation: f64) -> Viewport {
    let mut vp = Viewport::new();
    vp.set_dimensions(Rect::new(0.0, 0.0, 1920.0, 1080.0))
        .set_translation(Vec2::new(960.0, 540.0))
        .set_zoom(16.0)
        .set_rotation(rotation);
    vp
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("geo_view/project");
    let locs = gen_locations(4_096);
    group.throughput(Throughput::Elements(locs.len() as u64));
    for (label, rotation) in [("unrotated", 0.0), ("rotated", 0.6)] {
        let vp = make_viewport(rotation);
        group.bench_function(BenchmarkId::new("project", label), |b| {
            b.iter(|| {
                for &loc in &locs {
                    black_box(vp.project(loc, true));
                }
            });
        });
        let pixels: Vec<Point> = locs.iter().map(|&l| vp.project(l, true)).collect();
        group.bench_function(BenchmarkId::new("unproject", label), |b| {
            b.iter(|| {
                for &px in &pixels {
                    black_box(vp.unproject(px, true));
                }
            });
        });
    }
    group.finish();
}

fn bench_extent(c: &mut Criterion) {
    let mut group = c.benchmark_group("geo_view/extent");
    let mut vp = make_viewport(0.3);
    group.bench_function("extent", |b| {
        b.iter(|| black_box(vp.extent()));
    });
    group.bench_function("pan_zoom_extent", |b| {
        let mut step = 0.0;
        b.iter(|| {
            step += 1.0;
            vp.set_translation(Vec2::new(960.0 + step, 540.0 - step))
                .set_zoom(12.0 + (step % 8.0));
            black_box(vp.extent());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_project, bench_extent);
criterion_main!(benches);
